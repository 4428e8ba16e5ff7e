/// View state of the time-series plot. Not part of any case's configuration.
#[derive(Debug, Clone)]
pub struct ChartState {
    pub title: String,
    pub show_legend: bool,
    /// Set by "Fit View"; consumed by the next frame's plot.
    pub reset_requested: bool,
    /// Screen rect of the chart panel (set each frame for screenshot cropping).
    pub last_frame_rect: Option<egui::Rect>,
}

impl ChartState {
    pub fn new() -> Self {
        Self {
            title: "Time Series Plot".to_string(),
            show_legend: true,
            reset_requested: false,
            last_frame_rect: None,
        }
    }

    pub fn request_reset(&mut self) {
        self.reset_requested = true;
    }

    /// Returns whether a reset was pending and clears it.
    pub fn take_reset(&mut self) -> bool {
        std::mem::take(&mut self.reset_requested)
    }
}

impl Default for ChartState {
    fn default() -> Self {
        Self::new()
    }
}
