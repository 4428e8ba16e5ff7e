use egui::{Color32, Visuals};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Base visuals with the dashboard's rounded corners and hover strokes.
    pub fn visuals(&self) -> Visuals {
        let mut vis = match self {
            Theme::Dark => Visuals::dark(),
            Theme::Light => Visuals::light(),
        };
        vis.window_corner_radius = egui::CornerRadius::same(8);
        vis.widgets.noninteractive.corner_radius = egui::CornerRadius::same(6);
        vis.widgets.inactive.corner_radius = egui::CornerRadius::same(6);
        vis.widgets.hovered.corner_radius = egui::CornerRadius::same(6);
        vis.widgets.active.corner_radius = egui::CornerRadius::same(6);
        vis.widgets.open.corner_radius = egui::CornerRadius::same(6);
        vis.widgets.hovered.bg_stroke = egui::Stroke::new(1.5, Color32::from_gray(160));
        vis.widgets.active.bg_stroke = egui::Stroke::new(2.0, Color32::from_gray(200));
        vis
    }

    /// Text color for validation and export errors.
    pub fn error_color(&self) -> Color32 {
        match self {
            Theme::Dark => Color32::from_rgb(255, 80, 80),
            Theme::Light => Color32::from_rgb(200, 30, 30),
        }
    }

    /// Label for the button that switches to the other theme.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Dark => "Light Mode",
            Theme::Light => "Dark Mode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
    }

    #[test]
    fn visuals_follow_theme() {
        assert!(Theme::Dark.visuals().dark_mode);
        assert!(!Theme::Light.visuals().dark_mode);
    }
}
