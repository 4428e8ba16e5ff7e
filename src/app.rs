use std::sync::Arc;
use eframe::egui;
use crate::data::export;
use crate::error::CaseError;
use crate::processing::cases::{self, CaseOutcome};
use crate::state::app_state::{AppState, VERSION};
use crate::state::case_config::CaseConfig;
use crate::ui::case_sidebar;
use crate::ui::chart_panel::{self, ChartAction};
use crate::ui::metrics_table::{self, TableAction};

/// What to do when a screenshot arrives.
enum PendingScreenshot {
    SaveFile,
    Clipboard,
}

/// The main dashboard application.
pub struct DashboardApp {
    pub state: AppState,
    /// Configs the current `outcomes` were computed from.
    evaluated: Vec<Result<CaseConfig, CaseError>>,
    /// One entry per case, in sidebar order.
    outcomes: Vec<Result<CaseOutcome, CaseError>>,
    /// An error message shown in the footer until dismissed.
    pub error_message: Option<String>,
    /// Whether to show the About window (hidden menu).
    pub show_about: bool,
    pending_screenshot: Option<PendingScreenshot>,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let state = AppState::new();

        let ctx = &cc.egui_ctx;
        let mut style = (*ctx.style()).clone();

        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::proportional(15.0),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::proportional(14.5),
        );
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::proportional(22.0),
        );
        style.text_styles.insert(
            egui::TextStyle::Monospace,
            egui::FontId::monospace(13.5),
        );

        style.spacing.button_padding = egui::vec2(10.0, 5.0);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.window_margin = egui::Margin::same(12);
        style.spacing.slider_width = 180.0;

        ctx.set_style(style);
        ctx.set_visuals(state.theme.visuals());

        let mut app = Self {
            state,
            evaluated: Vec::new(),
            outcomes: Vec::new(),
            error_message: None,
            show_about: false,
            pending_screenshot: None,
        };
        app.refresh_outcomes();
        app
    }

    /// Recompute series and metrics if any case's config changed since the last pass.
    fn refresh_outcomes(&mut self) {
        let configs = self.state.case_configs();
        if configs == self.evaluated && self.outcomes.len() == configs.len() {
            return;
        }

        for (index, config) in configs.iter().enumerate() {
            if let Err(e) = config {
                tracing::warn!("{} is invalid: {e}", cases::case_label(index));
            }
        }

        self.outcomes = cases::evaluate_inputs(&configs);
        self.evaluated = configs;
        tracing::debug!("Recomputed {} cases", self.outcomes.len());
    }

    /// Export one case's series to CSV via a save dialog.
    fn export_case_csv(&mut self, index: usize) {
        let outcome = match self.outcomes.get(index) {
            Some(Ok(outcome)) => outcome,
            _ => return,
        };

        if let Some(path) = rfd::FileDialog::new()
            .set_file_name(export::export_file_name(index))
            .add_filter("CSV Files", &["csv"])
            .save_file()
        {
            match export::export_series_file(&outcome.series, &path) {
                Ok(()) => tracing::info!("Exported {} to {:?}", outcome.label, path),
                Err(e) => {
                    tracing::error!("Failed to export {}: {e}", outcome.label);
                    self.error_message = Some(format!("Failed to export {}: {e}", outcome.label));
                }
            }
        }
    }

    /// Crop the screenshot to the chart panel and save or copy it.
    fn handle_screenshot(&mut self, ctx: &egui::Context, action: PendingScreenshot, color_image: &egui::ColorImage) {
        let ppp = ctx.pixels_per_point();
        let full_w = color_image.width();
        let full_h = color_image.height();

        let (rgba, width, height) = if let Some(rect) = self.state.chart.last_frame_rect {
            let x0 = ((rect.left() * ppp) as usize).min(full_w);
            let y0 = ((rect.top() * ppp) as usize).min(full_h);
            let x1 = ((rect.right() * ppp).ceil() as usize).min(full_w);
            let y1 = ((rect.bottom() * ppp).ceil() as usize).min(full_h);
            let cw = x1.saturating_sub(x0);
            let ch = y1.saturating_sub(y0);
            let mut cropped = Vec::with_capacity(cw * ch * 4);
            for row in y0..y1 {
                for col in x0..x1 {
                    let c = color_image.pixels[row * full_w + col];
                    cropped.extend_from_slice(&[c.r(), c.g(), c.b(), c.a()]);
                }
            }
            (cropped, cw, ch)
        } else {
            let rgba: Vec<u8> = color_image
                .pixels
                .iter()
                .flat_map(|c| [c.r(), c.g(), c.b(), c.a()])
                .collect();
            (rgba, full_w, full_h)
        };

        match action {
            PendingScreenshot::SaveFile => {
                if let Some(path) = rfd::FileDialog::new()
                    .set_file_name("time_series_plot.png")
                    .add_filter("PNG Image", &["png"])
                    .save_file()
                {
                    match image::RgbaImage::from_raw(width as u32, height as u32, rgba) {
                        Some(img) => {
                            if let Err(e) = img.save(&path) {
                                self.error_message = Some(format!("Failed to save image: {e}"));
                            } else {
                                tracing::info!("Saved plot image to {:?}", path);
                            }
                        }
                        None => {
                            self.error_message = Some("Captured image has an unexpected size".to_string());
                        }
                    }
                }
            }
            PendingScreenshot::Clipboard => match arboard::Clipboard::new() {
                Ok(mut clipboard) => {
                    let img_data = arboard::ImageData {
                        width,
                        height,
                        bytes: std::borrow::Cow::Owned(rgba),
                    };
                    if let Err(e) = clipboard.set_image(img_data) {
                        self.error_message = Some(format!("Failed to copy to clipboard: {e}"));
                    } else {
                        tracing::info!("Copied plot image to clipboard");
                    }
                }
                Err(e) => {
                    self.error_message = Some(format!("Failed to access clipboard: {e}"));
                }
            },
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(self.state.theme.visuals());

        // ------------------------------------------------------------------
        // 0. Handle screenshot events from the previous frame
        // ------------------------------------------------------------------
        if self.pending_screenshot.is_some() {
            let mut screenshot_image: Option<Arc<egui::ColorImage>> = None;
            ctx.input(|i| {
                for event in &i.raw.events {
                    if let egui::Event::Screenshot { image, .. } = event {
                        screenshot_image = Some(image.clone());
                    }
                }
            });

            if let Some(color_image) = screenshot_image {
                if let Some(action) = self.pending_screenshot.take() {
                    self.handle_screenshot(ctx, action, &color_image);
                }
            }
        }

        // ------------------------------------------------------------------
        // 1. Header and footer
        // ------------------------------------------------------------------
        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(16, 8)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let heading_response = ui.heading("Multi-Case Visualization");
                    heading_response.context_menu(|ui| {
                        if ui.button("About").clicked() {
                            self.show_about = true;
                            ui.close_menu();
                        }
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button(self.state.theme.toggle_label()).clicked() {
                            self.state.theme = self.state.theme.toggle();
                        }
                        ui.separator();
                        ui.small(format!("v{VERSION}"));
                    });
                });
            });

        egui::TopBottomPanel::bottom("footer")
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(16, 6)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let count = self.state.case_count();
                    let failed = self.outcomes.iter().filter(|o| o.is_err()).count();
                    let label = if count == 1 { "1 case".to_string() } else { format!("{count} cases") };
                    ui.label(egui::RichText::new(label).weak());
                    if failed > 0 {
                        ui.separator();
                        ui.colored_label(self.state.theme.error_color(), format!("{failed} invalid"));
                    }

                    if let Some(msg) = &self.error_message {
                        ui.separator();
                        ui.colored_label(self.state.theme.error_color(), msg);
                        if ui.small_button("dismiss").clicked() {
                            self.error_message = None;
                        }
                    }
                });
            });

        // ------------------------------------------------------------------
        // 2. Sidebar edits, then recompute before drawing outputs
        // ------------------------------------------------------------------
        egui::SidePanel::left("cases")
            .resizable(true)
            .default_width(340.0)
            .min_width(280.0)
            .show(ctx, |ui| {
                case_sidebar::show_case_sidebar(ui, &mut self.state);
            });

        self.refresh_outcomes();

        // ------------------------------------------------------------------
        // 3. Plot and metrics table
        // ------------------------------------------------------------------
        let mut chart_action = ChartAction::None;
        let mut table_action = TableAction::None;
        egui::CentralPanel::default().show(ctx, |ui| {
            let plot_height = (ui.available_height() * 0.6).max(260.0);
            let theme = self.state.theme;

            egui::ScrollArea::vertical().show(ui, |ui| {
                chart_action = chart_panel::show_chart_panel(
                    ui,
                    &mut self.state.chart,
                    &self.state.cases,
                    &self.outcomes,
                    plot_height,
                );
                ui.add_space(10.0);
                table_action = metrics_table::show_metrics_table(ui, &self.outcomes, &theme);
            });
        });

        match chart_action {
            ChartAction::SaveImage => {
                self.pending_screenshot = Some(PendingScreenshot::SaveFile);
                ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
            }
            ChartAction::CopyImage => {
                self.pending_screenshot = Some(PendingScreenshot::Clipboard);
                ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
            }
            ChartAction::None => {}
        }

        if let TableAction::ExportCsv(index) = table_action {
            self.export_case_csv(index);
        }

        // ------------------------------------------------------------------
        // 4. About window (hidden menu)
        // ------------------------------------------------------------------
        if self.show_about {
            egui::Window::new("About")
                .open(&mut self.show_about)
                .collapsible(false)
                .resizable(false)
                .default_width(320.0)
                .show(ctx, |ui| {
                    ui.heading("Multi-Case Visualization");
                    ui.label(format!("Version: {VERSION}"));
                    ui.add_space(4.0);
                    ui.label("Each case plots a degree-4 polynomial over its date range,");
                    ui.label("evaluated at the zero-based day offset.");
                    ui.add_space(10.0);
                    ui.label("Right-click the title for this menu.");
                });
        }
    }
}
