use egui_plot::{Legend, Line, Plot, PlotPoints};
use crate::data::datetime;
use crate::error::CaseError;
use crate::processing::cases::CaseOutcome;
use crate::state::case_input::CaseInput;
use crate::state::chart_state::ChartState;

/// Actions that the chart panel can request from the parent.
pub enum ChartAction {
    None,
    SaveImage,
    CopyImage,
}

fn toolbar_btn(ui: &mut egui::Ui, label: &str) -> egui::Response {
    ui.add(egui::Button::new(label).min_size(egui::vec2(0.0, 26.0)))
}

fn toolbar_toggle_btn(ui: &mut egui::Ui, label: &str, active: bool) -> egui::Response {
    let btn = if active {
        egui::Button::new(egui::RichText::new(label).strong())
            .fill(ui.visuals().selection.bg_fill)
            .min_size(egui::vec2(0.0, 26.0))
    } else {
        egui::Button::new(label).min_size(egui::vec2(0.0, 26.0))
    };
    ui.add(btn)
}

/// Render the time-series plot with one line per valid, visible case.
/// `cases` and `outcomes` are parallel, in case order.
pub fn show_chart_panel(
    ui: &mut egui::Ui,
    chart: &mut ChartState,
    cases: &[CaseInput],
    outcomes: &[Result<CaseOutcome, CaseError>],
    plot_height: f32,
) -> ChartAction {
    let mut action = ChartAction::None;

    let frame_resp = egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(10))
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.heading(&chart.title);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.spacing_mut().item_spacing.x = 4.0;
                    if toolbar_btn(ui, "Copy Image").on_hover_text("Copy plot image to clipboard").clicked() {
                        action = ChartAction::CopyImage;
                    }
                    if toolbar_btn(ui, "Save Image").on_hover_text("Save plot as PNG").clicked() {
                        action = ChartAction::SaveImage;
                    }
                    ui.separator();
                    if toolbar_toggle_btn(ui, "Legend", chart.show_legend).clicked() {
                        chart.show_legend = !chart.show_legend;
                    }
                    if toolbar_btn(ui, "Fit View").on_hover_text("Auto-fit to data bounds").clicked() {
                        chart.request_reset();
                    }
                });
            });

            ui.add_space(4.0);

            let mut plot = Plot::new("time_series_plot")
                .height(plot_height)
                .x_axis_label("Date")
                .y_axis_label("Value")
                .x_axis_formatter(|mark, _range| datetime::format_axis_date(mark.value))
                .label_formatter(|name, point| {
                    let date = datetime::format_axis_date(point.x);
                    if name.is_empty() {
                        format!("{date}\n{:.3}", point.y)
                    } else {
                        format!("{name}\n{date}\n{:.3}", point.y)
                    }
                });
            if chart.show_legend {
                plot = plot.legend(Legend::default());
            }
            if chart.take_reset() {
                plot = plot.reset();
            }

            plot.show(ui, |plot_ui| {
                for (case, outcome) in cases.iter().zip(outcomes) {
                    let Ok(outcome) = outcome else { continue };
                    if !case.visible {
                        continue;
                    }
                    let points = PlotPoints::from(outcome.series.plot_points());
                    plot_ui.line(
                        Line::new(points)
                            .name(&outcome.label)
                            .color(case.color32())
                            .width(2.0),
                    );
                }
            });
        });

    chart.last_frame_rect = Some(frame_resp.response.rect);

    action
}
