use egui_extras::{Column, TableBuilder};
use crate::error::CaseError;
use crate::processing::cases::{case_label, CaseOutcome};
use crate::processing::statistics::{format_metric, MetricsRow};
use crate::state::theme::Theme;

/// Actions that the metrics table can request from the parent.
pub enum TableAction {
    None,
    /// Export the series of the case at this zero-based index.
    ExportCsv(usize),
}

/// Render one row per case: label, the four metrics, and a CSV download button.
/// Failed cases show their validation error instead of metrics.
pub fn show_metrics_table(
    ui: &mut egui::Ui,
    outcomes: &[Result<CaseOutcome, CaseError>],
    theme: &Theme,
) -> TableAction {
    let mut action = TableAction::None;

    ui.label(egui::RichText::new("Metrics").strong().size(16.0));
    ui.add_space(4.0);

    let table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(70.0))
        .columns(Column::auto().at_least(110.0), MetricsRow::COLUMNS.len())
        .column(Column::remainder().at_least(120.0))
        .min_scrolled_height(120.0);

    table
        .header(22.0, |mut header| {
            header.col(|ui| {
                ui.strong("Case");
            });
            for name in MetricsRow::COLUMNS {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
            header.col(|ui| {
                ui.strong("Export");
            });
        })
        .body(|body| {
            body.rows(24.0, outcomes.len(), |mut row| {
                let index = row.index();
                let outcome = &outcomes[index];

                row.col(|ui| {
                    ui.label(case_label(index));
                });

                match outcome {
                    Ok(outcome) => {
                        for value in outcome.metrics.values() {
                            row.col(|ui| {
                                ui.monospace(format_metric(value));
                            });
                        }
                        row.col(|ui| {
                            if ui
                                .small_button("Download CSV")
                                .on_hover_text(format!("Save {} as CSV", outcome.label))
                                .clicked()
                            {
                                action = TableAction::ExportCsv(index);
                            }
                        });
                    }
                    Err(e) => {
                        for _ in MetricsRow::COLUMNS {
                            row.col(|ui| {
                                ui.label("-");
                            });
                        }
                        row.col(|ui| {
                            ui.colored_label(theme.error_color(), e.to_string());
                        });
                    }
                }
            });
        });

    action
}
