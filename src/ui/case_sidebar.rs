use egui_extras::DatePickerButton;
use crate::processing::cases::case_label;
use crate::state::app_state::{AppState, MAX_CASES};
use crate::state::case_config::{COEFFICIENT_MAX, COEFFICIENT_MIN, COEFFICIENT_STEP};
use crate::state::case_input::CaseInput;
use crate::state::theme::Theme;

/// Render the case configuration sidebar. Edits `state` in place; the app
/// re-derives configs from it after the frame.
pub fn show_case_sidebar(ui: &mut egui::Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.label(egui::RichText::new("Cases").strong().size(16.0));
    ui.add_space(4.0);

    let mut count = state.case_count();
    ui.horizontal(|ui| {
        ui.label("Number of Cases");
        ui.add(egui::DragValue::new(&mut count).range(1..=MAX_CASES).speed(0.1));
    });
    if count != state.case_count() {
        state.set_case_count(count);
    }

    ui.horizontal(|ui| {
        if ui.small_button("Reset All").on_hover_text("Restore default dates and coefficients").clicked() {
            state.reset_cases();
        }
    });

    ui.separator();

    let theme = state.theme;
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (index, case) in state.cases.iter_mut().enumerate() {
                show_case_editor(ui, index, case, &theme);
                ui.add_space(6.0);
            }
        });
}

fn show_case_editor(ui: &mut egui::Ui, index: usize, case: &mut CaseInput, theme: &Theme) {
    let header = egui::RichText::new(case_label(index)).strong().color(case.color32());

    egui::CollapsingHeader::new(header)
        .id_salt(("case_editor", case.id))
        .default_open(true)
        .show(ui, |ui| {
            let start_salt = format!("start_date_{}", case.id);
            let end_salt = format!("end_date_{}", case.id);

            egui::Grid::new(("case_dates", case.id))
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Start Date");
                    ui.add(DatePickerButton::new(&mut case.start).id_salt(&start_salt));
                    ui.end_row();

                    ui.label("End Date");
                    ui.add(DatePickerButton::new(&mut case.end).id_salt(&end_salt));
                    ui.end_row();
                });

            if let Err(e) = case.to_config() {
                ui.colored_label(theme.error_color(), e.to_string());
            }

            ui.add_space(4.0);
            for (j, coefficient) in case.coefficients.iter_mut().enumerate() {
                ui.add(
                    egui::Slider::new(coefficient, COEFFICIENT_MIN..=COEFFICIENT_MAX)
                        .step_by(COEFFICIENT_STEP)
                        .text(format!("Coefficient {j}")),
                );
            }

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.checkbox(&mut case.visible, "Show on plot");
                if ui.small_button("Zero").on_hover_text("Set all coefficients to 0").clicked() {
                    case.reset_coefficients();
                }
            });
        });
}
