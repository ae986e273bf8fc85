use eframe::egui;

use crate::core::models::can_submit;

/// Word input plus the send affordance. Returns true when the user asked to
/// submit (button or Enter), already guarded against degenerate input.
pub fn input_bar(ui: &mut egui::Ui, input_value: &mut String, submitting: bool) -> bool {
    let mut submit = false;

    ui.horizontal(|ui| {
        let reserved = 90.0;
        let response = ui.add(
            egui::TextEdit::singleline(input_value)
                .hint_text("Enter up to 50 English words separated by commas")
                .desired_width((ui.available_width() - reserved).max(120.0)),
        );

        let enabled = can_submit(input_value) && !submitting;
        let enter_pressed =
            response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui.add_enabled(enabled, egui::Button::new("Send ➤")).clicked() {
            submit = true;
        }

        if enter_pressed && enabled {
            submit = true;
            response.request_focus();
        }

        if submitting {
            ui.add(egui::Spinner::new());
        }
    });

    submit
}
