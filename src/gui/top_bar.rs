use eframe::egui::{
    self,
    containers,
};

use super::theme::Theme;

pub struct TopBar;

impl TopBar {
    pub fn show(ctx: &egui::Context, theme: &Theme, key_count: usize) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);

                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status(ui, theme, key_count);
                });
            });
        });
    }

    fn show_status(ui: &mut egui::Ui, theme: &Theme, key_count: usize) {
        let (color, text) = if key_count == 0 {
            (theme.red(), "No search keys".to_string())
        } else {
            (theme.green(), format!("{} search keys", key_count))
        };

        ui.label(text);
        ui.colored_label(color, "●");
    }
}
