use eframe::egui;

use crate::core::models::validate_manual_url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkResult {
    Confirmed { index: usize, url: String },
    Cancelled,
}

/// Manual image-link entry for one card. Validation happens inside the
/// dialog: an invalid URL shows an inline error and leaves the dialog open,
/// so the caller only ever sees a valid URL or a cancellation.
pub struct LinkModal {
    open: bool,
    index: usize,
    word: String,
    url_input: String,
    error: Option<String>,
}

impl LinkModal {
    pub fn new() -> Self {
        Self { open: false, index: 0, word: String::new(), url_input: String::new(), error: None }
    }

    pub fn open_for(&mut self, index: usize, word: &str) {
        self.open = true;
        self.index = index;
        self.word = word.to_string();
        self.url_input.clear();
        self.error = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<LinkResult> {
        if !self.open {
            return None;
        }

        let mut result = None;

        let modal = egui::Modal::new(egui::Id::new("link_modal")).show(ctx, |ui| {
            ui.set_width(420.0);

            ui.heading(format!("Image link for \"{}\"", self.word));
            ui.add_space(10.0);

            let response = ui.add(
                egui::TextEdit::singleline(&mut self.url_input)
                    .hint_text("https://...")
                    .desired_width(f32::INFINITY),
            );
            if self.url_input.is_empty() && self.error.is_none() {
                response.request_focus();
            }

            let enter_pressed =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            if let Some(error) = &self.error {
                ui.add_space(5.0);
                ui.colored_label(ui.visuals().error_fg_color, error);
            }

            ui.add_space(10.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Apply").clicked() || enter_pressed {
                    match validate_manual_url(&self.url_input) {
                        Some(url) => {
                            result = Some(LinkResult::Confirmed { index: self.index, url });
                            ui.close();
                        }
                        None => {
                            self.error = Some(
                                "The entered text does not contain a valid image URL."
                                    .to_string(),
                            );
                        }
                    }
                }

                if ui.button("Cancel").clicked() {
                    result = Some(LinkResult::Cancelled);
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
            if result.is_none() {
                result = Some(LinkResult::Cancelled);
            }
        }

        result
    }
}

impl Default for LinkModal {
    fn default() -> Self {
        Self::new()
    }
}
