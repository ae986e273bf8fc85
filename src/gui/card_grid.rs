use eframe::egui;
use egui_flex::{
    item,
    Flex,
};

use super::{
    image_store::{
        ImageState,
        ImageStore,
    },
    theme::Theme,
};
use crate::core::{
    Card,
    Deck,
};

const TILE_WIDTH: f32 = 200.0;
const IMAGE_SIZE: f32 = 184.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Refresh(usize),
    ThemedRefresh(usize),
    EditLink(usize),
}

/// Wrapping grid of card tiles. Returns the action clicked this frame, if any.
pub fn card_grid(
    ui: &mut egui::Ui,
    deck: &Deck,
    images: &ImageStore,
    theme: &Theme,
) -> Option<CardAction> {
    let mut action = None;

    Flex::horizontal().wrap(true).show(ui, |flex| {
        for card in deck.cards() {
            flex.add_ui(item(), |ui| {
                if let Some(clicked) = card_tile(ui, card, images, theme) {
                    action = Some(clicked);
                }
            });
        }
    });

    action
}

fn card_tile(
    ui: &mut egui::Ui,
    card: &Card,
    images: &ImageStore,
    theme: &Theme,
) -> Option<CardAction> {
    let mut action = None;

    egui::Frame::new()
        .fill(ui.visuals().faint_bg_color)
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .corner_radius(8.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_width(TILE_WIDTH);

            ui.vertical_centered(|ui| {
                draw_image_area(ui, card, images);

                ui.add_space(6.0);
                ui.label(theme.word(&card.word));
                ui.add_space(4.0);

                ui.horizontal(|ui| {
                    if ui.button("🔄").on_hover_text("New image").clicked() {
                        action = Some(CardAction::Refresh(card.id));
                    }
                    if ui.button("🐾").on_hover_text("Paw Patrol image").clicked() {
                        action = Some(CardAction::ThemedRefresh(card.id));
                    }
                    if ui.button("🔗").on_hover_text("Use an image link").clicked() {
                        action = Some(CardAction::EditLink(card.id));
                    }
                });
            });
        });

    action
}

fn draw_image_area(ui: &mut egui::Ui, card: &Card, images: &ImageStore) {
    let size = egui::vec2(IMAGE_SIZE, IMAGE_SIZE);

    if !card.has_image() {
        placeholder_tile(ui, size, "image not found");
        return;
    }

    match images.state(&card.image) {
        Some(ImageState::Ready(texture)) => {
            ui.add(egui::Image::new(texture).fit_to_exact_size(size).corner_radius(6.0));
        }
        Some(ImageState::Failed) => placeholder_tile(ui, size, "couldn't load image"),
        Some(ImageState::Loading) | None => {
            ui.add_sized(size, egui::Spinner::new());
        }
    }
}

fn placeholder_tile(ui: &mut egui::Ui, size: egui::Vec2, text: &str) {
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter();

    painter.rect_filled(rect, 6.0, ui.visuals().extreme_bg_color);
    painter.text(
        rect.center() - egui::vec2(0.0, 12.0),
        egui::Align2::CENTER_CENTER,
        "🖼",
        egui::FontId::proportional(42.0),
        ui.visuals().weak_text_color(),
    );
    painter.text(
        rect.center() + egui::vec2(0.0, 28.0),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(13.0),
        ui.visuals().weak_text_color(),
    );
}
