use std::collections::HashSet;

use eframe::egui;

use super::{
    card_grid::{
        card_grid,
        CardAction,
    },
    image_store::ImageStore,
    input_bar::input_bar,
    link_modal::{
        LinkModal,
        LinkResult,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::TopBar,
};
use crate::{
    core::{
        models,
        tasks::{
            TaskManager,
            TaskResult,
        },
        Deck,
        SearchTheme,
    },
    search::CredentialPool,
};

pub struct FlashdeckApp {
    // UI state
    input_value: String,
    theme: Theme,

    // Card state
    deck: Deck,
    images: ImageStore,
    pending_submits: usize,

    // Dialogs
    link_modal: LinkModal,

    task_manager: TaskManager,
}

impl FlashdeckApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let pool = CredentialPool::load();
        let task_manager = TaskManager::new(pool);

        let theme = Theme::nord();
        set_theme(&cc.egui_ctx, theme.clone());

        Self {
            input_value: String::new(),
            theme,
            deck: Deck::default(),
            images: ImageStore::default(),
            pending_submits: 0,
            link_modal: LinkModal::new(),
            task_manager,
        }
    }

    fn submit(&mut self, ctx: &egui::Context) {
        if !models::can_submit(&self.input_value) {
            return;
        }

        self.input_value = self.input_value.trim().to_string();
        let words = models::parse_word_list(&self.input_value);

        self.pending_submits += 1;
        self.task_manager.build_deck(words, ctx.clone());
    }

    fn refresh(&self, index: usize, theme: SearchTheme, ctx: &egui::Context) {
        if let Some(card) = self.deck.card(index) {
            self.task_manager.refresh_card(
                self.deck.generation(),
                index,
                card.word.clone(),
                theme,
                ctx.clone(),
            );
        }
    }

    fn handle_card_action(&mut self, action: CardAction, ctx: &egui::Context) {
        match action {
            CardAction::Refresh(index) => self.refresh(index, SearchTheme::Clipart, ctx),
            CardAction::ThemedRefresh(index) => self.refresh(index, SearchTheme::PawPatrol, ctx),
            CardAction::EditLink(index) => {
                if let Some(card) = self.deck.card(index) {
                    self.link_modal.open_for(index, &card.word);
                }
            }
        }
    }

    fn handle_task_result(&mut self, result: TaskResult, ctx: &egui::Context) {
        match result {
            TaskResult::DeckBuilt(cards) => {
                self.pending_submits = self.pending_submits.saturating_sub(1);
                self.deck.replace(cards);

                let keep: HashSet<String> =
                    self.deck.cards().iter().map(|card| card.image.clone()).collect();
                self.images.retain_urls(&keep);

                self.request_card_images(ctx);
            }
            TaskResult::CardImage { generation, index, image } => {
                if self.deck.set_image(generation, index, image.clone()) {
                    self.images.request(&image, &self.task_manager, ctx);
                }
            }
            TaskResult::ImageLoaded { url, result } => {
                self.images.apply(ctx, url, result);
            }
        }
    }

    fn request_card_images(&mut self, ctx: &egui::Context) {
        let urls: Vec<String> = self
            .deck
            .cards()
            .iter()
            .filter(|card| card.has_image())
            .map(|card| card.image.clone())
            .collect();

        for url in urls {
            self.images.request(&url, &self.task_manager, ctx);
        }
    }
}

impl eframe::App for FlashdeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let task_results = self.task_manager.poll_results();
        for result in task_results {
            self.handle_task_result(result, ctx);
        }

        TopBar::show(ctx, &self.theme, self.task_manager.credential_count());

        if let Some(LinkResult::Confirmed { index, url }) = self.link_modal.show(ctx) {
            if self.deck.set_manual_image(index, url.clone()) {
                self.images.request(&url, &self.task_manager, ctx);
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let submitting = self.pending_submits > 0;
            if input_bar(ui, &mut self.input_value, submitting) {
                self.submit(ctx);
            }

            ui.add_space(8.0);
            ui.separator();
            ui.add_space(8.0);

            if self.deck.is_empty() {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        self.theme
                            .hint("Type a few words above and press send to build your deck."),
                    );
                });
            } else {
                egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                    if let Some(action) = card_grid(ui, &self.deck, &self.images, &self.theme) {
                        self.handle_card_action(action, ctx);
                    }
                });
            }
        });
    }
}
