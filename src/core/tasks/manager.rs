use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use eframe::egui;
use reqwest::Client;
use tokio::runtime::Runtime;

use super::TaskResult;
use crate::{
    core::{
        Card,
        SearchTheme,
        PLACEHOLDER_IMAGE,
    },
    search::{
        api::{
            fetch_image_data,
            search_image,
        },
        CredentialPool,
    },
};

/// Owns the tokio runtime and the channel the GUI polls. Each job runs on its
/// own thread and blocks on the runtime, so the UI thread never waits on the
/// network.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
    client: Client,
    pool: Arc<CredentialPool>,
}

impl TaskManager {
    pub fn new(pool: CredentialPool) -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender, client: Client::new(), pool: Arc::new(pool) }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    pub fn credential_count(&self) -> usize {
        self.pool.len()
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    /// Launches one search per word, waits for all of them, and delivers the
    /// finished set in input order as a single atomic replacement.
    pub fn build_deck(&self, words: Vec<String>, ctx: egui::Context) {
        let (sender, runtime) = self.task_context();
        let client = self.client.clone();
        let pool = self.pool.clone();

        thread::spawn(move || {
            let cards = runtime.block_on(async {
                let searches = words.iter().enumerate().map(|(id, word)| {
                    let client = &client;
                    let pool = &pool;
                    async move {
                        let query = SearchTheme::Clipart.query_for(word);
                        let image = search_image(client, pool, &query).await;
                        Card::new(id, word.clone(), image)
                    }
                });

                futures::future::join_all(searches).await
            });

            let _ = sender.send(TaskResult::DeckBuilt(cards));
            ctx.request_repaint();
        });
    }

    /// Re-searches one card's word with the given theme bias. Only the
    /// addressed card is touched when the result lands.
    pub fn refresh_card(
        &self,
        generation: u64,
        index: usize,
        word: String,
        theme: SearchTheme,
        ctx: egui::Context,
    ) {
        let (sender, runtime) = self.task_context();
        let client = self.client.clone();
        let pool = self.pool.clone();

        thread::spawn(move || {
            let image = runtime.block_on(async {
                search_image(&client, &pool, &theme.query_for(&word)).await
            });

            let _ = sender.send(TaskResult::CardImage {
                generation,
                index,
                image: image.unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            });
            ctx.request_repaint();
        });
    }

    /// Fetches and decodes image bytes for display.
    pub fn load_image(&self, url: String, ctx: egui::Context) {
        let (sender, runtime) = self.task_context();
        let client = self.client.clone();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                fetch_image_data(&client, &url).await.map_err(|e| e.to_string())
            });

            if let Err(e) = &result {
                eprintln!("Failed to load image {}: {}", url, e);
            }

            let _ = sender.send(TaskResult::ImageLoaded { url, result });
            ctx.request_repaint();
        });
    }
}
