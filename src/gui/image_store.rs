use std::collections::{
    HashMap,
    HashSet,
};

use eframe::egui;

use crate::core::{
    tasks::TaskManager,
    ImageData,
    PLACEHOLDER_IMAGE,
};

pub enum ImageState {
    Loading,
    Ready(egui::TextureHandle),
    Failed,
}

/// URL -> texture cache for the card grid. A URL is requested once; the
/// placeholder sentinel is never fetched.
#[derive(Default)]
pub struct ImageStore {
    textures: HashMap<String, ImageState>,
}

impl ImageStore {
    pub fn state(&self, url: &str) -> Option<&ImageState> {
        self.textures.get(url)
    }

    /// Kicks off a background fetch for a URL not seen before.
    pub fn request(&mut self, url: &str, tasks: &TaskManager, ctx: &egui::Context) {
        if url == PLACEHOLDER_IMAGE || self.textures.contains_key(url) {
            return;
        }

        self.textures.insert(url.to_string(), ImageState::Loading);
        tasks.load_image(url.to_string(), ctx.clone());
    }

    /// Turns fetched pixels into a texture, or marks the URL failed so the
    /// grid falls back to the placeholder tile.
    pub fn apply(&mut self, ctx: &egui::Context, url: String, result: Result<ImageData, String>) {
        let state = match result {
            Ok(data) => {
                let size = [data.width as usize, data.height as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &data.rgba);
                ImageState::Ready(ctx.load_texture(&url, color_image, egui::TextureOptions::LINEAR))
            }
            Err(_) => ImageState::Failed,
        };

        self.textures.insert(url, state);
    }

    /// Drops textures no longer referenced by the current deck.
    pub fn retain_urls(&mut self, keep: &HashSet<String>) {
        self.textures.retain(|url, _| keep.contains(url));
    }
}
