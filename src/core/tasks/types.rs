use crate::core::{
    Card,
    ImageData,
};

/// Messages sent back from background tasks and polled by the GUI each frame.
#[derive(Debug)]
pub enum TaskResult {
    /// A submit finished: the complete replacement card set, in input order.
    DeckBuilt(Vec<Card>),

    /// A single-card refresh finished. `generation` is the deck generation
    /// the refresh was issued against; stale results are dropped.
    CardImage { generation: u64, index: usize, image: String },

    /// Image bytes for a display texture were fetched and decoded (or not).
    ImageLoaded { url: String, result: Result<ImageData, String> },
}
