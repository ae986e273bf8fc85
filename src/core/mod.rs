pub mod errors;
pub mod models;
pub mod tasks;

pub use errors::FlashdeckError;
pub use models::{Card, Deck, ImageData, SearchTheme, PLACEHOLDER_IMAGE};
