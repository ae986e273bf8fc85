pub mod app;
pub mod card_grid;
pub mod image_store;
pub mod input_bar;
pub mod link_modal;
pub mod theme;
pub mod top_bar;

pub use app::FlashdeckApp;
