pub mod actions;
pub mod app;
pub mod error_modal;
pub mod message_overlay;
pub mod theme;
pub mod top_bar;
mod views;

pub use actions::{
    ActionQueue,
    UiAction,
};
pub use app::TasteMapApp;
