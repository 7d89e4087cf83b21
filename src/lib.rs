pub mod api;
pub mod community;
pub mod core;
pub mod favorites;
pub mod gui;
pub mod listing;
pub mod persistence;
pub mod reviews;
pub mod route;
pub mod session;
pub mod survey;

pub use crate::{
    api::ApiClient,
    core::{
        ApiError,
        Settings,
        TasteMapError,
    },
    gui::TasteMapApp,
};
