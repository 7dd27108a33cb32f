pub mod actions;
pub mod app;
pub mod components;
pub mod error_modal;
pub mod modal;
pub mod overview;
pub mod saved_responses;
pub mod settings;
pub mod theme;
pub mod toast;
pub mod top_bar;
pub mod worksheet_view;

pub use app::WorksheetApp;
