pub mod app;
pub mod app_state;
pub mod command_sender;
pub mod content;
pub mod host;
mod ui;
