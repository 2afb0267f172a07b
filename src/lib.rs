pub mod draft;
pub mod export;
pub mod listing;
pub mod model;
pub mod remote;
pub mod store;
pub mod tui;
mod tui_shell;
pub mod validate;
