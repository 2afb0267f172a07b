use anyhow::Result;

mod app;
mod commands;
mod editor;
mod filter_cycle;
mod input;
mod modal;
mod suggest;
mod view;
mod views;

use app::{
    App, CommandDef, Modal, ModalKind, PendingAction, TextInputAction, TimestampMode, UiMode,
    fmt_ts_list, fmt_ts_ui, now_ts,
};

pub fn run(opts: crate::tui::TuiRunOptions) -> Result<()> {
    app::run(opts)
}
