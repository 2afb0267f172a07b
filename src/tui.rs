//! Entry point for the interactive admin console.

use std::path::PathBuf;

use anyhow::Result;

/// Options threaded from the CLI into the console.
#[derive(Clone, Debug, Default)]
pub struct TuiRunOptions {
    /// Append a JSON-lines trace of the session to this file.
    pub session_trace: Option<PathBuf>,
}

pub fn run(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run(opts)
}
