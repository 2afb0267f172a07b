use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use sitbox::{model::ApiConfig, store::LocalStore};

use crate::Commands;

#[derive(Parser)]
#[command(name = "sitbox")]
#[command(about = "Smartitbox site admin console", long_about = None)]
pub(crate) struct Cli {
    #[arg(long = "session-trace", value_name = "PATH")]
    session_trace: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            sitbox::tui::run(sitbox::tui::TuiRunOptions {
                session_trace: cli.session_trace,
            })?;
        }
        Some(command) => {
            if cli.session_trace.is_some() {
                anyhow::bail!(
                    "`--session-trace` is only supported when running the TUI (no subcommand)"
                );
            }
            crate::cli_exec::handle_command(command)?
        }
    }

    Ok(())
}

pub(crate) fn require_api(store: &LocalStore) -> Result<ApiConfig> {
    let cfg = store.read_config()?;
    cfg.api
        .context("no api configured (run `sitbox login --url ... --token ...`)")
}

pub(crate) fn require_api_and_token(store: &LocalStore) -> Result<(ApiConfig, String)> {
    let api = require_api(store)?;
    let token = store
        .get_api_token(&api.base_url)?
        .context("no api token configured (run `sitbox login --url ... --token ...`)")?;
    Ok((api, token))
}
