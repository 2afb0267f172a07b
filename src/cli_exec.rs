use anyhow::Result;

use sitbox::model::PublishStatus;
use sitbox::remote::ApiClient;
use sitbox::store::LocalStore;
use sitbox::validate::FieldIssue;

use crate::Commands;
use crate::cli_runtime::require_api_and_token;

mod posts;
mod session;
mod stories;
mod submissions;
mod subscribers;
mod team;

pub(super) fn handle_command(command: Commands) -> Result<()> {
    let store = LocalStore::open_default()?;

    match command {
        Commands::Login { url, token } => session::login(&store, url, token),
        Commands::Logout => session::logout(&store),
        Commands::Posts { command } => posts::handle(&store, command),
        Commands::Stories { command } => stories::handle(&store, command),
        Commands::Subscribers { command } => subscribers::handle(&store, command),
        Commands::Submissions { command } => submissions::handle(&store, command),
        Commands::Team { command } => team::handle(&store, command),
    }
}

fn api_client(store: &LocalStore) -> Result<ApiClient> {
    let (api, token) = require_api_and_token(store)?;
    ApiClient::new(api.base_url, token)
}

fn parse_status(raw: &str) -> Result<PublishStatus> {
    PublishStatus::parse(raw)
        .ok_or_else(|| anyhow::anyhow!("invalid status {} (expected draft or published)", raw))
}

fn split_tags(raw: Option<String>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

/// Rejects invalid input before any request is made.
fn ensure_valid(issues: Vec<FieldIssue>) -> Result<()> {
    if issues.is_empty() {
        return Ok(());
    }
    let lines = issues
        .iter()
        .map(|i| format!("- {}: {}", i.field, i.message))
        .collect::<Vec<_>>()
        .join("\n");
    anyhow::bail!("validation failed:\n{}", lines);
}
