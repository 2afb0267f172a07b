use anyhow::{Context, Result};

use crate::export::ExportFormat;
use crate::listing::ListQuery;
use crate::model::{
    ListEnvelope, Post, PostInput, Story, StoryInput, Submission, Subscriber, TeamMember,
    TeamMemberInput,
};

mod http_client;

mod types;
pub use self::types::*;
mod posts;
mod stories;
mod submissions;
mod subscribers;
mod team;

/// Blocking client for the site's admin API. Used directly by the CLI and
/// from worker threads by the TUI.
///
/// Failed requests are reported once and retried only when the user asks;
/// there is no automatic backoff.
pub struct ApiClient {
    base_url: String,
    token: String,
    client: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: String, token: String) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("sitbox")
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
