//! Autosave for the blog post editor.
//!
//! Drafts are serialized [`PostInput`] payloads kept under a versioned key in
//! the injected [`KvStore`]. Loading merges whatever was saved over field
//! defaults, so drafts written by older builds (or truncated by a crash)
//! still open; anything unparseable falls back to an empty draft without
//! surfacing an error.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::model::PostInput;
use crate::store::KvStore;

/// Key version bumps when the payload shape changes incompatibly.
pub const BLOG_DRAFT_KEY: &str = "smartitbox:create-blog:autosave:v1";

/// How often a dirty draft is flushed while the editor is open.
pub const AUTOSAVE_INTERVAL: Duration = Duration::from_secs(12);

pub struct DraftStore {
    kv: Box<dyn KvStore>,
}

impl DraftStore {
    pub fn new(kv: Box<dyn KvStore>) -> Self {
        Self { kv }
    }

    pub fn load(&self) -> PostInput {
        let Ok(Some(raw)) = self.kv.get(BLOG_DRAFT_KEY) else {
            return PostInput::default();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    pub fn save(&self, draft: &PostInput) -> Result<()> {
        let raw = serde_json::to_string(draft).context("serialize draft")?;
        self.kv.set(BLOG_DRAFT_KEY, &raw)
    }

    pub fn clear(&self) -> Result<()> {
        self.kv.remove(BLOG_DRAFT_KEY)
    }
}

/// Decides when a draft is due for a flush: only after an edit, and at most
/// once per interval.
pub struct AutosaveClock {
    interval: Duration,
    last_save: Instant,
    dirty: bool,
}

impl AutosaveClock {
    pub fn new(now: Instant) -> Self {
        Self {
            interval: AUTOSAVE_INTERVAL,
            last_save: now,
            dirty: false,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn due(&self, now: Instant) -> bool {
        self.dirty && now.duration_since(self.last_save) >= self.interval
    }

    pub fn saved(&mut self, now: Instant) {
        self.dirty = false;
        self.last_save = now;
    }
}

#[cfg(test)]
#[path = "tests/draft_tests.rs"]
mod tests;
