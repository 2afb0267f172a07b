//! Field validation for create/update payloads. Runs before any request is
//! made; a payload with issues never reaches the network.

use crate::model::{PostInput, StoryInput, TeamMemberInput};

pub const TITLE_MAX: usize = 160;
pub const SLUG_MAX: usize = 80;
pub const EXCERPT_MAX: usize = 300;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: String,
}

fn issue(field: &'static str, message: impl Into<String>) -> FieldIssue {
    FieldIssue {
        field,
        message: message.into(),
    }
}

pub fn validate_post(input: &PostInput) -> Vec<FieldIssue> {
    let mut out = Vec::new();

    let title = input.title.trim();
    if title.is_empty() {
        out.push(issue("title", "title is required"));
    } else if title.chars().count() > TITLE_MAX {
        out.push(issue(
            "title",
            format!("title must be at most {} characters", TITLE_MAX),
        ));
    }

    let slug = input.slug.trim();
    if slug.is_empty() {
        out.push(issue("slug", "slug is required"));
    } else if !is_slug(slug) {
        out.push(issue(
            "slug",
            "slug may only contain lowercase letters, digits and '-'",
        ));
    } else if slug.len() > SLUG_MAX {
        out.push(issue(
            "slug",
            format!("slug must be at most {} characters", SLUG_MAX),
        ));
    }

    let excerpt = input.excerpt.trim();
    if excerpt.is_empty() {
        out.push(issue("excerpt", "excerpt is required"));
    } else if excerpt.chars().count() > EXCERPT_MAX {
        out.push(issue(
            "excerpt",
            format!("excerpt must be at most {} characters", EXCERPT_MAX),
        ));
    }

    if input.content.trim().is_empty() {
        out.push(issue("content", "content is required"));
    }

    if let Some(url) = input.cover_url.as_deref()
        && !url.trim().is_empty()
        && !is_http_url(url.trim())
    {
        out.push(issue(
            "coverUrl",
            "cover url must be absolute (http:// or https://)",
        ));
    }

    out
}

pub fn validate_story(input: &StoryInput) -> Vec<FieldIssue> {
    let mut out = Vec::new();

    if input.title.trim().is_empty() {
        out.push(issue("title", "title is required"));
    }
    if input.client.trim().is_empty() {
        out.push(issue("client", "client is required"));
    }
    if input.summary.trim().is_empty() {
        out.push(issue("summary", "summary is required"));
    }
    if let Some(url) = input.cover_url.as_deref()
        && !url.trim().is_empty()
        && !is_http_url(url.trim())
    {
        out.push(issue(
            "coverUrl",
            "cover url must be absolute (http:// or https://)",
        ));
    }

    out
}

pub fn validate_team_member(input: &TeamMemberInput) -> Vec<FieldIssue> {
    let mut out = Vec::new();

    if input.name.trim().is_empty() {
        out.push(issue("name", "name is required"));
    }
    if input.role.trim().is_empty() {
        out.push(issue("role", "role is required"));
    }
    if let Some(url) = input.photo_url.as_deref()
        && !url.trim().is_empty()
        && !is_http_url(url.trim())
    {
        out.push(issue(
            "photoUrl",
            "photo url must be absolute (http:// or https://)",
        ));
    }

    out
}

pub fn is_slug(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

pub fn is_http_url(s: &str) -> bool {
    let rest = s
        .strip_prefix("https://")
        .or_else(|| s.strip_prefix("http://"));
    matches!(rest, Some(r) if !r.is_empty())
}

#[cfg(test)]
#[path = "tests/validate_tests.rs"]
mod tests;
