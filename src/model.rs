use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Admin resources served by the site API. One list view / CLI namespace each.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Posts,
    Stories,
    Subscribers,
    Submissions,
    Team,
}

impl Resource {
    pub fn as_str(self) -> &'static str {
        match self {
            Resource::Posts => "posts",
            Resource::Stories => "stories",
            Resource::Subscribers => "subscribers",
            Resource::Submissions => "submissions",
            Resource::Team => "team",
        }
    }
}

/// Page envelope returned by every list endpoint.
///
/// The server also echoes pagination flags (`totalPages`, `hasNextPage`, ...)
/// but those have been wrong across deploys, so they are not deserialized.
/// Callers derive paging from `total` alone.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListEnvelope<T> {
    #[serde(default)]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    #[default]
    Draft,
    Published,
}

impl PublishStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PublishStatus::Draft => "draft",
            PublishStatus::Published => "published",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Some(PublishStatus::Draft),
            "published" => Some(PublishStatus::Published),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: PublishStatus,
    #[serde(default)]
    pub featured: bool,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Writable post fields. Also the autosaved draft payload, so every field
/// defaults: a draft written by an older build still loads.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: PublishStatus,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: String,
    pub title: String,
    pub client: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub status: PublishStatus,
    #[serde(default)]
    pub featured: bool,
    pub created_at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub status: PublishStatus,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriberStatus {
    #[default]
    Subscribed,
    Unsubscribed,
}

impl SubscriberStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SubscriberStatus::Subscribed => "subscribed",
            SubscriberStatus::Unsubscribed => "unsubscribed",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: SubscriberStatus,
    pub created_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub form_name: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub message: String,
    pub created_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub bio: String,
    pub created_at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub bio: String,
}

/// Contents of `config.json` in the sitbox home dir.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdminConfig {
    pub version: u32,

    #[serde(default)]
    pub api: Option<ApiConfig>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,

    /// Legacy field. Tokens now live in `state.json`; a value found here is
    /// migrated on first read and dropped from `config.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Contents of `state.json`: mutable local state that is not configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LocalState {
    pub version: u32,

    #[serde(default)]
    pub api_tokens: HashMap<String, String>,
}
