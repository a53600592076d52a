use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use strum::{AsRefStr, Display, EnumString};

use super::{from_name, null_default, Account, MediaAttachment, PreviewCard};

/// Who can see a status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Visibility {
    #[default]
    Public,
    Unlisted,
    Private,
    Direct,
}

impl<'de> Deserialize<'de> for Visibility {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        from_name(deserializer)
    }
}

/// A hashtag used within a status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StatusTag {
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub url: String,
}

/// A status (toot) posted by an account.
///
/// <https://docs.joinmastodon.org/entities/Status/>
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Status {
    pub id: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub in_reply_to_id: Option<String>,
    #[serde(default)]
    pub in_reply_to_account_id: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub sensitive: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub spoiler_text: String,
    #[serde(default, deserialize_with = "null_default")]
    pub visibility: Visibility,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub replies_count: u64,
    #[serde(default, deserialize_with = "null_default")]
    pub reblogs_count: u64,
    #[serde(default, deserialize_with = "null_default")]
    pub favourites_count: u64,
    #[serde(default)]
    pub edited_at: Option<DateTime<Utc>>,
    /// HTML content of the status.
    pub content: String,
    #[serde(default, deserialize_with = "null_default")]
    pub account: Account,
    /// The boosted status, when this status is a reblog.
    #[serde(default)]
    pub reblog: Option<Box<Status>>,
    // Only present on responses to authorized requests.
    #[serde(default)]
    pub favourited: Option<bool>,
    #[serde(default)]
    pub reblogged: Option<bool>,
    #[serde(default)]
    pub bookmarked: Option<bool>,
    #[serde(default, deserialize_with = "null_default")]
    pub media_attachments: Vec<MediaAttachment>,
    #[serde(default, deserialize_with = "null_default")]
    pub tags: Vec<StatusTag>,
    #[serde(default)]
    pub card: Option<PreviewCard>,
}
