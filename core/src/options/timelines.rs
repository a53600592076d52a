use super::{required, Params, RequestOptions};
use crate::error::MastodonError;
use crate::http::HttpRequest;

/// Options for the timeline of public statuses tagged with a hashtag.
///
/// <https://docs.joinmastodon.org/methods/timelines/#tag>
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetHashtagTimelineOptions {
    /// Name of the hashtag without the leading `#`.
    pub hashtag: String,
    /// Only statuses from this server.
    pub local: bool,
    /// Only statuses from other servers.
    pub remote: bool,
    /// Only statuses with media attached.
    pub only_media: bool,
    /// Upper bound (exclusive) on status IDs.
    pub max_id: Option<String>,
    /// Lower bound (exclusive) on status IDs.
    pub since_id: Option<String>,
    /// Return the statuses immediately newer than this ID.
    pub min_id: Option<String>,
    /// Page size. The server defaults to 20 and allows at most 40.
    pub limit: Option<u32>,
}

impl GetHashtagTimelineOptions {
    pub fn new(hashtag: impl Into<String>) -> Self {
        Self {
            hashtag: hashtag.into(),
            ..Self::default()
        }
    }

    /// A page of at most `limit` statuses older than `max_id`.
    pub fn page(hashtag: impl Into<String>, limit: Option<u32>, max_id: Option<&str>) -> Self {
        Self {
            limit,
            max_id: max_id.map(str::to_string),
            ..Self::new(hashtag)
        }
    }
}

impl RequestOptions for GetHashtagTimelineOptions {
    fn to_request(&self) -> Result<HttpRequest, MastodonError> {
        let hashtag = required(&self.hashtag, "hashtag")?;

        let mut query = Params::default();
        query
            .flag("local", self.local)
            .flag("remote", self.remote)
            .flag("only_media", self.only_media)
            .text("max_id", self.max_id.as_deref())
            .text("since_id", self.since_id.as_deref())
            .text("min_id", self.min_id.as_deref())
            .opt("limit", self.limit);

        Ok(HttpRequest::get_with_query(
            format!("/api/v1/timelines/tag/{hashtag}"),
            query.into_pairs(),
        ))
    }
}

impl From<&str> for GetHashtagTimelineOptions {
    fn from(hashtag: &str) -> Self {
        Self::new(hashtag)
    }
}

impl From<String> for GetHashtagTimelineOptions {
    fn from(hashtag: String) -> Self {
        Self::new(hashtag)
    }
}

impl From<(&str, Option<u32>, Option<&str>)> for GetHashtagTimelineOptions {
    fn from((hashtag, limit, max_id): (&str, Option<u32>, Option<&str>)) -> Self {
        Self::page(hashtag, limit, max_id)
    }
}

/// Options for the public timeline.
///
/// <https://docs.joinmastodon.org/methods/timelines/#public>
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetPublicTimelineOptions {
    pub local: bool,
    pub remote: bool,
    pub only_media: bool,
    pub max_id: Option<String>,
    pub since_id: Option<String>,
    pub min_id: Option<String>,
    pub limit: Option<u32>,
}

impl RequestOptions for GetPublicTimelineOptions {
    fn to_request(&self) -> Result<HttpRequest, MastodonError> {
        let mut query = Params::default();
        query
            .flag("local", self.local)
            .flag("remote", self.remote)
            .flag("only_media", self.only_media)
            .text("max_id", self.max_id.as_deref())
            .text("since_id", self.since_id.as_deref())
            .text("min_id", self.min_id.as_deref())
            .opt("limit", self.limit);

        Ok(HttpRequest::get_with_query(
            "/api/v1/timelines/public",
            query.into_pairs(),
        ))
    }
}
