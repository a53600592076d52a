use super::{required, Params, RequestOptions};
use crate::error::MastodonError;
use crate::http::HttpRequest;
use crate::models::Visibility;

/// Options for getting a single status.
///
/// <https://docs.joinmastodon.org/methods/statuses/#get>
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetStatusOptions {
    pub id: String,
}

impl GetStatusOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl RequestOptions for GetStatusOptions {
    fn to_request(&self) -> Result<HttpRequest, MastodonError> {
        let id = required(&self.id, "id")?;
        Ok(HttpRequest::get(format!("/api/v1/statuses/{id}")))
    }
}

/// Options for publishing a new status.
///
/// <https://docs.joinmastodon.org/methods/statuses/#create>
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostStatusOptions {
    /// Text content of the status.
    pub status: String,
    /// ID of the status being replied to.
    pub in_reply_to_id: Option<String>,
    /// Mark the status and its media as sensitive.
    pub sensitive: bool,
    /// Warning shown before the content; the status is collapsed behind it.
    pub spoiler_text: Option<String>,
    pub visibility: Option<Visibility>,
    /// ISO 639 language code.
    pub language: Option<String>,
}

impl PostStatusOptions {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            ..Self::default()
        }
    }
}

impl RequestOptions for PostStatusOptions {
    fn to_request(&self) -> Result<HttpRequest, MastodonError> {
        let status = required(&self.status, "status")?;

        let mut form = Params::default();
        form.add("status", status)
            .text("in_reply_to_id", self.in_reply_to_id.as_deref())
            .flag("sensitive", self.sensitive)
            .text("spoiler_text", self.spoiler_text.as_deref())
            .opt("visibility", self.visibility)
            .text("language", self.language.as_deref());

        Ok(HttpRequest::post_form("/api/v1/statuses", &form.into_pairs()))
    }
}

impl From<&str> for PostStatusOptions {
    fn from(status: &str) -> Self {
        Self::new(status)
    }
}

impl From<String> for PostStatusOptions {
    fn from(status: String) -> Self {
        Self::new(status)
    }
}

/// Options for favouriting a status.
///
/// <https://docs.joinmastodon.org/methods/statuses/#favourite>
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavouriteStatusOptions {
    pub id: String,
}

impl FavouriteStatusOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl RequestOptions for FavouriteStatusOptions {
    fn to_request(&self) -> Result<HttpRequest, MastodonError> {
        let id = required(&self.id, "id")?;
        Ok(HttpRequest::get(format!("/api/v1/statuses/{id}/favourite")))
    }
}

/// Options for reblogging (boosting) a status.
///
/// <https://docs.joinmastodon.org/methods/statuses/#boost>
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReblogStatusOptions {
    pub id: String,
    /// Visibility of the reblog. The server defaults to public.
    pub visibility: Option<Visibility>,
}

impl ReblogStatusOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            visibility: None,
        }
    }
}

impl RequestOptions for ReblogStatusOptions {
    fn to_request(&self) -> Result<HttpRequest, MastodonError> {
        let id = required(&self.id, "id")?;
        let mut query = Params::default();
        query.opt("visibility", self.visibility);
        Ok(HttpRequest::get_with_query(
            format!("/api/v1/statuses/{id}/reblog"),
            query.into_pairs(),
        ))
    }
}

/// Options for bookmarking a status.
///
/// <https://docs.joinmastodon.org/methods/statuses/#bookmark>
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkStatusOptions {
    pub id: String,
}

impl BookmarkStatusOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl RequestOptions for BookmarkStatusOptions {
    fn to_request(&self) -> Result<HttpRequest, MastodonError> {
        let id = required(&self.id, "id")?;
        Ok(HttpRequest::get(format!("/api/v1/statuses/{id}/bookmark")))
    }
}

macro_rules! from_status_id {
    ($($options:ty),+ $(,)?) => {
        $(
            impl From<&str> for $options {
                fn from(id: &str) -> Self {
                    Self::new(id)
                }
            }

            impl From<String> for $options {
                fn from(id: String) -> Self {
                    Self::new(id)
                }
            }
        )+
    };
}

from_status_id!(
    GetStatusOptions,
    FavouriteStatusOptions,
    ReblogStatusOptions,
    BookmarkStatusOptions,
);
