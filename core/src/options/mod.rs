//! Per-operation request options.
//!
//! # Design
//! Every API operation has one options type implementing `RequestOptions`.
//! `to_request` validates required fields and emits a relative
//! `HttpRequest`; it never touches the network, so a validation failure is
//! always reported before any I/O. Unset optional fields are left out of the
//! query or form entirely. Each options type also converts from the
//! primitive argument(s) of its operation, which is how the endpoints offer
//! their convenience forms.

mod accounts;
mod statuses;
mod timelines;

pub use accounts::{AccountLookupOptions, GetAccountOptions};
pub use statuses::{
    BookmarkStatusOptions, FavouriteStatusOptions, GetStatusOptions, PostStatusOptions,
    ReblogStatusOptions,
};
pub use timelines::{GetHashtagTimelineOptions, GetPublicTimelineOptions};

use crate::error::MastodonError;
use crate::http::HttpRequest;

/// Options describing a single request to the Mastodon API.
pub trait RequestOptions {
    /// Validate the options and build the request. The URL is relative to the
    /// server root.
    fn to_request(&self) -> Result<HttpRequest, MastodonError>;
}

/// Return `value` if it holds non-whitespace text, otherwise fail naming `field`.
fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, MastodonError> {
    if value.trim().is_empty() {
        return Err(MastodonError::PropertyNotSet(field));
    }
    Ok(value)
}

/// Ordered key/value pairs for a query string or form body.
#[derive(Debug, Default)]
struct Params(Vec<(String, String)>);

impl Params {
    fn add(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.0.push((key.to_string(), value.to_string()));
        self
    }

    /// Add `key=true` only when `flag` is set.
    fn flag(&mut self, key: &str, flag: bool) -> &mut Self {
        if flag {
            self.add(key, "true");
        }
        self
    }

    /// Add `key` only when `value` holds non-whitespace text.
    fn text(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            self.add(key, value);
        }
        self
    }

    fn opt(&mut self, key: &str, value: Option<impl ToString>) -> &mut Self {
        if let Some(value) = value {
            self.add(key, value);
        }
        self
    }

    fn into_pairs(self) -> Vec<(String, String)> {
        self.0
    }
}
