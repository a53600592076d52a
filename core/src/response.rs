//! Response envelopes: status classification, rate limits and typed bodies.
//!
//! # Design
//! An envelope is only ever constructed from an accepted response (200 or
//! 201). Construction takes the rate-limit snapshot first, so a rejected
//! response still reports its limits through `MastodonHttpError`, then checks
//! the status, and only then parses the body.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use crate::error::{MastodonError, MastodonHttpError};
use crate::http::HttpResponse;
use crate::link::LinkHeader;
use crate::models::{Account, Status};

/// Statuses for which a response body is parsed.
const ACCEPTED_STATUSES: [u16; 2] = [200, 201];

pub type AccountResponse = MastodonResponse<Account>;
pub type StatusResponse = MastodonResponse<Status>;
pub type StatusListResponse = MastodonListResponse<Status>;

/// Rate-limit headers of a single response.
///
/// A header that is missing or does not parse leaves its field `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateLimit {
    /// Calls allowed within the current window.
    pub limit: Option<u32>,
    /// Calls left within the current window.
    pub remaining: Option<u32>,
    /// When the next window starts.
    pub reset: Option<DateTime<Utc>>,
}

impl RateLimit {
    pub fn from_response(response: &HttpResponse) -> Self {
        Self {
            limit: numeric_header(response, "X-RateLimit-Limit"),
            remaining: numeric_header(response, "X-RateLimit-Remaining"),
            reset: response
                .header("X-RateLimit-Reset")
                .and_then(|value| DateTime::parse_from_rfc3339(value.trim()).ok())
                .map(|time| time.with_timezone(&Utc)),
        }
    }
}

fn numeric_header(response: &HttpResponse, name: &str) -> Option<u32> {
    response.header(name)?.trim().parse().ok()
}

/// An accepted response from the Mastodon API with a parsed body.
#[derive(Debug, Clone)]
pub struct MastodonResponse<T> {
    response: HttpResponse,
    rate_limit: RateLimit,
    body: T,
}

impl<T: DeserializeOwned> MastodonResponse<T> {
    /// Classify `response` and parse its body as JSON into `T`.
    pub fn new(response: HttpResponse) -> Result<Self, MastodonError> {
        Self::parse_with(response, |body| serde_json::from_str(body))
    }
}

impl<T> MastodonResponse<T> {
    /// Classify `response` and parse its body with `parse`.
    ///
    /// `parse` is not called for rejected responses.
    pub fn parse_with<F>(response: HttpResponse, parse: F) -> Result<Self, MastodonError>
    where
        F: FnOnce(&str) -> serde_json::Result<T>,
    {
        let rate_limit = RateLimit::from_response(&response);
        if !ACCEPTED_STATUSES.contains(&response.status) {
            let err = MastodonHttpError::new(response, rate_limit);
            tracing::debug!(
                status = err.status(),
                error = ?err.error(),
                "mastodon api rejected request"
            );
            return Err(err.into());
        }
        let body = parse(&response.body)?;
        Ok(Self {
            response,
            rate_limit,
            body,
        })
    }

    pub fn status(&self) -> u16 {
        self.response.status
    }

    pub fn response(&self) -> &HttpResponse {
        &self.response
    }

    pub fn rate_limit(&self) -> &RateLimit {
        &self.rate_limit
    }

    pub fn body(&self) -> &T {
        &self.body
    }

    pub fn into_body(self) -> T {
        self.body
    }
}

/// An accepted response holding one page of `T` and its pagination cursor.
#[derive(Debug, Clone)]
pub struct MastodonListResponse<T> {
    inner: MastodonResponse<Vec<T>>,
    link: LinkHeader,
}

impl<T: DeserializeOwned> MastodonListResponse<T> {
    pub fn new(response: HttpResponse) -> Result<Self, MastodonError> {
        let inner = MastodonResponse::new(response)?;
        let link = LinkHeader::from_response(inner.response());
        Ok(Self { inner, link })
    }
}

impl<T> MastodonListResponse<T> {
    pub fn status(&self) -> u16 {
        self.inner.status()
    }

    pub fn response(&self) -> &HttpResponse {
        self.inner.response()
    }

    pub fn rate_limit(&self) -> &RateLimit {
        self.inner.rate_limit()
    }

    pub fn body(&self) -> &[T] {
        self.inner.body()
    }

    pub fn link(&self) -> &LinkHeader {
        &self.link
    }

    pub fn into_body(self) -> Vec<T> {
        self.inner.into_body()
    }
}
