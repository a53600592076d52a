//! Error types for the Mastodon API client.
//!
//! # Design
//! Four failure classes stay distinguishable for the caller:
//! - `PropertyNotSet`: an options value was missing a required field. Raised
//!   before any request is built, so nothing reached the network.
//! - `Transport`: the transport failed to produce a response at all. The
//!   transport's own error is kept as the source, unchanged.
//! - `Http`: a response arrived but its status was not accepted.
//! - `Parse`: the status was accepted but the body did not match the model.

use thiserror::Error;

use crate::http::HttpResponse;
use crate::response::RateLimit;

/// The error type of a transport, passed through as-is.
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by the client, the endpoints and the response envelopes.
#[derive(Debug, Error)]
pub enum MastodonError {
    /// A required property of an options value (or the client) is not set.
    #[error("required property `{0}` is not set")]
    PropertyNotSet(&'static str),

    /// The transport failed before a response was received.
    #[error("transport error: {0}")]
    Transport(#[source] TransportError),

    /// The Mastodon API answered with a status other than 200 or 201.
    #[error(transparent)]
    Http(Box<MastodonHttpError>),

    /// The body of an accepted response could not be parsed.
    #[error("failed to parse response body: {0}")]
    Parse(#[from] serde_json::Error),

    /// A configuration value expected in the environment is missing.
    #[error("environment variable `{0}` is not set")]
    MissingEnvironment(&'static str),
}

impl MastodonError {
    /// The HTTP status of a rejected response, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            MastodonError::Http(err) => Some(err.status()),
            _ => None,
        }
    }
}

impl From<MastodonHttpError> for MastodonError {
    fn from(err: MastodonHttpError) -> Self {
        MastodonError::Http(Box::new(err))
    }
}

/// A response rejected by the Mastodon API.
///
/// Keeps the raw response so callers can inspect headers and body, plus the
/// rate-limit snapshot taken before the status was checked.
#[derive(Debug, Error)]
#[error("invalid response received from the Mastodon API (status: {})", .response.status)]
pub struct MastodonHttpError {
    response: HttpResponse,
    rate_limit: RateLimit,
    error: Option<String>,
}

impl MastodonHttpError {
    pub fn new(response: HttpResponse, rate_limit: RateLimit) -> Self {
        let error = server_message(&response);
        Self {
            response,
            rate_limit,
            error,
        }
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

    /// The `error` message of the JSON error envelope, if the server sent one.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Best-effort extraction of `{"error": "..."}`. Anything that is not a JSON
/// object with a string `error` yields `None`.
fn server_message(response: &HttpResponse) -> Option<String> {
    let is_json = response
        .content_type()
        .is_some_and(|ct| ct.eq_ignore_ascii_case("application/json"));
    if !is_json {
        return None;
    }
    let json: serde_json::Value = serde_json::from_str(&response.body).ok()?;
    json.get("error")?.as_str().map(str::to_string)
}
