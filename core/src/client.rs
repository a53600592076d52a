//! HTTP client for a single Mastodon server.
//!
//! # Design
//! `MastodonHttpClient` holds the server domain, an optional bearer token and
//! a transport, and carries no mutable state between calls. Every call is
//! `options -> request -> prepare -> transport -> response`: options validate
//! and build a relative request, `prepare_request` makes it absolute and adds
//! the credential, and the transport executes it. Status codes are left to
//! the response envelopes.

use tracing::{instrument, Span};

use crate::endpoints::{AccountsRawEndpoint, StatusesRawEndpoint, TimelinesRawEndpoint};
use crate::error::MastodonError;
use crate::http::{HttpRequest, HttpResponse};
use crate::options::RequestOptions;
use crate::transport::{AsyncTransport, HttpTransport, Transport};

/// Client for the Mastodon server at `domain`.
#[derive(Debug, Clone)]
pub struct MastodonHttpClient<T = HttpTransport> {
    domain: String,
    access_token: Option<String>,
    transport: T,
}

impl MastodonHttpClient {
    /// A client for `domain` (e.g. `mastodon.social`) using the default transport.
    pub fn new(domain: impl Into<String>) -> Self {
        Self::with_transport(domain, HttpTransport::new())
    }
}

impl<T> MastodonHttpClient<T> {
    pub fn with_transport(domain: impl Into<String>, transport: T) -> Self {
        Self {
            domain: domain.into().trim().trim_end_matches('/').to_string(),
            access_token: None,
            transport,
        }
    }

    /// Authorize requests with `token`. A blank token leaves the client anonymous.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.access_token = (!token.trim().is_empty()).then_some(token);
        self
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn is_authorized(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Make a relative URL absolute against `https://{domain}` and attach the
    /// bearer token, if any.
    pub fn prepare_request(&self, mut request: HttpRequest) -> Result<HttpRequest, MastodonError> {
        if request.url.trim().is_empty() {
            return Err(MastodonError::PropertyNotSet("url"));
        }

        if request.url.starts_with('/') {
            if self.domain.is_empty() {
                return Err(MastodonError::PropertyNotSet("domain"));
            }
            request.url = format!("https://{}{}", self.domain, request.url);
        }

        if let Some(token) = &self.access_token {
            request
                .headers
                .push(("Authorization".to_string(), format!("Bearer {token}")));
        }

        Ok(request)
    }

    pub fn accounts(&self) -> AccountsRawEndpoint<'_, T> {
        AccountsRawEndpoint::new(self)
    }

    pub fn statuses(&self) -> StatusesRawEndpoint<'_, T> {
        StatusesRawEndpoint::new(self)
    }

    pub fn timelines(&self) -> TimelinesRawEndpoint<'_, T> {
        TimelinesRawEndpoint::new(self)
    }
}

impl<T: Transport> MastodonHttpClient<T> {
    /// Prepare and send `request`, returning the raw response whatever its status.
    #[instrument(
        name = "mastodon_request",
        skip_all,
        fields(
            http.method = %request.method,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
        )
    )]
    pub fn send(&self, request: HttpRequest) -> Result<HttpResponse, MastodonError> {
        let request = self.prepare_request(request)?;
        Span::current().record("http.url", request.url.as_str());

        let response = self
            .transport
            .send(request)
            .map_err(MastodonError::Transport)?;

        Span::current().record("http.status_code", response.status);
        Ok(response)
    }

    /// Build the request described by `options` and send it.
    pub fn get_response<O>(&self, options: &O) -> Result<HttpResponse, MastodonError>
    where
        O: RequestOptions + ?Sized,
    {
        self.send(options.to_request()?)
    }
}

impl<T: AsyncTransport> MastodonHttpClient<T> {
    /// Async variant of [`MastodonHttpClient::send`].
    #[instrument(
        name = "mastodon_request",
        skip_all,
        fields(
            http.method = %request.method,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
        )
    )]
    pub async fn send_async(&self, request: HttpRequest) -> Result<HttpResponse, MastodonError> {
        let request = self.prepare_request(request)?;
        Span::current().record("http.url", request.url.as_str());

        let response = self
            .transport
            .send_async(request)
            .await
            .map_err(MastodonError::Transport)?;

        Span::current().record("http.status_code", response.status);
        Ok(response)
    }

    /// Async variant of [`MastodonHttpClient::get_response`].
    pub async fn get_response_async<O>(&self, options: &O) -> Result<HttpResponse, MastodonError>
    where
        O: RequestOptions + ?Sized,
    {
        let request = options.to_request()?;
        self.send_async(request).await
    }
}
