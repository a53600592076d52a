//! The HTTP transport collaborator.
//!
//! # Design
//! The client never speaks HTTP itself. It prepares an `HttpRequest` (absolute
//! URL, headers, body) and hands it to a transport, which executes it and
//! returns every status as data. Transport failures (DNS, connection, TLS)
//! come back as the transport's own error, boxed but otherwise untouched.
//!
//! `HttpTransport` is the default: `ureq` for blocking calls and `reqwest` for
//! async ones. Anything else implementing the two traits can stand in, which
//! is how the tests observe requests without a network.

use std::fmt;
use std::future::Future;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Blocking execution of a prepared request.
pub trait Transport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Asynchronous execution of a prepared request.
///
/// Cancellation is whatever dropping the returned future does for the
/// underlying transport.
pub trait AsyncTransport {
    fn send_async(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

/// Default transport backed by `ureq` (blocking) and `reqwest` (async).
#[derive(Clone)]
pub struct HttpTransport {
    agent: ureq::Agent,
    client: reqwest::Client,
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport").finish_non_exhaustive()
    }
}

impl HttpTransport {
    pub fn new() -> Self {
        // Statuses are classified by the response envelope, not the transport.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            agent,
            client: reqwest::Client::new(),
        }
    }

    /// Build from preconfigured clients, e.g. with proxies or timeouts.
    pub fn from_clients(agent: ureq::Agent, client: reqwest::Client) -> Self {
        Self { agent, client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = request.full_url();

        let mut response = match request.method {
            HttpMethod::Get => {
                let mut builder = self.agent.get(&url);
                for (name, value) in &request.headers {
                    builder = builder.header(name, value);
                }
                builder.call()?
            }
            HttpMethod::Post => {
                let mut builder = self.agent.post(&url);
                for (name, value) in &request.headers {
                    builder = builder.header(name, value);
                }
                match request.body {
                    Some(body) => builder.send(body.as_bytes())?,
                    None => builder.send_empty()?,
                }
            }
        };

        let status = response.status().as_u16();
        let headers = collect_headers(response.headers());
        let body = response.body_mut().read_to_string()?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

impl AsyncTransport for HttpTransport {
    fn send_async(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        };
        let mut builder = self.client.request(method, request.full_url());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        async move {
            let response = builder.send().await?;
            let status = response.status().as_u16();
            let headers = collect_headers(response.headers());
            let body = response.text().await?;
            Ok(HttpResponse {
                status,
                headers,
                body,
            })
        }
    }
}

/// Copy headers into owned pairs, skipping values that are not valid text.
fn collect_headers(headers: &http::HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_string(), value.to_string()))
        })
        .collect()
}
