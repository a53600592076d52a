//! Client library for the Mastodon REST API.
//!
//! # Overview
//! Per-operation options types describe and validate a request, a
//! [`MastodonHttpClient`] makes it absolute, authorizes it and sends it
//! through a pluggable [`Transport`] (or [`AsyncTransport`]), and the response
//! envelopes classify the status, snapshot the rate-limit headers and parse
//! the JSON body into the models.
//!
//! # Design
//! - Raw endpoints (`client.statuses()`) return the [`HttpResponse`] as it
//!   came back; typed endpoints (`service.statuses()`) return envelopes or a
//!   [`MastodonError`].
//! - Every operation is available blocking and `async`, and takes either its
//!   options value or the primitive argument it converts from.
//! - Nothing is cached or retried and the client holds no mutable state, so a
//!   client can be shared across threads freely.
//! - [`HttpTransport`] is the default transport: `ureq` for blocking calls,
//!   `reqwest` for async ones.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod link;
pub mod models;
pub mod options;
pub mod response;
pub mod service;
pub mod transport;

pub use client::MastodonHttpClient;
pub use config::ClientConfig;
pub use error::{MastodonError, MastodonHttpError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use link::{LinkHeader, PageToken};
pub use models::{Account, MediaAttachment, MediaType, PreviewCard, Status, Visibility};
pub use options::RequestOptions;
pub use response::{
    AccountResponse, MastodonListResponse, MastodonResponse, RateLimit, StatusListResponse,
    StatusResponse,
};
pub use service::MastodonHttpService;
pub use transport::{AsyncTransport, HttpTransport, Transport};
