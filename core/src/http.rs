//! HTTP request and response values exchanged with the transport.
//!
//! # Design
//! Requests and responses are plain data. Options types build `HttpRequest`
//! values, the client prepares them (absolute URL, credential) and hands them
//! to a `Transport`, and the transport hands back an `HttpResponse` with the
//! status, headers and body text untouched. Status interpretation happens in
//! the `response` module, never in the transport.

use std::fmt;

use url::form_urlencoded;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content type of a form-encoded request body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// An HTTP request described as plain data.
///
/// `url` starts out relative (`/api/v1/...`) when built by an options type and
/// is made absolute by `MastodonHttpClient::prepare_request`. Query pairs are
/// kept apart from the URL until the transport asks for `full_url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get_with_query(url: impl Into<String>, query: Vec<(String, String)>) -> Self {
        Self {
            query,
            ..Self::get(url)
        }
    }

    /// A POST request whose body is the form encoding of `form`.
    pub fn post_form(url: impl Into<String>, form: &[(String, String)]) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            query: Vec::new(),
            headers: vec![("Content-Type".to_string(), FORM_CONTENT_TYPE.to_string())],
            body: Some(encode_pairs(form)),
        }
    }

    /// The URL with the encoded query string appended, if there is one.
    pub fn full_url(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }
        let separator = if self.url.contains('?') { '&' } else { '?' };
        format!("{}{separator}{}", self.url, encode_pairs(&self.query))
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Case-insensitive header lookup. The first matching header wins.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// The media type of the body without parameters, e.g. `application/json`
    /// for `application/json; charset=utf-8`.
    pub fn content_type(&self) -> Option<&str> {
        self.header("Content-Type")
            .and_then(|value| value.split(';').next())
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

fn encode_pairs(pairs: &[(String, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}
