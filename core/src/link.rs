//! Pagination cursor parsed from the `Link` response header.
//!
//! Mastodon pages list endpoints with a header such as
//!
//! ```text
//! <https://mastodon.social/api/v1/timelines/public?max_id=104>; rel="next",
//! <https://mastodon.social/api/v1/timelines/public?min_id=125>; rel="prev"
//! ```
//!
//! A `next` link only counts when its URL carries `max_id`, a `prev` link only
//! when its URL carries `min_id`. Anything else is skipped silently.

use std::sync::LazyLock;

use regex::Regex;

use crate::http::HttpResponse;

static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<(.+?)>; rel="([a-z]+)""#).expect("link pattern is valid"));

static MAX_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"max_id=([0-9]+)").expect("max_id pattern is valid"));

static MIN_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"min_id=([0-9]+)").expect("min_id pattern is valid"));

/// One direction of the cursor: the page URL and its boundary ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageToken {
    pub url: String,
    pub id: String,
}

/// Forward and backward pagination tokens of a list response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkHeader {
    next: Option<PageToken>,
    previous: Option<PageToken>,
}

impl LinkHeader {
    /// Parse the raw header value. Empty input yields a cursor with no tokens.
    pub fn parse(value: &str) -> Self {
        let mut header = Self::default();

        for captures in LINK_PATTERN.captures_iter(value) {
            let url = &captures[1];
            match &captures[2] {
                "next" => {
                    if let Some(id) = boundary(&MAX_ID_PATTERN, url) {
                        header.next = Some(PageToken {
                            url: url.to_string(),
                            id,
                        });
                    }
                }
                "prev" => {
                    if let Some(id) = boundary(&MIN_ID_PATTERN, url) {
                        header.previous = Some(PageToken {
                            url: url.to_string(),
                            id,
                        });
                    }
                }
                _ => {}
            }
        }

        header
    }

    /// Parse the `Link` header of `response`, if present.
    pub fn from_response(response: &HttpResponse) -> Self {
        Self::parse(response.header("Link").unwrap_or_default())
    }

    pub fn has_next_page(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_previous_page(&self) -> bool {
        self.previous.is_some()
    }

    pub fn next(&self) -> Option<&PageToken> {
        self.next.as_ref()
    }

    pub fn previous(&self) -> Option<&PageToken> {
        self.previous.as_ref()
    }

    pub fn next_url(&self) -> Option<&str> {
        self.next.as_ref().map(|token| token.url.as_str())
    }

    /// Pass as `max_id` to fetch the next (older) page.
    pub fn max_id(&self) -> Option<&str> {
        self.next.as_ref().map(|token| token.id.as_str())
    }

    pub fn previous_url(&self) -> Option<&str> {
        self.previous.as_ref().map(|token| token.url.as_str())
    }

    /// Pass as `min_id` to fetch the previous (newer) page.
    pub fn min_id(&self) -> Option<&str> {
        self.previous.as_ref().map(|token| token.id.as_str())
    }
}

fn boundary(pattern: &Regex, url: &str) -> Option<String> {
    pattern
        .captures(url)
        .map(|captures| captures[1].to_string())
}
