//! In-memory stand-in for a Mastodon server.
//!
//! Serves the account, status and timeline routes the client library calls,
//! with rate-limit headers on every response and `Link` pagination on
//! timelines. State lives in memory and is seeded on startup.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use chrono::{DateTime, NaiveDate, SecondsFormat, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};

/// Bearer token accepted by the routes that need authorization.
pub const ACCESS_TOKEN: &str = "mock-access-token";
/// Domain the seeded account and statuses claim to live on.
pub const LOCAL_DOMAIN: &str = "mastodon.local";
/// Requests allowed per rate-limit window.
pub const RATE_LIMIT: u32 = 300;
/// Number of statuses present at startup, with IDs `1..=SEEDED_STATUSES`.
pub const SEEDED_STATUSES: u64 = 30;

const DEFAULT_PAGE: usize = 20;
const MAX_PAGE: usize = 40;
const RATE_WINDOW_MINUTES: i64 = 5;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub username: String,
    pub acct: String,
    pub display_name: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub note: String,
    pub followers_count: u64,
    pub following_count: u64,
    pub statuses_count: u64,
    pub last_status_at: Option<NaiveDate>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MediaAttachment {
    pub id: String,
    #[serde(rename = "type")]
    pub media_type: String,
    pub url: String,
    pub preview_url: String,
    pub remote_url: Option<String>,
    pub meta: serde_json::Value,
    pub description: Option<String>,
    pub blurhash: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Status {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub in_reply_to_id: Option<String>,
    pub sensitive: bool,
    pub spoiler_text: String,
    pub visibility: String,
    pub language: Option<String>,
    pub uri: String,
    pub url: String,
    pub replies_count: u64,
    pub reblogs_count: u64,
    pub favourites_count: u64,
    pub favourited: bool,
    pub reblogged: bool,
    pub bookmarked: bool,
    pub content: String,
    pub reblog: Option<Box<Status>>,
    pub account: Account,
    pub media_attachments: Vec<MediaAttachment>,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug)]
struct Store {
    account: Account,
    statuses: BTreeMap<u64, Status>,
    next_id: u64,
}

impl Store {
    fn seeded() -> Self {
        let base = DateTime::from_timestamp(1_767_225_600, 0).unwrap_or_default();
        let account = Account {
            id: "1".to_string(),
            username: "alice".to_string(),
            acct: "alice".to_string(),
            display_name: "Alice".to_string(),
            url: format!("https://{LOCAL_DOMAIN}/@alice"),
            created_at: base,
            note: "<p>Testing things.</p>".to_string(),
            followers_count: 12,
            following_count: 3,
            statuses_count: 0,
            last_status_at: None,
        };
        let mut store = Self {
            account,
            statuses: BTreeMap::new(),
            next_id: 1,
        };

        for n in 1..=SEEDED_STATUSES {
            let created_at = base + TimeDelta::minutes(n as i64);
            let mut status = store.new_status(format!("<p>Status number {n}</p>"), created_at);
            if n % 3 == 0 {
                status.content = format!("<p>Status number {n} #rust</p>");
                status.tags.push(Tag {
                    name: "rust".to_string(),
                    url: format!("https://{LOCAL_DOMAIN}/tags/rust"),
                });
            }
            if n % 5 == 0 {
                status.media_attachments.push(image_attachment(n));
            }
            store.insert(status);
        }
        store
    }

    fn new_status(&mut self, content: String, created_at: DateTime<Utc>) -> Status {
        let id = self.next_id;
        self.next_id += 1;
        Status {
            id: id.to_string(),
            created_at,
            in_reply_to_id: None,
            sensitive: false,
            spoiler_text: String::new(),
            visibility: "public".to_string(),
            language: Some("en".to_string()),
            uri: format!("https://{LOCAL_DOMAIN}/users/alice/statuses/{id}"),
            url: format!("https://{LOCAL_DOMAIN}/@alice/{id}"),
            replies_count: 0,
            reblogs_count: 0,
            favourites_count: 0,
            favourited: false,
            reblogged: false,
            bookmarked: false,
            content,
            reblog: None,
            account: self.account.clone(),
            media_attachments: Vec::new(),
            tags: Vec::new(),
        }
    }

    fn insert(&mut self, status: Status) {
        self.account.statuses_count += 1;
        self.account.last_status_at = Some(status.created_at.date_naive());
        if let Ok(id) = status.id.parse() {
            self.statuses.insert(id, status);
        }
    }

    fn status(&self, id: &str) -> Result<&Status, ApiError> {
        let id: u64 = id.parse().map_err(|_| ApiError::NotFound)?;
        self.statuses.get(&id).ok_or(ApiError::NotFound)
    }

    fn status_mut(&mut self, id: &str) -> Result<&mut Status, ApiError> {
        let id: u64 = id.parse().map_err(|_| ApiError::NotFound)?;
        self.statuses.get_mut(&id).ok_or(ApiError::NotFound)
    }
}

fn image_attachment(n: u64) -> MediaAttachment {
    MediaAttachment {
        id: format!("{}", 1000 + n),
        media_type: "image".to_string(),
        url: format!("https://{LOCAL_DOMAIN}/media/{n}/original.png"),
        preview_url: format!("https://{LOCAL_DOMAIN}/media/{n}/small.png"),
        remote_url: None,
        meta: json!({
            "original": {
                "width": 640, "height": 480, "size": "640x480", "aspect": 1.3333333333333333
            },
            "small": {
                "width": 400, "height": 300, "size": "400x300", "aspect": 1.3333333333333333
            },
            "focus": { "x": 0.0, "y": 0.0 }
        }),
        description: Some(format!("Picture {n}")),
        blurhash: None,
    }
}

struct AppState {
    store: RwLock<Store>,
    remaining: AtomicU32,
}

type SharedState = Arc<AppState>;

#[derive(Debug)]
enum ApiError {
    Unauthorized,
    NotFound,
    Unprocessable(String),
    TooManyRequests,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "The access token is invalid".to_string(),
            ),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Record not found".to_string()),
            ApiError::Unprocessable(message) => (StatusCode::UNPROCESSABLE_ENTITY, message),
            ApiError::TooManyRequests => (
                StatusCode::TOO_MANY_REQUESTS,
                "Too many requests".to_string(),
            ),
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}

pub fn app() -> Router {
    let state: SharedState = Arc::new(AppState {
        store: RwLock::new(Store::seeded()),
        remaining: AtomicU32::new(RATE_LIMIT),
    });
    Router::new()
        .route("/api/v1/accounts/lookup", get(lookup_account))
        .route("/api/v1/accounts/{id}", get(get_account))
        .route("/api/v1/statuses", post(post_status))
        .route("/api/v1/statuses/{id}", get(get_status))
        .route("/api/v1/statuses/{id}/favourite", get(favourite_status))
        .route("/api/v1/statuses/{id}/reblog", get(reblog_status))
        .route("/api/v1/statuses/{id}/bookmark", get(bookmark_status))
        .route("/api/v1/timelines/tag/{hashtag}", get(hashtag_timeline))
        .route("/api/v1/timelines/public", get(public_timeline))
        .layer(middleware::from_fn_with_state(state.clone(), rate_limit))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn rate_limit(State(state): State<SharedState>, request: Request, next: Next) -> Response {
    let previous = state
        .remaining
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| {
            Some(n.saturating_sub(1))
        })
        .unwrap_or_else(|current| current);
    tracing::debug!(
        method = %request.method(),
        uri = %request.uri(),
        remaining = previous.saturating_sub(1),
        "request"
    );

    let mut response = if previous == 0 {
        ApiError::TooManyRequests.into_response()
    } else {
        next.run(request).await
    };

    let reset = (Utc::now() + TimeDelta::minutes(RATE_WINDOW_MINUTES))
        .to_rfc3339_opts(SecondsFormat::Millis, true);
    let headers = response.headers_mut();
    headers.insert("x-ratelimit-limit", HeaderValue::from(RATE_LIMIT));
    headers.insert(
        "x-ratelimit-remaining",
        HeaderValue::from(previous.saturating_sub(1)),
    );
    if let Ok(reset) = HeaderValue::from_str(&reset) {
        headers.insert("x-ratelimit-reset", reset);
    }
    response
}

fn authorize(headers: &HeaderMap) -> Result<(), ApiError> {
    let expected = format!("Bearer {ACCESS_TOKEN}");
    match headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
    {
        Some(value) if value == expected => Ok(()),
        _ => Err(ApiError::Unauthorized),
    }
}

#[derive(Deserialize)]
struct LookupParams {
    acct: Option<String>,
}

async fn lookup_account(
    State(state): State<SharedState>,
    Query(params): Query<LookupParams>,
) -> Result<Json<Account>, ApiError> {
    let acct = params.acct.unwrap_or_default();
    let acct = acct.trim().trim_start_matches('@');
    let (username, domain) = match acct.split_once('@') {
        Some((username, domain)) => (username, Some(domain)),
        None => (acct, None),
    };
    if domain.is_some_and(|domain| !domain.eq_ignore_ascii_case(LOCAL_DOMAIN)) {
        return Err(ApiError::NotFound);
    }

    let store = state.store.read().await;
    if store.account.username.eq_ignore_ascii_case(username) {
        Ok(Json(store.account.clone()))
    } else {
        Err(ApiError::NotFound)
    }
}

async fn get_account(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Account>, ApiError> {
    let store = state.store.read().await;
    if store.account.id == id {
        Ok(Json(store.account.clone()))
    } else {
        Err(ApiError::NotFound)
    }
}

async fn get_status(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Status>, ApiError> {
    let store = state.store.read().await;
    store.status(&id).map(|status| Json(status.clone()))
}

#[derive(Deserialize)]
struct PostStatusForm {
    #[serde(default)]
    status: String,
    in_reply_to_id: Option<String>,
    #[serde(default)]
    sensitive: bool,
    #[serde(default)]
    spoiler_text: String,
    visibility: Option<String>,
    language: Option<String>,
}

async fn post_status(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Form(form): Form<PostStatusForm>,
) -> Result<Json<Status>, ApiError> {
    authorize(&headers)?;
    if form.status.trim().is_empty() {
        return Err(ApiError::Unprocessable(
            "Validation failed: Text can't be blank".to_string(),
        ));
    }
    let visibility = parse_visibility(form.visibility.as_deref())?;

    let mut store = state.store.write().await;
    if let Some(parent) = &form.in_reply_to_id {
        store.status_mut(parent)?.replies_count += 1;
    }

    let mut status = store.new_status(format!("<p>{}</p>", form.status), Utc::now());
    status.in_reply_to_id = form.in_reply_to_id;
    status.sensitive = form.sensitive;
    status.spoiler_text = form.spoiler_text;
    status.visibility = visibility;
    status.language = form.language.or(status.language);
    store.insert(status.clone());

    tracing::info!(id = %status.id, "status posted");
    Ok(Json(status))
}

fn parse_visibility(value: Option<&str>) -> Result<String, ApiError> {
    match value.map(str::to_ascii_lowercase).as_deref() {
        None => Ok("public".to_string()),
        Some(v @ ("public" | "unlisted" | "private" | "direct")) => Ok(v.to_string()),
        Some(other) => Err(ApiError::Unprocessable(format!(
            "Validation failed: Visibility {other} is not included in the list"
        ))),
    }
}

async fn favourite_status(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Status>, ApiError> {
    authorize(&headers)?;
    let mut store = state.store.write().await;
    let status = store.status_mut(&id)?;
    if !status.favourited {
        status.favourited = true;
        status.favourites_count += 1;
    }
    Ok(Json(status.clone()))
}

async fn bookmark_status(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Status>, ApiError> {
    authorize(&headers)?;
    let mut store = state.store.write().await;
    let status = store.status_mut(&id)?;
    status.bookmarked = true;
    Ok(Json(status.clone()))
}

#[derive(Deserialize)]
struct ReblogParams {
    visibility: Option<String>,
}

async fn reblog_status(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(params): Query<ReblogParams>,
) -> Result<Json<Status>, ApiError> {
    authorize(&headers)?;
    let visibility = parse_visibility(params.visibility.as_deref())?;

    let mut store = state.store.write().await;
    let original = store.status_mut(&id)?;
    if !original.reblogged {
        original.reblogged = true;
        original.reblogs_count += 1;
    }
    let original = original.clone();

    let mut wrapper = store.new_status(String::new(), Utc::now());
    wrapper.visibility = visibility;
    wrapper.reblogged = true;
    wrapper.reblog = Some(Box::new(original));
    store.insert(wrapper.clone());
    Ok(Json(wrapper))
}

#[derive(Debug, Default, Deserialize)]
struct TimelineParams {
    #[serde(default)]
    local: bool,
    #[serde(default)]
    remote: bool,
    #[serde(default)]
    only_media: bool,
    max_id: Option<u64>,
    since_id: Option<u64>,
    min_id: Option<u64>,
    limit: Option<usize>,
}

async fn hashtag_timeline(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(hashtag): Path<String>,
    Query(params): Query<TimelineParams>,
) -> Response {
    let store = state.store.read().await;
    let page = timeline_page(&store, &params, |status| {
        status
            .tags
            .iter()
            .any(|tag| tag.name.eq_ignore_ascii_case(&hashtag))
    });
    paged(&headers, &format!("/api/v1/timelines/tag/{hashtag}"), page)
}

async fn public_timeline(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(params): Query<TimelineParams>,
) -> Response {
    let store = state.store.read().await;
    let page = timeline_page(&store, &params, |_| true);
    paged(&headers, "/api/v1/timelines/public", page)
}

/// Newest-first page of the statuses accepted by `filter`.
///
/// With `min_id` the page holds the statuses immediately newer than it,
/// otherwise the newest ones below `max_id`.
fn timeline_page(
    store: &Store,
    params: &TimelineParams,
    filter: impl Fn(&Status) -> bool,
) -> Vec<Status> {
    let limit = params.limit.unwrap_or(DEFAULT_PAGE).clamp(1, MAX_PAGE);
    let matching = store
        .statuses
        .iter()
        .filter(|(id, _)| params.max_id.map_or(true, |max| **id < max))
        .filter(|(id, _)| params.since_id.map_or(true, |since| **id > since))
        .filter(|(id, _)| params.min_id.map_or(true, |min| **id > min))
        // Every seeded status is local.
        .filter(|_| !params.remote)
        .filter(|(_, status)| !params.only_media || !status.media_attachments.is_empty())
        .filter(|(_, status)| filter(status))
        .map(|(_, status)| status.clone());

    if params.min_id.is_some() {
        let mut page: Vec<Status> = matching.take(limit).collect();
        page.reverse();
        page
    } else {
        matching.rev().take(limit).collect()
    }
}

fn paged(headers: &HeaderMap, path: &str, page: Vec<Status>) -> Response {
    let link = match (page.first(), page.last()) {
        (Some(newest), Some(oldest)) => {
            let host = headers
                .get(header::HOST)
                .and_then(|value| value.to_str().ok())
                .unwrap_or(LOCAL_DOMAIN);
            Some(format!(
                r#"<http://{host}{path}?max_id={}>; rel="next", <http://{host}{path}?min_id={}>; rel="prev""#,
                oldest.id, newest.id
            ))
        }
        _ => None,
    };

    let mut response = Json(page).into_response();
    if let Some(value) = link.and_then(|link| HeaderValue::from_str(&link).ok()) {
        response.headers_mut().insert(header::LINK, value);
    }
    response
}
