//! End-to-end runs against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives every endpoint through
//! the real `HttpTransport`, blocking and async. The client always builds
//! `https://` URLs, so a thin wrapper transport rewrites them to plain
//! `http://` for the loopback server.

use std::future::Future;
use std::net::SocketAddr;

use mastodon_core::options::{
    GetHashtagTimelineOptions, GetPublicTimelineOptions, PostStatusOptions, ReblogStatusOptions,
};
use mastodon_core::{
    AsyncTransport, HttpRequest, HttpResponse, HttpTransport, MastodonError, MastodonHttpClient,
    MastodonHttpService, StatusResponse, Transport, TransportError, Visibility,
};
use mock_server::{ACCESS_TOKEN, RATE_LIMIT};

/// `HttpTransport` that talks plain HTTP to the loopback server.
#[derive(Debug, Clone, Default)]
struct Loopback(HttpTransport);

fn downgrade(mut request: HttpRequest) -> HttpRequest {
    if let Some(rest) = request.url.strip_prefix("https://") {
        request.url = format!("http://{rest}");
    }
    request
}

impl Transport for Loopback {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.0.send(downgrade(request))
    }
}

impl AsyncTransport for Loopback {
    fn send_async(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send {
        self.0.send_async(downgrade(request))
    }
}

fn service(addr: SocketAddr, token: Option<&str>) -> MastodonHttpService<Loopback> {
    let client = MastodonHttpClient::with_transport(addr.to_string(), Loopback::default());
    let client = match token {
        Some(token) => client.with_access_token(token),
        None => client,
    };
    MastodonHttpService::from_client(client)
}

/// Run the mock server on its own runtime thread and return its address.
fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

#[test]
fn blocking_flow() {
    let addr = start_server();
    let mastodon = service(addr, Some(ACCESS_TOKEN));

    // Step 1: accounts.
    let alice = mastodon.accounts().lookup("alice").unwrap();
    assert_eq!(alice.body().username, "alice");
    assert_eq!(alice.rate_limit().limit, Some(RATE_LIMIT));
    assert!(alice.rate_limit().remaining.is_some());
    assert!(alice.rate_limit().reset.is_some());

    let same = mastodon.accounts().get_account(alice.body().id.as_str()).unwrap();
    assert_eq!(same.body().acct, "alice");

    // Step 2: read a seeded status.
    let status = mastodon.statuses().get_status("5").unwrap();
    assert_eq!(status.body().id, "5");
    assert_eq!(status.body().media_attachments.len(), 1);
    assert_eq!(status.body().account.username, "alice");

    // Step 3: post, then act on the new status.
    let mut options = PostStatusOptions::new("hello from the integration test");
    options.visibility = Some(Visibility::Unlisted);
    options.spoiler_text = Some("testing".to_string());
    let posted = mastodon.statuses().post_status(options).unwrap();
    assert_eq!(posted.body().content, "<p>hello from the integration test</p>");
    assert_eq!(posted.body().visibility, Visibility::Unlisted);
    assert_eq!(posted.body().spoiler_text, "testing");
    let id = posted.body().id.clone();

    let favourited = mastodon.statuses().favourite_status(id.as_str()).unwrap();
    assert_eq!(favourited.body().favourited, Some(true));
    assert_eq!(favourited.body().favourites_count, 1);

    let bookmarked = mastodon.statuses().bookmark_status(id.as_str()).unwrap();
    assert_eq!(bookmarked.body().bookmarked, Some(true));

    let mut reblog = ReblogStatusOptions::new(id.as_str());
    reblog.visibility = Some(Visibility::Private);
    let reblogged = mastodon.statuses().reblog_status(reblog).unwrap();
    assert_eq!(reblogged.body().visibility, Visibility::Private);
    let original = reblogged.body().reblog.as_deref().unwrap();
    assert_eq!(original.id, id);
    assert_eq!(original.reblogged, Some(true));

    // Step 4: the server rejects what local validation lets through.
    let blank = mastodon
        .client()
        .send(HttpRequest::post_form(
            "/api/v1/statuses",
            &[("status".to_string(), "   ".to_string())],
        ))
        .unwrap();
    match StatusResponse::new(blank).unwrap_err() {
        MastodonError::Http(err) => {
            assert_eq!(err.status(), 422);
            assert_eq!(err.error(), Some("Validation failed: Text can't be blank"));
        }
        other => panic!("expected http error, got {other:?}"),
    }

    // Step 5: unknown status and missing credential.
    let err = mastodon.statuses().get_status("999999").unwrap_err();
    assert_eq!(err.status(), Some(404));

    let anonymous = service(addr, None);
    let err = anonymous.statuses().favourite_status("1").unwrap_err();
    match err {
        MastodonError::Http(err) => {
            assert_eq!(err.status(), 401);
            assert_eq!(err.error(), Some("The access token is invalid"));
        }
        other => panic!("expected http error, got {other:?}"),
    }

    // Step 6: local validation never reaches the server.
    let err = mastodon.statuses().get_status("").unwrap_err();
    assert!(matches!(err, MastodonError::PropertyNotSet("id")));
}

#[test]
fn blocking_hashtag_paging() {
    let addr = start_server();
    let mastodon = service(addr, None);

    let first = mastodon
        .timelines()
        .get_hashtag_timeline(("rust", Some(3), None))
        .unwrap();
    let ids: Vec<&str> = first.body().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["30", "27", "24"]);
    assert_eq!(first.link().max_id(), Some("24"));
    assert_eq!(first.link().min_id(), Some("30"));

    let second = mastodon
        .timelines()
        .get_hashtag_timeline(GetHashtagTimelineOptions::page(
            "rust",
            Some(3),
            first.link().max_id(),
        ))
        .unwrap();
    let ids: Vec<&str> = second.body().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["21", "18", "15"]);

    // Going back from the second page lands on the first again.
    let mut back = GetHashtagTimelineOptions::new("rust");
    back.min_id = second.link().min_id().map(str::to_string);
    back.limit = Some(3);
    let previous = mastodon.timelines().get_hashtag_timeline(back).unwrap();
    let ids: Vec<&str> = previous.body().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["30", "27", "24"]);

    let none = mastodon.timelines().get_hashtag_timeline("python").unwrap();
    assert!(none.body().is_empty());
    assert!(!none.link().has_next_page());
}

async fn spawn_server() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run(listener));
    addr
}

#[tokio::test]
async fn async_flow() {
    let addr = spawn_server().await;
    let mastodon = service(addr, Some(ACCESS_TOKEN));

    let alice = mastodon.accounts().lookup_async("alice").await.unwrap();
    assert_eq!(alice.body().id, "1");
    let alice = mastodon.accounts().get_account_async("1").await.unwrap();
    assert_eq!(alice.body().username, "alice");

    let status = mastodon.statuses().get_status_async("3").await.unwrap();
    assert_eq!(status.body().tags[0].name, "rust");

    let posted = mastodon
        .statuses()
        .post_status_async("posted asynchronously")
        .await
        .unwrap();
    let id = posted.body().id.clone();

    let favourited = mastodon
        .statuses()
        .favourite_status_async(id.as_str())
        .await
        .unwrap();
    assert_eq!(favourited.body().favourited, Some(true));

    let reblogged = mastodon
        .statuses()
        .reblog_status_async(id.as_str())
        .await
        .unwrap();
    assert_eq!(reblogged.body().reblog.as_deref().unwrap().id, id);

    let bookmarked = mastodon
        .statuses()
        .bookmark_status_async(id.as_str())
        .await
        .unwrap();
    assert_eq!(bookmarked.body().bookmarked, Some(true));

    let err = mastodon
        .statuses()
        .get_status_async("424242")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));

    let options = GetPublicTimelineOptions {
        only_media: true,
        limit: Some(2),
        ..Default::default()
    };
    let page = mastodon
        .timelines()
        .get_public_timeline_async(options)
        .await
        .unwrap();
    let ids: Vec<&str> = page.body().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["30", "25"]);
    assert_eq!(page.link().max_id(), Some("25"));

    let tagged = mastodon
        .timelines()
        .get_hashtag_timeline_async("rust")
        .await
        .unwrap();
    assert_eq!(tagged.body().len(), 10);

    // Remaining calls count down across requests.
    let before = page.rate_limit().remaining.unwrap();
    let after = tagged.rate_limit().remaining.unwrap();
    assert!(after < before);
}

#[tokio::test]
async fn async_transport_failure_is_reported() {
    // Nothing listens on the port once the listener is dropped.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mastodon = service(addr, None);
    let err = mastodon.statuses().get_status_async("1").await.unwrap_err();
    assert!(matches!(err, MastodonError::Transport(_)));
}
