//! Check request building and response handling against the JSON vectors in
//! `test-vectors/`.
//!
//! Requests are compared after `prepare_request`, so the vectors hold the
//! absolute URL a transport would see. Responses are fed straight into the
//! envelopes without any network.

use mastodon_core::options::{
    AccountLookupOptions, BookmarkStatusOptions, FavouriteStatusOptions, GetAccountOptions,
    GetHashtagTimelineOptions, GetPublicTimelineOptions, GetStatusOptions, PostStatusOptions,
    ReblogStatusOptions,
};
use mastodon_core::{
    AccountResponse, HttpMethod, HttpRequest, HttpResponse, LinkHeader, MastodonError,
    MastodonHttpClient, RateLimit, RequestOptions, StatusListResponse, StatusResponse,
    Visibility,
};
use serde_json::Value;

fn text(input: &Value, key: &str) -> String {
    input[key].as_str().unwrap_or_default().to_string()
}

fn opt_text(input: &Value, key: &str) -> Option<String> {
    input[key].as_str().map(str::to_string)
}

fn flag(input: &Value, key: &str) -> bool {
    input[key].as_bool().unwrap_or(false)
}

fn limit(input: &Value) -> Option<u32> {
    input["limit"].as_u64().map(|n| n as u32)
}

fn visibility(input: &Value) -> Option<Visibility> {
    input["visibility"].as_str().map(|v| v.parse().unwrap())
}

/// Build the options named by `operation` from the vector input.
fn options(operation: &str, input: &Value) -> Box<dyn RequestOptions> {
    match operation {
        "get_account" => Box::new(GetAccountOptions::new(text(input, "id"))),
        "lookup" => Box::new(AccountLookupOptions::new(text(input, "acct"))),
        "get_status" => Box::new(GetStatusOptions::new(text(input, "id"))),
        "post_status" => Box::new(PostStatusOptions {
            status: text(input, "status"),
            in_reply_to_id: opt_text(input, "in_reply_to_id"),
            sensitive: flag(input, "sensitive"),
            spoiler_text: opt_text(input, "spoiler_text"),
            visibility: visibility(input),
            language: opt_text(input, "language"),
        }),
        "favourite_status" => Box::new(FavouriteStatusOptions::new(text(input, "id"))),
        "reblog_status" => Box::new(ReblogStatusOptions {
            id: text(input, "id"),
            visibility: visibility(input),
        }),
        "bookmark_status" => Box::new(BookmarkStatusOptions::new(text(input, "id"))),
        "hashtag_timeline" => Box::new(GetHashtagTimelineOptions::page(
            text(input, "hashtag"),
            limit(input),
            input["max_id"].as_str(),
        )),
        "public_timeline" => Box::new(GetPublicTimelineOptions {
            local: flag(input, "local"),
            remote: flag(input, "remote"),
            only_media: flag(input, "only_media"),
            limit: limit(input),
            ..Default::default()
        }),
        other => panic!("unknown operation: {other}"),
    }
}

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        other => panic!("unknown method: {other}"),
    }
}

fn prepare(client: &MastodonHttpClient, options: &dyn RequestOptions) -> HttpRequest {
    client.prepare_request(options.to_request().unwrap()).unwrap()
}

#[test]
fn request_vectors() {
    let raw = include_str!("../../test-vectors/requests.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();
    let client = MastodonHttpClient::new(vectors["domain"].as_str().unwrap());

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected = &case["expected_request"];
        let options = options(case["operation"].as_str().unwrap(), &case["input"]);

        let req = prepare(&client, options.as_ref());
        assert_eq!(
            req.method,
            parse_method(expected["method"].as_str().unwrap()),
            "{name}: method"
        );
        assert_eq!(req.full_url(), expected["url"].as_str().unwrap(), "{name}: url");
        assert_eq!(req.body.as_deref(), expected["body"].as_str(), "{name}: body");
        assert_eq!(
            req.header("Content-Type"),
            expected["content_type"].as_str(),
            "{name}: content type"
        );
        assert!(req.header("Authorization").is_none(), "{name}: anonymous");
    }
}

#[test]
fn invalid_request_vectors() {
    let raw = include_str!("../../test-vectors/requests.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["invalid"].as_array().unwrap() {
        let operation = case["operation"].as_str().unwrap();
        let err = options(operation, &case["input"]).to_request().unwrap_err();
        match err {
            MastodonError::PropertyNotSet(property) => {
                assert_eq!(property, case["property"].as_str().unwrap(), "{operation}")
            }
            other => panic!("{operation}: expected validation error, got {other:?}"),
        }
    }
}

#[test]
fn authorized_requests_carry_bearer_token() {
    let client = MastodonHttpClient::new("mastodon.example").with_access_token("t0ken");
    let req = prepare(&client, &PostStatusOptions::new("hi"));
    assert_eq!(req.header("Authorization"), Some("Bearer t0ken"));
}

fn response(case: &Value) -> HttpResponse {
    let raw = &case["response"];
    HttpResponse {
        status: raw["status"].as_u64().unwrap() as u16,
        headers: raw["headers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let pair = h.as_array().unwrap();
                (
                    pair[0].as_str().unwrap().to_string(),
                    pair[1].as_str().unwrap().to_string(),
                )
            })
            .collect(),
        body: raw["body"].as_str().unwrap().to_string(),
    }
}

fn check_rate_limit(name: &str, rate: &RateLimit, expected: &Value) {
    let field = |key: &str| expected[key].as_u64().map(|n| n as u32);
    assert_eq!(rate.limit, field("limit"), "{name}: rate limit");
    assert_eq!(rate.remaining, field("remaining"), "{name}: remaining");
}

#[test]
fn response_vectors() {
    let raw = include_str!("../../test-vectors/responses.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected = &case["expected"];
        let response = response(case);

        let result = match case["kind"].as_str().unwrap() {
            "status" => StatusResponse::new(response).map(|envelope| {
                assert_eq!(envelope.body().id, expected["id"].as_str().unwrap(), "{name}: id");
                assert_eq!(
                    envelope.body().content,
                    expected["content"].as_str().unwrap(),
                    "{name}: content"
                );
                envelope.rate_limit().clone()
            }),
            "account" => AccountResponse::new(response).map(|envelope| {
                assert_eq!(envelope.body().id, expected["id"].as_str().unwrap(), "{name}: id");
                envelope.rate_limit().clone()
            }),
            "status_list" => StatusListResponse::new(response).map(|envelope| {
                let ids: Vec<&str> = envelope.body().iter().map(|s| s.id.as_str()).collect();
                let expected_ids: Vec<&str> = expected["ids"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|id| id.as_str().unwrap())
                    .collect();
                assert_eq!(ids, expected_ids, "{name}: ids");
                envelope.rate_limit().clone()
            }),
            other => panic!("unknown kind: {other}"),
        };

        if expected["ok"].as_bool().unwrap() {
            let rate = result.unwrap_or_else(|err| panic!("{name}: {err}"));
            check_rate_limit(name, &rate, &expected["rate_limit"]);
        } else {
            match result {
                Err(MastodonError::Http(err)) => {
                    assert_eq!(
                        u64::from(err.status()),
                        expected["status"].as_u64().unwrap(),
                        "{name}: status"
                    );
                    assert_eq!(err.error(), expected["error"].as_str(), "{name}: error");
                    check_rate_limit(name, err.rate_limit(), &expected["rate_limit"]);
                }
                Err(other) => panic!("{name}: expected http error, got {other:?}"),
                Ok(_) => panic!("{name}: expected an error"),
            }
        }
    }
}

#[test]
fn link_vectors() {
    let raw = include_str!("../../test-vectors/link.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let link = LinkHeader::parse(case["header"].as_str().unwrap());
        assert_eq!(link.max_id(), case["max_id"].as_str(), "{name}: max_id");
        assert_eq!(link.min_id(), case["min_id"].as_str(), "{name}: min_id");
        assert_eq!(link.has_next_page(), case["max_id"].is_string(), "{name}: next");
        assert_eq!(
            link.has_previous_page(),
            case["min_id"].is_string(),
            "{name}: previous"
        );
    }
}
