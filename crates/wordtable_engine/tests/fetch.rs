use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use wordtable_engine::{
    ApiClient, FailureKind, FetchSettings, ReqwestApiClient, RequestedWord, COUNTS_PATH,
    WORDS_PATH,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestApiClient {
    ReqwestApiClient::new(FetchSettings {
        base_url: server.uri(),
        ..FetchSettings::default()
    })
    .expect("client")
}

fn words_path() -> String {
    format!("/{WORDS_PATH}")
}

fn counts_path() -> String {
    format!("/{COUNTS_PATH}")
}

#[tokio::test]
async fn requested_words_decode_server_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(words_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "word": "کتێب",
                "request_count": 4,
                "status": "pending",
                "status_kurdish": "ھەڵواسراو",
                "first_seen": "2024-03-01T10:00:00",
                "last_updated": "2024-03-05T10:00:00.250000"
            }
        ])))
        .mount(&server)
        .await;

    let words = client_for(&server).requested_words().await.expect("fetch ok");
    assert_eq!(
        words,
        vec![RequestedWord {
            word: "کتێب".to_string(),
            request_count: 4,
            status: "pending".to_string(),
            status_label: "ھەڵواسراو".to_string(),
            first_seen: "2024-03-01T10:00:00".to_string(),
            last_updated: "2024-03-05T10:00:00.250000".to_string(),
        }]
    );
}

#[tokio::test]
async fn word_counts_keep_non_numeric_entries_as_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(counts_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "stems": 1200,
            "verbs": "n/a",
            "total": 1500
        })))
        .mount(&server)
        .await;

    let counts = client_for(&server).word_counts().await.expect("fetch ok");
    assert_eq!(
        counts.targets(),
        vec![
            ("stems".to_string(), Some(1200.0)),
            ("total".to_string(), Some(1500.0)),
            ("verbs".to_string(), None),
        ]
    );
}

#[tokio::test]
async fn http_status_failure_carries_status_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(counts_path()))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).word_counts().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(503));
    assert_eq!(err.to_string(), "HTTP error! Status: 503");
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(words_path()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("[]"),
        )
        .mount(&server)
        .await;

    let client = ReqwestApiClient::new(FetchSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    })
    .unwrap();

    let err = client.requested_words().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn oversized_response_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(words_path()))
        .respond_with(ResponseTemplate::new(200).set_body_string("[1, 2, 3, 4]"))
        .mount(&server)
        .await;

    let client = ReqwestApiClient::new(FetchSettings {
        base_url: server.uri(),
        max_bytes: 5,
        ..FetchSettings::default()
    })
    .unwrap();

    let err = client.requested_words().await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 5,
            actual: Some(12)
        }
    );
}

#[tokio::test]
async fn malformed_body_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(words_path()))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"word\": 1}"))
        .mount(&server)
        .await;

    let err = client_for(&server).requested_words().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}
