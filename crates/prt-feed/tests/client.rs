//! Integration tests for `FeedClient` using wiremock HTTP mocks.

use prt_feed::{event_features, normalize_event, FeedClient, FeedError, FeedFeature};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> FeedClient {
    let feed_url = format!("{}/events.json", server.uri());
    FeedClient::new(&feed_url, 30, "prt/0.1 (test)").expect("client construction should not fail")
}

#[tokio::test]
async fn fetch_document_returns_parsed_json() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "events": {
            "features": [
                {
                    "id": 412,
                    "properties": {
                        "eventname": "Bushy Park",
                        "EventLongName": "Bushy parkrun",
                        "EventLocation": "Bushy Park, Teddington",
                        "EventDescription": "The original event."
                    },
                    "geometry": { "coordinates": [-0.3346, 51.4107] }
                },
                {
                    "properties": { "eventname": "Hackney Marshes" },
                    "geometry": { "coordinates": [-0.0419, 51.5566] }
                }
            ]
        }
    });

    Mock::given(method("GET"))
        .and(path("/events.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let document = client
        .fetch_document()
        .await
        .expect("should fetch and parse feed");

    let features = event_features(&document).expect("should locate feature array");
    assert_eq!(features.len(), 2);

    let first: FeedFeature =
        serde_json::from_value(features[0].clone()).expect("should deserialize feature");
    let record = normalize_event(first);
    assert_eq!(record.name.as_deref(), Some("Bushy Park"));
    assert_eq!(record.long_name.as_deref(), Some("Bushy parkrun"));
    assert_eq!(record.longitude(), -0.3346);
    assert_eq!(record.latitude(), 51.4107);
}

#[tokio::test]
async fn non_2xx_status_returns_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.fetch_document().await.unwrap_err();

    assert!(
        matches!(err, FeedError::Http(_)),
        "expected Http error, got: {err:?}"
    );
}

#[tokio::test]
async fn invalid_json_body_returns_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.fetch_document().await.unwrap_err();

    assert!(
        matches!(err, FeedError::Parse { .. }),
        "expected Parse error, got: {err:?}"
    );
}

#[tokio::test]
async fn bare_array_body_is_accepted() {
    let server = MockServer::start().await;

    let body = serde_json::json!([
        { "properties": { "eventname": "Cornwall Park" } }
    ]);

    Mock::given(method("GET"))
        .and(path("/events.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let document = client
        .fetch_document()
        .await
        .expect("should fetch and parse feed");

    let features = event_features(&document).expect("should locate feature array");
    assert_eq!(features.len(), 1);
}
