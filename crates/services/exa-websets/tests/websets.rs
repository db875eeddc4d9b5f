use exa_websets::test_support::EnvGuard;
use exa_websets::types::{CreateWebsetParams, ListParams, WebsetStatus};
use exa_websets::{Client, ExaConfig, ExaError};
use serial_test::serial;
use wiremock::matchers::{any, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> Client<ExaConfig> {
    let config = ExaConfig::new()
        .with_api_base(server.uri())
        .with_api_key("test-api-key");
    Client::with_config(config)
}

fn webset_json(id: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "object": "webset",
        "status": status,
        "externalId": null,
        "searches": [{ "id": "search_1", "status": status }],
        "enrichments": [],
        "metadata": {},
        "createdAt": "2025-01-15T10:00:00.000Z",
        "updatedAt": "2025-01-15T10:00:05.000Z"
    })
}

#[tokio::test]
async fn create_posts_payload_and_parses_webset() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/websets/v0/websets/"))
        .and(header("x-api-key", "test-api-key"))
        .and(body_json(serde_json::json!({
            "search": {
                "query": "robotics startups",
                "count": 25,
                "entity": { "type": "company" }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(webset_json("ws_abc", "running")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let req = CreateWebsetParams::new("robotics startups")
        .with_count(25)
        .with_entity("company");
    let webset = client.websets().create(req).await.unwrap();

    assert_eq!(webset.id, "ws_abc");
    assert_eq!(webset.status, WebsetStatus::Running);
    assert_eq!(webset.searches.len(), 1);
}

#[tokio::test]
async fn get_returns_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/websets/v0/websets/ws_abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(webset_json("ws_abc", "idle")))
        .expect(1)
        .mount(&server)
        .await;

    let webset = test_client(&server).websets().get("ws_abc").await.unwrap();
    assert_eq!(webset.status, WebsetStatus::Idle);
    assert!(webset.status.is_complete());
}

#[tokio::test]
async fn list_forwards_pagination_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/websets/v0/websets"))
        .and(query_param("cursor", "next_1"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [webset_json("ws_1", "idle"), webset_json("ws_2", "running")],
            "hasMore": true,
            "nextCursor": "next_2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = ListParams::new().with_cursor("next_1").with_limit(5);
    let page = test_client(&server).websets().list(&params).await.unwrap();

    assert_eq!(page.data.len(), 2);
    assert!(page.has_more);
    assert_eq!(page.next_cursor.as_deref(), Some("next_2"));
}

#[tokio::test]
async fn cancel_posts_to_cancel_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/websets/v0/websets/ws_abc/cancel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(webset_json("ws_abc", "paused")))
        .expect(1)
        .mount(&server)
        .await;

    let webset = test_client(&server).websets().cancel("ws_abc").await.unwrap();
    assert_eq!(webset.status, WebsetStatus::Paused);
}

#[tokio::test]
async fn api_error_carries_status_and_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/websets/v0/websets/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "statusCode": 401,
            "message": "Invalid API key",
            "error": "Unauthorized"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = test_client(&server)
        .websets()
        .create(CreateWebsetParams::new("q"))
        .await
        .unwrap_err();

    match &err {
        ExaError::Api(obj) => {
            assert_eq!(obj.status_code, Some(401));
            assert_eq!(obj.message, "Invalid API key");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
    assert_eq!(err.status_code(), Some(401));
}

#[tokio::test]
async fn server_errors_are_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/websets/v0/websets/ws_abc"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let err = test_client(&server)
        .websets()
        .get("ws_abc")
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(503));
    assert_eq!(err.detail(), "upstream unavailable");
}

#[tokio::test]
async fn malformed_body_is_serde_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/websets/v0/websets/ws_abc"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .websets()
        .get("ws_abc")
        .await
        .unwrap_err();
    match err {
        ExaError::Serde(msg) => assert!(msg.contains("not json")),
        other => panic!("Expected Serde error, got {other:?}"),
    }
}

#[tokio::test]
#[serial(env)]
async fn missing_api_key_makes_no_request() {
    let _env = EnvGuard::without_exa_env();
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = Client::with_config(ExaConfig::new().with_api_base(server.uri()));
    let result = client.websets().create(CreateWebsetParams::new("q")).await;

    match result.unwrap_err() {
        ExaError::Config(msg) => assert!(msg.contains("EXA_API_KEY")),
        other => panic!("Expected Config error, got {other:?}"),
    }
}

#[tokio::test]
async fn create_accepts_id_only_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/websets/v0/websets/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "ws_new" })))
        .expect(1)
        .mount(&server)
        .await;

    let webset = test_client(&server)
        .websets()
        .create(CreateWebsetParams::new("q"))
        .await
        .unwrap();

    assert_eq!(webset.id, "ws_new");
    assert_eq!(webset.status, WebsetStatus::Pending);
}

#[tokio::test]
async fn ids_are_sent_as_one_encoded_segment() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/websets/v0/websets/other%2Fcancel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(webset_json("other/cancel", "running")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/websets/v0/websets/a%2Fb/cancel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(webset_json("a/b", "paused")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let webset = client.websets().get("other/cancel").await.unwrap();
    assert_eq!(webset.status, WebsetStatus::Running);

    let webset = client.websets().cancel("a/b").await.unwrap();
    assert_eq!(webset.status, WebsetStatus::Paused);

    server.verify().await;
}

#[tokio::test]
async fn dot_segment_ids_make_no_request() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server);
    for id in ["..", "."] {
        match client.websets().get(id).await.unwrap_err() {
            ExaError::InvalidArgument(msg) => assert!(msg.contains("webset id")),
            other => panic!("Expected InvalidArgument error, got {other:?}"),
        }
    }
}
