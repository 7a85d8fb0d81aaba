//! Integration tests for `HyperClient` using wiremock.

use std::collections::HashMap;
use std::time::Duration;

use lariat::{
    ApiClient, CallArgs, CallTemplate, ClientConfig, HttpClient, HyperClient, Method, ParamBinding,
    Request,
};
use serde::{Deserialize, Serialize};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct User {
    id: u64,
    name: String,
}

#[tokio::test]
async fn get_request() {
    let mock_server = MockServer::start().await;

    let user = User {
        id: 1,
        name: "Alice".to_string(),
    };

    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&user))
        .mount(&mock_server)
        .await;

    let client = HyperClient::new();
    let url = url::Url::parse(&format!("{}/users/1", mock_server.uri())).expect("url");
    let request = Request::builder(Method::Get, url).build();

    let response = client.execute(request).await.expect("response");

    assert!(response.is_success());
    assert_eq!(response.status(), 200);

    let body: User = response.json().expect("json");
    assert_eq!(body, user);
}

#[tokio::test]
async fn post_request_with_json_body() {
    let mock_server = MockServer::start().await;

    let input = User {
        id: 0,
        name: "Bob".to_string(),
    };
    let output = User {
        id: 42,
        name: "Bob".to_string(),
    };

    Mock::given(method("POST"))
        .and(path("/users"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(&input))
        .respond_with(ResponseTemplate::new(201).set_body_json(&output))
        .mount(&mock_server)
        .await;

    let client = HyperClient::new();
    let url = url::Url::parse(&format!("{}/users", mock_server.uri())).expect("url");
    let request = Request::builder(Method::Post, url)
        .json(&input)
        .expect("json body")
        .build();

    let response = client.execute(request).await.expect("response");

    assert!(response.is_success());
    assert_eq!(response.status(), 201);

    let body: User = response.json().expect("json");
    assert_eq!(body, output);
}

#[tokio::test]
async fn non_2xx_is_still_a_response_at_this_layer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/not-found"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let client = HyperClient::new();
    let url = url::Url::parse(&format!("{}/not-found", mock_server.uri())).expect("url");
    let request = Request::builder(Method::Get, url).build();

    // The transport returns the response; status mapping happens in the invoker.
    let response = client.execute(request).await.expect("response");

    assert!(response.is_client_error());
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn response_headers_are_preserved() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/with-headers"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Request-Id", "abc123")
                .insert_header("Content-Type", "application/json")
                .set_body_json(serde_json::json!({"ok": true})),
        )
        .mount(&mock_server)
        .await;

    let client = HyperClient::new();
    let url = url::Url::parse(&format!("{}/with-headers", mock_server.uri())).expect("url");
    let request = Request::builder(Method::Get, url).build();

    let response = client.execute(request).await.expect("response");

    assert_eq!(response.header("x-request-id"), Some("abc123"));
    assert_eq!(response.header("content-type"), Some("application/json"));
}

// ============================================================================
// Transport failures map to status 0
// ============================================================================

#[tokio::test]
async fn timeout_is_a_transport_failure() {
    let mock_server = MockServer::start().await;

    // Delay longer than client timeout
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let client = HyperClient::builder()
        .timeout(Duration::from_millis(100))
        .build();

    let url = url::Url::parse(&format!("{}/slow", mock_server.uri())).expect("url");
    let request = Request::builder(Method::Get, url).build();

    let err = client.execute(request).await.expect_err("expected timeout");
    assert!(err.is_transport(), "expected transport failure, got: {err}");
    assert_eq!(err.status(), Some(0));

    let http = err.as_http().expect("http error");
    assert_eq!(http.status_text, "connection failed");
    assert!(http.body_text().contains("timed out"));
}

#[tokio::test]
async fn connection_refused_is_a_transport_failure() {
    let client = HyperClient::new();

    // Nothing listens on port 1.
    let url = url::Url::parse("http://127.0.0.1:1").expect("url");
    let request = Request::builder(Method::Get, url).build();

    let err = client
        .execute(request)
        .await
        .expect_err("expected connection error");
    assert!(err.is_transport(), "expected transport failure, got: {err}");
    assert_eq!(err.status(), Some(0));
}

// ============================================================================
// Retries
// ============================================================================

#[tokio::test]
async fn retries_until_success() {
    let mock_server = MockServer::start().await;

    // First two attempts fail, the third succeeds.
    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let config = ClientConfig::default()
        .retries(2)
        .retry_wait(Duration::from_millis(10));
    let client = HyperClient::from_config(&config);

    let url = url::Url::parse(&format!("{}/flaky", mock_server.uri())).expect("url");
    let request = Request::builder(Method::Get, url).build();

    let response = client.execute(request).await.expect("response");
    assert!(response.is_success());
}

#[tokio::test]
async fn retries_are_bounded() {
    let mock_server = MockServer::start().await;

    // Always fails; 1 initial attempt + 2 retries = 3 requests.
    Mock::given(method("GET"))
        .and(path("/down"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::default()
        .retries(2)
        .retry_wait(Duration::from_millis(10));
    let client = HyperClient::from_config(&config);

    let url = url::Url::parse(&format!("{}/down", mock_server.uri())).expect("url");
    let request = Request::builder(Method::Get, url).build();

    let response = client.execute(request).await.expect("response");
    assert_eq!(response.status(), 503);
}

// ============================================================================
// ApiClient + invoker end to end
// ============================================================================

#[tokio::test]
async fn base_url_path_segments_are_kept() {
    let mock_server = MockServer::start().await;

    let user = User {
        id: 7,
        name: "Grace".to_string(),
    };

    Mock::given(method("GET"))
        .and(path("/api/v1/users/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&user))
        .mount(&mock_server)
        .await;

    let api = ApiClient::new(
        HyperClient::new(),
        format!("{}/api/v1", mock_server.uri()),
        HashMap::new(),
    );

    const GET_USER: CallTemplate = CallTemplate::new(
        Method::Get,
        "/users/{id}",
        &[ParamBinding::path("id")],
        false,
    );

    let result: User = lariat::invoke(&api, &GET_USER, CallArgs::new().value(7))
        .await
        .expect("get user");
    assert_eq!(result, user);
}

#[tokio::test]
async fn default_headers_ride_on_every_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .and(header("X-Api-Key", "secret"))
        .respond_with(ResponseTemplate::new(204))
        .expect(2)
        .mount(&mock_server)
        .await;

    let api = ApiClient::new(HyperClient::new(), mock_server.uri(), HashMap::new())
        .with_header("X-Api-Key", "secret");

    const PING: CallTemplate = CallTemplate::new(Method::Get, "/ping", &[], false);

    for _ in 0..2 {
        lariat::invoke_unit(&api, &PING, CallArgs::new())
            .await
            .expect("ping");
    }
}
