use actor_framework::{JsonFileStorage, MemoryStorage};
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use prompt_api::config::Config;
use prompt_api::http::{router, AppState};
use prompt_api::lifecycle::ApiSystem;
use prompt_api::model::GeneratedApi;
use prompt_api::order_actor::SqliteOrderStorage;
use serde_json::{json, Value};
use tower::ServiceExt;

const PROMPT: &str = "I want POST /orders and GET /orders/{id}";

struct TestApp {
    router: Router,
    _system: ApiSystem,
}

fn config() -> Config {
    Config {
        keys_file: None,
        public_dir: "does-not-exist".into(),
        ..Config::default()
    }
}

fn spawn_app(config: Config) -> TestApp {
    spawn_app_with_registry(config, MemoryStorage::<GeneratedApi>::new())
}

fn spawn_app_with_registry(
    config: Config,
    registry: impl actor_framework::Storage<GeneratedApi>,
) -> TestApp {
    let system = ApiSystem::with_storage(registry, SqliteOrderStorage::open_in_memory().unwrap());
    let state = AppState::new(
        system.registry_client.clone(),
        system.order_client.clone(),
        config.admin_key.clone(),
    );
    TestApp {
        router: router(state, &config),
        _system: system,
    }
}

impl TestApp {
    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, body)
    }

    async fn send_raw(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn generate(&self) -> (String, String) {
        let (status, body) = self.send(post_json("/generate", json!({ "prompt": PROMPT }))).await;
        assert_eq!(status, StatusCode::OK);
        (
            body["id"].as_str().unwrap().to_string(),
            body["apiKey"].as_str().unwrap().to_string(),
        )
    }
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn with_key(mut request: Request<Body>, key: &str) -> Request<Body> {
    request
        .headers_mut()
        .insert("x-api-key", key.parse().unwrap());
    request
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn order_body() -> Value {
    json!({ "orderItems": ["a"], "totalAmount": 10 })
}

#[tokio::test]
async fn test_generate_returns_spec_and_key() {
    let app = spawn_app(config());

    let (status, body) = app.send(post_json("/generate", json!({ "prompt": PROMPT }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["endpoints"], json!(["POST /orders", "GET /orders/:id"]));
    assert_eq!(body["spec"]["info"]["title"], "Orders API");
    assert!(body["id"].is_string());
    assert!(body["apiKey"].is_string());
}

#[tokio::test]
async fn test_generate_rejects_bad_prompts() {
    let app = spawn_app(config());

    let (status, body) = app.send(post_json("/generate", json!({ "prompt": "hello" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Prompt not recognized. Expected POST /orders and GET /orders/{id}."
    );

    for payload in [json!({}), json!({ "prompt": "" })] {
        let (status, body) = app.send(post_json("/generate", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "prompt required");
    }

    let malformed = Request::builder()
        .method(Method::POST)
        .uri("/generate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = app.send(malformed).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_generate_twice_issues_distinct_ids_and_keys() {
    let app = spawn_app(config());

    let (id_a, key_a) = app.generate().await;
    let (id_b, key_b) = app.generate().await;

    assert_ne!(id_a, id_b);
    assert_ne!(key_a, key_b);
}

#[tokio::test]
async fn test_spec_lookup() {
    let app = spawn_app(config());
    let (id, key) = app.generate().await;

    let (status, body) = app.send(get(&format!("/specs/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id.as_str());
    assert_eq!(body["prompt"], PROMPT);
    assert_eq!(body["spec"]["info"]["version"], "1.0.0");
    assert!(body["createdAt"].is_string());
    assert!(body.get("key").is_none());
    assert!(!body.to_string().contains(&key));

    let (status, body) = app.send(get("/specs/unknown")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "spec not found" }));
}

#[tokio::test]
async fn test_create_and_fetch_order() {
    let app = spawn_app(config());
    let (_, key) = app.generate().await;

    let (status, created) = app
        .send(with_key(post_json("/orders", order_body()), &key))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "pending");
    assert_eq!(created["orderItems"], json!(["a"]));
    assert_eq!(created["totalAmount"], 10);
    assert!(created["createdAt"].is_string());
    let id = created["id"].as_str().unwrap();

    let (status, fetched) = app
        .send(with_key(get(&format!("/orders/{id}")), &key))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, body) = app.send(with_key(get("/orders/missing"), &key)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "not found" }));
}

#[tokio::test]
async fn test_order_payload_round_trips_verbatim() {
    let app = spawn_app(config());
    let (_, key) = app.generate().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/orders")
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-api-key", key.as_str())
        .body(Body::from(r#"{"orderItems":[{"z":1,"a":2}],"totalAmount":1e2}"#))
        .unwrap();
    let (status, created) = app.send_raw(request).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created.contains(r#""orderItems":[{"z":1,"a":2}]"#), "{created}");
    assert!(created.contains(r#""totalAmount":1e2"#), "{created}");

    let id: Value = serde_json::from_str(&created).unwrap();
    let id = id["id"].as_str().unwrap();
    let (status, fetched) = app
        .send_raw(with_key(get(&format!("/orders/{id}")), &key))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_api_key_from_query_parameter() {
    let app = spawn_app(config());
    let (_, key) = app.generate().await;

    let (status, created) = app
        .send(post_json(&format!("/orders?apiKey={key}"), order_body()))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let id = created["id"].as_str().unwrap();
    let (status, _) = app.send(get(&format!("/orders/{id}?apiKey={key}"))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_missing_and_unknown_keys() {
    let app = spawn_app(config());
    app.generate().await;

    let (status, body) = app.send(post_json("/orders", order_body())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "x-api-key required" }));

    let (status, body) = app
        .send(with_key(post_json("/orders", order_body()), "not-issued"))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({ "error": "invalid api key" }));

    let (status, _) = app.send(get("/orders/anything")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.send(with_key(get("/orders/anything"), "not-issued")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_invalid_order_is_rejected_whatever_the_key() {
    let app = spawn_app(config());
    let (_, key) = app.generate().await;
    let negative = json!({ "orderItems": ["a"], "totalAmount": -1 });

    let requests = [
        post_json("/orders", negative.clone()),
        with_key(post_json("/orders", negative.clone()), "not-issued"),
        with_key(post_json("/orders", negative), &key),
    ];
    for request in requests {
        let (status, body) = app.send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "totalAmount must be >= 0" }));
    }

    for payload in [
        json!({ "orderItems": [], "totalAmount": 1 }),
        json!({ "totalAmount": 1 }),
        json!({ "orderItems": "a", "totalAmount": 1 }),
    ] {
        let (status, _) = app.send(with_key(post_json("/orders", payload), &key)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    let (status, body) = app
        .send(with_key(
            post_json("/orders", json!({ "orderItems": ["a"] })),
            &key,
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "totalAmount must be >= 0");
}

#[tokio::test]
async fn test_admin_route_absent_without_secret() {
    let app = spawn_app(config());

    let request = Request::builder()
        .uri("/_admin/generated-apis")
        .header("x-admin-key", "anything")
        .body(Body::empty())
        .unwrap();
    let (status, _) = app.send(request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_listing() {
    let app = spawn_app(Config {
        admin_key: Some("s3cret".into()),
        ..config()
    });
    let (id_a, _) = app.generate().await;
    let (id_b, _) = app.generate().await;

    let (status, body) = app.send(get("/_admin/generated-apis?adminKey=wrong")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({ "error": "forbidden" }));

    let (status, _) = app.send(get("/_admin/generated-apis")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let request = Request::builder()
        .uri("/_admin/generated-apis")
        .header("x-admin-key", "s3cret")
        .body(Body::empty())
        .unwrap();
    let (status, body) = app.send(request).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|api| api["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&id_a.as_str()));
    assert!(ids.contains(&id_b.as_str()));

    let (status, _) = app.send(get("/_admin/generated-apis?adminKey=s3cret")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_cors_headers_and_preflight() {
    let app = spawn_app(config());

    let request = Request::builder()
        .uri("/specs/unknown")
        .header(header::ORIGIN, "https://client.example")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );

    let preflight = Request::builder()
        .method(Method::OPTIONS)
        .uri("/orders")
        .header(header::ORIGIN, "https://client.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-api-key")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(preflight).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
    assert!(methods.contains("POST"));
    let allowed = headers[header::ACCESS_CONTROL_ALLOW_HEADERS]
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    assert!(allowed.contains("x-api-key"));
    assert!(allowed.contains("content-type"));
}

#[tokio::test]
async fn test_bare_options_is_no_content() {
    let app = spawn_app(config());

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/orders")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn test_configured_cors_origin() {
    let app = spawn_app(Config {
        cors_origin: "https://example.com".parse().unwrap(),
        ..config()
    });

    let request = Request::builder()
        .method(Method::POST)
        .uri("/generate")
        .header(header::ORIGIN, "https://example.com")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "prompt": PROMPT }).to_string()))
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://example.com"
    );
}

#[tokio::test]
async fn test_static_ui_is_served_when_present() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("ui.html"), "<h1>Prompt API</h1>").unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log('hi');").unwrap();

    let app = spawn_app(Config {
        public_dir: dir.path().to_path_buf(),
        ..config()
    });

    let (status, body) = app.send(get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("<h1>Prompt API</h1>".into()));

    let (status, body) = app.send(get("/app.js")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("console.log('hi');".into()));

    // API routes still win over the fallback.
    let (status, _) = app.send(get("/specs/unknown")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_failed_snapshot_write_does_not_fail_generate() {
    let dir = tempfile::tempdir().unwrap();
    let unwritable = dir.path().join("missing-dir").join("keys.json");
    let app = spawn_app_with_registry(config(), JsonFileStorage::<GeneratedApi>::open(unwritable));

    let (_, key) = app.generate().await;

    let (status, _) = app
        .send(with_key(post_json("/orders", order_body()), &key))
        .await;
    assert_eq!(status, StatusCode::CREATED);
}
