use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use warp::http::StatusCode;
use warp::Filter;

use review_agent::enums::ai_provider_error::AiProviderError;
use review_agent::server::review_server::{build_routes, ReviewServer};
use review_agent::services::ai_providers::openai::OpenAIProvider;
use review_agent::services::code_reviewer::CodeReviewer;
use review_agent::structs::ai::chat_request::ChatRequest;
use review_agent::structs::config::server_config::ServerConfig;
use review_agent::traits::ai_provider::AiProvider;

struct StubProvider {
    reply: Result<String, AiProviderError>,
    calls: Mutex<Vec<ChatRequest>>,
}

impl StubProvider {
    fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn failing(error: AiProviderError) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(error),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<ChatRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for StubProvider {
    async fn chat(&self, request: ChatRequest) -> Result<String, AiProviderError> {
        self.calls.lock().unwrap().push(request);
        self.reply.clone()
    }
}

fn reviewer(provider: Arc<StubProvider>) -> Arc<CodeReviewer> {
    Arc::new(CodeReviewer::new(provider, 0.2, 0.1))
}

fn body_json(body: &[u8]) -> Value {
    serde_json::from_slice(body).expect("response body is JSON")
}

#[tokio::test]
async fn health_reports_running() {
    let routes = build_routes(reviewer(StubProvider::replying("unused")));

    let res = warp::test::request().method("GET").path("/").reply(&routes).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res.body()), json!({"status": "running"}));
}

#[tokio::test]
async fn analyze_returns_completion_text() {
    let provider = StubProvider::replying("The code prints a greeting; no bugs found.");
    let routes = build_routes(reviewer(Arc::clone(&provider)));

    let res = warp::test::request()
        .method("POST")
        .path("/api/analyze")
        .json(&json!({"language": "python", "code": "print('hello')"}))
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res.body());
    assert_eq!(body, json!({"analysis": "The code prints a greeting; no bugs found."}));

    let calls = provider.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].temperature, 0.2);
    assert!(calls[0].prompt.starts_with("You are an expert python code reviewer."));
    assert!(calls[0].prompt.contains("Code:\nprint('hello')\n"));
}

#[tokio::test]
async fn fix_returns_corrected_code() {
    let provider = StubProvider::replying("print('hello')");
    let routes = build_routes(reviewer(Arc::clone(&provider)));

    let res = warp::test::request()
        .method("POST")
        .path("/api/fix")
        .json(&json!({"language": "python", "code": "print('hello'"}))
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res.body());
    assert!(!body["fixed_code"].as_str().unwrap().is_empty());
    assert_eq!(body.as_object().unwrap().len(), 1);

    let calls = provider.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].temperature, 0.1);
    assert!(calls[0].prompt.starts_with("You are an expert python developer."));
}

#[tokio::test]
async fn code_prefixed_paths_reach_the_same_handlers() {
    let provider = StubProvider::replying("reply");
    let routes = build_routes(reviewer(Arc::clone(&provider)));

    let analyze = warp::test::request()
        .method("POST")
        .path("/api/code/analyze")
        .json(&json!({"language": "go", "code": "package main"}))
        .reply(&routes)
        .await;
    assert_eq!(analyze.status(), StatusCode::OK);
    assert_eq!(body_json(analyze.body()), json!({"analysis": "reply"}));

    let fix = warp::test::request()
        .method("POST")
        .path("/api/code/fix")
        .json(&json!({"language": "go", "code": "package main"}))
        .reply(&routes)
        .await;
    assert_eq!(fix.status(), StatusCode::OK);
    assert_eq!(body_json(fix.body()), json!({"fixed_code": "reply"}));

    assert_eq!(provider.calls().len(), 2);
}

#[tokio::test]
async fn missing_fields_are_rejected_before_the_provider_is_called() {
    let provider = StubProvider::replying("unused");
    let routes = build_routes(reviewer(Arc::clone(&provider)));

    let cases = [
        ("/api/analyze", json!({"language": "python"})),
        ("/api/analyze", json!({"code": "print(1)"})),
        ("/api/fix", json!({"language": "python"})),
        ("/api/fix", json!({"language": null, "code": "print(1)"})),
        ("/api/fix", json!({"language": "python", "code": 42})),
    ];

    for (path, payload) in cases {
        let res = warp::test::request()
            .method("POST")
            .path(path)
            .json(&payload)
            .reply(&routes)
            .await;

        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY, "payload {}", payload);
        let body = body_json(res.body());
        assert_eq!(body["error"], "Invalid request body");
        assert!(body["detail"].is_string());
    }

    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let provider = StubProvider::replying("unused");
    let routes = build_routes(reviewer(Arc::clone(&provider)));

    let res = warp::test::request()
        .method("POST")
        .path("/api/analyze")
        .header("content-type", "application/json")
        .body("{\"language\": \"python\", \"code\": ")
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn empty_strings_and_extra_fields_are_accepted() {
    let provider = StubProvider::replying("Nothing to review.");
    let routes = build_routes(reviewer(Arc::clone(&provider)));

    let res = warp::test::request()
        .method("POST")
        .path("/api/analyze")
        .json(&json!({"language": "", "code": "", "filename": "main.py"}))
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(provider.calls().len(), 1);
}

#[tokio::test]
async fn provider_failure_is_a_server_error() {
    let provider = StubProvider::failing(AiProviderError::AuthenticationError("Incorrect API key provided".to_string()));
    let routes = build_routes(reviewer(Arc::clone(&provider)));

    let analyze = warp::test::request()
        .method("POST")
        .path("/api/analyze")
        .json(&json!({"language": "python", "code": "print('hello')"}))
        .reply(&routes)
        .await;
    assert_eq!(analyze.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(analyze.body())["error"],
        "Failed to analyze code: Authentication Error: Incorrect API key provided"
    );

    let fix = warp::test::request()
        .method("POST")
        .path("/api/fix")
        .json(&json!({"language": "python", "code": "print('hello'"}))
        .reply(&routes)
        .await;
    assert_eq!(fix.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_json(fix.body())["error"].as_str().unwrap().starts_with("Failed to fix code:"));

    assert_eq!(provider.calls().len(), 2);
}

#[tokio::test]
async fn unknown_paths_and_wrong_methods() {
    let routes = build_routes(reviewer(StubProvider::replying("unused")));

    let missing = warp::test::request().method("GET").path("/api/unknown").reply(&routes).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(missing.body()), json!({"error": "Not found"}));

    let wrong_method = warp::test::request().method("GET").path("/api/analyze").reply(&routes).await;
    assert_eq!(wrong_method.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let routes = build_routes(reviewer(StubProvider::replying("ok")));

    let preflight = warp::test::request()
        .method("OPTIONS")
        .path("/api/fix")
        .header("origin", "http://frontend.example.com")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .reply(&routes)
        .await;
    assert_eq!(preflight.status(), StatusCode::OK);
    assert_eq!(preflight.headers()["access-control-allow-origin"], "*");
    assert_eq!(preflight.headers()["access-control-allow-methods"], "GET, POST, OPTIONS");

    let actual = warp::test::request()
        .method("POST")
        .path("/api/fix")
        .header("origin", "http://frontend.example.com")
        .json(&json!({"language": "rust", "code": "fn main() {"}))
        .reply(&routes)
        .await;
    assert_eq!(actual.status(), StatusCode::OK);
    assert_eq!(actual.headers()["access-control-allow-origin"], "*");

    let missing = warp::test::request()
        .method("GET")
        .path("/api/unknown")
        .header("origin", "http://frontend.example.com")
        .reply(&routes)
        .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(missing.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn preflight_permits_custom_request_headers() {
    let provider = StubProvider::replying("unused");
    let routes = build_routes(reviewer(Arc::clone(&provider)));

    let preflight = warp::test::request()
        .method("OPTIONS")
        .path("/api/analyze")
        .header("origin", "http://frontend.example.com")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type,x-client-version")
        .reply(&routes)
        .await;

    assert_eq!(preflight.status(), StatusCode::OK);
    assert_eq!(preflight.headers()["access-control-allow-origin"], "*");
    let allowed = preflight.headers()["access-control-allow-headers"].to_str().unwrap();
    assert!(allowed.contains("x-client-version"));
    assert!(allowed.contains("content-type"));
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn non_json_content_type_is_a_client_error() {
    let provider = StubProvider::replying("unused");
    let routes = build_routes(reviewer(Arc::clone(&provider)));

    let res = warp::test::request()
        .method("POST")
        .path("/api/analyze")
        .header("content-type", "text/plain")
        .body(r#"{"language": "python", "code": "print('hello')"}"#)
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body_json(res.body())["error"], "Unsupported media type");
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn concurrent_requests_are_independent() {
    let provider = StubProvider::replying("ok");
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
    };
    let mut server = ReviewServer::new(config, reviewer(Arc::clone(&provider)));
    let addr = server.start().await.unwrap();

    let client = reqwest::Client::new();
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let client = client.clone();
            let path = if i % 2 == 0 { "api/analyze" } else { "api/fix" };
            tokio::spawn(async move {
                client
                    .post(format!("http://{}/{}", addr, path))
                    .json(&json!({"language": "python", "code": format!("x = {}", i)}))
                    .send()
                    .await
                    .map(|res| res.status())
            })
        })
        .collect();

    for handle in handles {
        let status = handle.await.unwrap().unwrap();
        assert_eq!(status, reqwest::StatusCode::OK);
    }
    assert_eq!(provider.calls().len(), 8);

    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn server_forwards_to_completion_api_end_to_end() {
    let completion_api = warp::path!("v1" / "chat" / "completions")
        .and(warp::post())
        .and(warp::body::json())
        .map(|body: Value| {
            let prompt = body["messages"][0]["content"].as_str().unwrap_or_default().to_string();
            warp::reply::json(&json!({
                "choices": [{"message": {"role": "assistant", "content": format!("echo: {}", prompt.lines().next().unwrap_or_default())}}]
            }))
        });
    let (api_addr, api_server) = warp::serve(completion_api).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(api_server);

    let provider = OpenAIProvider::new("sk-test".to_string()).with_base_url(format!("http://{}/v1", api_addr));
    let reviewer = Arc::new(CodeReviewer::new(Arc::new(provider), 0.2, 0.1));
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
    };
    let mut server = ReviewServer::new(config, reviewer);
    let addr = server.start().await.unwrap();

    let client = reqwest::Client::new();
    let res = client
        .post(format!("http://{}/api/analyze", addr))
        .json(&json!({"language": "python", "code": "print('hello')"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["analysis"], "echo: You are an expert python code reviewer.");

    let health: Value = client
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health, json!({"status": "running"}));

    server.shutdown().await.unwrap();
}
