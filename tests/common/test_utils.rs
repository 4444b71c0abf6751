use super::mocks::StubProvider;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use gemini_relay::{
    config::DeploymentMode,
    provider::ProviderHandle,
    relay::Relay,
    server::{OriginPolicy, create_router},
};
use serde_json::Value;
use std::sync::Arc;

pub const DEV_ORIGIN: &str = "http://localhost:5173";

pub fn dev_policy() -> OriginPolicy {
    OriginPolicy::new(DeploymentMode::Development, vec![DEV_ORIGIN.to_string()])
}

/// Router backed by the given stub, in development mode
pub fn create_test_app(stub: Arc<StubProvider>) -> Router {
    let relay = Relay::new(ProviderHandle::with_client(stub));
    create_router(relay, dev_policy())
}

/// Router with no provider credential configured
pub fn create_unconfigured_app() -> Router {
    create_router(Relay::new(ProviderHandle::unconfigured()), dev_policy())
}

pub fn post_content(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/content")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub fn post_question(question: &str) -> Request<Body> {
    post_content(serde_json::json!({ "question": question }).to_string())
}

/// Parse the response body as JSON and return (status_code, json_value).
pub async fn parse_body(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), 1_048_576)
        .await
        .expect("read body");
    let json: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), 1_048_576)
        .await
        .expect("read body")
        .to_vec()
}
