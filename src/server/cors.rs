use crate::config::{Config, DeploymentMode};
use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

pub const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";
pub const ALLOWED_HEADERS: &str = "Content-Type";

/// Decides which origin a response is readable from.
#[derive(Debug, Clone)]
pub struct OriginPolicy {
    mode: DeploymentMode,
    dev_origins: Vec<String>,
}

impl OriginPolicy {
    pub fn new(mode: DeploymentMode, dev_origins: Vec<String>) -> Self {
        Self { mode, dev_origins }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.server.mode, config.cors.dev_origins.clone())
    }

    /// Production and origin-less requests get `*`. In development an
    /// allow-listed origin is echoed back, anything else falls back to `*`.
    pub fn allow_origin<'a>(&self, origin: Option<&'a str>) -> &'a str {
        match (self.mode, origin) {
            (DeploymentMode::Production, _) | (_, None) => "*",
            (DeploymentMode::Development, Some(origin)) => {
                if self.dev_origins.iter().any(|allowed| allowed == origin) {
                    origin
                } else {
                    "*"
                }
            }
        }
    }

    fn apply(&self, origin: Option<&str>, headers: &mut HeaderMap) {
        let allowed = HeaderValue::from_str(self.allow_origin(origin))
            .unwrap_or_else(|_| HeaderValue::from_static("*"));

        if allowed != "*" {
            headers.append(header::VARY, HeaderValue::from_static("Origin"));
        }
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, allowed);
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        );
    }
}

/// Middleware: sets CORS headers on every response and answers preflights
/// without running any handler.
pub async fn apply_origin_policy(
    State(policy): State<Arc<OriginPolicy>>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        next.run(request).await
    };

    policy.apply(origin.as_deref(), response.headers_mut());
    response
}
