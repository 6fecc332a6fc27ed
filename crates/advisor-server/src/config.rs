//! Server Configuration

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Settings read from the environment (and `.env`)
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Listen address, `BIND_ADDR`
    pub bind_addr: String,

    /// Allowed CORS origin, `CORS_ALLOW_ORIGIN`; `None` allows any
    pub cors_origin: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            cors_origin: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into()),
            cors_origin: std::env::var("CORS_ALLOW_ORIGIN")
                .ok()
                .filter(|origin| !origin.is_empty() && origin != "*"),
        }
    }

    pub fn cors_layer(&self) -> CorsLayer {
        let origin = match self.cors_origin.as_deref().map(str::parse::<HeaderValue>) {
            Some(Ok(value)) => AllowOrigin::exact(value),
            Some(Err(_)) => {
                tracing::warn!(origin = ?self.cors_origin, "invalid CORS origin, allowing any");
                AllowOrigin::from(Any)
            }
            None => AllowOrigin::from(Any),
        };

        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
