//! # Saorsa Logo Server Library
//!
//! Shared types and the router for the logo server.
//! This library is used by both the binary and integration tests.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use clap::Parser;
use logo_renderer::{FontConfig, LogoCacheConfig, LogoStudio, StudioConfig, DEFAULT_CANVAS_SIZE};
use tower_http::cors::CorsLayer;

pub mod error;
pub mod health;
pub mod metrics;
pub mod routes;
pub mod validation;

pub use error::ApiError;

/// Default port for the logo server.
pub const DEFAULT_PORT: u16 = 9474;

/// Command-line arguments for the logo server.
#[derive(Debug, Clone, Parser)]
#[command(name = "saorsa-logo")]
#[command(about = "Procedural logo generation over HTTP")]
#[command(version)]
pub struct ServerArgs {
    /// Port to listen on
    #[arg(long, env = "LOGO_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "LOGO_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Output image side length in pixels (64..=4096)
    #[arg(
        long,
        env = "LOGO_CANVAS_SIZE",
        default_value_t = DEFAULT_CANVAS_SIZE,
        value_parser = clap::value_parser!(u32).range(64..=4096)
    )]
    pub canvas_size: u32,

    /// Disable the logo cache
    #[arg(long, env = "LOGO_NO_CACHE")]
    pub no_cache: bool,

    /// Maximum cached logos (0 = unbounded)
    #[arg(long, env = "LOGO_CACHE_ENTRIES", default_value_t = 256)]
    pub cache_entries: usize,

    /// Extra directory to search for font files (repeatable)
    #[arg(long = "font-dir", env = "LOGO_FONT_DIR", value_delimiter = ',')]
    pub font_dirs: Vec<PathBuf>,

    /// Do not load system fonts
    #[arg(long)]
    pub no_system_fonts: bool,
}

impl From<&ServerArgs> for StudioConfig {
    fn from(args: &ServerArgs) -> Self {
        let defaults = FontConfig::default();
        let mut search_dirs = args.font_dirs.clone();
        search_dirs.extend(defaults.search_dirs);
        let fonts = FontConfig {
            search_dirs,
            load_system_fonts: !args.no_system_fonts,
            ..defaults
        };
        Self {
            canvas_size: args.canvas_size,
            cache_enabled: !args.no_cache,
            cache: LogoCacheConfig {
                max_entries: args.cache_entries,
            },
            fonts,
            ..Self::default()
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Logo generator.
    pub studio: Arc<LogoStudio>,
}

impl AppState {
    /// Wrap a studio.
    #[must_use]
    pub fn new(studio: LogoStudio) -> Self {
        Self {
            studio: Arc::new(studio),
        }
    }
}

/// Build a CORS layer that only allows localhost origins.
#[must_use]
pub fn build_cors_layer(port: u16) -> CorsLayer {
    let localhost_origins = [
        format!("http://localhost:{port}"),
        format!("http://127.0.0.1:{port}"),
        "http://localhost:3000".to_string(),
        "http://localhost:5173".to_string(),
        "http://127.0.0.1:3000".to_string(),
        "http://127.0.0.1:5173".to_string(),
    ];

    let origins: Vec<HeaderValue> = localhost_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

/// API and health routes. The binary adds `/metrics` and the tower layers.
#[must_use]
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .route("/health", get(health::readiness))
        .route("/api/logos", post(routes::generate_logos))
        .route("/api/industries", get(routes::list_industries))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = ServerArgs::try_parse_from(["saorsa-logo"]).unwrap();
        assert_eq!(args.port, DEFAULT_PORT);
        assert_eq!(args.host, "127.0.0.1");
        assert!(!args.no_cache);

        let config = StudioConfig::from(&args);
        assert_eq!(config.canvas_size, 1000);
        assert!(config.cache_enabled);
        assert_eq!(config.cache.max_entries, 256);
        assert!(config.fonts.load_system_fonts);
    }

    #[test]
    fn test_args_map_to_studio_config() {
        let args = ServerArgs::try_parse_from([
            "saorsa-logo",
            "--canvas-size",
            "512",
            "--no-cache",
            "--cache-entries",
            "0",
            "--font-dir",
            "/opt/fonts",
            "--no-system-fonts",
        ])
        .unwrap();
        let config = StudioConfig::from(&args);
        assert_eq!(config.canvas_size, 512);
        assert!(!config.cache_enabled);
        assert_eq!(config.cache.max_entries, 0);
        assert_eq!(config.fonts.search_dirs[0], PathBuf::from("/opt/fonts"));
        assert!(!config.fonts.load_system_fonts);
    }

    #[test]
    fn test_canvas_size_is_bounded() {
        for size in ["0", "63", "4097", "5000"] {
            let result = ServerArgs::try_parse_from(["saorsa-logo", "--canvas-size", size]);
            assert!(result.is_err(), "canvas size {size} should be rejected");
        }
        for size in [64, 4096] {
            let args =
                ServerArgs::try_parse_from(["saorsa-logo", "--canvas-size", &size.to_string()])
                    .unwrap();
            assert_eq!(args.canvas_size, size);
        }
    }

    fn test_router() -> Router {
        let studio = LogoStudio::new(StudioConfig {
            canvas_size: 64,
            fonts: FontConfig::builtin_only(),
            shuffle_seed: Some(1),
            ..StudioConfig::default()
        });
        api_router(AppState::new(studio))
    }

    #[tokio::test]
    async fn test_router_serves_liveness() {
        use axum::body::Body;
        use axum::http::{Request, StatusCode};
        use tower::ServiceExt;

        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_router_rejects_invalid_body() {
        use axum::body::Body;
        use axum::http::{Request, StatusCode};
        use tower::ServiceExt;

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/logos")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"company_name": "Acme", "num_variations": 0}"#))
            .unwrap();
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let unknown = Request::builder()
            .uri("/api/unknown")
            .body(Body::empty())
            .unwrap();
        let response = test_router().oneshot(unknown).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
