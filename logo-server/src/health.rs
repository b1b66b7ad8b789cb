//! Health check endpoints for container orchestrators.
//!
//! Provides liveness and readiness checks:
//! - `/health/live` - Liveness check (restart if fails)
//! - `/health/ready` - Readiness check (remove from LB if fails)
//! - `/health` - Combined check

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::AppState;

/// Health status response.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    /// Overall status: "healthy" or "unhealthy"
    pub status: &'static str,
    /// Server version
    pub version: &'static str,
    /// Individual component checks
    pub checks: HealthChecks,
}

/// Individual health checks.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    /// Logo cache lock is usable (always true when caching is off)
    pub cache: bool,
    /// Outline font faces loaded; zero means the bitmap font is in use
    pub font_faces: usize,
    /// Family used for logo text
    pub font_family: Option<String>,
}

/// Liveness check - is the server running?
///
/// Returns 200 OK if the process is alive.
#[tracing::instrument(name = "liveness_check")]
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// Readiness check - is the server ready to accept traffic?
///
/// Missing fonts do not make the server unready; text falls back to the
/// bitmap font.
#[tracing::instrument(name = "readiness_check", skip(state))]
pub async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
    let studio = &state.studio;
    let cache_ok = !studio.config().cache_enabled || studio.cache_stats().is_some();
    let fonts = studio.fonts();

    let status = HealthStatus {
        status: if cache_ok { "healthy" } else { "unhealthy" },
        version: env!("CARGO_PKG_VERSION"),
        checks: HealthChecks {
            cache: cache_ok,
            font_faces: fonts.face_count(),
            font_family: fonts.family().map(str::to_string),
        },
    };

    let code = if cache_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (code, Json(status))
}
