//! Prometheus metrics for logo-server.
//!
//! Provides metrics collection and a Prometheus-compatible `/metrics` endpoint.

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

const GENERATION_REQUESTS_TOTAL: &str = "logo_generation_requests_total";
const GENERATION_DURATION: &str = "logo_generation_duration_seconds";
const VARIATIONS_TOTAL: &str = "logo_variations_total";
const FALLBACKS_TOTAL: &str = "logo_fallbacks_total";
const CACHE_HITS_TOTAL: &str = "logo_cache_hits_total";
const VALIDATION_FAILURES_TOTAL: &str = "logo_validation_failures_total";

/// Initialize metrics and return the Prometheus handle.
///
/// # Errors
///
/// Returns an error if the Prometheus recorder cannot be installed
/// (e.g., if another recorder is already installed).
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Record a completed generation request.
///
/// # Arguments
///
/// * `engine` - Engine the batch was planned with
/// * `duration_secs` - Wall time including rendering
pub fn record_generation(engine: &str, duration_secs: f64) {
    counter!(GENERATION_REQUESTS_TOTAL, "engine" => engine.to_string()).increment(1);
    histogram!(GENERATION_DURATION, "engine" => engine.to_string()).record(duration_secs);
}

/// Record one variation of a batch.
///
/// # Arguments
///
/// * `design` - Design tag, e.g. `category/emblem/0`
/// * `cached` - Served from the logo cache
/// * `fallback` - Replaced by the fallback render
pub fn record_variation(design: &str, cached: bool, fallback: bool) {
    counter!(VARIATIONS_TOTAL, "design" => design.to_string()).increment(1);
    if cached {
        counter!(CACHE_HITS_TOTAL).increment(1);
    }
    if fallback {
        counter!(FALLBACKS_TOTAL, "design" => design.to_string()).increment(1);
    }
}

/// Record an input validation failure.
///
/// # Arguments
///
/// * `field` - Request field that failed (company_name, colors, num_variations, etc.)
pub fn record_validation_failure(field: &str) {
    counter!(VALIDATION_FAILURES_TOTAL, "field" => field.to_string()).increment(1);
}
