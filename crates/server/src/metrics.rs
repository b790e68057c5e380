use once_cell::sync::Lazy;
use prometheus::{register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static API_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "agency_api_requests_total",
        "Service API requests by operation and outcome",
        &["operation", "outcome"]
    )
    .expect("register api_requests_total")
});

pub static SERVICES_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "agency_services_created_total",
        "Total services added to the catalog"
    )
    .expect("register services_created_total")
});

pub static SERVICES_DELETED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "agency_services_deleted_total",
        "Total services removed from the catalog"
    )
    .expect("register services_deleted_total")
});

/// Count one API call. `outcome` is `ok`, `invalid` or `not_found`.
pub fn record(operation: &str, outcome: &str) {
    API_REQUESTS_TOTAL.with_label_values(&[operation, outcome]).inc();
}

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_counters_show_up_in_exposition() {
        record("list", "ok");
        SERVICES_CREATED_TOTAL.inc();
        let (status, body) = encode_metrics();
        assert_eq!(status, axum::http::StatusCode::OK);
        assert!(body.contains("agency_api_requests_total"));
        assert!(body.contains("agency_services_created_total"));
    }
}
