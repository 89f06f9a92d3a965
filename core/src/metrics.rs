//! Business metrics for hotel access.
//!
//! # Exported Metrics
//!
//! - `hotels_eligibility_checks_total{outcome, reason}` - Eligibility decisions
//! - `hotels_queries_total{operation, result}` - Service operations by result
//! - `hotels_query_duration_seconds{operation}` - Service operation latency
//!
//! Recording is a no-op until a recorder (e.g. the Prometheus exporter) is
//! installed, so tests can call into the service freely.

use crate::eligibility::IneligibilityReason;
use metrics::{describe_counter, describe_histogram};

/// Register all metric descriptions.
///
/// Call once at startup, after installing the recorder.
pub fn register_business_metrics() {
    describe_counter!(
        "hotels_eligibility_checks_total",
        "Eligibility decisions by outcome (eligible, ineligible) and reason"
    );
    describe_counter!(
        "hotels_queries_total",
        "Hotel service operations by operation and result"
    );
    describe_histogram!(
        "hotels_query_duration_seconds",
        "Time taken by a hotel service operation, eligibility included"
    );

    tracing::info!("Hotel business metrics registered");
}

/// Record an eligibility decision.
pub fn record_eligibility(outcome: Result<(), IneligibilityReason>) {
    let (outcome, reason) = match outcome {
        Ok(()) => ("eligible", "none"),
        Err(reason) => ("ineligible", reason.as_str()),
    };
    metrics::counter!(
        "hotels_eligibility_checks_total",
        "outcome" => outcome,
        "reason" => reason
    )
    .increment(1);
}

/// Record the result and latency of a service operation.
pub fn record_query(operation: &'static str, result: &'static str, duration_secs: f64) {
    metrics::counter!("hotels_queries_total", "operation" => operation, "result" => result)
        .increment(1);
    metrics::histogram!("hotels_query_duration_seconds", "operation" => operation)
        .record(duration_secs);
}
