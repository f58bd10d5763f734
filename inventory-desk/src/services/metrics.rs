//! Prometheus metrics for inventory-desk.

use once_cell::sync::Lazy;
use prometheus::{
    register_counter_vec, register_histogram_vec, register_int_counter,
    register_int_counter_vec, CounterVec, HistogramVec, IntCounter, IntCounterVec, TextEncoder,
};

/// Units recorded through stock-in.
pub static STOCK_IN_UNITS: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "inventory_desk_stock_in_units_total",
        "Total units recorded through stock-in"
    )
    .expect("Failed to register stock_in_units_total")
});

/// Lens registrations by outcome.
pub static LENSES_REGISTERED: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "inventory_desk_lenses_registered_total",
        "Total number of lens registrations by outcome",
        &["outcome"] // registered, rejected
    )
    .expect("Failed to register lenses_registered_total")
});

/// Error counter by error kind.
pub static ERRORS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "inventory_desk_errors_total",
        "Total number of errors surfaced to the user by type",
        &["error_type"]
    )
    .expect("Failed to register errors_total")
});

/// Backend request duration histogram by endpoint.
pub static REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "inventory_desk_request_duration_seconds",
        "Backend request duration in seconds",
        &["endpoint"],
        vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
    )
    .expect("Failed to register request_duration")
});

/// Initialize all metrics (forces lazy initialization).
pub fn init_metrics() {
    Lazy::force(&STOCK_IN_UNITS);
    Lazy::force(&LENSES_REGISTERED);
    Lazy::force(&ERRORS_TOTAL);
    Lazy::force(&REQUEST_DURATION);
}

/// Get metrics in Prometheus text format.
pub fn get_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    encoder
        .encode_to_string(&metric_families)
        .unwrap_or_default()
}
