//! Prometheus metrics for invoicing-desk.

use once_cell::sync::Lazy;
use prometheus::{
    register_counter_vec, register_histogram_vec, register_int_counter, CounterVec, HistogramVec,
    IntCounter, TextEncoder,
};

/// Line items added to the working invoice.
pub static LINE_ITEMS_ADDED: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "invoicing_desk_line_items_added_total",
        "Total number of line items added"
    )
    .expect("Failed to register line_items_added_total")
});

/// Invoice submissions by outcome.
pub static INVOICES_SUBMITTED: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "invoicing_desk_invoices_submitted_total",
        "Total number of invoice submissions by outcome",
        &["outcome"] // generated, rejected, failed
    )
    .expect("Failed to register invoices_submitted_total")
});

/// Error counter by error kind.
pub static ERRORS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "invoicing_desk_errors_total",
        "Total number of errors surfaced to the user by type",
        &["error_type"]
    )
    .expect("Failed to register errors_total")
});

/// Backend request duration histogram by endpoint.
pub static REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "invoicing_desk_request_duration_seconds",
        "Backend request duration in seconds",
        &["endpoint"],
        vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
    )
    .expect("Failed to register request_duration")
});

/// Initialize all metrics (forces lazy initialization).
pub fn init_metrics() {
    Lazy::force(&LINE_ITEMS_ADDED);
    Lazy::force(&INVOICES_SUBMITTED);
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exported_text_names_desk_metrics() {
        init_metrics();
        ERRORS_TOTAL.with_label_values(&["validation"]).inc();

        let text = get_metrics();
        assert!(text.contains("invoicing_desk_errors_total"));
        assert!(text.contains("error_type=\"validation\""));
    }
}
