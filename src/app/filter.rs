//! Source-file filtering for the all-metrics table.

use crate::api::Metric;

/// Sentinel selection meaning "show every row".
pub const ALL_SOURCES: &str = "All";

/// The filter options for a metric set: the sentinel first, then each
/// distinct source file once, in first-seen order.
pub fn unique_sources(metrics: &[Metric]) -> Vec<String> {
    let mut sources = vec![ALL_SOURCES.to_string()];
    for metric in metrics {
        if !sources.iter().any(|s| *s == metric.source_file) {
            sources.push(metric.source_file.clone());
        }
    }
    sources
}

/// The rows whose source file matches the selection, preserving order.
/// The sentinel selects everything.
pub fn filter_by_source(metrics: &[Metric], selection: &str) -> Vec<Metric> {
    if selection == ALL_SOURCES {
        return metrics.to_vec();
    }
    metrics
        .iter()
        .filter(|m| m.source_file == selection)
        .cloned()
        .collect()
}
