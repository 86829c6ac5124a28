//! Source-file filter behavior for the all-metrics table.

use sustainability_portal::api::Metric;
use sustainability_portal::app::filter::{filter_by_source, unique_sources, ALL_SOURCES};

fn metric(name: &str, source: &str) -> Metric {
    Metric {
        metric_name: name.to_string(),
        source_file: source.to_string(),
        ..Default::default()
    }
}

#[test]
fn unique_sources_starts_with_sentinel() {
    let metrics = [metric("co2", "a.pdf"), metric("water", "b.pdf")];
    assert_eq!(unique_sources(&metrics), vec!["All", "a.pdf", "b.pdf"]);
}

#[test]
fn unique_sources_collapses_duplicates() {
    let metrics = [
        metric("co2", "a.pdf"),
        metric("water", "a.pdf"),
        metric("energy", "b.pdf"),
        metric("waste", "a.pdf"),
    ];
    assert_eq!(unique_sources(&metrics), vec!["All", "a.pdf", "b.pdf"]);
}

#[test]
fn unique_sources_of_empty_set_is_just_the_sentinel() {
    assert_eq!(unique_sources(&[]), vec!["All"]);
}

#[test]
fn sentinel_filter_is_identity() {
    let metrics = vec![metric("co2", "a.pdf"), metric("water", "b.pdf")];
    assert_eq!(filter_by_source(&metrics, ALL_SOURCES), metrics);
}

#[test]
fn filter_selects_exactly_the_matching_rows() {
    let metrics = [metric("co2", "a.pdf"), metric("water", "b.pdf")];
    let filtered = filter_by_source(&metrics, "b.pdf");
    assert_eq!(filtered, vec![metric("water", "b.pdf")]);
}

#[test]
fn filter_preserves_relative_order() {
    let metrics = [
        metric("co2", "a.pdf"),
        metric("water", "b.pdf"),
        metric("energy", "a.pdf"),
        metric("waste", "a.pdf"),
    ];
    let filtered = filter_by_source(&metrics, "a.pdf");
    let names: Vec<&str> = filtered.iter().map(|m| m.metric_name.as_str()).collect();
    assert_eq!(names, vec!["co2", "energy", "waste"]);
}

#[test]
fn filter_is_idempotent() {
    let metrics = [
        metric("co2", "a.pdf"),
        metric("water", "b.pdf"),
        metric("energy", "a.pdf"),
    ];
    let once = filter_by_source(&metrics, "a.pdf");
    let twice = filter_by_source(&once, "a.pdf");
    assert_eq!(once, twice);
}

#[test]
fn dangling_selection_matches_zero_rows() {
    let metrics = [metric("co2", "a.pdf")];
    assert!(filter_by_source(&metrics, "gone.pdf").is_empty());
}
