//! Deserialization of the extraction backend's responses.

use sustainability_portal::api::{
    outcome_from, ApiError, ExtractOutcome, ExtractResponse, ListResponse, MetricsResponse,
};

#[test]
fn success_response_maps_to_completed_with_metrics() {
    let body = r#"{
        "status": "success",
        "saved_to": "data/extracted/ingredion_2024.json",
        "company": "ingredion",
        "year": 2024,
        "metrics": [
            {
                "metric_name": "Scope 1 emissions",
                "value": 12000,
                "unit": "tCO2e",
                "year": 2024,
                "source_page": 14,
                "source_file": "ingredion_2024.pdf"
            }
        ]
    }"#;

    let response: ExtractResponse = serde_json::from_str(body).unwrap();
    let outcome = outcome_from(response).unwrap();

    let ExtractOutcome::Completed(metrics) = outcome else {
        panic!("expected completed outcome");
    };
    assert_eq!(metrics.len(), 1);
    assert_eq!(metrics[0].metric_name, "Scope 1 emissions");
    // Numeric fields normalize to strings.
    assert_eq!(metrics[0].value, "12000");
    assert_eq!(metrics[0].year, "2024");
    assert_eq!(metrics[0].source_page, "14");
}

#[test]
fn success_without_metrics_is_still_completed() {
    let response: ExtractResponse = serde_json::from_str(r#"{"status": "success"}"#).unwrap();
    assert_eq!(outcome_from(response).unwrap(), ExtractOutcome::Completed(vec![]));
}

#[test]
fn exists_response_maps_to_already_exists() {
    let body = r#"{
        "status": "exists",
        "file_exists": true,
        "message": "A report for Ingredion 2024 already exists. Replace it?"
    }"#;

    let response: ExtractResponse = serde_json::from_str(body).unwrap();
    assert_eq!(outcome_from(response).unwrap(), ExtractOutcome::AlreadyExists);
}

#[test]
fn unknown_status_is_an_error() {
    let response: ExtractResponse =
        serde_json::from_str(r#"{"status": "processing"}"#).unwrap();
    let err = outcome_from(response).unwrap_err();
    assert!(matches!(err, ApiError::UnexpectedResponse(_)));
}

#[test]
fn missing_status_field_fails_to_parse() {
    let result = serde_json::from_str::<ExtractResponse>(r#"{"metrics": []}"#);
    assert!(result.is_err());
}

#[test]
fn listing_defaults_to_empty_reports() {
    let response: ListResponse = serde_json::from_str("{}").unwrap();
    assert!(response.reports.is_empty());
}

#[test]
fn listing_parses_numeric_years() {
    let body = r#"{
        "reports": [
            {"company": "ingredion", "year": 2024, "path": "data/extracted/ingredion_2024.json"},
            {"company": "pepsico", "year": "2023", "path": "data/extracted/pepsico_2023.json"}
        ]
    }"#;

    let response: ListResponse = serde_json::from_str(body).unwrap();
    assert_eq!(response.reports[0].year, "2024");
    assert_eq!(response.reports[1].year, "2023");
}

#[test]
fn metrics_tolerate_null_and_missing_fields() {
    let body = r#"{
        "metrics": [
            {"metric_name": "Water withdrawal", "value": null, "source_file": "a.pdf"}
        ]
    }"#;

    let response: MetricsResponse = serde_json::from_str(body).unwrap();
    let metric = &response.metrics[0];
    assert_eq!(metric.value, "");
    assert_eq!(metric.unit, "");
    assert_eq!(metric.year, "");
    assert_eq!(metric.source_file, "a.pdf");
}
