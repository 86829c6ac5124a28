use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::PathBuf;

/// A report submission that is ready to send: all three parts are present.
/// Built fresh from the form fields on every submit, so editing a field
/// simply produces a different payload next time.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingUpload {
    pub path: PathBuf,
    pub file_name: String,
    pub company: String,
    pub year: String,
}

/// What a single extraction submission came back as.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractOutcome {
    /// The backend parsed the report and returned its metrics.
    Completed(Vec<Metric>),
    /// A report for this company and year is already stored.
    AlreadyExists,
}

/// One row of the extracted-reports listing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReportRef {
    pub company: String,
    #[serde(deserialize_with = "stringly", default)]
    pub year: String,
    pub path: String,
}

/// One extracted metric. The extraction pipeline is LLM-backed and emits
/// numbers or strings depending on the report, so the loosely typed fields
/// are normalized to strings here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Metric {
    pub metric_name: String,
    #[serde(deserialize_with = "stringly", default)]
    pub value: String,
    #[serde(deserialize_with = "stringly", default)]
    pub unit: String,
    #[serde(deserialize_with = "stringly", default)]
    pub year: String,
    #[serde(deserialize_with = "stringly", default)]
    pub source_page: String,
    #[serde(default)]
    pub source_file: String,
}

#[derive(Debug, Deserialize)]
pub struct ExtractResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub metrics: Option<Vec<Metric>>,
}

#[derive(Debug, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub reports: Vec<ReportRef>,
}

#[derive(Debug, Deserialize)]
pub struct MetricsResponse {
    #[serde(default)]
    pub metrics: Vec<Metric>,
}

/// Accept strings, numbers, and null for fields the backend does not type
/// consistently.
fn stringly<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}
