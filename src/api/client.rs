use crate::api::types::{
    ExtractOutcome, ExtractResponse, ListResponse, Metric, MetricsResponse, PendingUpload,
    ReportRef,
};
use reqwest::multipart::{Form, Part};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

/// HTTP client for the extraction backend.
#[derive(Clone)]
pub struct ExtractClient {
    base_url: String,
    client: reqwest::Client,
}

impl ExtractClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Submits one report for extraction. The force flag tells the backend
    /// to overwrite an existing report for the same company and year.
    pub async fn submit(
        &self,
        upload: &PendingUpload,
        force: bool,
    ) -> Result<ExtractOutcome, ApiError> {
        let bytes = tokio::fs::read(&upload.path)
            .await
            .map_err(|source| ApiError::FileRead {
                path: upload.path.display().to_string(),
                source,
            })?;

        let file_part = Part::bytes(bytes)
            .file_name(upload.file_name.clone())
            .mime_str("application/pdf")?;

        let form = Form::new()
            .part("file", file_part)
            .text("company", upload.company.clone())
            .text("year", upload.year.clone())
            .text("force", if force { "true" } else { "false" });

        let response = self
            .client
            .post(format!("{}/api/extract", self.base_url))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let body: ExtractResponse = response.json().await?;
        outcome_from(body)
    }

    pub async fn list_extracted(&self) -> Result<Vec<ReportRef>, ApiError> {
        let response = self
            .client
            .get(format!("{}/api/list_extracted", self.base_url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let body: ListResponse = response.json().await?;
        Ok(body.reports)
    }

    pub async fn all_metrics(&self) -> Result<Vec<Metric>, ApiError> {
        let response = self
            .client
            .get(format!("{}/api/all_metrics", self.base_url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let body: MetricsResponse = response.json().await?;
        Ok(body.metrics)
    }
}

/// Maps the backend's status tag onto an outcome. Anything other than
/// "success" or "exists" is a contract violation.
pub fn outcome_from(response: ExtractResponse) -> Result<ExtractOutcome, ApiError> {
    match response.status.as_str() {
        "success" => Ok(ExtractOutcome::Completed(
            response.metrics.unwrap_or_default(),
        )),
        "exists" => Ok(ExtractOutcome::AlreadyExists),
        other => Err(ApiError::UnexpectedResponse(format!(
            "unknown status {:?}{}",
            other,
            response
                .message
                .map(|m| format!(" ({})", m))
                .unwrap_or_default()
        ))),
    }
}
