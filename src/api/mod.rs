mod client;
mod types;

pub use client::{outcome_from, ApiError, ExtractClient};
pub use types::{
    ExtractOutcome, ExtractResponse, ListResponse, Metric, MetricsResponse, PendingUpload,
    ReportRef,
};

/// Development address of the extraction backend.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
