use crate::api::{Metric, PendingUpload, ReportRef};
use crate::app::filter;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;

/// The PDF the user picked for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
}

/// Replace-confirmation prompt. Entered only from an `Exists` event; the
/// payload is held untouched until the user confirms or cancels.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ReplaceState {
    #[default]
    Idle,
    AwaitingConfirmation {
        pending: PendingUpload,
    },
}

/// Everything the background workers report back to the UI thread.
#[derive(Debug, Clone, PartialEq)]
pub enum PortalEvent {
    /// Submission succeeded; carries the metrics of the processed upload.
    Extracted(Vec<Metric>),
    /// The backend already has a report for this company and year.
    Exists(PendingUpload),
    /// Submission failed; carries the message to surface.
    Failed(String),
    ReportsRefreshed(Vec<ReportRef>),
    MetricsRefreshed(Vec<Metric>),
    RefreshFailed(String),
}

pub struct UploadState {
    pub company: String,
    pub year: String,
    pub selected_file: Option<SelectedFile>,
    pub is_uploading: bool,
    pub status_message: Option<String>,
    pub replace: ReplaceState,

    // Read stores, each replaced wholesale by its own refresh event.
    pub reports: Vec<ReportRef>,
    pub all_metrics: Vec<Metric>,
    pub selected_source: String,

    pub event_receiver: Option<Receiver<PortalEvent>>,
}

impl Default for UploadState {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadState {
    pub fn new() -> Self {
        Self {
            company: String::new(),
            year: String::new(),
            selected_file: None,
            is_uploading: false,
            status_message: None,
            replace: ReplaceState::Idle,
            reports: Vec::new(),
            all_metrics: Vec::new(),
            selected_source: filter::ALL_SOURCES.to_string(),
            event_receiver: None,
        }
    }

    /// The payload to submit, or `None` while any field is missing.
    pub fn pending_upload(&self) -> Option<PendingUpload> {
        let file = self.selected_file.as_ref()?;
        let company = self.company.trim();
        let year = self.year.trim();
        if company.is_empty() || year.is_empty() {
            return None;
        }
        Some(PendingUpload {
            path: file.path.clone(),
            file_name: file.name.clone(),
            company: company.to_string(),
            year: year.to_string(),
        })
    }

    pub fn can_submit(&self) -> bool {
        self.pending_upload().is_some()
            && !self.is_uploading
            && matches!(self.replace, ReplaceState::Idle)
    }

    /// Starts a first-attempt submission. Returns the payload to send with
    /// `force = false`, or `None` when the form is incomplete, a submission
    /// is already in flight, or the replace prompt is open. `None` means no
    /// network call happens.
    pub fn begin_submission(&mut self) -> Option<(PendingUpload, bool)> {
        if !self.can_submit() {
            return None;
        }
        let payload = self.pending_upload()?;
        self.is_uploading = true;
        self.status_message = Some("Uploading to server...".to_string());
        Some((payload, false))
    }

    /// Confirms the replace prompt: hands back the retained payload for a
    /// forced resubmission.
    pub fn confirm_replace(&mut self) -> Option<(PendingUpload, bool)> {
        match std::mem::take(&mut self.replace) {
            ReplaceState::AwaitingConfirmation { pending } => {
                self.is_uploading = true;
                self.status_message = Some("Uploading to server...".to_string());
                Some((pending, true))
            }
            ReplaceState::Idle => None,
        }
    }

    /// Dismisses the replace prompt. The retained payload is discarded and
    /// no network call is made.
    pub fn cancel_replace(&mut self) {
        self.replace = ReplaceState::Idle;
        self.is_uploading = false;
        self.status_message = Some("Upload canceled.".to_string());
    }

    /// Applies one worker event. Each store updates in isolation, so the two
    /// refresh responses that follow a successful upload can land in either
    /// order.
    pub fn apply_event(&mut self, event: PortalEvent) {
        match event {
            PortalEvent::Extracted(metrics) => {
                self.is_uploading = false;
                self.status_message = Some(format!(
                    "File uploaded and processed successfully. {} metrics extracted.",
                    metrics.len()
                ));
            }
            PortalEvent::Exists(pending) => {
                self.is_uploading = false;
                self.replace = ReplaceState::AwaitingConfirmation { pending };
            }
            PortalEvent::Failed(message) => {
                self.is_uploading = false;
                self.status_message = Some(message);
            }
            PortalEvent::ReportsRefreshed(reports) => {
                self.reports = reports;
            }
            PortalEvent::MetricsRefreshed(metrics) => {
                self.all_metrics = metrics;
                // A refresh can remove the selected source file entirely.
                let sources = filter::unique_sources(&self.all_metrics);
                if !sources.iter().any(|s| *s == self.selected_source) {
                    self.selected_source = filter::ALL_SOURCES.to_string();
                }
            }
            PortalEvent::RefreshFailed(message) => {
                log::warn!("store refresh failed: {}", message);
            }
        }
    }
}
