pub mod filter;
mod state;
mod ui;

use crate::api::{ExtractClient, ExtractOutcome, PendingUpload};
use crate::dashboard::PeerCompany;
use eframe::egui;
pub use state::{PortalEvent, ReplaceState, SelectedFile, UploadState};
use std::sync::mpsc as std_mpsc;

/// The page the portal is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Dashboard,
    Upload,
}

pub struct PortalApp {
    page: Page,
    selected_peer: PeerCompany,
    client: ExtractClient,
    state: UploadState,
    event_sender: std_mpsc::Sender<PortalEvent>,
}

impl PortalApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, base_url: String) -> Self {
        log::info!("Starting sustainability portal against {}", base_url);

        let (event_sender, event_receiver) = std_mpsc::channel();
        let mut state = UploadState::new();
        state.event_receiver = Some(event_receiver);

        let app = Self {
            page: Page::Home,
            selected_peer: PeerCompany::PepsiCo,
            client: ExtractClient::new(base_url),
            state,
            event_sender,
        };

        // Populate the reports and metrics stores on startup.
        app.spawn_refresh();
        app
    }

    pub fn start_upload(&mut self) {
        if let Some((payload, force)) = self.state.begin_submission() {
            self.spawn_submission(payload, force);
        }
    }

    pub fn confirm_replace(&mut self) {
        if let Some((payload, force)) = self.state.confirm_replace() {
            self.spawn_submission(payload, force);
        }
    }

    pub fn cancel_replace(&mut self) {
        self.state.cancel_replace();
    }

    /// Runs one submission on a worker thread. The worker sends exactly one
    /// terminal event (`Extracted`, `Exists`, or `Failed`); a successful
    /// extraction is followed by both store refreshes.
    fn spawn_submission(&self, payload: PendingUpload, force: bool) {
        log::info!(
            "Submitting {} for {} {} (force: {})",
            payload.file_name,
            payload.company,
            payload.year,
            force
        );

        let client = self.client.clone();
        let sender = self.event_sender.clone();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().unwrap();
            rt.block_on(async {
                match client.submit(&payload, force).await {
                    Ok(ExtractOutcome::Completed(metrics)) => {
                        log::info!("Extraction finished with {} metrics", metrics.len());
                        let _ = sender.send(PortalEvent::Extracted(metrics));
                        refresh_stores(&client, &sender).await;
                    }
                    Ok(ExtractOutcome::AlreadyExists) if !force => {
                        let _ = sender.send(PortalEvent::Exists(payload));
                    }
                    Ok(ExtractOutcome::AlreadyExists) => {
                        // A forced submission must overwrite; treat a second
                        // "exists" as a server fault rather than prompting
                        // again.
                        let _ = sender.send(PortalEvent::Failed(
                            "Upload failed: server refused to replace the report.".to_string(),
                        ));
                    }
                    Err(e) => {
                        log::error!("Submission failed: {}", e);
                        let _ = sender.send(PortalEvent::Failed(format!("Upload failed: {}", e)));
                    }
                }
            });
        });
    }

    /// Refreshes both read stores without a submission (used on startup).
    fn spawn_refresh(&self) {
        let client = self.client.clone();
        let sender = self.event_sender.clone();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().unwrap();
            rt.block_on(refresh_stores(&client, &sender));
        });
    }

    pub fn update_state(&mut self, ctx: &egui::Context) {
        let mut events = Vec::new();
        if let Some(receiver) = &self.state.event_receiver {
            while let Ok(event) = receiver.try_recv() {
                events.push(event);
            }
        }

        if events.is_empty() {
            return;
        }
        for event in events {
            self.state.apply_event(event);
        }
        ctx.request_repaint();
    }
}

/// Fetches the report listing and the combined metrics. The two requests are
/// independent; each store event is sent as soon as its own response arrives.
async fn refresh_stores(client: &ExtractClient, sender: &std_mpsc::Sender<PortalEvent>) {
    let reports = async {
        match client.list_extracted().await {
            Ok(reports) => {
                let _ = sender.send(PortalEvent::ReportsRefreshed(reports));
            }
            Err(e) => {
                let _ = sender.send(PortalEvent::RefreshFailed(format!(
                    "report listing: {}",
                    e
                )));
            }
        }
    };
    let metrics = async {
        match client.all_metrics().await {
            Ok(metrics) => {
                let _ = sender.send(PortalEvent::MetricsRefreshed(metrics));
            }
            Err(e) => {
                let _ = sender.send(PortalEvent::RefreshFailed(format!("all metrics: {}", e)));
            }
        }
    };
    tokio::join!(reports, metrics);
}

impl eframe::App for PortalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}
