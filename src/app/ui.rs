use super::{Page, PortalApp, SelectedFile};
use crate::app::filter;
use crate::app::state::ReplaceState;
use crate::dashboard::{CompanyFigures, PeerCompany, INGREDION_FIGURES};
use crate::utils::file_size::FileSizeUtils;
use eframe::egui::{self, Color32, RichText};
use rfd::FileDialog;

const BRAND_GREEN: Color32 = Color32::from_rgb(34, 197, 94);
const COMPARE_BLUE: Color32 = Color32::from_rgb(96, 165, 250);
const STATUS_YELLOW: Color32 = Color32::from_rgb(250, 204, 21);
const PROMPT_RED: Color32 = Color32::from_rgb(248, 113, 113);
const MUTED_GRAY: Color32 = Color32::from_rgb(156, 163, 175);

impl PortalApp {
    pub fn render(&mut self, ctx: &egui::Context) {
        if self.page == Page::Home {
            self.render_home(ctx);
            return;
        }

        self.render_sidebar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.page {
                Page::Dashboard => self.render_dashboard(ui),
                _ => self.render_upload(ui),
            });
        });

        self.render_replace_prompt(ctx);
    }

    fn render_home(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(ui.available_height() * 0.35);
            ui.vertical_centered(|ui| {
                ui.heading(
                    RichText::new("Ingredion Sustainability Portal")
                        .color(BRAND_GREEN)
                        .size(32.0),
                );
                ui.add_space(8.0);
                ui.label("Upload, explore, and visualize sustainability data.");
                ui.add_space(30.0);

                let start = egui::Button::new(RichText::new("Start →").size(18.0))
                    .min_size(egui::vec2(160.0, 44.0));
                if ui.add(start).clicked() {
                    self.page = Page::Dashboard;
                }
            });
        });
    }

    fn render_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("portal_nav")
            .resizable(false)
            .default_width(170.0)
            .show(ctx, |ui| {
                ui.add_space(16.0);
                ui.heading(RichText::new("Ingredion").color(BRAND_GREEN));
                ui.add_space(20.0);

                if ui
                    .selectable_label(self.page == Page::Dashboard, "Dashboard")
                    .clicked()
                {
                    self.page = Page::Dashboard;
                }
                if ui
                    .selectable_label(self.page == Page::Upload, "Upload")
                    .clicked()
                {
                    self.page = Page::Upload;
                }
            });
    }

    fn render_dashboard(&mut self, ui: &mut egui::Ui) {
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.heading(
                RichText::new("Ingredion Sustainability Dashboard")
                    .color(BRAND_GREEN)
                    .size(26.0),
            );
            ui.label(
                RichText::new("View Ingredion metrics and compare with other companies.")
                    .color(MUTED_GRAY),
            );
        });

        ui.add_space(20.0);

        ui.group(|ui| {
            ui.heading(RichText::new("Ingredion Metrics").color(BRAND_GREEN));
            ui.add_space(10.0);
            figure_tiles(ui, &INGREDION_FIGURES, BRAND_GREEN);
            ui.add_space(10.0);
            chart_placeholder(ui, "Placeholder for Ingredion chart");
        });

        ui.add_space(20.0);

        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.heading(RichText::new("Company Comparison").color(BRAND_GREEN));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::ComboBox::from_id_source("peer_company")
                        .selected_text(self.selected_peer.label())
                        .show_ui(ui, |ui| {
                            for peer in PeerCompany::ALL {
                                ui.selectable_value(&mut self.selected_peer, peer, peer.label());
                            }
                        });
                });
            });
            ui.add_space(10.0);
            figure_tiles(ui, &self.selected_peer.figures(), COMPARE_BLUE);
            ui.add_space(10.0);
            chart_placeholder(ui, "Placeholder for company chart");
        });
    }

    fn render_upload(&mut self, ui: &mut egui::Ui) {
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.heading(
                RichText::new("Upload Sustainability Report")
                    .color(BRAND_GREEN)
                    .size(26.0),
            );
        });
        ui.add_space(16.0);

        let form_enabled = matches!(self.state.replace, ReplaceState::Idle);
        ui.add_enabled_ui(form_enabled, |ui| self.render_upload_form(ui));

        ui.add_space(20.0);
        self.render_reports_table(ui);
        ui.add_space(20.0);
        self.render_metrics_table(ui);
        ui.add_space(20.0);
    }

    fn render_upload_form(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            egui::Grid::new("upload_form")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Company Name");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.state.company)
                            .desired_width(260.0)
                            .hint_text("e.g. Ingredion"),
                    );
                    ui.end_row();

                    ui.label("Report Year");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.state.year)
                            .desired_width(260.0)
                            .hint_text("e.g. 2024"),
                    );
                    ui.end_row();
                });

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("📁 Select PDF").clicked() {
                    if let Some(path) = FileDialog::new()
                        .add_filter("PDF report", &["pdf"])
                        .pick_file()
                    {
                        let name = path
                            .file_name()
                            .map(|n| n.to_string_lossy().to_string())
                            .unwrap_or_default();
                        let size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
                        self.state.selected_file = Some(SelectedFile { path, name, size });
                        self.state.status_message = None;
                    }
                }
                if let Some(file) = &self.state.selected_file {
                    ui.colored_label(
                        BRAND_GREEN,
                        format!(
                            "Selected: {} ({})",
                            file.name,
                            FileSizeUtils::format_size(file.size)
                        ),
                    );
                }
            });

            ui.add_space(10.0);

            let can_upload = self.state.can_submit();
            ui.add_enabled_ui(can_upload, |ui| {
                let label = if self.state.is_uploading {
                    "⏳ Uploading..."
                } else {
                    "📤 Upload"
                };
                let button = egui::Button::new(label).min_size(egui::vec2(200.0, 36.0));
                if ui.add(button).clicked() {
                    self.start_upload();
                }
            });

            if let Some(message) = &self.state.status_message {
                ui.add_space(8.0);
                ui.colored_label(STATUS_YELLOW, message);
            }
        });
    }

    fn render_reports_table(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.heading(RichText::new("📁 Extracted Reports").color(COMPARE_BLUE));
            ui.add_space(8.0);

            egui::Grid::new("reports_table")
                .num_columns(3)
                .striped(true)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Company").strong());
                    ui.label(RichText::new("Year").strong());
                    ui.label(RichText::new("File").strong());
                    ui.end_row();

                    for report in &self.state.reports {
                        ui.label(&report.company);
                        ui.label(&report.year);
                        ui.label(&report.path);
                        ui.end_row();
                    }
                });

            if self.state.reports.is_empty() {
                ui.add_space(4.0);
                ui.label(RichText::new("No reports extracted yet.").color(MUTED_GRAY));
            }
        });
    }

    fn render_metrics_table(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.heading(RichText::new("📊 All Extracted Metrics").color(BRAND_GREEN));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let sources = filter::unique_sources(&self.state.all_metrics);
                    egui::ComboBox::from_id_source("source_filter")
                        .selected_text(self.state.selected_source.clone())
                        .show_ui(ui, |ui| {
                            for source in sources {
                                ui.selectable_value(
                                    &mut self.state.selected_source,
                                    source.clone(),
                                    source,
                                );
                            }
                        });
                    ui.label(RichText::new("Filter:").strong());
                });
            });
            ui.add_space(8.0);

            let rows =
                filter::filter_by_source(&self.state.all_metrics, &self.state.selected_source);

            egui::ScrollArea::vertical()
                .id_source("metrics_rows")
                .max_height(320.0)
                .show(ui, |ui| {
                    egui::Grid::new("metrics_table")
                        .num_columns(6)
                        .striped(true)
                        .spacing([18.0, 6.0])
                        .show(ui, |ui| {
                            ui.label(RichText::new("Metric").strong());
                            ui.label(RichText::new("Value").strong());
                            ui.label(RichText::new("Unit").strong());
                            ui.label(RichText::new("Year").strong());
                            ui.label(RichText::new("Source Page").strong());
                            ui.label(RichText::new("File").strong());
                            ui.end_row();

                            for metric in &rows {
                                ui.label(&metric.metric_name);
                                ui.label(&metric.value);
                                ui.label(&metric.unit);
                                ui.label(&metric.year);
                                ui.label(&metric.source_page);
                                ui.label(&metric.source_file);
                                ui.end_row();
                            }
                        });
                });

            if rows.is_empty() {
                ui.add_space(4.0);
                ui.label(RichText::new("No metrics to show.").color(MUTED_GRAY));
            }
        });
    }

    fn render_replace_prompt(&mut self, ctx: &egui::Context) {
        if !matches!(self.state.replace, ReplaceState::AwaitingConfirmation { .. }) {
            return;
        }

        let mut confirm = false;
        let mut cancel = false;

        egui::Window::new(RichText::new("File Already Exists").color(PROMPT_RED))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("A report for this company and year already exists.");
                ui.label("Replace it?");
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    if ui
                        .button(RichText::new("Replace").color(PROMPT_RED))
                        .clicked()
                    {
                        confirm = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                });
            });

        if confirm {
            self.confirm_replace();
        }
        if cancel {
            self.cancel_replace();
        }
    }
}

fn figure_tiles(ui: &mut egui::Ui, figures: &CompanyFigures, accent: Color32) {
    ui.columns(3, |columns| {
        figure_tile(&mut columns[0], "CO₂ Emissions", figures.co2_emissions, accent);
        figure_tile(
            &mut columns[1],
            "Renewable Energy",
            figures.renewable_energy,
            accent,
        );
        figure_tile(&mut columns[2], "Water Usage", figures.water_usage, accent);
    });
}

fn figure_tile(ui: &mut egui::Ui, label: &str, value: &str, accent: Color32) {
    egui::Frame::none()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(label).color(MUTED_GRAY));
                ui.label(RichText::new(value).color(accent).size(22.0).strong());
            });
        });
}

fn chart_placeholder(ui: &mut egui::Ui, text: &str) {
    egui::Frame::none()
        .fill(ui.style().visuals.extreme_bg_color)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.set_height(160.0);
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new(text).color(MUTED_GRAY));
            });
        });
}
