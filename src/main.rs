use sustainability_portal::api::DEFAULT_API_URL;
use sustainability_portal::app::PortalApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let base_url =
        std::env::var("PORTAL_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Ingredion Sustainability Portal",
        options,
        Box::new(move |cc| Box::new(PortalApp::new(cc, base_url))),
    )
}
