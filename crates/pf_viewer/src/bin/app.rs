use eframe::egui;
use pf_viewer::app::App;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    // install global collector configured based on RUST_LOG env var.
    tracing_subscriber::fmt()
        .with_target(true)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!("Starting portfolio viewer");

    // Optional deep link, e.g. `#skills`
    let anchor = std::env::args().nth(1);

    let app = match App::new(anchor.as_deref()) {
        Ok(app) => app,
        Err(e) => {
            error!("Could not start the viewer: {}", e);
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(1280.0, 860.0)),
        ..Default::default()
    };

    eframe::run_native("Portfolio", options, Box::new(|_cc| Box::new(app)))
}
