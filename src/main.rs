use tastemap::{
    Settings,
    TasteMapApp,
    TasteMapError,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), TasteMapError> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let settings = Settings::load();
    info!("Starting tastemap {}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Tastemap")
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "tastemap",
        options,
        Box::new(|cc| Ok(Box::new(TasteMapApp::new(cc, settings)?))),
    )
    .map_err(|e| TasteMapError::Custom(format!("UI failed: {e}")))
}
