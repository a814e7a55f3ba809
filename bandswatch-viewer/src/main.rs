//! bandswatch viewer - drag a two-swatch rectangle over four color bands.

mod app;
mod canvas;
mod drag;
mod export;
mod layers;
mod theme;
mod transform;

use app::SwatchApp;
use bandswatch_core::DemoConfig;
use std::path::PathBuf;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Optional config file as the first argument
    let config_path: Option<PathBuf> = std::env::args().nth(1).map(PathBuf::from);
    let (config, startup_error) = load_config(config_path);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_size.width, config.window_size.height])
            .with_min_inner_size([200.0, 200.0])
            .with_title("Band Swatch"),
        ..Default::default()
    };

    eframe::run_native(
        "Band Swatch",
        options,
        Box::new(move |cc| Ok(Box::new(SwatchApp::new(cc, config, startup_error)))),
    )
}

/// Load the config file if one was given, falling back to defaults on error.
///
/// The error message, if any, is shown in the window once it opens.
fn load_config(path: Option<PathBuf>) -> (DemoConfig, Option<String>) {
    let Some(path) = path else {
        return (DemoConfig::default(), None);
    };

    match DemoConfig::load(&path) {
        Ok(config) => {
            tracing::info!("Loaded config from {}", path.display());
            (config, None)
        }
        Err(e) => {
            tracing::error!("Failed to load {}: {} (using defaults)", path.display(), e);
            (
                DemoConfig::default(),
                Some(format!("Failed to load config: {}\nUsing defaults.", e)),
            )
        }
    }
}
