use smart_mirror::gui::MirrorApp;
use smart_mirror::logging;
use smart_mirror::settings::{ConfigStore, SETTINGS_FILE};

use eframe::egui;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE));
    let store = ConfigStore::open(&path)?;
    logging::init(
        store.settings().debug_logging,
        store.settings().log_file.as_ref().map(PathBuf::from),
    );
    if store.created_defaults() {
        tracing::info!("created default settings at {}", store.path().display());
    }
    tracing::info!("using settings {}", store.path().display());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Smart Mirror")
            .with_inner_size([1280.0, 800.0])
            .with_maximized(true),
        ..Default::default()
    };

    eframe::run_native(
        "Smart Mirror",
        native_options,
        Box::new(
            move |cc: &eframe::CreationContext<'_>| -> Box<dyn eframe::App> {
                match MirrorApp::with_context(&cc.egui_ctx, store) {
                    Ok(app) => Box::new(app),
                    Err(e) => {
                        tracing::error!("failed to start dashboard: {e:#}");
                        eprintln!("failed to start dashboard: {e:#}");
                        std::process::exit(1);
                    }
                }
            },
        ),
    )
    .map_err(|e| anyhow::anyhow!("window error: {e}"))
}
