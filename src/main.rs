mod app;
mod color;
mod data;
mod state;
mod ui;
mod views;

use std::path::PathBuf;

use anyhow::Context;
use app::CohortDashApp;
use data::registry::DatasetRegistry;
use data::source::DataSource;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Optional positional argument: path to the statistics database.
    let db_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("aapi_dash.db"));

    // All datasets load before the UI exists; a failure here is fatal.
    let source = DataSource::open(&db_path)
        .with_context(|| format!("opening {}", db_path.display()))?;
    let registry = DatasetRegistry::load_all(&source).context("loading dashboard datasets")?;
    log::info!(
        "{} datasets ({} rows) loaded from {}",
        registry.len(),
        registry.total_rows(),
        db_path.display()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let state = AppState::new(registry, db_path);
    eframe::run_native(
        "Cohort Dash – AAPI Student Analytics",
        options,
        Box::new(|_cc| Ok(Box::new(CohortDashApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
