mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::{Context, Result, anyhow};

use app::FlagScatterApp;
use config::ViewerConfig;
use state::ScatterState;

fn main() -> Result<()> {
    env_logger::init();

    let config = ViewerConfig::default();

    let sets = match data::loader::load_file(&config.data_path) {
        Ok(sets) => sets,
        Err(e) => {
            let e = anyhow::Error::new(e)
                .context(format!("loading {}", config.data_path.display()));
            log::error!("Failed to load data: {e:#}");
            return Err(e);
        }
    };
    if sets.is_empty() {
        log::warn!("{} holds no records; the plot will be empty", config.data_path.display());
    }
    log::info!(
        "Loaded {} points from {} ({} up, {} down)",
        sets.len(),
        config.data_path.display(),
        sets.up.len(),
        sets.down.len()
    );

    let state = ScatterState::new(sets, &config);
    log::debug!("Plotting {} markers", state.point_count());
    let options = config.native_options();

    // Blocks until the window is closed.
    eframe::run_native(
        &config.window_title,
        options,
        Box::new(|_cc| Ok(Box::new(FlagScatterApp::new(state)))),
    )
    .map_err(|e| anyhow!("{e}"))
    .context("running scatter viewer")
}
