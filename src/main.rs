use std::path::Path;
use std::process::ExitCode;

use eframe::egui;
use tracing::error;

use thrust_sim::config::{SimConfig, CONFIG_FILE};
use thrust_sim::io::HighScoreStore;
use thrust_sim::view::ThrustApp;
use thrust_sim::{logging, Error, Result};

const TITLE: &str = "Vertical Thrust Simulation";

fn main() -> ExitCode {
    logging::init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "thrust-sim stopped");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = SimConfig::load_or_default(Path::new(CONFIG_FILE))?;
    let store = HighScoreStore::new(&config.high_score_path);
    let high_score = store.load()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size([config.window_width, config.default_window_height])
            .with_resizable(false),
        ..Default::default()
    };
    // The app only exists once the window does
    eframe::run_native(
        TITLE,
        options,
        Box::new(move |_| Ok(Box::new(ThrustApp::new(config, store, high_score)))),
    )
    .map_err(|e| Error::Window(e.to_string()))
}
