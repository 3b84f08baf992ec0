//! Runtime configuration loaded from `thrust-sim.toml`.
//!
//! Every field has a default, so the file is optional and a partial file only
//! overrides the keys it names. Values are validated once after loading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::error::{Error, Result};

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "thrust-sim.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // ── Simulation ──────────────────────────────────────────────────────────
    pub tick_rate: f64,      // Hz
    pub gravity: f64,        // downward acceleration, units/s^2
    pub burn_divisor: f64,   // fuel burned per second = thrust / burn_divisor

    // ── Window & layout ─────────────────────────────────────────────────────
    pub window_width: f32,
    pub window_height_margin: f32, // subtracted from the monitor height
    pub default_window_height: f32,
    pub altitude_scale: f64,       // position units per pixel

    // ── Frame pacing ────────────────────────────────────────────────────────
    pub max_catch_up_steps: u32,

    // ── Persistence & telemetry ─────────────────────────────────────────────
    pub high_score_path: PathBuf,
    pub telemetry_capacity: usize,
    pub telemetry_csv: Option<PathBuf>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60.0,
            gravity: 50.0,
            burn_divisor: 20.0,
            window_width: 700.0,
            window_height_margin: 100.0,
            default_window_height: 800.0,
            altitude_scale: 20.0,
            max_catch_up_steps: 5,
            high_score_path: PathBuf::from("highscore.txt"),
            telemetry_capacity: 3600, // one minute at 60 Hz
            telemetry_csv: None,
        }
    }
}

impl SimConfig {
    /// Fixed simulation timestep in seconds.
    pub fn dt(&self) -> f64 {
        1.0 / self.tick_rate
    }

    pub fn from_toml(text: &str, path: &Path) -> Result<Self> {
        let config: SimConfig = toml::from_str(text).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => {
                let config = Self::from_toml(&text, path)?;
                info!(path = %path.display(), "loaded config");
                Ok(config)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(Error::io(path, e)),
        }
    }

    pub fn validate(&self) -> Result<()> {
        positive("tick_rate", self.tick_rate)?;
        positive("burn_divisor", self.burn_divisor)?;
        positive("altitude_scale", self.altitude_scale)?;
        if !(self.gravity >= 0.0 && self.gravity.is_finite()) {
            return Err(Error::InvalidConfig {
                name: "gravity",
                value: self.gravity,
                expected: "[0, inf)",
            });
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidConfig {
            name,
            value,
            expected: "(0, inf)",
        })
    }
}
