//! Vertical thrust simulation: a rocket on a 1-D track under gravity, a
//! finite tank, and an operator-dragged thrust slider.

pub mod config;
pub mod control;
pub mod dynamics;
pub mod error;
pub mod io;
pub mod logging;
pub mod sim;
pub mod view;

pub use config::SimConfig;
pub use error::{Error, Result};
