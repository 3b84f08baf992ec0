//! Crate error type.
//!
//! Only startup can fail for real: reading the config file or the persisted
//! high score. Everything inside the frame loop clamps instead of erroring.

use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// Reading or writing a file failed.
    Io { path: PathBuf, source: io::Error },

    /// The high-score file holds something that is not a decimal number.
    MalformedHighScore { path: PathBuf, content: String },

    /// The high-score file parsed, but the value cannot be a height.
    InvalidHighScore { value: f64 },

    /// The config file is not valid TOML for [`crate::config::SimConfig`].
    ConfigParse { path: PathBuf, message: String },

    /// A config value is outside the range the simulation can run with.
    InvalidConfig {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    /// The window toolkit failed to start or crashed.
    Window(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { path, source } => {
                write!(f, "i/o error on '{}': {}", path.display(), source)
            }
            Error::MalformedHighScore { path, content } => write!(
                f,
                "high score file '{}' does not contain a number: {:?}",
                path.display(),
                content
            ),
            Error::InvalidHighScore { value } => {
                write!(f, "high score must be a finite value >= 0, got {}", value)
            }
            Error::ConfigParse { path, message } => {
                write!(f, "cannot parse config '{}': {}", path.display(), message)
            }
            Error::InvalidConfig {
                name,
                value,
                expected,
            } => write!(
                f,
                "config value '{}' = {} is outside {}",
                name, value, expected
            ),
            Error::Window(msg) => write!(f, "window error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
