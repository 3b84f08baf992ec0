use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Error, Result};

/// Single-scalar persisted record: a text file holding one decimal number,
/// or nothing at all.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the stored record. Missing or blank file → 0.0.
    pub fn load(&self) -> Result<f64> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no high score file, starting at 0");
                return Ok(0.0);
            }
            Err(e) => return Err(Error::io(&self.path, e)),
        };
        let value = parse(&content, &self.path)?;
        info!(path = %self.path.display(), high_score = value, "loaded high score");
        Ok(value)
    }

    /// Overwrite the stored record with `value`.
    pub fn save(&self, value: f64) -> Result<()> {
        if !(value.is_finite() && value >= 0.0) {
            return Err(Error::InvalidHighScore { value });
        }
        fs::write(&self.path, value.to_string()).map_err(|e| Error::io(&self.path, e))?;
        info!(path = %self.path.display(), high_score = value, "saved high score");
        Ok(())
    }
}

/// Parse file content. Surrounding whitespace is ignored.
pub fn parse(content: &str, path: &Path) -> Result<f64> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let value: f64 = trimmed.parse().map_err(|_| Error::MalformedHighScore {
        path: path.to_path_buf(),
        content: trimmed.to_string(),
    })?;
    if !(value.is_finite() && value >= 0.0) {
        return Err(Error::InvalidHighScore { value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir.join("highscore.txt")
    }

    #[test]
    fn empty_file_is_zero() {
        let path = scratch("thrust_sim_test_hs_empty");
        fs::write(&path, "").unwrap();
        assert_eq!(HighScoreStore::new(&path).load().unwrap(), 0.0);
    }

    #[test]
    fn missing_file_is_zero() {
        let path = scratch("thrust_sim_test_hs_missing");
        assert_eq!(HighScoreStore::new(&path).load().unwrap(), 0.0);
    }

    #[test]
    fn save_then_load_roundtrips() {
        let path = scratch("thrust_sim_test_hs_roundtrip");
        let store = HighScoreStore::new(&path);
        for x in [0.0, 1.5, 19_991.666_666_666_67, 1234.0625] {
            store.save(x).unwrap();
            assert_eq!(HighScoreStore::new(&path).load().unwrap(), x);
        }
    }

    #[test]
    fn save_overwrites() {
        let path = scratch("thrust_sim_test_hs_overwrite");
        let store = HighScoreStore::new(&path);
        store.save(900.0).unwrap();
        store.save(3.0).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "3");
    }

    #[test]
    fn trailing_newline_tolerated() {
        assert_eq!(parse("  812.5\n", Path::new("x")).unwrap(), 812.5);
    }

    #[test]
    fn garbage_is_fatal() {
        let err = parse("lots", Path::new("x")).unwrap_err();
        assert!(matches!(err, Error::MalformedHighScore { .. }));
    }

    #[test]
    fn negative_and_nan_rejected() {
        assert!(matches!(
            parse("-4", Path::new("x")),
            Err(Error::InvalidHighScore { .. })
        ));
        assert!(matches!(
            parse("NaN", Path::new("x")),
            Err(Error::InvalidHighScore { .. })
        ));
        assert!(HighScoreStore::new("unused").save(f64::INFINITY).is_err());
    }
}
