pub mod csv;
pub mod highscore;

pub use highscore::HighScoreStore;
