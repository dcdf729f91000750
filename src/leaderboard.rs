//! Per-difficulty completion-time leaderboard
//!
//! Keeps the best (lowest) ten times for each difficulty, sorted ascending.
//! Persisted as a JSON object keyed by difficulty label:
//! `{"easy": [..], "medium": [..], "hard": [..]}` - the on-disk format is
//! stable and shared with older implementations.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::Difficulty;

/// Scores kept per difficulty
pub const MAX_SCORES: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    easy: Vec<f64>,
    medium: Vec<f64>,
    hard: Vec<f64>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self, difficulty: Difficulty) -> &Vec<f64> {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    fn table_mut(&mut self, difficulty: Difficulty) -> &mut Vec<f64> {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }

    /// Insert a completion time, keeping the table sorted ascending and
    /// truncated to MAX_SCORES (the slowest time falls off a full table).
    pub fn add_score(&mut self, difficulty: Difficulty, elapsed_secs: f64) {
        let table = self.table_mut(difficulty);
        let pos = table.partition_point(|&existing| existing <= elapsed_secs);
        table.insert(pos, elapsed_secs);
        table.truncate(MAX_SCORES);
    }

    /// Top times for a difficulty, fastest first
    pub fn scores(&self, difficulty: Difficulty) -> &[f64] {
        self.table(difficulty)
    }

    /// 1-indexed rank a time would earn, or None if it misses the table
    pub fn rank_of(&self, difficulty: Difficulty, elapsed_secs: f64) -> Option<usize> {
        let table = self.table(difficulty);
        let pos = table.partition_point(|&existing| existing <= elapsed_secs);
        (pos < MAX_SCORES).then_some(pos + 1)
    }

    /// Load from a JSON file, falling back to an empty board on any failure
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(board) => {
                    log::info!("loaded leaderboard from {}", path.display());
                    board
                }
                Err(err) => {
                    log::warn!("leaderboard file unreadable ({err}), starting fresh");
                    Self::new()
                }
            },
            Err(_) => {
                log::info!("no leaderboard at {}, starting fresh", path.display());
                Self::new()
            }
        }
    }

    /// Write the board back as JSON
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_stay_sorted_ascending() {
        let mut board = Leaderboard::new();
        board.add_score(Difficulty::Easy, 10.0);
        board.add_score(Difficulty::Easy, 20.0);
        board.add_score(Difficulty::Easy, 15.0);
        assert_eq!(board.scores(Difficulty::Easy), &[10.0, 15.0, 20.0]);
        // Other difficulties untouched
        assert!(board.scores(Difficulty::Hard).is_empty());
    }

    #[test]
    fn test_full_table_drops_slowest() {
        let mut board = Leaderboard::new();
        for i in 0..10 {
            board.add_score(Difficulty::Medium, 100.0 + i as f64);
        }
        board.add_score(Difficulty::Medium, 50.0);

        let scores = board.scores(Difficulty::Medium);
        assert_eq!(scores.len(), MAX_SCORES);
        assert_eq!(scores[0], 50.0);
        assert!(!scores.contains(&109.0)); // slowest fell off
        assert!(scores.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_rank_of() {
        let mut board = Leaderboard::new();
        board.add_score(Difficulty::Easy, 10.0);
        board.add_score(Difficulty::Easy, 20.0);
        assert_eq!(board.rank_of(Difficulty::Easy, 5.0), Some(1));
        assert_eq!(board.rank_of(Difficulty::Easy, 15.0), Some(2));
        assert_eq!(board.rank_of(Difficulty::Easy, 30.0), Some(3));
    }

    #[test]
    fn test_json_format_and_round_trip() {
        let mut board = Leaderboard::new();
        board.add_score(Difficulty::Easy, 12.5);
        board.add_score(Difficulty::Hard, 99.0);

        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"{"easy":[12.5],"medium":[],"hard":[99.0]}"#);

        let parsed: Leaderboard = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, board);
    }

    #[test]
    fn test_load_missing_or_corrupt_file_is_empty() {
        let missing = Leaderboard::load(Path::new("/nonexistent/leaderboard.json"));
        assert!(missing.scores(Difficulty::Easy).is_empty());

        let dir = std::env::temp_dir().join("depthmaze_leaderboard_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("corrupt.json");
        std::fs::write(&path, "not json at all").unwrap();
        let corrupt = Leaderboard::load(&path);
        assert!(corrupt.scores(Difficulty::Easy).is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = std::env::temp_dir().join("depthmaze_leaderboard_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("scores.json");

        let mut board = Leaderboard::new();
        board.add_score(Difficulty::Medium, 42.0);
        board.save(&path).unwrap();

        let loaded = Leaderboard::load(&path);
        assert_eq!(loaded, board);
    }
}
