//! Persists submitted games and their request log notes.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

/// Paths of the artifact pair written for one submission.
#[derive(Debug, Clone)]
pub struct SavedGame {
    pub pgn_path: PathBuf,
    pub log_path: PathBuf,
}

/// Write the transcript and a timestamped log note to `dir`, creating the
/// directory if needed.
///
/// Both filenames share a second-precision UTC stem; two submissions within
/// the same second collide and the later write overwrites the earlier one.
pub fn save_game_and_log(dir: impl AsRef<Path>, pgn: &str) -> Result<SavedGame> {
    save_at(dir.as_ref(), pgn, Utc::now())
}

fn save_at(dir: &Path, pgn: &str, timestamp: DateTime<Utc>) -> Result<SavedGame> {
    fs::create_dir_all(dir)
        .with_context(|| format!("create games directory {}", dir.display()))?;

    let stem = timestamp.format("%Y-%m-%d_%H-%M-%S");
    let pgn_path = dir.join(format!("game_{stem}.pgn"));
    let log_path = dir.join(format!("game_{stem}.log"));

    fs::write(&pgn_path, pgn).with_context(|| format!("write {}", pgn_path.display()))?;

    let note = format!("Analysis requested at (UTC): {}\n", timestamp.to_rfc3339());
    fs::write(&log_path, note).with_context(|| format!("write {}", log_path.display()))?;

    Ok(SavedGame { pgn_path, log_path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const PGN: &str = "[Event \"Test\"]\n\n1. e4 e5 2. Nf3 Nc6 1-0";

    #[test]
    fn test_writes_paired_files_with_shared_stem() {
        let temp = tempfile::tempdir().expect("tempdir");
        let ts = Utc.with_ymd_and_hms(2026, 8, 8, 14, 30, 5).unwrap();

        let saved = save_at(temp.path(), PGN, ts).expect("save");

        assert_eq!(
            saved.pgn_path.file_name().unwrap(),
            "game_2026-08-08_14-30-05.pgn"
        );
        assert_eq!(
            saved.log_path.file_name().unwrap(),
            "game_2026-08-08_14-30-05.log"
        );

        let transcript = fs::read_to_string(&saved.pgn_path).unwrap();
        assert_eq!(transcript, PGN);

        let note = fs::read_to_string(&saved.log_path).unwrap();
        assert!(note.starts_with("Analysis requested at (UTC): 2026-08-08T14:30:05"));
        assert!(note.ends_with('\n'));
    }

    #[test]
    fn test_creates_missing_directory() {
        let temp = tempfile::tempdir().expect("tempdir");
        let dir = temp.path().join("games");
        assert!(!dir.exists());

        save_at(&dir, PGN, Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()).expect("save");
        assert!(dir.is_dir());
    }

    #[test]
    fn test_same_second_submission_overwrites() {
        let temp = tempfile::tempdir().expect("tempdir");
        let ts = Utc.with_ymd_and_hms(2026, 8, 8, 14, 30, 5).unwrap();

        let first = save_at(temp.path(), "first transcript", ts).expect("first save");
        let second = save_at(temp.path(), "second transcript", ts).expect("second save");

        assert_eq!(first.pgn_path, second.pgn_path);
        let contents = fs::read_to_string(&second.pgn_path).unwrap();
        assert_eq!(contents, "second transcript");
    }
}
