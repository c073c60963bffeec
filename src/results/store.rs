//! Session persistence of the last search results.
//!
//! The search page hands its results to the viewer through a small JSON
//! file in the user data dir, surviving the page hop (and app restarts).
//! A missing or corrupt file just means "no results yet".

use std::path::{Path, PathBuf};

use crate::config::{load_json_config, save_json_config};
use crate::results::poem::PoemRecord;

/// Default location of the session results file.
pub fn default_results_path() -> PathBuf {
    crate::config::app_data_dir().join("results.json")
}

/// Load the stored result set; empty when nothing was saved.
pub fn load_results(path: &Path) -> Vec<PoemRecord> {
    load_json_config(path, "Results")
}

/// Persist a result set for the viewer to pick up.
pub fn save_results(path: &Path, records: &[PoemRecord]) -> Result<(), String> {
    save_json_config(path, &records, "Results")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::EmotionVector;

    #[test]
    fn round_trips_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");

        let records = vec![PoemRecord {
            poem: "The fog comes on little cat feet.".to_string(),
            emotion_vector: EmotionVector::empty(),
            poet: "Carl Sandburg".to_string(),
            title: "Fog".to_string(),
        }];
        save_results(&path, &records).unwrap();

        let loaded = load_results(&path);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].poet, "Carl Sandburg");
    }

    #[test]
    fn missing_file_yields_no_results() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_results(&dir.path().join("results.json")).is_empty());
    }

    #[test]
    fn corrupt_file_yields_no_results() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        std::fs::write(&path, "[{\"poem\": ").unwrap();
        assert!(load_results(&path).is_empty());
    }
}
