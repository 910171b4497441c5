use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::Context;
use chrono::{DateTime, Utc};
use eyeball_datasets::DatasetSeed;
use eyeball_engine::GameOverSummary;
use serde::Serialize;

use crate::util::Output;

/// A finished game as saved with `--save-result`.
#[derive(Debug, Serialize)]
pub struct GameRecord<'a> {
    pub recorded_at: DateTime<Utc>,
    pub seed: DatasetSeed,
    #[serde(flatten)]
    pub summary: &'a GameOverSummary,
}

impl<'a> GameRecord<'a> {
    pub fn new(seed: DatasetSeed, summary: &'a GameOverSummary) -> Self {
        Self {
            recorded_at: Utc::now(),
            seed,
            summary,
        }
    }

    /// Writes the record to `result_{timestamp}.json` in `dir` and returns
    /// the path.
    ///
    /// Existing results are never overwritten: a second save within the same
    /// second goes to `result_{timestamp}_1.json`, then `_2`, and so on.
    pub fn save(&self, dir: &Path) -> anyhow::Result<PathBuf> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
        let stamp = self.recorded_at.format("%Y%m%d_%H%M%S").to_string();
        let mut suffix = 0_u32;
        let (path, mut output) = loop {
            let filename = if suffix == 0 {
                format!("result_{stamp}.json")
            } else {
                format!("result_{stamp}_{suffix}.json")
            };
            let path = dir.join(filename);
            match Output::create_new(path.clone()) {
                Ok(output) => break (path, output),
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => suffix += 1,
                Err(e) => {
                    return Err(e).with_context(|| {
                        format!("Failed to create output file: {}", path.display())
                    });
                }
            }
        };
        output.write_json(self)?;
        log::info!("saved game result to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;
    use eyeball_engine::{SectionScore, StarRating};
    use tempfile::TempDir;

    use super::*;

    fn summary() -> GameOverSummary {
        GameOverSummary {
            final_score: 1640,
            max_score: 2000,
            stars: StarRating::Three,
            sections: vec![SectionScore {
                title: "Section 1: Mean vs Median",
                score: 1640,
            }],
        }
    }

    #[test]
    fn test_record_json_shape() {
        let summary = summary();
        let record = GameRecord {
            recorded_at: Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 5).unwrap(),
            seed: DatasetSeed::from(1),
            summary: &summary,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["seed"], "00000000000000000000000000000001");
        assert_eq!(json["final_score"], 1640);
        assert_eq!(json["stars"], "Three");
        assert_eq!(json["recorded_at"], "2026-03-01T12:30:05Z");
    }

    #[test]
    fn test_save_file_name() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("results");
        let summary = summary();
        let record = GameRecord {
            recorded_at: Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 5).unwrap(),
            seed: DatasetSeed::from(1),
            summary: &summary,
        };
        let path = record.save(&dir).unwrap();
        assert_eq!(path, dir.join("result_20260301_123005.json"));
        let saved: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved["max_score"], 2000);
    }

    #[test]
    fn test_save_in_same_second_keeps_both() {
        let temp = TempDir::new().unwrap();
        let summary = summary();
        let record = GameRecord {
            recorded_at: Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 5).unwrap(),
            seed: DatasetSeed::from(1),
            summary: &summary,
        };
        let first = record.save(temp.path()).unwrap();
        let second = record.save(temp.path()).unwrap();
        let third = record.save(temp.path()).unwrap();
        assert_eq!(first, temp.path().join("result_20260301_123005.json"));
        assert_eq!(second, temp.path().join("result_20260301_123005_1.json"));
        assert_eq!(third, temp.path().join("result_20260301_123005_2.json"));
        for path in [first, second, third] {
            let saved: serde_json::Value =
                serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
            assert_eq!(saved["final_score"], 1640);
        }
    }
}
