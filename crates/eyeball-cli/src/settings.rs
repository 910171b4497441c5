use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::{self, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use eyeball_engine::{KeyValueStore, StoreError};

use crate::util;

const FILE_NAME: &str = "settings.json";

/// Persisted player settings: a flat JSON object of strings.
///
/// Every change rewrites the whole file through a temporary file and a
/// rename, so a crash never leaves a half-written settings file behind.
#[derive(Debug)]
pub struct SettingsFile {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl SettingsFile {
    /// Loads `settings.json` from `data_dir`, or starts empty if there is none.
    pub fn open(data_dir: &Path) -> anyhow::Result<Self> {
        let path = data_dir.join(FILE_NAME);
        let entries = if path.exists() {
            util::read_json_file("settings", &path)?
        } else {
            BTreeMap::new()
        };
        log::debug!("loaded {} settings from {}", entries.len(), path.display());
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let temp_path = self.path.with_extension("json.tmp");
        {
            let mut writer = BufWriter::new(File::create(&temp_path)?);
            serde_json::to_writer_pretty(&mut writer, &self.entries).map_err(io::Error::other)?;
            writer.flush()?;
        }
        fs::rename(&temp_path, &self.path)
    }
}

impl KeyValueStore for SettingsFile {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.save().map_err(|e| StoreError::new(key, e))?;
        log::info!("saved setting {key:?} to {}", self.path.display());
        Ok(())
    }
}
