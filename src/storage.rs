use std::fs;
use std::io;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Storage key for the last submitted tracker input. Versioned so a
/// future schema change can migrate without clobbering old saves.
pub const TRACKER_KEY: &str = "tracker_data_v2";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("data directory not found")]
    NoDataDir,
}

/// Whole-value key-value persistence. Each save overwrites the slot;
/// there are no partial updates.
pub trait KeyValueStore {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError>;
    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// JSON-file store: one `<key>.json` document per key under a single
/// directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open the store in the platform-local data directory.
    pub fn open_default() -> Result<Self, StorageError> {
        let dir = dirs::data_local_dir()
            .ok_or(StorageError::NoDataDir)?
            .join("pookie");
        Self::open(dir)
    }

    /// Open the store in an explicit directory, creating it if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let path = self.key_path(key);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_vec(value)?;
        fs::write(self.key_path(key), json)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use temp_dir::TempDir;

    use super::*;
    use crate::models::CycleInput;

    #[test]
    fn missing_key_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        let loaded: Option<CycleInput> = store.load(TRACKER_KEY).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        let input = CycleInput {
            start_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            cycle_length: 30,
            period_length: 4,
            notes: "mild cramps".to_string(),
        };
        store.save(TRACKER_KEY, &input).unwrap();

        let loaded: CycleInput = store.load(TRACKER_KEY).unwrap().unwrap();
        assert_eq!(loaded, input);
    }

    #[test]
    fn remove_clears_the_slot() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        store.save(TRACKER_KEY, &"anything").unwrap();
        store.remove(TRACKER_KEY).unwrap();
        let loaded: Option<String> = store.load(TRACKER_KEY).unwrap();
        assert!(loaded.is_none());

        // Removing an already-absent key is fine.
        store.remove(TRACKER_KEY).unwrap();
    }

    #[test]
    fn older_records_load_with_defaults() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        let path = dir.path().join(format!("{TRACKER_KEY}.json"));
        std::fs::write(&path, br#"{"start_date":"2024-01-01"}"#).unwrap();

        let loaded: CycleInput = store.load(TRACKER_KEY).unwrap().unwrap();
        assert_eq!(loaded.cycle_length, 28);
        assert_eq!(loaded.period_length, 5);
        assert_eq!(loaded.notes, "");
    }

    #[test]
    fn corrupt_record_is_an_error_not_a_panic() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        let path = dir.path().join(format!("{TRACKER_KEY}.json"));
        std::fs::write(&path, b"{not json").unwrap();

        let loaded: Result<Option<CycleInput>, _> = store.load(TRACKER_KEY);
        assert!(loaded.is_err());
    }
}
