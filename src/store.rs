//! Narrow persistent-store interface.
//!
//! Series and periodograms are keyed by a two-level `target/dataset` path;
//! the storage medium's layout, compression, and integrity checks are the
//! implementation's business, never the core's. A missing series reads back
//! as `Ok(None)` and callers must treat it as a fatal precondition failure
//! rather than process further.

use crate::error::DataError;
use crate::series::SampleSeries;
use crate::types::Periodogram;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Failures surfaced by a store implementation. Reported upward; in-memory
/// series and search state are never corrupted by one.
#[derive(Debug)]
pub enum StoreError {
    /// Underlying medium failed (filesystem, network, ...).
    Io { path: String, message: String },
    /// Stored bytes did not decode.
    Format { path: String, message: String },
    /// Decoded series failed the structural invariants.
    Data(DataError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io { path, message } => write!(f, "store I/O failed at {path}: {message}"),
            StoreError::Format { path, message } => {
                write!(f, "store format error at {path}: {message}")
            }
            StoreError::Data(e) => write!(f, "stored series invalid: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<DataError> for StoreError {
    fn from(e: DataError) -> Self {
        StoreError::Data(e)
    }
}

/// Key-value persistence for light curves and periodograms.
pub trait LightCurveStore {
    /// Fetch a series, `Ok(None)` when the key is absent.
    fn get_series(&self, target: &str, dataset: &str)
        -> Result<Option<SampleSeries>, StoreError>;

    /// Persist a series under the key, replacing any previous value.
    fn put_series(
        &mut self,
        target: &str,
        dataset: &str,
        series: &SampleSeries,
    ) -> Result<(), StoreError>;

    /// Persist a search result under the key, replacing any previous value.
    fn put_periodogram(
        &mut self,
        target: &str,
        dataset: &str,
        periodogram: &Periodogram,
    ) -> Result<(), StoreError>;
}

/// In-memory store for tests and demos.
#[derive(Default)]
pub struct MemoryStore {
    series: HashMap<(String, String), SampleSeries>,
    periodograms: HashMap<(String, String), Periodogram>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read back a stored periodogram (not part of the core contract, handy
    /// in tests).
    pub fn periodogram(&self, target: &str, dataset: &str) -> Option<&Periodogram> {
        self.periodograms
            .get(&(target.to_string(), dataset.to_string()))
    }
}

impl LightCurveStore for MemoryStore {
    fn get_series(
        &self,
        target: &str,
        dataset: &str,
    ) -> Result<Option<SampleSeries>, StoreError> {
        Ok(self
            .series
            .get(&(target.to_string(), dataset.to_string()))
            .cloned())
    }

    fn put_series(
        &mut self,
        target: &str,
        dataset: &str,
        series: &SampleSeries,
    ) -> Result<(), StoreError> {
        self.series
            .insert((target.to_string(), dataset.to_string()), series.clone());
        Ok(())
    }

    fn put_periodogram(
        &mut self,
        target: &str,
        dataset: &str,
        periodogram: &Periodogram,
    ) -> Result<(), StoreError> {
        self.periodograms.insert(
            (target.to_string(), dataset.to_string()),
            periodogram.clone(),
        );
        Ok(())
    }
}

/// Raw columns as persisted; validated into a [`SampleSeries`] on read.
#[derive(Serialize, Deserialize)]
struct SeriesRecord {
    time: Vec<f64>,
    flux: Vec<f64>,
}

/// One JSON document per `target/dataset` key under a root directory.
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn series_path(&self, target: &str, dataset: &str) -> PathBuf {
        self.root.join(target).join(format!("{dataset}.series.json"))
    }

    fn periodogram_path(&self, target: &str, dataset: &str) -> PathBuf {
        self.root
            .join(target)
            .join(format!("{dataset}.periodogram.json"))
    }

    fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                path: parent.display().to_string(),
                message: e.to_string(),
            })?;
        }
        let json = serde_json::to_string_pretty(value).map_err(|e| StoreError::Format {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        fs::write(path, json).map_err(|e| StoreError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

impl LightCurveStore for JsonFileStore {
    fn get_series(
        &self,
        target: &str,
        dataset: &str,
    ) -> Result<Option<SampleSeries>, StoreError> {
        let path = self.series_path(target, dataset);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StoreError::Io {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })
            }
        };
        let record: SeriesRecord =
            serde_json::from_str(&contents).map_err(|e| StoreError::Format {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        let series = SampleSeries::new(record.time, record.flux)?;
        Ok(Some(series))
    }

    fn put_series(
        &mut self,
        target: &str,
        dataset: &str,
        series: &SampleSeries,
    ) -> Result<(), StoreError> {
        let record = SeriesRecord {
            time: series.time().to_vec(),
            flux: series.flux().to_vec(),
        };
        self.write_json(&self.series_path(target, dataset), &record)
    }

    fn put_periodogram(
        &mut self,
        target: &str,
        dataset: &str,
        periodogram: &Periodogram,
    ) -> Result<(), StoreError> {
        self.write_json(&self.periodogram_path(target, dataset), periodogram)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SampleSeries {
        SampleSeries::new(vec![0.0, 1.0, 2.0], vec![1.0, 0.98, 1.0]).unwrap()
    }

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStore::new();
        assert!(store.get_series("a", "b").unwrap().is_none());

        store.put_series("a", "b", &sample()).unwrap();
        let loaded = store.get_series("a", "b").unwrap().unwrap();
        assert_eq!(loaded.time(), sample().time());
        assert_eq!(loaded.flux(), sample().flux());

        let pg = Periodogram {
            periods: vec![2.0, 2.1],
            scores: vec![0.5, 0.1],
            best_period: 2.1,
        };
        store.put_periodogram("a", "b", &pg).unwrap();
        assert_eq!(store.periodogram("a", "b").unwrap().best_period, 2.1);
    }

    #[test]
    fn json_store_round_trips() {
        let root = std::env::temp_dir().join("period_detector_store_test");
        let _ = fs::remove_dir_all(&root);
        let mut store = JsonFileStore::new(&root);

        assert!(store.get_series("HATP7b", "s1").unwrap().is_none());
        store.put_series("HATP7b", "s1", &sample()).unwrap();
        let loaded = store.get_series("HATP7b", "s1").unwrap().unwrap();
        assert_eq!(loaded.time(), sample().time());

        let pg = Periodogram {
            periods: vec![3.0],
            scores: vec![0.2],
            best_period: 3.0,
        };
        store.put_periodogram("HATP7b", "s1", &pg).unwrap();

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn corrupt_document_is_a_format_error() {
        let root = std::env::temp_dir().join("period_detector_store_corrupt");
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(root.join("t")).unwrap();
        fs::write(root.join("t").join("d.series.json"), "not json").unwrap();

        let store = JsonFileStore::new(&root);
        assert!(matches!(
            store.get_series("t", "d"),
            Err(StoreError::Format { .. })
        ));
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn invalid_stored_series_is_a_data_error() {
        let root = std::env::temp_dir().join("period_detector_store_invalid");
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(root.join("t")).unwrap();
        fs::write(
            root.join("t").join("d.series.json"),
            r#"{"time": [0.0, 1.0], "flux": [1.0]}"#,
        )
        .unwrap();

        let store = JsonFileStore::new(&root);
        assert!(matches!(
            store.get_series("t", "d"),
            Err(StoreError::Data(DataError::LengthMismatch { .. }))
        ));
        let _ = fs::remove_dir_all(&root);
    }
}
