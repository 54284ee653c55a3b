//! Dataset loading with an mtime-keyed cache.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use polars::prelude::DataFrame;
use tracing::{debug, info};

use his_model::{DatasetSchema, Result};

use crate::csv_table::read_csv_table;
use crate::frame::{build_frame, derive_month_name};

/// A loaded dataset with its detected schema. The frame is treated as
/// read-only for the lifetime of a computation cycle.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub frame: DataFrame,
    pub schema: DatasetSchema,
}

/// Read, normalize and type a dataset from `path`.
///
/// Fails with `SourceNotFound` when the file is absent; the caller supplies
/// the fallback policy (typically [`crate::sample_frame`]).
pub fn load(path: &Path) -> Result<Dataset> {
    let table = read_csv_table(path)?;
    let mut frame = build_frame(&table)?;
    derive_month_name(&mut frame)?;
    Ok(dataset_from_frame(frame))
}

/// Wrap an already-built frame (demo data) with its detected schema.
pub fn dataset_from_frame(frame: DataFrame) -> Dataset {
    let names: Vec<String> = frame
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let schema = DatasetSchema::detect(&names);
    Dataset { frame, schema }
}

/// Cache of loaded datasets keyed by source identity and mtime.
///
/// A changed modification time invalidates the entry on the next load, so
/// refreshed exports are picked up without restarting. Aggregation itself is
/// recomputed per request; only the raw load step is cached.
#[derive(Debug, Default)]
pub struct LoadCache {
    entries: HashMap<PathBuf, (SystemTime, Dataset)>,
}

impl LoadCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load through the cache. Sources without a readable mtime bypass
    /// caching entirely.
    pub fn load(&mut self, path: &Path) -> Result<Dataset> {
        let Ok(modified) = std::fs::metadata(path).and_then(|meta| meta.modified()) else {
            return load(path);
        };
        if let Some((cached_mtime, dataset)) = self.entries.get(path) {
            if *cached_mtime == modified {
                debug!(path = %path.display(), "load cache hit");
                return Ok(dataset.clone());
            }
            info!(path = %path.display(), "source changed, reloading");
        }
        let dataset = load(path)?;
        self.entries
            .insert(path.to_path_buf(), (modified, dataset.clone()));
        Ok(dataset)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
