//! Reading and writing dataset documents.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};

use super::SubsidyDataset;

/// Load a dataset document from disk.
///
/// Only serde typing is checked. A `total_cases` that disagrees with the
/// number of records is logged and left as-is.
pub fn load(path: &Path) -> Result<SubsidyDataset> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset {}", path.display()))?;
    let dataset = from_json(&text)
        .with_context(|| format!("failed to decode dataset {}", path.display()))?;

    info!(
        "loaded {} cases from {}",
        dataset.cases.len(),
        path.display()
    );
    Ok(dataset)
}

/// Decode a dataset from JSON text.
pub fn from_json(text: &str) -> Result<SubsidyDataset> {
    let dataset: SubsidyDataset = serde_json::from_str(text)?;
    if let Some((declared, actual)) = dataset.total_cases_mismatch() {
        warn!("dataset declares {declared} total cases but contains {actual}");
    }
    Ok(dataset)
}

/// Write a dataset as pretty-printed JSON, keeping non-ASCII text as-is.
pub fn save(dataset: &SubsidyDataset, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(dataset)?;
    fs::write(path, json + "\n")
        .with_context(|| format!("failed to write dataset {}", path.display()))?;
    info!("wrote {} cases to {}", dataset.cases.len(), path.display());
    Ok(())
}
