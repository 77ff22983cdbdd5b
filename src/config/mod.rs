//! Runtime configuration.
//!
//! The dataset path is resolved from, in order: an explicit path (the
//! `--data` flag), the [`DATA_ENV_VAR`] environment variable, and
//! `~/.awaji/awaji_subsidy_cases.json`.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::consts::{
    DATA_ENV_VAR, DATASET_FILE_NAME, DEFAULT_CACHE_CAPACITY, DEFAULT_DESCRIPTION_WIDTH,
    DEFAULT_LIST_LIMIT, DEFAULT_TOP_N, default_data_dir,
};

/// Everything the presentation layer needs besides the dataset itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_path: PathBuf,
    /// Rows printed by `/list` and `show` when no limit is given.
    pub list_limit: usize,
    /// Entries per summary card.
    pub top_n: usize,
    pub cache_capacity: usize,
    pub description_width: usize,
}

impl Config {
    pub fn new(data_path: PathBuf) -> Self {
        Self {
            data_path,
            list_limit: DEFAULT_LIST_LIMIT,
            top_n: DEFAULT_TOP_N,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            description_width: DEFAULT_DESCRIPTION_WIDTH,
        }
    }

    /// Resolve the dataset path from the flag, the process environment and
    /// the home directory.
    pub fn from_env(flag: Option<PathBuf>) -> Result<Self> {
        let env = std::env::var(DATA_ENV_VAR).ok();
        let path = resolve_data_path(flag, env, default_data_dir().as_deref())?;
        Ok(Self::new(path))
    }

    pub fn data_label(&self) -> String {
        self.data_path.display().to_string()
    }
}

/// Pick the dataset path. Empty values count as unset.
pub fn resolve_data_path(
    flag: Option<PathBuf>,
    env: Option<String>,
    data_dir: Option<&Path>,
) -> Result<PathBuf> {
    if let Some(path) = flag.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(path);
    }
    if let Some(path) = env.filter(|v| !v.trim().is_empty()) {
        return Ok(PathBuf::from(path.trim()));
    }
    match data_dir {
        Some(dir) => Ok(dir.join(DATASET_FILE_NAME)),
        None => bail!("cannot determine home directory; pass --data or set {DATA_ENV_VAR}"),
    }
}
