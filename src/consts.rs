//! Project-wide constants.

use std::path::PathBuf;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const REPO: &str = env!("CARGO_PKG_REPOSITORY");

/// Filter value meaning "no restriction on this dimension".
pub const ALL: &str = "all";

/// Data value for an application category the announcement did not state.
pub const UNKNOWN_CATEGORY: &str = "不明";

/// Environment variable overriding the dataset path.
pub const DATA_ENV_VAR: &str = "AWAJI_DATA";

/// File name of the dataset under the data directory.
pub const DATASET_FILE_NAME: &str = "awaji_subsidy_cases.json";

/// Entries shown per summary card.
pub const DEFAULT_TOP_N: usize = 3;

/// Rows printed by `/list` and `show` when no limit is given.
pub const DEFAULT_LIST_LIMIT: usize = 20;

/// Cached filter views kept before the oldest is evicted.
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Characters of a business description shown in the case table.
pub const DEFAULT_DESCRIPTION_WIDTH: usize = 60;

/// Default data directory: `~/.awaji`. `None` when there is no home directory.
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".awaji"))
}

/// Format a number with comma separators (e.g. 1,234,567).
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consts_are_non_empty() {
        assert!(!VERSION.is_empty());
        assert!(!REPO.is_empty());
        assert!(!DATASET_FILE_NAME.is_empty());
    }

    #[test]
    fn consts_from_cargo_toml() {
        assert!(REPO.contains("github.com/awaji-subsidy/awaji"));
    }

    #[test]
    fn sentinels_are_distinct() {
        assert_ne!(ALL, UNKNOWN_CATEGORY);
    }

    #[test]
    fn format_number_small() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(999), "999");
    }

    #[test]
    fn format_number_thousands() {
        assert_eq!(format_number(1_000), "1,000");
        assert_eq!(format_number(12_345), "12,345");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }
}
