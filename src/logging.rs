//! Logger bootstrap. Logs go to stderr so they never mix with report output.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Level for a `-v` count: 0 → warn, 1 → info, 2+ → debug.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Install the global logger. `RUST_LOG`, when set, overrides `verbosity`.
/// Calling it twice is harmless.
pub fn init_logging(verbosity: u8) {
    let default = level_for(verbosity).as_str().to_ascii_lowercase();
    let _ = Builder::from_env(Env::default().default_filter_or(default))
        .format_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(9), LevelFilter::Debug);
    }

    #[test]
    fn init_twice_does_not_panic() {
        init_logging(0);
        init_logging(2);
    }
}
