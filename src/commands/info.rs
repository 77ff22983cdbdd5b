use std::fmt::Write;

use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};
use crate::render;

pub struct InfoCommand;

impl InfoCommand {
    fn report(info: &SessionInfo<'_>) -> String {
        let ds = info.dataset;
        let mut out = String::new();
        let _ = writeln!(out, "  title     {}", ds.title);
        let _ = writeln!(out, "  source    {}", ds.source);
        let _ = writeln!(out, "  updated   {}", ds.last_updated);
        match ds.total_cases_mismatch() {
            None => {
                let _ = writeln!(out, "  cases     {}", ds.cases.len());
            }
            Some((declared, actual)) => {
                let _ = writeln!(out, "  cases     {actual} (dataset declares {declared})");
            }
        }
        let _ = writeln!(out, "  data      {}", info.config.data_label());
        let _ = writeln!(out, "  digest    {}", info.fingerprint.short());
        let _ = writeln!(out, "  filters   {}", render::filter_line(info.filters));
        let _ = writeln!(
            out,
            "  cache     {} views, {} hits, {} misses",
            info.cache.entries, info.cache.hits, info.cache.misses
        );
        out
    }
}

#[async_trait]
impl Command for InfoCommand {
    fn name(&self) -> &str {
        "/info"
    }

    fn description(&self) -> &str {
        "show dataset details, active filters and cache usage"
    }

    async fn execute(&self, _args: &str, info: &SessionInfo<'_>) -> CommandResult {
        print!("{}", Self::report(info));
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::Fixture;
    use crate::engine::FilterConfig;

    #[tokio::test]
    async fn returns_handled() {
        let fx = Fixture::new();
        assert_eq!(
            InfoCommand.execute("", &fx.info()).await,
            CommandResult::Handled
        );
    }

    #[test]
    fn shows_dataset_digest_and_filters() {
        let fx = Fixture::with_filters(FilterConfig::default().with_search("マリン"));
        let text = InfoCommand::report(&fx.info());
        assert!(text.contains("cases     2\n"));
        assert!(text.contains(fx.fingerprint.short()));
        assert!(text.contains("search \"マリン\""));
        assert!(text.contains("0 views, 0 hits, 0 misses"));
    }

    #[test]
    fn shows_declared_total_on_mismatch() {
        let mut fx = Fixture::new();
        fx.dataset.total_cases = 10;
        let text = InfoCommand::report(&fx.info());
        assert!(text.contains("cases     2 (dataset declares 10)"));
    }
}
