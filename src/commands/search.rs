use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo, StateChange};

pub struct SearchCommand;

#[async_trait]
impl Command for SearchCommand {
    fn name(&self) -> &str {
        "/search"
    }

    fn aliases(&self) -> &[&str] {
        &["/s"]
    }

    fn description(&self) -> &str {
        "search company names and descriptions (no text clears)"
    }

    async fn execute(&self, args: &str, info: &SessionInfo<'_>) -> CommandResult {
        if args == info.filters.search {
            return CommandResult::Handled;
        }
        CommandResult::StateChanged(StateChange::Filters(
            info.filters.clone().with_search(args),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::Fixture;
    use crate::engine::FilterConfig;

    #[tokio::test]
    async fn sets_search_term() {
        let fx = Fixture::new();
        assert_eq!(
            SearchCommand.execute("マリン", &fx.info()).await,
            CommandResult::StateChanged(StateChange::Filters(
                FilterConfig::default().with_search("マリン")
            ))
        );
    }

    #[tokio::test]
    async fn empty_args_clear_search() {
        let fx = Fixture::with_filters(FilterConfig::default().with_search("工房"));
        assert_eq!(
            SearchCommand.execute("", &fx.info()).await,
            CommandResult::StateChanged(StateChange::Filters(FilterConfig::default()))
        );
    }

    #[tokio::test]
    async fn same_term_is_a_no_op() {
        let fx = Fixture::with_filters(FilterConfig::default().with_search("工房"));
        assert_eq!(
            SearchCommand.execute("工房", &fx.info()).await,
            CommandResult::Handled
        );
    }
}
