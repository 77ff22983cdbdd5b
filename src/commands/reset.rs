use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo, StateChange};
use crate::engine::FilterConfig;

pub struct ResetCommand;

#[async_trait]
impl Command for ResetCommand {
    fn name(&self) -> &str {
        "/reset"
    }

    fn aliases(&self) -> &[&str] {
        &["/clear"]
    }

    fn description(&self) -> &str {
        "clear the search term and every filter"
    }

    async fn execute(&self, _args: &str, info: &SessionInfo<'_>) -> CommandResult {
        if info.filters.is_unrestricted() {
            println!("  no filters active");
            return CommandResult::Handled;
        }
        CommandResult::StateChanged(StateChange::Filters(FilterConfig::default()))
    }
}
