use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};
use crate::render;

pub struct StatsCommand;

impl StatsCommand {
    fn report(info: &SessionInfo<'_>) -> String {
        render::breakdown(&info.view.aggregates, info.view.len())
    }
}

#[async_trait]
impl Command for StatsCommand {
    fn name(&self) -> &str {
        "/stats"
    }

    fn description(&self) -> &str {
        "show full counts per city, industry and round for the current filters"
    }

    async fn execute(&self, _args: &str, info: &SessionInfo<'_>) -> CommandResult {
        print!("{}", Self::report(info));
        CommandResult::Handled
    }
}
