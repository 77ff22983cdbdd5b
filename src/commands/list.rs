use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};
use crate::render;

pub struct ListCommand;

impl ListCommand {
    /// Row limit from the argument, falling back to the configured default.
    fn limit(args: &str, default: usize) -> Result<usize, String> {
        if args.is_empty() {
            return Ok(default);
        }
        args.parse::<usize>()
            .map_err(|_| format!("invalid row count `{args}`"))
    }

    fn report(info: &SessionInfo<'_>, limit: usize) -> String {
        render::case_table(
            info.view.cases(info.dataset),
            limit,
            info.config.description_width,
        )
    }
}

#[async_trait]
impl Command for ListCommand {
    fn name(&self) -> &str {
        "/list"
    }

    fn aliases(&self) -> &[&str] {
        &["/ls"]
    }

    fn description(&self) -> &str {
        "print matching cases (optional row count)"
    }

    async fn execute(&self, args: &str, info: &SessionInfo<'_>) -> CommandResult {
        let limit = match Self::limit(args, info.config.list_limit) {
            Ok(n) => n,
            Err(e) => {
                eprintln!("  ✗ {e}");
                return CommandResult::Handled;
            }
        };
        print!("{}", Self::report(info, limit));
        CommandResult::Handled
    }
}
