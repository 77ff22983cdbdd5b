use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};

pub struct QuitCommand;

#[async_trait]
impl Command for QuitCommand {
    fn name(&self) -> &str {
        "/quit"
    }

    fn aliases(&self) -> &[&str] {
        &["/q", "/exit"]
    }

    fn description(&self) -> &str {
        "exit the REPL"
    }

    async fn execute(&self, _args: &str, _info: &SessionInfo<'_>) -> CommandResult {
        CommandResult::Quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::Fixture;

    #[tokio::test]
    async fn returns_quit() {
        let fx = Fixture::new();
        assert_eq!(
            QuitCommand.execute("", &fx.info()).await,
            CommandResult::Quit
        );
    }

    #[test]
    fn every_trigger_is_a_slash_command() {
        assert!(QuitCommand.aliases().contains(&"/exit"));
        assert!(QuitCommand.aliases().iter().all(|a| a.starts_with('/')));
    }
}
