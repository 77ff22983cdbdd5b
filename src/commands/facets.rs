use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};
use crate::render;

pub struct FacetsCommand;

impl FacetsCommand {
    fn report(info: &SessionInfo<'_>) -> String {
        render::facets(info.facets)
    }
}

#[async_trait]
impl Command for FacetsCommand {
    fn name(&self) -> &str {
        "/facets"
    }

    fn description(&self) -> &str {
        "list every city, industry and round in the dataset"
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
    use crate::engine::{FilterConfig, Selection};

    #[tokio::test]
    async fn returns_handled() {
        let fx = Fixture::new();
        assert_eq!(
            FacetsCommand.execute("", &fx.info()).await,
            CommandResult::Handled
        );
    }

    #[test]
    fn lists_whole_dataset_regardless_of_filters() {
        let fx = Fixture::with_filters(
            FilterConfig::default().with_city(Selection::Only("洲本市".to_string())),
        );
        let text = FacetsCommand::report(&fx.info());
        assert!(text.contains("南あわじ市, 洲本市"));
        assert!(text.contains("第1回, 第2回"));
    }
}
