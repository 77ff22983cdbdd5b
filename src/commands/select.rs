use async_trait::async_trait;
use log::warn;

use super::{Command, CommandResult, SessionInfo, StateChange};
use crate::engine::{Facets, FilterConfig, Selection};

/// A filterable field with a fixed set of choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    City,
    Industry,
    Round,
}

impl Dimension {
    pub fn label(self) -> &'static str {
        match self {
            Dimension::City => "city",
            Dimension::Industry => "industry",
            Dimension::Round => "round",
        }
    }

    fn current(self, filters: &FilterConfig) -> String {
        match self {
            Dimension::City => filters.city.to_string(),
            Dimension::Industry => filters.industry.to_string(),
            Dimension::Round => filters.round.to_string(),
        }
    }

    fn choices(self, facets: &Facets) -> Vec<String> {
        match self {
            Dimension::City => facets.cities.clone(),
            Dimension::Industry => facets.industries.clone(),
            Dimension::Round => facets.rounds.iter().map(u32::to_string).collect(),
        }
    }

    /// Apply `raw` to `filters`. Also reports whether the value is one of
    /// the dataset's facet values; unknown values are still applied.
    pub fn apply(
        self,
        raw: &str,
        filters: &FilterConfig,
        facets: &Facets,
    ) -> Result<(FilterConfig, bool), String> {
        let filters = filters.clone();
        Ok(match self {
            Dimension::City => {
                let sel: Selection<String> = raw.parse()?;
                let known = sel.value().is_none_or(|c| facets.has_city(c));
                (filters.with_city(sel), known)
            }
            Dimension::Industry => {
                let sel: Selection<String> = raw.parse()?;
                let known = sel.value().is_none_or(|i| facets.has_industry(i));
                (filters.with_industry(sel), known)
            }
            Dimension::Round => {
                let sel: Selection<u32> = raw.parse()?;
                let known = sel.value().is_none_or(|r| facets.has_round(*r));
                (filters.with_round(sel), known)
            }
        })
    }
}

/// `/city`, `/industry` and `/round`.
pub struct SelectCommand {
    dimension: Dimension,
    name: String,
    description: String,
}

impl SelectCommand {
    pub fn new(dimension: Dimension) -> Self {
        let label = dimension.label();
        Self {
            dimension,
            name: format!("/{label}"),
            description: format!("filter by {label} (`all` clears, no value lists choices)"),
        }
    }
}

#[async_trait]
impl Command for SelectCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    async fn execute(&self, args: &str, info: &SessionInfo<'_>) -> CommandResult {
        if args.is_empty() {
            println!(
                "  {}: {}",
                self.dimension.label(),
                self.dimension.current(info.filters)
            );
            println!(
                "  choices: all, {}",
                self.dimension.choices(info.facets).join(", ")
            );
            return CommandResult::Handled;
        }

        match self.dimension.apply(args, info.filters, info.facets) {
            Ok((filters, known)) => {
                if !known {
                    warn!("{} `{args}` does not occur in the dataset", self.dimension.label());
                    println!("  note: no case has {} `{args}`", self.dimension.label());
                }
                if &filters == info.filters {
                    return CommandResult::Handled;
                }
                CommandResult::StateChanged(StateChange::Filters(filters))
            }
            Err(e) => {
                eprintln!("  ✗ {e}");
                CommandResult::Handled
            }
        }
    }
}
