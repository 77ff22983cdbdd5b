use std::fmt;
use std::str::FromStr;

use crate::consts::ALL;
use crate::model::{SubsidyCase, SubsidyDataset};

/// A filter choice on one dimension: no restriction, or one exact value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }
}

impl<T> Selection<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Selection::All => None,
            Selection::Only(v) => Some(v),
        }
    }
}

/// `"all"` parses to [`Selection::All`]; anything else must parse as `T`.
impl<T> FromStr for Selection<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == ALL {
            return Ok(Selection::All);
        }
        s.parse::<T>()
            .map(Selection::Only)
            .map_err(|e| format!("invalid selection `{s}`: {e}"))
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str(ALL),
            Selection::Only(v) => v.fmt(f),
        }
    }
}

/// The four filter inputs, as one immutable value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterConfig {
    /// Free-text query; empty matches everything.
    pub search: String,
    pub city: Selection<String>,
    pub industry: Selection<String>,
    pub round: Selection<u32>,
}

impl FilterConfig {
    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self
        }
    }

    pub fn with_city(self, city: Selection<String>) -> Self {
        Self { city, ..self }
    }

    pub fn with_industry(self, industry: Selection<String>) -> Self {
        Self { industry, ..self }
    }

    pub fn with_round(self, round: Selection<u32>) -> Self {
        Self { round, ..self }
    }

    /// True when no dimension restricts anything.
    pub fn is_unrestricted(&self) -> bool {
        self.search.is_empty()
            && self.city.is_all()
            && self.industry.is_all()
            && self.round.is_all()
    }
}

/// Prepared form of a [`FilterConfig`] with the search term folded once.
struct Matcher<'f> {
    needle: Option<String>,
    filters: &'f FilterConfig,
}

impl<'f> Matcher<'f> {
    fn new(filters: &'f FilterConfig) -> Self {
        let needle = (!filters.search.is_empty()).then(|| filters.search.to_lowercase());
        Self { needle, filters }
    }

    fn matches(&self, case: &SubsidyCase) -> bool {
        let search_ok = match &self.needle {
            None => true,
            Some(needle) => {
                case.company_name.to_lowercase().contains(needle.as_str())
                    || case
                        .business_description
                        .to_lowercase()
                        .contains(needle.as_str())
            }
        };

        search_ok
            && self.filters.city.admits(&case.city)
            && self.filters.industry.admits(&case.industry)
            && self.filters.round.admits(&case.round)
    }
}

/// Does `case` pass every dimension of `filters`?
pub fn matches(case: &SubsidyCase, filters: &FilterConfig) -> bool {
    Matcher::new(filters).matches(case)
}

/// Cases passing `filters`, in dataset order.
pub fn filter_cases<'a>(
    dataset: &'a SubsidyDataset,
    filters: &FilterConfig,
) -> Vec<&'a SubsidyCase> {
    let matcher = Matcher::new(filters);
    dataset
        .cases
        .iter()
        .filter(|case| matcher.matches(case))
        .collect()
}

/// Positions in `dataset.cases` of the cases passing `filters`, ascending.
pub fn filter_positions(dataset: &SubsidyDataset, filters: &FilterConfig) -> Vec<usize> {
    let matcher = Matcher::new(filters);
    dataset
        .cases
        .iter()
        .enumerate()
        .filter(|(_, case)| matcher.matches(case))
        .map(|(i, _)| i)
        .collect()
}
