use std::collections::BTreeSet;

use serde::Serialize;

use crate::model::SubsidyDataset;

/// Distinct values per filterable field, used to offer filter choices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    /// Ascending by code point.
    pub cities: Vec<String>,
    /// Ascending by code point.
    pub industries: Vec<String>,
    /// Ascending numerically.
    pub rounds: Vec<u32>,
}

impl Facets {
    pub fn has_city(&self, city: &str) -> bool {
        self.cities.binary_search_by(|c| c.as_str().cmp(city)).is_ok()
    }

    pub fn has_industry(&self, industry: &str) -> bool {
        self.industries
            .binary_search_by(|i| i.as_str().cmp(industry))
            .is_ok()
    }

    pub fn has_round(&self, round: u32) -> bool {
        self.rounds.binary_search(&round).is_ok()
    }
}

pub fn derive_facets(dataset: &SubsidyDataset) -> Facets {
    let mut cities = BTreeSet::new();
    let mut industries = BTreeSet::new();
    let mut rounds = BTreeSet::new();

    for case in &dataset.cases {
        cities.insert(case.city.as_str());
        industries.insert(case.industry.as_str());
        rounds.insert(case.round);
    }

    Facets {
        cities: cities.into_iter().map(str::to_string).collect(),
        industries: industries.into_iter().map(str::to_string).collect(),
        rounds: rounds.into_iter().collect(),
    }
}
