//! The filter-and-aggregate engine.
//!
//! Everything here is a pure function of an immutable dataset and an
//! explicit [`FilterConfig`]. The caller owns the current configuration
//! and re-invokes the engine whenever it changes; the engine keeps no state.
//! [`ViewCache`] is an optional memo on top and never changes results.

pub mod aggregate;
pub mod cache;
pub mod facets;
pub mod filter;

use serde::Serialize;

use crate::model::{SubsidyCase, SubsidyDataset};

pub use aggregate::{Aggregates, aggregate, rank};
pub use cache::{CacheStats, ViewCache};
pub use facets::{Facets, derive_facets};
pub use filter::{FilterConfig, Selection, filter_cases, filter_positions, matches};

/// Filter result plus its aggregates, addressed by dataset position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct View {
    /// Ascending positions into `dataset.cases`.
    pub positions: Vec<usize>,
    pub aggregates: Aggregates,
}

impl View {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The matching cases of `dataset`, in dataset order.
    ///
    /// `dataset` must be the one this view was computed from.
    pub fn cases<'a>(
        &'a self,
        dataset: &'a SubsidyDataset,
    ) -> impl Iterator<Item = &'a SubsidyCase> + 'a {
        self.positions.iter().map(move |&i| &dataset.cases[i])
    }
}

/// Filter then aggregate in one go.
pub fn compute_view(dataset: &SubsidyDataset, filters: &FilterConfig) -> View {
    let positions = filter_positions(dataset, filters);
    let aggregates = aggregate(positions.iter().map(|&i| &dataset.cases[i]));
    View {
        positions,
        aggregates,
    }
}
