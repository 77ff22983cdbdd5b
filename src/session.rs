//! Browsing session: the one place filter state lives.
//!
//! The session owns the loaded dataset and the current [`FilterConfig`],
//! and re-runs the engine (through the view cache) whenever the
//! configuration changes.

use std::sync::Arc;

use anyhow::Result;
use log::info;

use crate::commands::{SessionInfo, StateChange};
use crate::config::Config;
use crate::engine::{Facets, FilterConfig, View, ViewCache, derive_facets};
use crate::model::{Fingerprint, SubsidyDataset, io};
use crate::render;

pub struct Session {
    dataset: SubsidyDataset,
    fingerprint: Fingerprint,
    facets: Facets,
    config: Config,
    filters: FilterConfig,
    cache: ViewCache,
    view: Arc<View>,
}

impl Session {
    /// Load the dataset at `config.data_path` and start unfiltered.
    pub fn open(config: Config) -> Result<Self> {
        let dataset = io::load(&config.data_path)?;
        Self::new(dataset, config)
    }

    pub fn new(dataset: SubsidyDataset, config: Config) -> Result<Self> {
        let fingerprint = dataset.fingerprint()?;
        let facets = derive_facets(&dataset);
        let mut cache = ViewCache::new(config.cache_capacity);
        let filters = FilterConfig::default();
        let view = cache.view(&fingerprint, &dataset, &filters);
        info!(
            "session ready: {} cases, digest {}",
            dataset.cases.len(),
            fingerprint.short()
        );
        Ok(Self {
            dataset,
            fingerprint,
            facets,
            config,
            filters,
            cache,
            view,
        })
    }

    pub fn dataset(&self) -> &SubsidyDataset {
        &self.dataset
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn filters(&self) -> &FilterConfig {
        &self.filters
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn set_filters(&mut self, filters: FilterConfig) {
        self.view = self.cache.view(&self.fingerprint, &self.dataset, &filters);
        self.filters = filters;
    }

    /// Use `term` verbatim as the search text, keeping the other filters.
    pub fn search(&mut self, term: &str) {
        let filters = self.filters.clone().with_search(term);
        self.set_filters(filters);
    }

    pub fn apply(&mut self, change: StateChange) {
        match change {
            StateChange::Filters(filters) => self.set_filters(filters),
        }
    }

    /// Borrowed state handed to REPL commands.
    pub fn info(&self) -> SessionInfo<'_> {
        SessionInfo {
            dataset: &self.dataset,
            fingerprint: &self.fingerprint,
            facets: &self.facets,
            filters: &self.filters,
            view: &self.view,
            config: &self.config,
            cache: self.cache.stats(),
        }
    }

    /// Active filters followed by the summary cards.
    pub fn summary(&self) -> String {
        format!(
            "  {}\n{}",
            render::filter_line(&self.filters),
            render::summary_cards(&self.view, self.dataset.total_cases, self.config.top_n)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Selection, compute_view};
    use crate::model::SubsidyCase;
    use std::path::PathBuf;

    fn dataset() -> SubsidyDataset {
        let case = |round: u32, name: &str, city: &str| SubsidyCase {
            round,
            announcement_date: "2022年3月".to_string(),
            company_name: name.to_string(),
            city: city.to_string(),
            industry: "宿泊業".to_string(),
            business_description: "グランピング施設の新設".to_string(),
            application_category: "通常枠".to_string(),
            notes: vec![],
            address: None,
        };
        SubsidyDataset {
            title: "t".to_string(),
            description: "d".to_string(),
            source: "s".to_string(),
            last_updated: "u".to_string(),
            total_cases: 3,
            cases: vec![
                case(1, "A荘", "洲本市"),
                case(2, "B館", "淡路市"),
                case(2, "Cホテル", "洲本市"),
            ],
        }
    }

    fn session() -> Session {
        Session::new(dataset(), Config::new(PathBuf::from("mem.json"))).unwrap()
    }

    #[test]
    fn starts_unfiltered() {
        let s = session();
        assert!(s.filters().is_unrestricted());
        assert_eq!(s.view().len(), 3);
        assert_eq!(s.facets().rounds, vec![1, 2]);
    }

    #[test]
    fn apply_recomputes_view() {
        let mut s = session();
        let filters = FilterConfig::default().with_city(Selection::Only("洲本市".to_string()));
        s.apply(StateChange::Filters(filters.clone()));
        assert_eq!(s.filters(), &filters);
        assert_eq!(s.view(), &compute_view(s.dataset(), &filters));
        assert_eq!(s.view().positions, vec![0, 2]);
    }

    #[test]
    fn search_keeps_surrounding_spaces() {
        let mut s = session();
        s.set_filters(FilterConfig::default().with_round(Selection::Only(2)));
        s.search("ホテル");
        assert_eq!(s.view().positions, vec![2]);

        s.search("ホテル ");
        assert_eq!(s.filters().search, "ホテル ");
        assert_eq!(s.filters().round, Selection::Only(2));
        assert!(s.view().is_empty());
    }

    #[test]
    fn returning_to_previous_filters_hits_cache() {
        let mut s = session();
        s.set_filters(FilterConfig::default().with_round(Selection::Only(2)));
        s.set_filters(FilterConfig::default());
        let stats = s.info().cache;
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 2);
    }

    #[test]
    fn summary_mentions_filters_and_total() {
        let mut s = session();
        s.set_filters(FilterConfig::default().with_search("ホテル"));
        let text = s.summary();
        assert!(text.contains("search \"ホテル\""));
        assert!(text.contains("1件 （全3件中）"));
    }

    #[test]
    fn open_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cases.json");
        io::save(&dataset(), &path).unwrap();
        let s = Session::open(Config::new(path)).unwrap();
        assert_eq!(s.dataset(), &dataset());
    }

    #[test]
    fn open_missing_file_fails_with_path() {
        let err = Session::open(Config::new(PathBuf::from("/nonexistent/awaji.json")))
            .err()
            .unwrap();
        assert!(format!("{err:#}").contains("/nonexistent/awaji.json"));
    }
}
