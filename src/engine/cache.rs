use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use log::debug;

use super::{FilterConfig, View, compute_view};
use crate::model::{Fingerprint, SubsidyDataset};

type Key = (Fingerprint, FilterConfig);

/// Memoizes [`View`]s per (dataset, filters). Evicts oldest-inserted first.
///
/// A cached view is always equal to a fresh [`compute_view`].
pub struct ViewCache {
    capacity: usize,
    entries: HashMap<Key, Arc<View>>,
    order: VecDeque<Key>,
    hits: u64,
    misses: u64,
}

/// Cache counters for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

impl ViewCache {
    /// A capacity of zero disables caching.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::new(),
            order: VecDeque::new(),
            hits: 0,
            misses: 0,
        }
    }

    pub fn view(
        &mut self,
        fingerprint: &Fingerprint,
        dataset: &SubsidyDataset,
        filters: &FilterConfig,
    ) -> Arc<View> {
        let key = (fingerprint.clone(), filters.clone());
        if let Some(view) = self.entries.get(&key) {
            self.hits += 1;
            debug!("view cache hit ({} cases)", view.len());
            return Arc::clone(view);
        }

        self.misses += 1;
        let view = Arc::new(compute_view(dataset, filters));
        debug!("view cache miss ({} cases)", view.len());

        if self.capacity == 0 {
            return view;
        }
        while self.entries.len() >= self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
        }
        self.order.push_back(key.clone());
        self.entries.insert(key, Arc::clone(&view));
        view
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Selection;
    use crate::model::SubsidyCase;

    fn dataset() -> SubsidyDataset {
        let case = |round: u32, city: &str| SubsidyCase {
            round,
            announcement_date: "2022年1月".to_string(),
            company_name: format!("{city}商店"),
            city: city.to_string(),
            industry: "小売業".to_string(),
            business_description: "EC販売".to_string(),
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
            cases: vec![case(1, "洲本市"), case(2, "淡路市"), case(2, "洲本市")],
        }
    }

    #[test]
    fn second_lookup_hits() {
        let ds = dataset();
        let fp = ds.fingerprint().unwrap();
        let mut cache = ViewCache::new(4);
        let f = FilterConfig::default().with_round(Selection::Only(2));

        let first = cache.view(&fp, &ds, &f);
        let second = cache.view(&fp, &ds, &f);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(
            cache.stats(),
            CacheStats {
                entries: 1,
                hits: 1,
                misses: 1
            }
        );
    }

    #[test]
    fn cached_view_equals_fresh_view() {
        let ds = dataset();
        let fp = ds.fingerprint().unwrap();
        let mut cache = ViewCache::new(4);
        let f = FilterConfig::default().with_city(Selection::Only("洲本市".to_string()));

        cache.view(&fp, &ds, &f);
        let cached = cache.view(&fp, &ds, &f);
        assert_eq!(*cached, compute_view(&ds, &f));
    }

    #[test]
    fn evicts_oldest_beyond_capacity() {
        let ds = dataset();
        let fp = ds.fingerprint().unwrap();
        let mut cache = ViewCache::new(2);

        for round in 1..=3 {
            cache.view(&fp, &ds, &FilterConfig::default().with_round(Selection::Only(round)));
        }
        assert_eq!(cache.stats().entries, 2);

        // round 1 was evicted, so this is a miss
        cache.view(&fp, &ds, &FilterConfig::default().with_round(Selection::Only(1)));
        assert_eq!(cache.stats().misses, 4);
        assert_eq!(cache.stats().hits, 0);
    }

    #[test]
    fn zero_capacity_never_stores() {
        let ds = dataset();
        let fp = ds.fingerprint().unwrap();
        let mut cache = ViewCache::new(0);
        cache.view(&fp, &ds, &FilterConfig::default());
        cache.view(&fp, &ds, &FilterConfig::default());
        assert_eq!(cache.stats().entries, 0);
        assert_eq!(cache.stats().misses, 2);
    }

    #[test]
    fn different_datasets_do_not_share_entries() {
        let ds = dataset();
        let mut other = dataset();
        other.cases.truncate(1);
        other.total_cases = 1;
        let mut cache = ViewCache::new(4);
        let f = FilterConfig::default();

        let a = cache.view(&ds.fingerprint().unwrap(), &ds, &f);
        let b = cache.view(&other.fingerprint().unwrap(), &other, &f);
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 1);
    }
}
