use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::SubsidyCase;

/// Occurrence counts per dimension over a set of cases.
///
/// Every map sums to the number of cases aggregated, and holds no zero
/// entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Aggregates {
    pub by_city: BTreeMap<String, usize>,
    pub by_industry: BTreeMap<String, usize>,
    pub by_round: BTreeMap<u32, usize>,
}

pub fn aggregate<'a, I>(cases: I) -> Aggregates
where
    I: IntoIterator<Item = &'a SubsidyCase>,
{
    let mut stats = Aggregates::default();
    for case in cases {
        *stats.by_city.entry(case.city.clone()).or_insert(0) += 1;
        *stats.by_industry.entry(case.industry.clone()).or_insert(0) += 1;
        *stats.by_round.entry(case.round).or_insert(0) += 1;
    }
    stats
}

/// Entries by descending count, ties by ascending key, at most `limit`.
///
/// Equal counts come out in key order, not in the order the keys were
/// first seen.
pub fn rank<K: Clone + Ord>(counts: &BTreeMap<K, usize>, limit: usize) -> Vec<(K, usize)> {
    let mut entries: Vec<(K, usize)> = counts.iter().map(|(k, n)| (k.clone(), *n)).collect();
    // stable: BTreeMap order already breaks ties by key
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(limit);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_orders_by_count_then_key() {
        let counts = BTreeMap::from([
            ("c".to_string(), 2),
            ("a".to_string(), 2),
            ("b".to_string(), 5),
            ("d".to_string(), 1),
        ]);
        assert_eq!(
            rank(&counts, 3),
            vec![
                ("b".to_string(), 5),
                ("a".to_string(), 2),
                ("c".to_string(), 2)
            ]
        );
    }

    #[test]
    fn rank_limit_larger_than_map() {
        let counts = BTreeMap::from([(1u32, 4), (2u32, 9)]);
        assert_eq!(rank(&counts, 10), vec![(2, 9), (1, 4)]);
    }

    #[test]
    fn rank_zero_limit_is_empty() {
        let counts = BTreeMap::from([(1u32, 4)]);
        assert!(rank(&counts, 0).is_empty());
    }

    #[test]
    fn aggregate_of_nothing_is_empty() {
        let stats = aggregate(std::iter::empty());
        assert!(stats.by_city.is_empty());
        assert!(stats.by_industry.is_empty());
        assert!(stats.by_round.is_empty());
    }
}
