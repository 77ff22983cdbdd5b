//! Merge verified company addresses into a dataset.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

use crate::model::SubsidyDataset;

/// Name fragments marking an incorporated entity, whose address can be
/// looked up in the corporate-number registry.
const CORPORATE_MARKERS: &[&str] = &[
    "株式会社",
    "有限会社",
    "合同会社",
    "合名会社",
    "合資会社",
    "一般社団法人",
    "一般財団法人",
];

/// Company name → verified address.
pub type AddressBook = BTreeMap<String, String>;

/// Read an address book from a JSON object file.
pub fn load_address_book(path: &Path) -> Result<AddressBook> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read address book {}", path.display()))?;
    let book: AddressBook = serde_json::from_str(&text)
        .with_context(|| format!("failed to decode address book {}", path.display()))?;
    Ok(book)
}

/// One address written into a case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressUpdate {
    pub company_name: String,
    pub address: String,
}

/// Address fill status of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coverage {
    pub filled: usize,
    pub empty: usize,
    pub total: usize,
}

impl Coverage {
    /// Filled share in percent; 0.0 for an empty dataset.
    pub fn rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.filled as f64 / self.total as f64 * 100.0
        }
    }
}

/// Write every matching address from `book` into `dataset`, optionally
/// replacing `last_updated`. Returns the updates in dataset order.
///
/// A company listed more than once receives the address on every record.
pub fn apply_addresses(
    dataset: &mut SubsidyDataset,
    book: &AddressBook,
    last_updated: Option<&str>,
) -> Vec<AddressUpdate> {
    let mut updates = Vec::new();
    for case in &mut dataset.cases {
        if let Some(address) = book.get(&case.company_name) {
            case.address = Some(address.clone());
            updates.push(AddressUpdate {
                company_name: case.company_name.clone(),
                address: address.clone(),
            });
        }
    }

    if let Some(text) = last_updated {
        dataset.last_updated = text.to_string();
    }

    info!("applied {} address updates", updates.len());
    updates
}

pub fn coverage(dataset: &SubsidyDataset) -> Coverage {
    let filled = dataset.cases.iter().filter(|c| c.has_address()).count();
    Coverage {
        filled,
        empty: dataset.cases.len() - filled,
        total: dataset.cases.len(),
    }
}

/// Incorporated companies still lacking an address, in dataset order.
pub fn pending_corporate(dataset: &SubsidyDataset) -> Vec<&str> {
    dataset
        .cases
        .iter()
        .filter(|c| !c.has_address())
        .filter(|c| CORPORATE_MARKERS.iter().any(|m| c.company_name.contains(m)))
        .map(|c| c.company_name.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coverage_rate_of_empty_dataset_is_zero() {
        let c = Coverage {
            filled: 0,
            empty: 0,
            total: 0,
        };
        assert_eq!(c.rate(), 0.0);
    }

    #[test]
    fn coverage_rate_is_percent() {
        let c = Coverage {
            filled: 1,
            empty: 3,
            total: 4,
        };
        assert!((c.rate() - 25.0).abs() < f64::EPSILON);
    }
}
