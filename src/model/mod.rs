pub mod fingerprint;
pub mod io;

use serde::{Deserialize, Serialize};

use crate::consts::UNKNOWN_CATEGORY;

pub use fingerprint::Fingerprint;

/// One awarded application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsidyCase {
    /// Public-call round the case was awarded under.
    pub round: u32,
    pub announcement_date: String,
    pub company_name: String,
    pub city: String,
    pub industry: String,
    pub business_description: String,
    /// May hold [`UNKNOWN_CATEGORY`].
    pub application_category: String,
    #[serde(default)]
    pub notes: Vec<String>,
    /// Verified company address, filled in by enrichment. Absent and empty
    /// both mean unknown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl SubsidyCase {
    pub fn has_known_category(&self) -> bool {
        self.application_category != UNKNOWN_CATEGORY
    }

    pub fn has_address(&self) -> bool {
        self.address.as_deref().is_some_and(|a| !a.is_empty())
    }
}

/// The whole corpus as published.
///
/// `total_cases` is a display value copied from the source document. It is
/// never recomputed from `cases`; see [`SubsidyDataset::total_cases_mismatch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsidyDataset {
    pub title: String,
    pub description: String,
    pub source: String,
    pub last_updated: String,
    pub total_cases: u64,
    pub cases: Vec<SubsidyCase>,
}

impl SubsidyDataset {
    /// `Some((declared, actual))` when `total_cases` disagrees with the
    /// number of records.
    pub fn total_cases_mismatch(&self) -> Option<(u64, usize)> {
        let actual = self.cases.len();
        (self.total_cases != actual as u64).then_some((self.total_cases, actual))
    }

    /// Content hash used to key cached views.
    pub fn fingerprint(&self) -> anyhow::Result<Fingerprint> {
        let bytes = serde_json::to_vec(self)?;
        Ok(Fingerprint::of(&bytes))
    }
}
