use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::Rejected;
use crate::patterns::Category;

/// Accepted values per category, in first-seen order with exact duplicates removed.
///
/// Serializes as a JSON object of arrays keyed by category name. Every
/// category that was scanned is present, empty when nothing matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractionResult {
    values: BTreeMap<Category, Vec<String>>,
}

impl ExtractionResult {
    /// Record `values` for `category`, keeping the first occurrence of each.
    pub(crate) fn insert_unique(&mut self, category: Category, values: Vec<String>) {
        let slot = self.values.entry(category).or_default();
        let mut seen: HashSet<String> = slot.iter().cloned().collect();
        for value in values {
            if seen.insert(value.clone()) {
                slot.push(value);
            }
        }
    }

    /// Values for `category`; empty when absent or unmatched.
    pub fn get(&self, category: Category) -> &[String] {
        self.values.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_category(&self, category: Category) -> bool {
        self.values.contains_key(&category)
    }

    /// Categories present in the result, matched or not.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.values.keys().copied()
    }

    pub fn non_empty_categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.values
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(category, _)| *category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> + '_ {
        self.values
            .iter()
            .map(|(category, values)| (*category, values.as_slice()))
    }

    /// Total number of values across all categories.
    pub fn total(&self) -> usize {
        self.values.values().map(Vec::len).sum()
    }

    /// True when no category holds a value.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Serializable outcome of one extraction, keeping "no matches" and
/// "rejected" apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Report {
    Ok {
        data: ExtractionResult,
    },
    Rejected {
        signatures: Vec<String>,
        data: ExtractionResult,
    },
}

impl Report {
    pub fn data(&self) -> &ExtractionResult {
        match self {
            Report::Ok { data } | Report::Rejected { data, .. } => data,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Report::Rejected { .. })
    }
}

impl From<Result<ExtractionResult, Rejected>> for Report {
    fn from(outcome: Result<ExtractionResult, Rejected>) -> Self {
        match outcome {
            Ok(data) => Report::Ok { data },
            Err(rejected) => Report::Rejected {
                signatures: rejected.signatures().map(str::to_string).collect(),
                data: ExtractionResult::default(),
            },
        }
    }
}
