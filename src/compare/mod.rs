//! Set-theoretic comparison of two option maps.
//!
//! The same comparison serves both modes of the tool:
//! - compare: candidate = feature config, baseline = general-purpose config
//! - generate: candidate = vendor upstream config, baseline = distribution default
//!
//! Only the fields a caller surfaces differ between the two.

use crate::kconfig::ConfigSet;
use serde::Serialize;
use std::collections::BTreeSet;

#[cfg(test)]
mod tests;

/// Result of comparing a candidate set against a baseline set.
///
/// The three key sets are pairwise disjoint. Their union is every key of
/// both inputs except those on which the two sets agree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffResult {
    /// Keys the candidate sets and the baseline lacks.
    pub only_in_candidate: BTreeSet<String>,
    /// Keys the baseline sets and the candidate lacks.
    pub only_in_baseline: BTreeSet<String>,
    /// Keys present in both with a different kind or raw value.
    pub conflicting: BTreeSet<String>,
}

impl DiffResult {
    /// Keys the candidate must explicitly force: `only_in_candidate ∪ conflicting`.
    ///
    /// Baseline-only keys never appear here; the baseline default already applies.
    pub fn force_set(&self) -> BTreeSet<String> {
        self.only_in_candidate
            .union(&self.conflicting)
            .cloned()
            .collect()
    }

    /// The candidate's options for every key in the force set.
    pub fn forced_options(&self, candidate: &ConfigSet) -> ConfigSet {
        candidate.subset(&self.force_set())
    }

    /// True when both sets agree on every key.
    pub fn is_empty(&self) -> bool {
        self.only_in_candidate.is_empty()
            && self.only_in_baseline.is_empty()
            && self.conflicting.is_empty()
    }
}

/// Compare `candidate` against `baseline`.
pub fn diff(candidate: &ConfigSet, baseline: &ConfigSet) -> DiffResult {
    let mut result = DiffResult::default();

    for option in candidate.iter() {
        match baseline.get(&option.key) {
            None => {
                result.only_in_candidate.insert(option.key.clone());
            }
            Some(base) if base != option => {
                result.conflicting.insert(option.key.clone());
            }
            Some(_) => {}
        }
    }

    result.only_in_baseline = baseline
        .keys()
        .filter(|key| !candidate.contains_key(key))
        .map(str::to_string)
        .collect();

    result
}
