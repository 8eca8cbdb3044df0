//! Pairwise performance ratios between two structures.
//!
//! A ratio is defined only where the denominator has a non-zero
//! measurement at the same size. Undefined ratios read as `0.0`.

use crate::parser::schema::SampleSet;
use log::debug;
use std::collections::BTreeMap;

/// Ratios keyed by size, covering exactly the numerator's sizes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatioSet {
    ratios: BTreeMap<i64, Option<f64>>,
}

impl RatioSet {
    /// Ratio at `size`, with missing and undefined entries read as `0.0`
    pub fn get(&self, size: i64) -> f64 {
        self.quotient(size).unwrap_or(0.0)
    }

    /// The computed quotient, or `None` when the denominator was missing or zero
    pub fn quotient(&self, size: i64) -> Option<f64> {
        self.ratios.get(&size).copied().flatten()
    }

    pub fn contains(&self, size: i64) -> bool {
        self.ratios.contains_key(&size)
    }

    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }

    /// Number of sizes with a computed quotient
    pub fn defined_count(&self) -> usize {
        self.ratios.values().filter(|r| r.is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, Option<f64>)> + '_ {
        self.ratios.iter().map(|(size, ratio)| (*size, *ratio))
    }
}

/// Divide `numerator` by `denominator` size by size
///
/// **Public** - main entry point for ratio calculation
///
/// Every size of the numerator gets an entry. A missing or zero
/// denominator leaves that entry undefined; this is not an error.
pub fn calculate_ratios(numerator: &SampleSet, denominator: &SampleSet) -> RatioSet {
    let ratios: BTreeMap<i64, Option<f64>> = numerator
        .iter()
        .map(|(size, value)| {
            let ratio = match denominator.get(size) {
                Some(d) if d != 0.0 => Some(value / d),
                _ => None,
            };
            (size, ratio)
        })
        .collect();

    let set = RatioSet { ratios };

    debug!(
        "Calculated {} ratios ({} defined)",
        set.len(),
        set.defined_count()
    );

    set
}

/// The three ratio sets reported for an operation
#[derive(Debug, Clone, Default)]
pub struct RatioTable {
    pub tree_list: RatioSet,
    pub list_map: RatioSet,
    pub tree_map: RatioSet,
}

impl RatioTable {
    /// Tree vs list, list vs map and tree vs map
    pub fn from_samples(list: &SampleSet, tree: &SampleSet, map: &SampleSet) -> Self {
        Self {
            tree_list: calculate_ratios(tree, list),
            list_map: calculate_ratios(list, map),
            tree_map: calculate_ratios(tree, map),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(pairs: &[(i64, f64)]) -> SampleSet {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_ratio_is_quotient() {
        let ratios = calculate_ratios(&samples(&[(10, 3.0), (20, 9.0)]), &samples(&[(10, 1.5), (20, 3.0)]));
        assert_eq!(ratios.get(10), 2.0);
        assert_eq!(ratios.get(20), 3.0);
        assert_eq!(ratios.quotient(10), Some(2.0));
    }

    #[test]
    fn test_zero_denominator_is_undefined() {
        let ratios = calculate_ratios(&samples(&[(10, 3.0)]), &samples(&[(10, 0.0)]));
        assert!(ratios.contains(10));
        assert_eq!(ratios.quotient(10), None);
        assert_eq!(ratios.get(10), 0.0);
    }

    #[test]
    fn test_missing_denominator_is_undefined() {
        let ratios = calculate_ratios(&samples(&[(10, 3.0)]), &samples(&[(20, 1.0)]));
        assert!(ratios.contains(10));
        assert_eq!(ratios.get(10), 0.0);
        assert_eq!(ratios.defined_count(), 0);
    }

    #[test]
    fn test_covers_exactly_numerator_keys() {
        let ratios = calculate_ratios(&samples(&[(10, 1.0), (30, 1.0)]), &samples(&[(10, 1.0), (20, 1.0)]));
        let sizes: Vec<i64> = ratios.iter().map(|(size, _)| size).collect();
        assert_eq!(sizes, vec![10, 30]);
        assert!(!ratios.contains(20));
    }

    #[test]
    fn test_zero_numerator_is_defined() {
        let ratios = calculate_ratios(&samples(&[(10, 0.0)]), &samples(&[(10, 4.0)]));
        assert_eq!(ratios.quotient(10), Some(0.0));
    }
}
