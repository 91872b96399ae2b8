// envstack: Layered Environment Variable Resolution
//
// SPDX-FileCopyrightText: 2026 envstack contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Map merging with priority.
//!
//! ```text
//! low_priority + high_priority --> key-wise union
//! ```
//!
//! High-priority values replace low-priority values on key conflicts.

use std::collections::BTreeMap;

/// Merges two maps, with `high_priority` winning on key conflicts.
///
/// Keys present in only one side are carried through unchanged. Neither
/// operand is mutated.
#[must_use]
pub fn merge_maps(
    low_priority: &BTreeMap<String, String>,
    high_priority: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut merged = low_priority.clone();
    for (key, value) in high_priority {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::merge_maps;
    use std::collections::BTreeMap;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_high_priority_wins_on_conflict() {
        let low = map(&[("A", "1"), ("B", "2")]);
        let high = map(&[("B", "3"), ("C", "4")]);
        let merged = merge_maps(&low, &high);
        assert_eq!(merged, map(&[("A", "1"), ("B", "3"), ("C", "4")]));
    }

    #[test]
    fn test_empty_sides() {
        let some = map(&[("A", "1")]);
        assert_eq!(merge_maps(&BTreeMap::new(), &some), some);
        assert_eq!(merge_maps(&some, &BTreeMap::new()), some);
        assert!(merge_maps(&BTreeMap::new(), &BTreeMap::new()).is_empty());
    }

    #[test]
    fn test_operands_unchanged() {
        let low = map(&[("A", "1")]);
        let high = map(&[("A", "2")]);
        let _ = merge_maps(&low, &high);
        assert_eq!(low, map(&[("A", "1")]));
        assert_eq!(high, map(&[("A", "2")]));
    }
}
