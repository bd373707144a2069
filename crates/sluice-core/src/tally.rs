//! Grouping raw item counts into eligible submission amounts.

use std::collections::{BTreeMap, HashSet};

use crate::types::ResourceType;

/// Classifies raw item counts and merges them per eligible category.
///
/// For each `(raw_kind, count)` pair, `classify` maps the host item kind to
/// a category (or `None` for unclassifiable items). Pairs whose category is
/// not in `eligible` are dropped; counts for the same category are summed,
/// saturating at `u32::MAX`. Categories that end up with a zero amount are
/// omitted.
///
/// The result is a `BTreeMap` so downstream submission iterates categories
/// in a deterministic order.
pub fn tally_eligible<F>(
    items: &[(String, u32)],
    classify: F,
    eligible: &HashSet<ResourceType>,
) -> BTreeMap<ResourceType, u32>
where
    F: Fn(&str) -> Option<ResourceType>,
{
    let mut merged: BTreeMap<ResourceType, u32> = BTreeMap::new();
    for (raw_kind, count) in items {
        if *count == 0 {
            continue;
        }
        let Some(category) = classify(raw_kind) else {
            continue;
        };
        if !eligible.contains(&category) {
            continue;
        }
        let slot = merged.entry(category).or_insert(0);
        *slot = slot.saturating_add(*count);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rt(name: &str) -> ResourceType {
        ResourceType::new(name).unwrap()
    }

    fn classify(raw: &str) -> Option<ResourceType> {
        match raw {
            "oak_log" | "birch_log" => Some(rt("wood")),
            "diamond" => Some(rt("diamond")),
            _ => None,
        }
    }

    #[test]
    fn drops_ineligible_and_unclassifiable_items() {
        let items = vec![
            ("oak_log".to_string(), 10),
            ("diamond".to_string(), 2),
            ("mystery_item".to_string(), 7),
        ];
        let eligible = HashSet::from([rt("wood")]);

        let tallied = tally_eligible(&items, classify, &eligible);

        assert_eq!(tallied, BTreeMap::from([(rt("wood"), 10)]));
    }

    #[test]
    fn merges_counts_per_category() {
        let items = vec![
            ("oak_log".to_string(), 10),
            ("birch_log".to_string(), 5),
        ];
        let eligible = HashSet::from([rt("wood")]);

        let tallied = tally_eligible(&items, classify, &eligible);

        assert_eq!(tallied.get(&rt("wood")), Some(&15));
    }

    #[test]
    fn merged_counts_saturate_instead_of_overflowing() {
        let items = vec![
            ("oak_log".to_string(), u32::MAX),
            ("birch_log".to_string(), 10),
        ];
        let eligible = HashSet::from([rt("wood")]);

        let tallied = tally_eligible(&items, classify, &eligible);

        assert_eq!(tallied.get(&rt("wood")), Some(&u32::MAX));
    }

    #[test]
    fn zero_counts_are_omitted() {
        let items = vec![("oak_log".to_string(), 0)];
        let eligible = HashSet::from([rt("wood")]);

        assert!(tally_eligible(&items, classify, &eligible).is_empty());
    }

    #[test]
    fn empty_eligibility_tallies_nothing() {
        let items = vec![("oak_log".to_string(), 10)];
        let eligible = HashSet::new();

        assert!(tally_eligible(&items, classify, &eligible).is_empty());
    }

    #[test]
    fn categories_iterate_in_sorted_order() {
        let items = vec![
            ("oak_log".to_string(), 1),
            ("diamond".to_string(), 1),
        ];
        let eligible = HashSet::from([rt("wood"), rt("diamond")]);

        let tallied = tally_eligible(&items, classify, &eligible);
        let order: Vec<_> = tallied.keys().map(ResourceType::as_str).collect();

        assert_eq!(order, vec!["diamond", "wood"]);
    }
}
