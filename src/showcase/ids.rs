//! # Identifier Assignment
//!
//! New records get a short, human readable id made of the collection prefix
//! and a number: `p1`, `p2`, `s1`...
//!
//! Two strategies exist:
//!
//! - [`IdStrategy::Count`] (default): the number is the collection length
//!   plus one. Nothing is remembered between writes, so once a record has
//!   been deleted the next id can repeat one that is still in use:
//!
//!   ```text
//!   [p1, p2]  --delete p1-->  [p2]  --add-->  [p2, p2]
//!   ```
//!
//!   Existing data was written with this rule, so it stays the default.
//!
//! - [`IdStrategy::HighWater`] (opt-in): the number is one past the larger
//!   of the collection length and the highest number already carried by an
//!   id with the same prefix. Ids still present are never reissued. Ids of
//!   records removed from the end of the collection can come back. Only
//!   plain decimal suffixes count, and a suffix of `usize::MAX` is skipped
//!   since nothing follows it.

use crate::model::Record;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdStrategy {
    #[default]
    Count,
    HighWater,
}

impl IdStrategy {
    pub fn next_id<R: Record>(&self, prefix: &str, current: &[R]) -> String {
        match self {
            IdStrategy::Count => next_id(prefix, current),
            IdStrategy::HighWater => next_id_high_water(prefix, current),
        }
    }
}

/// `prefix` followed by the collection length plus one.
pub fn next_id<R>(prefix: &str, current: &[R]) -> String {
    format!("{}{}", prefix, current.len() + 1)
}

pub fn next_id_high_water<R: Record>(prefix: &str, current: &[R]) -> String {
    let highest = current
        .iter()
        .filter_map(|r| r.id().strip_prefix(prefix))
        .filter(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
        .filter_map(|n| n.parse::<usize>().ok())
        .filter(|n| *n < usize::MAX)
        .max()
        .unwrap_or(0);
    format!("{}{}", prefix, highest.max(current.len()) + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, ProductDraft};

    fn products(ids: &[&str]) -> Vec<Product> {
        ids.iter()
            .map(|id| Product::new(id.to_string(), ProductDraft::new("t", "d", 1)))
            .collect()
    }

    #[test]
    fn count_uses_length_plus_one() {
        assert_eq!(next_id("p", &products(&[])), "p1");
        assert_eq!(next_id("p", &products(&["p1", "p2"])), "p3");
    }

    #[test]
    fn count_ignores_existing_ids() {
        // Only the length matters, even when it repeats an id in use.
        assert_eq!(next_id("s", &products(&["p2"])), "s2");
        assert_eq!(IdStrategy::Count.next_id("p", &products(&["p2"])), "p2");
    }

    #[test]
    fn high_water_skips_ids_in_use() {
        assert_eq!(IdStrategy::HighWater.next_id("p", &products(&["p2"])), "p3");
        assert_eq!(
            IdStrategy::HighWater.next_id("p", &products(&["p1", "p7", "p3"])),
            "p8"
        );
    }

    #[test]
    fn high_water_ignores_foreign_ids() {
        let current = products(&["ppt-year-end", "x9", "p1"]);
        assert_eq!(IdStrategy::HighWater.next_id("p", &current), "p4");
    }

    #[test]
    fn high_water_needs_plain_digits() {
        let current = products(&["p+5", "p-3", "p 4", "p"]);
        assert_eq!(IdStrategy::HighWater.next_id("p", &current), "p5");
    }

    #[test]
    fn high_water_skips_unreachable_suffix() {
        let huge = format!("p{}", usize::MAX);
        let current = products(&[huge.as_str(), "p2"]);
        assert_eq!(IdStrategy::HighWater.next_id("p", &current), "p3");
    }

    #[test]
    fn strategy_names() {
        let parsed: IdStrategy = serde_json::from_str("\"high-water\"").unwrap();
        assert_eq!(parsed, IdStrategy::HighWater);
        assert_eq!(IdStrategy::default(), IdStrategy::Count);
    }
}
