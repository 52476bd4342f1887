//! Filter engine
//!
//! Matching looks at `display_name` only; tags and description are never
//! searched. Both modes keep catalog order, so an empty query is the
//! identity and filtering is idempotent.

use crate::catalog::Item;
use nucleo::pattern::{CaseMatching, Normalization, Pattern};
use nucleo::{Config, Matcher, Utf32Str};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the query is matched against display names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Case-insensitive substring containment
    #[default]
    Substring,
    /// Case-insensitive fuzzy subsequence matching (nucleo)
    Fuzzy,
}

impl MatchMode {
    /// Convert to string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Substring => "substring",
            Self::Fuzzy => "fuzzy",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Visible subset of a catalog for one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filtered<'a> {
    /// At least one item matched, in catalog order
    Matches(Vec<&'a Item>),
    /// Nothing matched (or the catalog is empty)
    NoResults,
}

impl<'a> Filtered<'a> {
    fn from_matches(matches: Vec<&'a Item>) -> Self {
        if matches.is_empty() {
            Self::NoResults
        } else {
            Self::Matches(matches)
        }
    }

    /// Number of visible items
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Matches(items) => items.len(),
            Self::NoResults => 0,
        }
    }

    /// Whether this is the "no results" state
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::NoResults)
    }

    /// Item at a visible position
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&'a Item> {
        match self {
            Self::Matches(items) => items.get(position).copied(),
            Self::NoResults => None,
        }
    }

    /// Visible items as a slice (empty for "no results")
    #[must_use]
    pub fn as_slice(&self) -> &[&'a Item] {
        match self {
            Self::Matches(items) => items,
            Self::NoResults => &[],
        }
    }
}

/// Caseless form of `text`, mapped one char at a time
///
/// Uppercasing first expands `ß` to `ss` and merges final sigma with sigma;
/// no char's mapping depends on its neighbours, so a substring of `text`
/// always folds to a substring of the folded `text`.
fn fold_case(text: &str) -> String {
    text.chars()
        .flat_map(char::to_uppercase)
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compute the visible subset of `items` for `query`
#[must_use]
pub fn filter<'a>(items: &'a [Item], query: &str, mode: MatchMode) -> Filtered<'a> {
    if query.is_empty() {
        return Filtered::from_matches(items.iter().collect());
    }

    let matches = match mode {
        MatchMode::Substring => {
            let needle = fold_case(query);
            items
                .iter()
                .filter(|item| fold_case(&item.display_name).contains(&needle))
                .collect()
        }
        MatchMode::Fuzzy => {
            let pattern = Pattern::parse(query, CaseMatching::Ignore, Normalization::Smart);
            let mut matcher = Matcher::new(Config::DEFAULT);
            let mut buf = Vec::new();
            items
                .iter()
                .filter(|item| {
                    pattern
                        .score(Utf32Str::new(&item.display_name, &mut buf), &mut matcher)
                        .is_some()
                })
                .collect()
        }
    };

    Filtered::from_matches(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ids, rachel_and_adam, sample_voices};

    #[test]
    fn test_case_insensitive_substring() {
        let items = rachel_and_adam();
        let result = filter(&items, "ra", MatchMode::Substring);
        assert_eq!(result, Filtered::Matches(vec![&items[0]]));

        let result = filter(&items, "RACH", MatchMode::Substring);
        assert_eq!(ids(result.as_slice()), vec!["v1"]);
    }

    #[test]
    fn test_empty_query_is_identity() {
        let items = sample_voices();
        for mode in [MatchMode::Substring, MatchMode::Fuzzy] {
            let result = filter(&items, "", mode);
            let expected: Vec<&Item> = items.iter().collect();
            assert_eq!(result.as_slice(), expected.as_slice());
        }
    }

    #[test]
    fn test_every_case_variant_substring_matches() {
        let items = sample_voices();
        for item in &items {
            let name = &item.display_name;
            let chars: Vec<char> = name.chars().collect();
            for start in 0..chars.len() {
                for end in start + 1..=chars.len() {
                    let sub: String = chars[start..end].iter().collect();
                    for query in [sub.to_uppercase(), sub.to_lowercase(), sub.clone()] {
                        let result = filter(&items, &query, MatchMode::Substring);
                        assert!(
                            result.as_slice().iter().any(|i| i.id == item.id),
                            "query {query:?} should match {name:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_non_ascii_case_variants_match() {
        let items = vec![
            Item::new("g1", "ΟΔΟΣ"),
            Item::new("g2", "οδος"),
            Item::new("d1", "Strauß"),
            Item::new("d2", "STRASSE"),
        ];
        let matching = |query: &str| ids(filter(&items, query, MatchMode::Substring).as_slice());

        assert_eq!(matching("Σ"), vec!["g1", "g2"]);
        assert_eq!(matching("ς"), vec!["g1", "g2"]);
        assert_eq!(matching("δοσ"), vec!["g1", "g2"]);
        assert_eq!(matching("SS"), vec!["d1", "d2"]);
        assert_eq!(matching("ß"), vec!["d1", "d2"]);
        assert_eq!(matching("strauss"), vec!["d1"]);

        for item in &items {
            let chars: Vec<char> = item.display_name.chars().collect();
            for start in 0..chars.len() {
                for end in start + 1..=chars.len() {
                    let sub: String = chars[start..end].iter().collect();
                    for query in [sub.to_uppercase(), sub.to_lowercase(), sub.clone()] {
                        assert!(
                            matching(&query).contains(&item.id.as_str()),
                            "query {query:?} should match {:?}",
                            item.display_name
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let items = sample_voices();
        for mode in [MatchMode::Substring, MatchMode::Fuzzy] {
            for query in ["a", "RA", "n", "zz", "ar"] {
                let once: Vec<Item> = filter(&items, query, mode)
                    .as_slice()
                    .iter()
                    .map(|&i| i.clone())
                    .collect();
                let twice = filter(&once, query, mode);
                let once_refs: Vec<&Item> = once.iter().collect();
                assert_eq!(twice.as_slice(), once_refs.as_slice(), "query {query:?}");
            }
        }
    }

    #[test]
    fn test_tags_and_description_are_not_searched() {
        let items = vec![
            Item::new("v1", "Rachel")
                .with_tag("accent", "british")
                .with_description("warm storyteller"),
        ];
        assert!(filter(&items, "british", MatchMode::Substring).is_empty());
        assert!(filter(&items, "storyteller", MatchMode::Substring).is_empty());
        assert!(filter(&items, "british", MatchMode::Fuzzy).is_empty());
    }

    #[test]
    fn test_no_results_state() {
        let items = rachel_and_adam();
        let result = filter(&items, "zz", MatchMode::Substring);
        assert_eq!(result, Filtered::NoResults);
        assert_eq!(result.len(), 0);
        assert!(result.get(0).is_none());

        assert_eq!(filter(&[], "", MatchMode::Substring), Filtered::NoResults);
    }

    #[test]
    fn test_preserves_catalog_order() {
        let items = sample_voices();
        let result = filter(&items, "a", MatchMode::Substring);
        let positions: Vec<usize> = result
            .as_slice()
            .iter()
            .map(|m| items.iter().position(|i| i.id == m.id).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_fuzzy_matches_subsequence() {
        let items = rachel_and_adam();
        assert_eq!(ids(filter(&items, "rcl", MatchMode::Fuzzy).as_slice()), vec!["v1"]);
        assert!(filter(&items, "rcl", MatchMode::Substring).is_empty());
    }
}
