//! Quote canonicalization and claim grouping.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::highlighter::HighlightConfig;
use crate::model::EvidenceTuple;

/// Canonical form of a quote: trimmed and lowercased.
pub fn canonicalize(quote: &str) -> String {
    quote.trim().to_lowercase()
}

/// Claims that cite the same canonical quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteGroup {
    pub canonical_quote: String,
    /// Trimmed quote as first seen; this is what gets matched.
    pub surface_quote: String,
    /// Never empty; first-seen order.
    pub claims: IndexSet<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    surface: String,
    claims: IndexSet<String>,
}

/// Quote groups for one document, in first-seen order.
///
/// The order is the declaration order of the compiled pattern, so it decides
/// which quote wins when two could match at the same position.
///
/// Groups are keyed by canonical quote but matched by the trimmed surface
/// form of their first quote. Lowercasing is not length-preserving for every
/// character (`İ` becomes `i` plus a combining dot), while matching folds
/// case one character at a time, so the key alone could miss verbatim text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteGroups {
    groups: IndexMap<String, Entry>,
    empty_quotes: usize,
    fold_case: bool,
}

impl Default for QuoteGroups {
    fn default() -> Self {
        Self {
            groups: IndexMap::new(),
            empty_quotes: 0,
            fold_case: true,
        }
    }
}

impl QuoteGroups {
    /// Group the given tuples by canonical quote.
    ///
    /// Callers pass only the tuples addressed to one document. Quotes that are
    /// empty after canonicalization are counted and skipped.
    pub fn from_tuples<'a, I>(tuples: I) -> Self
    where
        I: IntoIterator<Item = &'a EvidenceTuple>,
    {
        Self::with_config(tuples, &HighlightConfig::default())
    }

    /// Group tuples, keeping letter case distinct when matching is
    /// case-sensitive.
    pub fn with_config<'a, I>(tuples: I, config: &HighlightConfig) -> Self
    where
        I: IntoIterator<Item = &'a EvidenceTuple>,
    {
        let mut grouped = Self {
            fold_case: config.case_insensitive,
            ..Self::default()
        };
        for tuple in tuples {
            grouped.insert(&tuple.claim, &tuple.quote);
        }
        grouped
    }

    /// Add one claim/quote pair.
    pub fn insert(&mut self, claim: &str, quote: &str) {
        let surface = quote.trim();
        if surface.is_empty() {
            self.empty_quotes += 1;
            return;
        }
        let key = if self.fold_case {
            canonicalize(surface)
        } else {
            surface.to_string()
        };
        self.groups
            .entry(key)
            .or_insert_with(|| Entry {
                surface: surface.to_string(),
                claims: IndexSet::new(),
            })
            .claims
            .insert(claim.to_string());
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of quotes dropped for being empty.
    pub fn empty_quotes(&self) -> usize {
        self.empty_quotes
    }

    /// Canonical quotes in declaration order.
    pub fn quotes(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Surface forms to compile, in declaration order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.groups.values().map(|entry| entry.surface.as_str())
    }

    /// Claims of the group at `index` in declaration order.
    pub fn claims(&self, index: usize) -> Option<&IndexSet<String>> {
        self.groups.get_index(index).map(|(_, entry)| &entry.claims)
    }

    /// Canonical quote at `index` in declaration order.
    pub fn quote(&self, index: usize) -> Option<&str> {
        self.groups.get_index(index).map(|(quote, _)| quote.as_str())
    }

    /// Owned snapshot of the groups.
    pub fn to_groups(&self) -> Vec<QuoteGroup> {
        self.groups
            .iter()
            .map(|(quote, entry)| QuoteGroup {
                canonical_quote: quote.clone(),
                surface_quote: entry.surface.clone(),
                claims: entry.claims.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize() {
        assert_eq!(canonicalize("  We Arranged  "), "we arranged");
        assert_eq!(canonicalize("\tWE\n"), "we");
        assert_eq!(canonicalize("   "), "");
        // interior whitespace is left alone
        assert_eq!(canonicalize("a  b"), "a  b");
    }

    #[test]
    fn test_case_and_outer_whitespace_merge() {
        let tuples = vec![
            EvidenceTuple::new("claim1", "We", "note2"),
            EvidenceTuple::new("claim2", "  we  ", "note2"),
        ];
        let groups = QuoteGroups::from_tuples(&tuples);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups.quote(0), Some("we"));
        let claims: Vec<_> = groups.claims(0).unwrap().iter().cloned().collect();
        assert_eq!(claims, vec!["claim1", "claim2"]);
    }

    #[test]
    fn test_duplicate_claims_collapse() {
        let tuples = vec![
            EvidenceTuple::new("claim1", "fever", "n"),
            EvidenceTuple::new("claim2", "FEVER", "n"),
            EvidenceTuple::new("claim1", "Fever", "n"),
        ];
        let groups = QuoteGroups::from_tuples(&tuples);

        let claims: Vec<_> = groups.claims(0).unwrap().iter().cloned().collect();
        assert_eq!(claims, vec!["claim1", "claim2"]);
    }

    #[test]
    fn test_empty_quotes_dropped() {
        let tuples = vec![
            EvidenceTuple::new("claim1", "", "n"),
            EvidenceTuple::new("claim2", "   ", "n"),
            EvidenceTuple::new("claim3", "cough", "n"),
        ];
        let groups = QuoteGroups::from_tuples(&tuples);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups.empty_quotes(), 2);
        assert_eq!(groups.quotes().collect::<Vec<_>>(), vec!["cough"]);
    }

    #[test]
    fn test_first_surface_form_is_kept() {
        let tuples = vec![
            EvidenceTuple::new("claim1", "  \u{130}stanbul ", "n"),
            EvidenceTuple::new("claim2", "\u{130}STANBUL", "n"),
        ];
        let groups = QuoteGroups::from_tuples(&tuples);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups.quote(0), Some("i\u{307}stanbul"));
        assert_eq!(groups.patterns().collect::<Vec<_>>(), vec!["\u{130}stanbul"]);
        assert_eq!(groups.to_groups()[0].surface_quote, "\u{130}stanbul");
    }

    #[test]
    fn test_case_sensitive_grouping() {
        let tuples = vec![
            EvidenceTuple::new("claim1", "We", "n"),
            EvidenceTuple::new("claim2", " we", "n"),
        ];
        let config = HighlightConfig::default().with_case_insensitive(false);
        let groups = QuoteGroups::with_config(&tuples, &config);

        assert_eq!(groups.quotes().collect::<Vec<_>>(), vec!["We", "we"]);
    }

    #[test]
    fn test_declaration_order_is_first_seen() {
        let tuples = vec![
            EvidenceTuple::new("a", "second thing", "n"),
            EvidenceTuple::new("b", "first thing", "n"),
            EvidenceTuple::new("c", "Second Thing", "n"),
        ];
        let groups = QuoteGroups::from_tuples(&tuples);

        assert_eq!(
            groups.quotes().collect::<Vec<_>>(),
            vec!["second thing", "first thing"]
        );
        let snapshot = groups.to_groups();
        assert_eq!(snapshot[0].claims.len(), 2);
    }
}
