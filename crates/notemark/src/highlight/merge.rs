//! Attaches claim sets to matches.

use super::normalize::QuoteGroups;
use super::scan::QuoteMatch;
use crate::model::Span;

/// Build spans from matches, giving each the full claim set of its group.
pub fn merge_claims(text: &str, matches: &[QuoteMatch], groups: &QuoteGroups) -> Vec<Span> {
    matches
        .iter()
        .filter_map(|m| {
            let claims = groups.claims(m.group)?;
            Some(Span {
                start: m.start,
                end: m.end,
                text: text[m.start..m.end].to_string(),
                claims: claims.clone(),
            })
        })
        .collect()
}
