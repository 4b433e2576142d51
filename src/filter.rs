//! Filtering and search over the catalog.
//!
//! A pure function of `(entries, FilterState)` recomputed synchronously on
//! every filter change. The three criteria compose with logical AND, each
//! one degrading to "match everything" when unset, and the result keeps
//! the registry's relative order.
//!
//! Text matching is deliberately asymmetric: the whole query matches as a
//! case-insensitive substring against the name, description, and alias
//! names, but against tags each whitespace-separated token of the query
//! matches independently. Observed behavior of the catalog; keep it.

use crate::catalog::{Category, VisualEntry};

/// Active filter criteria for the catalog list.
///
/// `category: None` is the "all" wildcard. An empty tag set and an
/// empty/whitespace query each disable their criterion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub category: Option<Category>,
    /// Selected tags; an entry must carry every one of them
    pub tags: Vec<String>,
    pub query: String,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.tags.is_empty() && self.query.trim().is_empty()
    }

    /// Toggle a tag in or out of the selected set
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag.to_string());
        }
    }
}

/// Compute the visible subset of `entries` under `state`.
pub fn apply<'a>(entries: &'a [VisualEntry], state: &FilterState) -> Vec<&'a VisualEntry> {
    entries
        .iter()
        .filter(|entry| {
            matches_category(entry, state.category)
                && matches_tags(entry, &state.tags)
                && matches_query(entry, &state.query)
        })
        .collect()
}

/// Wildcard (`None`) passes everything; otherwise exact equality.
pub fn matches_category(entry: &VisualEntry, selected: Option<Category>) -> bool {
    match selected {
        None => true,
        Some(category) => entry.category == category,
    }
}

/// Every selected tag must be present (AND, not OR). Empty set passes.
pub fn matches_tags(entry: &VisualEntry, selected: &[String]) -> bool {
    selected
        .iter()
        .all(|tag| entry.tags.iter().any(|t| t == tag))
}

/// Loose text match. Empty or whitespace-only queries pass.
pub fn matches_query(entry: &VisualEntry, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();

    if entry.name.to_lowercase().contains(&query) {
        return true;
    }
    if entry.description.to_lowercase().contains(&query) {
        return true;
    }
    if entry
        .alt_names
        .iter()
        .any(|alias| alias.to_lowercase().contains(&query))
    {
        return true;
    }
    // Tags match per query token, not against the whole query
    query.split_whitespace().any(|token| {
        entry
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(token))
    })
}
