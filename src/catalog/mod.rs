//! The catalog: a static, ordered registry of cataloged UI patterns.
//!
//! Every entry describes one visual pattern (its common name, the category
//! it belongs to, a description, alias names, and tags) plus the id of the
//! demo widget that previews it. The registry is built once behind a
//! `OnceLock` and never mutated; everything here is a pure read.

mod entries;

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Closed set of catalog categories.
///
/// Also the first routing segment: `categories/<category>/<slug>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Navigation,
    Input,
    Feedback,
    Content,
    Animation,
    Container,
    Data,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 7] = [
        Category::Navigation,
        Category::Input,
        Category::Feedback,
        Category::Content,
        Category::Animation,
        Category::Container,
        Category::Data,
    ];

    /// Lowercase routing/display token
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Navigation => "navigation",
            Category::Input => "input",
            Category::Feedback => "feedback",
            Category::Content => "content",
            Category::Animation => "animation",
            Category::Container => "container",
            Category::Data => "data",
        }
    }

    /// Human-readable label for headers
    pub fn label(&self) -> &'static str {
        match self {
            Category::Navigation => "Navigation",
            Category::Input => "Input",
            Category::Feedback => "Feedback",
            Category::Content => "Content",
            Category::Animation => "Animation",
            Category::Container => "Container",
            Category::Data => "Data",
        }
    }

    /// Parse a routing token. Unknown tokens are `None`, not an error.
    pub fn parse(token: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.slug() == token)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// One cataloged visual pattern.
///
/// `(category, slug)` is the unique routing key. `widget` names the demo
/// widget in [`crate::widgets`]; resolution is not enforced here - entries
/// whose demo has not been built yet render a placeholder.
#[derive(Debug, Clone)]
pub struct VisualEntry {
    pub name: &'static str,
    pub slug: &'static str,
    pub category: Category,
    pub description: &'static str,
    /// Alias names the pattern is also known by, in display order
    pub alt_names: &'static [&'static str],
    /// Display-ordered; matching treats this as a set
    pub tags: &'static [&'static str],
    /// Stable id resolved through the widget registry
    pub widget: &'static str,
}

static REGISTRY: OnceLock<Vec<VisualEntry>> = OnceLock::new();

/// The full ordered registry.
pub fn all() -> &'static [VisualEntry] {
    REGISTRY.get_or_init(entries::build_entries)
}

/// Look up one entry by its routing key. Absence is a renderable
/// not-found state, not an error.
pub fn find(category: Category, slug: &str) -> Option<&'static VisualEntry> {
    all()
        .iter()
        .find(|e| e.category == category && e.slug == slug)
}

/// All entries in one category, registry order preserved.
pub fn by_category(category: Category) -> Vec<&'static VisualEntry> {
    all().iter().filter(|e| e.category == category).collect()
}

/// Every tag used anywhere in the registry, deduplicated and sorted
/// lexicographically for stable display order.
pub fn all_tags() -> Vec<&'static str> {
    let mut tags: Vec<&'static str> = all().iter().flat_map(|e| e.tags.iter().copied()).collect();
    tags.sort_unstable();
    tags.dedup();
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_is_not_empty() {
        assert!(all().len() >= 40, "catalog should cover a broad pattern set");
    }

    #[test]
    fn test_category_slug_keys_are_unique() {
        let mut seen = HashSet::new();
        for entry in all() {
            assert!(
                seen.insert((entry.category, entry.slug)),
                "duplicate routing key: {}/{}",
                entry.category,
                entry.slug
            );
        }
    }

    #[test]
    fn test_every_category_has_entries() {
        for category in Category::ALL {
            assert!(
                !by_category(category).is_empty(),
                "category {} has no entries",
                category
            );
        }
    }

    #[test]
    fn test_find_known_entry() {
        let entry = find(Category::Navigation, "hamburger-menu").expect("hamburger menu exists");
        assert_eq!(entry.name, "Hamburger Menu");
        assert!(entry.tags.contains(&"mobile"));
    }

    #[test]
    fn test_find_unknown_entry_is_none() {
        assert!(find(Category::Navigation, "does-not-exist").is_none());
        // Right slug, wrong category is still absent
        assert!(find(Category::Data, "hamburger-menu").is_none());
    }

    #[test]
    fn test_by_category_preserves_registry_order() {
        let nav = by_category(Category::Navigation);
        let order_in_full: Vec<&str> = all()
            .iter()
            .filter(|e| e.category == Category::Navigation)
            .map(|e| e.slug)
            .collect();
        let order_in_subset: Vec<&str> = nav.iter().map(|e| e.slug).collect();
        assert_eq!(order_in_subset, order_in_full);
    }

    #[test]
    fn test_all_tags_deduped_and_sorted() {
        let tags = all_tags();
        let mut sorted = tags.clone();
        sorted.sort_unstable();
        assert_eq!(tags, sorted, "tags must be sorted");
        let unique: HashSet<_> = tags.iter().collect();
        assert_eq!(unique.len(), tags.len(), "tags must be deduplicated");
        // "mobile" appears on several entries but only once here
        assert_eq!(tags.iter().filter(|t| **t == "mobile").count(), 1);
    }

    #[test]
    fn test_category_parse_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.slug()), Some(category));
        }
        assert_eq!(Category::parse("gadgets"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn test_slugs_are_url_safe() {
        for entry in all() {
            assert!(
                entry
                    .slug
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "slug not url-safe: {}",
                entry.slug
            );
        }
    }
}
