//! Unit tests for the catalog filter.
//!
//! Tests verify:
//! - Order-preserving subset semantics
//! - AND composition across category, tags, and text query
//! - Asymmetric text matching (substring for name/description/aliases,
//!   per-token substring for tags)
//! - Graceful degradation for empty/whitespace inputs

use crate::catalog::{Category, VisualEntry};
use crate::filter::{apply, matches_query, matches_tags, FilterState};

fn sample_entries() -> Vec<VisualEntry> {
    vec![
        VisualEntry {
            name: "Hamburger Menu",
            slug: "hamburger-menu",
            category: Category::Navigation,
            description: "Three stacked bars that expand into the primary navigation.",
            alt_names: &["menu icon", "sandwich menu"],
            tags: &["navigation", "mobile", "icon", "collapse"],
            widget: "hamburger-menu",
        },
        VisualEntry {
            name: "Toggle Switch",
            slug: "toggle-switch",
            category: Category::Input,
            description: "A sliding on/off control for a boolean setting.",
            alt_names: &["switch"],
            tags: &["input", "boolean", "settings"],
            widget: "toggle-switch",
        },
        VisualEntry {
            name: "Toast",
            slug: "toast",
            category: Category::Feedback,
            description: "A transient notification that dismisses itself.",
            alt_names: &["snackbar"],
            tags: &["feedback", "notification", "transient"],
            widget: "toast",
        },
        VisualEntry {
            name: "Bottom Navigation",
            slug: "bottom-navigation",
            category: Category::Navigation,
            description: "A fixed bar of icon destinations on mobile.",
            alt_names: &[],
            tags: &["navigation", "mobile", "icon", "fixed"],
            widget: "bottom-navigation",
        },
    ]
}

// =============================================================================
// Composition and ordering
// =============================================================================

#[test]
fn test_empty_state_returns_everything_in_order() {
    let entries = sample_entries();
    let result = apply(&entries, &FilterState::default());
    let slugs: Vec<&str> = result.iter().map(|e| e.slug).collect();
    assert_eq!(
        slugs,
        vec!["hamburger-menu", "toggle-switch", "toast", "bottom-navigation"]
    );
}

#[test]
fn test_result_is_order_preserving_subset() {
    let entries = sample_entries();
    let state = FilterState {
        category: Some(Category::Navigation),
        ..Default::default()
    };
    let result = apply(&entries, &state);
    let slugs: Vec<&str> = result.iter().map(|e| e.slug).collect();
    assert_eq!(slugs, vec!["hamburger-menu", "bottom-navigation"]);
}

#[test]
fn test_criteria_compose_with_and() {
    let entries = sample_entries();
    // Category alone matches two entries; adding a query narrows to one
    let state = FilterState {
        category: Some(Category::Navigation),
        tags: vec![],
        query: "ham".to_string(),
    };
    let result = apply(&entries, &state);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].slug, "hamburger-menu");
}

#[test]
fn test_category_mismatch_excludes_entry() {
    let entries = sample_entries();
    let state = FilterState {
        category: Some(Category::Input),
        ..Default::default()
    };
    let result = apply(&entries, &state);
    assert!(result.iter().all(|e| e.category == Category::Input));
    assert!(!result.iter().any(|e| e.slug == "hamburger-menu"));
}

#[test]
fn test_idempotence() {
    let entries = sample_entries();
    let state = FilterState {
        category: Some(Category::Navigation),
        tags: vec!["mobile".to_string()],
        query: "menu".to_string(),
    };
    let once: Vec<&str> = apply(&entries, &state).iter().map(|e| e.slug).collect();
    let twice: Vec<&str> = apply(&entries, &state).iter().map(|e| e.slug).collect();
    assert_eq!(once, twice);
}

// =============================================================================
// Tag criterion - AND semantics
// =============================================================================

#[test]
fn test_selected_tags_use_and_semantics() {
    let entries = sample_entries();
    let state = FilterState {
        tags: vec!["navigation".to_string(), "icon".to_string()],
        ..Default::default()
    };
    let result = apply(&entries, &state);
    // Both navigation entries carry both tags; toast and toggle carry neither
    assert_eq!(result.len(), 2);
    for entry in &result {
        assert!(entry.tags.contains(&"navigation"));
        assert!(entry.tags.contains(&"icon"));
    }
}

#[test]
fn test_entry_with_partial_tag_overlap_is_excluded() {
    let entry = VisualEntry {
        name: "Breadcrumbs",
        slug: "breadcrumbs",
        category: Category::Navigation,
        description: "A trail of links.",
        alt_names: &[],
        tags: &["navigation"],
        widget: "breadcrumbs",
    };
    let selected = vec!["navigation".to_string(), "icon".to_string()];
    assert!(!matches_tags(&entry, &selected));
}

#[test]
fn test_empty_tag_set_matches_everything() {
    let entries = sample_entries();
    for entry in &entries {
        assert!(matches_tags(entry, &[]));
    }
}

// =============================================================================
// Text criterion - asymmetric matching
// =============================================================================

#[test]
fn test_query_is_case_insensitive() {
    let entries = sample_entries();
    let upper = FilterState {
        query: "TOGGLE".to_string(),
        ..Default::default()
    };
    let lower = FilterState {
        query: "toggle".to_string(),
        ..Default::default()
    };
    let a: Vec<&str> = apply(&entries, &upper).iter().map(|e| e.slug).collect();
    let b: Vec<&str> = apply(&entries, &lower).iter().map(|e| e.slug).collect();
    assert_eq!(a, b);
    assert!(a.contains(&"toggle-switch"));
}

#[test]
fn test_name_matches_loose_substring() {
    let entries = sample_entries();
    // "ham" is not a word boundary in "Hamburger" and must still match
    assert!(matches_query(&entries[0], "ham"));
    assert!(matches_query(&entries[0], "urger men"));
}

#[test]
fn test_description_matches_substring() {
    let entries = sample_entries();
    assert!(matches_query(&entries[1], "on/off"));
}

#[test]
fn test_alias_matches_whole_query_substring() {
    let entries = sample_entries();
    // "sandwich" only appears in an alt name
    assert!(matches_query(&entries[0], "sandwich"));
    assert!(matches_query(&entries[2], "snack"));
}

#[test]
fn test_tag_matches_per_token() {
    let entries = sample_entries();
    // Neither "mobile icon" nor "icon mobile" is a substring of any single
    // field, but each token is a substring of a tag
    assert!(matches_query(&entries[0], "mobile icon"));
    assert!(matches_query(&entries[0], "icon mobile"));
    // A token that is a substring of a tag matches too
    assert!(matches_query(&entries[0], "mob"));
}

#[test]
fn test_query_with_no_match_excludes() {
    let entries = sample_entries();
    assert!(!matches_query(&entries[0], "carousel"));
}

// =============================================================================
// Graceful degradation
// =============================================================================

#[test]
fn test_whitespace_query_matches_everything() {
    let entries = sample_entries();
    let state = FilterState {
        query: "   \t ".to_string(),
        ..Default::default()
    };
    assert_eq!(apply(&entries, &state).len(), entries.len());
}

#[test]
fn test_toggle_tag_round_trip() {
    let mut state = FilterState::default();
    state.toggle_tag("mobile");
    assert_eq!(state.tags, vec!["mobile".to_string()]);
    state.toggle_tag("icon");
    state.toggle_tag("mobile");
    assert_eq!(state.tags, vec!["icon".to_string()]);
}

#[test]
fn test_spec_worked_example() {
    let entries = sample_entries();
    let hamburger = &entries[0];

    // Query "ham" -> included (substring of name)
    assert!(matches_query(hamburger, "ham"));
    // Query "mobile" -> included (tag token match)
    assert!(matches_query(hamburger, "mobile"));
    // Category "input" with no other filters -> excluded
    let state = FilterState {
        category: Some(Category::Input),
        ..Default::default()
    };
    assert!(!apply(&entries, &state).iter().any(|e| e.slug == "hamburger-menu"));
}
