//! Routing for the two address shapes the catalog serves:
//! `categories/<category>` and `categories/<category>/<slug>`.
//!
//! Parsing validates against the registry, so an unknown category or an
//! unknown `(category, slug)` pair comes back as [`Route::NotFound`] - a
//! renderable state with navigation back to known categories, never an
//! error.

use crate::catalog::{self, Category};

/// Current location within the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The full catalog across all categories
    Home,
    /// One category's listing page
    Category(Category),
    /// One entry's detail page
    Detail { category: Category, slug: String },
    /// Anything that didn't resolve; keeps the requested path for display
    NotFound { requested: String },
}

impl Route {
    /// Parse a path-style route string.
    ///
    /// Accepts leading/trailing slashes. The empty path is `Home`.
    pub fn parse(path: &str) -> Route {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["categories", category] => match Category::parse(category) {
                Some(category) => Route::Category(category),
                None => Route::not_found(path),
            },
            ["categories", category, slug] => match Category::parse(category) {
                Some(category) if catalog::find(category, slug).is_some() => Route::Detail {
                    category,
                    slug: (*slug).to_string(),
                },
                _ => Route::not_found(path),
            },
            _ => Route::not_found(path),
        }
    }

    fn not_found(path: &str) -> Route {
        Route::NotFound {
            requested: path.trim_matches('/').to_string(),
        }
    }

    /// Canonical path string for display in the toolbar
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Category(category) => format!("/categories/{}", category),
            Route::Detail { category, slug } => format!("/categories/{}/{}", category, slug),
            Route::NotFound { requested } => format!("/{}", requested),
        }
    }

    /// The category this route is scoped to, if any
    pub fn category(&self) -> Option<Category> {
        match self {
            Route::Category(category) => Some(*category),
            Route::Detail { category, .. } => Some(*category),
            _ => None,
        }
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::Home
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_is_home() {
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/"), Route::Home);
    }

    #[test]
    fn test_category_listing_route() {
        assert_eq!(
            Route::parse("categories/navigation"),
            Route::Category(Category::Navigation)
        );
        // Slashes are tolerated on both ends
        assert_eq!(
            Route::parse("/categories/feedback/"),
            Route::Category(Category::Feedback)
        );
    }

    #[test]
    fn test_detail_route_for_known_entry() {
        let route = Route::parse("categories/navigation/hamburger-menu");
        assert_eq!(
            route,
            Route::Detail {
                category: Category::Navigation,
                slug: "hamburger-menu".to_string(),
            }
        );
        assert_eq!(route.path(), "/categories/navigation/hamburger-menu");
    }

    #[test]
    fn test_unknown_category_is_not_found() {
        let route = Route::parse("categories/gadgets");
        assert!(matches!(route, Route::NotFound { .. }));
    }

    #[test]
    fn test_unknown_slug_is_not_found() {
        let route = Route::parse("categories/navigation/does-not-exist");
        assert_eq!(
            route,
            Route::NotFound {
                requested: "categories/navigation/does-not-exist".to_string(),
            }
        );
    }

    #[test]
    fn test_slug_in_wrong_category_is_not_found() {
        // Entry exists, but not under this category
        let route = Route::parse("categories/data/hamburger-menu");
        assert!(matches!(route, Route::NotFound { .. }));
    }

    #[test]
    fn test_garbage_path_is_not_found() {
        assert!(matches!(Route::parse("foo/bar/baz/qux"), Route::NotFound { .. }));
        assert!(matches!(Route::parse("categories"), Route::NotFound { .. }));
    }

    #[test]
    fn test_route_category_accessor() {
        assert_eq!(
            Route::parse("categories/input").category(),
            Some(Category::Input)
        );
        assert_eq!(Route::Home.category(), None);
    }
}
