//! Demo widgets: one self-contained preview per cataloged pattern.
//!
//! # Widgets
//!
//! - [`DemoWidget`] - Trait for defining previewable demos
//! - [`resolve`] / [`render_demo`] - Explicit id -> widget registry lookup
//! - [`placeholder`] - Panel rendered when an entry's demo is missing
//!
//! Demos are stateless previews: each renders its pattern's states and
//! variants as static elements against the active color scheme, with no
//! app state and no cross-widget dependencies. Entries reference demos by
//! id through the registry map below; nothing is resolved by convention,
//! and a missing id degrades to the placeholder rather than failing the
//! page.
//!
//! ```ignore
//! // Define a demo
//! use crate::layout::{demo_container, demo_item, demo_section};
//! use crate::widgets::DemoWidget;
//!
//! pub struct MyPatternDemo;
//!
//! impl DemoWidget for MyPatternDemo {
//!     fn id(&self) -> &'static str { "my-pattern" }
//!     fn name(&self) -> &'static str { "My Pattern" }
//!     fn render(&self, colors: &ColorScheme) -> AnyElement {
//!         demo_container(colors)
//!             .child(demo_section("States", colors)
//!                 .child(demo_item("Default", my_pattern(colors), colors)))
//!             .into_any_element()
//!     }
//! }
//!
//! // Register it in all_widgets() below
//! ```

mod animation;
mod container;
mod content;
mod data;
mod feedback;
mod input;
mod navigation;

use std::sync::OnceLock;

use gpui::*;

use crate::theme::ColorScheme;

/// A demo renders one cataloged pattern in its various states for preview
pub trait DemoWidget: Send + Sync {
    /// Stable id referenced by catalog entries
    fn id(&self) -> &'static str;
    fn name(&self) -> &'static str;
    fn render(&self, colors: &ColorScheme) -> AnyElement;
}

static WIDGETS: OnceLock<Vec<Box<dyn DemoWidget>>> = OnceLock::new();

/// All registered demos. Manual registration, same approach as the
/// catalog registry: one list, built once.
fn all_widgets() -> &'static [Box<dyn DemoWidget>] {
    WIDGETS.get_or_init(|| {
        vec![
            // Navigation
            Box::new(navigation::HamburgerMenuDemo),
            Box::new(navigation::BreadcrumbsDemo),
            Box::new(navigation::TabsDemo),
            Box::new(navigation::PaginationDemo),
            Box::new(navigation::StepperDemo),
            // Input
            Box::new(input::ButtonDemo),
            Box::new(input::ToggleSwitchDemo),
            Box::new(input::SliderDemo),
            Box::new(input::CheckboxDemo),
            Box::new(input::RatingDemo),
            Box::new(input::SegmentedControlDemo),
            // Feedback
            Box::new(feedback::ToastDemo),
            Box::new(feedback::TooltipDemo),
            Box::new(feedback::ModalDemo),
            Box::new(feedback::ProgressBarDemo),
            Box::new(feedback::SkeletonDemo),
            Box::new(feedback::BadgeDemo),
            Box::new(feedback::BannerAlertDemo),
            // Content
            Box::new(content::CardDemo),
            Box::new(content::AvatarDemo),
            Box::new(content::AccordionDemo),
            Box::new(content::CarouselDemo),
            Box::new(content::TimelineDemo),
            // Animation
            Box::new(animation::MarqueeDemo),
            Box::new(animation::TypewriterDemo),
            Box::new(animation::PulseDemo),
            // Container
            Box::new(container::PopoverDemo),
            Box::new(container::DrawerDemo),
            Box::new(container::CollapsiblePanelDemo),
            // Data
            Box::new(data::TableDemo),
            Box::new(data::StatCardDemo),
            Box::new(data::ProgressRingDemo),
            Box::new(data::BarChartDemo),
            Box::new(data::TreeViewDemo),
        ]
    })
}

/// Look up a demo by id. Absence means the demo hasn't been built.
pub fn resolve(id: &str) -> Option<&'static dyn DemoWidget> {
    all_widgets().iter().find(|w| w.id() == id).map(|w| w.as_ref())
}

/// Render the demo for `id`, or the placeholder if it doesn't resolve.
pub fn render_demo(id: &str, colors: &ColorScheme) -> AnyElement {
    match resolve(id) {
        Some(widget) => widget.render(colors),
        None => placeholder(id, colors),
    }
}

/// Panel shown when an entry's widget id has no registered demo
pub fn placeholder(id: &str, colors: &ColorScheme) -> AnyElement {
    div()
        .flex()
        .flex_col()
        .items_center()
        .justify_center()
        .gap_2()
        .w_full()
        .h(px(180.))
        .rounded_md()
        .border_1()
        .border_color(rgb(colors.ui.border))
        .bg(rgb(colors.background.card))
        .child(
            div()
                .text_sm()
                .text_color(rgb(colors.text.muted))
                .child("Demo unavailable"),
        )
        .child(
            div()
                .text_xs()
                .text_color(rgb(colors.text.dimmed))
                .child(format!("no widget registered for \"{}\"", id)),
        )
        .into_any_element()
}

#[cfg(test)]
mod tests {
    use super::{all_widgets, resolve};
    use std::collections::HashSet;

    #[test]
    fn test_widget_ids_are_unique() {
        let mut seen = HashSet::new();
        for widget in all_widgets() {
            assert!(seen.insert(widget.id()), "duplicate widget id: {}", widget.id());
        }
    }

    #[test]
    fn test_resolve_known_widget() {
        let widget = resolve("toggle-switch").expect("toggle switch demo registered");
        assert_eq!(widget.name(), "Toggle Switch");
    }

    #[test]
    fn test_resolve_unknown_widget_is_none() {
        assert!(resolve("does-not-exist").is_none());
        assert!(resolve("").is_none());
    }

    #[test]
    fn test_registered_ids_match_catalog_entries() {
        // Every registered demo must belong to a real catalog entry;
        // the reverse is allowed (entries may not have demos yet)
        let entry_ids: HashSet<&str> = crate::catalog::all().iter().map(|e| e.widget).collect();
        for widget in all_widgets() {
            assert!(
                entry_ids.contains(widget.id()),
                "widget {} has no catalog entry",
                widget.id()
            );
        }
    }
}
