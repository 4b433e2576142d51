//! Navigation pattern demos: hamburger menu, breadcrumbs, tabs,
//! pagination, stepper.

use gpui::*;

use crate::layout::{demo_container, demo_divider, demo_item, demo_section};
use crate::theme::ColorScheme;
use crate::widgets::DemoWidget;

// =============================================================================
// Hamburger Menu
// =============================================================================

pub struct HamburgerMenuDemo;

fn hamburger_icon(colors: &ColorScheme) -> Div {
    div()
        .w(px(28.))
        .h(px(24.))
        .p(px(4.))
        .rounded_sm()
        .cursor_pointer()
        .flex()
        .flex_col()
        .justify_between()
        .children((0..3).map(|_| {
            div()
                .w_full()
                .h(px(2.))
                .rounded_full()
                .bg(rgb(colors.text.secondary))
        }))
}

fn menu_panel(colors: &ColorScheme) -> Div {
    div()
        .w(px(160.))
        .rounded_md()
        .border_1()
        .border_color(rgb(colors.ui.border))
        .bg(rgb(colors.background.card))
        .flex()
        .flex_col()
        .py_1()
        .children(["Home", "Catalog", "About", "Contact"].map(|item| {
            div()
                .px_3()
                .py_1()
                .text_sm()
                .cursor_pointer()
                .text_color(rgb(colors.text.secondary))
                .child(item)
        }))
}

impl DemoWidget for HamburgerMenuDemo {
    fn id(&self) -> &'static str {
        "hamburger-menu"
    }

    fn name(&self) -> &'static str {
        "Hamburger Menu"
    }

    fn render(&self, colors: &ColorScheme) -> AnyElement {
        demo_container(colors)
            .child(
                demo_section("Collapsed", colors)
                    .child(demo_item("Trigger", hamburger_icon(colors), colors)),
            )
            .child(demo_divider(colors))
            .child(
                demo_section("Expanded", colors).child(demo_item(
                    "Open menu",
                    div()
                        .flex()
                        .flex_col()
                        .gap_2()
                        .child(hamburger_icon(colors))
                        .child(menu_panel(colors)),
                    colors,
                )),
            )
            .into_any_element()
    }
}

// =============================================================================
// Breadcrumbs
// =============================================================================

pub struct BreadcrumbsDemo;

fn breadcrumb_trail(segments: &[&'static str], colors: &ColorScheme) -> Div {
    let last = segments.len().saturating_sub(1);
    div()
        .flex()
        .flex_row()
        .items_center()
        .gap_1()
        .children(segments.iter().enumerate().flat_map(|(i, segment)| {
            let crumb = if i == last {
                div()
                    .text_sm()
                    .text_color(rgb(colors.text.primary))
                    .child(*segment)
            } else {
                div()
                    .text_sm()
                    .cursor_pointer()
                    .text_color(rgb(colors.accent.selected))
                    .child(*segment)
            };
            let mut parts = vec![crumb];
            if i != last {
                parts.push(div().text_sm().text_color(rgb(colors.text.dimmed)).child("/"));
            }
            parts
        }))
}

impl DemoWidget for BreadcrumbsDemo {
    fn id(&self) -> &'static str {
        "breadcrumbs"
    }

    fn name(&self) -> &'static str {
        "Breadcrumbs"
    }

    fn render(&self, colors: &ColorScheme) -> AnyElement {
        demo_container(colors)
            .child(
                demo_section("Depths", colors)
                    .child(demo_item(
                        "Two levels",
                        breadcrumb_trail(&["Home", "Catalog"], colors),
                        colors,
                    ))
                    .child(demo_item(
                        "Deep path",
                        breadcrumb_trail(&["Home", "Catalog", "Navigation", "Breadcrumbs"], colors),
                        colors,
                    )),
            )
            .into_any_element()
    }
}

// =============================================================================
// Tabs
// =============================================================================

pub struct TabsDemo;

fn tab_row(selected: usize, colors: &ColorScheme) -> Div {
    let labels = ["Overview", "Specs", "Reviews"];
    div()
        .flex()
        .flex_col()
        .child(
            div()
                .flex()
                .flex_row()
                .gap_4()
                .border_b_1()
                .border_color(rgb(colors.ui.border))
                .children(labels.iter().enumerate().map(|(i, label)| {
                    let base = div().pb_1().text_sm().cursor_pointer().child(label.to_string());
                    if i == selected {
                        base.text_color(rgb(colors.accent.selected))
                            .border_b_1()
                            .border_color(rgb(colors.accent.selected))
                    } else {
                        base.text_color(rgb(colors.text.muted))
                    }
                })),
        )
        .child(
            div()
                .py_2()
                .text_sm()
                .text_color(rgb(colors.text.tertiary))
                .child(format!("{} panel content", labels[selected])),
        )
}

impl DemoWidget for TabsDemo {
    fn id(&self) -> &'static str {
        "tabs"
    }

    fn name(&self) -> &'static str {
        "Tabs"
    }

    fn render(&self, colors: &ColorScheme) -> AnyElement {
        demo_container(colors)
            .child(
                demo_section("Selected tab", colors)
                    .child(demo_item("First", tab_row(0, colors), colors))
                    .child(demo_item("Second", tab_row(1, colors), colors)),
            )
            .into_any_element()
    }
}

// =============================================================================
// Pagination
// =============================================================================

pub struct PaginationDemo;

fn pager(current: usize, colors: &ColorScheme) -> Div {
    div()
        .flex()
        .flex_row()
        .items_center()
        .gap_1()
        .child(
            div()
                .px_2()
                .py_1()
                .text_sm()
                .cursor_pointer()
                .text_color(rgb(colors.text.muted))
                .child("‹"),
        )
        .children((1..=5).map(|page| {
            let base = div()
                .w(px(26.))
                .h(px(26.))
                .rounded_sm()
                .flex()
                .items_center()
                .justify_center()
                .text_sm()
                .cursor_pointer()
                .child(page.to_string());
            if page == current {
                base.bg(rgb(colors.accent.selected))
                    .text_color(rgb(colors.background.main))
            } else {
                base.text_color(rgb(colors.text.secondary))
            }
        }))
        .child(
            div()
                .px_2()
                .py_1()
                .text_sm()
                .cursor_pointer()
                .text_color(rgb(colors.text.muted))
                .child("›"),
        )
}

impl DemoWidget for PaginationDemo {
    fn id(&self) -> &'static str {
        "pagination"
    }

    fn name(&self) -> &'static str {
        "Pagination"
    }

    fn render(&self, colors: &ColorScheme) -> AnyElement {
        demo_container(colors)
            .child(
                demo_section("Pages", colors)
                    .child(demo_item("First page", pager(1, colors), colors))
                    .child(demo_item("Mid-range", pager(3, colors), colors)),
            )
            .into_any_element()
    }
}

// =============================================================================
// Stepper
// =============================================================================

pub struct StepperDemo;

fn stepper(completed: usize, colors: &ColorScheme) -> Div {
    let steps = ["Cart", "Shipping", "Payment", "Done"];
    div()
        .flex()
        .flex_row()
        .items_center()
        .gap_2()
        .children(steps.iter().enumerate().flat_map(|(i, label)| {
            let dot = if i < completed {
                div()
                    .w(px(22.))
                    .h(px(22.))
                    .rounded_full()
                    .flex()
                    .items_center()
                    .justify_center()
                    .bg(rgb(colors.accent.selected))
                    .text_xs()
                    .text_color(rgb(colors.background.main))
                    .child("✓")
            } else if i == completed {
                div()
                    .w(px(22.))
                    .h(px(22.))
                    .rounded_full()
                    .flex()
                    .items_center()
                    .justify_center()
                    .border_1()
                    .border_color(rgb(colors.accent.selected))
                    .text_xs()
                    .text_color(rgb(colors.accent.selected))
                    .child((i + 1).to_string())
            } else {
                div()
                    .w(px(22.))
                    .h(px(22.))
                    .rounded_full()
                    .flex()
                    .items_center()
                    .justify_center()
                    .border_1()
                    .border_color(rgb(colors.ui.border))
                    .text_xs()
                    .text_color(rgb(colors.text.muted))
                    .child((i + 1).to_string())
            };
            let step = div()
                .flex()
                .flex_row()
                .items_center()
                .gap_1()
                .child(dot)
                .child(
                    div()
                        .text_xs()
                        .text_color(rgb(colors.text.tertiary))
                        .child(label.to_string()),
                );
            let mut parts = vec![step];
            if i + 1 < steps.len() {
                parts.push(div().w(px(24.)).h(px(1.)).bg(rgb(colors.ui.border)));
            }
            parts
        }))
}

impl DemoWidget for StepperDemo {
    fn id(&self) -> &'static str {
        "stepper"
    }

    fn name(&self) -> &'static str {
        "Stepper"
    }

    fn render(&self, colors: &ColorScheme) -> AnyElement {
        demo_container(colors)
            .child(
                demo_section("Progress", colors)
                    .child(demo_item("Starting", stepper(0, colors), colors))
                    .child(demo_item("Halfway", stepper(2, colors), colors)),
            )
            .into_any_element()
    }
}
