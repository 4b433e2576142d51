//! Container pattern demos: popover, drawer, collapsible panel.

use gpui::*;

use crate::layout::{demo_container, demo_item, demo_section};
use crate::theme::ColorScheme;
use crate::widgets::DemoWidget;

// =============================================================================
// Popover
// =============================================================================

pub struct PopoverDemo;

fn popover_panel(colors: &ColorScheme) -> Div {
    div()
        .w(px(180.))
        .rounded_md()
        .shadow_md()
        .border_1()
        .border_color(rgb(colors.ui.border))
        .bg(rgb(colors.background.card))
        .flex()
        .flex_col()
        .py_1()
        .children(["Rename", "Duplicate", "Move to…"].map(|item| {
            div()
                .px_3()
                .py_1()
                .text_sm()
                .cursor_pointer()
                .text_color(rgb(colors.text.secondary))
                .child(item)
        }))
        .child(div().h(px(1.)).w_full().bg(rgb(colors.ui.border)).my_1())
        .child(
            div()
                .px_3()
                .py_1()
                .text_sm()
                .cursor_pointer()
                .text_color(rgb(colors.ui.error))
                .child("Delete"),
        )
}

impl DemoWidget for PopoverDemo {
    fn id(&self) -> &'static str {
        "popover"
    }

    fn name(&self) -> &'static str {
        "Popover"
    }

    fn render(&self, colors: &ColorScheme) -> AnyElement {
        let anchored = div()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .px_3()
                    .py_1()
                    .rounded_md()
                    .border_1()
                    .border_color(rgb(colors.ui.border))
                    .text_sm()
                    .cursor_pointer()
                    .text_color(rgb(colors.text.secondary))
                    .child("Actions ▾"),
            )
            .child(popover_panel(colors));

        demo_container(colors)
            .child(
                demo_section("Anchored below trigger", colors)
                    .child(demo_item("Menu popover", anchored, colors)),
            )
            .into_any_element()
    }
}

// =============================================================================
// Drawer
// =============================================================================

pub struct DrawerDemo;

impl DemoWidget for DrawerDemo {
    fn id(&self) -> &'static str {
        "drawer"
    }

    fn name(&self) -> &'static str {
        "Drawer"
    }

    fn render(&self, colors: &ColorScheme) -> AnyElement {
        let viewport = div()
            .w(px(340.))
            .h(px(200.))
            .rounded_md()
            .overflow_hidden()
            .border_1()
            .border_color(rgb(colors.ui.border))
            .flex()
            .flex_row()
            // Side panel slides over dimmed page content
            .child(
                div()
                    .w(px(140.))
                    .h_full()
                    .bg(rgb(colors.background.card))
                    .border_r_1()
                    .border_color(rgb(colors.ui.border))
                    .flex()
                    .flex_col()
                    .py_2()
                    .children(["Inbox", "Starred", "Archive", "Trash"].map(|item| {
                        div()
                            .px_3()
                            .py_1()
                            .text_sm()
                            .cursor_pointer()
                            .text_color(rgb(colors.text.secondary))
                            .child(item)
                    })),
            )
            .child(
                div()
                    .flex_1()
                    .h_full()
                    .bg(rgba(0x00000055))
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(
                        div()
                            .text_xs()
                            .text_color(rgb(colors.text.muted))
                            .child("page content (dimmed)"),
                    ),
            );

        demo_container(colors)
            .child(demo_section("Open from the left edge", colors).child(demo_item("Drawer", viewport, colors)))
            .into_any_element()
    }
}

// =============================================================================
// Collapsible Panel
// =============================================================================

pub struct CollapsiblePanelDemo;

fn panel(title: &str, open: bool, colors: &ColorScheme) -> Div {
    let header = div()
        .flex()
        .flex_row()
        .items_center()
        .justify_between()
        .px_3()
        .py_2()
        .cursor_pointer()
        .bg(rgb(colors.background.card))
        .child(
            div()
                .text_sm()
                .font_weight(FontWeight::MEDIUM)
                .text_color(rgb(colors.text.primary))
                .child(title.to_string()),
        )
        .child(
            div()
                .text_xs()
                .text_color(rgb(colors.text.muted))
                .child(if open { "▾" } else { "▸" }),
        );

    let body = open.then(|| {
        div()
            .px_3()
            .py_2()
            .border_t_1()
            .border_color(rgb(colors.ui.border))
            .text_sm()
            .text_color(rgb(colors.text.tertiary))
            .child("Panel body content sits here and folds away with the header.")
    });

    div()
        .w(px(300.))
        .rounded_md()
        .overflow_hidden()
        .border_1()
        .border_color(rgb(colors.ui.border))
        .flex()
        .flex_col()
        .child(header)
        .children(body)
}

impl DemoWidget for CollapsiblePanelDemo {
    fn id(&self) -> &'static str {
        "collapsible-panel"
    }

    fn name(&self) -> &'static str {
        "Collapsible Panel"
    }

    fn render(&self, colors: &ColorScheme) -> AnyElement {
        demo_container(colors)
            .child(
                demo_section("States", colors)
                    .child(demo_item("Collapsed", panel("Advanced settings", false, colors), colors))
                    .child(demo_item("Expanded", panel("Advanced settings", true, colors), colors)),
            )
            .into_any_element()
    }
}
