//! Feedback pattern demos: toast, tooltip, modal, progress bar, skeleton,
//! badge, banner alert.

use gpui::*;

use crate::layout::{demo_container, demo_divider, demo_item, demo_section};
use crate::theme::ColorScheme;
use crate::widgets::DemoWidget;

// =============================================================================
// Toast
// =============================================================================

pub struct ToastDemo;

fn toast(icon: &'static str, accent: u32, message: &str, colors: &ColorScheme) -> Div {
    div()
        .flex()
        .flex_row()
        .items_center()
        .gap_2()
        .px_3()
        .py_2()
        .rounded_md()
        .shadow_md()
        .border_1()
        .border_color(rgb(colors.ui.border))
        .bg(rgb(colors.background.card))
        .child(div().text_sm().text_color(rgb(accent)).child(icon))
        .child(
            div()
                .text_sm()
                .text_color(rgb(colors.text.secondary))
                .child(message.to_string()),
        )
        .child(
            div()
                .text_xs()
                .cursor_pointer()
                .text_color(rgb(colors.text.dimmed))
                .child("✕"),
        )
}

impl DemoWidget for ToastDemo {
    fn id(&self) -> &'static str {
        "toast"
    }

    fn name(&self) -> &'static str {
        "Toast"
    }

    fn render(&self, colors: &ColorScheme) -> AnyElement {
        demo_container(colors)
            .child(
                demo_section("Variants", colors)
                    .child(demo_item(
                        "Success",
                        toast("✓", colors.ui.success, "Profile saved", colors),
                        colors,
                    ))
                    .child(demo_item(
                        "Warning",
                        toast("⚠", colors.ui.warning, "Unsaved changes", colors),
                        colors,
                    ))
                    .child(demo_item(
                        "Error",
                        toast("✕", colors.ui.error, "Upload failed", colors),
                        colors,
                    ))
                    .child(demo_item(
                        "Info",
                        toast("ℹ", colors.ui.info, "New version available", colors),
                        colors,
                    )),
            )
            .into_any_element()
    }
}

// =============================================================================
// Tooltip
// =============================================================================

pub struct TooltipDemo;

fn tooltip_pair(colors: &ColorScheme) -> Div {
    div()
        .flex()
        .flex_col()
        .items_center()
        .gap_1()
        .child(
            div()
                .px_2()
                .py_1()
                .rounded_sm()
                .text_xs()
                .bg(rgb(colors.text.primary))
                .text_color(rgb(colors.background.main))
                .child("Copy to clipboard"),
        )
        // Caret pointing at the anchor below
        .child(div().text_xs().text_color(rgb(colors.text.primary)).child("▼"))
        .child(
            div()
                .px_3()
                .py_1()
                .rounded_md()
                .border_1()
                .border_color(rgb(colors.ui.border))
                .text_sm()
                .text_color(rgb(colors.text.secondary))
                .child("Copy"),
        )
}

impl DemoWidget for TooltipDemo {
    fn id(&self) -> &'static str {
        "tooltip"
    }

    fn name(&self) -> &'static str {
        "Tooltip"
    }

    fn render(&self, colors: &ColorScheme) -> AnyElement {
        demo_container(colors)
            .child(
                demo_section("On hover", colors)
                    .child(demo_item("Above anchor", tooltip_pair(colors), colors)),
            )
            .into_any_element()
    }
}

// =============================================================================
// Modal
// =============================================================================

pub struct ModalDemo;

impl DemoWidget for ModalDemo {
    fn id(&self) -> &'static str {
        "modal"
    }

    fn name(&self) -> &'static str {
        "Modal"
    }

    fn render(&self, colors: &ColorScheme) -> AnyElement {
        let backdrop = div()
            .w(px(360.))
            .h(px(220.))
            .rounded_md()
            .flex()
            .items_center()
            .justify_center()
            .bg(rgba(0x00000088))
            .child(
                div()
                    .w(px(260.))
                    .rounded_md()
                    .shadow_md()
                    .bg(rgb(colors.background.card))
                    .border_1()
                    .border_color(rgb(colors.ui.border))
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .px_3()
                            .py_2()
                            .border_b_1()
                            .border_color(rgb(colors.ui.border))
                            .text_sm()
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(rgb(colors.text.primary))
                            .child("Delete item?"),
                    )
                    .child(
                        div()
                            .px_3()
                            .py_2()
                            .text_sm()
                            .text_color(rgb(colors.text.tertiary))
                            .child("This action cannot be undone."),
                    )
                    .child(
                        div()
                            .px_3()
                            .py_2()
                            .flex()
                            .flex_row()
                            .justify_end()
                            .gap_2()
                            .child(
                                div()
                                    .px_3()
                                    .py_1()
                                    .rounded_md()
                                    .text_sm()
                                    .cursor_pointer()
                                    .text_color(rgb(colors.text.muted))
                                    .child("Cancel"),
                            )
                            .child(
                                div()
                                    .px_3()
                                    .py_1()
                                    .rounded_md()
                                    .text_sm()
                                    .cursor_pointer()
                                    .bg(rgb(colors.ui.error))
                                    .text_color(rgb(0xffffff))
                                    .child("Delete"),
                            ),
                    ),
            );

        demo_container(colors)
            .child(
                demo_section("Over dimmed backdrop", colors)
                    .child(demo_item("Confirm dialog", backdrop, colors)),
            )
            .into_any_element()
    }
}

// =============================================================================
// Progress Bar
// =============================================================================

pub struct ProgressBarDemo;

fn progress(value: f32, colors: &ColorScheme) -> Div {
    let width = 220.0_f32;
    div()
        .w(px(width))
        .h(px(8.))
        .rounded_full()
        .bg(rgb(colors.ui.border))
        .overflow_hidden()
        .child(
            div()
                .w(px(width * (value / 100.0).clamp(0.0, 1.0)))
                .h_full()
                .rounded_full()
                .bg(rgb(colors.accent.selected)),
        )
}

impl DemoWidget for ProgressBarDemo {
    fn id(&self) -> &'static str {
        "progress-bar"
    }

    fn name(&self) -> &'static str {
        "Progress Bar"
    }

    fn render(&self, colors: &ColorScheme) -> AnyElement {
        demo_container(colors)
            .child(
                demo_section("Completion", colors)
                    .child(demo_item("10%", progress(10.0, colors), colors))
                    .child(demo_item("45%", progress(45.0, colors), colors))
                    .child(demo_item("Done", progress(100.0, colors), colors)),
            )
            .into_any_element()
    }
}

// =============================================================================
// Skeleton
// =============================================================================

pub struct SkeletonDemo;

fn skeleton_block(width: f32, height: f32, colors: &ColorScheme) -> Div {
    div()
        .w(px(width))
        .h(px(height))
        .rounded_sm()
        .bg(rgb(colors.accent.selected_subtle))
}

impl DemoWidget for SkeletonDemo {
    fn id(&self) -> &'static str {
        "skeleton"
    }

    fn name(&self) -> &'static str {
        "Skeleton"
    }

    fn render(&self, colors: &ColorScheme) -> AnyElement {
        let card_shape = div()
            .flex()
            .flex_row()
            .gap_3()
            .child(
                div()
                    .w(px(40.))
                    .h(px(40.))
                    .rounded_full()
                    .bg(rgb(colors.accent.selected_subtle)),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(skeleton_block(180.0, 10.0, colors))
                    .child(skeleton_block(120.0, 10.0, colors))
                    .child(skeleton_block(200.0, 10.0, colors)),
            );

        demo_container(colors)
            .child(
                demo_section("Loading shapes", colors)
                    .child(demo_item("Text lines", card_shape, colors))
                    .child(demo_item(
                        "Image block",
                        skeleton_block(220.0, 80.0, colors),
                        colors,
                    )),
            )
            .into_any_element()
    }
}

// =============================================================================
// Badge
// =============================================================================

pub struct BadgeDemo;

impl DemoWidget for BadgeDemo {
    fn id(&self) -> &'static str {
        "badge"
    }

    fn name(&self) -> &'static str {
        "Badge"
    }

    fn render(&self, colors: &ColorScheme) -> AnyElement {
        let bell_with_count = div()
            .relative()
            .w(px(32.))
            .h(px(32.))
            .flex()
            .items_center()
            .justify_center()
            .rounded_md()
            .border_1()
            .border_color(rgb(colors.ui.border))
            .child(div().text_lg().child("🔔"))
            .child(
                div()
                    .absolute()
                    .top_0()
                    .right_0()
                    .min_w(px(16.))
                    .h(px(16.))
                    .px(px(4.))
                    .rounded_full()
                    .flex()
                    .items_center()
                    .justify_center()
                    .bg(rgb(colors.ui.error))
                    .text_xs()
                    .text_color(rgb(0xffffff))
                    .child("3"),
            );

        let status_dot = div()
            .flex()
            .flex_row()
            .items_center()
            .gap_2()
            .child(div().w(px(8.)).h(px(8.)).rounded_full().bg(rgb(colors.ui.success)))
            .child(
                div()
                    .text_sm()
                    .text_color(rgb(colors.text.secondary))
                    .child("Online"),
            );

        demo_container(colors)
            .child(
                demo_section("Variants", colors)
                    .child(demo_item("Count", bell_with_count, colors))
                    .child(demo_item("Status dot", status_dot, colors)),
            )
            .into_any_element()
    }
}

// =============================================================================
// Banner Alert
// =============================================================================

pub struct BannerAlertDemo;

fn banner(accent: u32, icon: &'static str, message: &str, colors: &ColorScheme) -> Div {
    div()
        .w(px(340.))
        .flex()
        .flex_row()
        .items_center()
        .gap_2()
        .px_3()
        .py_2()
        .rounded_md()
        .border_1()
        .border_color(rgb(accent))
        .child(div().text_sm().text_color(rgb(accent)).child(icon))
        .child(
            div()
                .text_sm()
                .text_color(rgb(colors.text.secondary))
                .child(message.to_string()),
        )
}

impl DemoWidget for BannerAlertDemo {
    fn id(&self) -> &'static str {
        "banner-alert"
    }

    fn name(&self) -> &'static str {
        "Banner Alert"
    }

    fn render(&self, colors: &ColorScheme) -> AnyElement {
        demo_container(colors)
            .child(
                demo_section("Severities", colors)
                    .child(demo_item(
                        "Info",
                        banner(colors.ui.info, "ℹ", "Maintenance window on Sunday.", colors),
                        colors,
                    ))
                    .child(demo_item(
                        "Warning",
                        banner(colors.ui.warning, "⚠", "Your trial ends in 3 days.", colors),
                        colors,
                    ))
                    .child(demo_item(
                        "Error",
                        banner(colors.ui.error, "✕", "Payment could not be processed.", colors),
                        colors,
                    )),
            )
            .child(demo_divider(colors))
            .child(
                demo_section("Success", colors).child(demo_item(
                    "Confirmation",
                    banner(colors.ui.success, "✓", "Your changes are live.", colors),
                    colors,
                )),
            )
            .into_any_element()
    }
}
