//! Animation pattern demos: marquee, typewriter, pulse.
//!
//! Demos are static previews, so motion is shown as representative frames
//! rather than running timers.

use gpui::*;

use crate::layout::{demo_container, demo_item, demo_section};
use crate::theme::ColorScheme;
use crate::widgets::DemoWidget;

// =============================================================================
// Marquee
// =============================================================================

pub struct MarqueeDemo;

fn marquee_frame(offset: f32, colors: &ColorScheme) -> Div {
    div()
        .w(px(260.))
        .overflow_hidden()
        .rounded_sm()
        .border_1()
        .border_color(rgb(colors.ui.border))
        .py_1()
        .child(
            div()
                .ml(px(offset))
                .text_sm()
                .text_color(rgb(colors.text.secondary))
                .child("BREAKING · Catalog reaches 50 patterns · "),
        )
}

impl DemoWidget for MarqueeDemo {
    fn id(&self) -> &'static str {
        "marquee"
    }

    fn name(&self) -> &'static str {
        "Marquee"
    }

    fn render(&self, colors: &ColorScheme) -> AnyElement {
        demo_container(colors)
            .child(
                demo_section("Scroll frames", colors)
                    .child(demo_item("t = 0", marquee_frame(0.0, colors), colors))
                    .child(demo_item("t + 1s", marquee_frame(-60.0, colors), colors))
                    .child(demo_item("t + 2s", marquee_frame(-120.0, colors), colors)),
            )
            .into_any_element()
    }
}

// =============================================================================
// Typewriter
// =============================================================================

pub struct TypewriterDemo;

fn typed(text: &str, colors: &ColorScheme) -> Div {
    div()
        .flex()
        .flex_row()
        .items_center()
        .child(
            div()
                .text_sm()
                .text_color(rgb(colors.text.primary))
                .child(text.to_string()),
        )
        // Blinking caret, frozen in its visible phase
        .child(div().w(px(2.)).h(px(14.)).ml(px(1.)).bg(rgb(colors.accent.selected)))
}

impl DemoWidget for TypewriterDemo {
    fn id(&self) -> &'static str {
        "typewriter"
    }

    fn name(&self) -> &'static str {
        "Typewriter"
    }

    fn render(&self, colors: &ColorScheme) -> AnyElement {
        demo_container(colors)
            .child(
                demo_section("Reveal frames", colors)
                    .child(demo_item("Start", typed("Hel", colors), colors))
                    .child(demo_item("Midway", typed("Hello, wor", colors), colors))
                    .child(demo_item("Complete", typed("Hello, world.", colors), colors)),
            )
            .into_any_element()
    }
}

// =============================================================================
// Pulse
// =============================================================================

pub struct PulseDemo;

fn pulse_frame(halo: f32, colors: &ColorScheme) -> Div {
    div()
        .w(px(40.))
        .h(px(40.))
        .flex()
        .items_center()
        .justify_center()
        .child(
            div()
                .w(px(halo))
                .h(px(halo))
                .rounded_full()
                .bg(rgb(colors.accent.selected))
                .opacity(0.25)
                .flex()
                .items_center()
                .justify_center()
                .child(
                    div()
                        .w(px(12.))
                        .h(px(12.))
                        .rounded_full()
                        .bg(rgb(colors.accent.selected)),
                ),
        )
}

impl DemoWidget for PulseDemo {
    fn id(&self) -> &'static str {
        "pulse"
    }

    fn name(&self) -> &'static str {
        "Pulse"
    }

    fn render(&self, colors: &ColorScheme) -> AnyElement {
        demo_container(colors)
            .child(
                demo_section("Halo frames", colors)
                    .child(demo_item("Rest", pulse_frame(16.0, colors), colors))
                    .child(demo_item("Expanding", pulse_frame(28.0, colors), colors))
                    .child(demo_item("Peak", pulse_frame(40.0, colors), colors)),
            )
            .into_any_element()
    }
}
