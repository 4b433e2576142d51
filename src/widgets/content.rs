//! Content pattern demos: card, avatar, accordion, carousel, timeline.

use gpui::*;

use crate::layout::{demo_container, demo_divider, demo_item, demo_section};
use crate::theme::ColorScheme;
use crate::widgets::DemoWidget;

// =============================================================================
// Card
// =============================================================================

pub struct CardDemo;

impl DemoWidget for CardDemo {
    fn id(&self) -> &'static str {
        "card"
    }

    fn name(&self) -> &'static str {
        "Card"
    }

    fn render(&self, colors: &ColorScheme) -> AnyElement {
        let card = div()
            .w(px(240.))
            .rounded_md()
            .overflow_hidden()
            .border_1()
            .border_color(rgb(colors.ui.border))
            .bg(rgb(colors.background.card))
            .shadow_md()
            .flex()
            .flex_col()
            // Image area stand-in
            .child(div().w_full().h(px(90.)).bg(rgb(colors.accent.selected_subtle)))
            .child(
                div()
                    .p_3()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .text_sm()
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(rgb(colors.text.primary))
                            .child("Mountain cabin"),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(rgb(colors.text.tertiary))
                            .child("Quiet weekend escape above the tree line."),
                    )
                    .child(
                        div()
                            .pt_1()
                            .text_xs()
                            .cursor_pointer()
                            .text_color(rgb(colors.accent.selected))
                            .child("View details →"),
                    ),
            );

        demo_container(colors)
            .child(demo_section("Elevated", colors).child(demo_item("Media card", card, colors)))
            .into_any_element()
    }
}

// =============================================================================
// Avatar
// =============================================================================

pub struct AvatarDemo;

fn initials_avatar(initials: &str, size: f32, bg: u32, colors: &ColorScheme) -> Div {
    div()
        .w(px(size))
        .h(px(size))
        .rounded_full()
        .flex()
        .items_center()
        .justify_center()
        .bg(rgb(bg))
        .text_xs()
        .text_color(rgb(colors.background.main))
        .child(initials.to_string())
}

impl DemoWidget for AvatarDemo {
    fn id(&self) -> &'static str {
        "avatar"
    }

    fn name(&self) -> &'static str {
        "Avatar"
    }

    fn render(&self, colors: &ColorScheme) -> AnyElement {
        let sizes = div()
            .flex()
            .flex_row()
            .items_center()
            .gap_2()
            .child(initials_avatar("AK", 24.0, colors.accent.selected, colors))
            .child(initials_avatar("AK", 32.0, colors.accent.selected, colors))
            .child(initials_avatar("AK", 44.0, colors.accent.selected, colors));

        // Overlap via negative margins, border sells the stack
        let group = div()
            .flex()
            .flex_row()
            .children(["JS", "MW", "RB", "+2"].iter().enumerate().map(|(i, initials)| {
                let bg = if *initials == "+2" {
                    colors.text.dimmed
                } else {
                    colors.accent.selected
                };
                let avatar = initials_avatar(initials, 32.0, bg, colors)
                    .border_1()
                    .border_color(rgb(colors.background.main));
                if i == 0 {
                    avatar
                } else {
                    avatar.ml(px(-8.0))
                }
            }));

        demo_container(colors)
            .child(demo_section("Sizes", colors).child(demo_item("Initials", sizes, colors)))
            .child(demo_divider(colors))
            .child(demo_section("Stacked group", colors).child(demo_item("Participants", group, colors)))
            .into_any_element()
    }
}

// =============================================================================
// Accordion
// =============================================================================

pub struct AccordionDemo;

fn accordion_row(title: &str, body: Option<&str>, colors: &ColorScheme) -> Div {
    let open = body.is_some();
    div()
        .flex()
        .flex_col()
        .border_b_1()
        .border_color(rgb(colors.ui.border))
        .child(
            div()
                .flex()
                .flex_row()
                .items_center()
                .justify_between()
                .py_2()
                .cursor_pointer()
                .child(
                    div()
                        .text_sm()
                        .text_color(rgb(colors.text.primary))
                        .child(title.to_string()),
                )
                .child(
                    div()
                        .text_xs()
                        .text_color(rgb(colors.text.muted))
                        .child(if open { "▲" } else { "▼" }),
                ),
        )
        .children(body.map(|body| {
            div()
                .pb_2()
                .text_sm()
                .text_color(rgb(colors.text.tertiary))
                .child(body.to_string())
        }))
}

impl DemoWidget for AccordionDemo {
    fn id(&self) -> &'static str {
        "accordion"
    }

    fn name(&self) -> &'static str {
        "Accordion"
    }

    fn render(&self, colors: &ColorScheme) -> AnyElement {
        let faq = div()
            .w(px(320.))
            .flex()
            .flex_col()
            .child(accordion_row("What is your refund policy?", None, colors))
            .child(accordion_row(
                "How do I change my plan?",
                Some("Open billing settings and pick a new plan; changes apply immediately."),
                colors,
            ))
            .child(accordion_row("Can I export my data?", None, colors));

        demo_container(colors)
            .child(
                demo_section("One section expanded", colors)
                    .child(demo_item("FAQ", faq, colors)),
            )
            .into_any_element()
    }
}

// =============================================================================
// Carousel
// =============================================================================

pub struct CarouselDemo;

fn dot(active: bool, colors: &ColorScheme) -> Div {
    div()
        .w(px(6.))
        .h(px(6.))
        .rounded_full()
        .bg(rgb(if active {
            colors.accent.selected
        } else {
            colors.text.dimmed
        }))
}

impl DemoWidget for CarouselDemo {
    fn id(&self) -> &'static str {
        "carousel"
    }

    fn name(&self) -> &'static str {
        "Carousel"
    }

    fn render(&self, colors: &ColorScheme) -> AnyElement {
        // Active slide centered, neighbors peeking at reduced opacity
        let slides = div()
            .flex()
            .flex_row()
            .items_center()
            .gap_2()
            .child(
                div()
                    .w(px(48.))
                    .h(px(80.))
                    .rounded_md()
                    .bg(rgb(colors.accent.selected_subtle))
                    .opacity(0.5),
            )
            .child(
                div()
                    .w(px(140.))
                    .h(px(96.))
                    .rounded_md()
                    .bg(rgb(colors.accent.selected_subtle))
                    .border_1()
                    .border_color(rgb(colors.accent.selected))
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_sm()
                    .text_color(rgb(colors.text.tertiary))
                    .child("Slide 2 / 5"),
            )
            .child(
                div()
                    .w(px(48.))
                    .h(px(80.))
                    .rounded_md()
                    .bg(rgb(colors.accent.selected_subtle))
                    .opacity(0.5),
            );

        let strip = div()
            .flex()
            .flex_col()
            .items_center()
            .gap_2()
            .child(
                div()
                    .flex()
                    .flex_row()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .text_lg()
                            .cursor_pointer()
                            .text_color(rgb(colors.text.muted))
                            .child("‹"),
                    )
                    .child(slides)
                    .child(
                        div()
                            .text_lg()
                            .cursor_pointer()
                            .text_color(rgb(colors.text.muted))
                            .child("›"),
                    ),
            )
            .child(
                div()
                    .flex()
                    .flex_row()
                    .gap_1()
                    .child(dot(false, colors))
                    .child(dot(true, colors))
                    .child(dot(false, colors))
                    .child(dot(false, colors))
                    .child(dot(false, colors)),
            );

        demo_container(colors)
            .child(
                demo_section("Arrows, peek, and dot indicators", colors)
                    .child(demo_item("Slideshow", strip, colors)),
            )
            .into_any_element()
    }
}

// =============================================================================
// Timeline
// =============================================================================

pub struct TimelineDemo;

fn timeline_event(time: &str, text: &str, last: bool, colors: &ColorScheme) -> Div {
    div()
        .flex()
        .flex_row()
        .gap_3()
        .child(
            div()
                .flex()
                .flex_col()
                .items_center()
                .child(
                    div()
                        .w(px(8.))
                        .h(px(8.))
                        .rounded_full()
                        .bg(rgb(colors.accent.selected)),
                )
                .children((!last).then(|| div().w(px(2.)).h(px(28.)).bg(rgb(colors.ui.border)))),
        )
        .child(
            div()
                .flex()
                .flex_col()
                .child(
                    div()
                        .text_xs()
                        .text_color(rgb(colors.text.muted))
                        .child(time.to_string()),
                )
                .child(
                    div()
                        .text_sm()
                        .text_color(rgb(colors.text.secondary))
                        .child(text.to_string()),
                ),
        )
}

impl DemoWidget for TimelineDemo {
    fn id(&self) -> &'static str {
        "timeline"
    }

    fn name(&self) -> &'static str {
        "Timeline"
    }

    fn render(&self, colors: &ColorScheme) -> AnyElement {
        let feed = div()
            .flex()
            .flex_col()
            .child(timeline_event("09:14", "Build started", false, colors))
            .child(timeline_event("09:16", "Tests passed", false, colors))
            .child(timeline_event("09:17", "Deployed to production", true, colors));

        demo_container(colors)
            .child(demo_section("Activity feed", colors).child(demo_item("Events", feed, colors)))
            .into_any_element()
    }
}
