//! Input pattern demos: button, toggle switch, slider, checkbox, rating,
//! segmented control.

use gpui::{prelude::*, *};

use crate::layout::{demo_container, demo_divider, demo_item, demo_section};
use crate::theme::ColorScheme;
use crate::widgets::DemoWidget;

// =============================================================================
// Button
// =============================================================================

pub struct ButtonDemo;

fn button_base(label: &str, colors: &ColorScheme) -> Div {
    div()
        .px_3()
        .py_1()
        .rounded_md()
        .text_sm()
        .cursor_pointer()
        .child(label.to_string())
        .bg(rgb(colors.accent.selected))
        .text_color(rgb(colors.background.main))
}

impl DemoWidget for ButtonDemo {
    fn id(&self) -> &'static str {
        "button"
    }

    fn name(&self) -> &'static str {
        "Button"
    }

    fn render(&self, colors: &ColorScheme) -> AnyElement {
        demo_container(colors)
            .child(
                demo_section("Variants", colors)
                    .child(demo_item("Filled", button_base("Save changes", colors), colors))
                    .child(demo_item(
                        "Outline",
                        div()
                            .px_3()
                            .py_1()
                            .rounded_md()
                            .text_sm()
                            .cursor_pointer()
                            .border_1()
                            .border_color(rgb(colors.accent.selected))
                            .text_color(rgb(colors.accent.selected))
                            .child("Save changes"),
                        colors,
                    ))
                    .child(demo_item(
                        "Ghost",
                        div()
                            .px_3()
                            .py_1()
                            .rounded_md()
                            .text_sm()
                            .cursor_pointer()
                            .text_color(rgb(colors.accent.selected))
                            .child("Save changes"),
                        colors,
                    )),
            )
            .child(demo_divider(colors))
            .child(
                demo_section("States", colors)
                    .child(demo_item("Normal", button_base("Submit", colors), colors))
                    .child(demo_item(
                        "Disabled",
                        button_base("Submit", colors).opacity(0.4),
                        colors,
                    )),
            )
            .into_any_element()
    }
}

// =============================================================================
// Toggle Switch
// =============================================================================

pub struct ToggleSwitchDemo;

fn switch(on: bool, colors: &ColorScheme) -> Div {
    let track = if on {
        rgb(colors.accent.selected)
    } else {
        rgb(colors.ui.border)
    };
    div()
        .w(px(40.))
        .h(px(22.))
        .rounded_full()
        .bg(track)
        .p(px(2.))
        .flex()
        .flex_row()
        .when(on, |track| track.justify_end())
        .child(
            div()
                .w(px(18.))
                .h(px(18.))
                .rounded_full()
                .bg(rgb(0xffffff))
                .shadow_md(),
        )
}

impl DemoWidget for ToggleSwitchDemo {
    fn id(&self) -> &'static str {
        "toggle-switch"
    }

    fn name(&self) -> &'static str {
        "Toggle Switch"
    }

    fn render(&self, colors: &ColorScheme) -> AnyElement {
        demo_container(colors)
            .child(
                demo_section("States", colors)
                    .child(demo_item("Off", switch(false, colors), colors))
                    .child(demo_item("On", switch(true, colors), colors))
                    .child(demo_item("Disabled", switch(false, colors).opacity(0.4), colors)),
            )
            .into_any_element()
    }
}

// =============================================================================
// Slider
// =============================================================================

pub struct SliderDemo;

/// Track with the thumb at `value` percent
fn slider_at(value: f32, colors: &ColorScheme) -> Div {
    let width = 220.0_f32;
    let fill = width * (value / 100.0).clamp(0.0, 1.0);
    div()
        .w(px(width))
        .h(px(16.))
        .relative()
        .flex()
        .items_center()
        .child(
            div()
                .w_full()
                .h(px(4.))
                .rounded_full()
                .bg(rgb(colors.ui.border)),
        )
        .child(
            div()
                .absolute()
                .w(px(fill))
                .h(px(4.))
                .rounded_full()
                .bg(rgb(colors.accent.selected)),
        )
        .child(
            div()
                .absolute()
                .ml(px(fill - 7.0))
                .w(px(14.))
                .h(px(14.))
                .rounded_full()
                .bg(rgb(0xffffff))
                .shadow_md(),
        )
}

impl DemoWidget for SliderDemo {
    fn id(&self) -> &'static str {
        "slider"
    }

    fn name(&self) -> &'static str {
        "Slider"
    }

    fn render(&self, colors: &ColorScheme) -> AnyElement {
        demo_container(colors)
            .child(
                demo_section("Positions", colors)
                    .child(demo_item("Empty", slider_at(0.0, colors), colors))
                    .child(demo_item("30%", slider_at(30.0, colors), colors))
                    .child(demo_item("75%", slider_at(75.0, colors), colors))
                    .child(demo_item("Full", slider_at(100.0, colors), colors)),
            )
            .into_any_element()
    }
}

// =============================================================================
// Checkbox
// =============================================================================

pub struct CheckboxDemo;

fn checkbox(mark: Option<&'static str>, label: &str, colors: &ColorScheme) -> Div {
    let checked = mark.is_some();
    let box_el = div()
        .w(px(16.))
        .h(px(16.))
        .rounded_sm()
        .flex()
        .items_center()
        .justify_center()
        .border_1()
        .border_color(rgb(if checked {
            colors.accent.selected
        } else {
            colors.ui.border
        }))
        .bg(rgb(if checked {
            colors.accent.selected
        } else {
            colors.background.card
        }))
        .children(mark.map(|m| {
            div()
                .text_xs()
                .text_color(rgb(colors.background.main))
                .child(m)
        }));
    div()
        .flex()
        .flex_row()
        .items_center()
        .gap_2()
        .child(box_el)
        .child(
            div()
                .text_sm()
                .text_color(rgb(colors.text.secondary))
                .child(label.to_string()),
        )
}

impl DemoWidget for CheckboxDemo {
    fn id(&self) -> &'static str {
        "checkbox"
    }

    fn name(&self) -> &'static str {
        "Checkbox"
    }

    fn render(&self, colors: &ColorScheme) -> AnyElement {
        demo_container(colors)
            .child(
                demo_section("States", colors)
                    .child(demo_item("Unchecked", checkbox(None, "Email me updates", colors), colors))
                    .child(demo_item("Checked", checkbox(Some("✓"), "Email me updates", colors), colors))
                    .child(demo_item(
                        "Indeterminate",
                        checkbox(Some("–"), "Select all", colors),
                        colors,
                    )),
            )
            .into_any_element()
    }
}

// =============================================================================
// Rating
// =============================================================================

pub struct RatingDemo;

fn stars(filled: usize, colors: &ColorScheme) -> Div {
    div()
        .flex()
        .flex_row()
        .gap_1()
        .children((0..5).map(|i| {
            div()
                .text_lg()
                .text_color(rgb(if i < filled {
                    colors.ui.warning
                } else {
                    colors.text.dimmed
                }))
                .child(if i < filled { "★" } else { "☆" })
        }))
}

impl DemoWidget for RatingDemo {
    fn id(&self) -> &'static str {
        "rating"
    }

    fn name(&self) -> &'static str {
        "Rating"
    }

    fn render(&self, colors: &ColorScheme) -> AnyElement {
        demo_container(colors)
            .child(
                demo_section("Scores", colors)
                    .child(demo_item("Empty", stars(0, colors), colors))
                    .child(demo_item("3 of 5", stars(3, colors), colors))
                    .child(demo_item("Full", stars(5, colors), colors)),
            )
            .into_any_element()
    }
}

// =============================================================================
// Segmented Control
// =============================================================================

pub struct SegmentedControlDemo;

fn segments(selected: usize, colors: &ColorScheme) -> Div {
    let labels = ["Day", "Week", "Month"];
    div()
        .flex()
        .flex_row()
        .rounded_md()
        .p(px(2.))
        .bg(rgb(colors.background.search_box))
        .children(labels.iter().enumerate().map(|(i, label)| {
            let base = div()
                .px_3()
                .py_1()
                .text_sm()
                .rounded_sm()
                .cursor_pointer()
                .child(label.to_string());
            if i == selected {
                base.bg(rgb(colors.background.main))
                    .text_color(rgb(colors.text.primary))
                    .shadow_md()
            } else {
                base.text_color(rgb(colors.text.muted))
            }
        }))
}

impl DemoWidget for SegmentedControlDemo {
    fn id(&self) -> &'static str {
        "segmented-control"
    }

    fn name(&self) -> &'static str {
        "Segmented Control"
    }

    fn render(&self, colors: &ColorScheme) -> AnyElement {
        demo_container(colors)
            .child(
                demo_section("Selection", colors)
                    .child(demo_item("First", segments(0, colors), colors))
                    .child(demo_item("Middle", segments(1, colors), colors)),
            )
            .into_any_element()
    }
}
