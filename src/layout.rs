//! Layout helpers shared by every demo widget.
//!
//! Each demo renders inside a [`demo_container`], grouped into
//! [`demo_section`]s of labeled [`demo_item`] rows, so the detail pane has
//! a consistent rhythm regardless of which widget is showing.

use gpui::*;

use crate::theme::ColorScheme;

/// Container for demo content
pub fn demo_container(colors: &ColorScheme) -> Div {
    div()
        .flex()
        .flex_col()
        .gap_4()
        .p_4()
        .bg(rgb(colors.background.main))
        .size_full()
        .overflow_hidden()
}

/// Section with title
pub fn demo_section(title: &str, colors: &ColorScheme) -> Div {
    div().flex().flex_col().gap_2().child(
        div()
            .text_sm()
            .text_color(rgb(colors.text.tertiary))
            .child(title.to_string()),
    )
}

/// Item row with label and element
pub fn demo_item(label: &str, element: impl IntoElement, colors: &ColorScheme) -> Div {
    div()
        .flex()
        .flex_row()
        .items_center()
        .gap_4()
        .child(
            div()
                .w(px(140.))
                .text_sm()
                .text_color(rgb(colors.text.dimmed))
                .child(label.to_string()),
        )
        .child(element)
}

/// Horizontal divider between sections
pub fn demo_divider(colors: &ColorScheme) -> Div {
    div().h(px(1.)).w_full().bg(rgb(colors.ui.border)).my_2()
}
