//! Data pattern demos: table, stat card, progress ring, bar chart,
//! tree view.

use gpui::*;

use crate::layout::{demo_container, demo_item, demo_section};
use crate::theme::ColorScheme;
use crate::widgets::DemoWidget;

// =============================================================================
// Table
// =============================================================================

pub struct TableDemo;

fn table_cell(text: &str, width: f32, color: u32) -> Div {
    div()
        .w(px(width))
        .px_2()
        .py_1()
        .text_xs()
        .text_color(rgb(color))
        .child(text.to_string())
}

impl DemoWidget for TableDemo {
    fn id(&self) -> &'static str {
        "table"
    }

    fn name(&self) -> &'static str {
        "Table"
    }

    fn render(&self, colors: &ColorScheme) -> AnyElement {
        let rows = [
            ("Ada Lovelace", "Engineering", "Active"),
            ("Grace Hopper", "Research", "Active"),
            ("Alan Turing", "Research", "Away"),
        ];

        let table = div()
            .rounded_md()
            .overflow_hidden()
            .border_1()
            .border_color(rgb(colors.ui.border))
            .flex()
            .flex_col()
            .child(
                div()
                    .flex()
                    .flex_row()
                    .bg(rgb(colors.background.card))
                    .border_b_1()
                    .border_color(rgb(colors.ui.border))
                    // Sort affordance on the active column
                    .child(table_cell("Name ▲", 120.0, colors.text.primary))
                    .child(table_cell("Team", 100.0, colors.text.primary))
                    .child(table_cell("Status", 70.0, colors.text.primary)),
            )
            .children(rows.iter().enumerate().map(|(i, (name, team, status))| {
                let row = div()
                    .flex()
                    .flex_row()
                    .child(table_cell(name, 120.0, colors.text.secondary))
                    .child(table_cell(team, 100.0, colors.text.tertiary))
                    .child(table_cell(status, 70.0, colors.text.tertiary));
                // Zebra striping
                if i % 2 == 1 {
                    row.bg(rgb(colors.background.card))
                } else {
                    row
                }
            }));

        demo_container(colors)
            .child(demo_section("Sortable with zebra rows", colors).child(demo_item("People", table, colors)))
            .into_any_element()
    }
}

// =============================================================================
// Stat Card
// =============================================================================

pub struct StatCardDemo;

fn stat(label: &str, value: &str, delta: &str, up: bool, colors: &ColorScheme) -> Div {
    div()
        .w(px(140.))
        .p_3()
        .rounded_md()
        .border_1()
        .border_color(rgb(colors.ui.border))
        .bg(rgb(colors.background.card))
        .flex()
        .flex_col()
        .gap_1()
        .child(
            div()
                .text_xs()
                .text_color(rgb(colors.text.muted))
                .child(label.to_string()),
        )
        .child(
            div()
                .text_xl()
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(rgb(colors.text.primary))
                .child(value.to_string()),
        )
        .child(
            div()
                .text_xs()
                .text_color(rgb(if up { colors.ui.success } else { colors.ui.error }))
                .child(format!("{} {}", if up { "▲" } else { "▼" }, delta)),
        )
}

impl DemoWidget for StatCardDemo {
    fn id(&self) -> &'static str {
        "stat-card"
    }

    fn name(&self) -> &'static str {
        "Stat Card"
    }

    fn render(&self, colors: &ColorScheme) -> AnyElement {
        let row = div()
            .flex()
            .flex_row()
            .gap_3()
            .child(stat("Revenue", "$48.2k", "12% vs last month", true, colors))
            .child(stat("Churn", "2.4%", "0.3% vs last month", false, colors));

        demo_container(colors)
            .child(demo_section("Dashboard tiles", colors).child(demo_item("Metrics", row, colors)))
            .into_any_element()
    }
}

// =============================================================================
// Progress Ring
// =============================================================================

pub struct ProgressRingDemo;

/// Static ring approximation: a circular border with the value centered.
/// A real arc needs a path painter; the preview only needs the shape.
fn ring(value: &str, accent: u32, colors: &ColorScheme) -> Div {
    div()
        .w(px(64.))
        .h(px(64.))
        .rounded_full()
        .border_4()
        .border_color(rgb(accent))
        .flex()
        .items_center()
        .justify_center()
        .child(
            div()
                .text_sm()
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(rgb(colors.text.primary))
                .child(value.to_string()),
        )
}

impl DemoWidget for ProgressRingDemo {
    fn id(&self) -> &'static str {
        "progress-ring"
    }

    fn name(&self) -> &'static str {
        "Progress Ring"
    }

    fn render(&self, colors: &ColorScheme) -> AnyElement {
        let row = div()
            .flex()
            .flex_row()
            .gap_4()
            .child(ring("25%", colors.ui.border, colors))
            .child(ring("60%", colors.accent.selected, colors))
            .child(ring("100%", colors.ui.success, colors));

        demo_container(colors)
            .child(demo_section("Percentages", colors).child(demo_item("Gauges", row, colors)))
            .into_any_element()
    }
}

// =============================================================================
// Bar Chart
// =============================================================================

pub struct BarChartDemo;

impl DemoWidget for BarChartDemo {
    fn id(&self) -> &'static str {
        "bar-chart"
    }

    fn name(&self) -> &'static str {
        "Bar Chart"
    }

    fn render(&self, colors: &ColorScheme) -> AnyElement {
        let data: [(&str, f32); 5] = [
            ("Mon", 32.0),
            ("Tue", 58.0),
            ("Wed", 45.0),
            ("Thu", 74.0),
            ("Fri", 52.0),
        ];

        let chart = div()
            .flex()
            .flex_row()
            .items_end()
            .gap_2()
            .h(px(90.))
            .border_b_1()
            .border_color(rgb(colors.ui.border))
            .children(data.iter().map(|(label, value)| {
                div()
                    .flex()
                    .flex_col()
                    .items_center()
                    .gap_1()
                    .child(
                        div()
                            .w(px(22.))
                            .h(px(*value))
                            .rounded_sm()
                            .bg(rgb(colors.accent.selected)),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(rgb(colors.text.muted))
                            .child(label.to_string()),
                    )
            }));

        demo_container(colors)
            .child(demo_section("Weekly totals", colors).child(demo_item("Columns", chart, colors)))
            .into_any_element()
    }
}

// =============================================================================
// Tree View
// =============================================================================

pub struct TreeViewDemo;

fn tree_node(depth: usize, arrow: &'static str, label: &str, colors: &ColorScheme) -> Div {
    div()
        .flex()
        .flex_row()
        .items_center()
        .gap_1()
        .ml(px(depth as f32 * 16.0))
        .py(px(2.))
        .cursor_pointer()
        .child(
            div()
                .w(px(12.))
                .text_xs()
                .text_color(rgb(colors.text.muted))
                .child(arrow),
        )
        .child(
            div()
                .text_sm()
                .text_color(rgb(colors.text.secondary))
                .child(label.to_string()),
        )
}

impl DemoWidget for TreeViewDemo {
    fn id(&self) -> &'static str {
        "tree-view"
    }

    fn name(&self) -> &'static str {
        "Tree View"
    }

    fn render(&self, colors: &ColorScheme) -> AnyElement {
        let tree = div()
            .flex()
            .flex_col()
            .child(tree_node(0, "▾", "src", colors))
            .child(tree_node(1, "▾", "widgets", colors))
            .child(tree_node(2, "", "input.rs", colors))
            .child(tree_node(2, "", "data.rs", colors))
            .child(tree_node(1, "▸", "catalog", colors))
            .child(tree_node(0, "", "Cargo.toml", colors));

        demo_container(colors)
            .child(demo_section("Expandable outline", colors).child(demo_item("Files", tree, colors)))
            .into_any_element()
    }
}
