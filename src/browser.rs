//! CatalogBrowser - main window for browsing the pattern catalog.
//!
//! Features:
//! - Left sidebar with search, category list, tag chips, and the filtered
//!   entry list grouped by category
//! - Right panel showing a category listing or one entry's detail view
//!   (description, aliases, tags, and the rendered demo widget)
//! - Toolbar with the current route and a light/dark theme toggle
//! - Keyboard navigation: arrows move the selection, enter opens the
//!   selected entry, escape steps back up, typing edits the search query

use gpui::*;

use crate::catalog::{self, Category, VisualEntry};
use crate::components::{Button, ButtonColors, ButtonVariant, TagChip, TagChipColors};
use crate::config;
use crate::error::ResultExt;
use crate::filter::{self, FilterState};
use crate::route::Route;
use crate::theme::{ColorScheme, Theme};
use crate::widgets;

/// Main browser view for the catalog
pub struct CatalogBrowser {
    route: Route,
    filter: FilterState,
    /// Selection within the current filtered list
    selected_index: usize,
    focus_handle: FocusHandle,
}

impl CatalogBrowser {
    pub fn new(initial_route: Route, cx: &mut Context<Self>) -> Self {
        let filter = FilterState {
            category: initial_route.category(),
            ..Default::default()
        };
        Self {
            route: initial_route,
            filter,
            selected_index: 0,
            focus_handle: cx.focus_handle(),
        }
    }

    fn filtered(&self) -> Vec<&'static VisualEntry> {
        filter::apply(catalog::all(), &self.filter)
    }

    fn navigate(&mut self, route: Route, cx: &mut Context<Self>) {
        tracing::info!(route = %route.path(), "Navigating");
        self.filter.category = route.category();
        self.route = route;
        self.selected_index = 0;
        cx.notify();
    }

    /// Clamp the selection after the filtered list shrank
    fn clamp_selection(&mut self) {
        let len = self.filtered().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    // === Keyboard handling ===

    fn move_selection_up(&mut self, cx: &mut Context<Self>) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            cx.notify();
        }
    }

    fn move_selection_down(&mut self, cx: &mut Context<Self>) {
        let len = self.filtered().len();
        if len > 0 && self.selected_index + 1 < len {
            self.selected_index += 1;
            cx.notify();
        }
    }

    fn open_selected(&mut self, cx: &mut Context<Self>) {
        if let Some(entry) = self.filtered().get(self.selected_index).copied() {
            self.navigate(
                Route::Detail {
                    category: entry.category,
                    slug: entry.slug.to_string(),
                },
                cx,
            );
        }
    }

    /// Escape steps back up: detail -> its category, listing -> home
    fn step_back(&mut self, cx: &mut Context<Self>) {
        match &self.route {
            Route::Detail { category, .. } => {
                let category = *category;
                self.navigate(Route::Category(category), cx);
            }
            Route::Category(_) | Route::NotFound { .. } => self.navigate(Route::Home, cx),
            Route::Home => {
                if !self.filter.is_empty() {
                    self.filter = FilterState::default();
                    self.selected_index = 0;
                    cx.notify();
                }
            }
        }
    }

    fn handle_backspace(&mut self, cx: &mut Context<Self>) {
        if self.filter.query.pop().is_some() {
            self.clamp_selection();
            cx.notify();
        }
    }

    fn handle_char(&mut self, ch: char, cx: &mut Context<Self>) {
        self.filter.query.push(ch);
        self.clamp_selection();
        cx.notify();
    }

    fn toggle_tag(&mut self, tag: &str, cx: &mut Context<Self>) {
        self.filter.toggle_tag(tag);
        self.clamp_selection();
        cx.notify();
    }

    fn toggle_theme(&mut self, cx: &mut Context<Self>) {
        let next = cx.global::<Theme>().toggled();
        let mut saved = config::load();
        saved.appearance = next.appearance;
        config::save(&saved).warn_on_err();
        cx.set_global(next);
        cx.notify();
    }

    // === Sidebar ===

    fn render_search_bar(&self, colors: &ColorScheme, _cx: &mut Context<Self>) -> impl IntoElement {
        let query = self.filter.query.clone();
        div()
            .p_2()
            .border_b_1()
            .border_color(rgb(colors.ui.border))
            .child(
                div()
                    .flex()
                    .flex_row()
                    .items_center()
                    .gap_2()
                    .px_2()
                    .py_1()
                    .bg(rgb(colors.background.search_box))
                    .rounded_md()
                    .child(div().text_color(rgb(colors.text.dimmed)).child("🔍"))
                    .child(
                        div()
                            .flex_1()
                            .text_sm()
                            .text_color(if query.is_empty() {
                                rgb(colors.text.dimmed)
                            } else {
                                rgb(colors.text.secondary)
                            })
                            .child(if query.is_empty() {
                                "Search patterns...".to_string()
                            } else {
                                query
                            }),
                    ),
            )
    }

    fn render_category_list(
        &self,
        colors: &ColorScheme,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        // Counts reflect the tag/query criteria but not the category one,
        // so every row shows what clicking it would reveal
        let uncategorized = FilterState {
            category: None,
            tags: self.filter.tags.clone(),
            query: self.filter.query.clone(),
        };
        let visible = filter::apply(catalog::all(), &uncategorized);

        let all_row = {
            let is_active = self.filter.category.is_none();
            let base = div()
                .id("category-all")
                .px_3()
                .py_1()
                .flex()
                .flex_row()
                .justify_between()
                .text_sm()
                .rounded_sm()
                .cursor_pointer()
                .child("All")
                .child(
                    div()
                        .text_xs()
                        .text_color(rgb(colors.text.dimmed))
                        .child(visible.len().to_string()),
                )
                .on_click(cx.listener(|this, _event, _window, cx| {
                    this.navigate(Route::Home, cx);
                }));
            if is_active {
                base.text_color(rgb(colors.accent.selected))
            } else {
                base.text_color(rgb(colors.text.secondary))
                    .hover(|s| s.bg(rgb(colors.accent.selected_subtle)))
            }
        };

        div()
            .flex()
            .flex_col()
            .py_1()
            .border_b_1()
            .border_color(rgb(colors.ui.border))
            .child(all_row)
            .children(Category::ALL.into_iter().map(|category| {
                let count = visible.iter().filter(|e| e.category == category).count();
                let is_active = self.filter.category == Some(category);
                let base = div()
                    .id(ElementId::Name(category.slug().into()))
                    .px_3()
                    .py_1()
                    .flex()
                    .flex_row()
                    .justify_between()
                    .text_sm()
                    .rounded_sm()
                    .cursor_pointer()
                    .child(category.label())
                    .child(
                        div()
                            .text_xs()
                            .text_color(rgb(colors.text.dimmed))
                            .child(count.to_string()),
                    )
                    .on_click(cx.listener(move |this, _event, _window, cx| {
                        this.navigate(Route::Category(category), cx);
                    }));
                if is_active {
                    base.text_color(rgb(colors.accent.selected))
                } else {
                    base.text_color(rgb(colors.text.secondary))
                        .hover(|s| s.bg(rgb(colors.accent.selected_subtle)))
                }
            }))
    }

    fn render_tag_cloud(&self, colors: &ColorScheme, cx: &mut Context<Self>) -> impl IntoElement {
        let chip_colors = TagChipColors::from_scheme(colors);
        div()
            .p_2()
            .border_b_1()
            .border_color(rgb(colors.ui.border))
            .flex()
            .flex_row()
            .flex_wrap()
            .gap_1()
            .children(catalog::all_tags().into_iter().map(|tag| {
                let active = self.filter.tags.iter().any(|t| t == tag);
                TagChip::new(tag, chip_colors).active(active).on_toggle(Box::new(
                    cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                        this.toggle_tag(tag, cx);
                    }),
                ))
            }))
    }

    fn render_entry_list(
        &self,
        filtered: &[&'static VisualEntry],
        colors: &ColorScheme,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        div()
            .id("entry-list")
            .flex()
            .flex_col()
            .flex_1()
            .overflow_y_scroll()
            .children(Category::ALL.into_iter().map(|category| {
                let category_entries: Vec<(usize, &'static VisualEntry)> = filtered
                    .iter()
                    .enumerate()
                    .filter(|(_, e)| e.category == category)
                    .map(|(i, e)| (i, *e))
                    .collect();

                if category_entries.is_empty() {
                    return div().into_any_element();
                }

                div()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .px_3()
                            .py_2()
                            .text_xs()
                            .text_color(rgb(colors.text.tertiary))
                            .font_weight(FontWeight::SEMIBOLD)
                            .child(category.label().to_uppercase()),
                    )
                    .children(category_entries.into_iter().map(|(index, entry)| {
                        let is_selected = index == self.selected_index;
                        let base = div()
                            .id(ElementId::Name(entry.slug.into()))
                            .px_3()
                            .py_1()
                            .cursor_pointer()
                            .text_sm()
                            .rounded_sm()
                            .child(entry.name)
                            .on_click(cx.listener(move |this, _event, _window, cx| {
                                this.selected_index = index;
                                this.navigate(
                                    Route::Detail {
                                        category: entry.category,
                                        slug: entry.slug.to_string(),
                                    },
                                    cx,
                                );
                            }));
                        if is_selected {
                            base.bg(rgb(colors.accent.selected))
                                .text_color(rgb(colors.background.main))
                        } else {
                            base.text_color(rgb(colors.text.secondary))
                                .hover(|s| s.bg(rgb(colors.accent.selected_subtle)))
                        }
                    }))
                    .into_any_element()
            }))
    }

    // === Right panel ===

    fn render_toolbar(&self, colors: &ColorScheme, cx: &mut Context<Self>) -> impl IntoElement {
        let theme_label = if cx.global::<Theme>().is_dark() {
            "☀ Light"
        } else {
            "☾ Dark"
        };
        div()
            .flex()
            .flex_row()
            .items_center()
            .justify_between()
            .px_4()
            .py_2()
            .border_b_1()
            .border_color(rgb(colors.ui.border))
            .bg(rgb(colors.background.sidebar))
            .child(
                div()
                    .text_xs()
                    .text_color(rgb(colors.text.muted))
                    .child(self.route.path()),
            )
            .child(
                Button::new(theme_label, ButtonColors::from_scheme(colors))
                    .variant(ButtonVariant::Ghost)
                    .on_click(Box::new(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                        this.toggle_theme(cx);
                    }))),
            )
    }

    fn render_entry_card(
        &self,
        entry: &'static VisualEntry,
        colors: &ColorScheme,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let chip_colors = TagChipColors::from_scheme(colors);
        div()
            .id(ElementId::Name(format!("card-{}", entry.slug).into()))
            .w(px(240.))
            .p_3()
            .rounded_md()
            .border_1()
            .border_color(rgb(colors.ui.border))
            .bg(rgb(colors.background.card))
            .cursor_pointer()
            .hover(|s| s.border_color(rgb(colors.accent.selected)))
            .flex()
            .flex_col()
            .gap_2()
            .child(
                div()
                    .flex()
                    .flex_row()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_sm()
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(rgb(colors.text.primary))
                            .child(entry.name),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(rgb(colors.text.dimmed))
                            .child(entry.category.label()),
                    ),
            )
            .child(
                div()
                    .text_xs()
                    .text_color(rgb(colors.text.tertiary))
                    .child(entry.description),
            )
            .child(
                div()
                    .flex()
                    .flex_row()
                    .flex_wrap()
                    .gap_1()
                    .children(entry.tags.iter().map(|tag| {
                        let tag = *tag;
                        let active = self.filter.tags.iter().any(|t| t == tag);
                        TagChip::new(tag, chip_colors).active(active).on_toggle(Box::new(
                            cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                                // Chip clicks must not also open the card
                                cx.stop_propagation();
                                this.toggle_tag(tag, cx);
                            }),
                        ))
                    })),
            )
            .on_click(cx.listener(move |this, _event, _window, cx| {
                this.navigate(
                    Route::Detail {
                        category: entry.category,
                        slug: entry.slug.to_string(),
                    },
                    cx,
                );
            }))
    }

    /// One parameterized listing view for home (`None`) and every category
    fn render_listing(
        &self,
        category: Option<Category>,
        colors: &ColorScheme,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let entries: Vec<&'static VisualEntry> = self
            .filtered()
            .into_iter()
            .filter(|e| category.map_or(true, |c| e.category == c))
            .collect();

        if entries.is_empty() {
            return div()
                .flex()
                .flex_col()
                .items_center()
                .justify_center()
                .size_full()
                .gap_1()
                .child(
                    div()
                        .text_sm()
                        .text_color(rgb(colors.text.muted))
                        .child("No patterns match the current filters"),
                )
                .child(
                    div()
                        .text_xs()
                        .text_color(rgb(colors.text.dimmed))
                        .child("Press escape to clear them"),
                )
                .into_any_element();
        }

        div()
            .id("listing")
            .flex_1()
            .overflow_y_scroll()
            .p_4()
            .flex()
            .flex_row()
            .flex_wrap()
            .gap_3()
            .children(
                entries
                    .into_iter()
                    .map(|entry| self.render_entry_card(entry, colors, cx)),
            )
            .into_any_element()
    }

    fn render_detail(
        &self,
        category: Category,
        slug: &str,
        colors: &ColorScheme,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let Some(entry) = catalog::find(category, slug) else {
            // Route parsing validates detail routes; if one slips through,
            // fall back to the not-found view
            return self.render_not_found(&format!("categories/{}/{}", category, slug), colors, cx);
        };

        let chip_colors = TagChipColors::from_scheme(colors);
        let aliases = if entry.alt_names.is_empty() {
            None
        } else {
            Some(format!("Also known as: {}", entry.alt_names.join(", ")))
        };

        div()
            .id("detail")
            .flex_1()
            .overflow_y_scroll()
            .p_4()
            .flex()
            .flex_col()
            .gap_3()
            .child(
                div()
                    .flex()
                    .flex_row()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .text_xl()
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(rgb(colors.text.primary))
                            .child(entry.name),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(rgb(colors.text.dimmed))
                            .child(format!("({})", entry.category.label())),
                    ),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(rgb(colors.text.secondary))
                    .child(entry.description),
            )
            .children(aliases.map(|aliases| {
                div()
                    .text_xs()
                    .text_color(rgb(colors.text.muted))
                    .child(aliases)
            }))
            .child(
                div()
                    .flex()
                    .flex_row()
                    .flex_wrap()
                    .gap_1()
                    .children(entry.tags.iter().map(|tag| {
                        let tag = *tag;
                        let active = self.filter.tags.iter().any(|t| t == tag);
                        TagChip::new(tag, chip_colors).active(active).on_toggle(Box::new(
                            cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                                this.toggle_tag(tag, cx);
                            }),
                        ))
                    })),
            )
            .child(
                div()
                    .text_xs()
                    .text_color(rgb(colors.text.dimmed))
                    .child(format!("widget: {}", entry.widget)),
            )
            .child(widgets::render_demo(entry.widget, colors))
            .into_any_element()
    }

    fn render_not_found(
        &self,
        requested: &str,
        colors: &ColorScheme,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let button_colors = ButtonColors::from_scheme(colors);
        div()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .size_full()
            .gap_3()
            .child(
                div()
                    .text_2xl()
                    .text_color(rgb(colors.text.primary))
                    .child("Nothing here"),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(rgb(colors.text.muted))
                    .child(format!("\"{}\" doesn't match any catalog page", requested)),
            )
            .child(
                div()
                    .text_xs()
                    .text_color(rgb(colors.text.dimmed))
                    .child("Try one of the categories instead:"),
            )
            .child(
                div()
                    .flex()
                    .flex_row()
                    .flex_wrap()
                    .gap_2()
                    .justify_center()
                    .children(Category::ALL.into_iter().map(|category| {
                        Button::new(category.label(), button_colors)
                            .variant(ButtonVariant::Ghost)
                            .on_click(Box::new(cx.listener(
                                move |this, _event: &ClickEvent, _window, cx| {
                                    this.navigate(Route::Category(category), cx);
                                },
                            )))
                    })),
            )
            .into_any_element()
    }

    fn render_content(&self, colors: &ColorScheme, cx: &mut Context<Self>) -> AnyElement {
        match self.route.clone() {
            Route::Home => self.render_listing(None, colors, cx),
            Route::Category(category) => self.render_listing(Some(category), colors, cx),
            Route::Detail { category, slug } => self.render_detail(category, &slug, colors, cx),
            Route::NotFound { requested } => self.render_not_found(&requested, colors, cx),
        }
    }
}

impl Render for CatalogBrowser {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = cx.global::<Theme>().colors.clone();
        let filtered = self.filtered();

        div()
            .id("catalog-browser")
            .key_context("CatalogBrowser")
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                let key = event.keystroke.key.to_lowercase();
                match key.as_str() {
                    "up" | "arrowup" => this.move_selection_up(cx),
                    "down" | "arrowdown" => this.move_selection_down(cx),
                    "enter" => this.open_selected(cx),
                    "escape" => this.step_back(cx),
                    "backspace" => this.handle_backspace(cx),
                    _ => {
                        if let Some(ref key_char) = event.keystroke.key_char {
                            if let Some(ch) = key_char.chars().next() {
                                if !ch.is_control() {
                                    this.handle_char(ch, cx);
                                }
                            }
                        }
                    }
                }
            }))
            .flex()
            .flex_row()
            .size_full()
            .bg(rgb(colors.background.main))
            .text_color(rgb(colors.text.secondary))
            // Left sidebar
            .child(
                div()
                    .w(px(300.))
                    .border_r_1()
                    .border_color(rgb(colors.ui.border))
                    .flex()
                    .flex_col()
                    .bg(rgb(colors.background.sidebar))
                    .child(
                        div()
                            .px_3()
                            .py_2()
                            .border_b_1()
                            .border_color(rgb(colors.ui.border))
                            .child(
                                div()
                                    .text_sm()
                                    .font_weight(FontWeight::SEMIBOLD)
                                    .text_color(rgb(colors.text.primary))
                                    .child("Patternbook"),
                            ),
                    )
                    .child(self.render_search_bar(&colors, cx))
                    .child(self.render_category_list(&colors, cx))
                    .child(self.render_tag_cloud(&colors, cx))
                    .child(self.render_entry_list(&filtered, &colors, cx)),
            )
            // Right panel
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .child(self.render_toolbar(&colors, cx))
                    .child(self.render_content(&colors, cx)),
            )
    }
}

impl Focusable for CatalogBrowser {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}
