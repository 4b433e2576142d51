//! TagChip - toggleable tag pill.
//!
//! Appears in the sidebar tag cloud and on listing cards. Clicking a chip
//! toggles the tag in the active filter's selected-tag set.

use gpui::*;
use std::rc::Rc;

/// Pre-computed colors for TagChip rendering
#[derive(Clone, Copy, Debug)]
pub struct TagChipColors {
    pub text: u32,
    pub text_active: u32,
    pub background: u32,
    pub border: u32,
    pub border_active: u32,
}

impl TagChipColors {
    pub fn from_scheme(colors: &crate::theme::ColorScheme) -> Self {
        Self {
            text: colors.text.muted,
            text_active: colors.accent.chip_active,
            background: colors.background.search_box,
            border: colors.ui.border,
            border_active: colors.accent.chip_active,
        }
    }
}

/// Callback type for chip click events
pub type OnToggleCallback = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// A small pill showing one tag, highlighted while selected
#[derive(IntoElement)]
pub struct TagChip {
    tag: SharedString,
    colors: TagChipColors,
    active: bool,
    on_toggle: Option<Rc<OnToggleCallback>>,
}

impl TagChip {
    pub fn new(tag: impl Into<SharedString>, colors: TagChipColors) -> Self {
        Self {
            tag: tag.into(),
            colors,
            active: false,
            on_toggle: None,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn on_toggle(mut self, callback: OnToggleCallback) -> Self {
        self.on_toggle = Some(Rc::new(callback));
        self
    }
}

impl RenderOnce for TagChip {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let colors = self.colors;
        let (text, border) = if self.active {
            (rgb(colors.text_active), rgb(colors.border_active))
        } else {
            (rgb(colors.text), rgb(colors.border))
        };

        let mut chip = div()
            .id(ElementId::Name(self.tag.clone()))
            .px_2()
            .py(px(2.))
            .rounded_full()
            .border_1()
            .border_color(border)
            .bg(rgb(colors.background))
            .text_xs()
            .text_color(text)
            .cursor_pointer()
            .hover(|s| s.bg(rgba(0xffffff14)))
            .child(self.tag);

        if let Some(callback) = self.on_toggle {
            chip = chip.on_click(move |event, window, cx| {
                callback(event, window, cx);
            });
        }

        chip
    }
}
