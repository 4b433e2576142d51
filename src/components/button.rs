//! Reusable Button component for the catalog chrome.
//!
//! Theme-aware button with two variants, hover states, and a click
//! handler. Used by the toolbar (theme toggle) and the not-found view's
//! category links.

use gpui::*;
use std::rc::Rc;

/// Button variant determines the visual style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Filled background (accent color)
    #[default]
    Primary,
    /// Text only, background lift on hover
    Ghost,
}

/// Pre-computed colors for Button rendering.
///
/// Holds the primitive color values needed for rendering, allowing
/// efficient use in closures without cloning the full scheme.
#[derive(Clone, Copy, Debug)]
pub struct ButtonColors {
    pub text_color: u32,
    pub background: u32,
    pub background_hover: u32,
    pub accent: u32,
}

impl ButtonColors {
    pub fn from_scheme(colors: &crate::theme::ColorScheme) -> Self {
        Self {
            text_color: colors.accent.selected,
            background: colors.accent.selected_subtle,
            background_hover: colors.accent.selected_subtle,
            accent: colors.accent.selected,
        }
    }
}

/// Callback type for button click events
pub type OnClickCallback = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// A reusable button component for interactive actions
///
/// # Example
/// ```ignore
/// let colors = ButtonColors::from_scheme(&theme.colors);
/// Button::new("All categories", colors)
///     .variant(ButtonVariant::Ghost)
///     .on_click(Box::new(|_, _, _| println!("Clicked!")))
/// ```
#[derive(IntoElement)]
pub struct Button {
    label: SharedString,
    colors: ButtonColors,
    variant: ButtonVariant,
    disabled: bool,
    on_click: Option<Rc<OnClickCallback>>,
}

impl Button {
    pub fn new(label: impl Into<SharedString>, colors: ButtonColors) -> Self {
        Self {
            label: label.into(),
            colors,
            variant: ButtonVariant::default(),
            disabled: false,
            on_click: None,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(mut self, callback: OnClickCallback) -> Self {
        self.on_click = Some(Rc::new(callback));
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let colors = self.colors;
        let disabled = self.disabled;
        let on_click_callback = self.on_click;

        // Hover uses white at ~15% alpha - a lift that works on any surface
        let hover_overlay = rgba(0xffffff26);

        let (text_color, bg_color, hover_bg) = match self.variant {
            ButtonVariant::Primary => (
                rgb(colors.accent),
                rgba((colors.background << 8) | 0x80),
                rgba((colors.background_hover << 8) | 0xb0),
            ),
            ButtonVariant::Ghost => (rgb(colors.accent), rgba(0x00000000), hover_overlay),
        };

        let (px_val, py_val) = match self.variant {
            ButtonVariant::Primary => (px(12.), px(6.)),
            ButtonVariant::Ghost => (px(8.), px(4.)),
        };

        let mut button = div()
            .id(ElementId::Name(self.label.clone()))
            .flex()
            .flex_row()
            .items_center()
            .justify_center()
            .px(px_val)
            .py(py_val)
            .rounded(px(6.))
            .bg(bg_color)
            .text_color(text_color)
            .text_sm()
            .font_weight(FontWeight::MEDIUM)
            .cursor_pointer()
            .child(self.label);

        if !disabled {
            button = button.hover(move |s| s.bg(hover_bg));
        } else {
            button = button.opacity(0.5).cursor_default();
        }

        if let Some(callback) = on_click_callback {
            if !disabled {
                button = button.on_click(move |event, window, cx| {
                    callback(event, window, cx);
                });
            }
        }

        button
    }
}
