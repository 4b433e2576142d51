//! Theme state for the catalog window.
//!
//! A [`Theme`] is the single shared observable for appearance: it lives in
//! GPUI global state, is initialized from the saved preference (or system
//! appearance), toggled from the toolbar, and persisted back through
//! [`crate::config`].

use gpui::Global;
use serde::{Deserialize, Serialize};
use std::process::Command;
use tracing::{debug, info};

/// Hex color representation (u32)
pub type HexColor = u32;

/// Background color definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackgroundColors {
    /// Main panel background
    pub main: HexColor,
    /// Sidebar background
    pub sidebar: HexColor,
    /// Search box background
    pub search_box: HexColor,
    /// Card background for listing and demo surfaces
    pub card: HexColor,
}

/// Text color definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextColors {
    pub primary: HexColor,
    pub secondary: HexColor,
    pub tertiary: HexColor,
    pub muted: HexColor,
    pub dimmed: HexColor,
}

/// Accent and highlight colors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccentColors {
    /// Selected item highlight
    pub selected: HexColor,
    /// Subtle selection for list items - barely visible highlight
    pub selected_subtle: HexColor,
    /// Tag chip text when the chip is active
    pub chip_active: HexColor,
}

/// Border and status colors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIColors {
    pub border: HexColor,
    pub success: HexColor,
    pub error: HexColor,
    pub warning: HexColor,
    pub info: HexColor,
}

/// Complete color scheme definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorScheme {
    pub background: BackgroundColors,
    pub text: TextColors,
    pub accent: AccentColors,
    pub ui: UIColors,
}

impl ColorScheme {
    /// Dark mode color scheme (default)
    pub fn dark_default() -> Self {
        ColorScheme {
            background: BackgroundColors {
                main: 0x1e1e1e,
                sidebar: 0x252525,
                search_box: 0x2d2d2d,
                card: 0x2a2a2e,
            },
            text: TextColors {
                primary: 0xffffff,
                secondary: 0xcccccc,
                tertiary: 0x999999,
                muted: 0x808080,
                dimmed: 0x666666,
            },
            accent: AccentColors {
                selected: 0x818cf8,        // indigo-400, readable on dark cards
                selected_subtle: 0x2f2f38, // barely visible list selection
                chip_active: 0x5eead4,     // teal for active tag chips
            },
            ui: UIColors {
                border: 0x3d3d3d,
                success: 0x22c55e, // green-500
                error: 0xef4444,   // red-500
                warning: 0xf59e0b, // amber-500
                info: 0x3b82f6,    // blue-500
            },
        }
    }

    /// Light mode color scheme
    pub fn light_default() -> Self {
        ColorScheme {
            background: BackgroundColors {
                main: 0xffffff,
                sidebar: 0xf3f3f3,
                search_box: 0xececec,
                card: 0xf8f8fa,
            },
            text: TextColors {
                primary: 0x111111,
                secondary: 0x333333,
                tertiary: 0x666666,
                muted: 0x999999,
                dimmed: 0xbbbbbb,
            },
            accent: AccentColors {
                selected: 0x4f46e5,        // indigo-600, darker for light surfaces
                selected_subtle: 0xe8e8ee,
                chip_active: 0x0d9488,     // darker teal for light mode
            },
            ui: UIColors {
                border: 0xd0d0d0,
                success: 0x16a34a, // green-600
                error: 0xdc2626,   // red-600
                warning: 0xd97706, // amber-600
                info: 0x2563eb,    // blue-600
            },
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme::dark_default()
    }
}

/// User-facing appearance preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    /// Follow the system appearance at startup
    #[default]
    System,
    Light,
    Dark,
}

/// Shared theme state, installed as a GPUI global at startup
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ColorScheme,
    pub appearance: Appearance,
    /// Resolved dark/light flag (meaningful when appearance is System)
    dark: bool,
}

impl Global for Theme {}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            colors: ColorScheme::dark_default(),
            appearance: Appearance::System,
            dark: true,
        }
    }
}

impl Theme {
    /// Resolve a theme from a saved appearance preference.
    ///
    /// `System` consults the OS preference; detection failure falls back
    /// to dark, never to an error.
    pub fn from_appearance(appearance: Appearance) -> Self {
        let dark = match appearance {
            Appearance::Light => false,
            Appearance::Dark => true,
            Appearance::System => detect_system_dark_mode(),
        };
        let colors = if dark {
            ColorScheme::dark_default()
        } else {
            ColorScheme::light_default()
        };
        Theme {
            colors,
            appearance,
            dark,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Flip between light and dark, pinning the explicit preference
    pub fn toggled(&self) -> Self {
        let appearance = if self.dark {
            Appearance::Light
        } else {
            Appearance::Dark
        };
        Theme::from_appearance(appearance)
    }
}

/// Detect the system appearance preference.
///
/// Returns true for dark mode. Uses `defaults read -g AppleInterfaceStyle`
/// on macOS; on other platforms or if detection fails, defaults to dark.
pub fn detect_system_dark_mode() -> bool {
    if !cfg!(target_os = "macos") {
        debug!("No system appearance probe on this platform, defaulting to dark");
        return true;
    }
    match Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
    {
        Ok(output) => {
            // The key only exists when dark mode is on; light mode errors out
            let stdout = String::from_utf8_lossy(&output.stdout);
            let is_dark = stdout.to_lowercase().contains("dark");
            info!(
                appearance = if is_dark { "dark" } else { "light" },
                "System appearance detected"
            );
            is_dark
        }
        Err(_) => {
            debug!("System appearance detection failed, defaulting to dark");
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scheme_is_dark() {
        let scheme = ColorScheme::default();
        assert_eq!(scheme.background.main, 0x1e1e1e);
        assert_eq!(scheme.text.primary, 0xffffff);
    }

    #[test]
    fn test_light_default() {
        let scheme = ColorScheme::light_default();
        assert_eq!(scheme.background.main, 0xffffff);
        assert_eq!(scheme.text.primary, 0x111111);
    }

    #[test]
    fn test_explicit_appearance_wins() {
        let theme = Theme::from_appearance(Appearance::Light);
        assert!(!theme.is_dark());
        assert_eq!(theme.colors.background.main, 0xffffff);

        let theme = Theme::from_appearance(Appearance::Dark);
        assert!(theme.is_dark());
        assert_eq!(theme.colors.background.main, 0x1e1e1e);
    }

    #[test]
    fn test_toggle_pins_explicit_preference() {
        let dark = Theme::from_appearance(Appearance::Dark);
        let toggled = dark.toggled();
        assert_eq!(toggled.appearance, Appearance::Light);
        assert!(!toggled.is_dark());

        let back = toggled.toggled();
        assert_eq!(back.appearance, Appearance::Dark);
        assert!(back.is_dark());
    }

    #[test]
    fn test_appearance_serialization() {
        let json = serde_json::to_string(&Appearance::Light).unwrap();
        assert_eq!(json, "\"light\"");
        let parsed: Appearance = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(parsed, Appearance::System);
    }
}
