//! Reusable UI components for the catalog chrome.
//!
//! # Components
//!
//! - [`Button`] - Interactive button with variants (Primary, Ghost)
//! - [`TagChip`] - Toggleable tag pill used in the sidebar and on cards
//!
//! # Design Patterns
//!
//! All components follow the same conventions:
//! - **Colors struct**: Pre-computed colors (Copy/Clone) for efficient closure use
//! - **Builder pattern**: Fluent API with `.method()` chaining
//! - **IntoElement trait**: Compatible with GPUI's element system
//! - **Theme integration**: `from_scheme()` constructors off the active scheme

pub mod button;
pub mod tag_chip;

pub use button::{Button, ButtonColors, ButtonVariant};
pub use tag_chip::{TagChip, TagChipColors};
