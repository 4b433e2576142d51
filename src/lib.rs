//! Patternbook - a desktop field guide to UI patterns.
//!
//! This library provides the catalog registry, the filter/search engine
//! over it, the routing and browser UI that present it, and the demo
//! widgets that preview each cataloged pattern.

pub mod browser;
pub mod catalog;
pub mod components;
pub mod config;
pub mod error;
pub mod filter;
#[cfg(test)]
mod filter_tests;
pub mod layout;
pub mod logging;
pub mod route;
pub mod theme;
pub mod widgets;
