//! Presentation layer
//!
//! This module contains the terminal UI:
//! - Components that turn input into picker messages
//! - Widgets that render picker state
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod widgets;
