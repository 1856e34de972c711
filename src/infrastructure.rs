//! Infrastructure layer
//!
//! This module handles the process boundary:
//! - TUI foundation
//! - CLI argument processing
//! - Configuration loading

pub mod cli;
pub mod config;
pub mod tui;
