//! # chansize - channel size picker
//!
//! A terminal picker for the size of a Lightning channel purchase, built with
//! Rust and Ratatui. The user sets an amount in satoshis through a text field
//! or a slider; the picker keeps both in sync, clamps the value to the range
//! the channel provider accepts and reports every accepted value to its owner.
//!
//! ## Example Usage
//!
//! ```rust
//! use chansize::{
//!     domain::range::ChannelSizeOptions,
//!     model::channel_size::{ChannelSizePicker, Message},
//! };
//!
//! let options = ChannelSizeOptions::new().min_channel_size("300000");
//! let mut picker = ChannelSizePicker::new(None, options, false);
//!
//! let mut accepted = vec![];
//! picker.update(
//!     Message::TextChanged { text: "1,234,567abc".to_owned() },
//!     &mut |sats: u64| accepted.push(sats),
//! );
//!
//! assert_eq!(accepted, vec![1_234_567]);
//! assert_eq!(picker.text_value(), "1,234,567");
//! ```
//!
//! ## Modules
//!
//! - [`domain`] - Range resolution, normalization and formatting
//! - [`model`] - Picker state and its update function
//! - [`presentation`] - Widgets, components and UI configuration
//! - [`infrastructure`] - Terminal, CLI and configuration loading
//! - [`app`] - The page that owns the picker

pub mod action;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod model;
pub mod presentation;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
