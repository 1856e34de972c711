//! Reusable UI widgets
//!
//! Widgets are stateless renderers built from model state.

pub mod channel_size;
pub mod slider;
