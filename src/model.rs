//! Stateful models
//!
//! Models own UI state and change it through explicit update calls.

pub mod channel_size;
