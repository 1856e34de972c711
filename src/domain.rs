//! Domain logic
//!
//! This module contains the channel size rules that do not depend on the UI:
//! - Effective range resolution and slider geometry
//! - Text normalization
//! - Sats/BTC formatting

pub mod normalize;
pub mod range;
pub mod sats;
