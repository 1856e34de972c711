//! Effective range resolution
//!
//! Turns loosely typed channel size options into the bounds and step that the
//! picker actually enforces.

use serde::{Deserialize, Serialize};

use crate::domain::normalize;

/// Hard floor applied to every configured minimum.
pub const HARD_MIN_SATS: u64 = 150_000;
pub const DEFAULT_MIN_CHANNEL_SIZE: i64 = 100_000;
pub const DEFAULT_MAX_CHANNEL_SIZE: i64 = 16_777_216;
/// Smallest slider increment.
pub const MIN_STEP: u64 = 10_000;
/// Number of slider positions the step derivation aims for.
pub const TARGET_SLIDER_POSITIONS: u64 = 150;

/// A configured bound as it arrives from a config file, JSON payload or CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChannelSizeBound {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl ChannelSizeBound {
    /// Coerce the bound to an integer, or `None` when the default applies.
    ///
    /// Numeric zero counts as absent while the text `"0"` is a real zero.
    pub fn to_sats(&self) -> Option<i64> {
        match self {
            Self::Integer(0) => None,
            Self::Integer(n) => Some(*n),
            Self::Float(f) if *f == 0.0 || !f.is_finite() => None,
            Self::Float(f) => Some(f.trunc() as i64),
            Self::Text(s) => normalize::parse_leading_integer(s),
        }
    }
}

impl From<i64> for ChannelSizeBound {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for ChannelSizeBound {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for ChannelSizeBound {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u64> for ChannelSizeBound {
    fn from(value: u64) -> Self {
        Self::Integer(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for ChannelSizeBound {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ChannelSizeBound {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ChannelSizeBound {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Channel size options supplied by the owner of the picker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSizeOptions {
    #[serde(
        default,
        alias = "min_channel_size",
        alias = "minchannelsize",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_channel_size: Option<ChannelSizeBound>,
    #[serde(
        default,
        alias = "max_channel_size",
        alias = "maxchannelsize",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_channel_size: Option<ChannelSizeBound>,
}

impl ChannelSizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_channel_size(mut self, bound: impl Into<ChannelSizeBound>) -> Self {
        self.min_channel_size = Some(bound.into());
        self
    }

    pub fn max_channel_size(mut self, bound: impl Into<ChannelSizeBound>) -> Self {
        self.max_channel_size = Some(bound.into());
        self
    }

    /// Parse options from a JSON object such as an LSP info payload.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    fn configured_min(&self) -> i64 {
        self.min_channel_size
            .as_ref()
            .and_then(ChannelSizeBound::to_sats)
            .unwrap_or(DEFAULT_MIN_CHANNEL_SIZE)
    }

    fn configured_max(&self) -> i64 {
        self.max_channel_size
            .as_ref()
            .and_then(ChannelSizeBound::to_sats)
            .unwrap_or(DEFAULT_MAX_CHANNEL_SIZE)
    }
}

/// The `(min, max, step)` triple the picker enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveRange {
    min_sats: u64,
    max_sats: u64,
    step: u64,
}

impl EffectiveRange {
    /// Resolve options into an effective range. Never fails.
    ///
    /// A maximum below the floored minimum is lifted to the minimum, which
    /// leaves a single selectable value.
    pub fn resolve(options: &ChannelSizeOptions) -> Self {
        let min_sats = options.configured_min().max(HARD_MIN_SATS as i64) as u64;
        let configured_max = options.configured_max();
        let max_sats = if configured_max < min_sats as i64 {
            log::debug!(
                "max channel size {configured_max} is below the minimum {min_sats}, lifting it"
            );
            min_sats
        } else {
            configured_max as u64
        };

        Self {
            min_sats,
            max_sats,
            step: derive_step(max_sats - min_sats),
        }
    }

    pub fn min_sats(&self) -> u64 {
        self.min_sats
    }

    pub fn max_sats(&self) -> u64 {
        self.max_sats
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    pub fn clamp(&self, sats: u64) -> u64 {
        sats.max(self.min_sats).min(self.max_sats)
    }

    /// Strip non-digits from `text`, parse it and clamp the result.
    pub fn normalize_text(&self, text: &str) -> Option<u64> {
        normalize::parse_digits(text).map(|sats| self.clamp(sats))
    }

    /// Largest step-aligned value a slider can reach.
    pub fn grid_max(&self) -> u64 {
        self.min_sats + self.max_index() * self.step
    }

    /// Move `steps` slider positions away from `sats`.
    ///
    /// Values off the step grid move to the nearest grid point in the
    /// direction of travel first.
    pub fn step_by(&self, sats: u64, steps: i64) -> u64 {
        let sats = self.clamp(sats);
        let offset = sats - self.min_sats;
        let index = i128::from(offset / self.step);
        let on_grid = offset % self.step == 0;

        let target = if steps < 0 && !on_grid {
            index + i128::from(steps) + 1
        } else {
            index + i128::from(steps)
        };
        let target = target.clamp(0, i128::from(self.max_index())) as u64;
        let moved = self.min_sats + target * self.step;

        match steps.signum() {
            1 => moved.max(sats),
            -1 => moved.min(sats),
            _ => sats,
        }
    }

    /// Value under a track position, `0.0` being the left end.
    pub fn value_at(&self, ratio: f64) -> u64 {
        let ratio = if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        };
        let span = (self.max_sats - self.min_sats) as f64;
        let index = (ratio * span / self.step as f64).round() as u64;
        self.min_sats + index.min(self.max_index()) * self.step
    }

    /// Track position of `sats`, in `0.0..=1.0`.
    pub fn ratio_of(&self, sats: u64) -> f64 {
        if self.max_sats == self.min_sats {
            return 0.0;
        }
        (self.clamp(sats) - self.min_sats) as f64 / (self.max_sats - self.min_sats) as f64
    }

    fn max_index(&self) -> u64 {
        (self.max_sats - self.min_sats) / self.step
    }
}

impl Default for EffectiveRange {
    fn default() -> Self {
        Self::resolve(&ChannelSizeOptions::default())
    }
}

impl From<&ChannelSizeOptions> for EffectiveRange {
    fn from(options: &ChannelSizeOptions) -> Self {
        Self::resolve(options)
    }
}

/// Step for a slider spanning `range` sats, rounded to one significant digit.
pub fn derive_step(range: u64) -> u64 {
    let raw_step = (range / TARGET_SLIDER_POSITIONS).max(MIN_STEP);
    let magnitude = 10u64.pow(raw_step.ilog10());
    (raw_step / magnitude + u64::from(raw_step % magnitude >= magnitude / 2)) * magnitude
}
