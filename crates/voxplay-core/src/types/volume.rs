//! Playback volume.

use serde::{Deserialize, Serialize};

/// Playback volume in `[0.0, 1.0]`.
///
/// Construction always clamps, so any `Volume` handed to a player is in range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct Volume(f32);

impl Volume {
    pub const MIN: Self = Self(0.0);
    pub const MAX: Self = Self(1.0);
    pub const DEFAULT: Self = Self(0.8);

    /// Full scale of the `PulseAudio` volume argument.
    pub const PULSE_FULL_SCALE: f64 = 65536.0;

    /// Create a volume, clamping to `[0.0, 1.0]`. NaN maps to silence.
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub const fn get(self) -> f32 {
        self.0
    }

    /// Volume on the `paplay` scale (`0..=65536`).
    pub fn to_pulse(self) -> u32 {
        (f64::from(self.0) * Self::PULSE_FULL_SCALE).round() as u32
    }

    /// Volume formatted for `afplay -v`, always with a fractional part (`1.0`, `0.8`).
    pub fn to_afplay_arg(self) -> String {
        format!("{:?}", self.0)
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<f32> for Volume {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<Volume> for f32 {
    fn from(volume: Volume) -> Self {
        volume.0
    }
}

impl std::fmt::Display for Volume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}%", self.0 * 100.0)
    }
}
