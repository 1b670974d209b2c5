//! Rendering parameters.

use serde::{Deserialize, Serialize};

/// Default character speed in words per minute.
pub const DEFAULT_WPM: u32 = 18;

/// Default tone frequency in Hz.
pub const DEFAULT_FREQUENCY: u32 = 600;

/// Speed and pitch for one rendering run.
///
/// Values are assumed to be sanitized by the caller: `wpm` and `fwpm` in
/// 1..=100 (`fwpm == 0` meaning "same as `wpm`") and `frequency` in
/// 100..=1000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderParams {
    /// Character speed.
    pub wpm: u32,
    /// Farnsworth word speed; 0 follows `wpm`.
    #[serde(default)]
    pub fwpm: u32,
    /// Tone frequency in Hz.
    pub frequency: u32,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            wpm: DEFAULT_WPM,
            fwpm: 0,
            frequency: DEFAULT_FREQUENCY,
        }
    }
}

impl RenderParams {
    /// Creates parameters from the three raw values.
    pub fn new(wpm: u32, fwpm: u32, frequency: u32) -> Self {
        Self {
            wpm,
            fwpm,
            frequency,
        }
    }

    /// The Farnsworth speed actually used for spacing.
    pub fn effective_fwpm(&self) -> u32 {
        if self.fwpm == 0 {
            self.wpm
        } else {
            self.fwpm
        }
    }
}
