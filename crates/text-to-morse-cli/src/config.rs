//! Turns raw command-line numbers into render parameters.
//!
//! Out-of-range values are not errors. Each one falls back to its default
//! and is reported as an [`Adjustment`].

use serde::Serialize;
use std::ops::RangeInclusive;
use text_to_morse_audio::params::{DEFAULT_FREQUENCY, DEFAULT_WPM};
use text_to_morse_audio::RenderParams;

/// Accepted character and Farnsworth speeds.
pub const WPM_RANGE: RangeInclusive<i64> = 1..=100;

/// Accepted tone frequencies in Hz.
pub const TONE_RANGE: RangeInclusive<i64> = 100..=1000;

/// A value that was replaced by its fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Adjustment {
    /// Option name.
    pub name: &'static str,
    /// Value given on the command line.
    pub given: i64,
    /// Value used instead.
    pub used: u32,
}

/// Sanitized parameters plus any fallbacks that were applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub params: RenderParams,
    pub adjustments: Vec<Adjustment>,
}

fn within(
    name: &'static str,
    given: i64,
    range: &RangeInclusive<i64>,
    fallback: u32,
    adjustments: &mut Vec<Adjustment>,
) -> u32 {
    if range.contains(&given) {
        given as u32
    } else {
        log::warn!(
            "{} {} outside {}..={}, using {}",
            name,
            given,
            range.start(),
            range.end(),
            fallback
        );
        adjustments.push(Adjustment {
            name,
            given,
            used: fallback,
        });
        fallback
    }
}

/// Sanitizes `wpm`, `fwpm` and `tone`.
///
/// `fwpm == 0` is the documented "same as wpm" value and is not an
/// adjustment.
pub fn sanitize(wpm: i64, fwpm: i64, tone: i64) -> Settings {
    let mut adjustments = Vec::new();

    let wpm = within("wpm", wpm, &WPM_RANGE, DEFAULT_WPM, &mut adjustments);
    let fwpm = if fwpm == 0 {
        0
    } else {
        within("fwpm", fwpm, &WPM_RANGE, 0, &mut adjustments)
    };
    let frequency = within("tone", tone, &TONE_RANGE, DEFAULT_FREQUENCY, &mut adjustments);

    Settings {
        params: RenderParams::new(wpm, fwpm, frequency),
        adjustments,
    }
}
