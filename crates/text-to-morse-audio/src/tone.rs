//! Prebuilt dit and dah tones.
//!
//! Both tones are sine waves at the requested frequency with a linear attack
//! and release ramp, so keying on and off does not click.

use std::f64::consts::PI;

use crate::error::{try_reserve, AudioResult};
use crate::timing::{self, AMPLITUDE, SAMPLE_RATE};

/// Linear envelope gain for sample `i` of a tone `len` samples long.
///
/// Ramps are clamped to half of `len` so they never overlap.
pub fn envelope_gain(i: usize, len: usize, rise: usize, fall: usize) -> f64 {
    let rise = rise.min(len / 2);
    let fall = fall.min(len / 2);

    if i < rise {
        i as f64 / rise as f64
    } else if fall > 0 && i > len - fall {
        (len - i) as f64 / fall as f64
    } else {
        1.0
    }
}

/// Fills a freshly allocated buffer with an enveloped sine tone.
fn synthesize(
    len: usize,
    rise: usize,
    fall: usize,
    frequency: u32,
    buffer: &'static str,
) -> AudioResult<Vec<i16>> {
    let mut samples = Vec::new();
    try_reserve(&mut samples, len, buffer)?;

    samples.extend((0..len).map(|i| {
        let t = i as f64 / SAMPLE_RATE as f64;
        // Quantized before and after the envelope.
        let raw = (AMPLITUDE * (frequency as f64 * t * 2.0 * PI).sin()) as i16;
        (raw as f64 * envelope_gain(i, len, rise, fall)) as i16
    }));

    Ok(samples)
}

/// The dit and dah waveforms for one rendering run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToneSet {
    dit: Vec<i16>,
    dah: Vec<i16>,
}

impl ToneSet {
    /// Synthesizes both tones for `wpm` at `frequency` Hz.
    pub fn new(wpm: u32, frequency: u32) -> AudioResult<Self> {
        let rise = timing::rise_time(wpm);
        let fall = timing::fall_time(wpm);

        let dit = synthesize(timing::dit(wpm), rise, fall, frequency, "dit tone")?;
        let dah = synthesize(timing::dah(wpm), rise, fall, frequency, "dah tone")?;

        log::debug!(
            "tones ready: dit={} dah={} samples at {} Hz (ramp {}/{})",
            dit.len(),
            dah.len(),
            frequency,
            rise,
            fall
        );

        Ok(Self { dit, dah })
    }

    /// The dit waveform.
    pub fn dit(&self) -> &[i16] {
        &self.dit
    }

    /// The dah waveform.
    pub fn dah(&self) -> &[i16] {
        &self.dah
    }

    /// Returns true once both buffers have been released (or never built).
    pub fn is_empty(&self) -> bool {
        self.dit.is_empty() && self.dah.is_empty()
    }

    /// Releases both buffers. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        self.dit = Vec::new();
        self.dah = Vec::new();
    }
}
