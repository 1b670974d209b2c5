//! Sample counts for every timed Morse element.
//!
//! All durations derive from the PARIS standard: one word is 50 units, so at
//! `wpm` words per minute a unit lasts `60 / (50 * wpm)` seconds. Element
//! lengths are whole multiples of the unit, truncated to integer samples.
//!
//! See <https://morsecode.world/international/timing.html>.

/// Output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 8000;

/// Output channel count.
pub const CHANNELS: u16 = 1;

/// Output bits per sample.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Peak tone amplitude, a quarter of the positive 16-bit range.
pub const AMPLITUDE: f64 = 8192.0;

/// Length of one unit in samples.
///
/// A `wpm` of zero is treated as 1.
pub fn unit(wpm: u32) -> usize {
    let wpm = wpm.max(1) as f64;
    (SAMPLE_RATE as f64 * (60.0 / (50.0 * wpm))) as usize
}

/// Length of a dit tone: one unit.
pub fn dit(wpm: u32) -> usize {
    unit(wpm)
}

/// Length of a dah tone: three units.
pub fn dah(wpm: u32) -> usize {
    3 * unit(wpm)
}

/// Silence between the elements of one character: one unit.
pub fn intra_character_space(wpm: u32) -> usize {
    unit(wpm)
}

/// Silence between characters: three units.
pub fn inter_character_space(wpm: u32) -> usize {
    3 * unit(wpm)
}

/// Silence for the word-space symbol: five units.
///
/// The renderer surrounds the symbol with intra-character spaces, which
/// brings the full gap to seven units. Callers pass the Farnsworth speed.
pub fn inter_word_space(wpm: u32) -> usize {
    5 * unit(wpm)
}

/// Samples per millisecond at [`SAMPLE_RATE`].
pub fn per_ms() -> usize {
    (SAMPLE_RATE / 1000) as usize
}

/// Envelope rise length: 5 ms above 30 wpm, 6 ms otherwise.
pub fn rise_time(wpm: u32) -> usize {
    ramp_ms(wpm) * per_ms()
}

/// Envelope fall length: 5 ms above 30 wpm, 6 ms otherwise.
pub fn fall_time(wpm: u32) -> usize {
    ramp_ms(wpm) * per_ms()
}

fn ramp_ms(wpm: u32) -> usize {
    if wpm > 30 {
        5
    } else {
        6
    }
}
