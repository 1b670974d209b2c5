//! Prebuilt silence for the three Morse spacing intervals.

use crate::error::{try_reserve, AudioResult};
use crate::timing;

fn silence(len: usize, buffer: &'static str) -> AudioResult<Vec<i16>> {
    let mut samples = Vec::new();
    try_reserve(&mut samples, len, buffer)?;
    samples.resize(len, 0);
    Ok(samples)
}

/// Zero-filled spacing buffers for one rendering run.
///
/// The intra-character space follows the character speed; the
/// inter-character and inter-word spaces follow the Farnsworth speed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SilenceSet {
    intra_character: Vec<i16>,
    inter_character: Vec<i16>,
    inter_word: Vec<i16>,
}

impl SilenceSet {
    /// Builds the three spacing buffers.
    pub fn new(wpm: u32, fwpm: u32) -> AudioResult<Self> {
        let inter_character = silence(
            timing::inter_character_space(fwpm),
            "inter-character space",
        )?;
        let intra_character = silence(
            timing::intra_character_space(wpm),
            "intra-character space",
        )?;
        let inter_word = silence(timing::inter_word_space(fwpm), "inter-word space")?;

        log::debug!(
            "spaces ready: intra={} inter={} word={} samples",
            intra_character.len(),
            inter_character.len(),
            inter_word.len()
        );

        Ok(Self {
            intra_character,
            inter_character,
            inter_word,
        })
    }

    /// Silence between elements of a character.
    pub fn intra_character(&self) -> &[i16] {
        &self.intra_character
    }

    /// Silence between characters.
    pub fn inter_character(&self) -> &[i16] {
        &self.inter_character
    }

    /// Silence emitted for the word-space symbol.
    pub fn inter_word(&self) -> &[i16] {
        &self.inter_word
    }

    /// Returns true once all buffers have been released (or never built).
    pub fn is_empty(&self) -> bool {
        self.intra_character.is_empty()
            && self.inter_character.is_empty()
            && self.inter_word.is_empty()
    }

    /// Releases all three buffers. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        self.intra_character = Vec::new();
        self.inter_character = Vec::new();
        self.inter_word = Vec::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths_follow_timing() {
        let spaces = SilenceSet::new(20, 10).unwrap();
        assert_eq!(spaces.intra_character().len(), timing::unit(20));
        assert_eq!(spaces.inter_character().len(), 3 * timing::unit(10));
        assert_eq!(spaces.inter_word().len(), 5 * timing::unit(10));
    }

    #[test]
    fn test_all_zero() {
        for (wpm, fwpm) in [(1, 1), (18, 18), (25, 5), (100, 100)] {
            let spaces = SilenceSet::new(wpm, fwpm).unwrap();
            assert!(spaces.intra_character().iter().all(|&s| s == 0));
            assert!(spaces.inter_character().iter().all(|&s| s == 0));
            assert!(spaces.inter_word().iter().all(|&s| s == 0));
        }
    }

    #[test]
    fn test_teardown_is_idempotent() {
        let mut spaces = SilenceSet::new(18, 18).unwrap();
        spaces.teardown();
        assert!(spaces.is_empty());
        spaces.teardown();
        assert!(spaces.is_empty());
    }
}
