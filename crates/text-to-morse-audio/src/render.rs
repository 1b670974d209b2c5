//! Sequences prebuilt waveforms into one PCM buffer.
//!
//! Gaps only ever appear *between* elements: an inter-character space
//! precedes every character but the first, and an intra-character space
//! precedes every symbol but the first within a character. There is no
//! leading or trailing silence.
//!
//! A byte with an empty pattern emits nothing, but the inter-character space
//! already emitted in front of it stays in the output.

use std::io::{BufReader, Read};

use crate::alphabet::{self, Symbol};
use crate::error::{try_grow, AudioResult};
use crate::space::SilenceSet;
use crate::tone::ToneSet;

/// Counters collected while rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Input bytes consumed.
    pub characters: usize,
    /// Bytes that had no Morse pattern.
    pub unmapped: usize,
    /// Samples appended by this call.
    pub samples: usize,
}

/// Appends waveform copies to an output buffer.
struct Emitter<'a> {
    tones: &'a ToneSet,
    spaces: &'a SilenceSet,
    out: &'a mut Vec<i16>,
}

impl Emitter<'_> {
    fn append(&mut self, samples: &[i16]) -> AudioResult<()> {
        try_grow(self.out, samples.len(), "output")?;
        self.out.extend_from_slice(samples);
        Ok(())
    }

    fn symbol(&mut self, symbol: Symbol) -> AudioResult<()> {
        let (tones, spaces) = (self.tones, self.spaces);
        let waveform = match symbol {
            Symbol::Dit => tones.dit(),
            Symbol::Dah => tones.dah(),
            Symbol::WordSpace => spaces.inter_word(),
        };
        self.append(waveform)
    }

    /// Builds one character out of dits, dahs and word spaces.
    fn character(&mut self, byte: u8) -> AudioResult<bool> {
        let spaces = self.spaces;
        let mut any = false;
        for (i, symbol) in alphabet::symbols(byte).enumerate() {
            if i != 0 {
                self.append(spaces.intra_character())?;
            }
            self.symbol(symbol)?;
            any = true;
        }
        Ok(any)
    }
}

/// Renders every byte of `input` into `out`.
///
/// Existing content of `out` is kept; new samples are appended after it.
pub fn render<R: Read>(
    input: R,
    tones: &ToneSet,
    spaces: &SilenceSet,
    out: &mut Vec<i16>,
) -> AudioResult<RenderStats> {
    let start_len = out.len();
    let mut stats = RenderStats::default();
    let mut emitter = Emitter { tones, spaces, out };

    for (i, byte) in BufReader::new(input).bytes().enumerate() {
        let byte = byte?;
        if i != 0 {
            emitter.append(spaces.inter_character())?;
        }
        if !emitter.character(byte)? {
            log::trace!("no pattern for byte {byte:#04x}");
            stats.unmapped += 1;
        }
        stats.characters += 1;
    }

    stats.samples = emitter.out.len() - start_len;
    Ok(stats)
}
