//! Owned rendering state for one run.
//!
//! A [`RenderSession`] holds the prebuilt tones and spaces plus the output
//! buffer they are assembled into. The waveforms are written once on
//! construction and only read afterwards; the output only ever grows until it
//! is released or handed off with [`RenderSession::into_output`].

use std::io::Read;

use crate::error::AudioResult;
use crate::params::RenderParams;
use crate::render::{self, RenderStats};
use crate::space::SilenceSet;
use crate::tone::ToneSet;

/// Prebuilt waveforms plus the output they are rendered into.
#[derive(Debug, Clone)]
pub struct RenderSession {
    tones: ToneSet,
    spaces: SilenceSet,
    output: Vec<i16>,
}

impl RenderSession {
    /// Builds all waveforms for `params`.
    ///
    /// Fails only if a waveform cannot be allocated; nothing is kept in that
    /// case.
    pub fn new(params: &RenderParams) -> AudioResult<Self> {
        let fwpm = params.effective_fwpm();
        let spaces = SilenceSet::new(params.wpm, fwpm)?;
        let tones = ToneSet::new(params.wpm, params.frequency)?;

        Ok(Self {
            tones,
            spaces,
            output: Vec::new(),
        })
    }

    /// The prebuilt tones.
    pub fn tones(&self) -> &ToneSet {
        &self.tones
    }

    /// The prebuilt spaces.
    pub fn spaces(&self) -> &SilenceSet {
        &self.spaces
    }

    /// Renders all of `input`, appending to the output buffer.
    pub fn render<R: Read>(&mut self, input: R) -> AudioResult<RenderStats> {
        let stats = render::render(input, &self.tones, &self.spaces, &mut self.output)?;
        log::debug!(
            "rendered {} characters ({} unmapped) into {} samples",
            stats.characters,
            stats.unmapped,
            stats.samples
        );
        Ok(stats)
    }

    /// Renders an in-memory byte string.
    pub fn render_bytes(&mut self, input: &[u8]) -> AudioResult<RenderStats> {
        self.render(input)
    }

    /// The rendered samples so far.
    pub fn output(&self) -> &[i16] {
        &self.output
    }

    /// Number of rendered samples so far.
    pub fn sample_count(&self) -> usize {
        self.output.len()
    }

    /// Bytes held by the rendered samples.
    pub fn memory_bytes(&self) -> usize {
        self.output.len() * std::mem::size_of::<i16>()
    }

    /// Hands the rendered samples to the caller, consuming the session.
    pub fn into_output(self) -> Vec<i16> {
        self.output
    }

    /// Releases the prebuilt tones and spaces. Safe to call repeatedly.
    ///
    /// Rendering after this appends nothing.
    pub fn release_waveforms(&mut self) {
        self.tones.teardown();
        self.spaces.teardown();
    }

    /// Discards the rendered samples. Safe to call repeatedly.
    pub fn release_output(&mut self) {
        self.output = Vec::new();
    }
}
