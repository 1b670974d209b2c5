//! In-memory encoding result.

use std::io;

use crate::timing::SAMPLE_RATE;

use super::format::WavFormat;
use super::writer::{samples_to_pcm16, write_wav_to_vec};

/// A fully encoded WAV file plus identifying metadata.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM payload only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes `samples` in the fixed Morse output format.
    pub fn from_samples(samples: &[i16]) -> io::Result<Self> {
        let pcm = samples_to_pcm16(samples);
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let wav_data = write_wav_to_vec(&WavFormat::morse(), &pcm)?;

        Ok(Self {
            wav_data,
            pcm_hash,
            sample_rate: SAMPLE_RATE,
            num_samples: samples.len(),
        })
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}
