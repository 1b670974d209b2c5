//! Deterministic WAV encoding of rendered Morse audio.
//!
//! Output is always mono, 8000 Hz, 16-bit signed little-endian PCM with no
//! timestamps or variable metadata, so identical samples always produce
//! identical files. The BLAKE3 hash of the PCM payload identifies a render.

mod encoder;
mod format;
mod pcm;
mod result;
mod writer;

#[cfg(test)]
mod tests;

pub use encoder::encode;
pub use format::WavFormat;
pub use pcm::{compute_pcm_hash, extract_pcm_data, pcm_hash};
pub use result::WavResult;
pub use writer::{samples_to_pcm16, write_wav, write_wav_to_vec};
