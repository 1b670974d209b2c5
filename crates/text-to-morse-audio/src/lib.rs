//! Text to Morse code audio
//!
//! This crate turns a stream of text bytes into 16-bit mono PCM at 8000 Hz
//! representing International Morse code, and encodes that PCM as WAV.
//!
//! # Overview
//!
//! Rendering is a short pipeline:
//!
//! - **Timing** - words-per-minute to integer sample counts
//! - **Tones** - enveloped sine waves for dit and dah, built once
//! - **Spaces** - zero-filled gaps between elements, characters and words
//! - **Alphabet** - byte to Morse pattern lookup
//! - **Render** - sequences copies of the above into one output buffer
//!
//! Farnsworth timing is supported: characters are keyed at `wpm` while the
//! gaps between characters and words are stretched to `fwpm`.
//!
//! # Determinism
//!
//! Output depends only on the input bytes and the [`RenderParams`]. Rendering
//! the same text twice yields identical samples and an identical PCM hash.
//!
//! # Example
//!
//! ```no_run
//! use text_to_morse_audio::{wav, RenderParams, RenderSession};
//!
//! # fn main() -> Result<(), text_to_morse_audio::AudioError> {
//! let mut session = RenderSession::new(&RenderParams::new(20, 12, 700))?;
//! session.render_bytes(b"CQ CQ DE N0CALL")?;
//! session.release_waveforms();
//!
//! let samples = session.into_output();
//! wav::encode("cq.wav", &samples, samples.len())?;
//! # Ok(())
//! # }
//! ```
//!
//! # Crate Structure
//!
//! - [`timing`] - Sample counts per element
//! - [`tone`] - Dit and dah synthesis
//! - [`space`] - Silence buffers
//! - [`alphabet`] - Morse lookup table
//! - [`render`] - Buffer assembly
//! - [`session`] - Owned state for one run
//! - [`wav`] - Deterministic WAV encoder

pub mod alphabet;
pub mod error;
pub mod params;
pub mod render;
pub mod session;
pub mod space;
pub mod timing;
pub mod tone;
pub mod wav;

// Re-export main types at crate root
pub use error::{AudioError, AudioResult};
pub use params::RenderParams;
pub use render::RenderStats;
pub use session::RenderSession;
pub use space::SilenceSet;
pub use tone::ToneSet;
pub use wav::WavResult;
