//! Writes rendered samples to disk.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{AudioError, AudioResult};

use super::format::WavFormat;
use super::writer::{samples_to_pcm16, write_wav};

/// Encodes the first `total_samples` of `samples` into a WAV file at `path`.
///
/// # Errors
/// [`AudioError::InvalidParameter`] if `total_samples` exceeds the buffer,
/// [`AudioError::Io`] if the file cannot be written.
pub fn encode(path: impl AsRef<Path>, samples: &[i16], total_samples: usize) -> AudioResult<()> {
    let path = path.as_ref();
    if total_samples > samples.len() {
        return Err(AudioError::invalid_param(
            "total_samples",
            format!(
                "{} requested but only {} rendered",
                total_samples,
                samples.len()
            ),
        ));
    }

    let pcm = samples_to_pcm16(&samples[..total_samples]);
    let mut writer = BufWriter::new(File::create(path)?);
    write_wav(&mut writer, &WavFormat::morse(), &pcm)?;
    writer.flush()?;

    log::debug!("wrote {} samples to {}", total_samples, path.display());
    Ok(())
}
