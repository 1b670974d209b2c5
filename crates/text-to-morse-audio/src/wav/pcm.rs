//! PCM payload extraction and hashing.

use super::writer::samples_to_pcm16;

/// Extracts the `data` chunk from a WAV file buffer.
///
/// Returns `None` if the buffer is not a RIFF/WAVE file or has no complete
/// data chunk.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < 44 {
        return None;
    }

    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        if chunk_id == b"data" {
            let data_start = pos + 8;
            let data_end = data_start + chunk_size;
            if data_end <= wav_data.len() {
                return Some(&wav_data[data_start..data_end]);
            }
            return None;
        }

        // Chunks are word aligned
        pos += 8 + chunk_size + (chunk_size & 1);
    }

    None
}

/// BLAKE3 hash of the PCM payload of a WAV file.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}

/// BLAKE3 hash of `samples` as they would be stored in a WAV file.
pub fn pcm_hash(samples: &[i16]) -> String {
    blake3::hash(&samples_to_pcm16(samples)).to_hex().to_string()
}
