//! Tests for the WAV module.

use pretty_assertions::assert_eq;

use super::format::WavFormat;
use super::pcm::{compute_pcm_hash, extract_pcm_data, pcm_hash};
use super::result::WavResult;
use super::writer::{samples_to_pcm16, write_wav_to_vec};

#[test]
fn test_morse_format() {
    let format = WavFormat::morse();
    assert_eq!(format.channels, 1);
    assert_eq!(format.sample_rate, 8000);
    assert_eq!(format.bits_per_sample, 16);
    assert_eq!(format.block_align(), 2);
    // 8000 samples/sec * 1 channel * 2 bytes
    assert_eq!(format.byte_rate(), 16000);
}

#[test]
fn test_samples_are_little_endian_signed() {
    let pcm = samples_to_pcm16(&[0, 1, -1, i16::MAX, i16::MIN, 0x1234]);
    assert_eq!(
        pcm,
        vec![0x00, 0x00, 0x01, 0x00, 0xff, 0xff, 0xff, 0x7f, 0x00, 0x80, 0x34, 0x12]
    );
}

#[test]
fn test_header_layout() {
    let pcm = samples_to_pcm16(&[0; 100]);
    let wav = write_wav_to_vec(&WavFormat::morse(), &pcm).unwrap();

    assert_eq!(wav.len(), 44 + 200);
    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(&wav[8..12], b"WAVE");
    assert_eq!(&wav[12..16], b"fmt ");
    assert_eq!(&wav[36..40], b"data");

    let riff_size = u32::from_le_bytes([wav[4], wav[5], wav[6], wav[7]]);
    assert_eq!(riff_size, 36 + 200);
    let data_size = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]);
    assert_eq!(data_size, 200);
}

#[test]
fn test_extract_round_trips_payload() {
    let pcm = samples_to_pcm16(&[5, -5, 1000]);
    let wav = write_wav_to_vec(&WavFormat::morse(), &pcm).unwrap();
    assert_eq!(extract_pcm_data(&wav), Some(pcm.as_slice()));
}

#[test]
fn test_extract_rejects_garbage() {
    assert_eq!(extract_pcm_data(b"RIFF"), None);
    assert_eq!(extract_pcm_data(&[0u8; 64]), None);
}

#[test]
fn test_hashes_agree() {
    let samples = [1i16, 2, 3, -4];
    let result = WavResult::from_samples(&samples).unwrap();
    assert_eq!(result.pcm_hash, pcm_hash(&samples));
    assert_eq!(compute_pcm_hash(&result.wav_data), Some(pcm_hash(&samples)));
}

#[test]
fn test_result_duration() {
    let result = WavResult::from_samples(&[0; 4000]).unwrap();
    assert_eq!(result.num_samples, 4000);
    assert_eq!(result.sample_rate, 8000);
    assert!((result.duration_seconds() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_empty_output_is_valid_file() {
    let result = WavResult::from_samples(&[]).unwrap();
    assert_eq!(result.wav_data.len(), 44);
    assert_eq!(extract_pcm_data(&result.wav_data), Some(&[][..]));
}
