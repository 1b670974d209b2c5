//! JSON output types for the `--json` flag.
//!
//! These types let scripts and other tools read the outcome of a conversion
//! without scraping human-readable output.

use serde::Serialize;
use text_to_morse_audio::RenderParams;

use crate::config::Adjustment;

/// Error codes for CLI-level failures.
///
/// Library failures carry their own `TTM_XXX` codes.
pub mod error_codes {
    /// Input file could not be opened
    pub const INPUT_OPEN: &str = "CLI_001";
    /// Any other conversion failure
    pub const CONVERT: &str = "CLI_002";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "TTM_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Details of a successful conversion.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConvertResult {
    /// Samples written to the output file
    pub num_samples: usize,
    /// Audio length in seconds
    pub duration_seconds: f64,
    /// BLAKE3 hash of the PCM payload
    pub pcm_hash: String,
    /// Input bytes read
    pub characters: usize,
    /// Input bytes with no Morse pattern
    pub unmapped: usize,
    /// Time spent building waveforms and rendering
    pub render_ms: u64,
    /// Time spent encoding and writing the file
    pub encode_ms: u64,
    /// Size of the rendered sample buffer
    pub memory_bytes: usize,
}

/// Top-level `--json` document for the convert command.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConvertOutput {
    /// Whether the output file was written
    pub success: bool,
    /// Input path as given
    pub input: String,
    /// Output path as given
    pub output: String,
    /// Parameters after sanitization
    pub params: RenderParams,
    /// Values that fell back to defaults
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub adjustments: Vec<Adjustment>,
    /// Conversion details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ConvertResult>,
    /// Errors (on failure)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_omits_result() {
        let output = ConvertOutput {
            success: false,
            input: "in.txt".to_string(),
            output: "out.wav".to_string(),
            params: RenderParams::default(),
            adjustments: vec![],
            result: None,
            errors: vec![JsonError::new(error_codes::INPUT_OPEN, "not found")],
        };
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["success"], false);
        assert!(value.get("result").is_none());
        assert!(value.get("adjustments").is_none());
        assert_eq!(value["errors"][0]["code"], "CLI_001");
        assert_eq!(value["params"]["wpm"], 18);
    }
}
