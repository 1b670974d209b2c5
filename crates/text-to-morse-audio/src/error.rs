//! Error types for Morse rendering.

use thiserror::Error;

/// Result type for rendering operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur while building waveforms, rendering, or encoding.
#[derive(Debug, Error)]
pub enum AudioError {
    /// A waveform or output buffer could not be allocated.
    #[error("failed to allocate {samples} samples for {buffer}")]
    Allocation {
        /// Which buffer was being allocated.
        buffer: &'static str,
        /// Requested length in samples.
        samples: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an allocation error.
    pub fn allocation(buffer: &'static str, samples: usize) -> Self {
        Self::Allocation { buffer, samples }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Stable code for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            AudioError::Allocation { .. } => "TTM_001",
            AudioError::InvalidParameter { .. } => "TTM_002",
            AudioError::Io(_) => "TTM_003",
        }
    }
}

/// Reserves exactly `additional` more samples in `buf`, mapping failure to
/// [`AudioError::Allocation`].
pub(crate) fn try_reserve(
    buf: &mut Vec<i16>,
    additional: usize,
    buffer: &'static str,
) -> AudioResult<()> {
    buf.try_reserve_exact(additional)
        .map_err(|_| AudioError::allocation(buffer, additional))
}

/// Reserves room for at least `additional` more samples in a growing buffer,
/// letting `Vec` amortize its capacity.
pub(crate) fn try_grow(
    buf: &mut Vec<i16>,
    additional: usize,
    buffer: &'static str,
) -> AudioResult<()> {
    buf.try_reserve(additional)
        .map_err(|_| AudioError::allocation(buffer, additional))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_message() {
        let err = AudioError::allocation("dit tone", 533);
        assert!(err.to_string().contains("533"));
        assert!(err.to_string().contains("dit tone"));
        assert_eq!(err.code(), "TTM_001");
    }

    #[test]
    fn test_invalid_param_helper() {
        let err = AudioError::invalid_param("total_samples", "exceeds buffer length");
        assert!(err.to_string().contains("total_samples"));
        assert!(err.to_string().contains("exceeds buffer length"));
        assert_eq!(err.code(), "TTM_002");
    }

    #[test]
    fn test_try_reserve_impossible_size() {
        let mut buf: Vec<i16> = Vec::new();
        let err = try_reserve(&mut buf, usize::MAX, "output").unwrap_err();
        assert!(matches!(err, AudioError::Allocation { buffer: "output", .. }));
    }

    #[test]
    fn test_try_grow_impossible_size() {
        let mut buf: Vec<i16> = vec![0; 4];
        let err = try_grow(&mut buf, usize::MAX, "output").unwrap_err();
        assert_eq!(err.code(), "TTM_001");
        assert_eq!(buf.len(), 4);
    }
}
