//! Error types and result utilities for PCM comparison operations.

use thiserror::Error;

/// Convenience type alias for results that may contain PcmCompareError
pub type PcmCompareResult<T> = Result<T, PcmCompareError>;

/// Error types that can occur while loading, decoding, or comparing captures.
#[derive(Error, Debug)]
pub enum PcmCompareError {
    /// Error that occurs when a capture file cannot be opened or read.
    ///
    /// Failure propagates immediately; there is no retry or partial-result
    /// fallback.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error that occurs when a WAV file cannot be parsed or its sample
    /// stream cannot be read.
    #[error("WAV read error: {0}")]
    Wav(#[from] hound::Error),

    /// Error that occurs when a capture uses a sample format the decoder
    /// does not handle (e.g. float WAV data, or a bit depth outside
    /// 8/16/24/32).
    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),

    /// Error that occurs when the golden/lost/comp variants of a dataset
    /// disagree on sample rate or channel count.
    ///
    /// The three variants must represent the same underlying signal; no
    /// resampling or alignment correction is performed.
    #[error("Variant mismatch: {0}")]
    VariantMismatch(String),

    /// Error that occurs when invalid parameters are provided to an
    /// operation.
    #[error("Invalid parameter error: {0}")]
    InvalidParameter(String),
}
