//! Loading WAV and headerless raw PCM captures.
//!
//! Both loaders fully read and close the file before decoding begins, then
//! hand back a read-only [`SampleBuffer`]. Missing or unreadable files
//! propagate immediately as errors; there is no retry.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::decode::SampleFormat;
use crate::repr::SampleBuffer;
use crate::{PcmCompareError, PcmCompareResult};

/// Format description for a headerless raw PCM capture.
///
/// Raw dumps carry no header, so the sample width, rate, and channel count
/// must be supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSpec {
    /// Storage format of each sample.
    pub format: SampleFormat,
    /// Sample rate in frames per second.
    pub sample_rate: u32,
    /// Number of interleaved channels.
    pub channels: u16,
}

impl RawSpec {
    /// Spec for the experiment's native `.raw` dumps: 32-bit signed
    /// little-endian samples.
    pub const fn native_i32(sample_rate: u32, channels: u16) -> Self {
        Self {
            format: SampleFormat::I32,
            sample_rate,
            channels,
        }
    }
}

/// Reads an integer-PCM WAV file into a sample buffer.
///
/// The header is parsed by `hound`; no validation happens beyond what the
/// reader itself performs. Sample widths 8/16/24/32 are supported;
/// float-format WAV data is rejected.
///
/// # Errors
/// [`PcmCompareError::Wav`] on parse or read failures,
/// [`PcmCompareError::UnsupportedFormat`] for float data or unsupported
/// bit depths.
pub fn read_wav<P: AsRef<Path>>(path: P) -> PcmCompareResult<SampleBuffer> {
    let path = path.as_ref();
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    if spec.sample_format != hound::SampleFormat::Int {
        return Err(PcmCompareError::UnsupportedFormat(
            "float WAV data is not supported".to_string(),
        ));
    }
    let format = SampleFormat::from_bits_per_sample(spec.bits_per_sample)?;
    let samples = reader
        .samples::<i32>()
        .collect::<Result<Vec<_>, hound::Error>>()?;
    debug!(
        path = %path.display(),
        sample_rate = spec.sample_rate,
        channels = spec.channels,
        bits_per_sample = spec.bits_per_sample,
        samples = samples.len(),
        "loaded wav capture"
    );
    Ok(SampleBuffer::from_samples(
        samples,
        format,
        spec.sample_rate,
        spec.channels,
    ))
}

/// Reads a headerless raw PCM capture into a sample buffer.
///
/// The whole file is read into memory and decoded according to `spec`.
/// A trailing partial sample is ignored (see
/// [`decode_samples`](crate::decode::decode_samples)).
///
/// # Errors
/// [`PcmCompareError::Io`] if the file cannot be read.
pub fn read_raw<P: AsRef<Path>>(path: P, spec: RawSpec) -> PcmCompareResult<SampleBuffer> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let buffer = SampleBuffer::from_bytes(&bytes, spec.format, spec.sample_rate, spec.channels);
    debug!(
        path = %path.display(),
        bytes = bytes.len(),
        samples = buffer.len(),
        format = ?spec.format,
        "loaded raw capture"
    );
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_raw_i32() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capture.raw");
        let values = [0i32, -1, 8_388_607, -8_388_608, i32::MAX];
        let mut file = fs::File::create(&path).unwrap();
        for v in values {
            file.write_all(&v.to_le_bytes()).unwrap();
        }
        drop(file);

        let buffer = read_raw(&path, RawSpec::native_i32(48_000, 2)).unwrap();
        assert_eq!(buffer.samples().to_vec(), values.to_vec());
        assert_eq!(buffer.sample_rate(), 48_000);
        assert_eq!(buffer.channels(), 2);
    }

    #[test]
    fn test_read_raw_missing_file_fails() {
        let err = read_raw("/nonexistent/capture.raw", RawSpec::native_i32(48_000, 1));
        assert!(matches!(err, Err(PcmCompareError::Io(_))));
    }

    #[test]
    fn test_read_wav_missing_file_fails() {
        assert!(read_wav("/nonexistent/capture.wav").is_err());
    }

    #[test]
    fn test_read_wav_matches_manual_unpack() {
        // hound's 24-bit decode and ours must agree on the same data.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capture.wav");
        let values = [0i32, 1, -1, 8_388_607, -8_388_608, 42_000, -42_000];
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 96_000,
            bits_per_sample: 24,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        for v in values {
            writer.write_sample(v).unwrap();
        }
        writer.finalize().unwrap();

        let buffer = read_wav(&path).unwrap();
        assert_eq!(buffer.format(), SampleFormat::I24);
        assert_eq!(buffer.samples().to_vec(), values.to_vec());

        let mut bytes = Vec::new();
        for v in values {
            bytes.extend_from_slice(&crate::decode::pack_s24(v));
        }
        let manual = SampleBuffer::from_bytes(&bytes, SampleFormat::I24, 96_000, 1);
        assert_eq!(manual.samples(), buffer.samples());
    }
}
