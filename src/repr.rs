//! Sample buffer representation and windowed extraction.
//!
//! A [`SampleBuffer`] pairs decoded amplitude values with the capture's
//! metadata (sample rate, channel count, storage format). Buffers are
//! constructed once, fully materialized, and used read-only for slicing
//! during plotting — there is no mutation or persistence.
//!
//! A [`Window`] selects the half-open frame range `[start, end)` to render,
//! optionally offset per chart panel by a padding stride.

use ndarray::{Array1, ArrayView1, s};

use crate::decode::{SampleFormat, decode_samples};

/// A fully-decoded, read-only PCM capture.
///
/// Samples are stored channel-interleaved in file order, one `i32` per
/// slot, exactly as decoded by [`decode_samples`].
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    samples: Array1<i32>,
    sample_rate: u32,
    channels: u16,
    format: SampleFormat,
}

impl SampleBuffer {
    /// Wraps already-decoded samples with their capture metadata.
    pub fn from_samples(
        samples: Vec<i32>,
        format: SampleFormat,
        sample_rate: u32,
        channels: u16,
    ) -> Self {
        Self {
            samples: Array1::from_vec(samples),
            sample_rate,
            channels,
            format,
        }
    }

    /// Decodes a raw byte buffer and wraps the result.
    ///
    /// The byte length must be a multiple of the sample size — see
    /// [`decode_samples`] for the alignment contract.
    pub fn from_bytes(
        bytes: &[u8],
        format: SampleFormat,
        sample_rate: u32,
        channels: u16,
    ) -> Self {
        Self::from_samples(decode_samples(bytes, format), format, sample_rate, channels)
    }

    /// Total number of decoded samples across all channels.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample rate in frames per second.
    pub const fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of interleaved channels.
    pub const fn channels(&self) -> u16 {
        self.channels
    }

    /// Storage format the capture was decoded from.
    pub const fn format(&self) -> SampleFormat {
        self.format
    }

    /// View over all samples.
    pub fn samples(&self) -> ArrayView1<'_, i32> {
        self.samples.view()
    }

    /// Number of frames (one sample per channel per frame).
    pub fn samples_per_channel(&self) -> usize {
        self.len() / usize::from(self.channels.max(1))
    }

    /// Capture duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples_per_channel() as f64 / f64::from(self.sample_rate)
    }
}

/// A half-open frame range `[start, end)` with a padding stride.
///
/// The stride offsets the range for repeated chart panels: panel `layer`
/// shows `buffer[start + layer * padding .. end + layer * padding]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// First frame index (inclusive).
    pub start: usize,
    /// One past the last frame index (exclusive).
    pub end: usize,
    /// Offset stride between repeated chart panels.
    pub padding: usize,
}

impl Window {
    /// Creates a window over `[start, end)` with no padding stride.
    pub const fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            padding: 0,
        }
    }

    /// Sets the padding stride between repeated chart panels.
    pub const fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// First frame index visible in the given panel.
    pub const fn layer_start(&self, layer: usize) -> usize {
        self.start + layer * self.padding
    }

    /// Extracts the slice visible in panel `layer`.
    ///
    /// Ranges reaching past the end of the buffer truncate to what is
    /// available (possibly an empty view); slicing never fails.
    pub fn slice<'a>(&self, buffer: &'a SampleBuffer, layer: usize) -> ArrayView1<'a, i32> {
        let offset = layer * self.padding;
        let start = (self.start + offset).min(buffer.len());
        let end = (self.end + offset).min(buffer.len()).max(start);
        buffer.samples.slice(s![start..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp_buffer(len: usize) -> SampleBuffer {
        SampleBuffer::from_samples(
            (0..len as i32).collect(),
            SampleFormat::I32,
            48_000,
            1,
        )
    }

    #[test]
    fn test_buffer_from_bytes() {
        let bytes = [0x00, 0x00, 0x80, 0xFF, 0xFF, 0x7F];
        let buffer = SampleBuffer::from_bytes(&bytes, SampleFormat::I24, 96_000, 2);
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.samples()[0], -8_388_608);
        assert_eq!(buffer.samples()[1], 8_388_607);
        assert_eq!(buffer.sample_rate(), 96_000);
        assert_eq!(buffer.channels(), 2);
        assert_eq!(buffer.samples_per_channel(), 1);
    }

    #[test]
    fn test_duration() {
        let buffer = ramp_buffer(48_000);
        assert_eq!(buffer.duration_seconds(), 1.0);
    }

    #[test]
    fn test_window_in_bounds() {
        let buffer = ramp_buffer(100);
        let slice = Window::new(10, 20).slice(&buffer, 0);
        assert_eq!(slice.len(), 10);
        assert_eq!(slice[0], 10);
        assert_eq!(slice[9], 19);
    }

    #[test]
    fn test_window_truncates_past_end() {
        // end > N returns exactly buffer[start..N], never an error.
        let buffer = ramp_buffer(50);
        let slice = Window::new(40, 90).slice(&buffer, 0);
        assert_eq!(slice.len(), 10);
        assert_eq!(slice[0], 40);
        assert_eq!(slice[9], 49);
    }

    #[test]
    fn test_window_fully_past_end_is_empty() {
        let buffer = ramp_buffer(50);
        let slice = Window::new(60, 90).slice(&buffer, 0);
        assert!(slice.is_empty());
    }

    #[test]
    fn test_window_layers_offset_by_padding() {
        let buffer = ramp_buffer(100);
        let window = Window::new(0, 10).with_padding(30);
        assert_eq!(window.layer_start(2), 60);
        let layer0 = window.slice(&buffer, 0);
        let layer2 = window.slice(&buffer, 2);
        assert_eq!(layer0[0], 0);
        assert_eq!(layer2[0], 60);
        assert_eq!(layer2.len(), 10);
        // A layer pushed past the buffer end truncates like any window.
        let layer3 = window.slice(&buffer, 3);
        assert_eq!(layer3.len(), 10);
        let layer4 = window.slice(&buffer, 4);
        assert!(layer4.is_empty());
    }

    #[test]
    fn test_empty_buffer_windows() {
        let buffer = ramp_buffer(0);
        assert!(buffer.is_empty());
        assert!(Window::new(0, 10).slice(&buffer, 0).is_empty());
    }
}
