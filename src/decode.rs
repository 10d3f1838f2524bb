//! # PCM Byte-Buffer Decoding
//!
//! This module converts raw PCM byte buffers into `i32` sample sequences.
//! It is the core of the crate: every capture, whether read from a WAV
//! file's data chunk or from a headerless `.raw` dump, passes through
//! [`decode_samples`] before it becomes a
//! [`SampleBuffer`](crate::SampleBuffer).
//!
//! The interesting path is 24-bit packed little-endian signed PCM. WAV
//! stores those samples as byte triples with the sign bit in bit 7 of the
//! third byte; [`unpack_s24`] widens each triple to an `i32` via
//! two's-complement sign extension. The other widths (8, 16, 32 bit) are
//! plain reinterpretations of the bytes with no arithmetic transformation.
//!
//! ## Example
//!
//! ```rust
//! use pcm_compare::{decode_samples, SampleFormat};
//!
//! let bytes = [0xFF, 0xFF, 0x7F, 0x00, 0x00, 0x80];
//! let samples = decode_samples(&bytes, SampleFormat::I24);
//! assert_eq!(samples, vec![8_388_607, -8_388_608]);
//! ```

use crate::{PcmCompareError, PcmCompareResult};

/// Largest value representable in 24-bit two's complement.
pub const S24_MAX: i32 = 0x7F_FFFF;
/// Smallest value representable in 24-bit two's complement.
pub const S24_MIN: i32 = -0x80_0000;

/// Storage format of one PCM sample.
///
/// WAV stores 8-bit data unsigned and the wider widths signed; the decoder
/// follows that convention. 24-bit is the only width that needs arithmetic
/// (sign extension); the rest are read verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleFormat {
    /// 8-bit unsigned PCM.
    U8,
    /// 16-bit signed little-endian PCM.
    I16,
    /// 24-bit signed little-endian PCM, packed in byte triples.
    I24,
    /// 32-bit signed little-endian PCM.
    I32,
}

impl SampleFormat {
    /// Number of bytes occupied by one sample in this format.
    pub const fn bytes_per_sample(self) -> usize {
        match self {
            SampleFormat::U8 => 1,
            SampleFormat::I16 => 2,
            SampleFormat::I24 => 3,
            SampleFormat::I32 => 4,
        }
    }

    /// Number of bits occupied by one sample in this format.
    pub const fn bits_per_sample(self) -> u16 {
        self.bytes_per_sample() as u16 * 8
    }

    /// Maps a WAV-style bit depth to a sample format.
    ///
    /// # Errors
    /// Returns [`PcmCompareError::UnsupportedFormat`] for any depth outside
    /// 8/16/24/32.
    pub fn from_bits_per_sample(bits: u16) -> PcmCompareResult<Self> {
        match bits {
            8 => Ok(SampleFormat::U8),
            16 => Ok(SampleFormat::I16),
            24 => Ok(SampleFormat::I24),
            32 => Ok(SampleFormat::I32),
            other => Err(PcmCompareError::UnsupportedFormat(format!(
                "{other} bits per sample (expected 8, 16, 24, or 32)"
            ))),
        }
    }
}

/// Decodes one packed 24-bit little-endian signed sample.
///
/// Computes the unsigned 24-bit value `b0 | b1 << 8 | b2 << 16` and applies
/// two's-complement sign extension: values above [`S24_MAX`] wrap to
/// `v - 0x100_0000`. The result always lies in `[S24_MIN, S24_MAX]`.
#[inline]
pub const fn unpack_s24(bytes: [u8; 3]) -> i32 {
    let v = bytes[0] as i32 | (bytes[1] as i32) << 8 | (bytes[2] as i32) << 16;
    if v > S24_MAX { v - 0x0100_0000 } else { v }
}

/// Decodes one packed 24-bit sample by widening to four bytes.
///
/// Appends a filler byte (`0x00` when bit 7 of the third byte is clear,
/// `0xFF` when set) and decodes the result as a standard little-endian
/// `i32`. Agrees with [`unpack_s24`] on every input; the bit-arithmetic
/// form is the one used on the decode path.
#[inline]
pub const fn unpack_s24_widened(bytes: [u8; 3]) -> i32 {
    let fill = if bytes[2] & 0x80 != 0 { 0xFF } else { 0x00 };
    i32::from_le_bytes([bytes[0], bytes[1], bytes[2], fill])
}

/// Encodes a signed value into a packed 24-bit little-endian byte triple.
///
/// Inverse of [`unpack_s24`] for all values in `[S24_MIN, S24_MAX]`.
/// Values outside that range are truncated to their low 24 bits; a
/// `debug_assert!` catches this in debug builds.
#[inline]
pub const fn pack_s24(value: i32) -> [u8; 3] {
    debug_assert!(value >= S24_MIN && value <= S24_MAX);
    let bytes = value.to_le_bytes();
    [bytes[0], bytes[1], bytes[2]]
}

/// Decodes a raw PCM byte buffer into one `i32` per sample, order preserved.
///
/// 8-bit data is read verbatim as unsigned; 16- and 32-bit data are read
/// verbatim as signed little-endian; 24-bit data goes through
/// [`unpack_s24`]. All outputs are exact — every supported width fits an
/// `i32` without loss.
///
/// The buffer length must be a multiple of the sample size; callers
/// guarantee alignment. Debug builds assert it, release builds silently
/// ignore a trailing partial sample.
pub fn decode_samples(bytes: &[u8], format: SampleFormat) -> Vec<i32> {
    debug_assert_eq!(
        bytes.len() % format.bytes_per_sample(),
        0,
        "buffer length must be a multiple of the sample size"
    );
    match format {
        SampleFormat::U8 => bytes.iter().map(|&b| i32::from(b)).collect(),
        SampleFormat::I16 => bytes
            .chunks_exact(2)
            .map(|c| i32::from(bytemuck::pod_read_unaligned::<i16>(c)))
            .collect(),
        SampleFormat::I24 => bytes
            .chunks_exact(3)
            .map(|c| unpack_s24([c[0], c[1], c[2]]))
            .collect(),
        SampleFormat::I32 => bytes
            .chunks_exact(4)
            .map(|c| bytemuck::pod_read_unaligned::<i32>(c))
            .collect(),
    }
}
