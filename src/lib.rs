// Correctness and logic
#![warn(clippy::unit_cmp)]
#![warn(clippy::match_same_arms)]
// Performance-focused
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::map_clone)]
#![warn(clippy::unnecessary_to_owned)]
#![warn(clippy::needless_collect)]
// Style and idiomatic Rust
#![warn(clippy::redundant_clone)]
#![warn(clippy::identity_op)]
#![warn(clippy::needless_return)]
#![warn(clippy::manual_map)]
#![warn(clippy::unwrap_used)]
// Maintainability
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::missing_const_for_fn)]
#![deny(missing_docs)]

//! # pcm_compare
//!
//! Tools for inspecting the output of a lossy-transmission/interpolation
//! experiment. Each dataset exists in three variants — **golden** (the
//! uncorrupted reference), **lost** (the signal after simulated data loss),
//! and **comp** (the signal after a reconstruction pass) — captured as WAV
//! files or headerless raw PCM dumps. This crate decodes the captures into
//! integer sample buffers and renders interactive comparison line charts
//! over selected sample windows.
//!
//! ## Decoding
//!
//! All supported sample widths (8, 16, 24, 32 bit) decode to `i32`. The
//! 24-bit path unpacks little-endian byte triples with two's-complement
//! sign extension:
//!
//! ```rust
//! use pcm_compare::{SampleBuffer, SampleFormat, Window};
//!
//! let bytes = [
//!     0xFF, 0xFF, 0x7F, // 8388607
//!     0x00, 0x00, 0x80, // -8388608
//!     0xFF, 0xFF, 0xFF, // -1
//! ];
//! let buffer = SampleBuffer::from_bytes(&bytes, SampleFormat::I24, 96_000, 1);
//! assert_eq!(buffer.samples().to_vec(), vec![8_388_607, -8_388_608, -1]);
//!
//! // Windows past the end truncate instead of failing.
//! let tail = Window::new(1, 10).slice(&buffer, 0);
//! assert_eq!(tail.to_vec(), vec![-8_388_608, -1]);
//! ```
//!
//! ## Comparing captures
//!
//! [`ComparisonBuilder`] replaces the per-dataset scripts of the original
//! experiment with one parameterized entry point:
//!
//! ```rust,no_run
//! use pcm_compare::{ComparisonBuilder, ComparisonPlot, Padding};
//!
//! # fn example() -> pcm_compare::PcmCompareResult<()> {
//! let comparison = ComparisonBuilder::new(
//!     "beemoved_96k_2ch_24b_short_FRONT_LEFT",
//!     "golden.wav",
//!     "lost.wav",
//!     "comp.wav",
//! )
//! .window(0, 1000)
//! .padding(Padding::Fixed(0))
//! .load()?;
//!
//! ComparisonPlot::new(&comparison).write_html("comparison.html");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error handling
//!
//! Fallible operations return [`PcmCompareResult`]. Missing or unreadable
//! files fail the run immediately; out-of-range plot windows truncate
//! silently instead of erroring.

pub mod compare;
pub mod decode;
mod error;
pub mod io;
pub mod plot;
mod repr;

pub use crate::compare::{Comparison, ComparisonBuilder, Padding, Variant};
pub use crate::decode::{
    S24_MAX, S24_MIN, SampleFormat, decode_samples, pack_s24, unpack_s24, unpack_s24_widened,
};
pub use crate::error::{PcmCompareError, PcmCompareResult};
pub use crate::io::{RawSpec, read_raw, read_wav};
pub use crate::plot::ComparisonPlot;
pub use crate::repr::{SampleBuffer, Window};
