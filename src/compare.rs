//! Golden/lost/comp variant comparison.
//!
//! The experiment produces each dataset in three variants: the unmodified
//! reference ("golden"), the signal after simulated data loss ("lost"),
//! and the signal after the reconstruction pass ("comp"). This module
//! loads the three captures, checks they describe the same signal layout,
//! and exposes aligned windowed slices for plotting.
//!
//! [`ComparisonBuilder`] is the single parameterized entry point: dataset
//! name, three paths, window bounds, and padding policy are all explicit
//! arguments rather than process-wide globals.

use std::path::{Path, PathBuf};

use ndarray::ArrayView1;
use tracing::debug;

use crate::io::{RawSpec, read_raw, read_wav};
use crate::repr::{SampleBuffer, Window};
use crate::{PcmCompareError, PcmCompareResult};

/// Role of one capture within a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Uncorrupted reference signal.
    Golden,
    /// Signal after simulated data loss.
    Lost,
    /// Signal after the reconstruction/interpolation pass.
    Comp,
}

impl Variant {
    /// All variants in plot order.
    pub const ALL: [Variant; 3] = [Variant::Golden, Variant::Lost, Variant::Comp];

    /// Legend label for this variant.
    pub const fn label(self) -> &'static str {
        match self {
            Variant::Golden => "golden",
            Variant::Lost => "lost",
            Variant::Comp => "comp",
        }
    }
}

/// Padding-stride policy between repeated chart panels.
///
/// The stride is either a fixed frame count or derived from the golden
/// capture's sample rate. Nothing is derived implicitly; the caller
/// picks the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    /// A fixed stride in frames.
    Fixed(usize),
    /// Derive the stride from the golden capture's sample rate as
    /// `sample_rate - 500`.
    FromSampleRate,
}

impl Padding {
    fn resolve(self, sample_rate: u32) -> usize {
        match self {
            Padding::Fixed(padding) => padding,
            Padding::FromSampleRate => (sample_rate as usize).saturating_sub(500),
        }
    }
}

impl Default for Padding {
    fn default() -> Self {
        Padding::Fixed(0)
    }
}

/// Builder for a three-variant comparison.
///
/// # Example
/// ```rust,no_run
/// use pcm_compare::{ComparisonBuilder, Padding};
///
/// # fn example() -> pcm_compare::PcmCompareResult<()> {
/// let comparison = ComparisonBuilder::new(
///     "beemoved_96k_2ch_24b_short_FRONT_LEFT",
///     "output/LOST_none_COMP_none/wav/MY_beemoved.wav",
///     "output/LOST_cont_COMP_none/wav/MY_beemoved.wav",
///     "output/LOST_cont_COMP_intp/wav/MY_beemoved.wav",
/// )
/// .window(0, 1000)
/// .padding(Padding::FromSampleRate)
/// .layers(3)
/// .load()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ComparisonBuilder {
    dataset: String,
    golden: PathBuf,
    lost: PathBuf,
    comp: PathBuf,
    raw_spec: Option<RawSpec>,
    start: usize,
    end: usize,
    padding: Padding,
    layers: usize,
}

impl ComparisonBuilder {
    /// Default plot window end.
    pub const DEFAULT_WINDOW_END: usize = 1000;

    /// Creates a builder over the three variant capture paths.
    ///
    /// Paths are read as WAV unless [`raw`](Self::raw) supplies a raw
    /// capture spec. The window defaults to `[0, 1000)` with no padding
    /// and a single panel.
    pub fn new(
        dataset: &str,
        golden: impl Into<PathBuf>,
        lost: impl Into<PathBuf>,
        comp: impl Into<PathBuf>,
    ) -> Self {
        Self {
            dataset: dataset.to_string(),
            golden: golden.into(),
            lost: lost.into(),
            comp: comp.into(),
            raw_spec: None,
            start: 0,
            end: Self::DEFAULT_WINDOW_END,
            padding: Padding::default(),
            layers: 1,
        }
    }

    /// Treats the three paths as headerless raw captures with this spec.
    pub const fn raw(mut self, spec: RawSpec) -> Self {
        self.raw_spec = Some(spec);
        self
    }

    /// Sets the visible frame window `[start, end)`.
    pub const fn window(mut self, start: usize, end: usize) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Sets the padding-stride policy between repeated panels.
    pub const fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the number of repeated chart panels.
    pub fn layers(mut self, layers: usize) -> Self {
        self.layers = layers.max(1);
        self
    }

    /// Loads the three captures and resolves the window.
    ///
    /// # Errors
    /// Propagates load failures, and returns
    /// [`PcmCompareError::VariantMismatch`] if the variants disagree on
    /// sample rate or channel count — the comparison assumes all three
    /// captures describe the same signal and performs no alignment
    /// correction.
    pub fn load(self) -> PcmCompareResult<Comparison> {
        if self.end < self.start {
            return Err(PcmCompareError::InvalidParameter(format!(
                "window end {} precedes start {}",
                self.end, self.start
            )));
        }
        let golden = load_variant(&self.golden, self.raw_spec)?;
        let lost = load_variant(&self.lost, self.raw_spec)?;
        let comp = load_variant(&self.comp, self.raw_spec)?;

        for (variant, buffer) in [(Variant::Lost, &lost), (Variant::Comp, &comp)] {
            if buffer.sample_rate() != golden.sample_rate() {
                return Err(PcmCompareError::VariantMismatch(format!(
                    "{} sample rate {} differs from golden {}",
                    variant.label(),
                    buffer.sample_rate(),
                    golden.sample_rate()
                )));
            }
            if buffer.channels() != golden.channels() {
                return Err(PcmCompareError::VariantMismatch(format!(
                    "{} channel count {} differs from golden {}",
                    variant.label(),
                    buffer.channels(),
                    golden.channels()
                )));
            }
        }

        let padding = self.padding.resolve(golden.sample_rate());
        debug!(
            dataset = %self.dataset,
            start = self.start,
            end = self.end,
            padding,
            layers = self.layers,
            "comparison loaded"
        );
        Ok(Comparison {
            dataset: self.dataset,
            golden,
            lost,
            comp,
            window: Window::new(self.start, self.end).with_padding(padding),
            layers: self.layers,
        })
    }
}

fn load_variant(path: &Path, raw_spec: Option<RawSpec>) -> PcmCompareResult<SampleBuffer> {
    match raw_spec {
        Some(spec) => read_raw(path, spec),
        None => read_wav(path),
    }
}

/// Three aligned variant captures plus their resolved plot window.
#[derive(Debug, Clone)]
pub struct Comparison {
    dataset: String,
    golden: SampleBuffer,
    lost: SampleBuffer,
    comp: SampleBuffer,
    window: Window,
    layers: usize,
}

impl Comparison {
    /// Dataset name used for plot titles.
    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    /// The capture backing one variant.
    pub const fn buffer(&self, variant: Variant) -> &SampleBuffer {
        match variant {
            Variant::Golden => &self.golden,
            Variant::Lost => &self.lost,
            Variant::Comp => &self.comp,
        }
    }

    /// The resolved plot window.
    pub const fn window(&self) -> Window {
        self.window
    }

    /// Number of repeated chart panels.
    pub const fn layers(&self) -> usize {
        self.layers
    }

    /// Windowed slice of one variant for the given panel.
    ///
    /// Truncates at the buffer end like [`Window::slice`]; the three
    /// variants may yield ragged lengths if one capture is shorter.
    pub fn slice(&self, variant: Variant, layer: usize) -> ArrayView1<'_, i32> {
        self.window.slice(self.buffer(variant), layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::SampleFormat;
    use std::fs;
    use std::path::Path;

    fn write_wav(path: &Path, sample_rate: u32, channels: u16, samples: &[i32]) {
        let spec = hound::WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 24,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        for &s in samples {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn test_builder_loads_three_wav_variants() {
        let dir = tempfile::tempdir().unwrap();
        let golden: Vec<i32> = (0..200).map(|i| i * 100).collect();
        let mut lost = golden.clone();
        for s in &mut lost[50..80] {
            *s = 0;
        }
        let mut comp = golden.clone();
        for s in &mut comp[50..80] {
            *s /= 2;
        }
        let paths = [
            dir.path().join("golden.wav"),
            dir.path().join("lost.wav"),
            dir.path().join("comp.wav"),
        ];
        write_wav(&paths[0], 96_000, 1, &golden);
        write_wav(&paths[1], 96_000, 1, &lost);
        write_wav(&paths[2], 96_000, 1, &comp);

        let comparison = ComparisonBuilder::new("testset", &paths[0], &paths[1], &paths[2])
            .window(40, 90)
            .load()
            .unwrap();

        assert_eq!(comparison.dataset(), "testset");
        assert_eq!(comparison.buffer(Variant::Golden).format(), SampleFormat::I24);
        let g = comparison.slice(Variant::Golden, 0);
        let l = comparison.slice(Variant::Lost, 0);
        let c = comparison.slice(Variant::Comp, 0);
        assert_eq!(g.len(), 50);
        assert_eq!(g[0], 4_000);
        assert_eq!(l[10], 0); // frame 50, zeroed in the lost variant
        assert_eq!(c[10], 2_500); // frame 50, halved in the comp variant
    }

    #[test]
    fn test_builder_rejects_sample_rate_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let samples: Vec<i32> = (0..10).collect();
        let paths = [
            dir.path().join("golden.wav"),
            dir.path().join("lost.wav"),
            dir.path().join("comp.wav"),
        ];
        write_wav(&paths[0], 96_000, 1, &samples);
        write_wav(&paths[1], 48_000, 1, &samples);
        write_wav(&paths[2], 96_000, 1, &samples);

        let result = ComparisonBuilder::new("testset", &paths[0], &paths[1], &paths[2]).load();
        assert!(matches!(result, Err(PcmCompareError::VariantMismatch(_))));
    }

    #[test]
    fn test_builder_rejects_inverted_window() {
        let result = ComparisonBuilder::new("testset", "g.wav", "l.wav", "c.wav")
            .window(100, 50)
            .load();
        assert!(matches!(result, Err(PcmCompareError::InvalidParameter(_))));
    }

    #[test]
    fn test_builder_raw_variants_and_rate_padding() {
        let dir = tempfile::tempdir().unwrap();
        let paths = [
            dir.path().join("golden.raw"),
            dir.path().join("lost.raw"),
            dir.path().join("comp.raw"),
        ];
        let samples: Vec<i32> = (0..4000).collect();
        let bytes: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();
        for path in &paths {
            fs::write(path, &bytes).unwrap();
        }

        let comparison = ComparisonBuilder::new("rawset", &paths[0], &paths[1], &paths[2])
            .raw(RawSpec::native_i32(2_000, 1))
            .window(0, 100)
            .padding(Padding::FromSampleRate)
            .layers(2)
            .load()
            .unwrap();

        // sample_rate - 500 = 1500
        assert_eq!(comparison.window().padding, 1_500);
        assert_eq!(comparison.slice(Variant::Golden, 1)[0], 1_500);
    }

    #[test]
    fn test_padding_policies() {
        assert_eq!(Padding::Fixed(250).resolve(96_000), 250);
        assert_eq!(Padding::FromSampleRate.resolve(96_000), 95_500);
        assert_eq!(Padding::FromSampleRate.resolve(100), 0);
        assert_eq!(Padding::default().resolve(96_000), 0);
    }
}
