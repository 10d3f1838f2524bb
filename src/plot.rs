//! Interactive comparison chart rendering.
//!
//! Builds a plotly figure with one line trace per variant per panel:
//! golden in green, lost in black, comp in red, all over absolute frame
//! indices so the three variants line up on the shared time axis. Panels
//! beyond the first repeat the window offset by the padding stride.
//!
//! Output is visual only — an interactive browser view via [`show`], or an
//! interactive HTML file via [`write_html`]. No machine-readable artifact
//! is produced.
//!
//! [`show`]: ComparisonPlot::show
//! [`write_html`]: ComparisonPlot::write_html

use std::path::Path;

use plotly::color::NamedColor;
use plotly::common::{Line, Mode, Title};
use plotly::layout::{Axis, GridPattern, Layout, LayoutGrid};
use plotly::{Plot, Scatter};
use tracing::debug;

use crate::compare::{Comparison, Variant};

/// Hairline traces keep dense sample windows readable.
const LINE_WIDTH: f64 = 0.5;

const fn variant_color(variant: Variant) -> NamedColor {
    match variant {
        Variant::Golden => NamedColor::Green,
        Variant::Lost => NamedColor::Black,
        Variant::Comp => NamedColor::Red,
    }
}

/// A rendered golden/lost/comp comparison chart.
pub struct ComparisonPlot {
    plot: Plot,
}

impl ComparisonPlot {
    /// Builds the chart for a loaded comparison.
    ///
    /// Each panel holds three traces; a slice that truncated to empty
    /// produces an empty trace rather than an error, so a window past the
    /// end of a short capture still renders.
    pub fn new(comparison: &Comparison) -> Self {
        let mut plot = Plot::new();
        let layers = comparison.layers();

        for layer in 0..layers {
            let axis_suffix = format!("{}", layer + 1);
            for variant in Variant::ALL {
                let samples = comparison.slice(variant, layer);
                let x_start = comparison.window().layer_start(layer);
                let x: Vec<usize> = (x_start..x_start + samples.len()).collect();
                let y: Vec<i32> = samples.to_vec();
                let mut trace = Scatter::new(x, y)
                    .mode(Mode::Lines)
                    .name(variant.label())
                    .line(Line::new().color(variant_color(variant)).width(LINE_WIDTH));
                if layer > 0 {
                    // Subsequent panels hang off their own axis pair and
                    // share the legend entries of the first panel.
                    trace = trace
                        .x_axis(format!("x{axis_suffix}").as_str())
                        .y_axis(format!("y{axis_suffix}").as_str())
                        .show_legend(false);
                }
                plot.add_trace(trace);
            }
        }

        let mut layout = Layout::new()
            .title(Title::with_text(format!("{} pcm data", comparison.dataset())))
            .x_axis(Axis::new().title(Title::with_text("frame index")))
            .y_axis(Axis::new().title(Title::with_text("amplitude")));
        if layers > 1 {
            layout = layout.grid(
                LayoutGrid::new()
                    .rows(layers)
                    .columns(1)
                    .pattern(GridPattern::Independent),
            );
        }
        plot.set_layout(layout);
        debug!(
            dataset = comparison.dataset(),
            layers, "comparison chart assembled"
        );
        Self { plot }
    }

    /// Writes the chart as a self-contained interactive HTML file.
    pub fn write_html<P: AsRef<Path>>(&self, path: P) {
        self.plot.write_html(path);
    }

    /// Opens the chart in the default browser.
    pub fn show(&self) {
        self.plot.show();
    }

    /// Consumes the wrapper and returns the underlying plotly figure.
    pub fn into_inner(self) -> Plot {
        self.plot
    }

    /// Borrows the underlying plotly figure.
    pub const fn inner(&self) -> &Plot {
        &self.plot
    }
}
