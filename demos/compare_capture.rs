//! Render a golden/lost/comp comparison chart for one dataset.
//!
//! Usage:
//!   compare_capture <golden> <lost> <comp> [start end]
//!
//! The three paths are read as WAV captures. The chart is written next to
//! the current directory as `comparison.html` and opened in the browser.

use std::process::ExitCode;

use pcm_compare::{ComparisonBuilder, ComparisonPlot, Padding, PcmCompareResult};
use tracing_subscriber::EnvFilter;

fn run() -> PcmCompareResult<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [golden, lost, comp, rest @ ..] = args.as_slice() else {
        eprintln!("usage: compare_capture <golden> <lost> <comp> [start end]");
        return Err(pcm_compare::PcmCompareError::InvalidParameter(
            "three capture paths required".to_string(),
        ));
    };
    let (start, end) = match rest {
        [start, end, ..] => (
            start.parse::<usize>().map_err(|e| {
                pcm_compare::PcmCompareError::InvalidParameter(format!("bad start: {e}"))
            })?,
            end.parse::<usize>().map_err(|e| {
                pcm_compare::PcmCompareError::InvalidParameter(format!("bad end: {e}"))
            })?,
        ),
        _ => (0, ComparisonBuilder::DEFAULT_WINDOW_END),
    };

    let dataset = std::path::Path::new(golden)
        .file_stem()
        .map_or_else(|| "capture".to_string(), |s| s.to_string_lossy().into_owned());

    let comparison = ComparisonBuilder::new(&dataset, golden, lost, comp)
        .window(start, end)
        .padding(Padding::Fixed(0))
        .load()?;

    let plot = ComparisonPlot::new(&comparison);
    plot.write_html("comparison.html");
    plot.show();
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
