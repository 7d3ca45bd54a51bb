mod app;
mod chart;
mod data;
mod error;
mod pipeline;
mod report;
mod sink;
mod state;
mod ui;

use std::io;
use std::path::PathBuf;

use clap::Parser;

use pipeline::ReportFormat;
use sink::{ChartSink, NullSink, SvgSink, WindowSink};

/// Compare SHORTEST_CERTIFICATE and FRECHET_LIGHT certificate sizes from a
/// benchmark data file.
#[derive(Parser, Debug)]
#[command(name = "cert-compare", version, about)]
struct Cli {
    /// Data file named `<curve-set>_<algorithm>.txt`
    input: PathBuf,

    /// Write the chart to this SVG file instead of opening a window
    #[arg(long, value_name = "FILE", conflicts_with = "no_window")]
    save: Option<PathBuf>,

    /// Print the report only
    #[arg(long)]
    no_window: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut sink: Box<dyn ChartSink> = match (&cli.save, cli.no_window) {
        (Some(path), _) => Box::new(SvgSink::new(path)),
        (None, true) => Box::new(NullSink),
        (None, false) => Box::new(WindowSink),
    };
    let format = if cli.json {
        ReportFormat::Json
    } else {
        ReportFormat::Text
    };

    let mut stdout = io::stdout().lock();
    pipeline::run(&cli.input, format, &mut stdout, sink.as_mut())?;
    Ok(())
}
