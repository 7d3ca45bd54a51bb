use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::chart::ComparisonChart;
use crate::data::label::DatasetLabel;
use crate::data::loader::load_file;
use crate::report::{Averages, Report};
use crate::sink::ChartSink;

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Read, aggregate, print, then hand the chart to `sink`.
///
/// Stages run in order and the first failure ends the run. The chart
/// description is built before anything is printed; in text mode both
/// averages are written before the ratio is taken, so a zero first average
/// fails after them.
pub fn run(
    input: &Path,
    format: ReportFormat,
    out: &mut dyn Write,
    sink: &mut dyn ChartSink,
) -> Result<Report> {
    let comparison =
        load_file(input).with_context(|| format!("loading {}", input.display()))?;
    let label = DatasetLabel::from_path(input)?;
    let chart = ComparisonChart::build(&comparison, &label)?;
    let averages = Averages::of(&comparison);

    let report = match format {
        ReportFormat::Text => {
            write!(out, "{averages}")?;
            out.flush()?;
            let report = averages.into_report()?;
            writeln!(out, "{}", report.factor_line())?;
            report
        }
        ReportFormat::Json => {
            let report = averages.into_report()?;
            writeln!(out, "{}", report.to_json()?)?;
            report
        }
    };
    out.flush()?;

    log::info!("Presenting '{}' via {} sink", chart.title, sink.name());
    sink.present(&chart, Some(&report))?;
    Ok(report)
}
