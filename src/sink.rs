use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use eframe::egui;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::app::CertCompareApp;
use crate::chart::ComparisonChart;
use crate::report::Report;
use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Output sinks
// ---------------------------------------------------------------------------

/// Where a finished chart goes. The interactive window is one choice among
/// several so headless runs never need a display.
pub trait ChartSink {
    fn name(&self) -> &'static str;

    fn present(&mut self, chart: &ComparisonChart, report: Option<&Report>) -> Result<()>;
}

/// Discards the chart.
#[derive(Debug, Default)]
pub struct NullSink;

impl ChartSink for NullSink {
    fn name(&self) -> &'static str {
        "none"
    }

    fn present(&mut self, chart: &ComparisonChart, _report: Option<&Report>) -> Result<()> {
        log::debug!("not rendering '{}'", chart.title);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Interactive window
// ---------------------------------------------------------------------------

/// Opens a native window and blocks until the user closes it.
#[derive(Debug, Default)]
pub struct WindowSink;

impl ChartSink for WindowSink {
    fn name(&self) -> &'static str {
        "window"
    }

    fn present(&mut self, chart: &ComparisonChart, report: Option<&Report>) -> Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1200.0, 800.0])
                .with_min_inner_size([600.0, 400.0]),
            ..Default::default()
        };

        let state = ViewerState::new(chart.clone(), report.copied());
        eframe::run_native(
            &chart.title,
            options,
            Box::new(move |_cc| Ok(Box::new(CertCompareApp::new(state)))),
        )
        .map_err(|e| anyhow!("chart window failed: {e}"))
    }
}

// ---------------------------------------------------------------------------
// SVG file
// ---------------------------------------------------------------------------

const SVG_SIZE: (u32, u32) = (1280, 760);

/// Writes the chart to an SVG file instead of showing it.
#[derive(Debug)]
pub struct SvgSink {
    pub path: PathBuf,
}

impl SvgSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ChartSink for SvgSink {
    fn name(&self) -> &'static str {
        "svg"
    }

    fn present(&mut self, chart: &ComparisonChart, _report: Option<&Report>) -> Result<()> {
        let root = SVGBackend::new(&self.path, SVG_SIZE).into_drawing_area();
        draw_bars(root, chart)
            .with_context(|| format!("writing {}", self.path.display()))?;
        log::info!("Chart written to {}", self.path.display());
        Ok(())
    }
}

fn draw_bars<DB>(root: DrawingArea<DB, Shift>, chart: &ComparisonChart) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let (x_lo, x_hi) = chart.x_extent();
    let y_hi = chart.y_top();
    let x_ticks = chart.x_ticks.values.clone();
    let y_lines = chart.y_gridlines();

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (x_lo..x_hi).with_key_points(x_ticks.clone()),
            (0.0..y_hi).with_key_points(y_lines.clone()),
        )?;

    ctx.configure_mesh()
        .disable_mesh()
        .x_labels(x_ticks.len().max(2))
        .y_labels(y_lines.len().max(2))
        .x_label_formatter(&|v| format!("{v:.1}"))
        .y_label_formatter(&|v| format!("{v}"))
        .x_desc(chart.x_label)
        .y_desc(chart.y_label)
        .draw()?;

    // dashed y gridlines, drawn before the bars so they sit behind them
    let grid = ShapeStyle {
        color: BLACK.mix(0.3),
        filled: false,
        stroke_width: 1,
    };
    for &y in &y_lines {
        ctx.draw_series(DashedLineSeries::new([(x_lo, y), (x_hi, y)], 6, 4, grid))?;
    }

    let half = chart.bar_width / 2.0;
    for series in &chart.series {
        let [r, g, b] = series.rgb;
        let color = RGBColor(r, g, b);
        ctx.draw_series(
            series
                .bars
                .iter()
                .map(|&(x, h)| Rectangle::new([(x - half, 0.0), (x + half, h)], color.filled())),
        )?
        .label(series.name)
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    ctx.configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
