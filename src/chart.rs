use crate::data::label::DatasetLabel;
use crate::data::model::{Comparison, SeriesKind};
use crate::error::{CompareError, Result};

pub const BAR_WIDTH: f64 = 0.4;
pub const X_LABEL: &str = "Size of Certificate";
pub const Y_LABEL: &str = "Results for given size";

/// Tick spacing is the largest x divided by this, floored.
const TICK_DIVISOR: f64 = 25.0;

/// More ticks than this cannot be drawn meaningfully.
pub const MAX_TICKS: usize = 10_000;

/// Rough number of horizontal gridlines.
const Y_GRIDLINES: f64 = 8.0;

// ---------------------------------------------------------------------------
// Backend-independent chart description
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub kind: SeriesKind,
    pub name: &'static str,
    pub rgb: [u8; 3],
    /// `(x, height)` per bar, x already offset.
    pub bars: Vec<(f64, f64)>,
}

/// Everything a sink needs to draw the comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonChart {
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub bar_width: f64,
    pub series: [BarSeries; 2],
    pub x_ticks: XTicks,
}

impl ComparisonChart {
    pub fn build(comparison: &Comparison, label: &DatasetLabel) -> Result<Self> {
        let x_ticks = XTicks::for_series(comparison)?;
        let series = SeriesKind::ALL.map(|kind| {
            let src = comparison.series(kind);
            BarSeries {
                kind,
                name: kind.label(),
                rgb: kind.rgb(),
                bars: src
                    .records
                    .iter()
                    .map(|r| (r.size, r.count as f64))
                    .collect(),
            }
        });

        Ok(ComparisonChart {
            title: label.title(),
            x_label: X_LABEL,
            y_label: Y_LABEL,
            bar_width: BAR_WIDTH,
            series,
            x_ticks,
        })
    }

    /// Tallest bar across both series, 0 when there are none.
    pub fn max_height(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.bars.iter().map(|&(_, h)| h))
            .fold(0.0, f64::max)
    }

    /// Top of the y axis: a little headroom over the tallest bar.
    pub fn y_top(&self) -> f64 {
        (self.max_height() * 1.05).max(1.0)
    }

    /// Heights of the horizontal gridlines, from 0 up to `y_top`, on a
    /// 1/2/5 step.
    pub fn y_gridlines(&self) -> Vec<f64> {
        let top = self.y_top();
        let raw = top / Y_GRIDLINES;
        let exp = raw.log10().floor() as i32;
        // divide for negative exponents so 0.1-style steps stay exact
        let scaled = |m: f64| {
            if exp >= 0 {
                m * 10f64.powi(exp)
            } else {
                m / 10f64.powi(-exp)
            }
        };
        let step = [1.0, 2.0, 5.0]
            .into_iter()
            .map(scaled)
            .find(|&s| s >= raw)
            .unwrap_or_else(|| scaled(10.0));

        (0..)
            .map(|i| i as f64 * step)
            .take_while(|&v| v <= top)
            .collect()
    }

    /// Horizontal extent covering every bar edge and every tick.
    pub fn x_extent(&self) -> (f64, f64) {
        let half = self.bar_width / 2.0;
        let mut lo = self.x_ticks.start;
        let mut hi = self.x_ticks.stop;
        for s in &self.series {
            for &(x, _) in &s.bars {
                lo = lo.min(x - half);
                hi = hi.max(x + half);
            }
        }
        (lo, hi)
    }
}

// ---------------------------------------------------------------------------
// X-axis ticks
// ---------------------------------------------------------------------------

/// Half-open tick range `[start, stop)` stepped by `step`, laid out over
/// the second series only.
#[derive(Debug, Clone, PartialEq)]
pub struct XTicks {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
    pub values: Vec<f64>,
}

impl XTicks {
    pub fn for_series(comparison: &Comparison) -> Result<Self> {
        let Some((min_x, max_x)) = comparison.second.size_range() else {
            return Err(CompareError::DegenerateAxis {
                reason: format!("{} series is empty", SeriesKind::Second),
            });
        };

        let start = min_x - 0.2;
        let stop = max_x + 0.8;
        let step = (max_x / TICK_DIVISOR).floor();
        if step == 0.0 {
            return Err(CompareError::DegenerateAxis {
                reason: format!("largest size {max_x} gives a tick step of zero"),
            });
        }

        let count = ((stop - start) / step).ceil();
        if count.is_nan() || count > MAX_TICKS as f64 {
            return Err(CompareError::DegenerateAxis {
                reason: format!("{start}..{stop} step {step} would need {count} ticks"),
            });
        }
        let values = arange(start, step, count.max(0.0) as usize);
        log::debug!(
            "x ticks: {} from {start} to {stop} step {step}",
            values.len()
        );
        Ok(XTicks {
            start,
            stop,
            step,
            values,
        })
    }
}

fn arange(start: f64, step: f64, count: usize) -> Vec<f64> {
    (0..count).map(|i| start + i as f64 * step).collect()
}
