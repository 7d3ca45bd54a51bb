use crate::chart::{BarSeries, ComparisonChart};
use crate::data::model::SeriesKind;
use crate::report::Report;

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct ViewerState {
    pub chart: ComparisonChart,

    /// Averages shown next to the toggles (None when not computed).
    pub report: Option<Report>,

    /// Per-series visibility, indexed by `SeriesKind::index`.
    pub visible: [bool; 2],

    /// Horizontal gridlines behind the bars.
    pub show_grid: bool,
}

impl ViewerState {
    pub fn new(chart: ComparisonChart, report: Option<Report>) -> Self {
        Self {
            chart,
            report,
            visible: [true; 2],
            show_grid: true,
        }
    }

    pub fn toggle_series(&mut self, kind: SeriesKind) {
        let slot = &mut self.visible[kind.index()];
        *slot = !*slot;
    }

    /// Series that should currently be drawn, in file order.
    pub fn visible_series(&self) -> impl Iterator<Item = &BarSeries> {
        self.chart
            .series
            .iter()
            .filter(|s| self.visible[s.kind.index()])
    }
}
