use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, GridInput, GridMark, Legend, Plot};

use crate::chart::BarSeries;
use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Certificate size bar chart (central panel)
// ---------------------------------------------------------------------------

/// Render both bar series with the fixed x ticks.
pub fn comparison_plot(ui: &mut Ui, state: &ViewerState) {
    let chart = &state.chart;
    let ticks = chart.x_ticks.values.clone();
    let step = chart.x_ticks.step;
    let (x_lo, x_hi) = chart.x_extent();

    Plot::new("comparison_plot")
        .legend(Legend::default())
        .x_axis_label(chart.x_label)
        .y_axis_label(chart.y_label)
        // y gridlines only
        .show_grid([false, state.show_grid])
        .x_grid_spacer(move |_input: GridInput| {
            ticks
                .iter()
                .map(|&value| GridMark {
                    value,
                    step_size: step,
                })
                .collect()
        })
        .include_x(x_lo)
        .include_x(x_hi)
        .include_y(0.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in state.visible_series() {
                plot_ui.bar_chart(bar_chart(series, chart.bar_width));
            }
        });
}

fn bar_chart(series: &BarSeries, width: f64) -> BarChart {
    let [r, g, b] = series.rgb;
    let color = Color32::from_rgb(r, g, b);

    let bars: Vec<Bar> = series
        .bars
        .iter()
        .map(|&(x, height)| Bar::new(x, height).width(width).fill(color))
        .collect();

    BarChart::new(bars).name(series.name).color(color)
}
