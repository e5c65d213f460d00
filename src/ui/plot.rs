use eframe::egui::Ui;
use egui_plot::{Plot, PlotPoints, Points};

use crate::state::ScatterState;

// ---------------------------------------------------------------------------
// Scatter plot (central panel)
// ---------------------------------------------------------------------------

/// Render both series on shared, auto-scaled axes.
///
/// No labels, legend or title; zoom and drag stay at the widget defaults.
pub fn scatter_plot(ui: &mut Ui, state: &ScatterState) {
    Plot::new("flag_scatter").show(ui, |plot_ui| {
        for series in &state.series {
            let mut points = Points::new(PlotPoints::new(series.points.clone()))
                .name(series.id)
                .color(series.color);

            if let Some(radius) = state.marker_radius {
                points = points.radius(radius);
            }

            plot_ui.points(points);
        }
    });
}
