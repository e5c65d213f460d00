use eframe::egui::Color32;

use crate::color::color_or_fallback;
use crate::config::ViewerConfig;
use crate::data::model::PointSets;

// ---------------------------------------------------------------------------
// Scatter series
// ---------------------------------------------------------------------------

/// One plotted series, ready for the plot widget.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub id: &'static str,
    pub points: Vec<[f64; 2]>,
    pub color: Color32,
}

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// The full viewer state, independent of rendering.
///
/// Built once from the loaded [`PointSets`]; nothing mutates it afterwards.
pub struct ScatterState {
    /// Series in draw order: `up` first so the flagged points overlay it.
    pub series: Vec<Series>,

    /// Marker radius override, `None` for the plot default.
    pub marker_radius: Option<f32>,
}

impl ScatterState {
    pub fn new(sets: PointSets, config: &ViewerConfig) -> Self {
        let series = vec![
            Series {
                id: "up",
                points: sets.up_coords(),
                color: color_or_fallback(&config.up_color),
            },
            Series {
                id: "down",
                points: sets.down_coords(),
                color: color_or_fallback(&config.down_color),
            },
        ];

        Self {
            series,
            marker_radius: config.marker_radius,
        }
    }

    /// Total number of markers drawn.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}
