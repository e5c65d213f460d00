use std::path::PathBuf;

use eframe::egui;

// ---------------------------------------------------------------------------
// Viewer configuration
// ---------------------------------------------------------------------------

/// Everything the viewer needs besides the data itself.
///
/// The binary runs with [`ViewerConfig::default`]; the values are kept in one
/// place so the loader and renderer can be driven with other inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Input file, relative to the working directory.
    pub data_path: PathBuf,
    /// CSS color name of the series holding every record.
    pub up_color: String,
    /// CSS color name of the flagged series.
    pub down_color: String,
    pub window_title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
    /// Marker radius in points; `None` keeps the plot widget's default.
    pub marker_radius: Option<f32>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("demo.data"),
            up_color: "blue".to_string(),
            down_color: "red".to_string(),
            window_title: "Flag Scatter".to_string(),
            inner_size: [1000.0, 700.0],
            min_inner_size: [400.0, 300.0],
            marker_radius: None,
        }
    }
}

impl ViewerConfig {
    /// Window options for `eframe::run_native`.
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.window_title.clone())
                .with_inner_size(self.inner_size)
                .with_min_inner_size(self.min_inner_size),
            ..Default::default()
        }
    }
}
