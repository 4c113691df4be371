use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::color::series_color;
use crate::data::loader::{load_series_file, series_name_from_path};
use crate::render::{render_to_file, RenderedSeries};

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// The full viewer state, independent of rendering.
pub struct ViewerState {
    /// Every series available in the viewer, in the order it was rendered.
    pub series: Vec<RenderedSeries>,

    /// Index into `series` of the one being shown.
    pub selected: usize,

    /// Show the saved PNG instead of the interactive plot.
    pub show_image: bool,

    /// Size used when rendering series opened from the viewer.
    pub image_size: (u32, u32),

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl ViewerState {
    pub fn new(series: Vec<RenderedSeries>, image_size: (u32, u32)) -> Self {
        let series = series
            .into_iter()
            .map(|mut r| {
                r.image_path = absolute(&r.image_path);
                r
            })
            .collect();
        Self {
            series,
            selected: 0,
            show_image: false,
            image_size,
            status_message: None,
        }
    }

    pub fn selected_series(&self) -> Option<&RenderedSeries> {
        self.series.get(self.selected)
    }

    /// Select the series at `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.series.len() {
            self.selected = index;
        }
    }

    /// Load a series file, render its PNG next to it, and select it.
    pub fn add_series_file(&mut self, path: &Path) -> Result<()> {
        let name = series_name_from_path(path);
        let series = load_series_file(&name, path)
            .with_context(|| format!("loading series from {}", path.display()))?;

        let image_path = path.with_extension("png");
        let color = series_color(self.series.len());
        let rendered = render_to_file(series, absolute(&image_path), self.image_size, color)
            .with_context(|| format!("rendering {}", image_path.display()))?;

        self.series.push(rendered);
        self.selected = self.series.len() - 1;
        self.status_message = None;
        Ok(())
    }
}

/// `file://` image URIs need absolute paths.
fn absolute(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
