/// Rendering: named series → PNG files → optional interactive viewer.
///
/// ```text
///   <name>.txt ──loader──▶ NamedSeries
///                              │
///                              ▼
///                     ┌──────────────────┐
///                     │   PlotSession    │  one per run
///                     │  plot(series)    │──chart──▶ <name>.png
///                     └──────────────────┘
///                              │ finish()
///                              ▼
///                        viewer window
/// ```
pub mod chart;

use std::io::Cursor;
use std::path::{Path, PathBuf};

use eframe::egui::Color32;
use image::{ImageFormat, RgbImage};

use crate::color::{series_color, to_rgb};
use crate::data::loader::{load_series, write_atomic};
use crate::data::model::NamedSeries;
use crate::error::Result;
use crate::settings::Settings;

/// Encode an image as PNG in memory and write it atomically to `path`.
pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, ImageFormat::Png)?;
    write_atomic(path, buf.get_ref())
}

/// A series that has been rendered to disk.
#[derive(Debug, Clone)]
pub struct RenderedSeries {
    pub series: NamedSeries,
    pub image_path: PathBuf,
    pub color: Color32,
}

/// Render `series` in `color` and save it as `image_path`.
pub fn render_to_file(
    series: NamedSeries,
    image_path: PathBuf,
    size: (u32, u32),
    color: Color32,
) -> Result<RenderedSeries> {
    let image = chart::render_series(&series, size, to_rgb(color))?;
    save_png(&image, &image_path)?;
    log::info!("Saved {series} to {}", image_path.display());
    Ok(RenderedSeries {
        series,
        image_path,
        color,
    })
}

// ---------------------------------------------------------------------------
// PlotSession – explicit plotting context
// ---------------------------------------------------------------------------

/// Plotting context for one run. Each `plot` call draws on a fresh canvas;
/// `finish` hands everything rendered to the viewer.
pub struct PlotSession {
    out_dir: PathBuf,
    image_size: (u32, u32),
    interactive: bool,
    rendered: Vec<RenderedSeries>,
}

impl PlotSession {
    pub fn new(settings: &Settings) -> Self {
        Self {
            out_dir: settings.work_dir.clone(),
            image_size: settings.image_size,
            interactive: settings.interactive,
            rendered: Vec::new(),
        }
    }

    /// Render `series`, save it as `<out_dir>/<name>.png` and return that path.
    pub fn plot(&mut self, series: NamedSeries) -> Result<PathBuf> {
        let path = self.out_dir.join(format!("{}.png", series.name));
        let color = series_color(self.rendered.len());
        let rendered = render_to_file(series, path.clone(), self.image_size, color)?;
        self.rendered.push(rendered);
        Ok(path)
    }

    /// Tear the session down, showing the viewer first when interactive.
    pub fn finish(self) -> Result<Vec<RenderedSeries>> {
        if self.interactive && !self.rendered.is_empty() {
            crate::app::show(self.rendered.clone(), self.image_size)?;
        }
        Ok(self.rendered)
    }
}

/// Load, render and save every configured series, in order.
///
/// The first dataset that fails aborts the batch; images written for the
/// datasets before it are kept.
pub fn plot_all(settings: &Settings) -> Result<Vec<PathBuf>> {
    let mut session = PlotSession::new(settings);
    for name in &settings.series_names {
        let series = load_series(&settings.work_dir, name)?;
        session.plot(series)?;
    }
    let rendered = session.finish()?;
    Ok(rendered.into_iter().map(|r| r.image_path).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn session_writes_one_png_per_series() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::headless_in(dir.path());
        let mut session = PlotSession::new(&settings);

        let a = session.plot(NamedSeries::new("a", vec![1.0, 2.0])).unwrap();
        session.plot(NamedSeries::new("b", vec![3.0, 1.0, 2.0])).unwrap();
        assert_eq!(a, dir.path().join("a.png"));

        let rendered = session.finish().unwrap();
        assert_eq!(rendered.len(), 2);
        assert_ne!(rendered[0].color, rendered[1].color);
        for r in &rendered {
            let meta = std::fs::metadata(&r.image_path).unwrap();
            assert!(meta.len() > 0);
        }
        assert_eq!(rendered[1].series.values, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn saved_png_decodes_to_requested_size() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("x.png");
        render_to_file(
            NamedSeries::new("x", vec![0.0, 1.0]),
            path.clone(),
            (64, 48),
            series_color(0),
        )
        .unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!(decoded.to_rgb8().dimensions(), (64, 48));
    }
}
