//! Static value/rank line charts drawn with [`plotters`] into an RGB buffer.

use image::RgbImage;
use plotters::prelude::*;

use crate::data::model::NamedSeries;
use crate::error::{Result, SeriesError};

fn plot_err(e: impl std::fmt::Display) -> SeriesError {
    SeriesError::Plot(e.to_string())
}

/// Value-axis bounds in chart coordinates.
///
/// When the finite values span more than an `f64` can hold, every value is
/// divided by `scale` before plotting and multiplied back for tick labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueAxis {
    pub scale: f64,
    pub lo: f64,
    pub hi: f64,
}

impl ValueAxis {
    pub fn for_range(range: Option<(f64, f64)>) -> Self {
        let (lo, hi) = range.unwrap_or((0.0, 1.0));
        let pad = if hi > lo {
            0.0
        } else if lo == 0.0 {
            0.5
        } else {
            lo.abs() / 2.0
        };

        let fits = (lo - pad).is_finite()
            && (hi + pad).is_finite()
            && (hi - lo + 2.0 * pad).is_finite();
        let scale = if fits { 1.0 } else { 2.0 };
        ValueAxis {
            scale,
            lo: lo / scale - pad / scale,
            hi: hi / scale + pad / scale,
        }
    }

    pub fn to_chart(&self, value: f64) -> f64 {
        value / self.scale
    }
}

fn format_tick(v: f64) -> String {
    let a = v.abs();
    if a != 0.0 && !(1e-3..1e5).contains(&a) {
        format!("{v:.2e}")
    } else {
        format!("{v:.3}")
    }
}

fn draw_chart(
    buf: &mut [u8],
    size: (u32, u32),
    series: &NamedSeries,
    color: RGBColor,
    labels: bool,
) -> Result<()> {
    let root = BitMapBackend::with_buffer(buf, size).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let axis = ValueAxis::for_range(series.value_range());
    let n = series.len() as f64;
    let ranks = if n > 1.0 { 1.0..n } else { 0.5..1.5 };

    let mut builder = ChartBuilder::on(&root);
    builder.margin(20);
    if labels {
        builder.x_label_area_size(50).y_label_area_size(80);
    }
    let mut chart = builder
        .build_cartesian_2d(axis.lo..axis.hi, ranks)
        .map_err(plot_err)?;

    if labels {
        let x_fmt = move |v: &f64| format_tick(*v * axis.scale);
        let y_fmt = |r: &f64| format!("{r:.0}");
        chart
            .configure_mesh()
            .x_desc("Value")
            .y_desc("Rank")
            .x_label_formatter(&x_fmt)
            .y_label_formatter(&y_fmt)
            .draw()
            .map_err(plot_err)?;
    } else {
        let (x, y) = (chart.x_range(), chart.y_range());
        chart
            .plotting_area()
            .draw(&Rectangle::new([(x.start, y.start), (x.end, y.end)], BLACK))
            .map_err(plot_err)?;
    }

    for run in series.finite_runs() {
        let points = run.iter().map(|p| (axis.to_chart(p[0]), p[1]));
        if run.len() == 1 {
            chart
                .draw_series(points.map(|p| Circle::new(p, 2, color.filled())))
                .map_err(plot_err)?;
        } else {
            chart
                .draw_series(LineSeries::new(points, &color))
                .map_err(plot_err)?;
        }
    }

    root.present().map_err(plot_err)?;
    Ok(())
}

/// Render `series` with values on the x axis and ranks `1..=N` on the y axis.
///
/// Non-finite values leave a gap in the line. Tick labels need a system
/// font; without one the chart is drawn again inside a plain frame.
pub fn render_series(
    series: &NamedSeries,
    size: (u32, u32),
    color: RGBColor,
) -> Result<RgbImage> {
    let size = (size.0.max(1), size.1.max(1));
    let mut buf = vec![0u8; size.0 as usize * size.1 as usize * 3];

    if let Err(e) = draw_chart(&mut buf, size, series, color, true) {
        log::warn!("Drawing {series} with labels failed ({e}), retrying without text");
        draw_chart(&mut buf, size, series, color, false)?;
    }

    RgbImage::from_raw(size.0, size.1, buf)
        .ok_or_else(|| SeriesError::Plot("bitmap buffer does not match image size".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: RGBColor = RGBColor(200, 0, 0);

    /// Leftmost and rightmost column holding a pixel of `color`.
    fn color_columns(img: &RgbImage, color: RGBColor) -> Option<(u32, u32)> {
        let target = image::Rgb([color.0, color.1, color.2]);
        img.enumerate_pixels()
            .filter(|(_, _, p)| **p == target)
            .fold(None, |acc, (x, _, _)| match acc {
                None => Some((x, x)),
                Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
            })
    }

    #[test]
    fn draws_series_in_its_colour() {
        let series = NamedSeries::new("u", vec![1.0, 2.0, 3.0]);
        let img = render_series(&series, (300, 200), RED).unwrap();
        assert_eq!(img.dimensions(), (300, 200));
        assert_eq!(*img.get_pixel(299, 0), image::Rgb([255, 255, 255]));
        assert!(color_columns(&img, RED).is_some());
    }

    #[test]
    fn tiny_value_span_still_fills_the_width() {
        let series = NamedSeries::new("t", vec![1e-20, 3e-20]);
        let axis = ValueAxis::for_range(series.value_range());
        assert_eq!((axis.lo, axis.hi), (1e-20, 3e-20));

        let img = render_series(&series, (400, 300), RED).unwrap();
        let (lo, hi) = color_columns(&img, RED).unwrap();
        assert!(hi - lo > 200, "line spans only columns {lo}..{hi}");
    }

    #[test]
    fn huge_value_span_stays_inside_the_frame() {
        let series = NamedSeries::new("h", vec![-1e308, 0.0, 1e308]);
        let axis = ValueAxis::for_range(series.value_range());
        assert_eq!(axis.scale, 2.0);
        assert!((axis.hi - axis.lo).is_finite());

        let img = render_series(&series, (400, 300), RED).unwrap();
        let (lo, hi) = color_columns(&img, RED).unwrap();
        assert!(lo >= 20, "line leaks into the left margin at column {lo}");
        assert!(hi - lo > 200);
    }

    #[test]
    fn constant_values_get_a_padded_range() {
        assert_eq!(ValueAxis::for_range(Some((0.0, 0.0))).lo, -0.5);
        let axis = ValueAxis::for_range(Some((f64::MAX, f64::MAX)));
        assert!(axis.lo < axis.hi && axis.hi.is_finite());
    }

    #[test]
    fn single_value_and_empty_series_do_not_fail() {
        let one = render_series(&NamedSeries::new("one", vec![4.2]), (120, 80), RED).unwrap();
        assert!(color_columns(&one, RED).is_some());

        let empty = render_series(&NamedSeries::new("e", vec![]), (120, 80), RED).unwrap();
        assert!(color_columns(&empty, RED).is_none());
    }

    #[test]
    fn non_finite_values_break_the_line() {
        let series = NamedSeries::new("n", vec![0.0, 0.5, f64::NAN, 0.75, 1.0]);
        let img = render_series(&series, (400, 300), RED).unwrap();
        let target = image::Rgb([RED.0, RED.1, RED.2]);

        let mut columns: Vec<u32> = img
            .enumerate_pixels()
            .filter(|(_, _, p)| **p == target)
            .map(|(x, _, _)| x)
            .collect();
        columns.sort_unstable();
        columns.dedup();

        // 0.5 → 0.75 is a quarter of the value axis with nothing drawn on it.
        let widest_gap = columns.windows(2).map(|w| w[1] - w[0]).max().unwrap();
        assert!(widest_gap > 20, "widest gap is only {widest_gap} columns");
    }

    #[test]
    fn tick_labels_switch_to_exponent_form() {
        assert_eq!(format_tick(0.5), "0.500");
        assert_eq!(format_tick(2e-20), "2.00e-20");
        assert_eq!(format_tick(0.0), "0.000");
    }
}
