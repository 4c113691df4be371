use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};
use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Series colours
// ---------------------------------------------------------------------------

/// Hue step between consecutive series (golden angle), so any number of
/// series stays visually distinct without knowing the count up front.
const HUE_STEP: f32 = 137.508;

fn hsl_to_color32(hue: f32) -> Color32 {
    let hsl = Hsl::new(hue, 0.75, 0.45);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Colour of the `index`-th series rendered in a session.
pub fn series_color(index: usize) -> Color32 {
    let hue = (210.0 + index as f32 * HUE_STEP) % 360.0;
    hsl_to_color32(hue)
}

/// Same colour for the static chart renderer.
pub fn to_rgb(color: Color32) -> RGBColor {
    RGBColor(color.r(), color.g(), color.b())
}
