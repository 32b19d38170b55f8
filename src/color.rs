use eframe::egui::Color32;
use palette::{Hsl, IntoColor, LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
/// Used for the per-group boxplot boxes.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Diverging colormap for the correlation heatmap
// ---------------------------------------------------------------------------

/// Map a correlation coefficient in [-1, 1] to a cool-to-warm colour:
/// blue for -1, white near 0, red for +1.  NaN renders grey.
pub fn diverging_color(r: f64) -> Color32 {
    if r.is_nan() {
        return Color32::GRAY;
    }
    let t = ((r.clamp(-1.0, 1.0) + 1.0) / 2.0) as f32;

    let cool = LinSrgb::new(0.05_f32, 0.08, 0.52);
    let warm = LinSrgb::new(0.46_f32, 0.003, 0.02);
    let white = LinSrgb::new(0.88_f32, 0.88, 0.88);

    let mixed = if t < 0.5 {
        cool.mix(white, t * 2.0)
    } else {
        white.mix(warm, (t - 0.5) * 2.0)
    };
    let rgb: Srgb = Srgb::from_linear(mixed);

    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Readable annotation colour against a [`diverging_color`] cell.
pub fn annotation_color(r: f64) -> Color32 {
    if !r.is_nan() && r.abs() > 0.6 {
        Color32::WHITE
    } else {
        Color32::BLACK
    }
}
