//! Dark-to-blue color ramp shared by bars and heatmap cells

use plotters::style::RGBColor;

/// Low end of the ramp
pub const RAMP_START: RGBColor = RGBColor(0x2b, 0x2b, 0x33);
/// High end of the ramp
pub const RAMP_END: RGBColor = RGBColor(0x1f, 0x4f, 0xf0);

/// Color at position `t` of the ramp between `start` and `end`
///
/// `t` is clamped to `[0, 1]`.
pub fn ramp(start: RGBColor, end: RGBColor, t: f64) -> RGBColor {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
    RGBColor(mix(start.0, end.0), mix(start.1, end.1), mix(start.2, end.2))
}

/// `count` evenly spaced colors from `start` to `end`
pub fn dark_palette(start: RGBColor, end: RGBColor, count: usize) -> Vec<RGBColor> {
    match count {
        0 => Vec::new(),
        1 => vec![end],
        _ => (0..count)
            .map(|i| ramp(start, end, i as f64 / (count - 1) as f64))
            .collect(),
    }
}
