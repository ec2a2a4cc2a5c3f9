//! Tests for the chart color ramp

#[cfg(test)]
mod tests {
    use plotters::style::RGBColor;
    use weakmap::chart::palette::{RAMP_END, RAMP_START, dark_palette, ramp};

    // Tests ramp endpoints, midpoint and clamping
    // Verified by leaving t unclamped
    #[test]
    fn test_ramp() {
        let black = RGBColor(0, 0, 0);
        let white = RGBColor(255, 255, 255);

        assert_eq!(ramp(black, white, 0.0), black);
        assert_eq!(ramp(black, white, 1.0), white);
        assert_eq!(ramp(black, white, 0.5), RGBColor(128, 128, 128));
        assert_eq!(ramp(black, white, -3.0), black);
        assert_eq!(ramp(black, white, 7.0), white);
        assert_eq!(ramp(black, white, f64::NAN), black);
    }

    // Tests palettes run from the start color to the end color
    // Verified by spacing colors over count instead of count - 1
    #[test]
    fn test_dark_palette() {
        let colors = dark_palette(RAMP_START, RAMP_END, 21);

        assert_eq!(colors.len(), 21);
        assert_eq!(colors.first(), Some(&RAMP_START));
        assert_eq!(colors.last(), Some(&RAMP_END));
        assert_eq!(colors.get(10), Some(&ramp(RAMP_START, RAMP_END, 0.5)));
    }

    // Tests degenerate palette sizes
    // Verified by dividing by count - 1 for a single color
    #[test]
    fn test_small_palettes() {
        assert!(dark_palette(RAMP_START, RAMP_END, 0).is_empty());
        assert_eq!(dark_palette(RAMP_START, RAMP_END, 1), vec![RAMP_END]);
        assert_eq!(
            dark_palette(RAMP_START, RAMP_END, 2),
            vec![RAMP_START, RAMP_END]
        );
    }
}
