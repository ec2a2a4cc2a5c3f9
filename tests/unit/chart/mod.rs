//! Tests for chart paths, font registration and plot decoration

mod bars;
mod palette;

#[cfg(test)]
mod tests {
    use crate::fixtures::{font_path, write_assets};
    use image::{Rgba, RgbaImage};
    use std::path::Path;
    use weakmap::WeakmapError;
    use weakmap::bestiary::Element;
    use weakmap::chart::{
        ChartStyle, IconPlacement, Plot, combination_chart_path, decorate, finish,
        overlap_chart_path, register_chart_font,
    };
    use weakmap::io::image::AssetStore;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn blank_plot(icons: Vec<IconPlacement>) -> Plot {
        Plot {
            canvas: RgbaImage::from_pixel(800, 600, WHITE),
            icons,
            logo_offset: (25, 25),
        }
    }

    // Tests output file names embed size, category and region
    // Verified by swapping category and region
    #[test]
    fn test_chart_paths() {
        let dir = Path::new("charts");

        assert_eq!(
            combination_chart_path(dir, 2, "elite", "Jarilo-VI"),
            dir.join("mobs_per_weakness_2-elite_from_Jarilo-VI.png")
        );
        assert_eq!(
            overlap_chart_path(dir, "all", "every planets"),
            dir.join("weaknesses_overlap-all_from_every planets.png")
        );
    }

    // Tests the default style matches the chart geometry and draws no text
    // Verified by enabling text without a registered font
    #[test]
    fn test_default_style() {
        let style = ChartStyle::default();

        assert_eq!(style.canvas, (2400, 1600));
        assert!(!style.draw_text);
    }

    // Tests icons are centred on their placement and the logo sits bottom-right
    // Verified by anchoring the logo at the top-left corner
    #[test]
    fn test_decorate_places_icon_and_logo() {
        let temp_dir = tempfile::tempdir();
        assert!(temp_dir.is_ok());
        if let Ok(dir) = temp_dir {
            write_assets(dir.path(), &["Jarilo-VI"]);
            let assets = AssetStore::new(dir.path(), "png");
            let plot = blank_plot(vec![IconPlacement {
                element: Element::Fire,
                center: (100, 100),
                size: 20,
            }]);

            let decorated = decorate(plot, &assets, "Jarilo-VI");

            assert!(decorated.is_ok());
            if let Ok(canvas) = decorated {
                assert_eq!(canvas.dimensions(), (800, 600));

                let icon = canvas.get_pixel(100, 100);
                assert!(icon[2] > 200 && icon[0] < 50, "icon pixel {icon:?}");
                assert_eq!(*canvas.get_pixel(130, 100), WHITE);

                // 100x50 logo resized to 400x200, 25 px from the right and bottom
                let logo = canvas.get_pixel(700, 500);
                assert!(logo[0] > 200 && logo[2] < 50, "logo pixel {logo:?}");
                assert_eq!(*canvas.get_pixel(790, 590), WHITE);
                assert_eq!(*canvas.get_pixel(300, 500), WHITE);
                assert_eq!(*canvas.get_pixel(700, 300), WHITE);
            }
        }
    }

    // Tests a missing icon fails with the icon path
    // Verified by skipping icons that cannot be loaded
    #[test]
    fn test_missing_icon() {
        let temp_dir = tempfile::tempdir();
        assert!(temp_dir.is_ok());
        if let Ok(dir) = temp_dir {
            let assets = AssetStore::new(dir.path(), "png");
            let plot = blank_plot(vec![IconPlacement {
                element: Element::Quantum,
                center: (10, 10),
                size: 20,
            }]);

            let result = decorate(plot, &assets, "Jarilo-VI");

            assert!(matches!(
                result,
                Err(WeakmapError::AssetLoad { ref path, .. }) if path.ends_with("Quantum.png")
            ));
        }
    }

    // Tests a missing logo fails and nothing is written
    // Verified by writing the chart before loading the logo
    #[test]
    fn test_missing_logo_writes_nothing() {
        let temp_dir = tempfile::tempdir();
        assert!(temp_dir.is_ok());
        if let Ok(dir) = temp_dir {
            write_assets(dir.path(), &[]);
            let assets = AssetStore::new(dir.path(), "png");
            let output = dir.path().join("out").join("chart.png");

            let result = finish(blank_plot(Vec::new()), &assets, "Penacony", &output);

            assert!(matches!(
                result,
                Err(WeakmapError::AssetLoad { ref path, .. }) if path.ends_with("Penacony.png")
            ));
            assert!(!output.exists());
        }
    }

    // Tests a decorated plot is written as PNG under a created directory
    // Verified by skipping directory creation
    #[test]
    fn test_finish_writes_png() {
        let temp_dir = tempfile::tempdir();
        assert!(temp_dir.is_ok());
        if let Ok(dir) = temp_dir {
            write_assets(dir.path(), &["Jarilo-VI"]);
            let assets = AssetStore::new(dir.path(), "png");
            let output = dir.path().join("nested").join("chart.png");

            let result = finish(blank_plot(Vec::new()), &assets, "Jarilo-VI", &output);

            assert!(result.is_ok());
            let written = image::open(&output);
            assert!(matches!(written, Ok(ref img) if img.width() == 800 && img.height() == 600));
        }
    }

    // Tests font registration reports unreadable and invalid font files
    // Verified by ignoring registration failures
    #[test]
    fn test_register_font_errors() {
        let temp_dir = tempfile::tempdir();
        assert!(temp_dir.is_ok());
        if let Ok(dir) = temp_dir {
            let missing = dir.path().join("missing.ttf");
            assert!(matches!(
                register_chart_font(&missing, "weakmap-test"),
                Err(WeakmapError::FileSystem { .. })
            ));

            let garbage = dir.path().join("garbage.ttf");
            assert!(std::fs::write(&garbage, b"not a font").is_ok());
            assert!(matches!(
                register_chart_font(&garbage, "weakmap-test"),
                Err(WeakmapError::Chart { chart: "font", .. })
            ));
        }
    }

    // Tests a TrueType file registers under the requested family
    // Verified by rejecting every font file
    #[test]
    fn test_register_font() {
        assert!(register_chart_font(&font_path(), "weakmap-test-sans").is_ok());
    }
}
