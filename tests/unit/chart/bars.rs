//! Tests for the combination bar chart

#[cfg(test)]
mod tests {
    use crate::fixtures::{sample_mobs, text_style, write_assets};
    use image::Rgba;
    use weakmap::analysis::combinations::{CombinationCount, count_per_combination};
    use weakmap::bestiary::Element;
    use weakmap::chart::bars::{
        combination_title, count_axis_span, plot_combination_bars, render_combination_chart,
    };
    use weakmap::chart::{ChartStyle, RenderContext};
    use weakmap::io::image::AssetStore;

    fn small_style() -> ChartStyle {
        ChartStyle {
            canvas: (800, 600),
            ..ChartStyle::default()
        }
    }

    // Tests the caption names the category and region
    // Verified by dropping the parentheses around the category
    #[test]
    fn test_title() {
        assert_eq!(
            combination_title("elite", "Jarilo-VI"),
            "How many (elite) mobs from Jarilo-VI have at least one weakness from this weaknesses combination?"
        );
    }

    // Tests the count axis spans at least 60 and two past the highest count
    // Verified by using the highest count alone
    #[test]
    fn test_count_axis_span() {
        let count = |mobs| CombinationCount {
            elements: vec![Element::Fire],
            mobs,
        };

        assert_eq!(count_axis_span(&[]), 60);
        assert_eq!(count_axis_span(&[count(3), count(12)]), 60);
        assert_eq!(count_axis_span(&[count(70), count(5)]), 72);
    }

    // Tests one icon per element of every combination, bottom row first
    // Verified by laying icons out left to right
    #[test]
    fn test_icon_layout() {
        let results = count_per_combination(&sample_mobs(), 2, 2);

        let plot = plot_combination_bars(&results, "all", "Jarilo-VI", &small_style());

        assert!(plot.is_ok());
        if let Ok(plot) = plot {
            assert_eq!(plot.canvas.dimensions(), (800, 600));
            assert_eq!(plot.icons.len(), 2 * results.len());
            assert_eq!(plot.logo_offset, (25, 150));
            assert_eq!(*plot.canvas.get_pixel(0, 0), Rgba([255, 255, 255, 255]));

            let rows: Vec<_> = plot.icons.chunks(2).collect();
            for (row, result) in rows.iter().zip(&results) {
                assert_eq!(row[0].element, result.elements[0]);
                assert_eq!(row[1].element, result.elements[1]);
                assert_eq!(row[0].center.1, row[1].center.1);
                assert!(row[0].center.0 > row[1].center.0, "icons go right to left");
                assert!(row[1].center.0 > 0);
            }

            let first = rows.first().map(|row| row[0].center.1);
            let last = rows.last().map(|row| row[0].center.1);
            assert!(first > last, "first result is the bottom bar");
        }
    }

    // Tests an empty result list still plots
    // Verified by building a zero-height axis
    #[test]
    fn test_empty_results() {
        let plot = plot_combination_bars(&[], "normal", "Jarilo-VI", &small_style());

        assert!(matches!(plot, Ok(ref plot) if plot.icons.is_empty()));
    }

    // Tests rendering writes a canvas-sized PNG at the chart path
    // Verified by writing the undecorated plot elsewhere
    #[test]
    fn test_render_writes_png() {
        let temp_dir = tempfile::tempdir();
        assert!(temp_dir.is_ok());
        if let Ok(dir) = temp_dir {
            write_assets(dir.path(), &["Jarilo-VI"]);
            let assets = AssetStore::new(dir.path(), "png");
            let output = dir.path().join("charts");
            let style = small_style();
            let ctx = RenderContext {
                assets: &assets,
                output_dir: &output,
                style: &style,
            };
            let results = count_per_combination(&sample_mobs(), 3, 3);

            let path = render_combination_chart(&results, 3, "all", "Jarilo-VI", &ctx);

            assert!(matches!(
                path,
                Ok(ref p) if p == &output.join("mobs_per_weakness_3-all_from_Jarilo-VI.png")
            ));
            if let Ok(path) = path {
                let written = image::open(&path);
                assert!(matches!(written, Ok(ref img) if img.width() == 800 && img.height() == 600));
            }
        }
    }

    // Tests a registered font draws the caption above the plot
    // Verified by skipping the caption when text is enabled
    #[test]
    fn test_plot_with_text() {
        let results = count_per_combination(&sample_mobs(), 2, 2);

        let plot = plot_combination_bars(&results, "all", "Jarilo-VI", &text_style((800, 600)));

        assert!(plot.is_ok());
        if let Ok(plot) = plot {
            assert_eq!(plot.icons.len(), 2 * results.len());

            let caption_band = (30..80).flat_map(|y| (0..800).map(move |x| (x, y)));
            let inked = caption_band
                .map(|(x, y)| plot.canvas.get_pixel(x, y))
                .any(|pixel| pixel[0] < 100 && pixel[1] < 100 && pixel[2] < 100);
            assert!(inked, "caption text is drawn");
        }
    }
}
