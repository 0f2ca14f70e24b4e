//! Grid-to-physical geometry.

use mosaik_core::{Bounds, DeckConfig, GridRect, GridSize};

/// Physical bounds of a region before its own margins are applied.
///
/// Grid cells are scaled to the page: columns across the full width, rows
/// across the height left over after the title block. Slide padding then
/// insets the region, and a titled slide shifts it below the title.
pub fn region_bounds(
    rect: &GridRect,
    grid: GridSize,
    page_width: f64,
    page_height: f64,
    has_title: bool,
    config: &DeckConfig,
) -> Bounds {
    let title_height = if has_title { config.title_block_height() } else { 0.0 };
    let content_height = page_height - title_height;

    let cols = f64::from(grid.cols);
    let rows = f64::from(grid.rows);

    let scaled = Bounds::new(
        f64::from(rect.left) / cols * page_width,
        f64::from(rect.top) / rows * content_height,
        f64::from(rect.width) / cols * page_width,
        f64::from(rect.height) / rows * content_height,
    );

    let padded = scaled.inset(&config.padding());

    Bounds {
        top: padded.top + title_height,
        ..padded
    }
}

/// Bounds of the slide title textbox.
pub fn title_bounds(page_width: f64, config: &DeckConfig) -> Bounds {
    Bounds::new(
        config.slide_title_left_margin,
        config.slide_title_top_margin,
        page_width - config.slide_title_left_margin - config.slide_title_right_margin,
        config.slide_title_font_size,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_unpadded_cell() {
        let config = DeckConfig::zero_spacing();
        let grid = GridSize { rows: 2, cols: 3 };
        let bounds = region_bounds(&GridRect::new(0, 0, 1, 1), grid, 10.0, 7.5, false, &config);

        assert!(approx(bounds.left, 0.0));
        assert!(approx(bounds.top, 0.0));
        assert!(approx(bounds.width, 10.0 / 3.0));
        assert!(approx(bounds.height, 3.75));
    }

    #[test]
    fn test_padding_shifts_and_shrinks() {
        let config = DeckConfig::default();
        let grid = GridSize { rows: 2, cols: 2 };
        let bounds = region_bounds(&GridRect::new(1, 1, 1, 1), grid, 10.0, 8.0, false, &config);

        assert!(approx(bounds.left, 5.1));
        assert!(approx(bounds.top, 4.1));
        assert!(approx(bounds.width, 4.8));
        assert!(approx(bounds.height, 3.8));
    }

    #[test]
    fn test_title_reduces_row_height_and_shifts_down() {
        let config = DeckConfig::zero_spacing();
        let title = config.title_block_height();
        let grid = GridSize { rows: 2, cols: 1 };

        let first = region_bounds(&GridRect::new(0, 0, 1, 1), grid, 10.0, 7.5, true, &config);
        let second = region_bounds(&GridRect::new(0, 1, 1, 1), grid, 10.0, 7.5, true, &config);

        let row = (7.5 - title) / 2.0;
        assert!(approx(first.top, title));
        assert!(approx(first.height, row));
        assert!(approx(second.top, title + row));
        assert!(approx(second.bottom(), 7.5));
    }

    #[test]
    fn test_title_bounds() {
        let config = DeckConfig::default();
        let bounds = title_bounds(10.0, &config);
        assert!(approx(bounds.left, 0.1));
        assert!(approx(bounds.top, 0.1));
        assert!(approx(bounds.width, 9.8));
        assert!(approx(bounds.height, 0.3));
    }
}
