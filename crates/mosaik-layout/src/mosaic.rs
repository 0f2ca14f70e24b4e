//! Mosaic parsing.
//!
//! A mosaic is an ASCII grid where every non-space character names a region.
//! The region of a character is the bounding box over all cells where it
//! appears; occurrences do not need to be contiguous.

use indexmap::IndexMap;
use mosaik_core::{GridRect, GridSize, LayoutError};

/// A parsed mosaic: grid dimensions and one grid rect per token.
#[derive(Debug, Clone, PartialEq)]
pub struct Mosaic {
    pub grid: GridSize,
    /// Regions in first-discovery order (row-major scan)
    pub regions: IndexMap<char, GridRect>,
}

/// Running min/max of the cells holding one token.
#[derive(Debug, Clone, Copy)]
struct Extent {
    min_row: usize,
    max_row: usize,
    min_col: usize,
    max_col: usize,
}

impl Extent {
    fn at(row: usize, col: usize) -> Self {
        Self {
            min_row: row,
            max_row: row,
            min_col: col,
            max_col: col,
        }
    }

    fn include(&mut self, row: usize, col: usize) {
        self.min_row = self.min_row.min(row);
        self.max_row = self.max_row.max(row);
        self.min_col = self.min_col.min(col);
        self.max_col = self.max_col.max(col);
    }

    fn to_rect(self) -> GridRect {
        GridRect::new(
            self.min_col as u32,
            self.min_row as u32,
            (self.max_col - self.min_col + 1) as u32,
            (self.max_row - self.min_row + 1) as u32,
        )
    }
}

/// Parse a mosaic string into grid regions.
///
/// The whole string is trimmed, then every line is trimmed. Spaces are empty
/// cells. Blank lines between rows stay in the grid as empty rows.
pub fn parse_mosaic(source: &str) -> Result<Mosaic, LayoutError> {
    let rows: Vec<&str> = source.trim().lines().map(str::trim).collect();
    if rows.is_empty() {
        return Err(LayoutError::EmptyMosaic);
    }

    let mut extents: IndexMap<char, Extent> = IndexMap::new();
    let mut n_cols = 0;

    for (row, line) in rows.iter().enumerate() {
        let mut line_len = 0;
        for (col, ch) in line.chars().enumerate() {
            line_len = col + 1;
            if ch == ' ' {
                continue;
            }
            extents
                .entry(ch)
                .and_modify(|extent| extent.include(row, col))
                .or_insert_with(|| Extent::at(row, col));
        }
        n_cols = n_cols.max(line_len);
    }

    Ok(Mosaic {
        grid: GridSize {
            rows: rows.len() as u32,
            cols: n_cols as u32,
        },
        regions: extents
            .into_iter()
            .map(|(id, extent)| (id, extent.to_rect()))
            .collect(),
    })
}
