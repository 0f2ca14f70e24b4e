//! The canvas interface the layout engine renders onto.
//!
//! A canvas owns the shapes of every slide it has started. Shapes are
//! returned as mutable handles so the caller can adjust a picture after the
//! canvas has sized it, the same way a presentation document API would.

use std::path::{Path, PathBuf};

use glam::DVec2;

use crate::content::HorizontalAlignment;
use crate::errors::{ExportError, RenderError};
use crate::types::{Bounds, Color, Crop};

/// A picture placed on a slide.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PictureHandle {
    pub path: PathBuf,
    pub bounds: Bounds,
    pub crop: Crop,
}

impl PictureHandle {
    /// Rendered size as a vector.
    pub fn size(&self) -> DVec2 {
        self.bounds.size()
    }
}

/// Font settings for a textbox.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    pub name: Option<String>,
    /// Size in physical units
    pub size: Option<f64>,
    pub bold: bool,
    pub color: Option<Color>,
}

/// A textbox placed on a slide.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextHandle {
    pub bounds: Bounds,
    pub text: String,
    pub word_wrap: bool,
    pub alignment: HorizontalAlignment,
    pub font: Font,
    pub fill: Option<Color>,
}

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableCell {
    pub text: String,
}

/// A table placed on a slide. Cells are stored row-major.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableHandle {
    pub bounds: Bounds,
    pub rows: usize,
    pub cols: usize,
    cells: Vec<TableCell>,
}

impl TableHandle {
    pub fn new(rows: usize, cols: usize, bounds: Bounds) -> Self {
        Self {
            bounds,
            rows,
            cols,
            cells: vec![TableCell::default(); rows * cols],
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&TableCell> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut TableCell> {
        if row < self.rows && col < self.cols {
            self.cells.get_mut(row * self.cols + col)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
enum ShapeRef {
    Picture(usize),
    Text(usize),
    Table(usize),
}

/// A borrowed shape, in drawing order.
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
    Picture(&'a PictureHandle),
    Text(&'a TextHandle),
    Table(&'a TableHandle),
}

/// All shapes on one slide.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideShapes {
    pub width: f64,
    pub height: f64,
    pictures: Vec<PictureHandle>,
    textboxes: Vec<TextHandle>,
    tables: Vec<TableHandle>,
    order: Vec<ShapeRef>,
}

impl SlideShapes {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn push_picture(&mut self, picture: PictureHandle) -> &mut PictureHandle {
        let index = self.pictures.len();
        self.pictures.push(picture);
        self.order.push(ShapeRef::Picture(index));
        &mut self.pictures[index]
    }

    pub fn push_textbox(&mut self, textbox: TextHandle) -> &mut TextHandle {
        let index = self.textboxes.len();
        self.textboxes.push(textbox);
        self.order.push(ShapeRef::Text(index));
        &mut self.textboxes[index]
    }

    pub fn push_table(&mut self, table: TableHandle) -> &mut TableHandle {
        let index = self.tables.len();
        self.tables.push(table);
        self.order.push(ShapeRef::Table(index));
        &mut self.tables[index]
    }

    pub fn pictures(&self) -> &[PictureHandle] {
        &self.pictures
    }

    pub fn textboxes(&self) -> &[TextHandle] {
        &self.textboxes
    }

    pub fn tables(&self) -> &[TableHandle] {
        &self.tables
    }

    /// Number of shapes on the slide.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate shapes in the order they were added.
    pub fn shapes(&self) -> impl Iterator<Item = Shape<'_>> + '_ {
        self.order.iter().map(move |shape| match *shape {
            ShapeRef::Picture(i) => Shape::Picture(&self.pictures[i]),
            ShapeRef::Text(i) => Shape::Text(&self.textboxes[i]),
            ShapeRef::Table(i) => Shape::Table(&self.tables[i]),
        })
    }
}

/// A drawing surface for slides.
///
/// Implementors provide slide storage and native image sizes; picture,
/// textbox and table placement have default implementations on top of those.
pub trait Canvas {
    /// Start a new slide. Subsequent shapes are added to it.
    fn add_slide(&mut self, width: f64, height: f64);

    /// The slide currently being drawn.
    fn current_slide(&mut self) -> Result<&mut SlideShapes, RenderError>;

    /// Natural size of an image in physical units.
    fn native_picture_size(&self, path: &Path) -> Result<DVec2, RenderError>;

    /// Native size of an image that can actually be placed.
    fn usable_picture_size(&self, path: &Path) -> Result<DVec2, RenderError> {
        let native = self.native_picture_size(path)?;
        if native.x <= 0.0 || native.y <= 0.0 {
            return Err(RenderError::EmptyImage { path: path.to_path_buf() });
        }
        Ok(native)
    }

    /// Place a picture. A missing dimension is derived from the image's
    /// native aspect ratio; with neither given the native size is used.
    fn add_picture(
        &mut self,
        path: &Path,
        left: f64,
        top: f64,
        width: Option<f64>,
        height: Option<f64>,
    ) -> Result<&mut PictureHandle, RenderError> {
        let native = self.usable_picture_size(path)?;
        let size = match (width, height) {
            (Some(w), Some(h)) => DVec2::new(w, h),
            (Some(w), None) => DVec2::new(w, w * native.y / native.x),
            (None, Some(h)) => DVec2::new(h * native.x / native.y, h),
            (None, None) => native,
        };
        let handle = PictureHandle {
            path: path.to_path_buf(),
            bounds: Bounds::new(left, top, size.x, size.y),
            crop: Crop::default(),
        };
        Ok(self.current_slide()?.push_picture(handle))
    }

    /// Place an empty, left-aligned, non-wrapping textbox.
    fn add_textbox(
        &mut self,
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    ) -> Result<&mut TextHandle, RenderError> {
        let handle = TextHandle {
            bounds: Bounds::new(left, top, width, height),
            text: String::new(),
            word_wrap: false,
            alignment: HorizontalAlignment::Left,
            font: Font::default(),
            fill: None,
        };
        Ok(self.current_slide()?.push_textbox(handle))
    }

    /// Place a table with empty cells.
    fn add_table(
        &mut self,
        rows: usize,
        cols: usize,
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    ) -> Result<&mut TableHandle, RenderError> {
        let handle = TableHandle::new(rows, cols, Bounds::new(left, top, width, height));
        Ok(self.current_slide()?.push_table(handle))
    }
}

/// A canvas that can persist what was drawn on it.
pub trait DeckWriter: Canvas {
    fn save(&self, path: &Path) -> Result<(), ExportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedCanvas {
        slide: Option<SlideShapes>,
        native: DVec2,
    }

    impl Canvas for FixedCanvas {
        fn add_slide(&mut self, width: f64, height: f64) {
            self.slide = Some(SlideShapes::new(width, height));
        }

        fn current_slide(&mut self) -> Result<&mut SlideShapes, RenderError> {
            self.slide.as_mut().ok_or(RenderError::NoActiveSlide)
        }

        fn native_picture_size(&self, _path: &Path) -> Result<DVec2, RenderError> {
            Ok(self.native)
        }
    }

    fn canvas(native: DVec2) -> FixedCanvas {
        FixedCanvas { slide: None, native }
    }

    #[test]
    fn test_picture_width_only_keeps_aspect() {
        let mut canvas = canvas(DVec2::new(8.0, 3.0));
        canvas.add_slide(10.0, 7.5);
        let pic = canvas.add_picture(Path::new("a.png"), 0.0, 0.0, Some(4.0), None).unwrap();
        assert!((pic.bounds.width - 4.0).abs() < 1e-9);
        assert!((pic.bounds.height - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_picture_height_only_keeps_aspect() {
        let mut canvas = canvas(DVec2::new(8.0, 4.0));
        canvas.add_slide(10.0, 7.5);
        let pic = canvas.add_picture(Path::new("a.png"), 1.0, 1.0, None, Some(2.0)).unwrap();
        assert!((pic.bounds.width - 4.0).abs() < 1e-9);
        assert_eq!(pic.bounds.left, 1.0);
    }

    #[test]
    fn test_picture_without_slide_fails() {
        let mut canvas = canvas(DVec2::new(1.0, 1.0));
        let result = canvas.add_picture(Path::new("a.png"), 0.0, 0.0, None, None);
        assert!(matches!(result, Err(RenderError::NoActiveSlide)));
    }

    #[test]
    fn test_zero_sized_image_is_rejected() {
        let mut canvas = canvas(DVec2::new(0.0, 3.0));
        canvas.add_slide(10.0, 7.5);
        let result = canvas.add_picture(Path::new("a.png"), 0.0, 0.0, Some(1.0), None);
        assert!(matches!(result, Err(RenderError::EmptyImage { .. })));
    }

    #[test]
    fn test_shapes_keep_insertion_order() {
        let mut canvas = canvas(DVec2::new(1.0, 1.0));
        canvas.add_slide(10.0, 7.5);
        canvas.add_textbox(0.0, 0.0, 1.0, 1.0).unwrap().text = "title".to_string();
        canvas.add_picture(Path::new("a.png"), 0.0, 0.0, None, None).unwrap();
        canvas.add_table(2, 2, 0.0, 0.0, 1.0, 1.0).unwrap();

        let slide = canvas.current_slide().unwrap();
        let kinds: Vec<_> = slide
            .shapes()
            .map(|shape| match shape {
                Shape::Picture(_) => "picture",
                Shape::Text(_) => "text",
                Shape::Table(_) => "table",
            })
            .collect();
        assert_eq!(kinds, vec!["text", "picture", "table"]);
        assert_eq!(slide.len(), 3);
    }

    #[test]
    fn test_table_cells_are_addressable() {
        let mut table = TableHandle::new(2, 3, Bounds::default());
        table.cell_mut(1, 2).unwrap().text = "x".to_string();
        assert_eq!(table.cell(1, 2).unwrap().text, "x");
        assert!(table.cell(2, 0).is_none());
        assert!(table.cell_mut(0, 3).is_none());
    }
}
