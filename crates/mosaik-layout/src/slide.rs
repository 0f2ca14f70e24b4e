//! Slides and their regions.

use std::path::PathBuf;
use std::rc::Rc;

use indexmap::IndexMap;
use mosaik_core::{
    Content, DeckConfig, Drawable, GridRect, GridSize, HorizontalAlignment, LayoutError, Margins,
    Picture, PictureSizeMode, TableSizeMode,
};

use crate::mosaic::parse_mosaic;
use crate::validate::validate_bounds;

/// A named region of a slide.
///
/// The grid rect is fixed when the slide is parsed; margins and content are
/// set by the caller before rendering.
#[derive(Debug, Clone)]
pub struct Region {
    id: char,
    rect: GridRect,
    margins: Margins,
    content: Content,
}

impl Region {
    pub fn new(id: char, rect: GridRect, margins: Margins) -> Self {
        Self {
            id,
            rect,
            margins,
            content: Content::Empty,
        }
    }

    pub fn id(&self) -> char {
        self.id
    }

    pub fn rect(&self) -> &GridRect {
        &self.rect
    }

    pub fn margins(&self) -> &Margins {
        &self.margins
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn set_margins(&mut self, margins: Margins) -> &mut Self {
        self.margins = margins;
        self
    }

    /// Place a picture sized to the region.
    pub fn set_picture(
        &mut self,
        path: impl Into<PathBuf>,
        size_mode: PictureSizeMode,
    ) -> &mut Self {
        self.set_picture_sized(path, size_mode, None, None)
    }

    /// Place a picture with explicit target dimensions. A given dimension
    /// replaces the region's own width or height when sizing.
    pub fn set_picture_sized(
        &mut self,
        path: impl Into<PathBuf>,
        size_mode: PictureSizeMode,
        width: Option<f64>,
        height: Option<f64>,
    ) -> &mut Self {
        self.content = Content::Picture(Picture {
            path: path.into(),
            size_mode,
            width,
            height,
        });
        self
    }

    pub fn set_text(&mut self, value: impl Into<String>) -> &mut Self {
        self.set_text_aligned(value, HorizontalAlignment::default())
    }

    pub fn set_text_aligned(
        &mut self,
        value: impl Into<String>,
        alignment: HorizontalAlignment,
    ) -> &mut Self {
        self.content = Content::Text {
            value: value.into(),
            alignment,
        };
        self
    }

    pub fn set_table<R, C>(&mut self, rows: R, size_mode: TableSizeMode) -> &mut Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: Into<String>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        self.content = Content::Table { rows, size_mode };
        self
    }

    pub fn set_object(&mut self, drawable: impl Drawable + 'static) -> &mut Self {
        self.content = Content::Custom(Rc::new(drawable));
        self
    }

    /// Remove any content; the region renders as nothing.
    pub fn clear(&mut self) -> &mut Self {
        self.content = Content::Empty;
        self
    }
}

/// A slide layout defined by a mosaic.
#[derive(Debug, Clone)]
pub struct Slide {
    title: Option<String>,
    grid: GridSize,
    regions: IndexMap<char, Region>,
}

impl Slide {
    /// Parse an untitled slide with the default region margins.
    pub fn new(mosaic: &str) -> Result<Self, LayoutError> {
        Self::parse(mosaic, None, &DeckConfig::default())
    }

    /// Parse a titled slide with the default region margins.
    pub fn with_title(mosaic: &str, title: impl Into<String>) -> Result<Self, LayoutError> {
        Self::parse(mosaic, Some(title.into()), &DeckConfig::default())
    }

    /// Parse and validate a mosaic. Region margins start at
    /// `config.region_margin` on every side.
    pub fn parse(
        mosaic: &str,
        title: Option<String>,
        config: &DeckConfig,
    ) -> Result<Self, LayoutError> {
        let parsed = parse_mosaic(mosaic)?;
        validate_bounds(parsed.regions.iter().map(|(id, rect)| (*id, rect)))?;

        let margins = Margins::uniform(config.region_margin);
        let regions = parsed
            .regions
            .into_iter()
            .map(|(id, rect)| (id, Region::new(id, rect, margins)))
            .collect();

        Ok(Self {
            title,
            grid: parsed.grid,
            regions,
        })
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    pub fn n_rows(&self) -> u32 {
        self.grid.rows
    }

    pub fn n_cols(&self) -> u32 {
        self.grid.cols
    }

    pub fn region(&self, id: char) -> Result<&Region, LayoutError> {
        self.regions.get(&id).ok_or(LayoutError::UnknownRegion { id })
    }

    pub fn region_mut(&mut self, id: char) -> Result<&mut Region, LayoutError> {
        self.regions.get_mut(&id).ok_or(LayoutError::UnknownRegion { id })
    }

    /// Regions in mosaic discovery order.
    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.regions.values()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slide() {
        let slide = Slide::with_title("ab\nac", "An awesome slide").unwrap();
        assert_eq!(slide.title(), Some("An awesome slide"));
        assert_eq!(slide.n_rows(), 2);
        assert_eq!(slide.n_cols(), 2);
        assert_eq!(slide.len(), 3);
        assert_eq!(slide.region('a').unwrap().rect(), &GridRect::new(0, 0, 1, 2));
        assert_eq!(slide.region('a').unwrap().margins(), &Margins::uniform(0.1));
    }

    #[test]
    fn test_overlapping_mosaic_is_rejected() {
        let result = Slide::new("ab\nba");
        assert!(matches!(result, Err(LayoutError::OverlappingRegions { .. })));
    }

    #[test]
    fn test_unknown_region() {
        let mut slide = Slide::new("ab").unwrap();
        assert!(matches!(slide.region('z'), Err(LayoutError::UnknownRegion { id: 'z' })));
        assert!(slide.region_mut('z').is_err());
    }

    #[test]
    fn test_margins_from_config() {
        let config = DeckConfig {
            region_margin: 0.25,
            ..DeckConfig::default()
        };
        let slide = Slide::parse("a", None, &config).unwrap();
        assert_eq!(slide.region('a').unwrap().margins(), &Margins::uniform(0.25));
    }

    #[test]
    fn test_set_content() {
        let mut slide = Slide::new("abc").unwrap();
        slide.region_mut('a').unwrap().set_picture("dog.jpg", PictureSizeMode::Fit);
        slide
            .region_mut('b')
            .unwrap()
            .set_text_aligned("hello", HorizontalAlignment::Right);
        slide
            .region_mut('c')
            .unwrap()
            .set_table([["Name", "Age"], ["John", "25"]], TableSizeMode::Auto);

        assert_eq!(slide.region('a').unwrap().content().kind(), "picture");
        match slide.region('b').unwrap().content() {
            Content::Text { value, alignment } => {
                assert_eq!(value, "hello");
                assert_eq!(*alignment, HorizontalAlignment::Right);
            }
            other => panic!("unexpected content: {other:?}"),
        }
        match slide.region('c').unwrap().content() {
            Content::Table { rows, size_mode } => {
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[1][0], "John");
                assert_eq!(*size_mode, TableSizeMode::Auto);
            }
            other => panic!("unexpected content: {other:?}"),
        }

        slide.region_mut('a').unwrap().clear();
        assert!(slide.region('a').unwrap().content().is_empty());
    }

    #[test]
    fn test_regions_in_discovery_order() {
        let slide = Slide::new("ba\nbc").unwrap();
        let ids: Vec<char> = slide.regions().map(Region::id).collect();
        assert_eq!(ids, vec!['b', 'a', 'c']);
    }
}
