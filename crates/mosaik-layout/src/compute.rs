//! Per-slide layout computation.

use mosaik_core::{Bounds, ConfigError, Content, DeckConfig, LayoutError, MosaikError};

use crate::geometry::{region_bounds, title_bounds};
use crate::slide::{Region, Slide};

/// The slide title and where to draw it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleBlock<'a> {
    pub text: &'a str,
    pub bounds: Bounds,
}

/// A region resolved to physical bounds, margins applied.
#[derive(Debug, Clone, Copy)]
pub struct Placement<'a> {
    pub id: char,
    pub bounds: Bounds,
    pub content: &'a Content,
}

/// Computed layout of one slide.
#[derive(Debug, Clone)]
pub struct SlideLayout<'a> {
    pub width: f64,
    pub height: f64,
    pub title: Option<TitleBlock<'a>>,
    /// One placement per region, in region order
    pub placements: Vec<Placement<'a>>,
}

/// Compute the physical layout of a slide on a page.
///
/// Every region's content is checked before anything is returned, so a
/// successful result can be drawn without further validation. The slide is
/// not modified; calling this repeatedly yields identical layouts.
pub fn compute_layout<'a>(
    slide: &'a Slide,
    page_width: f64,
    page_height: f64,
    config: &DeckConfig,
) -> Result<SlideLayout<'a>, MosaikError> {
    config.validate()?;

    let title = slide.title().map(|text| TitleBlock {
        text,
        bounds: title_bounds(page_width, config),
    });

    let placements = slide
        .regions()
        .map(|region| {
            let base = region_bounds(
                region.rect(),
                slide.grid(),
                page_width,
                page_height,
                title.is_some(),
                config,
            );
            let bounds = base.inset(region.margins());
            check_region(region, &bounds)?;

            tracing::debug!(
                region = %region.id(),
                kind = region.content().kind(),
                left = bounds.left,
                top = bounds.top,
                width = bounds.width,
                height = bounds.height,
                "placed region"
            );

            Ok(Placement {
                id: region.id(),
                bounds,
                content: region.content(),
            })
        })
        .collect::<Result<Vec<_>, MosaikError>>()?;

    Ok(SlideLayout {
        width: page_width,
        height: page_height,
        title,
        placements,
    })
}

fn check_region(region: &Region, bounds: &Bounds) -> Result<(), MosaikError> {
    let id = region.id();
    let content = region.content();

    let margins = region.margins();
    for (side, value) in [
        ("left", margins.left),
        ("top", margins.top),
        ("right", margins.right),
        ("bottom", margins.bottom),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::InvalidMargin { id, side, value }.into());
        }
    }

    if content.is_empty() {
        return Ok(());
    }

    if !bounds.has_area() {
        return Err(LayoutError::NoRoomForContent {
            id,
            width: bounds.width,
            height: bounds.height,
        }
        .into());
    }

    match content {
        Content::Picture(picture) => {
            for (dimension, value) in [("width", picture.width), ("height", picture.height)] {
                if let Some(value) = value {
                    if !value.is_finite() || value <= 0.0 {
                        return Err(
                            ConfigError::InvalidPictureDimension { id, dimension, value }.into()
                        );
                    }
                }
            }
        }
        Content::Table { rows, .. } => {
            let expected = rows.first().map_or(0, Vec::len);
            if expected == 0 {
                return Err(ConfigError::EmptyTable { id }.into());
            }
            for (row, cells) in rows.iter().enumerate() {
                if cells.len() != expected {
                    return Err(ConfigError::RaggedTable {
                        id,
                        row,
                        expected,
                        found: cells.len(),
                    }
                    .into());
                }
            }
        }
        Content::Empty | Content::Text { .. } | Content::Custom(_) => {}
    }

    Ok(())
}
