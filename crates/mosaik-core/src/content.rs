//! Content that can be placed into a slide region.

use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;
use std::str::FromStr;

use crate::canvas::Canvas;
use crate::errors::{ConfigError, RenderError};
use crate::types::Bounds;

/// Policy for sizing a picture inside its region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PictureSizeMode {
    /// Keep the native aspect ratio, constrain one dimension.
    Fit,
    /// Force the picture to the region size, ignoring aspect ratio.
    Stretch,
    /// Fill the region, keep aspect ratio, crop the overflow.
    #[default]
    Cover,
}

impl FromStr for PictureSizeMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fit" => Ok(Self::Fit),
            "stretch" => Ok(Self::Stretch),
            "cover" => Ok(Self::Cover),
            _ => Err(ConfigError::UnknownPictureSizeMode { value: s.to_string() }),
        }
    }
}

/// Policy for sizing a table inside its region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TableSizeMode {
    /// Fill the whole region.
    #[default]
    Stretch,
    /// Full width, one configured row height per row.
    Auto,
}

impl FromStr for TableSizeMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stretch" => Ok(Self::Stretch),
            "auto" => Ok(Self::Auto),
            _ => Err(ConfigError::UnknownTableSizeMode { value: s.to_string() }),
        }
    }
}

/// Horizontal alignment of text within a textbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl FromStr for HorizontalAlignment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            "justify" => Ok(Self::Justify),
            _ => Err(ConfigError::UnknownAlignment { value: s.to_string() }),
        }
    }
}

/// A picture placed in a region.
#[derive(Debug, Clone, PartialEq)]
pub struct Picture {
    pub path: PathBuf,
    pub size_mode: PictureSizeMode,
    /// Overrides the region width as the sizing target.
    pub width: Option<f64>,
    /// Overrides the region height as the sizing target.
    pub height: Option<f64>,
}

/// Custom content that draws itself onto a canvas.
///
/// The orchestrator hands over the region's final physical bounds, with
/// margins already applied.
pub trait Drawable: fmt::Debug {
    /// Reject bounds the object cannot be drawn into. Called for every
    /// custom region before the first shape of the deck is placed.
    fn check(&self, _bounds: Bounds) -> Result<(), RenderError> {
        Ok(())
    }

    fn attach(&self, canvas: &mut dyn Canvas, bounds: Bounds) -> Result<(), RenderError>;
}

/// Region content.
#[derive(Debug, Clone, Default)]
pub enum Content {
    /// Nothing is rendered for this region.
    #[default]
    Empty,
    Picture(Picture),
    Text {
        value: String,
        alignment: HorizontalAlignment,
    },
    Table {
        rows: Vec<Vec<String>>,
        size_mode: TableSizeMode,
    },
    Custom(Rc<dyn Drawable>),
}

impl Content {
    pub fn is_empty(&self) -> bool {
        matches!(self, Content::Empty)
    }

    /// Short name of the content kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Content::Empty => "empty",
            Content::Picture(_) => "picture",
            Content::Text { .. } => "text",
            Content::Table { .. } => "table",
            Content::Custom(_) => "custom",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_picture_size_mode() {
        assert_eq!("fit".parse::<PictureSizeMode>().unwrap(), PictureSizeMode::Fit);
        assert_eq!("cover".parse::<PictureSizeMode>().unwrap(), PictureSizeMode::Cover);
        let err = "zoom".parse::<PictureSizeMode>().unwrap_err();
        assert!(err.to_string().contains("fit, stretch, cover"));
    }

    #[test]
    fn test_parse_table_size_mode() {
        assert_eq!("auto".parse::<TableSizeMode>().unwrap(), TableSizeMode::Auto);
        let err = "fit".parse::<TableSizeMode>().unwrap_err();
        assert!(err.to_string().contains("stretch, auto"));
    }

    #[test]
    fn test_parse_alignment() {
        assert_eq!(
            "justify".parse::<HorizontalAlignment>().unwrap(),
            HorizontalAlignment::Justify
        );
        let err = "middle".parse::<HorizontalAlignment>().unwrap_err();
        assert!(err.to_string().contains("left, center, right, justify"));
    }

    #[test]
    fn test_default_content_is_empty() {
        let content = Content::default();
        assert!(content.is_empty());
        assert_eq!(content.kind(), "empty");
    }
}
