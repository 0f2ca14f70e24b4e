//! Error types for the mosaik engine.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for the mosaik engine.
#[derive(Debug, Error)]
pub enum MosaikError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors while building or laying out a slide.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Mosaic contains no region tokens")]
    EmptyMosaic,

    #[error("Invalid bounds for region '{id}': width {width}, height {height}")]
    DegenerateRegion { id: char, width: u32, height: u32 },

    #[error("Intersecting bounds detected: '{first}' and '{second}'")]
    OverlappingRegions { first: char, second: char },

    #[error("Unknown region '{id}'")]
    UnknownRegion { id: char },

    #[error("Region '{id}' has no room for content after margins ({width} x {height})")]
    NoRoomForContent { id: char, width: f64, height: f64 },
}

/// Errors in configuration values or region content settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown picture size mode: {value}\nAvailable modes: fit, stretch, cover")]
    UnknownPictureSizeMode { value: String },

    #[error("Unknown table size mode: {value}\nAvailable modes: stretch, auto")]
    UnknownTableSizeMode { value: String },

    #[error("Unknown horizontal alignment: {value}\nAvailable alignments: left, center, right, justify")]
    UnknownAlignment { value: String },

    #[error("Table in region '{id}' has no cells")]
    EmptyTable { id: char },

    #[error("Table in region '{id}' row {row} has {found} cells, expected {expected}")]
    RaggedTable {
        id: char,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Picture in region '{id}' has invalid explicit {dimension}: {value}")]
    InvalidPictureDimension {
        id: char,
        dimension: &'static str,
        value: f64,
    },

    #[error("Region '{id}' has invalid {side} margin: {value}")]
    InvalidMargin {
        id: char,
        side: &'static str,
        value: f64,
    },

    #[error("Invalid configuration: {reason}")]
    Invalid { reason: String },
}

/// Errors raised by a canvas while placing shapes.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("No slide has been started on this canvas")]
    NoActiveSlide,

    #[error("Cannot read image {}: {reason}", .path.display())]
    ImageUnavailable { path: PathBuf, reason: String },

    #[error("Image {} has zero size", .path.display())]
    EmptyImage { path: PathBuf },

    #[error("Custom object failed to attach: {reason}")]
    Drawable { reason: String },
}

/// Errors while writing a rendered deck.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error during export: {0}")]
    Io(#[from] std::io::Error),

    #[error("Nothing to export: the canvas holds no slides")]
    NoSlides,

    #[error("Serialization failed: {reason}")]
    Serialize { reason: String },
}
