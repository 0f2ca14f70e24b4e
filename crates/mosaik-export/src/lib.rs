//! Presentation rendering and export formats for mosaik decks.
//!
//! Supported canvases:
//! - Recording (in-memory shapes, saved as a JSON shape dump)
//! - SVG (every slide stacked in one document)

pub mod objects;
pub mod presentation;
pub mod record;

#[cfg(feature = "svg")]
pub mod svg;

pub use objects::TextboxWithTitle;
pub use presentation::Presentation;
pub use record::RecordingCanvas;

#[cfg(feature = "svg")]
pub use svg::SvgCanvas;
