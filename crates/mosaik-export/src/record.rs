//! In-memory canvas.
//!
//! Keeps every shape that was placed so the result can be inspected or saved
//! as a JSON shape dump. Native picture sizes are registered up front instead
//! of being read from disk.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use glam::DVec2;
use mosaik_core::{Canvas, DeckWriter, ExportError, RenderError, SlideShapes};

/// A canvas that records shapes in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    picture_sizes: HashMap<PathBuf, DVec2>,
    slides: Vec<SlideShapes>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the native size of a picture, in physical units.
    pub fn with_picture_size(mut self, path: impl Into<PathBuf>, width: f64, height: f64) -> Self {
        self.picture_sizes.insert(path.into(), DVec2::new(width, height));
        self
    }

    pub fn slides(&self) -> &[SlideShapes] {
        &self.slides
    }

    /// Serialize every recorded slide.
    pub fn to_json(&self) -> Result<String, ExportError> {
        serde_json::to_string_pretty(&self.slides)
            .map_err(|e| ExportError::Serialize { reason: e.to_string() })
    }
}

impl Canvas for RecordingCanvas {
    fn add_slide(&mut self, width: f64, height: f64) {
        self.slides.push(SlideShapes::new(width, height));
    }

    fn current_slide(&mut self) -> Result<&mut SlideShapes, RenderError> {
        self.slides.last_mut().ok_or(RenderError::NoActiveSlide)
    }

    fn native_picture_size(&self, path: &Path) -> Result<DVec2, RenderError> {
        self.picture_sizes
            .get(path)
            .copied()
            .ok_or_else(|| RenderError::ImageUnavailable {
                path: path.to_path_buf(),
                reason: "no size registered".to_string(),
            })
    }
}

impl DeckWriter for RecordingCanvas {
    fn save(&self, path: &Path) -> Result<(), ExportError> {
        if self.slides.is_empty() {
            return Err(ExportError::NoSlides);
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
