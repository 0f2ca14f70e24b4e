//! Ready-made custom content.

use mosaik_core::{Bounds, Canvas, Color, Drawable, RenderError};

/// Vertical room added to the heading's font size.
const HEADING_PADDING: f64 = 0.2;

/// A text block with a colored heading bar above it.
#[derive(Debug, Clone, PartialEq)]
pub struct TextboxWithTitle {
    pub title: String,
    pub text: String,
    pub title_font_size: f64,
    pub heading_fill: Color,
    pub body_fill: Color,
}

impl TextboxWithTitle {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            title_font_size: 0.3,
            heading_fill: Color::rgb(255, 0, 0),
            body_fill: Color::rgb(255, 220, 220),
        }
    }

    pub fn with_title_font_size(mut self, size: f64) -> Self {
        self.title_font_size = size;
        self
    }

    fn heading_height(&self) -> f64 {
        self.title_font_size + HEADING_PADDING
    }
}

impl Drawable for TextboxWithTitle {
    fn check(&self, bounds: Bounds) -> Result<(), RenderError> {
        let heading_height = self.heading_height();
        if heading_height >= bounds.height {
            return Err(RenderError::Drawable {
                reason: format!(
                    "heading of {heading_height} does not fit in a region {} high",
                    bounds.height
                ),
            });
        }
        Ok(())
    }

    fn attach(&self, canvas: &mut dyn Canvas, bounds: Bounds) -> Result<(), RenderError> {
        self.check(bounds)?;
        let heading_height = self.heading_height();

        let heading = canvas.add_textbox(bounds.left, bounds.top, bounds.width, heading_height)?;
        heading.word_wrap = true;
        heading.text = self.title.clone();
        heading.fill = Some(self.heading_fill);
        heading.font.color = Some(Color::WHITE);
        heading.font.size = Some(self.title_font_size);
        heading.font.bold = true;

        let body = canvas.add_textbox(
            bounds.left,
            bounds.top + heading_height,
            bounds.width,
            bounds.height - heading_height,
        )?;
        body.word_wrap = true;
        body.text = self.text.clone();
        body.fill = Some(self.body_fill);

        Ok(())
    }
}
