//! SVG export.
//!
//! Every slide is drawn into one SVG document, stacked top to bottom.
//! Physical units are converted to pixels at the canvas DPI. Text is emitted
//! as a single run per textbox or cell; no line breaking is performed.

use std::fs;
use std::path::Path;

use glam::DVec2;
use mosaik_core::{
    Bounds, Canvas, Color, DeckWriter, ExportError, HorizontalAlignment, PictureHandle,
    RenderError, Shape, SlideShapes, TableHandle, TextHandle,
};

const DEFAULT_DPI: f64 = 96.0;
/// Font size for textboxes without one, in physical units.
const DEFAULT_FONT_SIZE: f64 = 0.2;
/// Gap between stacked slides, in physical units.
const SLIDE_GAP: f64 = 0.25;

/// A canvas that writes the deck as SVG.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    dpi: f64,
    slides: Vec<SlideShapes>,
}

impl Default for SvgCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgCanvas {
    pub fn new() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            slides: Vec::new(),
        }
    }

    /// Pixels per physical unit, used for image sizes and output coordinates.
    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn slides(&self) -> &[SlideShapes] {
        &self.slides
    }

    /// Render every slide into one SVG document.
    pub fn to_svg(&self) -> Result<String, ExportError> {
        if self.slides.is_empty() {
            return Err(ExportError::NoSlides);
        }

        let width = self.slides.iter().map(|s| s.width).fold(0.0, f64::max);
        let height = self.slides.iter().map(|s| s.height).sum::<f64>()
            + SLIDE_GAP * (self.slides.len() - 1) as f64;

        let mut svg = String::new();
        svg.push_str(&format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
"#,
            w = px(width, self.dpi),
            h = px(height, self.dpi),
        ));

        let mut builder = SvgBuilder {
            svg: &mut svg,
            dpi: self.dpi,
            indent: 1,
        };

        let mut offset = 0.0;
        for slide in &self.slides {
            builder.export_slide(slide, offset);
            offset += slide.height + SLIDE_GAP;
        }

        svg.push_str("</svg>\n");
        Ok(svg)
    }
}

impl Canvas for SvgCanvas {
    fn add_slide(&mut self, width: f64, height: f64) {
        self.slides.push(SlideShapes::new(width, height));
    }

    fn current_slide(&mut self) -> Result<&mut SlideShapes, RenderError> {
        self.slides.last_mut().ok_or(RenderError::NoActiveSlide)
    }

    fn native_picture_size(&self, path: &Path) -> Result<DVec2, RenderError> {
        let (width, height) =
            image::image_dimensions(path).map_err(|e| RenderError::ImageUnavailable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Ok(DVec2::new(f64::from(width), f64::from(height)) / self.dpi)
    }
}

impl DeckWriter for SvgCanvas {
    fn save(&self, path: &Path) -> Result<(), ExportError> {
        fs::write(path, self.to_svg()?)?;
        Ok(())
    }
}

struct SvgBuilder<'a> {
    svg: &'a mut String,
    dpi: f64,
    indent: usize,
}

impl<'a> SvgBuilder<'a> {
    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.svg.push_str("  ");
        }
    }

    fn line(&mut self, content: &str) {
        self.write_indent();
        self.svg.push_str(content);
        self.svg.push('\n');
    }

    fn px(&self, value: f64) -> String {
        px(value, self.dpi)
    }

    fn export_slide(&mut self, slide: &SlideShapes, offset: f64) {
        let open = format!("<g transform=\"translate(0 {})\">", self.px(offset));
        self.line(&open);
        self.indent += 1;

        let background = format!(
            "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"#ffffff\" stroke=\"#cccccc\" />",
            self.px(slide.width),
            self.px(slide.height),
        );
        self.line(&background);

        for shape in slide.shapes() {
            match shape {
                Shape::Picture(picture) => self.export_picture(picture),
                Shape::Text(text) => self.export_text(text),
                Shape::Table(table) => self.export_table(table),
            }
        }

        self.indent -= 1;
        self.line("</g>");
    }

    fn export_picture(&mut self, picture: &PictureHandle) {
        let b = picture.bounds;
        let crop = picture.crop;
        // The image is drawn into a unit square; the viewBox selects the
        // uncropped part of it and stretches that over the picture bounds.
        let element = format!(
            "<svg x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" viewBox=\"{} {} {} {}\" preserveAspectRatio=\"none\"><image xlink:href=\"{}\" width=\"1\" height=\"1\" preserveAspectRatio=\"none\" /></svg>",
            self.px(b.left),
            self.px(b.top),
            self.px(b.width),
            self.px(b.height),
            crop.left,
            crop.top,
            1.0 - crop.left - crop.right,
            1.0 - crop.top - crop.bottom,
            escape_xml(&picture.path.to_string_lossy()),
        );
        self.line(&element);
    }

    fn export_text(&mut self, text: &TextHandle) {
        if let Some(fill) = text.fill {
            self.export_box(&text.bounds, Some(fill), None);
        }

        let font_size = text.font.size.unwrap_or(DEFAULT_FONT_SIZE);
        let mut attrs = Vec::new();
        let (x, text_anchor) = anchor(&text.bounds, text.alignment);
        attrs.push(format!("x=\"{}\"", self.px(x)));
        attrs.push(format!("y=\"{}\"", self.px(text.bounds.top + font_size)));
        attrs.push(format!("font-size=\"{}\"", self.px(font_size)));
        attrs.push(format!("text-anchor=\"{text_anchor}\""));
        if let Some(name) = &text.font.name {
            attrs.push(format!("font-family=\"{}\"", escape_xml(name)));
        }
        if text.font.bold {
            attrs.push("font-weight=\"bold\"".to_string());
        }
        attrs.push(format!("fill=\"{}\"", text.font.color.unwrap_or(Color::BLACK).to_hex()));

        let element = format!("<text {}>{}</text>", attrs.join(" "), escape_xml(&text.text));
        self.line(&element);
    }

    fn export_table(&mut self, table: &TableHandle) {
        if table.rows == 0 || table.cols == 0 {
            return;
        }
        let cell_width = table.bounds.width / table.cols as f64;
        let cell_height = table.bounds.height / table.rows as f64;
        let font_size = DEFAULT_FONT_SIZE.min(cell_height * 0.6);

        self.line("<g>");
        self.indent += 1;
        for row in 0..table.rows {
            for col in 0..table.cols {
                let cell = Bounds::new(
                    table.bounds.left + col as f64 * cell_width,
                    table.bounds.top + row as f64 * cell_height,
                    cell_width,
                    cell_height,
                );
                let fill = if row == 0 { Color::rgb(68, 114, 196) } else { Color::WHITE };
                self.export_box(&cell, Some(fill), Some(Color::BLACK));

                let text = table.cell(row, col).map(|c| c.text.as_str()).unwrap_or_default();
                if !text.is_empty() {
                    let color = if row == 0 { Color::WHITE } else { Color::BLACK };
                    let element = format!(
                        "<text x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
                        self.px(cell.left + font_size * 0.5),
                        self.px(cell.top + (cell.height + font_size) / 2.0),
                        self.px(font_size),
                        color.to_hex(),
                        escape_xml(text),
                    );
                    self.line(&element);
                }
            }
        }
        self.indent -= 1;
        self.line("</g>");
    }

    fn export_box(&mut self, bounds: &Bounds, fill: Option<Color>, stroke: Option<Color>) {
        let mut attrs = vec![
            format!("x=\"{}\"", self.px(bounds.left)),
            format!("y=\"{}\"", self.px(bounds.top)),
            format!("width=\"{}\"", self.px(bounds.width)),
            format!("height=\"{}\"", self.px(bounds.height)),
        ];
        match fill {
            Some(color) => attrs.push(format!("fill=\"{}\"", color.to_hex())),
            None => attrs.push("fill=\"none\"".to_string()),
        }
        if let Some(color) = stroke {
            attrs.push(format!("stroke=\"{}\"", color.to_hex()));
        }
        let element = format!("<rect {} />", attrs.join(" "));
        self.line(&element);
    }
}

// Helper functions

fn px(value: f64, dpi: f64) -> String {
    let scaled = (value * dpi * 100.0).round() / 100.0;
    format!("{scaled}")
}

fn anchor(bounds: &Bounds, alignment: HorizontalAlignment) -> (f64, &'static str) {
    match alignment {
        HorizontalAlignment::Left | HorizontalAlignment::Justify => (bounds.left, "start"),
        HorizontalAlignment::Center => (bounds.left + bounds.width / 2.0, "middle"),
        HorizontalAlignment::Right => (bounds.right(), "end"),
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
