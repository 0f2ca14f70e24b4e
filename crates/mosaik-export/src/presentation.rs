//! Deck rendering.
//!
//! A [`Presentation`] owns its slides and draws them onto any [`Canvas`].
//! Every slide layout is computed and validated, and every picture and
//! custom object is checked against the canvas, before the first canvas
//! call. A failed render leaves the canvas untouched.

use std::path::Path;

use glam::DVec2;
use mosaik_core::{
    Bounds, Canvas, Content, DeckConfig, DeckWriter, HorizontalAlignment, MosaikError, Picture,
    TableSizeMode,
};
use mosaik_layout::{
    adjust_picture, compute_layout, fit_request, Placement, Slide, SlideLayout, TitleBlock,
};

/// An ordered deck of slides on a fixed page size.
#[derive(Debug, Clone)]
pub struct Presentation {
    width: f64,
    height: f64,
    config: DeckConfig,
    slides: Vec<Slide>,
}

impl Presentation {
    /// Create an empty deck. Page size is in physical units.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            config: DeckConfig::default(),
            slides: Vec::new(),
        }
    }

    /// Replace the spacing configuration.
    pub fn with_config(mut self, config: DeckConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn add_slide(&mut self, slide: Slide) -> &mut Self {
        self.slides.push(slide);
        self
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Compute the layout of every slide without drawing anything.
    pub fn compile(&self) -> Result<Vec<SlideLayout<'_>>, MosaikError> {
        self.slides
            .iter()
            .map(|slide| compute_layout(slide, self.width, self.height, &self.config))
            .collect()
    }

    /// Draw every slide onto the canvas.
    pub fn render(&self, canvas: &mut dyn Canvas) -> Result<(), MosaikError> {
        let layouts = self.compile()?;
        preflight(canvas, &layouts)?;

        for (index, layout) in layouts.iter().enumerate() {
            tracing::debug!(slide = index, regions = layout.placements.len(), "rendering slide");
            canvas.add_slide(layout.width, layout.height);

            if let Some(title) = &layout.title {
                self.draw_title(canvas, title)?;
            }
            for placement in &layout.placements {
                draw_placement(canvas, placement, &self.config)?;
            }
        }

        Ok(())
    }

    /// Render onto a writer canvas and let it write the result to `path`.
    pub fn save<W: DeckWriter>(
        &self,
        writer: &mut W,
        path: impl AsRef<Path>,
    ) -> Result<(), MosaikError> {
        let path = path.as_ref();
        self.render(writer)?;
        writer.save(path)?;
        tracing::info!(path = %path.display(), slides = self.slides.len(), "saved presentation");
        Ok(())
    }

    fn draw_title(
        &self,
        canvas: &mut dyn Canvas,
        title: &TitleBlock<'_>,
    ) -> Result<(), MosaikError> {
        let bounds = title.bounds;
        let textbox = canvas.add_textbox(bounds.left, bounds.top, bounds.width, bounds.height)?;
        textbox.text = title.text.to_string();
        textbox.font.name = Some(self.config.slide_title_font_name.clone());
        textbox.font.size = Some(self.config.slide_title_font_size);
        textbox.font.bold = true;
        Ok(())
    }
}

/// Check everything only the canvas can judge, without drawing.
fn preflight(canvas: &dyn Canvas, layouts: &[SlideLayout<'_>]) -> Result<(), MosaikError> {
    for placement in layouts.iter().flat_map(|layout| &layout.placements) {
        match placement.content {
            Content::Picture(picture) => {
                canvas.usable_picture_size(&picture.path)?;
            }
            Content::Custom(drawable) => drawable.check(placement.bounds)?,
            Content::Empty | Content::Text { .. } | Content::Table { .. } => {}
        }
    }
    Ok(())
}

fn draw_placement(
    canvas: &mut dyn Canvas,
    placement: &Placement<'_>,
    config: &DeckConfig,
) -> Result<(), MosaikError> {
    let bounds = placement.bounds;

    match placement.content {
        Content::Empty => {}
        Content::Picture(picture) => draw_picture(canvas, picture, bounds)?,
        Content::Text { value, alignment } => draw_text(canvas, value, *alignment, bounds)?,
        Content::Table { rows, size_mode } => draw_table(canvas, rows, *size_mode, bounds, config)?,
        Content::Custom(drawable) => drawable.attach(canvas, bounds)?,
    }

    Ok(())
}

fn draw_picture(
    canvas: &mut dyn Canvas,
    picture: &Picture,
    bounds: Bounds,
) -> Result<(), MosaikError> {
    let target = DVec2::new(
        picture.width.unwrap_or(bounds.width),
        picture.height.unwrap_or(bounds.height),
    );
    let request = fit_request(target);

    let handle = canvas.add_picture(
        &picture.path,
        bounds.left,
        bounds.top,
        request.width,
        request.height,
    )?;
    let adjustment = adjust_picture(picture.size_mode, handle.size(), target);

    if !adjustment.crop.is_none() {
        tracing::debug!(
            path = %picture.path.display(),
            crop_left = adjustment.crop.left,
            crop_top = adjustment.crop.top,
            "cropping picture"
        );
    }

    handle.bounds.width = adjustment.size.x;
    handle.bounds.height = adjustment.size.y;
    handle.crop = adjustment.crop;
    Ok(())
}

fn draw_text(
    canvas: &mut dyn Canvas,
    value: &str,
    alignment: HorizontalAlignment,
    bounds: Bounds,
) -> Result<(), MosaikError> {
    let textbox = canvas.add_textbox(bounds.left, bounds.top, bounds.width, bounds.height)?;
    textbox.word_wrap = true;
    textbox.alignment = alignment;
    textbox.text = value.to_string();
    Ok(())
}

fn draw_table(
    canvas: &mut dyn Canvas,
    rows: &[Vec<String>],
    size_mode: TableSizeMode,
    bounds: Bounds,
    config: &DeckConfig,
) -> Result<(), MosaikError> {
    let n_rows = rows.len();
    let n_cols = rows.first().map_or(0, Vec::len);

    let height = match size_mode {
        TableSizeMode::Stretch => bounds.height,
        TableSizeMode::Auto => (n_rows as f64 * config.table_row_height).min(bounds.height),
    };

    let table = canvas.add_table(n_rows, n_cols, bounds.left, bounds.top, bounds.width, height)?;
    for (r, row) in rows.iter().enumerate() {
        for (c, text) in row.iter().enumerate() {
            if let Some(cell) = table.cell_mut(r, c) {
                cell.text = text.clone();
            }
        }
    }
    Ok(())
}
