//! Layout computation for mosaik slides.
//!
//! This crate turns an ASCII mosaic into named regions and computes the
//! physical placement of every region's content.
//!
//! # Architecture
//!
//! 1. **Mosaic parsing**: each distinct character becomes the bounding box of its occurrences
//! 2. **Validation**: regions must be non-degenerate and must not overlap
//! 3. **Geometry**: grid cells are scaled to the page, then padding, title and margins apply
//! 4. **Picture sizing**: fit, stretch and cover policies with symmetric cropping
//!
//! # Example
//!
//! ```ignore
//! use mosaik_layout::{compute_layout, Slide};
//! use mosaik_core::{DeckConfig, PictureSizeMode};
//!
//! let mut slide = Slide::with_title("ab\nac", "An awesome slide")?;
//! slide.region_mut('a')?.set_picture("tabby.jpg", PictureSizeMode::Stretch);
//! slide.region_mut('c')?.set_text("Lorem ipsum");
//!
//! let layout = compute_layout(&slide, 10.0, 7.5, &DeckConfig::default())?;
//! for placement in &layout.placements {
//!     println!("{}: {:?}", placement.id, placement.bounds);
//! }
//! ```

mod compute;
mod geometry;
mod mosaic;
mod picture;
mod slide;
mod validate;

pub use compute::{compute_layout, Placement, SlideLayout, TitleBlock};
pub use geometry::{region_bounds, title_bounds};
pub use mosaic::{parse_mosaic, Mosaic};
pub use picture::{adjust_picture, fit_request, PictureAdjustment, SizeRequest};
pub use slide::{Region, Slide};
pub use validate::validate_bounds;
