//! Picture sizing policies.
//!
//! Pictures are placed in two steps. First the canvas is asked for a
//! picture constrained in one dimension (see [`fit_request`]), which it
//! renders at its native aspect ratio. The rendered size is then adjusted for
//! the region's size mode by [`adjust_picture`].

use glam::DVec2;
use mosaik_core::{Crop, PictureSizeMode};

/// Dimensions to pass to the canvas. `None` leaves a dimension free.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeRequest {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// Final picture size and crop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PictureAdjustment {
    pub size: DVec2,
    pub crop: Crop,
}

/// Choose which dimension to constrain for a target box.
///
/// A target at least as wide as it is tall gets an explicit width and a free
/// height; a taller target gets an explicit height and a free width.
pub fn fit_request(target: DVec2) -> SizeRequest {
    if target.x >= target.y {
        SizeRequest {
            width: Some(target.x),
            height: None,
        }
    } else {
        SizeRequest {
            width: None,
            height: Some(target.y),
        }
    }
}

/// Adjust a rendered picture for its size mode.
pub fn adjust_picture(mode: PictureSizeMode, rendered: DVec2, target: DVec2) -> PictureAdjustment {
    match mode {
        PictureSizeMode::Fit => PictureAdjustment {
            size: rendered,
            crop: Crop::default(),
        },
        PictureSizeMode::Stretch => PictureAdjustment {
            size: target,
            crop: Crop::default(),
        },
        PictureSizeMode::Cover => cover(rendered, target),
    }
}

/// Scale the picture uniformly until it covers the target in both axes,
/// then crop the overflow equally from opposite edges.
fn cover(rendered: DVec2, target: DVec2) -> PictureAdjustment {
    let height_ratio = target.y / rendered.y;
    let width_ratio = target.x / rendered.x;

    let covering = if height_ratio >= width_ratio {
        DVec2::new(rendered.x * height_ratio, target.y)
    } else {
        DVec2::new(target.x, rendered.y * width_ratio)
    };

    let dw = overflow(covering.x, target.x);
    let dh = overflow(covering.y, target.y);

    PictureAdjustment {
        size: target,
        crop: Crop::symmetric(dw, dh),
    }
}

/// Fraction of `covering` that lies outside `target`. Zero when the picture
/// does not overflow or the ratio is undefined.
fn overflow(covering: f64, target: f64) -> f64 {
    let fraction = (covering - target) / covering;
    if fraction.is_finite() && fraction > 0.0 {
        fraction
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    /// Size a canvas would render for a request, given the native size.
    fn render(request: SizeRequest, native: DVec2) -> DVec2 {
        match (request.width, request.height) {
            (Some(w), None) => DVec2::new(w, w * native.y / native.x),
            (None, Some(h)) => DVec2::new(h * native.x / native.y, h),
            _ => unreachable!("fit requests constrain exactly one dimension"),
        }
    }

    #[test]
    fn test_fit_square_frees_height() {
        let request = fit_request(DVec2::new(5.0, 5.0));
        assert_eq!(request.width, Some(5.0));
        assert_eq!(request.height, None);
    }

    #[test]
    fn test_fit_tall_frees_width() {
        let request = fit_request(DVec2::new(2.0, 5.0));
        assert_eq!(request.width, None);
        assert_eq!(request.height, Some(5.0));
    }

    #[test]
    fn test_fit_keeps_rendered_size() {
        let rendered = DVec2::new(4.0, 1.5);
        let adjustment = adjust_picture(PictureSizeMode::Fit, rendered, DVec2::new(4.0, 3.0));
        assert_eq!(adjustment.size, rendered);
        assert!(adjustment.crop.is_none());
    }

    #[test]
    fn test_stretch_forces_target() {
        let adjustment =
            adjust_picture(PictureSizeMode::Stretch, DVec2::new(4.0, 1.5), DVec2::new(4.0, 3.0));
        assert_eq!(adjustment.size, DVec2::new(4.0, 3.0));
        assert!(adjustment.crop.is_none());
    }

    #[test]
    fn test_cover_wide_picture_crops_sides() {
        let target = DVec2::new(4.0, 3.0);
        let rendered = render(fit_request(target), DVec2::new(8.0, 3.0));
        let adjustment = adjust_picture(PictureSizeMode::Cover, rendered, target);

        assert_eq!(adjustment.size, target);
        let horizontal = adjustment.crop.left + adjustment.crop.right;
        let vertical = adjustment.crop.top + adjustment.crop.bottom;
        assert!((0.0..1.0).contains(&horizontal));
        assert!((0.0..1.0).contains(&vertical));
        assert!(approx(adjustment.crop.left, 0.25));
        assert!(approx(adjustment.crop.right, 0.25));
        assert!(approx(vertical, 0.0));
    }

    #[test]
    fn test_cover_tall_picture_crops_top_and_bottom() {
        let target = DVec2::new(4.0, 3.0);
        let rendered = render(fit_request(target), DVec2::new(1.0, 2.0));
        let adjustment = adjust_picture(PictureSizeMode::Cover, rendered, target);

        assert_eq!(adjustment.size, target);
        assert!(approx(adjustment.crop.left, 0.0));
        assert!(approx(adjustment.crop.top, 0.3125));
        assert!(approx(adjustment.crop.bottom, 0.3125));
    }

    #[test]
    fn test_cover_matching_aspect_has_no_crop() {
        let target = DVec2::new(4.0, 3.0);
        let rendered = render(fit_request(target), DVec2::new(400.0, 300.0));
        let adjustment = adjust_picture(PictureSizeMode::Cover, rendered, target);
        assert!(adjustment.crop.is_none());
    }

    #[test]
    fn test_cover_in_tall_target() {
        let target = DVec2::new(2.0, 6.0);
        let rendered = render(fit_request(target), DVec2::new(1.0, 1.0));
        let adjustment = adjust_picture(PictureSizeMode::Cover, rendered, target);

        assert!(approx(adjustment.crop.left + adjustment.crop.right, 4.0 / 6.0));
        assert!(approx(adjustment.crop.top, 0.0));
    }

    #[test]
    fn test_overflow_undefined_is_zero() {
        assert_eq!(overflow(0.0, 0.0), 0.0);
        assert_eq!(overflow(2.0, 3.0), 0.0);
    }
}
