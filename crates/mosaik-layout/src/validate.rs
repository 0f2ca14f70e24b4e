//! Region bounds validation.

use mosaik_core::{GridRect, LayoutError};

/// Reject degenerate regions and any pair of overlapping regions.
///
/// Overlap uses half-open intervals, so regions sharing only an edge are
/// accepted.
pub fn validate_bounds<'a, I>(regions: I) -> Result<(), LayoutError>
where
    I: IntoIterator<Item = (char, &'a GridRect)>,
{
    let regions: Vec<(char, &GridRect)> = regions.into_iter().collect();

    for &(id, rect) in &regions {
        if rect.width < 1 || rect.height < 1 {
            return Err(LayoutError::DegenerateRegion {
                id,
                width: rect.width,
                height: rect.height,
            });
        }
    }

    for (i, &(first, a)) in regions.iter().enumerate() {
        for &(second, b) in &regions[i + 1..] {
            if a.overlaps(b) {
                return Err(LayoutError::OverlappingRegions { first, second });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagonal_overlap_fails() {
        let a = GridRect::new(0, 0, 2, 2);
        let b = GridRect::new(1, 1, 2, 2);
        let err = validate_bounds([('a', &a), ('b', &b)]).unwrap_err();
        match err {
            LayoutError::OverlappingRegions { first, second } => {
                assert_eq!((first, second), ('a', 'b'));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_overlap_detected_in_either_order() {
        let a = GridRect::new(1, 0, 2, 2);
        let b = GridRect::new(0, 1, 2, 2);
        assert!(validate_bounds([('a', &a), ('b', &b)]).is_err());
        assert!(validate_bounds([('b', &b), ('a', &a)]).is_err());
    }

    #[test]
    fn test_same_origin_overlap_fails() {
        let a = GridRect::new(0, 0, 1, 2);
        let b = GridRect::new(0, 0, 2, 1);
        assert!(validate_bounds([('a', &a), ('b', &b)]).is_err());
    }

    #[test]
    fn test_edge_adjacent_passes() {
        let a = GridRect::new(0, 0, 1, 1);
        let b = GridRect::new(1, 0, 1, 1);
        assert!(validate_bounds([('a', &a), ('b', &b)]).is_ok());
    }

    #[test]
    fn test_degenerate_region_fails() {
        let a = GridRect::new(0, 0, 0, 1);
        let err = validate_bounds([('a', &a)]).unwrap_err();
        assert!(matches!(err, LayoutError::DegenerateRegion { id: 'a', width: 0, height: 1 }));
    }

    #[test]
    fn test_error_names_both_regions() {
        let a = GridRect::new(0, 0, 3, 3);
        let b = GridRect::new(1, 1, 1, 1);
        let message = validate_bounds([('x', &a), ('y', &b)]).unwrap_err().to_string();
        assert!(message.contains("'x'"));
        assert!(message.contains("'y'"));
    }
}
