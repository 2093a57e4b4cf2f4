//! Conversions between linear offsets and grid coordinates.

/// Convert a linear offset into `(x, y)` for rows of `width` cells.
///
/// Panics when `width == 0`; partitioners never produce such a call for a
/// valid grid.
#[inline]
pub fn offset_to_index(offset: usize, width: usize) -> (usize, usize) {
    assert!(width > 0, "offset_to_index: width must be positive");
    let x = offset % width;
    let y = (offset - x) / width;
    (x, y)
}

/// Inverse of [`offset_to_index`].
#[inline]
pub fn index_to_offset(x: usize, y: usize, width: usize) -> usize {
    y * width + x
}

#[cfg(test)]
mod tests {
    use super::{index_to_offset, offset_to_index};
    use proptest::prelude::*;

    #[test]
    fn maps_row_major_offsets() {
        assert_eq!(offset_to_index(0, 5), (0, 0));
        assert_eq!(offset_to_index(4, 5), (4, 0));
        assert_eq!(offset_to_index(5, 5), (0, 1));
        assert_eq!(offset_to_index(17, 5), (2, 3));
        assert_eq!(offset_to_index(9, 1), (0, 9));
    }

    #[test]
    #[should_panic(expected = "width must be positive")]
    fn rejects_zero_width() {
        offset_to_index(3, 0);
    }

    proptest! {
        #[test]
        fn offset_round_trips(offset in 0usize..1_000_000, width in 1usize..4096) {
            let (x, y) = offset_to_index(offset, width);
            prop_assert!(x < width);
            prop_assert_eq!(x + y * width, offset);
            prop_assert_eq!(index_to_offset(x, y, width), offset);
        }
    }
}
