//! Centered blank-out masks for overlays.

use crate::matrix::Mask;

/// Builds a mask of side `size` marking a centered block of modules just large
/// enough to sit behind a `width` x `height` pixel overlay.
///
/// The block is one module wider and taller than the overlay strictly needs,
/// so partial modules at its edges are covered too. It starts half its own
/// extent (rounded up) before the center module and is clipped to the grid.
///
/// # Example
///
/// ```rust
/// use qrdecor::hide_mask;
///
/// let mask = hide_mask(25, 10, 95, 45);
/// assert!(mask.get(9, 6) && mask.get(14, 16));
/// assert!(!mask.get(15, 16) && !mask.get(14, 17));
/// ```
pub fn hide_mask(size: usize, module_size: u32, width: u32, height: u32) -> Mask {
    let mut mask = Mask::new(size);
    if module_size == 0 {
        return mask;
    }
    let cols = width.div_ceil(module_size) as usize + 1;
    let rows = height.div_ceil(module_size) as usize + 1;
    let center = size / 2;
    let first_row = center.saturating_sub(rows.div_ceil(2));
    let first_col = center.saturating_sub(cols.div_ceil(2));

    for row in first_row..(first_row + rows).min(size) {
        for col in first_col..(first_col + cols).min(size) {
            mask.set(row, col, true);
        }
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(mask: &Mask) -> (usize, usize, usize, usize) {
        let cells: Vec<_> = mask.iter_set().collect();
        let rows = cells.iter().map(|c| c.0);
        let cols = cells.iter().map(|c| c.1);
        (
            rows.clone().min().unwrap(),
            rows.max().unwrap() + 1,
            cols.clone().min().unwrap(),
            cols.max().unwrap() + 1,
        )
    }

    #[test]
    fn covers_text_block_around_center() {
        let mask = hide_mask(25, 10, 95, 45);
        assert_eq!(bounds(&mask), (9, 15, 6, 17));
        assert_eq!(mask.count(), 6 * 11);
    }

    #[test]
    fn exact_multiples_still_get_an_extra_module() {
        let mask = hide_mask(21, 10, 40, 20);
        // 5 columns by 3 rows, centered on module 10
        assert_eq!(bounds(&mask), (8, 11, 7, 12));
    }

    #[test]
    fn oversized_overlay_is_clipped_to_grid() {
        let mask = hide_mask(21, 10, 1000, 30);
        let (_, _, first_col, end_col) = bounds(&mask);
        assert_eq!((first_col, end_col), (0, 21));
        assert_eq!(mask.count(), 21 * 4);
    }

    #[test]
    fn zero_module_size_marks_nothing() {
        assert_eq!(hide_mask(21, 0, 10, 10).count(), 0);
    }
}
