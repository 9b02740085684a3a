//! Position and alignment square synthesis.

use crate::matrix::Mask;

/// Side of a position square, in modules.
pub const POSITION_SIZE: usize = 7;
/// Side of the alignment square, in modules.
pub const ALIGNMENT_SIZE: usize = 5;

/// Builds a mask of side `size` marking the dark cells of the three position
/// squares and the bottom-right alignment square.
///
/// Position squares sit at the top-left, top-right and bottom-left corners.
/// The alignment square's top-left cell is `(size - 9, size - 9)`. The mask
/// depends only on `size`, never on symbol content.
///
/// `size` must be at least 9; smaller symbols are not real QR codes and must
/// be rejected before this point.
pub fn finder_mask(size: usize) -> Mask {
    debug_assert!(size >= 9, "symbol of {size} modules is too small for finder squares");
    let mut mask = Mask::new(size);
    let far = size.saturating_sub(POSITION_SIZE);
    for (row, col) in [(0, 0), (0, far), (far, 0)] {
        stamp(&mut mask, row, col, POSITION_SIZE, position_cell);
    }
    let align = size.saturating_sub(9);
    stamp(&mut mask, align, align, ALIGNMENT_SIZE, alignment_cell);
    mask
}

fn stamp(mask: &mut Mask, top: usize, left: usize, side: usize, cell: fn(usize) -> bool) {
    let center = side / 2;
    for dr in 0..side {
        for dc in 0..side {
            let ring = dr.abs_diff(center).max(dc.abs_diff(center));
            if cell(ring) {
                mask.set(top + dr, left + dc, true);
            }
        }
    }
}

// Rings counted outward from the center cell.
fn position_cell(ring: usize) -> bool {
    ring != 2
}

fn alignment_cell(ring: usize) -> bool {
    ring != 1
}
