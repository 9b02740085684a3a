//! Painting masks onto canvases as module squares.

use crate::color::Color;
use crate::layer::Layer;
use crate::matrix::Mask;

/// Paints every marked module of `mask` onto `layer` in `color`.
///
/// Module `(row, col)` covers pixels `[col*m, col*m+m-1] x [row*m, row*m+m-1]`
/// where `m` is `module_size`. When `solid` is false the square is inset by
/// one pixel on every side, leaving a gap between neighbouring modules; with
/// `module_size` below 3 that leaves nothing to paint, which
/// [`RenderOptions::validate_style`](crate::config::RenderOptions::validate_style)
/// rejects before a render starts.
pub fn apply_mask(layer: &mut Layer, mask: &Mask, module_size: u32, color: Color, solid: bool) {
    let m = i64::from(module_size);
    let inset = if solid { 0 } else { 1 };
    for (row, col) in mask.iter_set() {
        let x = col as i64 * m;
        let y = row as i64 * m;
        layer.fill_rect(x + inset, y + inset, x + m - 1 - inset, y + m - 1 - inset, color);
    }
}
