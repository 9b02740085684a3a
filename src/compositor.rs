//! Assembly of the final image from the symbol and optional text.

use log::debug;

use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::finder::finder_mask;
use crate::hide::hide_mask;
use crate::layer::Layer;
use crate::matrix::{Mask, ModuleMatrix};
use crate::render::apply_mask;
use crate::text::TextBox;

/// Smallest symbol the finder squares fit in without overlapping.
pub const MIN_SYMBOL_SIZE: usize = 9;

/// Renders `matrix` styled by `config` onto a fresh canvas.
///
/// The symbol layer is painted in this order: background, dark modules (in
/// the configured solid or gapped style), hidden modules in the background
/// color, then the finder squares, which therefore always show. The symbol
/// and any text layer are centered on a canvas that adds `border` modules on
/// every side, grown if the text is wider or taller.
///
/// Intermediate layers are dropped on every exit path; only the finished
/// canvas is returned.
pub fn compose(config: &RenderConfig, matrix: &ModuleMatrix) -> Result<Layer> {
    let options = &config.options;
    options.validate_style(config.solid)?;
    let n = matrix.size();
    if n < MIN_SYMBOL_SIZE {
        return Err(Error::validation(format!(
            "symbol of {n} modules is smaller than {MIN_SYMBOL_SIZE}"
        )));
    }
    let m = options.module_size;
    let limit = options.max_canvas_side;

    let mut hidden = match &config.hide_mask {
        Some(mask) if mask.size() != n => {
            return Err(Error::validation(format!(
                "hide mask has {} modules per side, symbol has {n}",
                mask.size()
            )));
        }
        Some(mask) => Some(mask.clone()),
        None => None,
    };

    let text_layer = match &config.text {
        Some(request) => {
            let tb = TextBox::measure(request.font.as_ref(), request.point_size, &request.text)?;
            debug!("text {:?} measures {:?}", request.text, tb);
            let mut layer = Layer::new(tb.width, tb.height, config.background, limit)?;
            request.font.draw_text(
                &mut layer,
                request.point_size,
                tb.left as i32,
                tb.top as i32,
                config.foreground,
                &request.text,
            )?;
            let behind_text = hide_mask(n, m, layer.width(), layer.height());
            match hidden.as_mut() {
                Some(mask) => mask.union(&behind_text)?,
                None => hidden = Some(behind_text),
            }
            Some(layer)
        }
        None => None,
    };

    let qr_side = scaled(n as u64, m)?;
    debug!("symbol {n}x{n} modules, {qr_side}px at {m}px per module");
    let mut qr_layer = Layer::new(qr_side, qr_side, config.background, limit)?;
    let content = Mask::from(config.rotation.apply(matrix));
    apply_mask(&mut qr_layer, &content, m, config.foreground, config.solid);
    if let Some(mask) = &hidden {
        apply_mask(&mut qr_layer, mask, m, config.background, true);
    }
    let finders = config.rotation.apply_mask(&finder_mask(n));
    apply_mask(&mut qr_layer, &finders, m, config.foreground, true);

    let framed = u64::from(qr_side) + 2 * u64::from(options.border) * u64::from(m);
    let framed = u32::try_from(framed)
        .map_err(|_| Error::RenderFailure(format!("canvas side {framed}px is too large")))?;
    let (text_w, text_h) = text_layer.as_ref().map_or((0, 0), Layer::dimensions);
    let (width, height) = (framed.max(text_w), framed.max(text_h));
    debug!("base canvas {width}x{height}, rotation {}", config.rotation);

    let mut base = Layer::new(width, height, config.background, limit)?;
    base.composite_centered(&qr_layer);
    if let Some(text) = &text_layer {
        base.composite_centered(text);
    }
    Ok(base)
}

fn scaled(modules: u64, module_size: u32) -> Result<u32> {
    let px = modules * u64::from(module_size);
    u32::try_from(px).map_err(|_| Error::RenderFailure(format!("layer side {px}px is too large")))
}
