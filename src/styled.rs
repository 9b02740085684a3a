//! The fluent builder that configures and renders a styled symbol.

use std::path::PathBuf;
use std::sync::Arc;

use log::{debug, warn};

use crate::color::Color;
use crate::compositor::compose;
use crate::config::{RenderConfig, RenderOptions, TextRequest};
use crate::encode::{encode, EcLevel};
use crate::error::{Error, Result};
use crate::helper::save_png;
use crate::layer::Layer;
use crate::matrix::{Mask, ModuleMatrix};
use crate::rotate::Rotation;
use crate::text::FontRasterizer;

/// A QR code together with the styling it is rendered with.
///
/// Setters validate eagerly and chain. A setter that fails leaves the
/// previous configuration in place.
///
/// # Example
///
/// ```rust
/// use qrdecor::{EcLevel, StyledQr};
///
/// let mut qr = StyledQr::new("TEST", EcLevel::L).unwrap();
/// qr.set_foreground(20, 40, 160, 0)
///     .unwrap()
///     .set_rotation(90)
///     .unwrap()
///     .set_solid(false);
/// let image = qr.render().unwrap();
/// assert_eq!(image.width(), 21 * 10 + 4 * 10 * 2);
/// ```
#[derive(Debug, Clone)]
pub struct StyledQr {
    matrix: ModuleMatrix,
    config: RenderConfig,
}

impl StyledQr {
    /// Encodes `content` at `level` with default styling.
    pub fn new(content: &str, level: EcLevel) -> Result<Self> {
        StyledQr::with_options(content, level, RenderOptions::default())
    }

    pub fn with_options(content: &str, level: EcLevel, options: RenderOptions) -> Result<Self> {
        options.validate()?;
        let matrix = encode(content, level)?;
        debug!("encoded {} bytes at level {level} into {} modules", content.len(), matrix.size());
        Ok(StyledQr {
            matrix,
            config: RenderConfig {
                options,
                ..RenderConfig::default()
            },
        })
    }

    /// Wraps an already encoded symbol.
    pub fn from_matrix(matrix: ModuleMatrix, options: RenderOptions) -> Result<Self> {
        options.validate()?;
        Ok(StyledQr {
            matrix,
            config: RenderConfig {
                options,
                ..RenderConfig::default()
            },
        })
    }

    /// Re-encodes the symbol. A hide mask sized for the old symbol is dropped
    /// if the new one has a different size.
    pub fn set_content(&mut self, content: &str, level: EcLevel) -> Result<&mut Self> {
        let matrix = encode(content, level)?;
        if matrix.size() != self.matrix.size() && self.config.hide_mask.take().is_some() {
            warn!(
                "symbol size changed from {} to {}; hide mask cleared",
                self.matrix.size(),
                matrix.size()
            );
        }
        self.matrix = matrix;
        Ok(self)
    }

    /// Re-encodes at the session's default error correction level.
    pub fn set_content_default(&mut self, content: &str) -> Result<&mut Self> {
        let level = self.config.options.error_correction;
        self.set_content(content, level)
    }

    pub fn set_foreground(&mut self, red: i32, green: i32, blue: i32, alpha: i32) -> Result<&mut Self> {
        self.config.foreground = Color::new(red, green, blue, alpha)?;
        Ok(self)
    }

    pub fn set_background(&mut self, red: i32, green: i32, blue: i32, alpha: i32) -> Result<&mut Self> {
        self.config.background = Color::new(red, green, blue, alpha)?;
        Ok(self)
    }

    /// Sets the clockwise rotation in degrees. Only multiples of 90 are accepted.
    pub fn set_rotation(&mut self, degrees: i32) -> Result<&mut Self> {
        self.config.rotation = Rotation::from_degrees(degrees)?;
        Ok(self)
    }

    /// Like [`set_rotation`](Self::set_rotation) but parses the degrees from text.
    pub fn set_rotation_str(&mut self, degrees: &str) -> Result<&mut Self> {
        self.config.rotation = degrees.parse()?;
        Ok(self)
    }

    /// Chooses touching modules (`true`) or modules with a one pixel gap.
    /// Gapped modules need a module size of at least 3 pixels; smaller sizes
    /// make [`render`](Self::render) fail with [`Error::Validation`].
    pub fn set_solid(&mut self, solid: bool) -> &mut Self {
        self.config.solid = solid;
        self
    }

    /// Sets modules to blank out. The mask must match [`symbol_size`](Self::symbol_size)
    /// and applies to the rotated symbol.
    ///
    /// A later [`set_content`](Self::set_content) that changes the symbol size
    /// discards this mask, since it can no longer line up with the modules.
    pub fn set_hide_mask(&mut self, mask: Mask) -> Result<&mut Self> {
        if mask.size() != self.matrix.size() {
            return Err(Error::validation(format!(
                "hide mask has {} modules per side, symbol has {}",
                mask.size(),
                self.matrix.size()
            )));
        }
        self.config.hide_mask = Some(mask);
        Ok(self)
    }

    pub fn clear_hide_mask(&mut self) -> &mut Self {
        self.config.hide_mask = None;
        self
    }

    /// Centers `text` over the symbol, blanking the modules behind it.
    pub fn set_center_text(
        &mut self,
        text: &str,
        font: Arc<dyn FontRasterizer>,
        point_size: f32,
    ) -> Result<&mut Self> {
        self.config.text = Some(TextRequest::new(text, font, point_size)?);
        Ok(self)
    }

    pub fn clear_center_text(&mut self) -> &mut Self {
        self.config.text = None;
        self
    }

    /// Side of the encoded symbol in modules.
    pub fn symbol_size(&self) -> usize {
        self.matrix.size()
    }

    /// An all-clear mask sized for the current symbol.
    pub fn empty_mask(&self) -> Mask {
        Mask::new(self.matrix.size())
    }

    pub fn matrix(&self) -> &ModuleMatrix {
        &self.matrix
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn render(&self) -> Result<Layer> {
        compose(&self.config, &self.matrix)
    }

    /// Renders and writes a PNG. See [`save_png`] for the path rules.
    pub fn save(&self, directory: Option<&str>, filename: Option<&str>) -> Result<PathBuf> {
        let layer = self.render()?;
        save_png(&layer, directory, filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qr() -> StyledQr {
        StyledQr::new("TEST", EcLevel::L).unwrap()
    }

    #[test]
    fn reports_symbol_size_and_empty_mask() {
        let qr = qr();
        assert_eq!(qr.symbol_size(), 21);
        let mask = qr.empty_mask();
        assert_eq!(mask.size(), 21);
        assert_eq!(mask.count(), 0);
    }

    #[test]
    fn failed_setters_keep_previous_values() {
        let mut qr = qr();
        qr.set_foreground(10, 20, 30, 0).unwrap();
        assert!(qr.set_foreground(256, 0, 0, 0).is_err());
        assert_eq!(qr.config().foreground, Color::new(10, 20, 30, 0).unwrap());

        qr.set_rotation(180).unwrap();
        assert!(qr.set_rotation(45).is_err());
        assert!(qr.set_rotation_str("sideways").is_err());
        assert_eq!(qr.config().rotation.degrees(), 180);
    }

    #[test]
    fn hide_mask_must_match_symbol() {
        let mut qr = qr();
        let mut mask = qr.empty_mask();
        mask.set(10, 10, true);
        qr.set_hide_mask(mask.clone()).unwrap();

        let err = qr.set_hide_mask(Mask::new(25));
        assert!(matches!(err, Err(Error::Validation(_))));
        assert_eq!(qr.config().hide_mask.as_ref(), Some(&mask));
    }

    #[test]
    fn resizing_content_drops_hide_mask() {
        let mut qr = qr();
        qr.set_hide_mask(qr.empty_mask()).unwrap();
        qr.set_content(&"LONGER CONTENT ".repeat(6), EcLevel::H).unwrap();
        assert!(qr.symbol_size() > 21);
        assert!(qr.config().hide_mask.is_none());
    }

    #[test]
    fn bad_content_keeps_previous_symbol() {
        let mut qr = qr();
        let before = qr.matrix().clone();
        assert!(matches!(qr.set_content(&"x".repeat(8000), EcLevel::H), Err(Error::Encoding(_))));
        assert_eq!(qr.matrix(), &before);
    }
}
