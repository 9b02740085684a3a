//! Render settings.

use std::fmt;
use std::sync::Arc;

use crate::color::Color;
use crate::encode::EcLevel;
use crate::error::{Error, Result};
use crate::matrix::Mask;
use crate::rotate::Rotation;
use crate::text::FontRasterizer;

/// Smallest module size that leaves a visible square once gapped modules are
/// inset by one pixel per side.
pub const MIN_GAPPED_MODULE_SIZE: u32 = 3;

/// Sizing parameters shared by every render of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Pixels per module side. Defaults to 10.
    pub module_size: u32,
    /// Quiet zone around the symbol, in modules. Defaults to 4.
    pub border: u32,
    /// Level used when content is set without one. Defaults to [`EcLevel::L`].
    pub error_correction: EcLevel,
    /// Largest canvas side that may be allocated, in pixels. Defaults to 16384.
    pub max_canvas_side: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            module_size: 10,
            border: 4,
            error_correction: EcLevel::L,
            max_canvas_side: 16384,
        }
    }
}

impl RenderOptions {
    /// Checks that gapped modules still have pixels left after the one pixel
    /// inset on each side.
    pub fn validate_style(&self, solid: bool) -> Result<()> {
        self.validate()?;
        if !solid && self.module_size < MIN_GAPPED_MODULE_SIZE {
            return Err(Error::validation(format!(
                "gapped modules need at least {MIN_GAPPED_MODULE_SIZE} pixels per module, got {}",
                self.module_size
            )));
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.module_size == 0 {
            return Err(Error::validation("module size must be at least 1 pixel"));
        }
        if self.max_canvas_side == 0 {
            return Err(Error::validation("canvas limit must be at least 1 pixel"));
        }
        Ok(())
    }
}

/// Text to center over the symbol.
#[derive(Clone)]
pub struct TextRequest {
    pub text: String,
    pub font: Arc<dyn FontRasterizer>,
    pub point_size: f32,
}

impl TextRequest {
    pub fn new(text: impl Into<String>, font: Arc<dyn FontRasterizer>, point_size: f32) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(Error::validation("centered text must not be empty"));
        }
        if !point_size.is_finite() || point_size <= 0.0 {
            return Err(Error::validation(format!("point size {point_size} must be positive")));
        }
        Ok(TextRequest {
            text,
            font,
            point_size,
        })
    }
}

impl fmt::Debug for TextRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextRequest")
            .field("text", &self.text)
            .field("point_size", &self.point_size)
            .finish_non_exhaustive()
    }
}

/// Everything that styles one render.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub options: RenderOptions,
    pub foreground: Color,
    pub background: Color,
    pub rotation: Rotation,
    pub solid: bool,
    pub hide_mask: Option<Mask>,
    pub text: Option<TextRequest>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            options: RenderOptions::default(),
            foreground: Color::BLACK,
            background: Color::WHITE,
            rotation: Rotation::NONE,
            solid: true,
            hide_mask: None,
            text: None,
        }
    }
}
