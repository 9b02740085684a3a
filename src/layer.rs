//! Pixel canvases.
//!
//! A [`Layer`] owns its pixel buffer and is released when dropped, so every
//! canvas created during a render is freed on both success and error paths.

use image::{imageops, ImageBuffer, Rgba, RgbaImage};

use crate::color::Color;
use crate::error::{Error, Result};

/// An owned RGBA canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    image: RgbaImage,
}

impl Layer {
    /// Allocates a `width` x `height` canvas filled with `fill`.
    ///
    /// Fails with [`Error::RenderFailure`] for empty canvases or when either
    /// side exceeds `max_side`.
    pub fn new(width: u32, height: u32, fill: Color, max_side: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::RenderFailure(format!("cannot allocate a {width}x{height} canvas")));
        }
        if width > max_side || height > max_side {
            return Err(Error::RenderFailure(format!(
                "canvas {width}x{height} exceeds the {max_side}px limit"
            )));
        }
        Ok(Layer {
            image: ImageBuffer::from_pixel(width, height, fill.to_rgba()),
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    /// Fills the inclusive rectangle `[x1, x2] x [y1, y2]`, clipped to the
    /// canvas. An inverted rectangle draws nothing.
    pub fn fill_rect(&mut self, x1: i64, y1: i64, x2: i64, y2: i64, color: Color) {
        let x_end = x2.min(i64::from(self.width()) - 1);
        let y_end = y2.min(i64::from(self.height()) - 1);
        let pixel = color.to_rgba();
        for y in y1.max(0)..=y_end {
            for x in x1.max(0)..=x_end {
                self.image.put_pixel(x as u32, y as u32, pixel);
            }
        }
    }

    /// Sets a single pixel, ignoring coordinates outside the canvas.
    pub fn put_pixel(&mut self, x: i64, y: i64, color: Color) {
        if x >= 0 && y >= 0 && x < i64::from(self.width()) && y < i64::from(self.height()) {
            self.image.put_pixel(x as u32, y as u32, color.to_rgba());
        }
    }

    /// Copies `src` onto this canvas with its top-left corner at `(x, y)`.
    /// Pixels are replaced, not blended.
    pub fn composite(&mut self, src: &Layer, x: i64, y: i64) {
        imageops::replace(&mut self.image, &src.image, x, y);
    }

    /// Copies `src` centered on this canvas.
    pub fn composite_centered(&mut self, src: &Layer) {
        let x = (i64::from(self.width()) - i64::from(src.width())) / 2;
        let y = (i64::from(self.height()) - i64::from(src.height())) / 2;
        self.composite(src, x, y);
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Color {
        Color::new(255, 0, 0, 0).unwrap()
    }

    #[test]
    fn rejects_empty_and_oversized_canvases() {
        assert!(matches!(Layer::new(0, 10, Color::WHITE, 100), Err(Error::RenderFailure(_))));
        assert!(matches!(Layer::new(101, 10, Color::WHITE, 100), Err(Error::RenderFailure(_))));
        assert!(Layer::new(100, 100, Color::WHITE, 100).is_ok());
    }

    #[test]
    fn fill_rect_is_inclusive_and_clipped() {
        let mut layer = Layer::new(10, 10, Color::WHITE, 100).unwrap();
        layer.fill_rect(8, -3, 20, 1, red());
        assert_eq!(layer.pixel(8, 0), Some(red().to_rgba()));
        assert_eq!(layer.pixel(9, 1), Some(red().to_rgba()));
        assert_eq!(layer.pixel(7, 0), Some(Color::WHITE.to_rgba()));
        assert_eq!(layer.pixel(9, 2), Some(Color::WHITE.to_rgba()));
    }

    #[test]
    fn inverted_rect_draws_nothing() {
        let mut layer = Layer::new(4, 4, Color::WHITE, 100).unwrap();
        layer.fill_rect(2, 2, 1, 3, red());
        assert!(layer.as_image().pixels().all(|p| *p == Color::WHITE.to_rgba()));
    }

    #[test]
    fn composite_centered_offsets_by_half_the_difference() {
        let mut base = Layer::new(10, 8, Color::WHITE, 100).unwrap();
        let patch = Layer::new(4, 2, red(), 100).unwrap();
        base.composite_centered(&patch);
        assert_eq!(base.pixel(3, 3), Some(red().to_rgba()));
        assert_eq!(base.pixel(6, 4), Some(red().to_rgba()));
        assert_eq!(base.pixel(2, 3), Some(Color::WHITE.to_rgba()));
        assert_eq!(base.pixel(7, 4), Some(Color::WHITE.to_rgba()));
        assert_eq!(base.pixel(3, 5), Some(Color::WHITE.to_rgba()));
    }
}
