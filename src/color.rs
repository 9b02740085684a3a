use image::Rgba;

use crate::error::{Error, Result};

/// Highest accepted alpha value. Alpha follows the 7-bit convention where 0 is
/// opaque and 127 is fully transparent.
pub const MAX_ALPHA: i32 = 127;

/// A flat RGBA color with channels validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
}

impl Color {
    pub const BLACK: Color = Color { red: 0, green: 0, blue: 0, alpha: 0 };
    pub const WHITE: Color = Color { red: 255, green: 255, blue: 255, alpha: 0 };

    /// Builds a color, rejecting red/green/blue outside `0..=255` and alpha
    /// outside `0..=127`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use qrdecor::Color;
    ///
    /// assert!(Color::new(255, 255, 255, 127).is_ok());
    /// assert!(Color::new(0, 0, 0, 128).is_err());
    /// ```
    pub fn new(red: i32, green: i32, blue: i32, alpha: i32) -> Result<Self> {
        Ok(Color {
            red: channel("red", red, 255)?,
            green: channel("green", green, 255)?,
            blue: channel("blue", blue, 255)?,
            alpha: channel("alpha", alpha, MAX_ALPHA)?,
        })
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Converts to an 8-bit pixel. Alpha 0 maps to 255 and 127 maps to 0.
    pub fn to_rgba(&self) -> Rgba<u8> {
        let transparency = (u32::from(self.alpha) * 255 + 63) / 127;
        Rgba([self.red, self.green, self.blue, (255 - transparency) as u8])
    }
}

fn channel(name: &str, value: i32, max: i32) -> Result<u8> {
    if (0..=max).contains(&value) {
        Ok(value as u8)
    } else {
        Err(Error::validation(format!("{name} channel {value} is outside 0..={max}")))
    }
}
