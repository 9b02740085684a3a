//! Text measurement and glyph rasterization.
//!
//! Glyph drawing sits behind [`FontRasterizer`] so layouts can be sized and
//! tested independently of any font file. [`TrueTypeFont`] is the `rusttype`
//! backed implementation.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use rusttype::{point, Font, Rect, Scale};

use crate::color::Color;
use crate::error::{Error, Result};
use crate::layer::Layer;

/// Corner coordinates of a laid-out string relative to its pen origin on the
/// baseline, in the order lower-left, lower-right, upper-right, upper-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphBox {
    pub corners: [(i32, i32); 4],
}

impl GlyphBox {
    /// Builds the box spanning `min..max` on both axes.
    pub fn from_extent(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        GlyphBox {
            corners: [(min_x, max_y), (max_x, max_y), (max_x, min_y), (min_x, min_y)],
        }
    }

    fn min_x(&self) -> i32 {
        self.corners.iter().map(|c| c.0).min().unwrap_or(0)
    }

    fn max_x(&self) -> i32 {
        self.corners.iter().map(|c| c.0).max().unwrap_or(0)
    }

    fn min_y(&self) -> i32 {
        self.corners.iter().map(|c| c.1).min().unwrap_or(0)
    }

    fn max_y(&self) -> i32 {
        self.corners.iter().map(|c| c.1).max().unwrap_or(0)
    }
}

/// Measures and draws strings in a particular typeface.
pub trait FontRasterizer: Send + Sync {
    /// Returns the box enclosing `text` laid out at `point_size` from a pen
    /// origin at `(0, 0)` on the baseline.
    fn glyph_box(&self, point_size: f32, text: &str) -> Result<GlyphBox>;

    /// Draws `text` in flat `color` with the pen origin at `(x, y)`.
    fn draw_text(
        &self,
        layer: &mut Layer,
        point_size: f32,
        x: i32,
        y: i32,
        color: Color,
        text: &str,
    ) -> Result<()>;
}

/// Pixel size of a text layer and where to put the pen inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBox {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl TextBox {
    pub fn measure(font: &dyn FontRasterizer, point_size: f32, text: &str) -> Result<Self> {
        Ok(TextBox::from_glyph_box(&font.glyph_box(point_size, text)?))
    }

    pub fn from_glyph_box(glyphs: &GlyphBox) -> Self {
        let (min_x, max_x) = (glyphs.min_x(), glyphs.max_x());
        let (min_y, max_y) = (glyphs.min_y(), glyphs.max_y());
        TextBox {
            left: min_x.unsigned_abs().saturating_sub(1),
            top: min_y.unsigned_abs().saturating_sub(1),
            width: max_x.abs_diff(min_x),
            height: max_y.abs_diff(min_y),
        }
    }
}

/// Converts a point size to pixels at 96 dpi.
pub fn points_to_pixels(point_size: f32) -> f32 {
    point_size * 96.0 / 72.0
}

/// A TrueType or OpenType font loaded from disk.
pub struct TrueTypeFont {
    font: Font<'static>,
    path: PathBuf,
}

impl TrueTypeFont {
    /// Loads the font at `path`. A missing file fails with
    /// [`Error::FontNotFound`] before anything is read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::FontNotFound(path.to_path_buf()));
        }
        let bytes = fs::read(path)?;
        let font = Font::try_from_vec(bytes).ok_or_else(|| Error::InvalidFont(path.to_path_buf()))?;
        Ok(TrueTypeFont {
            font,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn pixel_bounds(&self, point_size: f32, text: &str) -> Option<Rect<i32>> {
        let scale = Scale::uniform(points_to_pixels(point_size));
        self.font
            .layout(text, scale, point(0.0, 0.0))
            .filter_map(|g| g.pixel_bounding_box())
            .reduce(|a, b| Rect {
                min: point(a.min.x.min(b.min.x), a.min.y.min(b.min.y)),
                max: point(a.max.x.max(b.max.x), a.max.y.max(b.max.y)),
            })
    }
}

impl fmt::Debug for TrueTypeFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrueTypeFont").field("path", &self.path).finish()
    }
}

impl FontRasterizer for TrueTypeFont {
    // The box always contains the pen origin and carries one pixel of padding,
    // keeping the derived pen offsets non-negative.
    fn glyph_box(&self, point_size: f32, text: &str) -> Result<GlyphBox> {
        let (min, max) = match self.pixel_bounds(point_size, text) {
            Some(r) => ((r.min.x, r.min.y), (r.max.x, r.max.y)),
            None => ((0, 0), (0, 0)),
        };
        Ok(GlyphBox::from_extent(
            min.0.min(0) - 1,
            min.1.min(0) - 1,
            max.0.max(0) + 1,
            max.1.max(0) + 1,
        ))
    }

    fn draw_text(
        &self,
        layer: &mut Layer,
        point_size: f32,
        x: i32,
        y: i32,
        color: Color,
        text: &str,
    ) -> Result<()> {
        let scale = Scale::uniform(points_to_pixels(point_size));
        for glyph in self.font.layout(text, scale, point(x as f32, y as f32)) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                if coverage >= 0.5 {
                    layer.put_pixel(
                        i64::from(bb.min.x) + i64::from(gx),
                        i64::from(bb.min.y) + i64::from(gy),
                        color,
                    );
                }
            });
        }
        Ok(())
    }
}
