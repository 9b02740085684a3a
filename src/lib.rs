//! # qrdecor
//!
//! Render QR codes to raster images with decorative styling.
//!
//! `qrdecor` takes the module matrix of an encoded symbol and paints it onto an
//! RGBA canvas. Styling covers custom colors, solid or dotted modules,
//! rotation in quarter turns, centered text that blanks the modules behind it,
//! and caller-supplied masks of modules to hide. The three position squares
//! and the alignment square are always painted last, so the symbol stays
//! scannable whatever the masks say.
//!
//! ## Features
//!
//! - Encode text at any of the four error correction levels.
//! - Foreground and background colors with a 0-127 alpha channel (0 is opaque).
//! - Solid modules, or modules inset by one pixel for a dotted look.
//! - Rotation by any multiple of 90 degrees.
//! - Centered text drawn with any TrueType font.
//! - Hide masks to punch arbitrary modules out of the symbol.
//!
//! ## Example
//!
//! ```rust
//! use qrdecor::{EcLevel, StyledQr};
//!
//! let mut qr = StyledQr::new("https://example.com", EcLevel::H).unwrap();
//! qr.set_foreground(0, 80, 160, 0).unwrap().set_solid(false);
//!
//! let mut mask = qr.empty_mask();
//! mask.set(qr.symbol_size() / 2, qr.symbol_size() / 2, true);
//! qr.set_hide_mask(mask).unwrap();
//!
//! let image = qr.render().unwrap();
//! assert_eq!(image.width(), image.height());
//! ```
//!
//! Centered text needs a font:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use qrdecor::{EcLevel, StyledQr, TrueTypeFont};
//!
//! let font = Arc::new(TrueTypeFont::open("fonts/DejaVuSans.ttf").unwrap());
//! let mut qr = StyledQr::new("https://example.com", EcLevel::H).unwrap();
//! qr.set_center_text("SCAN ME", font, 14.0).unwrap();
//! qr.save(Some("output"), Some("scan_me")).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`styled`]: The [`StyledQr`] builder most callers need.
//! - [`compositor`]: Layer assembly behind [`StyledQr::render`].
//! - [`rotate`], [`finder`], [`hide`], [`render`]: Mask algorithms.
//! - [`text`]: Text measurement and rasterization.
//! - [`helper`]: Console preview and PNG output.

#![forbid(unsafe_code)]

pub mod color;
pub mod compositor;
pub mod config;
pub mod encode;
pub mod error;
pub mod finder;
pub mod helper;
pub mod hide;
pub mod layer;
pub mod matrix;
pub mod render;
pub mod rotate;
pub mod styled;
pub mod text;

pub use color::Color;
pub use compositor::compose;
pub use config::{RenderConfig, RenderOptions, TextRequest};
pub use encode::{encode, EcLevel};
pub use error::{Error, Result};
pub use finder::finder_mask;
pub use hide::hide_mask;
pub use layer::Layer;
pub use matrix::{Mask, ModuleMatrix};
pub use render::apply_mask;
pub use rotate::{rotate, Rotation};
pub use styled::StyledQr;
pub use text::{FontRasterizer, GlyphBox, TextBox, TrueTypeFont};
