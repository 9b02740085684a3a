//! Text rendering through a real TrueType font.
//!
//! Set `QRDECOR_TEST_FONT` to a `.ttf` path to choose the font; otherwise a
//! few common system locations are tried and the tests are skipped when none
//! exists.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use qrdecor::{Color, EcLevel, FontRasterizer, Layer, StyledQr, TextBox, TrueTypeFont};

const CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

fn test_font() -> Option<TrueTypeFont> {
    let path = env::var_os("QRDECOR_TEST_FONT")
        .map(PathBuf::from)
        .or_else(|| CANDIDATES.iter().map(|p| PathBuf::from(*p)).find(|p| p.is_file()));
    match path {
        Some(path) => Some(TrueTypeFont::open(&path).expect("test font loads")),
        None => {
            eprintln!("Skipping test: no TrueType font found, set QRDECOR_TEST_FONT");
            None
        }
    }
}

fn ink(layer: &Layer) -> usize {
    let black = Color::BLACK.to_rgba();
    layer.as_image().pixels().filter(|p| **p == black).count()
}

#[test]
fn measured_layer_holds_every_glyph_pixel() {
    let Some(font) = test_font() else {
        return;
    };
    for text in ["SCAN ME", "gjpqy", "Ag", "W"] {
        for point_size in [8.0, 14.0, 30.0] {
            let tb = TextBox::measure(&font, point_size, text).unwrap();
            let mut fitted = Layer::new(tb.width, tb.height, Color::WHITE, 4096).unwrap();
            font.draw_text(&mut fitted, point_size, tb.left as i32, tb.top as i32, Color::BLACK, text)
                .unwrap();

            let mut padded = Layer::new(tb.width + 200, tb.height + 200, Color::WHITE, 4096).unwrap();
            font.draw_text(
                &mut padded,
                point_size,
                tb.left as i32 + 100,
                tb.top as i32 + 100,
                Color::BLACK,
                text,
            )
            .unwrap();

            let drawn = ink(&padded);
            assert!(drawn > 0, "{text:?} at {point_size}pt drew nothing");
            assert_eq!(ink(&fitted), drawn, "{text:?} at {point_size}pt was clipped");
        }
    }
}

#[test]
fn glyph_box_contains_pen_origin() {
    let Some(font) = test_font() else {
        return;
    };
    let tb = TextBox::measure(&font, 14.0, "Ag").unwrap();
    assert!(tb.left < tb.width);
    assert!(tb.top > 0 && tb.top < tb.height);
}

#[test]
fn centered_text_renders_with_real_font() {
    let Some(font) = test_font() else {
        return;
    };
    let mut qr = StyledQr::new("https://example.com", EcLevel::H).unwrap();
    qr.set_center_text("SCAN ME", Arc::new(font), 10.0).unwrap();
    let layer = qr.render().unwrap();

    let framed = qr.symbol_size() as u32 * 10 + 80;
    assert_eq!(layer.dimensions(), (framed, framed));
    // The middle of the canvas lies in the text layer, whose background is
    // never covered by modules.
    let center = layer.pixel(framed / 2, framed / 2).unwrap();
    assert!(center == Color::WHITE.to_rgba() || center == Color::BLACK.to_rgba());
}
