//! Adapter over the symbol encoder.

use std::fmt;
use std::str::FromStr;

use qrcode::QrCode;

use crate::error::{Error, Result};
use crate::matrix::ModuleMatrix;

/// Error correction level, from lowest (`L`, about 7% recovery) to highest
/// (`H`, about 30%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EcLevel {
    #[default]
    L,
    M,
    Q,
    H,
}

impl From<EcLevel> for qrcode::EcLevel {
    fn from(level: EcLevel) -> Self {
        match level {
            EcLevel::L => qrcode::EcLevel::L,
            EcLevel::M => qrcode::EcLevel::M,
            EcLevel::Q => qrcode::EcLevel::Q,
            EcLevel::H => qrcode::EcLevel::H,
        }
    }
}

impl FromStr for EcLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(EcLevel::L),
            "M" => Ok(EcLevel::M),
            "Q" => Ok(EcLevel::Q),
            "H" => Ok(EcLevel::H),
            _ => Err(Error::validation(format!("unknown error correction level {s:?}"))),
        }
    }
}

impl fmt::Display for EcLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EcLevel::L => "L",
            EcLevel::M => "M",
            EcLevel::Q => "Q",
            EcLevel::H => "H",
        };
        f.write_str(s)
    }
}

/// Encodes `content` into the smallest symbol that holds it at `level`.
///
/// # Example
///
/// ```rust
/// use qrdecor::{encode, EcLevel};
///
/// let matrix = encode("TEST", EcLevel::L).unwrap();
/// assert_eq!(matrix.size(), 21);
/// ```
pub fn encode(content: &str, level: EcLevel) -> Result<ModuleMatrix> {
    let code = QrCode::with_error_correction_level(content.as_bytes(), level.into())
        .map_err(|e| Error::Encoding(e.to_string()))?;
    let size = code.width();
    let colors = code.to_colors();
    Ok(ModuleMatrix::from_fn(size, |row, col| {
        colors[row * size + col] == qrcode::Color::Dark
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_short_text_as_version_one() {
        let m = encode("TEST", EcLevel::L).unwrap();
        assert_eq!(m.size(), 21);
        // Top-left position square: dark corner, light separator ring.
        assert!(m.get(0, 0));
        assert!(m.get(3, 3));
        assert!(!m.get(1, 1));
        assert!(!m.get(7, 7));
    }

    #[test]
    fn higher_levels_need_larger_symbols() {
        let text = "https://example.com/a/fairly/long/path?with=query&and=more";
        let low = encode(text, EcLevel::L).unwrap().size();
        let high = encode(text, EcLevel::H).unwrap().size();
        assert!(high > low);
    }

    #[test]
    fn oversized_content_is_an_encoding_error() {
        let text = "x".repeat(8000);
        assert!(matches!(encode(&text, EcLevel::H), Err(Error::Encoding(_))));
    }

    #[test]
    fn parses_levels() {
        assert_eq!("q".parse::<EcLevel>().unwrap(), EcLevel::Q);
        assert_eq!(EcLevel::H.to_string(), "H");
        assert!(matches!("X".parse::<EcLevel>(), Err(Error::Validation(_))));
    }
}
