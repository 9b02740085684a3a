//! Quarter-turn rotation of module grids.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::matrix::{Mask, ModuleMatrix};

/// A clockwise rotation by a whole number of quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rotation(u8);

impl Rotation {
    pub const NONE: Rotation = Rotation(0);

    /// Accepts any multiple of 90, negative or larger than a full turn.
    ///
    /// # Example
    ///
    /// ```rust
    /// use qrdecor::Rotation;
    ///
    /// assert_eq!(Rotation::from_degrees(-90).unwrap(), Rotation::from_degrees(270).unwrap());
    /// assert!(Rotation::from_degrees(45).is_err());
    /// ```
    pub fn from_degrees(degrees: i32) -> Result<Self> {
        if degrees % 90 != 0 {
            return Err(Error::validation(format!(
                "rotation {degrees} is not a multiple of 90 degrees"
            )));
        }
        Ok(Rotation::from_quarter_turns(degrees / 90))
    }

    /// Wraps any turn count into `0..4`.
    pub fn from_quarter_turns(turns: i32) -> Self {
        Rotation(turns.rem_euclid(4) as u8)
    }

    pub fn quarter_turns(&self) -> u8 {
        self.0
    }

    pub fn degrees(&self) -> i32 {
        i32::from(self.0) * 90
    }

    pub fn apply(&self, matrix: &ModuleMatrix) -> ModuleMatrix {
        rotate(matrix, i32::from(self.0))
    }

    pub fn apply_mask(&self, mask: &Mask) -> Mask {
        Mask::from(self.apply(mask))
    }
}

impl FromStr for Rotation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let degrees: i32 = s
            .trim()
            .parse()
            .map_err(|_| Error::validation(format!("rotation {s:?} is not a number")))?;
        Rotation::from_degrees(degrees)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Rotates `matrix` clockwise by `turns` quarter turns. Turn counts are taken
/// modulo 4, so negative values rotate counter-clockwise.
pub fn rotate(matrix: &ModuleMatrix, turns: i32) -> ModuleMatrix {
    let mut result = matrix.clone();
    for _ in 0..turns.rem_euclid(4) {
        result = rotate_once(&result);
    }
    result
}

// output[i][j] = input[n-1-j][i]
fn rotate_once(input: &ModuleMatrix) -> ModuleMatrix {
    let n = input.size();
    ModuleMatrix::from_fn(n, |i, j| input.get(n - 1 - j, i))
}
