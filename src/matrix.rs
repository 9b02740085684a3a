//! Square boolean grids: the symbol itself and masks over it.
//!
//! Both types index cells as `(row, col)`, row 0 at the top and column 0 at
//! the left.

use std::ops::{Deref, DerefMut};

use crate::error::{Error, Result};

/// A square grid of modules, `true` meaning dark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    size: usize,
    modules: Vec<bool>,
}

impl ModuleMatrix {
    /// Creates an all-light matrix with side `size`.
    pub fn new(size: usize) -> Self {
        ModuleMatrix {
            size,
            modules: vec![false; size * size],
        }
    }

    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut matrix = ModuleMatrix::new(size);
        for row in 0..size {
            for col in 0..size {
                matrix.modules[row * size + col] = f(row, col);
            }
        }
        matrix
    }

    /// Builds a matrix from rows, failing unless every row has as many cells
    /// as there are rows.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let size = rows.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.as_ref().len() != size) {
            return Err(Error::validation(format!(
                "row {i} has {} cells, expected {size}",
                row.as_ref().len()
            )));
        }
        Ok(ModuleMatrix::from_fn(size, |row, col| rows[row].as_ref()[col]))
    }

    /// Side length in modules.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at `(row, col)`. Out-of-range coordinates read as `false`.
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.modules[row * self.size + col]
    }

    /// Sets the cell at `(row, col)`. Out-of-range coordinates are ignored.
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        if row < self.size && col < self.size {
            self.modules[row * self.size + col] = value;
        }
    }

    /// Iterates over the `(row, col)` coordinates of every `true` cell.
    pub fn iter_set(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.modules
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(move |(i, _)| (i / size, i % size))
    }

    pub fn count(&self) -> usize {
        self.modules.iter().filter(|&&on| on).count()
    }
}

/// A set of modules to act upon, shaped like the symbol it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask(ModuleMatrix);

impl Mask {
    /// Creates an empty mask with side `size`.
    pub fn new(size: usize) -> Self {
        Mask(ModuleMatrix::new(size))
    }

    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        ModuleMatrix::from_rows(rows).map(Mask)
    }

    /// Marks every cell also marked in `other`. Both masks must share a size.
    pub fn union(&mut self, other: &Mask) -> Result<()> {
        if other.size() != self.size() {
            return Err(Error::validation(format!(
                "cannot merge a {}-module mask into a {}-module mask",
                other.size(),
                self.size()
            )));
        }
        for (row, col) in other.iter_set() {
            self.set(row, col, true);
        }
        Ok(())
    }

    pub fn into_matrix(self) -> ModuleMatrix {
        self.0
    }
}

impl From<ModuleMatrix> for Mask {
    fn from(matrix: ModuleMatrix) -> Self {
        Mask(matrix)
    }
}

impl From<&ModuleMatrix> for Mask {
    fn from(matrix: &ModuleMatrix) -> Self {
        Mask(matrix.clone())
    }
}

impl Deref for Mask {
    type Target = ModuleMatrix;

    fn deref(&self) -> &ModuleMatrix {
        &self.0
    }
}

impl DerefMut for Mask {
    fn deref_mut(&mut self) -> &mut ModuleMatrix {
        &mut self.0
    }
}
