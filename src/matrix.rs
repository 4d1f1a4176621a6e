//! Compact square boolean matrix packing four logical cells per byte

use std::fmt;

use rayon::prelude::*;

use crate::error::{MatrixError, Result};
use crate::mapper::{self, Location};
use crate::tables;

/// Square boolean matrix storing four logical cells per storage byte
///
/// A matrix of side `size` allocates `ceil(size / 2)²` bytes: each byte
/// holds a case code covering the four quadrant cells that share a reduced
/// position. Lookup and mutation stay O(1); only the constant factor pays
/// for the decode/encode step.
///
/// Storage content is unspecified until [`all_true`](Self::all_true) or
/// [`all_false`](Self::all_false) runs.
#[derive(Debug, Clone)]
pub struct CompactMatrix {
    size: usize,
    reduced: usize,
    cells: Vec<u8>,
}

impl CompactMatrix {
    /// Create a matrix with `size` × `size` logical cells
    ///
    /// Fails with `OutOfRange` for size 0.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(MatrixError::OutOfRange { x: 0, y: 0, size: 0 });
        }
        let reduced = mapper::reduced_size(size);
        Ok(Self {
            size,
            reduced,
            cells: vec![tables::EMPTY; reduced * reduced],
        })
    }

    /// Logical side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Side length of the packed storage grid, `ceil(size / 2)`
    pub fn reduced_size(&self) -> usize {
        self.reduced
    }

    /// Number of logical cells (`size²`)
    pub fn len(&self) -> usize {
        self.size * self.size
    }

    /// True when the matrix holds no logical cells
    ///
    /// Always false in practice: construction rejects size 0.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes used by the packed storage grid
    pub fn storage_bytes(&self) -> usize {
        self.cells.len()
    }

    /// Raw case codes of the storage grid
    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }

    /// Set every logical cell to false
    pub fn all_false(&mut self) {
        self.cells.fill(tables::EMPTY);
    }

    /// Set every logical cell to true
    pub fn all_true(&mut self) {
        self.cells.fill(tables::FULL);
    }

    /// Read the cell at (x, y)
    pub fn get(&self, x: usize, y: usize) -> Result<bool> {
        let loc = mapper::locate(x, y, self.size)?;
        Ok(tables::decode(self.cells[loc.index])[loc.quadrant.slot()])
    }

    /// Write `value` to the cell at (x, y)
    pub fn set(&mut self, x: usize, y: usize, value: bool) -> Result<()> {
        let loc = mapper::locate(x, y, self.size)?;
        self.update(loc, |slots, slot| slots[slot] = value);
        Ok(())
    }

    /// Set the cell at (x, y) to true
    pub fn set_true(&mut self, x: usize, y: usize) -> Result<()> {
        self.set(x, y, true)
    }

    /// Set the cell at (x, y) to false
    pub fn set_false(&mut self, x: usize, y: usize) -> Result<()> {
        self.set(x, y, false)
    }

    /// Flip the cell at (x, y)
    pub fn switch(&mut self, x: usize, y: usize) -> Result<()> {
        let loc = mapper::locate(x, y, self.size)?;
        self.update(loc, |slots, slot| slots[slot] = !slots[slot]);
        Ok(())
    }

    // Read-decode-modify-encode-write cycle for one storage cell. The
    // other three slots pass through unchanged.
    fn update(&mut self, loc: Location, apply: impl FnOnce(&mut [bool; 4], usize)) {
        let mut slots = tables::decode(self.cells[loc.index]);
        apply(&mut slots, loc.quadrant.slot());
        self.cells[loc.index] = tables::encode(slots);
    }

    fn row(&self, y: usize) -> Vec<bool> {
        (0..self.size)
            .map(|x| {
                let loc = mapper::locate_in_bounds(x, y, self.reduced);
                tables::decode(self.cells[loc.index])[loc.quadrant.slot()]
            })
            .collect()
    }

    /// Expand into a conventional row-major nested matrix
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.size).map(|y| self.row(y)).collect()
    }

    /// Expand into rows, one rayon task per row
    ///
    /// Same output as [`to_rows`](Self::to_rows); worthwhile for large
    /// matrices.
    pub fn to_rows_parallel(&self) -> Vec<Vec<bool>> {
        (0..self.size)
            .into_par_iter()
            .map(|y| self.row(y))
            .collect()
    }
}

impl PartialEq for CompactMatrix {
    /// Logical equality: same size and same value at every coordinate.
    /// Padding slots in boundary storage cells never participate.
    fn eq(&self, other: &Self) -> bool {
        if self.size != other.size {
            return false;
        }
        (0..self.size).all(|y| {
            (0..self.size).all(|x| {
                let loc = mapper::locate_in_bounds(x, y, self.reduced);
                let a = tables::decode(self.cells[loc.index])[loc.quadrant.slot()];
                let b = tables::decode(other.cells[loc.index])[loc.quadrant.slot()];
                a == b
            })
        })
    }
}

impl fmt::Display for CompactMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                let loc = mapper::locate_in_bounds(x, y, self.reduced);
                let on = tables::decode(self.cells[loc.index])[loc.quadrant.slot()];
                write!(f, "{}", if on { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
