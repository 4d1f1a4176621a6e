//! Coordinate mapping from matrix coordinates to packed storage
//!
//! The matrix is split into four quadrants that all alias the same M×M grid
//! of storage cells, where M = ceil(size / 2). `locate` translates a full
//! coordinate into the owning quadrant plus the row-major index of the
//! shared storage cell.

use crate::error::{MatrixError, Result};

/// Quadrant of the logical matrix, also the slot index within a case code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    /// x < M, y < M
    TopLeft = 0,
    /// x >= M, y < M
    TopRight = 1,
    /// x < M, y >= M
    BottomLeft = 2,
    /// x >= M, y >= M
    BottomRight = 3,
}

impl Quadrant {
    /// Slot index of this quadrant within a decoded case code (0-3)
    pub fn slot(self) -> usize {
        self as usize
    }
}

/// Resolved storage position for a matrix coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Quadrant owning the coordinate
    pub quadrant: Quadrant,
    /// Row-major index into the storage grid
    pub index: usize,
}

/// Side length of the storage grid for a matrix of `size`
pub fn reduced_size(size: usize) -> usize {
    (size + 1) / 2
}

/// Map (x, y) to its quadrant and storage cell index
///
/// Rejects coordinates at or beyond `size` with `OutOfRange`.
pub fn locate(x: usize, y: usize, size: usize) -> Result<Location> {
    if x >= size || y >= size {
        return Err(MatrixError::OutOfRange { x, y, size });
    }
    Ok(locate_in_bounds(x, y, reduced_size(size)))
}

/// Map an already-validated coordinate given the reduced grid size `m`
///
/// Reduced coordinates for the right/bottom quadrants are computed by
/// subtracting `m`, never by modulo: for odd sizes those quadrants are one
/// cell narrower than `m`, and subtraction keeps them from aliasing the
/// boundary row/column owned by the top/left quadrants.
pub fn locate_in_bounds(x: usize, y: usize, m: usize) -> Location {
    let (quadrant, lx, ly) = match (x < m, y < m) {
        (true, true) => (Quadrant::TopLeft, x, y),
        (false, true) => (Quadrant::TopRight, x - m, y),
        (true, false) => (Quadrant::BottomLeft, x, y - m),
        (false, false) => (Quadrant::BottomRight, x - m, y - m),
    };

    Location {
        quadrant,
        index: ly * m + lx,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced_size() {
        assert_eq!(reduced_size(1), 1);
        assert_eq!(reduced_size(4), 2);
        assert_eq!(reduced_size(5), 3);
        assert_eq!(reduced_size(8), 4);
    }

    #[test]
    fn test_quadrant_selection() {
        // size 4, m = 2
        assert_eq!(locate(0, 0, 4).unwrap().quadrant, Quadrant::TopLeft);
        assert_eq!(locate(3, 0, 4).unwrap().quadrant, Quadrant::TopRight);
        assert_eq!(locate(0, 3, 4).unwrap().quadrant, Quadrant::BottomLeft);
        assert_eq!(locate(3, 3, 4).unwrap().quadrant, Quadrant::BottomRight);
    }

    #[test]
    fn test_quadrants_share_storage_cell() {
        // size 4: (0,0), (2,0), (0,2) and (2,2) fold onto storage cell 0
        let index = locate(0, 0, 4).unwrap().index;
        assert_eq!(locate(2, 0, 4).unwrap().index, index);
        assert_eq!(locate(0, 2, 4).unwrap().index, index);
        assert_eq!(locate(2, 2, 4).unwrap().index, index);
    }

    #[test]
    fn test_odd_size_extremes() {
        // size 5, m = 3: the bottom-right corner lands at reduced (1, 1)
        let loc = locate(4, 4, 5).unwrap();
        assert_eq!(loc.quadrant, Quadrant::BottomRight);
        assert_eq!(loc.index, 4);

        // the boundary row/column belongs to the top/left quadrants
        assert_eq!(locate(2, 2, 5).unwrap().quadrant, Quadrant::TopLeft);
        assert_eq!(locate(2, 2, 5).unwrap().index, 8);
    }

    #[test]
    fn test_out_of_range() {
        assert!(locate(3, 0, 3).is_err());
        assert!(locate(0, 3, 3).is_err());
        assert_eq!(
            locate(5, 1, 3),
            Err(MatrixError::OutOfRange { x: 5, y: 1, size: 3 })
        );
    }
}
