//! Pieces module - polyomino shapes and clockwise rotation
//!
//! Shapes are small rectangular boolean matrices stored in a fixed 4x4 array,
//! so they are `Copy` and never allocate. Cells outside `rows x cols` are
//! always `false`, which keeps derived equality exact.

use serde::Serialize;

use crate::types::{ShapeKind, MAX_SHAPE_DIM};

/// A rectangular occupancy matrix, anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from a `0`/`1` matrix.
    ///
    /// Dimensions are checked at compile time when used in a `const`.
    pub const fn from_grid<const R: usize, const C: usize>(grid: [[u8; C]; R]) -> Self {
        assert!(R > 0 && R <= MAX_SHAPE_DIM);
        assert!(C > 0 && C <= MAX_SHAPE_DIM);

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut i = 0;
        while i < R {
            let mut j = 0;
            while j < C {
                cells[i][j] = grid[i][j] != 0;
                j += 1;
            }
            i += 1;
        }

        Self {
            rows: R as u8,
            cols: C as u8,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Whether `(i, j)` is occupied; false outside the matrix
    pub fn is_filled(&self, i: usize, j: usize) -> bool {
        i < self.rows() && j < self.cols() && self.cells[i][j]
    }

    /// Occupied offsets in row-major order
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows())
            .flat_map(move |i| (0..self.cols()).map(move |j| (i, j)))
            .filter(move |&(i, j)| self.cells[i][j])
    }

    /// Number of occupied cells
    pub fn tile_count(&self) -> u32 {
        self.filled_cells().count() as u32
    }

    /// Rotate 90 degrees clockwise.
    ///
    /// An `R x C` matrix becomes `C x R` with `out[i][j] = in[R-1-j][i]`.
    pub fn rotate(&self) -> Shape {
        let rows = self.rows();
        let cols = self.cols();
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (i, out_row) in cells.iter_mut().enumerate().take(cols) {
            for (j, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.cells[rows - 1 - j][i];
            }
        }
        Shape {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Apply [`Shape::rotate`] `times` times (taken modulo 4)
    pub fn rotated(&self, times: u32) -> Shape {
        let mut shape = *self;
        for _ in 0..(times % 4) {
            shape = shape.rotate();
        }
        shape
    }

    /// Rows as `0`/`1` vectors, for serialization and debugging
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows())
            .map(|i| (0..self.cols()).map(|j| self.cells[i][j] as u8).collect())
            .collect()
    }
}

/// Free-function form of [`Shape::rotate`]
pub fn rotate(shape: &Shape) -> Shape {
    shape.rotate()
}

const SINGLE: Shape = Shape::from_grid([[1]]);
const H2: Shape = Shape::from_grid([[1, 1]]);
const V2: Shape = Shape::from_grid([[1], [1]]);
const Z: Shape = Shape::from_grid([[1, 1, 0], [0, 1, 1]]);
const H3: Shape = Shape::from_grid([[1, 1, 1]]);
const V3: Shape = Shape::from_grid([[1], [1], [1]]);
const SQUARE: Shape = Shape::from_grid([[1, 1], [1, 1]]);
const T_UP: Shape = Shape::from_grid([[0, 1, 0], [1, 1, 1]]);
const T_DOWN: Shape = Shape::from_grid([[1, 1, 1], [0, 1, 0]]);
const L_BIG: Shape = Shape::from_grid([[0, 0, 1], [0, 0, 1], [1, 1, 1]]);
const H4: Shape = Shape::from_grid([[1, 1, 1, 1]]);

/// Number of shapes in the catalog
pub const CATALOG_LEN: usize = ShapeKind::ALL.len();

/// Unrotated shape for a catalog entry
pub fn base_shape(kind: ShapeKind) -> Shape {
    match kind {
        ShapeKind::Single => SINGLE,
        ShapeKind::H2 => H2,
        ShapeKind::V2 => V2,
        ShapeKind::Z => Z,
        ShapeKind::H3 => H3,
        ShapeKind::V3 => V3,
        ShapeKind::Square => SQUARE,
        ShapeKind::TUp => T_UP,
        ShapeKind::TDown => T_DOWN,
        ShapeKind::LBig => L_BIG,
        ShapeKind::H4 => H4,
    }
}

/// A dealt piece: a shape fixed at generation time plus identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Piece {
    /// Unique per session lifetime; for UI keying only
    pub id: u64,
    pub kind: ShapeKind,
    pub shape: Shape,
}

impl Piece {
    pub fn new(id: u64, kind: ShapeKind, shape: Shape) -> Self {
        Self { id, kind, shape }
    }

    /// Catalog piece rotated `rotations` times clockwise
    pub fn from_catalog(id: u64, kind: ShapeKind, rotations: u32) -> Self {
        Self::new(id, kind, base_shape(kind).rotated(rotations))
    }
}
