//! Shape module - tetromino shape matrices and rotation
//!
//! A shape is a small rectangular binary matrix (at most 4x4). Shapes are
//! immutable values: rotation returns a new matrix whose dimensions are the
//! transposed dimensions of the input, so the I piece alternates between 1x4
//! and 4x1 and non-square pieces swap width and height.

use arrayvec::ArrayVec;

use crate::types::{ShapeKind, MAX_SHAPE_DIM};

/// Offset of a filled cell relative to the shape's top-left corner, as (x, y).
pub type CellOffset = (i8, i8);

/// Filled cell offsets of a shape. Never allocates.
pub type CellOffsets = ArrayVec<CellOffset, { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

/// Rectangular binary matrix, row-major, top row first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    const fn packed(width: u8, height: u8, rows: [[u8; MAX_SHAPE_DIM]; MAX_SHAPE_DIM]) -> Self {
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut y = 0;
        while y < MAX_SHAPE_DIM {
            let mut x = 0;
            while x < MAX_SHAPE_DIM {
                cells[y][x] = rows[y][x] != 0;
                x += 1;
            }
            y += 1;
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Spawn-orientation matrix for a shape kind.
    pub const fn of_kind(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::I => Self::packed(4, 1, [[1, 1, 1, 1], [0; 4], [0; 4], [0; 4]]),
            ShapeKind::O => Self::packed(2, 2, [[1, 1, 0, 0], [1, 1, 0, 0], [0; 4], [0; 4]]),
            ShapeKind::T => Self::packed(3, 2, [[0, 1, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]),
            ShapeKind::S => Self::packed(3, 2, [[0, 1, 1, 0], [1, 1, 0, 0], [0; 4], [0; 4]]),
            ShapeKind::Z => Self::packed(3, 2, [[1, 1, 0, 0], [0, 1, 1, 0], [0; 4], [0; 4]]),
            ShapeKind::L => Self::packed(3, 2, [[0, 0, 1, 0], [1, 1, 1, 0], [0; 4], [0; 4]]),
            ShapeKind::J => Self::packed(3, 2, [[1, 0, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]),
        }
    }

    /// Build a shape from rows of 0/1 values.
    ///
    /// Returns `None` for an empty matrix, ragged rows, or anything larger than 4x4.
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if height > MAX_SHAPE_DIM || width == 0 || width > MAX_SHAPE_DIM {
            return None;
        }
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = v != 0;
            }
        }
        Some(Self {
            width: width as u8,
            height: height as u8,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// Whether the cell at column `x`, row `y` is filled. Out of range is empty.
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height() && self.cells[y][x]
    }

    /// Offsets of every filled cell, scanning rows top to bottom.
    pub fn filled(&self) -> CellOffsets {
        let mut out = CellOffsets::new();
        for y in 0..self.height() {
            for x in 0..self.width() {
                if self.cells[y][x] {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }

    /// Rows of the matrix, trimmed to the shape's width.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells[..self.height()]
            .iter()
            .map(move |row| &row[..self.width()])
    }

    /// Clockwise rotation, see [`rotate`].
    pub fn rotated(&self) -> Self {
        rotate(self)
    }
}

/// Rotate a shape 90° clockwise.
///
/// `rotated[i][j] = shape[h - 1 - j][i]`: reverse the row order, then transpose.
/// The result is `h` wide and `w` tall.
pub fn rotate(shape: &Shape) -> Shape {
    let w = shape.width();
    let h = shape.height();
    let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
    for (i, row) in cells.iter_mut().enumerate().take(w) {
        for (j, cell) in row.iter_mut().enumerate().take(h) {
            *cell = shape.cells[h - 1 - j][i];
        }
    }
    Shape {
        width: shape.height,
        height: shape.width,
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_rows(shape: &Shape) -> Vec<Vec<u8>> {
        shape
            .rows()
            .map(|row| row.iter().map(|&c| c as u8).collect())
            .collect()
    }

    #[test]
    fn test_every_kind_has_four_cells() {
        for kind in ShapeKind::ALL {
            assert_eq!(Shape::of_kind(kind).filled().len(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn test_spawn_matrices() {
        assert_eq!(as_rows(&Shape::of_kind(ShapeKind::I)), vec![vec![1, 1, 1, 1]]);
        assert_eq!(as_rows(&Shape::of_kind(ShapeKind::O)), vec![vec![1, 1], vec![1, 1]]);
        assert_eq!(
            as_rows(&Shape::of_kind(ShapeKind::T)),
            vec![vec![0, 1, 0], vec![1, 1, 1]]
        );
        assert_eq!(
            as_rows(&Shape::of_kind(ShapeKind::S)),
            vec![vec![0, 1, 1], vec![1, 1, 0]]
        );
        assert_eq!(
            as_rows(&Shape::of_kind(ShapeKind::Z)),
            vec![vec![1, 1, 0], vec![0, 1, 1]]
        );
        assert_eq!(
            as_rows(&Shape::of_kind(ShapeKind::L)),
            vec![vec![0, 0, 1], vec![1, 1, 1]]
        );
        assert_eq!(
            as_rows(&Shape::of_kind(ShapeKind::J)),
            vec![vec![1, 0, 0], vec![1, 1, 1]]
        );
    }

    #[test]
    fn test_rotate_t_clockwise() {
        let t = Shape::of_kind(ShapeKind::T);
        let r = rotate(&t);
        assert_eq!((r.width(), r.height()), (2, 3));
        assert_eq!(as_rows(&r), vec![vec![1, 0], vec![1, 1], vec![1, 0]]);
    }

    #[test]
    fn test_rotate_i_alternates_dimensions() {
        let i = Shape::of_kind(ShapeKind::I);
        let once = rotate(&i);
        assert_eq!((once.width(), once.height()), (1, 4));
        let twice = rotate(&once);
        assert_eq!((twice.width(), twice.height()), (4, 1));
        assert_eq!(twice, i);
    }

    #[test]
    fn test_rotate_o_is_stable() {
        let o = Shape::of_kind(ShapeKind::O);
        assert_eq!(rotate(&o), o);
    }

    #[test]
    fn test_four_rotations_are_identity() {
        for kind in ShapeKind::ALL {
            let s = Shape::of_kind(kind);
            assert_eq!(s.rotated().rotated().rotated().rotated(), s, "{:?}", kind);
        }
    }

    #[test]
    fn test_rotation_swaps_dimensions() {
        for kind in ShapeKind::ALL {
            let s = Shape::of_kind(kind);
            let r = s.rotated();
            assert_eq!(r.width(), s.height());
            assert_eq!(r.height(), s.width());
        }
    }

    #[test]
    fn test_from_rows_matches_of_kind() {
        let t = Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]).unwrap();
        assert_eq!(t, Shape::of_kind(ShapeKind::T));
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        assert!(Shape::from_rows(&[]).is_none());
        assert!(Shape::from_rows(&[&[1, 1], &[1]]).is_none());
        assert!(Shape::from_rows(&[&[1, 1, 1, 1, 1]]).is_none());
        assert!(Shape::from_rows(&[&[], &[]]).is_none());
    }

    #[test]
    fn test_is_filled_bounds() {
        let t = Shape::of_kind(ShapeKind::T);
        assert!(t.is_filled(1, 0));
        assert!(!t.is_filled(0, 0));
        assert!(t.is_filled(2, 1));
        // Outside the 3x2 box, even though the backing matrix is 4x4.
        assert!(!t.is_filled(3, 1));
        assert!(!t.is_filled(1, 2));
    }

    #[test]
    fn test_filled_offsets_order() {
        let s = Shape::of_kind(ShapeKind::S);
        assert_eq!(s.filled().as_slice(), &[(1, 0), (2, 0), (0, 1), (1, 1)]);
    }
}
