//! Grid module - the playfield of locked cells
//!
//! The grid is 10 columns by 20 rows, stored as fixed-size rows so the row
//! count and row width can never drift. Coordinates are (x, y) with x growing
//! to the right and y growing downwards; row 0 is the top row.
//!
//! Rows above the grid (negative y) are treated as open space: a piece may
//! overlap them while spawning or rotating near the top.

use crate::shape::Shape;
use crate::types::{Cell, Color, GRID_HEIGHT, GRID_WIDTH};

/// One row of cells, left to right.
pub type Row = [Cell; GRID_WIDTH];

const EMPTY_ROW: Row = [None; GRID_WIDTH];

/// The playfield - 10 columns x 20 rows of optional colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: [Row; GRID_HEIGHT],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            rows: [EMPTY_ROW; GRID_HEIGHT],
        }
    }

    /// Build a grid from explicit rows (top row first).
    pub fn from_rows(rows: [Row; GRID_HEIGHT]) -> Self {
        Self { rows }
    }

    pub fn width(&self) -> usize {
        GRID_WIDTH
    }

    pub fn height(&self) -> usize {
        GRID_HEIGHT
    }

    #[inline(always)]
    fn in_bounds(x: i8, y: i8) -> bool {
        x >= 0 && (x as usize) < GRID_WIDTH && y >= 0 && (y as usize) < GRID_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        if !Self::in_bounds(x, y) {
            return None;
        }
        Some(self.rows[y as usize][x as usize])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        if !Self::in_bounds(x, y) {
            return false;
        }
        self.rows[y as usize][x as usize] = cell;
        true
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Rows top to bottom, for rendering.
    pub fn rows(&self) -> &[Row; GRID_HEIGHT] {
        &self.rows
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows
            .get(y)
            .map_or(false, |row| row.iter().all(|cell| cell.is_some()))
    }

    /// Whether `shape` placed with its top-left corner at (`x`, `y`) would hit
    /// a wall, the floor, or a locked cell.
    ///
    /// Cells above the top edge only collide with the side walls.
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape.filled().iter().any(|&(dx, dy)| {
            let px = x + dx;
            let py = y + dy;
            if px < 0 || px as usize >= GRID_WIDTH || py as isize >= GRID_HEIGHT as isize {
                return true;
            }
            py >= 0 && self.is_occupied(px, py)
        })
    }

    /// Write `color` into every cell covered by `shape` at (`x`, `y`).
    ///
    /// Callers check [`Grid::collides`] first; cells that land above the grid are dropped.
    pub fn place(&mut self, shape: &Shape, color: Color, x: i8, y: i8) {
        for &(dx, dy) in shape.filled().iter() {
            self.set(x + dx, y + dy, Some(color));
        }
    }

    /// Remove every full row, shifting the rows above it down and refilling the
    /// top with empty rows. Returns the number of rows removed.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut write_y = GRID_HEIGHT;
        let mut cleared = 0;

        // Scan from bottom to top, compacting surviving rows downwards.
        for read_y in (0..GRID_HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                self.rows[write_y] = self.rows[read_y];
            }
        }

        debug_assert_eq!(write_y, cleared, "row count drifted during line clear");
        for row in &mut self.rows[..write_y] {
            *row = EMPTY_ROW;
        }

        cleared
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.rows = [EMPTY_ROW; GRID_HEIGHT];
    }

    /// Number of occupied cells.
    pub fn filled_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_some())
            .count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
