//! Piece module - the falling tetrimino
//!
//! A piece is a shape matrix, its color and the grid offset of the shape's
//! top-left corner. Pieces are owned by exactly one role at a time (falling,
//! queued or held) and are moved between roles, never shared.

use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::shape::{CellOffsets, Shape};
use crate::types::{Color, ShapeKind, GRID_WIDTH};

/// Spawn column for a shape: centered, rounding toward the left.
pub fn spawn_x(shape: &Shape) -> i8 {
    (GRID_WIDTH / 2) as i8 - (shape.width() / 2) as i8
}

/// A tetrimino with position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: ShapeKind,
    shape: Shape,
    color: Color,
    x: i8,
    y: i8,
}

impl Piece {
    /// Create a piece of `kind` at its spawn position.
    pub fn spawn(kind: ShapeKind) -> Self {
        let shape = Shape::of_kind(kind);
        Self {
            kind,
            shape,
            color: kind.color(),
            x: spawn_x(&shape),
            y: 0,
        }
    }

    /// Create a piece with a uniformly random shape at its spawn position.
    pub fn random(rng: &mut SimpleRng) -> Self {
        Self::spawn(rng.next_shape())
    }

    /// Same piece, moved to (`x`, `y`).
    pub fn with_position(mut self, x: i8, y: i8) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    /// Move back to the spawn position for the current shape. Rotation is kept.
    pub fn reset_to_spawn(&mut self) {
        self.x = spawn_x(&self.shape);
        self.y = 0;
    }

    /// Whether the piece overlaps a wall, the floor or a locked cell where it stands.
    pub fn collides(&self, grid: &Grid) -> bool {
        grid.collides(&self.shape, self.x, self.y)
    }

    /// Shift by (`dx`, `dy`) if the destination is free.
    ///
    /// Returns false and leaves the piece untouched when blocked; a blocked
    /// downward move is what signals lock-in.
    pub fn attempt_move(&mut self, grid: &Grid, dx: i8, dy: i8) -> bool {
        if grid.collides(&self.shape, self.x + dx, self.y + dy) {
            return false;
        }
        self.x += dx;
        self.y += dy;
        true
    }

    /// Rotate clockwise in place if the rotated shape fits at the same offset.
    ///
    /// No wall kicks: a colliding rotation is rejected outright.
    pub fn attempt_rotate(&mut self, grid: &Grid) -> bool {
        let rotated = self.shape.rotated();
        if grid.collides(&rotated, self.x, self.y) {
            return false;
        }
        self.shape = rotated;
        true
    }

    /// Move down until blocked. Returns the number of rows dropped.
    pub fn drop_to_floor(&mut self, grid: &Grid) -> u32 {
        let mut distance = 0;
        while self.attempt_move(grid, 0, 1) {
            distance += 1;
        }
        distance
    }

    /// Absolute grid coordinates of the filled cells (may include negative rows).
    pub fn cells(&self) -> CellOffsets {
        self.shape
            .filled()
            .iter()
            .map(|&(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GRID_HEIGHT;

    #[test]
    fn test_spawn_positions() {
        assert_eq!(Piece::spawn(ShapeKind::I).x(), 3);
        assert_eq!(Piece::spawn(ShapeKind::O).x(), 4);
        assert_eq!(Piece::spawn(ShapeKind::T).x(), 4);
        for kind in ShapeKind::ALL {
            let p = Piece::spawn(kind);
            assert_eq!(p.y(), 0);
            assert!(p.x() >= 0);
            assert!(p.x() as usize + p.shape().width() <= GRID_WIDTH);
            assert_eq!(p.color(), kind.color());
        }
    }

    #[test]
    fn test_attempt_move_free() {
        let grid = Grid::new();
        let mut p = Piece::spawn(ShapeKind::T);
        assert!(p.attempt_move(&grid, -1, 0));
        assert_eq!((p.x(), p.y()), (3, 0));
        assert!(p.attempt_move(&grid, 0, 1));
        assert_eq!((p.x(), p.y()), (3, 1));
    }

    #[test]
    fn test_attempt_move_blocked_by_wall() {
        let grid = Grid::new();
        let mut p = Piece::spawn(ShapeKind::O).with_position(0, 0);
        assert!(!p.attempt_move(&grid, -1, 0));
        assert_eq!(p.x(), 0);
    }

    #[test]
    fn test_attempt_move_blocked_by_cell() {
        let mut grid = Grid::new();
        grid.set(4, 2, Some(Color::RED));
        let mut p = Piece::spawn(ShapeKind::O);
        assert!(!p.attempt_move(&grid, 0, 1));
        assert_eq!(p.y(), 0);
    }

    #[test]
    fn test_attempt_rotate_changes_shape() {
        let grid = Grid::new();
        let mut p = Piece::spawn(ShapeKind::I).with_position(3, 5);
        assert!(p.attempt_rotate(&grid));
        assert_eq!((p.shape().width(), p.shape().height()), (1, 4));
    }

    #[test]
    fn test_attempt_rotate_rejected_without_kick() {
        let grid = Grid::new();
        // Vertical I hugging the right wall: rotating back to 4 wide overflows.
        let mut p = Piece::spawn(ShapeKind::I);
        assert!(p.attempt_rotate(&grid));
        p = p.with_position(9, 5);
        let before = p.clone();
        assert!(!p.attempt_rotate(&grid));
        assert_eq!(p, before);
    }

    #[test]
    fn test_attempt_rotate_near_top_uses_negative_rows() {
        let grid = Grid::new();
        let mut p = Piece::spawn(ShapeKind::I).with_position(3, -1);
        assert!(p.attempt_rotate(&grid));
        assert_eq!(p.y(), -1);
    }

    #[test]
    fn test_drop_to_floor() {
        let grid = Grid::new();
        let mut p = Piece::spawn(ShapeKind::O);
        assert_eq!(p.drop_to_floor(&grid), (GRID_HEIGHT - 2) as u32);
        assert_eq!(p.y(), (GRID_HEIGHT - 2) as i8);
        assert!(!p.attempt_move(&grid, 0, 1));
    }

    #[test]
    fn test_reset_to_spawn_keeps_rotation() {
        let grid = Grid::new();
        let mut p = Piece::spawn(ShapeKind::I).with_position(2, 10);
        assert!(p.attempt_rotate(&grid));
        p.reset_to_spawn();
        assert_eq!((p.x(), p.y()), (5, 0));
        assert_eq!(p.shape().width(), 1);
    }

    #[test]
    fn test_cells_are_absolute() {
        let p = Piece::spawn(ShapeKind::O).with_position(2, 3);
        assert_eq!(p.cells().as_slice(), &[(2, 3), (3, 3), (2, 4), (3, 4)]);
    }
}
