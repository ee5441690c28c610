//! Core types module - shared data structures and constants
//!
//! This crate defines the plain data types shared by the game core, the input
//! mapping and the terminal renderer. Nothing in here depends on I/O.
//!
//! # Grid Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19), a 600px field with 30px blocks
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_RATE` | 30 | Target frames per second |
//! | `BASE_FALL_MS` | 500 | Gravity interval at score 0 |
//! | `MIN_FALL_MS` | 50 | Gravity interval floor |
//! | `SCORE_PER_MS` | 25 | Score needed to shave 1ms off the interval |
//! | `MAX_SPEEDUP_MS` | 450 | Cap on the score-driven reduction |
//!
//! # Examples
//!
//! ```
//! use blocktris_types::{ShapeKind, Color, GRID_WIDTH, GRID_HEIGHT};
//!
//! assert_eq!(ShapeKind::I.color(), Color::CYAN);
//! assert_eq!(ShapeKind::ALL.len(), 7);
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

/// Grid width in cells (10 columns)
pub const GRID_WIDTH: usize = 10;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: usize = 20;

/// Largest bounding box side of any shape (the I piece)
pub const MAX_SHAPE_DIM: usize = 4;

/// Number of upcoming pieces kept in the lookahead queue
pub const QUEUE_LEN: usize = 3;

/// Target frame rate of the game loop
pub const FRAME_RATE: u32 = 30;

/// Gravity interval at score 0
pub const BASE_FALL_MS: u32 = 500;

/// Gravity interval floor
pub const MIN_FALL_MS: u32 = 50;

/// Score points per millisecond of speed-up
pub const SCORE_PER_MS: u32 = 25;

/// Cap on the score-driven interval reduction
pub const MAX_SPEEDUP_MS: u32 = 450;

/// Line clear scoring table, indexed by rows cleared in one lock-in.
///
/// - 0 lines: 0 points
/// - 1 line: 100 points
/// - 2 lines: 300 points
/// - 3 lines: 500 points
/// - 4 lines: 800 points
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const YELLOW: Color = Color::new(255, 255, 0);
    pub const CYAN: Color = Color::new(0, 255, 255);
    pub const MAGENTA: Color = Color::new(255, 0, 255);
    pub const ORANGE: Color = Color::new(255, 165, 0);
    pub const GRAY: Color = Color::new(169, 169, 169);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The seven tetromino shapes
///
/// Each shape has a fixed color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Magenta, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **L**: Orange, L-shaped
/// - **J**: Blue, J-shaped (mirror of L)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    L,
    J,
}

impl ShapeKind {
    /// All shapes, in generator index order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::L,
        ShapeKind::J,
    ];

    /// Fixed color for this shape.
    pub const fn color(self) -> Color {
        match self {
            ShapeKind::I => Color::CYAN,
            ShapeKind::O => Color::YELLOW,
            ShapeKind::T => Color::MAGENTA,
            ShapeKind::S => Color::GREEN,
            ShapeKind::Z => Color::RED,
            ShapeKind::L => Color::ORANGE,
            ShapeKind::J => Color::BLUE,
        }
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(Color)`: Cell filled by a locked piece of that color
pub type Cell = Option<Color>;

/// Player actions applied to a session
///
/// Each key-down event maps to at most one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Drop piece to the lowest valid position and lock it
    HardDrop,
    /// Swap the current piece with the hold slot
    Hold,
    /// Toggle pause state
    Pause,
    /// Start a fresh session
    Restart,
}
