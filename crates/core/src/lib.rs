//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state management. It has no
//! dependencies on terminals, input devices or clocks: time arrives as a plain
//! millisecond count and player intent as [`GameAction`](types::GameAction)
//! values, so the whole state machine can be driven from tests.
//!
//! # Module Structure
//!
//! - [`rng`]: seeded LCG used for uniform shape selection
//! - [`shape`]: tetromino shape matrices and the pure clockwise [`rotate`]
//! - [`grid`]: 10x20 playfield with collision testing and line clearing
//! - [`piece`]: falling piece movement and rotation attempts
//! - [`queue`]: 3-piece lookahead queue and the hold slot
//! - [`scoring`]: line clear points and the score-driven fall interval
//! - [`session`]: the state machine tying everything together
//!
//! # Game Rules
//!
//! - Pieces are chosen uniformly at random, one independent draw per piece
//! - Rotation is clockwise only, with no wall kicks
//! - Gravity starts at 500ms per row and speeds up by 1ms per 25 points, down to 50ms
//! - Clearing 1/2/3/4 rows scores 100/300/500/800
//! - Hold swaps once per piece; the lock clears when a piece locks
//! - The game ends when a newly activated piece collides at its spawn position
//!
//! # Example
//!
//! ```
//! use blocktris_core::{Phase, Session};
//! use blocktris_core::types::GameAction;
//!
//! let mut session = Session::new(12345);
//!
//! session.apply_action(GameAction::MoveRight);
//! session.apply_action(GameAction::Rotate);
//! session.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(session.grid().filled_count(), 4);
//! assert_eq!(session.phase(), Phase::Falling);
//! ```

pub mod grid;
pub mod piece;
pub mod queue;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shape;

pub use blocktris_types as types;

// Re-export commonly used types for convenience
pub use grid::Grid;
pub use piece::Piece;
pub use queue::{HoldSlot, PieceQueue};
pub use rng::SimpleRng;
pub use scoring::{fall_interval_ms, line_clear_score};
pub use session::{LockEvent, Phase, Session};
pub use shape::{rotate, Shape};
