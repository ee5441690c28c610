//! Session module - the game state machine
//!
//! A [`Session`] owns everything one game needs: the grid, the falling piece,
//! the lookahead queue, the hold slot, the score and the gravity timer. It is
//! driven by two kinds of input:
//!
//! - [`Session::tick`] with the milliseconds elapsed since the previous frame
//! - player actions via [`Session::apply_action`] (or the individual methods)
//!
//! The falling piece locks when a downward step is blocked, either by gravity
//! or by a hard drop. Lock-in commits the piece, clears rows, scores, speeds up
//! gravity and activates the next queued piece. If that piece collides at its
//! spawn position the session enters [`Phase::GameOver`] and ignores all
//! further updates.

use crate::grid::Grid;
use crate::piece::Piece;
use crate::queue::{HoldSlot, PieceQueue};
use crate::scoring::{fall_interval_ms, line_clear_score};
use crate::types::GameAction;

/// State machine phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// A piece is active and descending.
    Falling,
    /// The last spawned piece collided at its spawn position. Terminal.
    GameOver,
}

/// What a single lock-in did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_delta: u32,
    /// Phase after the next piece was activated.
    pub phase: Phase,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    current: Piece,
    queue: PieceQueue,
    hold: HoldSlot,
    score: u32,
    lines: u32,
    fall_interval_ms: u32,
    fall_timer_ms: u32,
    paused: bool,
    phase: Phase,
}

impl Session {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_grid(seed, Grid::new())
    }

    /// Create a game on a pre-filled grid.
    ///
    /// If the first piece already collides at spawn the session starts in
    /// [`Phase::GameOver`].
    pub fn with_grid(seed: u32, grid: Grid) -> Self {
        let mut queue = PieceQueue::new(seed);
        let current = queue.pop_next();
        let phase = if current.collides(&grid) {
            Phase::GameOver
        } else {
            Phase::Falling
        };

        Self {
            grid,
            current,
            queue,
            hold: HoldSlot::new(),
            score: 0,
            lines: 0,
            fall_interval_ms: fall_interval_ms(0),
            fall_timer_ms: 0,
            paused: false,
            phase,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    /// Upcoming pieces, next first.
    pub fn queue(&self) -> &[Piece] {
        self.queue.pieces()
    }

    pub fn held(&self) -> Option<&Piece> {
        self.hold.piece()
    }

    pub fn can_hold(&self) -> bool {
        !self.hold.is_locked()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn fall_timer_ms(&self) -> u32 {
        self.fall_timer_ms
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Generator state, usable to seed a follow-up game.
    pub fn seed(&self) -> u32 {
        self.queue.seed()
    }

    fn playable(&self) -> bool {
        self.phase == Phase::Falling && !self.paused
    }

    /// Advance the gravity timer by `elapsed_ms`.
    ///
    /// Once the accumulated time reaches the fall interval the piece steps down
    /// one row, or locks if it cannot. The timer resets either way.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<LockEvent> {
        if !self.playable() {
            return None;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms < self.fall_interval_ms {
            return None;
        }

        self.fall_timer_ms = 0;
        if self.current.attempt_move(&self.grid, 0, 1) {
            None
        } else {
            Some(self.lock_in())
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.playable() && self.current.attempt_move(&self.grid, -1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.playable() && self.current.attempt_move(&self.grid, 1, 0)
    }

    /// One manual row down. A blocked soft drop does not lock; gravity does.
    pub fn soft_drop(&mut self) -> bool {
        self.playable() && self.current.attempt_move(&self.grid, 0, 1)
    }

    pub fn rotate(&mut self) -> bool {
        self.playable() && self.current.attempt_rotate(&self.grid)
    }

    /// Drop to the lowest free position and lock immediately.
    pub fn hard_drop(&mut self) -> Option<LockEvent> {
        if !self.playable() {
            return None;
        }
        self.current.drop_to_floor(&self.grid);
        Some(self.lock_in())
    }

    /// Swap the falling piece with the hold slot (once per piece).
    ///
    /// If the piece that comes out collides at its spawn position the game is over.
    pub fn hold(&mut self) -> bool {
        if !self.playable() {
            return false;
        }
        if !self.hold.hold(&mut self.current, &mut self.queue) {
            return false;
        }
        if self.current.collides(&self.grid) {
            self.phase = Phase::GameOver;
        }
        true
    }

    /// Commit the falling piece to the grid and activate the next one.
    ///
    /// Clears full rows, adds their score, recomputes the fall interval,
    /// re-enables hold, and ends the game if the new piece cannot spawn.
    pub fn lock_in(&mut self) -> LockEvent {
        if self.phase == Phase::GameOver {
            return LockEvent {
                lines_cleared: 0,
                score_delta: 0,
                phase: Phase::GameOver,
            };
        }

        let next = self.queue.pop_next();
        let locked = std::mem::replace(&mut self.current, next);
        self.grid
            .place(locked.shape(), locked.color(), locked.x(), locked.y());

        let cleared = self.grid.clear_full_rows();
        let score_delta = line_clear_score(cleared);
        self.score = self.score.saturating_add(score_delta);
        self.lines = self.lines.saturating_add(cleared as u32);
        self.fall_interval_ms = fall_interval_ms(self.score);
        self.fall_timer_ms = 0;
        self.hold.unlock();

        if self.current.collides(&self.grid) {
            self.phase = Phase::GameOver;
        }

        LockEvent {
            lines_cleared: cleared as u32,
            score_delta,
            phase: self.phase,
        }
    }

    /// Row the falling piece would land on if hard-dropped now.
    pub fn ghost_y(&self) -> i8 {
        let mut ghost = self.current.clone();
        ghost.drop_to_floor(&self.grid);
        ghost.y()
    }

    pub fn toggle_pause(&mut self) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Start over with a fresh grid, continuing the piece sequence.
    pub fn restart(&mut self) {
        *self = Self::new(self.seed());
    }

    /// Apply a game action. Returns whether it changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::HardDrop => self.hard_drop().is_some(),
            GameAction::Hold => self.hold(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1)
    }
}
