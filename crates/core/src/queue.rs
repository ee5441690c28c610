//! Queue module - upcoming pieces and the hold slot
//!
//! The lookahead queue always holds exactly [`QUEUE_LEN`] pieces: popping the
//! front immediately appends a freshly generated piece at the back. The hold
//! slot keeps at most one piece and allows a single swap per falling piece.

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::types::QUEUE_LEN;

/// Fixed-length lookahead of upcoming pieces
#[derive(Debug, Clone)]
pub struct PieceQueue {
    pieces: ArrayVec<Piece, QUEUE_LEN>,
    rng: SimpleRng,
}

impl PieceQueue {
    /// Create a queue of freshly generated pieces from `seed`.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let mut pieces = ArrayVec::new();
        while !pieces.is_full() {
            pieces.push(Piece::random(&mut rng));
        }
        Self { pieces, rng }
    }

    /// Remove and return the front piece, refilling the back.
    pub fn pop_next(&mut self) -> Piece {
        let next = self.pieces.remove(0);
        self.pieces.push(Piece::random(&mut self.rng));
        next
    }

    /// Upcoming pieces, front first.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Current generator state (for restarting with a continued sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

/// Single-piece hold slot with its once-per-piece lock
#[derive(Debug, Clone, Default)]
pub struct HoldSlot {
    piece: Option<Piece>,
    locked: bool,
}

impl HoldSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Re-enable holding. Called when a piece locks into the grid.
    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Set `current` aside.
    ///
    /// With an empty slot, `current` is stored and replaced by the next queued
    /// piece; otherwise it swaps with the held piece. The piece that becomes
    /// current is moved to its spawn position. Does nothing and returns false
    /// while locked.
    pub fn hold(&mut self, current: &mut Piece, queue: &mut PieceQueue) -> bool {
        if self.locked {
            return false;
        }

        let incoming = match self.piece.take() {
            Some(held) => held,
            None => queue.pop_next(),
        };
        let outgoing = std::mem::replace(current, incoming);
        current.reset_to_spawn();
        self.piece = Some(outgoing);
        self.locked = true;

        true
    }
}
