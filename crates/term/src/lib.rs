//! Terminal rendering for blocktris.
//!
//! A small, game-oriented rendering layer: the session is drawn into a plain
//! framebuffer, which is then diffed against the previous frame and flushed to
//! the terminal with crossterm. No widget toolkit is involved.
//!
//! Pieces of the pipeline:
//! - [`GameView`] maps a `Session` to a [`FrameBuffer`] (pure, testable)
//! - [`TerminalRenderer`] owns the terminal and writes changed cells
//! - [`FramePacer`] keeps the loop at a fixed frame rate

pub mod fb;
pub mod game_view;
pub mod pacer;
pub mod renderer;

pub use blocktris_core as core;
pub use blocktris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{AnchorY, GameView, Viewport};
pub use pacer::FramePacer;
pub use renderer::{encode_frame, TerminalRenderer};
