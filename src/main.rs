//! Terminal blocktris runner (default binary).
//!
//! Runs a fixed-rate frame loop: render, wait for the frame deadline, drain
//! pending input, then apply gravity for the time that passed. Uses crossterm
//! for input and a framebuffer-based renderer.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use crossterm::event;

use blocktris::core::Session;
use blocktris::input::{action_for_event, InputEvent};
use blocktris::term::{FrameBuffer, FramePacer, GameView, TerminalRenderer, Viewport};
use blocktris::types::{GameAction, FRAME_RATE};

/// How long the final frame stays on screen after the game ends.
const GAME_OVER_LINGER: Duration = Duration::from_millis(1500);

/// Falling-block puzzle game for the terminal.
#[derive(Debug, Parser)]
#[command(name = "blocktris", version)]
struct Args {
    /// Seed for the piece sequence. Defaults to one derived from the clock.
    #[arg(long, value_name = "N")]
    seed: Option<u32>,

    /// Target frames per second.
    #[arg(long, default_value_t = FRAME_RATE, value_name = "RATE")]
    fps: u32,
}

struct Outcome {
    score: u32,
    lines: u32,
    seed: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(clock_seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed, args.fps);

    // Always try to restore terminal state.
    let restored = term.exit();
    let outcome = result?;
    restored?;

    println!(
        "score {}  lines {}  seed {}",
        outcome.score, outcome.lines, outcome.seed
    );
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, seed: u32, fps: u32) -> Result<Outcome> {
    let mut session = Session::new(seed);
    let mut game_seed = seed;

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut pacer = FramePacer::new(fps, Instant::now());

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        if session.is_game_over() {
            std::thread::sleep(GAME_OVER_LINGER);
            break;
        }

        pacer.wait();

        // Drain everything that arrived during the frame.
        while event::poll(Duration::ZERO)? {
            match action_for_event(&event::read()?) {
                Some(InputEvent::Quit) => {
                    return Ok(Outcome {
                        score: session.score(),
                        lines: session.lines(),
                        seed: game_seed,
                    });
                }
                Some(InputEvent::Resize) => term.invalidate(),
                Some(InputEvent::Action(action)) => {
                    if action == GameAction::Restart {
                        game_seed = session.seed();
                    }
                    session.apply_action(action);
                }
                None => {}
            }
        }

        // Gravity.
        let elapsed = pacer.tick(Instant::now());
        session.tick(elapsed);
    }

    Ok(Outcome {
        score: session.score(),
        lines: session.lines(),
        seed: game_seed,
    })
}
