use blocktris::core::{Grid, Session};
use blocktris::term::{AnchorY, FrameBuffer, GameView, Viewport};
use blocktris::types::{Color, GameAction, GRID_WIDTH};

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let session = Session::new(1);
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // grid pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let fb = view.render(&session, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut grid = Grid::new();
    grid.set(0, 19, Some(Color::CYAN));
    let session = Session::with_grid(1, grid);

    let view = GameView::default();
    let fb = view.render(&session, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let x0 = 1;
    let y0 = 1 + 19;
    for x in [x0, x0 + 1] {
        let cell = fb.get(x, y0).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, Color::CYAN);
    }
    // Its right-hand neighbour is an empty cell.
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_draws_falling_piece_and_ghost() {
    let session = Session::new(1);
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&session, Viewport::new(22, 22));

    let piece = session.current();
    for (x, y) in piece.cells() {
        let cell = fb.get(1 + x as u16 * 2, 1 + y as u16).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, piece.color());
    }

    let dy = session.ghost_y() - piece.y();
    assert!(dy > 0);
    for (x, y) in piece.cells() {
        let cell = fb.get(1 + x as u16 * 2, 1 + (y + dy) as u16).unwrap();
        assert_eq!(cell.ch, '░');
        assert!(cell.style.dim);
    }
}

#[test]
fn term_view_draws_side_panels_when_wide_enough() {
    let mut session = Session::new(1);
    assert!(session.hold());

    let view = GameView::default();
    // Wider than the 22x22 grid frame to allow both panels.
    let fb = view.render(&session, Viewport::new(60, 22));
    let all = screen_text(&fb);

    for label in ["HOLD", "SCORE", "LINES", "SPEED", "NEXT", "500 ms"] {
        assert!(all.contains(label), "missing {label}");
    }

    // Held piece is drawn under the HOLD label in its own color.
    let held = session.held().unwrap().color();
    let hold_color_seen = (0..fb.height())
        .flat_map(|y| (0..19).map(move |x| (x, y)))
        .any(|(x, y)| {
            let cell = fb.get(x, y).unwrap();
            cell.ch == '█' && cell.style.fg == held
        });
    assert!(hold_color_seen);
}

#[test]
fn term_view_skips_panels_when_narrow() {
    let session = Session::new(1);
    let fb = GameView::default().render(&session, Viewport::new(22, 22));
    let all = screen_text(&fb);
    assert!(!all.contains("SCORE"));
    assert!(!all.contains("HOLD"));
}

#[test]
fn term_view_overlays_pause_and_game_over() {
    let view = GameView::default();

    let mut paused = Session::new(1);
    paused.apply_action(GameAction::Pause);
    let fb = view.render(&paused, Viewport::new(60, 22));
    assert!(screen_text(&fb).contains("PAUSED"));

    let mut grid = Grid::new();
    for x in 0..GRID_WIDTH as i8 {
        grid.set(x, 0, Some(Color::GRAY));
    }
    let over = Session::with_grid(1, grid);
    let fb = view.render(&over, Viewport::new(60, 22));
    let text = screen_text(&fb);
    assert!(text.contains("GAME OVER"));
    assert!(!text.contains("PAUSED"));
}
