use match3_tui::core::{Game, GameSnapshot};
use match3_tui::term::{palette, Animator, GameView, Viewport};
use match3_tui::types::{Phase, ANIMATION_TICKS};

fn text(fb: &match3_tui::term::FrameBuffer) -> String {
    fb.to_text()
}

#[test]
fn term_view_renders_border_corners() {
    let mut game = Game::new(1);
    game.start_game(3, 3).unwrap();
    let view = GameView::default();

    // 3 tiles * 4 columns + border = 14 wide, 3 * 2 + border = 8 tall.
    let fb = view.render(&game.snapshot(), &[], None, Viewport::new(14, 8));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(13, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 7).unwrap().ch, '└');
    assert_eq!(fb.get(13, 7).unwrap().ch, '┘');
}

#[test]
fn term_view_paints_tiles_in_their_colors() {
    let mut game = Game::new(4);
    game.start_game(2, 2).unwrap();
    let snap = game.snapshot();
    let view = GameView::default();
    let vp = Viewport::new(10, 6);
    let fb = view.render(&snap, &[], None, vp);
    let geo = view.geometry(&snap, vp);

    for cell in &snap.cells {
        let x = geo.origin_x + cell.x as u16 * 4;
        let y = geo.origin_y + cell.y as u16 * 2;
        let glyph = fb.get(x + 3, y + 1).unwrap();
        assert_eq!(glyph.ch, '█');
        assert_eq!(glyph.style.fg, palette(cell.color));
    }
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut game = Game::new(1);
    game.start_game(3, 3).unwrap();
    let mut snap = game.snapshot();
    snap.points = 1234;

    let fb = GameView::default().render(&snap, &[], None, Viewport::new(60, 16));
    let all = text(&fb);
    assert!(all.contains("POINTS"));
    assert!(all.contains("1234"));
    assert!(all.contains("ran"));
}

#[test]
fn term_view_shows_game_over_overlay_without_tiles() {
    let mut game = Game::new(3);
    game.start_game(1, 1).unwrap();
    game.on_click(0, 0).unwrap();
    let mut animator = Animator::new();
    for _ in 0..ANIMATION_TICKS {
        animator.advance(&mut game).unwrap();
    }
    assert_eq!(game.status(), Phase::GameOver);

    let fb = GameView::default().render(&game.snapshot(), animator.frames(), None, Viewport::new(40, 12));
    let all = text(&fb);
    assert!(all.contains("GAME OVER"));
    assert!(!all.contains('█'));
}

#[test]
fn term_view_menu_before_first_game() {
    let fb = GameView::default().render(&GameSnapshot::default(), &[], None, Viewport::new(30, 12));
    let all = text(&fb);
    for label in ["1: 1x1", "2: 3x3", "3: 5x5", "4: 10x10"] {
        assert!(all.contains(label), "missing {label}");
    }
}

#[test]
fn geometry_maps_clicks_back_to_tiles() {
    let mut game = Game::new(6);
    game.start_game(5, 5).unwrap();
    let view = GameView::default();
    let geo = view.geometry(&game.snapshot(), Viewport::new(80, 24));
    assert_eq!(geo.hit(geo.origin_x, geo.origin_y), Some((0, 0)));
    assert_eq!(geo.hit(geo.origin_x + 4 * 4 + 3, geo.origin_y + 2 * 4 + 1), Some((4, 4)));
    assert_eq!(geo.hit(geo.origin_x + 20, geo.origin_y), None);
}
