use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use match3_tui::core::{
    AnimationTarget, Board, ClickOutcome, Game, GameError, GameOptions, RandomSource, SimpleRng,
};
use match3_tui::term::Animator;
use match3_tui::types::{Phase, ANIMATION_TICKS};

/// Replays fixed values, then zeros.
struct Script(VecDeque<u32>);

impl RandomSource for Script {
    fn next_u32(&mut self) -> u32 {
        self.0.pop_front().unwrap_or(0)
    }
}

fn scripted(width: usize, height: usize, colors: &[u8], script: &[u32]) -> Game<Script> {
    let board = Board::from_colors(width, height, colors).unwrap();
    let rng = Script(script.iter().copied().collect());
    Game::from_board(board, rng, GameOptions::default()).unwrap()
}

fn drain<R: RandomSource>(game: &mut Game<R>, animator: &mut Animator) {
    for _ in 0..ANIMATION_TICKS * 64 {
        if !game.status().is_animation() {
            return;
        }
        animator.advance(game).unwrap();
    }
    panic!("animations never settled");
}

#[test]
fn completing_a_row_of_three_scores_three() {
    let mut game = scripted(3, 1, &[1, 2, 1], &[0]);
    assert_eq!(
        game.on_click(1, 0),
        Ok(ClickOutcome::Matched {
            cleared: 3,
            points: 3
        })
    );
    assert_eq!(game.status(), Phase::AnimationCellsDisappearing);
    for x in 0..3 {
        assert_eq!(
            game.animation_target(x, 0),
            Ok(Some(AnimationTarget::fade_out()))
        );
    }
}

#[test]
fn clicked_tiles_score_double() {
    // Click both ends without matching first: [1,2,1] -> [3,2,1] -> [3,2,4].
    // Then recolor them back: left 3 -> 1, right 4 -> 1, each still no run.
    // Finally the middle 2 -> 1 completes a row of three clicked tiles.
    //
    // Allowed lists (excluding current): for 1: [2,3,4,5]; for 3: [1,2,4,5];
    // for 4: [1,2,3,5]; for 2: [1,3,4,5].
    let mut game = scripted(3, 1, &[1, 2, 1], &[1, 2, 0, 0]);
    assert_eq!(game.on_click(0, 0), Ok(ClickOutcome::Recolored));
    assert_eq!(game.on_click(2, 0), Ok(ClickOutcome::Recolored));
    assert_eq!(game.board().to_colors(), vec![vec![3, 2, 4]]);
    assert_eq!(game.on_click(0, 0), Ok(ClickOutcome::Recolored));
    assert_eq!(game.on_click(2, 0), Ok(ClickOutcome::Recolored));
    assert_eq!(game.board().to_colors(), vec![vec![1, 2, 1]]);

    // Middle tile: first click scores as unclicked (1) + two clicked ends (2 + 2).
    assert_eq!(
        game.on_click(1, 0),
        Ok(ClickOutcome::Matched {
            cleared: 3,
            points: 5
        })
    );
    assert_eq!(game.points(), 5);
}

#[test]
fn full_cycle_emits_phase_events_in_order() {
    // Refill with colors 1, 2, 3 so nothing cascades.
    let mut game = scripted(3, 1, &[1, 2, 1], &[0, 0, 1, 2]);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    game.subscribe(move |change| sink.borrow_mut().push((change.to, change.points)));

    let mut animator = Animator::new();
    game.on_click(1, 0).unwrap();
    drain(&mut game, &mut animator);

    assert_eq!(game.status(), Phase::Ran);
    assert_eq!(game.board().to_colors(), vec![vec![1, 2, 3]]);
    assert_eq!(
        *seen.borrow(),
        vec![
            (Phase::AnimationCellsDisappearing, 3),
            (Phase::AnimationShift, 3),
            (Phase::Ran, 3),
        ]
    );
    assert_eq!(game.on_click(0, 0).map(|o| o != ClickOutcome::Ignored), Ok(true));
}

#[test]
fn clicks_are_ignored_until_the_phase_settles() {
    let mut game = scripted(3, 1, &[1, 2, 1], &[0, 0, 1, 2]);
    let mut animator = Animator::new();
    game.on_click(1, 0).unwrap();

    for _ in 0..ANIMATION_TICKS - 1 {
        animator.advance(&mut game).unwrap();
        assert_eq!(game.on_click(0, 0), Ok(ClickOutcome::Ignored));
        assert_eq!(game.status(), Phase::AnimationCellsDisappearing);
    }
    animator.advance(&mut game).unwrap();
    assert_eq!(game.status(), Phase::AnimationShift);
}

#[test]
fn single_tile_board_ends_after_one_click() {
    let mut game = Game::new(2024);
    game.start_game(1, 1).unwrap();
    assert_eq!(game.on_click(0, 0), Ok(ClickOutcome::GameOver));
    assert_eq!(game.status(), Phase::AnimationGameOver);

    let mut animator = Animator::new();
    drain(&mut game, &mut animator);
    assert_eq!(game.status(), Phase::GameOver);
}

#[test]
fn game_over_only_when_every_tile_is_clicked() {
    for seed in 1..8 {
        let mut game = Game::new(seed);
        game.start_game(3, 3).unwrap();
        let mut animator = Animator::new();

        for step in 0..600 {
            let (x, y) = (step % 3, (step / 3) % 3);
            let outcome = game.on_click(x, y).unwrap();
            if outcome == ClickOutcome::GameOver {
                assert!(game.board().cells().iter().all(|c| c.clicked));
                break;
            }
            assert_ne!(game.status(), Phase::AnimationGameOver);
            drain(&mut game, &mut animator);
            if game.status() == Phase::Ran {
                // Back in play means somebody is still unclicked.
                assert!(!game.board().cells().iter().all(|c| c.clicked));
            }
        }
    }
}

#[test]
fn invalid_start_keeps_previous_game() {
    let mut game = Game::new(8);
    game.start_game(3, 3).unwrap();
    let before = game.snapshot();
    assert_eq!(
        game.start_game(3, 0),
        Err(GameError::InvalidDimensions {
            width: 3,
            height: 0
        })
    );
    assert_eq!(game.snapshot(), before);
}

#[test]
fn restart_abandons_animation_and_score() {
    let mut game = scripted(3, 1, &[1, 2, 1], &[0]);
    game.on_click(1, 0).unwrap();
    assert!(game.points() > 0);

    game.start_game(5, 5).unwrap();
    assert_eq!(game.status(), Phase::Ran);
    assert_eq!(game.points(), 0);
    assert_eq!(game.outstanding_animations(), 0);
    assert!(!game.is_animating());
}

#[test]
fn same_seed_same_game() {
    let play = |seed| {
        let mut game = Game::new(seed);
        game.start_game(5, 5).unwrap();
        let mut animator = Animator::new();
        for i in 0..40 {
            game.on_click(i % 5, (i * 3) % 5).unwrap();
            drain(&mut game, &mut animator);
        }
        (game.points(), game.board().to_colors())
    };
    assert_eq!(play(99), play(99));
}

#[test]
fn with_options_rejects_too_few_colors() {
    let options = GameOptions {
        color_count: 2,
        ..GameOptions::default()
    };
    assert!(matches!(
        Game::with_options(SimpleRng::new(1), options),
        Err(GameError::InvalidColorCount(2))
    ));
}
