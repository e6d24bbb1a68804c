//! Terminal match-3 runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `match3-term`.
//! Configuration comes from `MATCH3_*` environment variables.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use match3_tui::core::{Game, GameSnapshot, SimpleRng};
use match3_tui::input::{handle_key_event, handle_mouse_event, should_quit, Cursor};
use match3_tui::term::{Animator, FrameBuffer, GameView, TerminalRenderer, Viewport};
use match3_tui::types::{PlayerCommand, BOARD_VARIANTS, TICK_MS};
use match3_tui::{GameConfig, PhaseLog};

fn main() -> Result<()> {
    let config = GameConfig::from_env();

    let mut game = Game::with_options(SimpleRng::new(config.seed), config.options())?;
    if let Some(path) = config.log_path.as_deref() {
        // An unwritable log path only disables logging.
        if let Ok(log) = PhaseLog::open(path) {
            log.attach(&mut game);
        }
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, game: &mut Game, config: &GameConfig) -> Result<()> {
    let view = GameView::default().with_cell_side(config.cell_side);
    let mut animator = Animator::new();
    let mut cursor = Cursor::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut size = (config.width, config.height);

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        let geometry = view.render_into(
            &snap,
            animator.frames(),
            Some((cursor.x, cursor.y)),
            Viewport::new(w, h),
            &mut fb,
        );
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let command = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    handle_key_event(key)
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, &geometry),
                Event::Resize(..) => {
                    term.invalidate();
                    None
                }
                _ => None,
            };

            if let Some(command) = command {
                match command {
                    PlayerCommand::MoveCursor(dir) => cursor.step(dir, game.width(), game.height()),
                    PlayerCommand::ClickCursor => {
                        if game.width() > 0 {
                            game.on_click(cursor.x, cursor.y)?;
                        }
                    }
                    PlayerCommand::ClickAt { x, y } => {
                        cursor.set(x, y);
                        game.on_click(x, y)?;
                    }
                    PlayerCommand::StartVariant(index) => {
                        if let Some(variant) = BOARD_VARIANTS.get(index) {
                            size = (variant.width, variant.height);
                            start(game, &mut animator, &mut cursor, size)?;
                        }
                    }
                    PlayerCommand::Restart => start(game, &mut animator, &mut cursor, size)?,
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            animator.advance(game)?;
        }
    }
}

fn start(game: &mut Game, animator: &mut Animator, cursor: &mut Cursor, (w, h): (usize, usize)) -> Result<()> {
    game.start_game(w, h)?;
    animator.reset();
    cursor.clamp(w, h);
    Ok(())
}
