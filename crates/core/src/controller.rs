//! Game controller - the phase state machine
//!
//! [`Game`] owns the board, the per-game [`GameState`] and the random source,
//! and is the only thing that mutates them. A renderer drives it through three
//! kinds of calls:
//!
//! - player input: [`Game::start_game`], [`Game::on_click`]
//! - animation protocol: [`Game::step_animation`], [`Game::report_animation_complete`]
//! - observation: [`Game::cell`], [`Game::status`], [`Game::snapshot`], [`Game::subscribe`]
//!
//! Animated phases only advance once every cell enabled for the phase has
//! reported completion. Nothing here measures time.

use crate::animation::{AnimationBarrier, AnimationFrame, AnimationTarget, Range};
use crate::board::Board;
use crate::cascade::{resolve_cascade, resolve_from};
use crate::error::GameError;
use crate::game_state::GameState;
use crate::rng::{pick_color, RandomSource, SimpleRng};
use crate::shift::shift_columns;
use crate::snapshot::{CellView, GameSnapshot};
use crate::types::{
    Phase, PhaseChange, DEFAULT_CELL_SIDE, DEFAULT_COLOR_COUNT, FLY_OFF_MARGIN, MAX_COLORS,
    MIN_COLOR_COUNT,
};

/// Tunables of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    pub color_count: u8,
    /// Display size of a cell in pixels.
    pub cell_side: i32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            color_count: DEFAULT_COLOR_COUNT,
            cell_side: DEFAULT_CELL_SIDE,
        }
    }
}

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Not accepted in the current phase (or while animating).
    Ignored,
    /// Tile recolored, nothing matched.
    Recolored,
    /// Runs found; the board entered `AnimationCellsDisappearing`.
    Matched { cleared: usize, points: u32 },
    /// Every tile is clicked; the board entered `AnimationGameOver`.
    GameOver,
}

type Listener = Box<dyn FnMut(&PhaseChange)>;

pub struct Game<R: RandomSource = SimpleRng> {
    state: GameState,
    board: Board,
    rng: R,
    color_count: u8,
    barrier: AnimationBarrier,
    listeners: Vec<Listener>,
}

impl Game<SimpleRng> {
    /// Create a stopped game with default options and the given RNG seed.
    pub fn new(seed: u32) -> Self {
        Self {
            state: GameState::default(),
            board: Board::default(),
            rng: SimpleRng::new(seed),
            color_count: DEFAULT_COLOR_COUNT,
            barrier: AnimationBarrier::default(),
            listeners: Vec::new(),
        }
    }
}

impl<R: RandomSource> Game<R> {
    /// Create a stopped game.
    pub fn with_options(rng: R, options: GameOptions) -> Result<Self, GameError> {
        if !(MIN_COLOR_COUNT..=MAX_COLORS).contains(&options.color_count) {
            return Err(GameError::InvalidColorCount(options.color_count));
        }
        Ok(Self {
            state: GameState::new(options.cell_side),
            board: Board::default(),
            rng,
            color_count: options.color_count,
            barrier: AnimationBarrier::default(),
            listeners: Vec::new(),
        })
    }

    /// Create a running game on a prepared board.
    ///
    /// The layout is taken as is: existing runs are not resolved until the
    /// next click.
    pub fn from_board(board: Board, rng: R, options: GameOptions) -> Result<Self, GameError> {
        let mut game = Self::with_options(rng, options)?;
        game.state.reset(board.width(), board.height());
        game.board = board;
        game.board.stop_animations();
        game.state.status = Phase::Ran;
        Ok(game)
    }

    /// Start a new `width x height` game, abandoning whatever was in flight.
    ///
    /// Zero dimensions are rejected before anything changes.
    pub fn start_game(&mut self, width: usize, height: usize) -> Result<(), GameError> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidDimensions { width, height });
        }
        let board = Board::seed(width, height, self.color_count, &mut self.rng)?;

        self.board = board;
        self.state.reset(width, height);
        self.barrier.reset();
        self.transition(Phase::Ran);
        Ok(())
    }

    /// Register a phase-change listener.
    ///
    /// Listeners are called in registration order for every transition.
    pub fn subscribe(&mut self, listener: impl FnMut(&PhaseChange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn status(&self) -> Phase {
        self.state.status
    }

    pub fn points(&self) -> u32 {
        self.state.points
    }

    pub fn width(&self) -> usize {
        self.state.width
    }

    pub fn height(&self) -> usize {
        self.state.height
    }

    pub fn cell_side(&self) -> i32 {
        self.state.cell_side
    }

    pub fn color_count(&self) -> u8 {
        self.color_count
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn cell(&self, x: usize, y: usize) -> Result<CellView, GameError> {
        self.board.get(x, y).map(CellView::from)
    }

    /// Any cell has an enabled animation.
    pub fn is_animating(&self) -> bool {
        self.board.is_animating()
    }

    /// Cells still expected to report in the current phase.
    pub fn outstanding_animations(&self) -> usize {
        self.barrier.outstanding()
    }

    /// The animation target of an enabled cell.
    pub fn animation_target(&self, x: usize, y: usize) -> Result<Option<AnimationTarget>, GameError> {
        let cell = self.board.get(x, y)?;
        Ok(cell.animation.enabled.then_some(cell.animation.target))
    }

    /// Advance a cell's animation by one frame.
    ///
    /// Returns `None` if the cell is not animating. When the returned frame is
    /// `finished` the renderer should call [`Game::report_animation_complete`].
    pub fn step_animation(&mut self, x: usize, y: usize) -> Result<Option<AnimationFrame>, GameError> {
        Ok(self.board.get_mut(x, y)?.animation.step())
    }

    /// A cell finished its animation.
    ///
    /// Returns false if the cell was not animating. The phase advances when
    /// the last cell of the phase reports.
    pub fn report_animation_complete(&mut self, x: usize, y: usize) -> Result<bool, GameError> {
        let idx = self.board.index_of(x, y)?;
        let Some(cell) = self.board.cell_mut(idx) else {
            return Ok(false);
        };
        if !cell.animation.enabled {
            return Ok(false);
        }
        cell.animation.stop();

        if self.barrier.complete(idx) && self.barrier.is_released() {
            self.advance_after_animation()?;
        }
        Ok(true)
    }

    /// Player click on `(x, y)`.
    ///
    /// Only accepted in `Ran` with no animation playing; otherwise returns
    /// `ClickOutcome::Ignored`. Coordinates off the board are an error.
    pub fn on_click(&mut self, x: usize, y: usize) -> Result<ClickOutcome, GameError> {
        if self.state.status != Phase::Ran || self.board.is_animating() {
            return Ok(ClickOutcome::Ignored);
        }
        let idx = self.board.index_of(x, y)?;
        let current = self.board.cells()[idx].color;
        let color = pick_color(&mut self.rng, self.color_count, &[current])?;
        self.board.cells_mut()[idx].color = color;

        let before = self.state.points;
        let matched = resolve_from(
            &mut self.board,
            &mut self.state.pending,
            idx,
            &mut self.state.points,
        );

        // Recorded after scoring: a first click scores as unclicked.
        if !self.state.pending.contains(idx) {
            self.board.cells_mut()[idx].clicked = true;
        }

        if matched {
            let outcome = ClickOutcome::Matched {
                cleared: self.state.pending.len(),
                points: self.state.points - before,
            };
            self.enter_cells_disappearing()?;
            return Ok(outcome);
        }

        if self.board.all_clicked() {
            self.enter_game_over_animation()?;
            return Ok(ClickOutcome::GameOver);
        }

        Ok(ClickOutcome::Recolored)
    }

    /// Snapshot for renderers.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.state.width;
        out.height = self.state.height;
        out.points = self.state.points;
        out.phase = self.state.status;
        out.cells.clear();
        out.cells
            .extend(self.board.cells().iter().map(CellView::from));
    }

    fn transition(&mut self, to: Phase) {
        let change = PhaseChange {
            from: self.state.status,
            to,
            points: self.state.points,
        };
        self.state.status = to;
        for listener in &mut self.listeners {
            listener(&change);
        }
    }

    fn advance_after_animation(&mut self) -> Result<(), GameError> {
        match self.state.status {
            Phase::AnimationCellsDisappearing => self.enter_shift(),
            Phase::AnimationShift => self.settle(),
            Phase::AnimationGameOver => {
                self.transition(Phase::GameOver);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn enter_cells_disappearing(&mut self) -> Result<(), GameError> {
        for idx in self.state.pending.iter() {
            if let Some(cell) = self.board.cell_mut(idx) {
                cell.animation.start(AnimationTarget::fade_out());
            }
        }
        self.barrier
            .arm(self.board.len(), self.state.pending.iter());
        self.transition(Phase::AnimationCellsDisappearing);

        if self.barrier.is_released() {
            return self.enter_shift();
        }
        Ok(())
    }

    fn enter_shift(&mut self) -> Result<(), GameError> {
        let falls = shift_columns(
            &mut self.board,
            &self.state.pending,
            self.color_count,
            &mut self.rng,
        )?;

        let side = self.state.cell_side as f32;
        for fall in &falls {
            if let Some(cell) = self.board.cell_mut(fall.index) {
                cell.animation.start(AnimationTarget::fall(
                    fall.from_y as f32 * side,
                    fall.to_y as f32 * side,
                ));
            }
        }
        self.barrier
            .arm(self.board.len(), falls.iter().map(|f| f.index));
        self.transition(Phase::AnimationShift);

        if self.barrier.is_released() {
            return self.settle();
        }
        Ok(())
    }

    /// Back to `Ran` after a shift; resolves runs the shift created.
    fn settle(&mut self) -> Result<(), GameError> {
        self.state.pending.reset(self.board.len());
        self.transition(Phase::Ran);

        if resolve_cascade(
            &mut self.board,
            &mut self.state.pending,
            &mut self.state.points,
        ) {
            return self.enter_cells_disappearing();
        }
        Ok(())
    }

    fn enter_game_over_animation(&mut self) -> Result<(), GameError> {
        let side = self.state.cell_side;
        let board_w = side * self.state.width as i32;
        let board_h = side * self.state.height as i32;

        for idx in 0..self.board.len() {
            let (x, y) = self.board.coords_of(idx);
            let top_end = fly_off_end(&mut self.rng, side, board_h);
            let left_end = fly_off_end(&mut self.rng, side, board_w);
            let target = AnimationTarget {
                left: Some(Range::new((x as i32 * side) as f32, left_end as f32)),
                top: Some(Range::new((y as i32 * side) as f32, top_end as f32)),
                opacity: Some(Range::new(1.0, 0.0)),
            };
            if let Some(cell) = self.board.cell_mut(idx) {
                cell.animation.start(target);
            }
        }
        self.barrier.arm(self.board.len(), 0..self.board.len());
        self.transition(Phase::AnimationGameOver);

        if self.barrier.is_released() {
            self.transition(Phase::GameOver);
        }
        Ok(())
    }
}

/// Off-board end position along one axis: before the board or past its far
/// edge, 50/50.
fn fly_off_end<R: RandomSource + ?Sized>(rng: &mut R, side: i32, extent: i32) -> i32 {
    if rng.next_range(2) == 0 {
        rng.range_inclusive(-side - FLY_OFF_MARGIN, -side)
    } else {
        rng.range_inclusive(extent, extent + FLY_OFF_MARGIN)
    }
}
