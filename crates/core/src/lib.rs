//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the match-3 board state machine: seeding, click
//! resolution, match detection, cascades, gravity shift and game-over
//! detection, plus the animation-phase protocol a renderer follows.
//! It has **zero dependencies** on UI, terminal or I/O:
//!
//! - **Deterministic**: the same seed produces the same game
//! - **Renderer-agnostic**: animations are plain targets the renderer steps
//!   and reports back; the core never measures time
//!
//! # Module Structure
//!
//! - [`board`]: flat row-major grid of cells and seeding
//! - [`rng`]: LCG random source and color picking
//! - [`matcher`]: row/column run detection through one cell, scoring
//! - [`cascade`]: repeated detection until the board is stable
//! - [`shift`]: column compaction and refill
//! - [`animation`]: per-cell animation targets and the phase barrier
//! - [`game_state`]: the per-game aggregate
//! - [`controller`]: the phase state machine ([`Game`])
//! - [`snapshot`]: read-only views for renderers
//!
//! # Game Rules
//!
//! - Clicking a tile recolors it (always to a different color)
//! - Runs of 3+ equal colors through a tile, in its row or column, disappear
//! - Each cleared tile is worth 1 point, 2 if the player had clicked it
//! - Tiles above fall down, new tiles drop in from the top, and runs created by
//!   the fall are resolved too
//! - The game is over once every tile has been clicked
//!
//! # Example
//!
//! ```
//! use match3_core::{ClickOutcome, Game};
//! use match3_types::Phase;
//!
//! let mut game = Game::new(12345);
//! game.start_game(1, 1).unwrap();
//!
//! // A single tile can never match, so one click ends the game.
//! assert_eq!(game.on_click(0, 0).unwrap(), ClickOutcome::GameOver);
//! assert_eq!(game.status(), Phase::AnimationGameOver);
//!
//! // The renderer plays the fly-off animation and reports back.
//! while let Some(frame) = game.step_animation(0, 0).unwrap() {
//!     if frame.finished {
//!         game.report_animation_complete(0, 0).unwrap();
//!         break;
//!     }
//! }
//! assert_eq!(game.status(), Phase::GameOver);
//! ```

pub mod animation;
pub mod board;
pub mod cascade;
pub mod controller;
pub mod error;
pub mod game_state;
pub mod matcher;
pub mod rng;
pub mod shift;
pub mod snapshot;

pub use match3_types as types;

// Re-export commonly used types for convenience
pub use animation::{AnimationBarrier, AnimationFrame, AnimationTarget, CellAnimation, Range};
pub use board::{Board, Cell};
pub use cascade::{resolve_cascade, resolve_from};
pub use controller::{ClickOutcome, Game, GameOptions};
pub use error::GameError;
pub use game_state::GameState;
pub use matcher::{cell_clear_points, detect_matches, run_counts, PendingSet, RunCounts};
pub use rng::{pick_color, RandomSource, SimpleRng};
pub use shift::{shift_columns, Fall};
pub use snapshot::{CellView, GameSnapshot};
