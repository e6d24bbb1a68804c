//! Terminal renderer for the match-3 board.
//!
//! Renders into a simple framebuffer that is diffed and flushed through
//! crossterm, and plays the core's per-cell animations.
//!
//! - [`fb`]: styled character framebuffer
//! - [`game_view`]: snapshot + animation frames -> framebuffer (pure)
//! - [`animator`]: steps animating cells once per frame and reports completion
//! - [`renderer`]: terminal setup/teardown and diff flushing

pub mod animator;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use match3_core as core;
pub use match3_types as types;

pub use animator::Animator;
pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{palette, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
