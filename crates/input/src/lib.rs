//! Terminal input module.
//!
//! Maps `crossterm` key and mouse events into [`crate::types::PlayerCommand`]
//! and tracks the keyboard cursor. Independent of the renderer: mouse clicks
//! are resolved against the [`crate::types::BoardGeometry`] the renderer
//! reports for the last frame.

pub mod cursor;
pub mod map;

pub use match3_types as types;

pub use cursor::Cursor;
pub use map::{handle_key_event, handle_mouse_event, should_quit};
