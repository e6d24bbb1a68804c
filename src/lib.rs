//! Terminal match-3 (workspace facade crate).
//!
//! Re-exports the workspace crates as `match3_tui::{core,input,term,types}` and
//! hosts the runner's environment config and phase log.

pub mod config;
pub mod log;

pub use match3_core as core;
pub use match3_input as input;
pub use match3_term as term;
pub use match3_types as types;

pub use config::GameConfig;
pub use log::PhaseLog;
