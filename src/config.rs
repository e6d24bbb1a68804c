//! Runner configuration from environment variables.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::GameOptions;
use crate::types::{DEFAULT_CELL_SIDE, DEFAULT_COLOR_COUNT, MAX_COLORS, MIN_COLOR_COUNT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub seed: u32,
    pub color_count: u8,
    /// Tile size in animation pixels.
    pub cell_side: i32,
    /// JSONL phase log; `None` disables logging.
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 5,
            height: 5,
            seed: clock_seed(),
            color_count: DEFAULT_COLOR_COUNT,
            cell_side: DEFAULT_CELL_SIDE,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Read `MATCH3_*` environment variables.
    ///
    /// Missing or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`GameConfig::from_env`], with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parse = |key: &str| lookup(key).and_then(|s| s.trim().parse::<i64>().ok());

        let dimension = |key: &str, default: usize| {
            parse(key)
                .filter(|v| *v > 0)
                .map(|v| v as usize)
                .unwrap_or(default)
        };
        let width = dimension("MATCH3_WIDTH", defaults.width);
        let height = dimension("MATCH3_HEIGHT", defaults.height);

        let seed = parse("MATCH3_SEED")
            .map(|v| v as u32)
            .unwrap_or(defaults.seed);

        let color_count = parse("MATCH3_COLORS")
            .map(|v| v.clamp(MIN_COLOR_COUNT as i64, MAX_COLORS as i64) as u8)
            .unwrap_or(defaults.color_count);

        let cell_side = parse("MATCH3_CELL_SIDE")
            .filter(|v| *v > 0 && *v <= i32::MAX as i64)
            .map(|v| v as i32)
            .unwrap_or(defaults.cell_side);

        let log_path = lookup("MATCH3_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            width,
            height,
            seed,
            color_count,
            cell_side,
            log_path,
        }
    }

    pub fn options(&self) -> GameOptions {
        GameOptions {
            color_count: self.color_count,
            cell_side: self.cell_side,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32 ^ d.subsec_nanos())
        .unwrap_or(1)
}
