//! JSONL log of phase transitions.
//!
//! One line per [`PhaseChange`]:
//! `{"ts":1700000000000,"from":"ran","to":"animation_cells_disappearing","points":3}`.
//! Write errors are dropped; logging never interrupts the game.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::core::{Game, RandomSource};
use crate::types::PhaseChange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseRecord {
    /// Milliseconds since the Unix epoch.
    pub ts: u64,
    pub from: &'static str,
    pub to: &'static str,
    pub points: u32,
}

impl PhaseRecord {
    pub fn new(change: &PhaseChange, ts: u64) -> Self {
        Self {
            ts,
            from: change.from.as_str(),
            to: change.to.as_str(),
            points: change.points,
        }
    }
}

pub struct PhaseLog {
    out: Box<dyn Write>,
    buf: Vec<u8>,
}

impl PhaseLog {
    /// Append to the file at `path`, creating it if needed.
    pub fn open(path: &str) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::from_writer(file))
    }

    pub fn from_writer(out: impl Write + 'static) -> Self {
        Self {
            out: Box::new(out),
            buf: Vec::with_capacity(128),
        }
    }

    pub fn record(&mut self, change: &PhaseChange) {
        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, &PhaseRecord::new(change, now_ms())).is_err() {
            return;
        }
        self.buf.push(b'\n');
        if self.out.write_all(&self.buf).is_ok() {
            let _ = self.out.flush();
        }
    }

    /// Subscribe to every phase change of `game`.
    pub fn attach<R: RandomSource>(mut self, game: &mut Game<R>) {
        game.subscribe(move |change| self.record(change));
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
