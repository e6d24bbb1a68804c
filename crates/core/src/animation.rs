//! Animation module - per-cell animation targets and the phase barrier
//!
//! The core never drives time. Entering an animated phase sets an
//! [`AnimationTarget`] on every affected cell and enables it; the renderer then
//! steps each enabled cell once per frame ([`CellAnimation::step`]) and reports
//! completion. [`AnimationBarrier`] counts outstanding cells so the phase only
//! advances after the last one reported.
//!
//! Positions are pixels relative to the board's top-left corner; opacity is
//! `0.0..=1.0`.

use crate::types::ANIMATION_TICKS;

/// Start and end value of one animated property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub start: f32,
    pub end: f32,
}

impl Range {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Value after `tick` of `ANIMATION_TICKS` frames.
    pub fn at(&self, tick: u32) -> f32 {
        if tick >= ANIMATION_TICKS {
            return self.end;
        }
        self.start + tick as f32 * (self.end - self.start) / ANIMATION_TICKS as f32
    }
}

/// The animated properties of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationTarget {
    pub left: Option<Range>,
    pub top: Option<Range>,
    pub opacity: Option<Range>,
}

impl AnimationTarget {
    /// Fade out in place.
    pub fn fade_out() -> Self {
        Self {
            opacity: Some(Range::new(1.0, 0.0)),
            ..Self::default()
        }
    }

    /// Vertical fall from `from` to `to` (pixels).
    pub fn fall(from: f32, to: f32) -> Self {
        Self {
            top: Some(Range::new(from, to)),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.top.is_none() && self.opacity.is_none()
    }
}

/// Interpolated property values for one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationFrame {
    pub left: Option<f32>,
    pub top: Option<f32>,
    pub opacity: Option<f32>,
    /// The last frame was produced; the renderer should report completion.
    pub finished: bool,
}

/// Renderer-facing animation state owned by each cell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CellAnimation {
    pub enabled: bool,
    pub tick: u32,
    pub target: AnimationTarget,
}

impl CellAnimation {
    /// Enable with a new target, restarting progress.
    pub fn start(&mut self, target: AnimationTarget) {
        self.enabled = true;
        self.tick = 0;
        self.target = target;
    }

    /// Disable and forget the target.
    pub fn stop(&mut self) {
        *self = Self::default();
    }

    /// Values of the current frame without advancing.
    pub fn frame(&self) -> AnimationFrame {
        AnimationFrame {
            left: self.target.left.map(|r| r.at(self.tick)),
            top: self.target.top.map(|r| r.at(self.tick)),
            opacity: self.target.opacity.map(|r| r.at(self.tick)),
            finished: self.tick >= ANIMATION_TICKS,
        }
    }

    /// Advance one frame and return the interpolated values.
    ///
    /// Returns `None` when the animation is not enabled.
    pub fn step(&mut self) -> Option<AnimationFrame> {
        if !self.enabled {
            return None;
        }
        if self.tick < ANIMATION_TICKS {
            self.tick += 1;
        }
        Some(self.frame())
    }
}

/// Completion counter for the cells enabled in the current phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimationBarrier {
    /// `waiting[index]` is true until that cell reports.
    waiting: Vec<bool>,
    outstanding: usize,
}

impl AnimationBarrier {
    /// Arm the barrier for exactly `indices` on a board of `len` cells.
    pub fn arm(&mut self, len: usize, indices: impl IntoIterator<Item = usize>) {
        self.waiting.clear();
        self.waiting.resize(len, false);
        self.outstanding = 0;
        for idx in indices {
            if idx < len && !self.waiting[idx] {
                self.waiting[idx] = true;
                self.outstanding += 1;
            }
        }
    }

    /// Record completion of `index`.
    ///
    /// Returns true if the cell was still outstanding.
    pub fn complete(&mut self, index: usize) -> bool {
        match self.waiting.get_mut(index) {
            Some(w) if *w => {
                *w = false;
                self.outstanding -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn outstanding(&self) -> usize {
        self.outstanding
    }

    /// Every armed cell has reported.
    pub fn is_released(&self) -> bool {
        self.outstanding == 0
    }

    pub fn reset(&mut self) {
        self.waiting.clear();
        self.outstanding = 0;
    }
}
