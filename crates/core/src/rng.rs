//! RNG module - deterministic random source and color picking
//!
//! All randomness in the core (seed colors, recolor on click, refill colors,
//! game-over fly directions) goes through [`RandomSource`], so a game is fully
//! reproducible from its seed. [`SimpleRng`] is the default source.

use crate::error::GameError;
use crate::types::Color;

/// Source of random numbers for the core.
pub trait RandomSource {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max)
    fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }

    /// Generate random value in range [from, to]
    fn range_inclusive(&mut self, from: i32, to: i32) -> i32 {
        if to <= from {
            return from;
        }
        let span = (to - from) as u32 + 1;
        from + self.next_range(span) as i32
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current state (a new `SimpleRng` from it continues the same sequence).
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // Low bits of a power-of-two LCG cycle quickly; small ranges use the high half.
        self.state >> 16
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Pick a color in `1..=color_count` that is not in `excluded`.
///
/// The choice is uniform over the allowed colors.
pub fn pick_color<R: RandomSource + ?Sized>(
    rng: &mut R,
    color_count: u8,
    excluded: &[Color],
) -> Result<Color, GameError> {
    let allowed = (1..=color_count)
        .filter(|c| !excluded.contains(c))
        .count() as u32;
    if allowed == 0 {
        return Err(GameError::NoColorAvailable);
    }

    let mut nth = rng.next_range(allowed);
    for color in 1..=color_count {
        if excluded.contains(&color) {
            continue;
        }
        if nth == 0 {
            return Ok(color);
        }
        nth -= 1;
    }
    Err(GameError::NoColorAvailable)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays fixed values, then zeros.
    pub(crate) struct ScriptedRng(pub VecDeque<u32>);

    impl ScriptedRng {
        pub(crate) fn new(values: &[u32]) -> Self {
            Self(values.iter().copied().collect())
        }
    }

    impl RandomSource for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            self.0.pop_front().unwrap_or(0)
        }
    }

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let a: Vec<u32> = (0..8).map(|_| rng1.next_u32()).collect();
        let b: Vec<u32> = (0..8).map(|_| rng2.next_u32()).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_range_inclusive_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..500 {
            let v = rng.range_inclusive(-250, -50);
            assert!((-250..=-50).contains(&v));
        }
        assert_eq!(rng.range_inclusive(4, 4), 4);
    }

    #[test]
    fn test_pick_color_respects_exclusions() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..500 {
            let c = pick_color(&mut rng, 5, &[2, 4]).unwrap();
            assert!((1..=5).contains(&c));
            assert_ne!(c, 2);
            assert_ne!(c, 4);
        }
    }

    #[test]
    fn test_pick_color_covers_allowed_set() {
        let mut rng = SimpleRng::new(3);
        let mut seen = [false; 6];
        for _ in 0..500 {
            seen[pick_color(&mut rng, 5, &[1]).unwrap() as usize] = true;
        }
        assert_eq!(seen, [false, false, true, true, true, true]);
    }

    #[test]
    fn test_pick_color_nth_allowed() {
        // Allowed colors for exclusion [2] are [1, 3]; value 1 selects the second.
        let mut rng = ScriptedRng::new(&[1]);
        assert_eq!(pick_color(&mut rng, 3, &[2]), Ok(3));
    }

    #[test]
    fn test_pick_color_all_excluded() {
        let mut rng = SimpleRng::new(1);
        assert_eq!(
            pick_color(&mut rng, 2, &[1, 2]),
            Err(GameError::NoColorAvailable)
        );
    }
}
