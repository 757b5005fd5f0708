//! Injectable randomness for initiative rolls.
//!
//! Nothing in this crate reaches for a global generator. Callers hand in a
//! [`DiceSource`], so a seeded or scripted source replays identically.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of die results.
pub trait DiceSource {
    /// Produce a value in `range` (inclusive on both ends).
    fn next_in(&mut self, range: RangeInclusive<u32>) -> u32;

    /// Roll a single die with the given number of sides.
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.next_in(1..=sides.max(1))
    }

    /// Roll a d20.
    fn next_d20(&mut self) -> u32 {
        self.roll_die(20)
    }
}

/// Uniform rolls from a seeded [`StdRng`].
#[derive(Debug, Clone)]
pub struct SeededDice {
    rng: StdRng,
}

impl SeededDice {
    /// Create a source seeded from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DiceSource for SeededDice {
    fn next_in(&mut self, range: RangeInclusive<u32>) -> u32 {
        if range.is_empty() {
            return *range.start();
        }
        self.rng.random_range(range)
    }
}

/// Yields the lowest value of the range, then one higher on each call,
/// wrapping back to the start when it runs off the top.
#[derive(Debug, Clone, Default)]
pub struct EverIncreasingDice {
    calls: u32,
}

impl EverIncreasingDice {
    /// Create a source whose first result is the bottom of the range.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiceSource for EverIncreasingDice {
    fn next_in(&mut self, range: RangeInclusive<u32>) -> u32 {
        let (start, end) = (*range.start(), *range.end());
        if end < start {
            return start;
        }
        let span = end - start + 1;
        let value = start + self.calls % span;
        self.calls = self.calls.wrapping_add(1);
        value
    }
}

/// Replays a fixed list of results, cycling when exhausted.
///
/// Values outside the requested range are clamped into it.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedDice {
    /// Create a source that returns `values` in order.
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }
}

impl DiceSource for ScriptedDice {
    fn next_in(&mut self, range: RangeInclusive<u32>) -> u32 {
        let (start, end) = (*range.start(), *range.end());
        if self.values.is_empty() || end < start {
            return start;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(start, end)
    }
}
