//! Identifier generation for new combatants and runs.
//!
//! Generators are passed in by the caller rather than reached for globally,
//! so a fixed generator reproduces the same identifiers on every replay.

use uuid::Uuid;

/// Source of process-unique identifiers.
///
/// Implementations must never return the same value twice; the rest of the
/// workspace treats a collision as a broken generator, not a recoverable case.
pub trait IdGenerator {
    /// Produce the next identifier.
    fn next_uuid(&mut self) -> Uuid;
}

/// Random version 4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_uuid(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic identifiers `0, 1, 2, …` encoded as UUIDs.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u128,
}

impl SequentialIds {
    /// Start counting from zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting from `first`.
    pub fn starting_at(first: u128) -> Self {
        Self { next: first }
    }
}

impl IdGenerator for SequentialIds {
    fn next_uuid(&mut self) -> Uuid {
        let id = Uuid::from_u128(self.next);
        self.next += 1;
        id
    }
}
