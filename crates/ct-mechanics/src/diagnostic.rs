//! Non-fatal signals produced while applying actions.
//!
//! Every rejected or adjusted action leaves the encounter in a valid state;
//! the diagnostic only tells the caller what happened so it can be logged or
//! surfaced.

use ct_core::{CombatantId, CoreError};

/// Something the controller resolved on its own instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    /// A remove, reroll, or edit named a combatant that is not present.
    #[error("combatant not found: {0}")]
    CombatantNotFound(CombatantId),

    /// Combat was started with nobody in it; the turn ended immediately.
    #[error("encounter has no combatants")]
    EmptyEncounterStart,

    /// A setting was out of range and was clamped.
    #[error("invalid {field} {given}, using {used}")]
    InvalidSettings {
        /// Name of the offending setting.
        field: &'static str,
        /// The value that was supplied.
        given: u32,
        /// The value that was used instead.
        used: u32,
    },

    /// A new combatant reused an identifier already seen in this run.
    #[error("duplicate combatant id: {0}")]
    DuplicateIdentifier(CombatantId),

    /// Start was requested before everyone has initiative.
    #[error("initiative has not been rolled for every combatant")]
    InitiativePending,

    /// Start was requested while a turn is already in progress.
    #[error("combat has already started")]
    AlreadyStarted,

    /// Advance was requested while no turn is in progress.
    #[error("no combatant is taking a turn")]
    NotActive,
}

impl Diagnostic {
    /// Returns true for diagnostics that point at a bug in the caller's
    /// capabilities rather than an ordinary user mistake.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::DuplicateIdentifier(_))
    }
}

impl From<CoreError> for Diagnostic {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::CombatantNotFound(id) => Self::CombatantNotFound(id),
            CoreError::DuplicateIdentifier(id) => Self::DuplicateIdentifier(id),
        }
    }
}
