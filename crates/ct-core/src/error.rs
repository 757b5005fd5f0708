use crate::combatant::CombatantId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when manipulating an encounter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The requested combatant ID is not part of the encounter.
    #[error("combatant not found: {0}")]
    CombatantNotFound(CombatantId),

    /// A combatant with the same ID is already part of the encounter.
    #[error("duplicate combatant id: {0}")]
    DuplicateIdentifier(CombatantId),
}
