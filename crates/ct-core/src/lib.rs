//! Core types for running tabletop encounters.
//!
//! This crate defines the data model the combat mechanics operate on:
//! combatants and their stat-source definitions, the identity-keyed
//! [`CombatantList`], the [`Encounter`] snapshot, discriminator assignment
//! for combatants that share a definition, and the identifier-generation
//! capability.

/// Combatant identifiers, definitions, and the combatant record.
pub mod combatant;
/// Discriminator assignment for combatants sharing a definition.
pub mod discriminator;
/// The encounter snapshot.
pub mod encounter;
/// Error types used throughout the crate.
pub mod error;
/// Identifier-generation capability.
pub mod ids;
/// Identity-keyed, order-preserving combatant collection.
pub mod list;

/// Re-export combatant types.
pub use combatant::{Combatant, CombatantId, Definition, DefinitionKey};
/// Re-export the encounter snapshot.
pub use encounter::Encounter;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export identifier generators.
pub use ids::{IdGenerator, RandomIds, SequentialIds};
/// Re-export the combatant collection.
pub use list::CombatantList;
