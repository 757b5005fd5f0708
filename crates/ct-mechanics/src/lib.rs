//! Combat mechanics for running tabletop encounters.
//!
//! Provides injectable dice sources, the initiative roller, the turn cursor
//! state machine, and the running-encounter controller that keeps the turn
//! order and the combatant snapshot consistent. [`EncounterSession`] ties
//! them together with an identifier generator for hosts that want a single
//! owner for a combat.

pub mod combat;
pub mod dice;
pub mod diagnostic;
pub mod error;
pub mod initiative;
pub mod session;

pub use combat::{
    Action, InsertPosition, RunId, RunningEncounter, Transition, TurnCursor, TurnState, apply,
};
pub use diagnostic::Diagnostic;
pub use dice::{DiceSource, EverIncreasingDice, ScriptedDice, SeededDice};
pub use error::{SessionError, SessionResult};
pub use initiative::{
    AdvantageRule, InitiativeReport, InitiativeRoll, InitiativeSettings, RollTargets,
};
pub use session::EncounterSession;
