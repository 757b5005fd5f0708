//! Running encounters and the turn-order state machine.
//!
//! A [`RunningEncounter`] holds the snapshot captured at run start, the live
//! snapshot every action mutates, and the [`TurnState`]. The controller
//! ([`apply`]) is the only way to move it forward.

pub mod action;
pub mod controller;
pub mod turn;

pub use action::{Action, InsertPosition};
pub use controller::{Transition, apply};
pub use turn::{TurnCursor, TurnState};

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ct_core::{Combatant, CombatantId, Encounter};

use crate::initiative::InitiativeSettings;

/// Unique identifier for one run of an encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(pub Uuid);

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// The live instance of an encounter being played out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningEncounter {
    /// Identifier of this run.
    pub id: RunId,
    /// The encounter as it was when the run started.
    pub base: Encounter,
    /// The encounter as it is now.
    pub current: Encounter,
    /// Whose turn it is.
    pub turn: TurnState,
    /// Settings from the last initiative roll, reused for rerolls.
    pub settings: InitiativeSettings,
    #[serde(default)]
    retired: BTreeSet<CombatantId>,
}

impl RunningEncounter {
    /// Capture `encounter` as both the base and current snapshot.
    ///
    /// Discriminators are frozen so labels stay stable for the whole run.
    pub fn new(id: RunId, encounter: &Encounter) -> Self {
        let mut snapshot = encounter.clone();
        snapshot.freeze_discriminators();
        Self {
            id,
            base: snapshot.clone(),
            current: snapshot,
            turn: TurnState::NotStarted,
            settings: InitiativeSettings::default(),
            retired: BTreeSet::new(),
        }
    }

    /// The combatant whose turn it is.
    pub fn active_combatant(&self) -> Option<&Combatant> {
        self.turn
            .cursor()
            .and_then(|cursor| self.current.combatants.get(cursor.combatant))
    }

    /// The current round (0 before combat starts).
    pub fn round(&self) -> u32 {
        self.turn.round()
    }

    /// Returns true if `id` was removed earlier in this run.
    pub fn is_retired(&self, id: CombatantId) -> bool {
        self.retired.contains(&id)
    }

    /// Returns true if `id` has ever been part of this run.
    pub fn has_seen(&self, id: CombatantId) -> bool {
        self.current.combatants.contains(id) || self.is_retired(id)
    }

    pub(crate) fn retire(&mut self, id: CombatantId) {
        self.retired.insert(id);
    }

    /// Check the turn state against the current snapshot.
    ///
    /// True when an active cursor points at a present combatant in round 1
    /// or later, an ended combat has nobody left, and no retired id has come
    /// back.
    pub fn is_consistent(&self) -> bool {
        let combatants = &self.current.combatants;
        let turn_ok = match self.turn {
            TurnState::NotStarted => true,
            TurnState::Active(cursor) => {
                cursor.round >= 1 && combatants.contains(cursor.combatant)
            }
            TurnState::Ended { .. } => combatants.is_empty(),
        };
        turn_ok && !combatants.iter().any(|c| self.retired.contains(&c.id))
    }
}
