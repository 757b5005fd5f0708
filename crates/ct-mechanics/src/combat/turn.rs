//! The turn cursor: whose turn it is and which round.
//!
//! The cursor references the active combatant by identity, never by
//! position, so re-sorting the list cannot change whose turn it is. Every
//! transition takes the list as it is after the snapshot mutation.

use serde::{Deserialize, Serialize};

use ct_core::{CombatantId, CombatantList};

/// The active round and combatant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnCursor {
    /// Current round, starting at 1.
    pub round: u32,
    /// The combatant whose turn it is.
    pub combatant: CombatantId,
}

/// Turn state of a running encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TurnState {
    /// Combat has not started.
    #[default]
    NotStarted,
    /// A combatant is taking a turn.
    Active(TurnCursor),
    /// Everyone is gone. `round` is the last round reached, 0 if none.
    Ended {
        /// Last round reached.
        round: u32,
    },
}

impl TurnState {
    /// Begin round 1 with the first combatant, or end if there is nobody.
    pub fn start(order: &CombatantList) -> Self {
        Self::start_at(order, 1)
    }

    fn start_at(order: &CombatantList, round: u32) -> Self {
        match order.first() {
            Some(first) => Self::Active(TurnCursor {
                round: round.max(1),
                combatant: first.id,
            }),
            None => Self::Ended { round: 0 },
        }
    }

    /// The cursor, if a turn is in progress.
    pub fn cursor(&self) -> Option<&TurnCursor> {
        match self {
            Self::Active(cursor) => Some(cursor),
            _ => None,
        }
    }

    /// Returns true if a turn is in progress.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    /// The current round, or the last one reached. 0 before combat starts.
    pub fn round(&self) -> u32 {
        match self {
            Self::NotStarted => 0,
            Self::Active(cursor) => cursor.round,
            Self::Ended { round } => *round,
        }
    }

    /// Move to the next combatant, wrapping into a new round after the last.
    ///
    /// Only an active cursor moves; other states are returned unchanged.
    pub fn advance(self, order: &CombatantList) -> Self {
        let Self::Active(cursor) = self else {
            return self;
        };
        if order.is_empty() {
            return Self::Ended {
                round: cursor.round,
            };
        }
        let Some(i) = order.index_of(cursor.combatant) else {
            return Self::start_at(order, cursor.round);
        };
        match order.at(i + 1) {
            Some(next) => Self::Active(TurnCursor {
                round: cursor.round,
                combatant: next.id,
            }),
            None => Self::start_at(order, cursor.round + 1),
        }
    }

    /// Repair the cursor after `removed` was taken out of position `position`.
    ///
    /// `order` is the list after the removal. Removing the active combatant
    /// hands the turn to whoever followed it; if it was last, the turn wraps
    /// to the first combatant of the next round.
    pub fn after_removal(
        self,
        removed: CombatantId,
        position: usize,
        order: &CombatantList,
    ) -> Self {
        let Self::Active(cursor) = self else {
            return self;
        };
        if order.is_empty() {
            return Self::Ended {
                round: cursor.round,
            };
        }
        if cursor.combatant != removed {
            return self;
        }
        match order.at(position) {
            Some(next) => Self::Active(TurnCursor {
                round: cursor.round,
                combatant: next.id,
            }),
            None => Self::start_at(order, cursor.round + 1),
        }
    }

    /// Revive an ended combat once somebody joins.
    pub fn after_insertion(self, order: &CombatantList) -> Self {
        match self {
            Self::Ended { round } if !order.is_empty() => Self::start_at(order, round),
            other => other,
        }
    }

    /// Check the cursor still points at someone after the list was re-sorted.
    pub fn after_reorder(self, order: &CombatantList) -> Self {
        match self {
            Self::Active(cursor) if !order.contains(cursor.combatant) => {
                Self::start_at(order, cursor.round)
            }
            other => other,
        }
    }
}

impl std::fmt::Display for TurnState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotStarted => write!(f, "not started"),
            Self::Active(cursor) => write!(f, "round {}, {}", cursor.round, cursor.combatant),
            Self::Ended { round } => write!(f, "ended after round {round}"),
        }
    }
}
