//! Actions that drive a running encounter.

use serde::{Deserialize, Serialize};

use ct_core::{Combatant, CombatantId};

use crate::initiative::InitiativeSettings;

/// Where a combatant added mid-combat is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertPosition {
    /// At the end of the order.
    #[default]
    End,
    /// Right after the active combatant, so it acts next. Falls back to the
    /// end when nobody is active.
    AfterActive,
    /// At a fixed position (clamped to the list length).
    Index(usize),
    /// Where its initiative puts it; at the end if it has none.
    ByInitiative,
}

/// Something that happens to a running encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Begin the first round.
    Start,
    /// Roll initiative for everyone who needs it and re-sort.
    RollInitiative(InitiativeSettings),
    /// Move to the next combatant.
    AdvanceTurn,
    /// Take a combatant out of the fight.
    Remove(CombatantId),
    /// Bring a combatant into the fight.
    Add {
        /// The new combatant.
        combatant: Combatant,
        /// Where to put it.
        position: InsertPosition,
    },
    /// Roll initiative again for these combatants.
    Reroll(Vec<CombatantId>),
    /// Enter an initiative value by hand.
    SetInitiative {
        /// Whose initiative.
        combatant: CombatantId,
        /// The new value.
        value: i32,
    },
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::RollInitiative(settings) => write!(f, "roll initiative (d{})", settings.die),
            Self::AdvanceTurn => write!(f, "advance turn"),
            Self::Remove(id) => write!(f, "remove {id}"),
            Self::Add { combatant, .. } => write!(f, "add {} ({})", combatant.label(), combatant.id),
            Self::Reroll(ids) => {
                let ids: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
                write!(f, "reroll [{}]", ids.join(", "))
            }
            Self::SetInitiative { combatant, value } => {
                write!(f, "set initiative of {combatant} to {value}")
            }
        }
    }
}
