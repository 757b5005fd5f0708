use serde::{Deserialize, Serialize};

use crate::combatant::{Combatant, CombatantId};
use crate::discriminator::{self, DiscriminatorMark};
use crate::error::{CoreError, CoreResult};
use crate::list::CombatantList;

/// A user-authored combat: a name and an ordered list of combatants.
///
/// The same type serves as the building-phase definition and as the base
/// and current snapshots of a running encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    /// Display name.
    pub name: String,
    /// Combatants in insertion order, or initiative order once rolled.
    pub combatants: CombatantList,
    /// When set, discriminators are frozen and never renumbered.
    #[serde(default)]
    pub ensure_stable_discriminators: bool,
    #[serde(default)]
    discriminator_marks: Vec<DiscriminatorMark>,
}

impl Encounter {
    /// Create an empty encounter.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            combatants: CombatantList::new(),
            ensure_stable_discriminators: false,
            discriminator_marks: Vec::new(),
        }
    }

    /// Create an encounter from a list of combatants.
    pub fn with_combatants(
        name: impl Into<String>,
        combatants: impl IntoIterator<Item = Combatant>,
    ) -> CoreResult<Self> {
        let mut encounter = Self::new(name);
        for c in combatants {
            encounter.combatants.push(c)?;
        }
        encounter.refresh_discriminators();
        Ok(encounter)
    }

    /// Append a combatant and refresh labels.
    pub fn add_combatant(&mut self, combatant: Combatant) -> CoreResult<()> {
        self.insert_combatant(self.combatants.len(), combatant)
    }

    /// Insert a combatant at `index` and refresh labels.
    pub fn insert_combatant(&mut self, index: usize, combatant: Combatant) -> CoreResult<()> {
        self.combatants.insert(index, combatant)?;
        self.refresh_discriminators();
        Ok(())
    }

    /// Remove a combatant. Remaining discriminators are left untouched.
    pub fn remove_combatant(&mut self, id: CombatantId) -> CoreResult<(usize, Combatant)> {
        self.combatants
            .remove(id)
            .ok_or(CoreError::CombatantNotFound(id))
    }

    /// Assign missing discriminators when frozen, clear them otherwise.
    pub fn refresh_discriminators(&mut self) {
        if self.ensure_stable_discriminators {
            let issued = discriminator::assign_discriminators(
                &mut self.combatants,
                &mut self.discriminator_marks,
            );
            if issued > 0 {
                tracing::debug!(encounter = %self.name, issued, "assigned discriminators");
            }
        } else {
            discriminator::clear_discriminators(
                &mut self.combatants,
                &mut self.discriminator_marks,
            );
        }
    }

    /// Freeze discriminators from here on and assign the missing ones.
    pub fn freeze_discriminators(&mut self) {
        self.ensure_stable_discriminators = true;
        self.refresh_discriminators();
    }

    /// Returns true if every combatant has an initiative value.
    pub fn all_rolled(&self) -> bool {
        self.combatants.iter().all(|c| c.initiative.is_some())
    }
}
