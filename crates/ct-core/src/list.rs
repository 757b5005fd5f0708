use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::combatant::{Combatant, CombatantId};
use crate::error::{CoreError, CoreResult};

/// Ordered combatants with an id index kept alongside.
///
/// Order is turn order once initiative is rolled; the index gives constant
/// time lookups by identity. Serializes as a plain sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Combatant>", into = "Vec<Combatant>")]
pub struct CombatantList {
    combatants: Vec<Combatant>,
    index: HashMap<CombatantId, usize>,
}

impl CombatantList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of combatants.
    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    /// Returns true if there are no combatants.
    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }

    /// Append a combatant at the end.
    pub fn push(&mut self, combatant: Combatant) -> CoreResult<()> {
        self.insert(self.combatants.len(), combatant)
    }

    /// Insert a combatant at `index` (clamped to the list length).
    pub fn insert(&mut self, index: usize, combatant: Combatant) -> CoreResult<()> {
        if self.index.contains_key(&combatant.id) {
            return Err(CoreError::DuplicateIdentifier(combatant.id));
        }
        let index = index.min(self.combatants.len());
        self.combatants.insert(index, combatant);
        self.reindex_from(index);
        Ok(())
    }

    /// Remove a combatant, returning its former position and the combatant.
    pub fn remove(&mut self, id: CombatantId) -> Option<(usize, Combatant)> {
        let position = self.index.remove(&id)?;
        let combatant = self.combatants.remove(position);
        self.reindex_from(position);
        Some((position, combatant))
    }

    /// Look up a combatant by id.
    pub fn get(&self, id: CombatantId) -> Option<&Combatant> {
        self.index.get(&id).map(|&i| &self.combatants[i])
    }

    /// Mutable lookup by id. Identity must not be changed through this.
    pub fn get_mut(&mut self, id: CombatantId) -> Option<&mut Combatant> {
        self.index.get(&id).map(|&i| &mut self.combatants[i])
    }

    /// Position of a combatant in the current order.
    pub fn index_of(&self, id: CombatantId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Returns true if a combatant with this id is present.
    pub fn contains(&self, id: CombatantId) -> bool {
        self.index.contains_key(&id)
    }

    /// The combatant at `position`.
    pub fn at(&self, position: usize) -> Option<&Combatant> {
        self.combatants.get(position)
    }

    /// The first combatant in order.
    pub fn first(&self) -> Option<&Combatant> {
        self.combatants.first()
    }

    /// Iterate in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Combatant> {
        self.combatants.iter()
    }

    /// Iterate mutably in order. Identity must not be changed through this.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Combatant> {
        self.combatants.iter_mut()
    }

    /// All ids, in order.
    pub fn ids(&self) -> Vec<CombatantId> {
        self.combatants.iter().map(|c| c.id).collect()
    }

    /// Stable sort by the given comparator, then rebuild the index.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Combatant, &Combatant) -> Ordering,
    {
        self.combatants.sort_by(compare);
        self.reindex_from(0);
    }

    /// Borrow the combatants as a slice.
    pub fn as_slice(&self) -> &[Combatant] {
        &self.combatants
    }

    fn reindex_from(&mut self, start: usize) {
        for (i, c) in self.combatants.iter().enumerate().skip(start) {
            self.index.insert(c.id, i);
        }
    }
}

impl TryFrom<Vec<Combatant>> for CombatantList {
    type Error = CoreError;

    fn try_from(combatants: Vec<Combatant>) -> CoreResult<Self> {
        let mut list = Self::new();
        for c in combatants {
            list.push(c)?;
        }
        Ok(list)
    }
}

impl From<CombatantList> for Vec<Combatant> {
    fn from(list: CombatantList) -> Self {
        list.combatants
    }
}

impl<'a> IntoIterator for &'a CombatantList {
    type Item = &'a Combatant;
    type IntoIter = std::slice::Iter<'a, Combatant>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
