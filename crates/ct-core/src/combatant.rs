use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a combatant. Never reused within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CombatantId(pub Uuid);

impl CombatantId {
    /// Wrap an identifier minted by an [`IdGenerator`](crate::IdGenerator).
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Where a combatant's stats come from.
///
/// Two combatants share a definition iff their keys are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefinitionKey {
    /// A one-off stat block created for this encounter.
    AdHoc(Uuid),
    /// An entry from a monster/character library, by its key.
    Compendium(String),
}

impl fmt::Display for DefinitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AdHoc(id) => write!(f, "adhoc:{}", &id.to_string()[..8]),
            Self::Compendium(key) => write!(f, "compendium:{key}"),
        }
    }
}

/// The parts of a stat source the initiative roller reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// Identity of the stat source.
    pub key: DefinitionKey,
    /// Display name shared by every combatant using this definition.
    pub name: String,
    /// Flat bonus added to the initiative die (may be negative).
    #[serde(default)]
    pub initiative_modifier: i32,
    /// Whether initiative is rolled with advantage.
    #[serde(default)]
    pub has_advantage: bool,
}

impl Definition {
    /// Create an ad hoc definition with no initiative bonus.
    pub fn ad_hoc(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            key: DefinitionKey::AdHoc(id),
            name: name.into(),
            initiative_modifier: 0,
            has_advantage: false,
        }
    }

    /// Create a library-backed definition with no initiative bonus.
    pub fn compendium(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: DefinitionKey::Compendium(key.into()),
            name: name.into(),
            initiative_modifier: 0,
            has_advantage: false,
        }
    }

    /// Set the initiative modifier.
    pub fn with_modifier(mut self, modifier: i32) -> Self {
        self.initiative_modifier = modifier;
        self
    }

    /// Set whether initiative is rolled with advantage.
    pub fn with_advantage(mut self, advantage: bool) -> Self {
        self.has_advantage = advantage;
        self
    }
}

/// A participant in an encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    /// Unique identifier for this combatant.
    pub id: CombatantId,
    /// The stat source this combatant was created from.
    pub definition: Definition,
    /// Rolled (or manually entered) initiative; absent until rolled.
    #[serde(default)]
    pub initiative: Option<i32>,
    /// Ordinal among combatants sharing the definition.
    #[serde(default)]
    pub discriminator: Option<u32>,
}

impl Combatant {
    /// Create a combatant that has not rolled initiative yet.
    pub fn new(id: CombatantId, definition: Definition) -> Self {
        Self {
            id,
            definition,
            initiative: None,
            discriminator: None,
        }
    }

    /// The definition's initiative modifier.
    pub fn initiative_modifier(&self) -> i32 {
        self.definition.initiative_modifier
    }

    /// Human-distinguishable label, e.g. `"Goblin 2"`.
    pub fn label(&self) -> String {
        match self.discriminator {
            Some(d) => format!("{} {d}", self.definition.name),
            None => self.definition.name.clone(),
        }
    }
}
