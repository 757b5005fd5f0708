//! Roster files: the JSON description of who takes part in an encounter.
//!
//! ```json
//! {
//!   "name": "Goblin Ambush",
//!   "combatants": [
//!     { "name": "Goblin", "modifier": 2, "count": 3, "compendium": "goblin" },
//!     { "name": "Mira", "modifier": 3, "advantage": true }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use ct_core::{Definition, IdGenerator};
use ct_mechanics::{DiceSource, EncounterSession};

/// A parsed roster file.
#[derive(Debug, Deserialize)]
pub struct Roster {
    pub name: String,
    #[serde(default)]
    pub combatants: Vec<RosterEntry>,
}

/// One line of a roster: a definition and how many of it join.
#[derive(Debug, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    #[serde(default)]
    pub modifier: i32,
    #[serde(default)]
    pub advantage: bool,
    #[serde(default = "one")]
    pub count: u32,
    /// Library key; entries without one get a fresh ad hoc definition.
    #[serde(default)]
    pub compendium: Option<String>,
}

fn one() -> u32 {
    1
}

impl Roster {
    pub fn load(path: &Path) -> Result<Self, String> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        Self::parse(&text).map_err(|e| format!("{}: {e}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self, String> {
        let roster: Self = serde_json::from_str(text).map_err(|e| e.to_string())?;
        if let Some(entry) = roster.combatants.iter().find(|e| e.name.trim().is_empty()) {
            return Err(format!("combatant with empty name (modifier {})", entry.modifier));
        }
        if let Some(entry) = roster.combatants.iter().find(|e| e.count == 0) {
            return Err(format!("'{}' has a count of 0", entry.name));
        }
        Ok(roster)
    }

    /// Add every roster entry to the session's building encounter.
    pub fn populate<D, G>(&self, session: &mut EncounterSession<D, G>) -> Result<(), String>
    where
        D: DiceSource,
        G: IdGenerator,
    {
        for entry in &self.combatants {
            let definition = match &entry.compendium {
                Some(key) => Definition::compendium(key.clone(), entry.name.clone()),
                None => Definition::ad_hoc(session.mint_definition_id(), entry.name.clone()),
            }
            .with_modifier(entry.modifier)
            .with_advantage(entry.advantage);

            for _ in 0..entry.count {
                session
                    .add_to_building(definition.clone())
                    .map_err(|e| e.to_string())?;
            }
        }
        tracing::debug!(
            encounter = %self.name,
            combatants = session.building().combatants.len(),
            "loaded roster"
        );
        Ok(())
    }
}
