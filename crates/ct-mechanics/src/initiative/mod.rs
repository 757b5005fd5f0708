//! Initiative rolling and turn ordering.
//!
//! Each rolled combatant gets one die (two with advantage, keeping the
//! higher) plus its modifier. Order is total descending, then modifier
//! descending, then the order the combatants were in before the roll.

pub mod settings;

pub use settings::{AdvantageRule, InitiativeSettings};

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use ct_core::{Combatant, CombatantId, CombatantList, DefinitionKey};

use crate::dice::DiceSource;

/// Which combatants a roll applies to.
#[derive(Debug, Clone, Copy)]
pub enum RollTargets<'a> {
    /// Everyone without initiative, or everyone if the settings overwrite.
    All,
    /// Exactly these combatants, whether or not they already rolled.
    Only(&'a [CombatantId]),
}

/// One combatant's initiative roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitiativeRoll {
    /// Who rolled.
    pub combatant: CombatantId,
    /// Every die rolled (two when advantage applied).
    pub dice: Vec<u32>,
    /// The die that counted.
    pub kept: u32,
    /// Modifier added to the kept die.
    pub modifier: i32,
    /// Final initiative.
    pub total: i32,
}

impl std::fmt::Display for InitiativeRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.dice.iter().map(|d| d.to_string()).collect();
        write!(
            f,
            "[{}] {:+} = {}",
            values.join(", "),
            self.modifier,
            self.total
        )
    }
}

/// All rolls made by one invocation of the roller, in roll order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitiativeReport {
    /// Individual rolls.
    pub rolls: Vec<InitiativeRoll>,
}

impl InitiativeReport {
    /// The roll made for a combatant, if any.
    pub fn roll_for(&self, id: CombatantId) -> Option<&InitiativeRoll> {
        self.rolls.iter().find(|r| r.combatant == id)
    }

    /// Returns true if nobody rolled.
    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }
}

/// Roll initiative for `targets` and re-sort the list into turn order.
///
/// Discriminators are not touched. Ids in `targets` that are not in the list
/// are ignored.
pub fn roll_initiative(
    list: &mut CombatantList,
    targets: RollTargets<'_>,
    settings: &InitiativeSettings,
    dice: &mut dyn DiceSource,
) -> InitiativeReport {
    let selected: Vec<CombatantId> = list
        .iter()
        .filter(|c| match targets {
            RollTargets::All => settings.overwrite || c.initiative.is_none(),
            RollTargets::Only(ids) => ids.contains(&c.id),
        })
        .map(|c| c.id)
        .collect();

    let mut shared: Vec<(DefinitionKey, Vec<u32>)> = Vec::new();
    let mut report = InitiativeReport::default();

    for id in selected {
        let Some(combatant) = list.get_mut(id) else {
            continue;
        };
        let advantage = settings
            .advantage
            .applies(combatant.definition.has_advantage);

        let grouped = settings.group_same_definitions.then(|| {
            shared
                .iter()
                .find(|(key, _)| *key == combatant.definition.key)
                .map(|(_, values)| values.clone())
        });
        let rolled = match grouped.flatten() {
            Some(values) => values,
            None => {
                let rolled = roll_dice(settings.die, advantage, dice);
                if settings.group_same_definitions {
                    shared.push((combatant.definition.key.clone(), rolled.clone()));
                }
                rolled
            }
        };

        let kept = rolled.iter().copied().max().unwrap_or(1);
        let modifier = combatant.initiative_modifier();
        let total = kept as i32 + modifier;
        combatant.initiative = Some(total);

        report.rolls.push(InitiativeRoll {
            combatant: id,
            dice: rolled,
            kept,
            modifier,
            total,
        });
    }

    sort_by_initiative(list);
    report
}

/// Stable sort into turn order.
pub fn sort_by_initiative(list: &mut CombatantList) {
    list.sort_by(initiative_order);
}

/// Turn-order comparison: rolled before unrolled, higher total first, then
/// higher modifier. Equal combatants compare equal so a stable sort keeps
/// their previous order.
pub fn initiative_order(a: &Combatant, b: &Combatant) -> Ordering {
    match (a.initiative, b.initiative) {
        (Some(x), Some(y)) => y
            .cmp(&x)
            .then_with(|| b.initiative_modifier().cmp(&a.initiative_modifier())),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn roll_dice(sides: u32, advantage: bool, dice: &mut dyn DiceSource) -> Vec<u32> {
    let first = dice.roll_die(sides);
    if advantage {
        vec![first, dice.roll_die(sides)]
    } else {
        vec![first]
    }
}
