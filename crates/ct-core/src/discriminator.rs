//! Stable labels for combatants that share a definition.
//!
//! Two goblins from the same stat block become "Goblin 1" and "Goblin 2".
//! Once issued, a discriminator stays with its combatant: additions get the
//! next number after the definition's high-water mark and removals leave
//! gaps rather than renumbering.

use serde::{Deserialize, Serialize};

use crate::combatant::DefinitionKey;
use crate::list::CombatantList;

/// Highest discriminator ever issued for a definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscriminatorMark {
    /// The definition the mark belongs to.
    pub definition: DefinitionKey,
    /// The last discriminator handed out.
    pub last_issued: u32,
}

/// Give every undiscriminated member of a shared definition the next free
/// number, in list order. Returns how many discriminators were issued.
///
/// Definitions with a single combatant are left unlabelled until a second
/// one joins. Once a definition has been numbered, every later member gets
/// a number too, even if it arrives after all the others were removed.
pub fn assign_discriminators(
    list: &mut CombatantList,
    marks: &mut Vec<DiscriminatorMark>,
) -> usize {
    let mut groups: Vec<(DefinitionKey, usize, u32)> = Vec::new();
    for c in list.iter() {
        let existing = c.discriminator.unwrap_or(0);
        match groups.iter_mut().find(|(key, _, _)| *key == c.definition.key) {
            Some((_, count, highest)) => {
                *count += 1;
                *highest = (*highest).max(existing);
            }
            None => groups.push((c.definition.key.clone(), 1, existing)),
        }
    }

    let mut issued = 0;
    for (key, count, highest) in groups {
        let numbered = highest > 0
            || marks
                .iter()
                .any(|m| m.definition == key && m.last_issued > 0);
        if count < 2 && !numbered {
            continue;
        }
        let mark = mark_for(marks, &key);
        mark.last_issued = mark.last_issued.max(highest);

        for c in list.iter_mut() {
            if c.definition.key == key && c.discriminator.is_none() {
                mark.last_issued += 1;
                c.discriminator = Some(mark.last_issued);
                issued += 1;
            }
        }
    }
    issued
}

/// Drop every discriminator and forget all marks.
pub fn clear_discriminators(list: &mut CombatantList, marks: &mut Vec<DiscriminatorMark>) {
    for c in list.iter_mut() {
        c.discriminator = None;
    }
    marks.clear();
}

fn mark_for<'a>(
    marks: &'a mut Vec<DiscriminatorMark>,
    key: &DefinitionKey,
) -> &'a mut DiscriminatorMark {
    let position = match marks.iter().position(|m| m.definition == *key) {
        Some(position) => position,
        None => {
            marks.push(DiscriminatorMark {
                definition: key.clone(),
                last_issued: 0,
            });
            marks.len() - 1
        }
    };
    &mut marks[position]
}
