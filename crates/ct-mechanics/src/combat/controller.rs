//! The running-encounter controller.
//!
//! [`apply`] takes a state and an action and returns the next state. It
//! never fails and never half-applies: an action it cannot carry out leaves
//! the state as it was and says why in the returned diagnostics.

use ct_core::{Combatant, CombatantId, CombatantList};

use crate::diagnostic::Diagnostic;
use crate::dice::DiceSource;
use crate::initiative::{self, InitiativeReport, InitiativeSettings, RollTargets};

use super::RunningEncounter;
use super::action::{Action, InsertPosition};
use super::turn::TurnState;

/// The outcome of applying one action.
#[derive(Debug, Clone)]
pub struct Transition {
    /// The state after the action.
    pub state: RunningEncounter,
    /// What the controller resolved on its own along the way.
    pub diagnostics: Vec<Diagnostic>,
    /// Rolls made by this action, if it rolled initiative.
    pub rolls: InitiativeReport,
}

impl Transition {
    /// Returns true if the action produced no diagnostics.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Apply `action` to `state`, drawing any dice from `dice`.
pub fn apply(state: &RunningEncounter, action: Action, dice: &mut dyn DiceSource) -> Transition {
    tracing::debug!(run = %state.id, %action, "applying action");

    let mut next = state.clone();
    let mut diagnostics = Vec::new();
    let mut rolls = InitiativeReport::default();

    match action {
        Action::Start => start(&mut next, &mut diagnostics),
        Action::RollInitiative(settings) => {
            rolls = roll_all(&mut next, settings, dice, &mut diagnostics);
        }
        Action::AdvanceTurn => advance(&mut next, &mut diagnostics),
        Action::Remove(id) => remove(&mut next, id, &mut diagnostics),
        Action::Add {
            combatant,
            position,
        } => add(&mut next, combatant, position, &mut diagnostics),
        Action::Reroll(ids) => {
            rolls = reroll(&mut next, &ids, dice, &mut diagnostics);
        }
        Action::SetInitiative { combatant, value } => {
            set_initiative(&mut next, combatant, value, &mut diagnostics);
        }
    }

    for diagnostic in &diagnostics {
        if diagnostic.is_contract_violation() {
            tracing::error!(
                run = %state.id,
                %diagnostic,
                "identifier generator returned a duplicate"
            );
        } else {
            tracing::warn!(run = %state.id, %diagnostic, "action adjusted");
        }
    }
    if next.turn != state.turn {
        log_turn_change(&next);
    }
    debug_assert!(next.is_consistent(), "controller produced an inconsistent state");

    Transition {
        state: next,
        diagnostics,
        rolls,
    }
}

fn start(state: &mut RunningEncounter, diagnostics: &mut Vec<Diagnostic>) {
    if state.turn.is_active() {
        diagnostics.push(Diagnostic::AlreadyStarted);
        return;
    }
    if state.current.combatants.is_empty() {
        state.turn = TurnState::Ended {
            round: state.turn.round(),
        };
        diagnostics.push(Diagnostic::EmptyEncounterStart);
        return;
    }
    if !state.current.all_rolled() {
        diagnostics.push(Diagnostic::InitiativePending);
        return;
    }
    state.turn = TurnState::start(&state.current.combatants);
}

fn roll_all(
    state: &mut RunningEncounter,
    settings: InitiativeSettings,
    dice: &mut dyn DiceSource,
    diagnostics: &mut Vec<Diagnostic>,
) -> InitiativeReport {
    let (settings, clamped) = settings.normalized();
    diagnostics.extend(clamped);
    state.settings = settings;

    let report = initiative::roll_initiative(
        &mut state.current.combatants,
        RollTargets::All,
        &state.settings,
        dice,
    );
    log_rolls(&state.current.combatants, &report);

    // Rolling initiative is what opens combat.
    if state.turn == TurnState::NotStarted {
        start(state, diagnostics);
    } else {
        state.turn = state.turn.after_reorder(&state.current.combatants);
    }
    report
}

fn advance(state: &mut RunningEncounter, diagnostics: &mut Vec<Diagnostic>) {
    if !state.turn.is_active() {
        diagnostics.push(Diagnostic::NotActive);
        return;
    }
    state.turn = state.turn.advance(&state.current.combatants);
}

fn remove(state: &mut RunningEncounter, id: CombatantId, diagnostics: &mut Vec<Diagnostic>) {
    let (position, removed) = match state.current.remove_combatant(id) {
        Ok(found) => found,
        Err(err) => {
            diagnostics.push(err.into());
            return;
        }
    };
    state.retire(id);
    tracing::debug!(combatant = %removed.label(), position, "removed combatant");

    state.turn = state
        .turn
        .after_removal(id, position, &state.current.combatants);
}

fn add(
    state: &mut RunningEncounter,
    combatant: Combatant,
    position: InsertPosition,
    diagnostics: &mut Vec<Diagnostic>,
) {
    if state.has_seen(combatant.id) {
        diagnostics.push(Diagnostic::DuplicateIdentifier(combatant.id));
        return;
    }
    let index = insertion_index(state, &combatant, position);
    if let Err(err) = state.current.insert_combatant(index, combatant) {
        diagnostics.push(err.into());
        return;
    }
    state.turn = state.turn.after_insertion(&state.current.combatants);
}

fn insertion_index(
    state: &RunningEncounter,
    combatant: &Combatant,
    position: InsertPosition,
) -> usize {
    let order = &state.current.combatants;
    match position {
        InsertPosition::End => order.len(),
        InsertPosition::Index(i) => i.min(order.len()),
        InsertPosition::AfterActive => state
            .turn
            .cursor()
            .and_then(|cursor| order.index_of(cursor.combatant))
            .map_or(order.len(), |i| i + 1),
        InsertPosition::ByInitiative => {
            let Some(value) = combatant.initiative else {
                return order.len();
            };
            let key = (value, combatant.initiative_modifier());
            order
                .iter()
                .position(|c| {
                    c.initiative
                        .is_none_or(|existing| (existing, c.initiative_modifier()) < key)
                })
                .unwrap_or(order.len())
        }
    }
}

fn reroll(
    state: &mut RunningEncounter,
    ids: &[CombatantId],
    dice: &mut dyn DiceSource,
    diagnostics: &mut Vec<Diagnostic>,
) -> InitiativeReport {
    let (known, unknown): (Vec<CombatantId>, Vec<CombatantId>) = ids
        .iter()
        .copied()
        .partition(|id| state.current.combatants.contains(*id));
    diagnostics.extend(unknown.into_iter().map(Diagnostic::CombatantNotFound));
    if known.is_empty() {
        return InitiativeReport::default();
    }

    let report = initiative::roll_initiative(
        &mut state.current.combatants,
        RollTargets::Only(&known),
        &state.settings,
        dice,
    );
    log_rolls(&state.current.combatants, &report);
    state.turn = state.turn.after_reorder(&state.current.combatants);
    report
}

fn set_initiative(
    state: &mut RunningEncounter,
    id: CombatantId,
    value: i32,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let Some(combatant) = state.current.combatants.get_mut(id) else {
        diagnostics.push(Diagnostic::CombatantNotFound(id));
        return;
    };
    combatant.initiative = Some(value);
    initiative::sort_by_initiative(&mut state.current.combatants);
    state.turn = state.turn.after_reorder(&state.current.combatants);
}

fn log_rolls(order: &CombatantList, report: &InitiativeReport) {
    for roll in &report.rolls {
        let label = order
            .get(roll.combatant)
            .map(Combatant::label)
            .unwrap_or_default();
        tracing::debug!(combatant = %label, roll = %roll, "rolled initiative");
    }
}

fn log_turn_change(state: &RunningEncounter) {
    match state.turn {
        TurnState::Active(cursor) => {
            let label = state
                .active_combatant()
                .map(Combatant::label)
                .unwrap_or_default();
            tracing::info!(run = %state.id, round = cursor.round, combatant = %label, "turn");
        }
        TurnState::Ended { round } => {
            tracing::info!(run = %state.id, round, "combat ended, no combatants left");
        }
        TurnState::NotStarted => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{RunId, TurnCursor};
    use crate::dice::{EverIncreasingDice, ScriptedDice};
    use ct_core::{Definition, Encounter};
    use uuid::Uuid;

    fn id(n: u128) -> CombatantId {
        CombatantId(Uuid::from_u128(n))
    }

    fn fighter(n: u128, name: &str, modifier: i32) -> Combatant {
        Combatant::new(
            id(n),
            Definition::ad_hoc(Uuid::from_u128(1000 + n), name).with_modifier(modifier),
        )
    }

    fn run_of(combatants: Vec<Combatant>) -> RunningEncounter {
        let encounter = Encounter::with_combatants("Test", combatants).unwrap();
        RunningEncounter::new(RunId(Uuid::from_u128(0)), &encounter)
    }

    fn names(state: &RunningEncounter) -> Vec<String> {
        state
            .current
            .combatants
            .iter()
            .map(|c| c.definition.name.clone())
            .collect()
    }

    fn active(round: u32, n: u128) -> TurnState {
        TurnState::Active(TurnCursor {
            round,
            combatant: id(n),
        })
    }

    /// Roll with a fixed script: each combatant's die in current order.
    fn rolled(combatants: Vec<Combatant>, dice: &[u32]) -> RunningEncounter {
        let run = run_of(combatants);
        let mut dice = ScriptedDice::new(dice.to_vec());
        let t = apply(
            &run,
            Action::RollInitiative(InitiativeSettings::default()),
            &mut dice,
        );
        assert!(t.is_clean(), "{:?}", t.diagnostics);
        t.state
    }

    #[test]
    fn remove_active_combatant_flow() {
        let run = run_of(vec![fighter(1, "A", 1), fighter(2, "B", 1)]);
        let mut dice = EverIncreasingDice::new();

        let t = apply(&run, Action::Start, &mut dice);
        assert_eq!(t.diagnostics, [Diagnostic::InitiativePending]);
        assert_eq!(t.state.turn, TurnState::NotStarted);

        let t = apply(
            &t.state,
            Action::RollInitiative(InitiativeSettings::default()),
            &mut dice,
        );
        let state = t.state;
        assert_eq!(state.current.combatants.get(id(1)).unwrap().initiative, Some(2));
        assert_eq!(state.current.combatants.get(id(2)).unwrap().initiative, Some(3));
        assert_eq!(names(&state), ["B", "A"]);
        assert_eq!(state.turn, active(1, 2));

        let t = apply(&state, Action::Remove(id(2)), &mut dice);
        assert!(t.is_clean());
        assert_eq!(names(&t.state), ["A"]);
        assert_eq!(t.state.turn, active(1, 1));
    }

    #[test]
    fn start_after_manual_initiative() {
        let mut a = fighter(1, "A", 0);
        a.initiative = Some(5);
        let mut b = fighter(2, "B", 0);
        b.initiative = Some(15);
        let run = run_of(vec![b, a]);
        let t = apply(&run, Action::Start, &mut ScriptedDice::new(Vec::<u32>::new()));
        assert!(t.is_clean());
        assert_eq!(t.state.turn, active(1, 2));

        let t = apply(&t.state, Action::Start, &mut ScriptedDice::new(Vec::<u32>::new()));
        assert_eq!(t.diagnostics, [Diagnostic::AlreadyStarted]);
        assert_eq!(t.state.turn, active(1, 2));
    }

    #[test]
    fn start_empty_encounter_ends() {
        let run = run_of(Vec::new());
        let t = apply(&run, Action::Start, &mut EverIncreasingDice::new());
        assert_eq!(t.diagnostics, [Diagnostic::EmptyEncounterStart]);
        assert_eq!(t.state.turn, TurnState::Ended { round: 0 });
        assert!(t.state.is_consistent());
    }

    #[test]
    fn rolling_empty_encounter_ends() {
        let run = run_of(Vec::new());
        let t = apply(
            &run,
            Action::RollInitiative(InitiativeSettings::default()),
            &mut EverIncreasingDice::new(),
        );
        assert_eq!(t.diagnostics, [Diagnostic::EmptyEncounterStart]);
        assert_eq!(t.state.turn, TurnState::Ended { round: 0 });
    }

    #[test]
    fn advance_cycles_rounds() {
        let state = rolled(
            vec![fighter(1, "A", 0), fighter(2, "B", 0), fighter(3, "C", 0)],
            &[10, 15, 5],
        );
        assert_eq!(names(&state), ["B", "A", "C"]);
        let mut dice = EverIncreasingDice::new();

        let s = apply(&state, Action::AdvanceTurn, &mut dice).state;
        assert_eq!(s.turn, active(1, 1));
        let s = apply(&s, Action::AdvanceTurn, &mut dice).state;
        assert_eq!(s.turn, active(1, 3));
        let s = apply(&s, Action::AdvanceTurn, &mut dice).state;
        assert_eq!(s.turn, active(2, 2));
    }

    #[test]
    fn advance_before_start_is_rejected() {
        let run = run_of(vec![fighter(1, "A", 0)]);
        let t = apply(&run, Action::AdvanceTurn, &mut EverIncreasingDice::new());
        assert_eq!(t.diagnostics, [Diagnostic::NotActive]);
        assert_eq!(t.state, run);
    }

    #[test]
    fn remove_unknown_is_noop() {
        let state = rolled(vec![fighter(1, "A", 0)], &[10]);
        let t = apply(&state, Action::Remove(id(42)), &mut EverIncreasingDice::new());
        assert_eq!(t.diagnostics, [Diagnostic::CombatantNotFound(id(42))]);
        assert_eq!(t.state, state);
    }

    #[test]
    fn remove_inactive_is_turn_neutral() {
        let state = rolled(
            vec![fighter(1, "A", 0), fighter(2, "B", 0), fighter(3, "C", 0)],
            &[20, 15, 10],
        );
        let s = apply(&state, Action::AdvanceTurn, &mut EverIncreasingDice::new()).state;
        assert_eq!(s.turn, active(1, 2));

        let s = apply(&s, Action::Remove(id(1)), &mut EverIncreasingDice::new()).state;
        assert_eq!(s.turn, active(1, 2));
        let s = apply(&s, Action::Remove(id(3)), &mut EverIncreasingDice::new()).state;
        assert_eq!(s.turn, active(1, 2));
    }

    #[test]
    fn remove_active_last_wraps_round() {
        let state = rolled(vec![fighter(1, "A", 0), fighter(2, "B", 0)], &[20, 10]);
        let s = apply(&state, Action::AdvanceTurn, &mut EverIncreasingDice::new()).state;
        assert_eq!(s.turn, active(1, 2));

        let s = apply(&s, Action::Remove(id(2)), &mut EverIncreasingDice::new()).state;
        assert_eq!(s.turn, active(2, 1));
    }

    #[test]
    fn removing_everyone_ends_and_adding_revives() {
        let state = rolled(vec![fighter(1, "A", 0), fighter(2, "B", 0)], &[20, 10]);
        let mut dice = EverIncreasingDice::new();
        let s = apply(&state, Action::AdvanceTurn, &mut dice).state;
        let s = apply(&s, Action::AdvanceTurn, &mut dice).state;
        assert_eq!(s.turn, active(2, 1));

        let s = apply(&s, Action::Remove(id(1)), &mut dice).state;
        let s = apply(&s, Action::Remove(id(2)), &mut dice).state;
        assert_eq!(s.turn, TurnState::Ended { round: 2 });
        assert!(s.is_consistent());

        let s = apply(
            &s,
            Action::Add {
                combatant: fighter(3, "C", 0),
                position: InsertPosition::End,
            },
            &mut dice,
        )
        .state;
        assert_eq!(s.turn, active(2, 3));
    }

    #[test]
    fn add_keeps_cursor_and_respects_position() {
        let state = rolled(
            vec![fighter(1, "A", 0), fighter(2, "B", 0), fighter(3, "C", 0)],
            &[20, 15, 10],
        );
        let mut dice = EverIncreasingDice::new();

        let s = apply(
            &state,
            Action::Add {
                combatant: fighter(4, "D", 0),
                position: InsertPosition::AfterActive,
            },
            &mut dice,
        )
        .state;
        assert_eq!(names(&s), ["A", "D", "B", "C"]);
        assert_eq!(s.turn, active(1, 1));

        let s = apply(
            &s,
            Action::Add {
                combatant: fighter(5, "E", 0),
                position: InsertPosition::End,
            },
            &mut dice,
        )
        .state;
        assert_eq!(names(&s), ["A", "D", "B", "C", "E"]);

        let s = apply(
            &s,
            Action::Add {
                combatant: fighter(6, "F", 0),
                position: InsertPosition::Index(0),
            },
            &mut dice,
        )
        .state;
        assert_eq!(names(&s), ["F", "A", "D", "B", "C", "E"]);
        assert_eq!(s.turn, active(1, 1));
    }

    #[test]
    fn add_by_initiative_slots_in_order() {
        let state = rolled(
            vec![fighter(1, "A", 0), fighter(2, "B", 0), fighter(3, "C", 0)],
            &[20, 15, 10],
        );
        let mut newcomer = fighter(4, "D", 0);
        newcomer.initiative = Some(15);
        let s = apply(
            &state,
            Action::Add {
                combatant: newcomer,
                position: InsertPosition::ByInitiative,
            },
            &mut EverIncreasingDice::new(),
        )
        .state;
        assert_eq!(names(&s), ["A", "B", "D", "C"]);
    }

    #[test]
    fn add_by_initiative_breaks_ties_on_modifier() {
        // B and A both total 15; B sorts first on its higher modifier.
        let state = rolled(
            vec![fighter(1, "A", 0), fighter(2, "B", 3), fighter(3, "C", 0)],
            &[15, 12, 5],
        );
        assert_eq!(names(&state), ["B", "A", "C"]);

        let mut newcomer = fighter(4, "D", 1);
        newcomer.initiative = Some(15);
        let s = apply(
            &state,
            Action::Add {
                combatant: newcomer,
                position: InsertPosition::ByInitiative,
            },
            &mut EverIncreasingDice::new(),
        )
        .state;
        assert_eq!(names(&s), ["B", "D", "A", "C"]);
    }

    #[test]
    fn add_before_start_leaves_turn_alone() {
        let run = run_of(vec![fighter(1, "A", 0)]);
        let s = apply(
            &run,
            Action::Add {
                combatant: fighter(2, "B", 0),
                position: InsertPosition::End,
            },
            &mut EverIncreasingDice::new(),
        )
        .state;
        assert_eq!(s.turn, TurnState::NotStarted);
        assert_eq!(s.current.combatants.len(), 2);
    }

    #[test]
    fn add_duplicate_or_retired_id_is_rejected() {
        let state = rolled(vec![fighter(1, "A", 0), fighter(2, "B", 0)], &[20, 10]);
        let mut dice = EverIncreasingDice::new();

        let t = apply(
            &state,
            Action::Add {
                combatant: fighter(1, "A again", 0),
                position: InsertPosition::End,
            },
            &mut dice,
        );
        assert_eq!(t.diagnostics, [Diagnostic::DuplicateIdentifier(id(1))]);
        assert_eq!(t.state, state);

        let s = apply(&state, Action::Remove(id(2)), &mut dice).state;
        let t = apply(
            &s,
            Action::Add {
                combatant: fighter(2, "B returns", 0),
                position: InsertPosition::End,
            },
            &mut dice,
        );
        assert_eq!(t.diagnostics, [Diagnostic::DuplicateIdentifier(id(2))]);
        assert_eq!(t.state, s);
    }

    #[test]
    fn reinforcements_get_fresh_discriminators() {
        let goblin = |n: u128| {
            Combatant::new(id(n), Definition::compendium("goblin", "Goblin"))
        };
        let state = rolled(vec![goblin(1), goblin(2), goblin(3)], &[10]);
        let mut dice = EverIncreasingDice::new();
        let s = apply(&state, Action::Remove(id(3)), &mut dice).state;
        let s = apply(
            &s,
            Action::Add {
                combatant: goblin(4),
                position: InsertPosition::End,
            },
            &mut dice,
        )
        .state;

        let label = s.current.combatants.get(id(4)).unwrap().label();
        assert_eq!(label, "Goblin 4");
        assert_eq!(s.current.combatants.get(id(1)).unwrap().label(), "Goblin 1");
        assert_eq!(s.current.combatants.get(id(2)).unwrap().label(), "Goblin 2");
    }

    #[test]
    fn numbering_resumes_after_group_is_wiped_out() {
        let goblin = |n: u128| {
            Combatant::new(id(n), Definition::compendium("goblin", "Goblin"))
        };
        let state = rolled(
            vec![goblin(1), goblin(2), goblin(3), fighter(9, "Mira", 0)],
            &[10, 5],
        );
        let mut dice = EverIncreasingDice::new();
        let mut s = state;
        for n in 1..=3 {
            s = apply(&s, Action::Remove(id(n)), &mut dice).state;
        }
        let s = apply(
            &s,
            Action::Add {
                combatant: goblin(4),
                position: InsertPosition::End,
            },
            &mut dice,
        )
        .state;

        let newcomer = s.current.combatants.get(id(4)).unwrap();
        assert_eq!(newcomer.discriminator, Some(4));
        assert_eq!(newcomer.label(), "Goblin 4");
    }

    #[test]
    fn reroll_preserves_active_identity() {
        let state = rolled(
            vec![fighter(1, "A", 0), fighter(2, "B", 0), fighter(3, "C", 0)],
            &[20, 15, 10],
        );
        let s = apply(&state, Action::AdvanceTurn, &mut EverIncreasingDice::new()).state;
        assert_eq!(s.turn, active(1, 2));

        let t = apply(&s, Action::Reroll(vec![id(2)]), &mut ScriptedDice::new([1]));
        assert_eq!(names(&t.state), ["A", "C", "B"]);
        assert_eq!(t.state.turn, active(1, 2));
        assert_eq!(t.rolls.rolls.len(), 1);
    }

    #[test]
    fn reroll_reports_unknown_ids() {
        let state = rolled(vec![fighter(1, "A", 0), fighter(2, "B", 0)], &[20, 10]);
        let t = apply(
            &state,
            Action::Reroll(vec![id(9), id(2)]),
            &mut ScriptedDice::new([20]),
        );
        assert_eq!(t.diagnostics, [Diagnostic::CombatantNotFound(id(9))]);
        assert_eq!(names(&t.state), ["A", "B"]);
        assert_eq!(t.state.current.combatants.get(id(2)).unwrap().initiative, Some(20));

        let t = apply(&state, Action::Reroll(vec![id(9)]), &mut ScriptedDice::new([20]));
        assert_eq!(t.state, state);
    }

    #[test]
    fn reroll_newcomer_sorts_it_in() {
        let state = rolled(vec![fighter(1, "A", 0), fighter(2, "B", 0)], &[20, 10]);
        let mut dice = ScriptedDice::new([15]);
        let s = apply(
            &state,
            Action::Add {
                combatant: fighter(3, "C", 0),
                position: InsertPosition::End,
            },
            &mut dice,
        )
        .state;
        let s = apply(&s, Action::Reroll(vec![id(3)]), &mut dice).state;
        assert_eq!(names(&s), ["A", "C", "B"]);
        assert_eq!(s.turn, active(1, 1));
    }

    #[test]
    fn set_initiative_resorts_and_keeps_turn() {
        let state = rolled(vec![fighter(1, "A", 0), fighter(2, "B", 0)], &[20, 10]);
        let t = apply(
            &state,
            Action::SetInitiative {
                combatant: id(2),
                value: 25,
            },
            &mut EverIncreasingDice::new(),
        );
        assert_eq!(names(&t.state), ["B", "A"]);
        assert_eq!(t.state.turn, active(1, 1));

        let t = apply(
            &state,
            Action::SetInitiative {
                combatant: id(7),
                value: 25,
            },
            &mut EverIncreasingDice::new(),
        );
        assert_eq!(t.diagnostics, [Diagnostic::CombatantNotFound(id(7))]);
    }

    #[test]
    fn invalid_die_is_clamped() {
        let run = run_of(vec![fighter(1, "A", 0)]);
        let t = apply(
            &run,
            Action::RollInitiative(InitiativeSettings::default().with_die(1)),
            &mut ScriptedDice::new([20]),
        );
        assert_eq!(
            t.diagnostics,
            [Diagnostic::InvalidSettings {
                field: "die",
                given: 1,
                used: 2
            }]
        );
        assert_eq!(t.state.settings.die, 2);
        assert_eq!(t.state.current.combatants.get(id(1)).unwrap().initiative, Some(2));
        assert_eq!(t.state.turn, active(1, 1));
    }

    #[test]
    fn rolling_again_mid_combat_keeps_active() {
        let state = rolled(vec![fighter(1, "A", 0), fighter(2, "B", 0)], &[20, 10]);
        let t = apply(
            &state,
            Action::RollInitiative(InitiativeSettings::default().overwriting(true)),
            &mut ScriptedDice::new([1, 20]),
        );
        assert_eq!(names(&t.state), ["B", "A"]);
        assert_eq!(t.state.turn, active(1, 1));
    }

    #[test]
    fn base_snapshot_is_untouched() {
        let state = rolled(vec![fighter(1, "A", 0), fighter(2, "B", 0)], &[20, 10]);
        let s = apply(&state, Action::Remove(id(1)), &mut EverIncreasingDice::new()).state;
        assert_eq!(s.base.combatants.len(), 2);
        assert!(s.base.combatants.iter().all(|c| c.initiative.is_none()));
    }
}
