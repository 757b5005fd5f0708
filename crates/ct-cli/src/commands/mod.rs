pub mod roll;
pub mod run;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use ct_core::{CombatantId, Encounter, RandomIds};
use ct_mechanics::{
    AdvantageRule, Diagnostic, EncounterSession, InitiativeSettings, RunningEncounter, SeededDice,
};

use crate::RollOptions;
use crate::roster::Roster;

/// The session type every command drives.
pub type Session = EncounterSession<SeededDice, RandomIds>;

/// Build initiative settings from the command-line flags.
fn settings(options: &RollOptions) -> Result<InitiativeSettings, String> {
    let advantage = AdvantageRule::from_str_tag(&options.advantage).ok_or_else(|| {
        format!(
            "unknown advantage rule '{}' (expected definition, always, never)",
            options.advantage
        )
    })?;
    Ok(InitiativeSettings::default()
        .with_die(options.die)
        .with_advantage(advantage)
        .grouped(options.group))
}

/// Load the roster and start a run of it.
fn start_session(options: &RollOptions) -> Result<(Session, InitiativeSettings), String> {
    let settings = settings(options)?;
    let roster = Roster::load(&options.roster)?;
    let seed = options.seed.unwrap_or_else(rand::random);
    tracing::debug!(seed, "seeding dice");

    let mut session = Session::new(
        Encounter::new(roster.name.clone()),
        SeededDice::new(seed),
        RandomIds,
    );
    roster.populate(&mut session)?;
    session.run().map_err(|e| e.to_string())?;
    Ok((session, settings))
}

/// Render the turn order, marking the active combatant.
fn order_table(run: &RunningEncounter) -> Table {
    let active = run.active_combatant().map(|c| c.id);
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["", "Combatant", "Initiative", "Mod", "Id"]);

    for combatant in &run.current.combatants {
        let marker = if Some(combatant.id) == active { ">" } else { "" };
        let initiative = combatant
            .initiative
            .map_or_else(|| "-".to_string(), |i| i.to_string());
        table.add_row(vec![
            marker.to_string(),
            combatant.label(),
            initiative,
            format!("{:+}", combatant.initiative_modifier()),
            combatant.id.to_string(),
        ]);
    }
    table
}

/// One-line summary of whose turn it is.
fn turn_summary(run: &RunningEncounter) -> String {
    match run.active_combatant() {
        Some(active) => format!("Round {}: {}'s turn", run.round(), active.label().bold()),
        None if run.current.combatants.is_empty() => {
            format!("Combat over after round {}", run.round())
        }
        None => "Combat has not started".to_string(),
    }
}

/// Find a combatant by label (case-insensitive) or id prefix.
fn find_combatant(run: &RunningEncounter, query: &str) -> Result<CombatantId, String> {
    let query = query.trim();
    let combatants = &run.current.combatants;
    if let Some(c) = combatants
        .iter()
        .find(|c| c.label().eq_ignore_ascii_case(query))
    {
        return Ok(c.id);
    }

    let lowered = query.to_lowercase();
    let by_id: Vec<CombatantId> = combatants
        .iter()
        .filter(|c| !lowered.is_empty() && c.id.0.to_string().starts_with(&lowered))
        .map(|c| c.id)
        .collect();
    match by_id.as_slice() {
        [id] => Ok(*id),
        [] => Err(format!("no combatant named '{query}'")),
        _ => Err(format!("'{query}' matches more than one combatant")),
    }
}

fn format_diagnostics(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| format!("  {}", d.to_string().yellow()))
        .collect::<Vec<_>>()
        .join("\n")
}
