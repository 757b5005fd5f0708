use colored::Colorize;

use ct_mechanics::Action;

use crate::RollOptions;

pub fn run(options: &RollOptions, json: bool) -> Result<(), String> {
    let (mut session, settings) = super::start_session(options)?;
    let transition = session
        .dispatch(Action::RollInitiative(settings))
        .map_err(|e| e.to_string())?;
    let state = &transition.state;

    if json {
        let out = serde_json::to_string_pretty(state).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    if !transition.diagnostics.is_empty() {
        eprintln!("{}", super::format_diagnostics(&transition.diagnostics));
    }

    println!("  {} {}", "Encounter:".bold(), state.current.name);
    if state.current.combatants.is_empty() {
        println!("  No combatants.");
        return Ok(());
    }

    println!("{}", super::order_table(state));
    println!();
    for roll in &transition.rolls.rolls {
        if let Some(c) = state.current.combatants.get(roll.combatant) {
            println!("  {:<20} {roll}", c.label());
        }
    }
    println!();
    println!("  {}", super::turn_summary(state));

    Ok(())
}
