use std::io::{self, BufRead, Write};

use colored::Colorize;

use ct_core::Definition;
use ct_mechanics::{Action, InitiativeSettings, InsertPosition, Transition};

use super::Session;
use crate::RollOptions;

const HELP: &str = "\
  roll [all]                  roll initiative (all: roll everyone again)
  start                       start combat once everyone has initiative
  next                        advance to the next turn
  remove <combatant>          take a combatant out of the fight
  add <name> [modifier] [now] add a combatant (now: acts next)
  reroll <combatant>          roll initiative again for one combatant
  init <combatant> <value>    set initiative by hand
  status                      show the turn order
  json                        print the running encounter as JSON
  quit                        leave";

/// Interactive driver around a running session.
pub struct Repl {
    session: Session,
    settings: InitiativeSettings,
}

impl Repl {
    pub fn new(session: Session, settings: InitiativeSettings) -> Self {
        Self { session, settings }
    }

    /// Handle one line of input and return what to print.
    pub fn process(&mut self, input: &str) -> Result<String, String> {
        let mut words = input.split_whitespace();
        let command = words.next().unwrap_or_default().to_lowercase();
        let args: Vec<&str> = words.collect();

        match command.as_str() {
            "roll" | "r" => {
                let overwrite = args.first().is_some_and(|a| a.eq_ignore_ascii_case("all"));
                let settings = self.settings.clone().overwriting(overwrite);
                self.apply(Action::RollInitiative(settings))
            }
            "start" => self.apply(Action::Start),
            "next" | "n" => self.apply(Action::AdvanceTurn),
            "remove" | "rm" => {
                let id = super::find_combatant(self.running()?, &args.join(" "))?;
                self.apply(Action::Remove(id))
            }
            "add" => self.add(&args),
            "reroll" => {
                let id = super::find_combatant(self.running()?, &args.join(" "))?;
                self.apply(Action::Reroll(vec![id]))
            }
            "init" => {
                let Some((value, label)) = args.split_last() else {
                    return Err("usage: init <combatant> <value>".into());
                };
                let value: i32 = value
                    .parse()
                    .map_err(|_| format!("'{value}' is not a number"))?;
                let combatant = super::find_combatant(self.running()?, &label.join(" "))?;
                self.apply(Action::SetInitiative { combatant, value })
            }
            "status" | "s" => {
                let run = self.running()?;
                Ok(format!(
                    "{}\n  {}",
                    super::order_table(run),
                    super::turn_summary(run)
                ))
            }
            "json" => serde_json::to_string_pretty(self.running()?).map_err(|e| e.to_string()),
            "help" | "h" | "?" => Ok(HELP.to_string()),
            "quit" | "q" => Ok(String::new()),
            other => Err(format!("unknown command '{other}' (type 'help')")),
        }
    }

    fn running(&self) -> Result<&ct_mechanics::RunningEncounter, String> {
        self.session
            .running()
            .ok_or_else(|| "no encounter is running".to_string())
    }

    fn apply(&mut self, action: Action) -> Result<String, String> {
        let transition = self.session.dispatch(action).map_err(|e| e.to_string())?;
        Ok(describe(&transition))
    }

    /// `add <name> [modifier] [now]`. A name matching someone already in the
    /// fight reuses their definition, so the newcomer gets the next label.
    fn add(&mut self, args: &[&str]) -> Result<String, String> {
        let mut args = args.to_vec();
        let position = match args.last() {
            Some(word) if word.eq_ignore_ascii_case("now") => {
                args.pop();
                InsertPosition::AfterActive
            }
            _ => InsertPosition::End,
        };
        let modifier = match args.last().map(|word| word.parse::<i32>()) {
            Some(Ok(modifier)) if args.len() > 1 => {
                args.pop();
                Some(modifier)
            }
            _ => None,
        };
        let name = args.join(" ");
        if name.is_empty() {
            return Err("usage: add <name> [modifier] [now]".into());
        }

        let existing = self
            .running()?
            .current
            .combatants
            .iter()
            .find(|c| c.definition.name.eq_ignore_ascii_case(&name))
            .map(|c| c.definition.clone());
        let mut definition = match existing {
            Some(definition) => definition,
            None => Definition::ad_hoc(self.session.mint_definition_id(), name),
        };
        if let Some(modifier) = modifier {
            definition = definition.with_modifier(modifier);
        }

        let (id, diagnostics) = self
            .session
            .spawn(definition, position)
            .map_err(|e| e.to_string())?;
        let run = self.running()?;
        let label = run
            .current
            .combatants
            .get(id)
            .map(|c| c.label())
            .unwrap_or_default();
        let mut out = format!("  Added {label}.");
        if !diagnostics.is_empty() {
            out = format!("{}\n{out}", super::format_diagnostics(&diagnostics));
        }
        Ok(format!("{out}\n  {}", super::turn_summary(run)))
    }
}

fn describe(transition: &Transition) -> String {
    let state = &transition.state;
    let mut lines = Vec::new();
    if !transition.diagnostics.is_empty() {
        lines.push(super::format_diagnostics(&transition.diagnostics));
    }
    for roll in &transition.rolls.rolls {
        if let Some(c) = state.current.combatants.get(roll.combatant) {
            lines.push(format!("  {:<20} {roll}", c.label()));
        }
    }
    lines.push(format!("  {}", super::turn_summary(state)));
    lines.join("\n")
}

pub fn run(options: &RollOptions) -> Result<(), String> {
    let (session, settings) = super::start_session(options)?;
    let name = session
        .running()
        .map(|run| run.current.name.clone())
        .unwrap_or_default();
    let mut repl = Repl::new(session, settings);

    println!("  {} {name}", "Encounter:".bold());
    println!("  Type 'roll' to roll initiative, 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match repl.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.yellow());
            }
        }
    }

    Ok(())
}
