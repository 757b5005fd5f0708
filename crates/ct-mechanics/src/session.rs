//! Encounter session management.
//!
//! `EncounterSession` owns the building encounter, at most one running
//! encounter, and the dice and identifier capabilities every action needs.
//! Hosts that embed it in a concurrent environment must serialize access.

use ct_core::{Combatant, CombatantId, Definition, Encounter, IdGenerator};

use crate::combat::{Action, InsertPosition, RunId, RunningEncounter, Transition, apply};
use crate::diagnostic::Diagnostic;
use crate::dice::DiceSource;
use crate::error::{SessionError, SessionResult};

/// A building encounter plus its optional running instance.
pub struct EncounterSession<D, G> {
    building: Encounter,
    running: Option<RunningEncounter>,
    dice: D,
    ids: G,
}

impl<D: DiceSource, G: IdGenerator> EncounterSession<D, G> {
    /// Create a session around an encounter being built.
    pub fn new(building: Encounter, dice: D, ids: G) -> Self {
        Self {
            building,
            running: None,
            dice,
            ids,
        }
    }

    /// The encounter as authored.
    pub fn building(&self) -> &Encounter {
        &self.building
    }

    /// The running encounter, if combat is in progress.
    pub fn running(&self) -> Option<&RunningEncounter> {
        self.running.as_ref()
    }

    /// Returns true if an encounter is running.
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Add a new combatant to the building encounter.
    pub fn add_to_building(&mut self, definition: Definition) -> SessionResult<CombatantId> {
        let id = self.mint_combatant_id();
        self.building.add_combatant(Combatant::new(id, definition))?;
        Ok(id)
    }

    /// Remove a combatant from the building encounter.
    pub fn remove_from_building(&mut self, id: CombatantId) -> SessionResult<Combatant> {
        let (_, removed) = self.building.remove_combatant(id)?;
        Ok(removed)
    }

    /// Start a run of the building encounter.
    pub fn run(&mut self) -> SessionResult<&RunningEncounter> {
        if self.running.is_some() {
            return Err(SessionError::AlreadyRunning);
        }
        let id = RunId(self.ids.next_uuid());
        tracing::info!(
            run = %id,
            encounter = %self.building.name,
            combatants = self.building.combatants.len(),
            "starting encounter"
        );
        let running = self
            .running
            .insert(RunningEncounter::new(id, &self.building));
        Ok(&*running)
    }

    /// Apply an action to the running encounter.
    pub fn dispatch(&mut self, action: Action) -> SessionResult<Transition> {
        let running = self.running.as_ref().ok_or(SessionError::NotRunning)?;
        let transition = apply(running, action, &mut self.dice);
        self.running = Some(transition.state.clone());
        Ok(transition)
    }

    /// Bring a freshly created combatant into the running encounter.
    pub fn spawn(
        &mut self,
        definition: Definition,
        position: InsertPosition,
    ) -> SessionResult<(CombatantId, Vec<Diagnostic>)> {
        if self.running.is_none() {
            return Err(SessionError::NotRunning);
        }
        let id = self.mint_combatant_id();
        let transition = self.dispatch(Action::Add {
            combatant: Combatant::new(id, definition),
            position,
        })?;
        Ok((id, transition.diagnostics))
    }

    /// Discard the running encounter and return to building.
    pub fn end(&mut self) -> SessionResult<RunningEncounter> {
        let running = self.running.take().ok_or(SessionError::NotRunning)?;
        tracing::info!(run = %running.id, round = running.round(), "encounter ended");
        Ok(running)
    }

    /// Mint a fresh identifier for a definition created on the fly.
    pub fn mint_definition_id(&mut self) -> uuid::Uuid {
        self.ids.next_uuid()
    }

    fn mint_combatant_id(&mut self) -> CombatantId {
        CombatantId::from_uuid(self.ids.next_uuid())
    }
}
