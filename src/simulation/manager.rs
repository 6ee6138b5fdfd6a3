/*!
 * Simulation Manager
 * In-memory simulation store and lifecycle controller
 */

use super::config::{validate_overhead, SimulationConfig};
use super::manager_builder::SimulationManagerBuilder;
use super::traits::SimulationControl;
use crate::core::config::SimulatorConfig;
use crate::core::errors::{SchedulerError, SimError, SimResult, SimulationError, ValidationError};
use crate::core::id::{ProcessId, SimulationId};
use crate::core::limits::MAX_SIMULATION_TICKS;
use crate::core::types::Tick;
use crate::process::{validate_new_process, validate_roster, NewProcess, Process};
use crate::scheduler::{self, Algorithm, Simulation, SimulationStatus, TimeQuantum};
use ahash::RandomState;
use dashmap::mapref::one::RefMut;
use dashmap::DashMap;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info, info_span, warn};

/// Owns every simulation and serializes updates per simulation
///
/// Each mutation holds the entry's write guard while the replacement state
/// is computed and committed, so readers only ever see whole ticks.
#[derive(Clone)]
pub struct SimulationManager {
    pub(super) simulations: Arc<DashMap<SimulationId, Simulation, RandomState>>,
    pub(super) current: Arc<RwLock<Option<SimulationId>>>,
    pub(super) config: SimulatorConfig,
}

impl SimulationManager {
    /// Create a manager with default configuration
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> SimulationManagerBuilder {
        SimulationManagerBuilder::new()
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Create a stopped simulation and make it the current one
    pub fn create_simulation(&self, request: SimulationConfig) -> SimResult<Simulation> {
        let quantum = TimeQuantum::new(
            request
                .time_quantum
                .unwrap_or(self.config.default_time_quantum),
        )?;
        let overhead = validate_overhead(
            request
                .context_switch_overhead
                .unwrap_or(self.config.default_context_switch_overhead),
        )?;
        validate_roster(&request.processes)?;

        let processes = request.processes.into_iter().map(Process::new).collect();
        let sim = Simulation::new(
            SimulationId::new(),
            request.algorithm,
            quantum,
            overhead,
            processes,
        );

        self.simulations.insert(sim.id, sim.clone());
        *self.current.write() = Some(sim.id);

        info!(
            simulation = %sim.id,
            algorithm = %sim.algorithm,
            quantum = quantum.get(),
            processes = sim.processes.len(),
            "Simulation created"
        );
        Ok(sim)
    }

    /// Add a process to a stopped simulation
    pub fn create_process(&self, id: SimulationId, request: NewProcess) -> SimResult<Process> {
        let mut entry = self.entry_mut(id)?;
        ensure_configurable(&entry)?;
        validate_new_process(&entry.processes, &request)?;

        let process = Process::new(request);
        entry.processes.push(process.clone());

        debug!(simulation = %id, process = %process.id, label = %process.label, "Process added");
        Ok(process)
    }

    /// Remove a process from a stopped simulation
    pub fn remove_process(&self, id: SimulationId, process_id: ProcessId) -> SimResult<Process> {
        let mut entry = self.entry_mut(id)?;
        ensure_configurable(&entry)?;

        let index = entry
            .processes
            .iter()
            .position(|p| p.id == process_id)
            .ok_or(SimulationError::ProcessNotFound(process_id))?;
        let removed = entry.processes.remove(index);

        debug!(simulation = %id, label = %removed.label, "Process removed");
        Ok(removed)
    }

    /// Change the round-robin quantum of a stopped simulation
    pub fn set_time_quantum(&self, id: SimulationId, ticks: Tick) -> SimResult<Simulation> {
        let quantum = TimeQuantum::new(ticks)?;
        let mut entry = self.entry_mut(id)?;
        ensure_configurable(&entry)?;
        entry.time_quantum = quantum;

        info!(simulation = %id, quantum = ticks, "Time quantum updated");
        Ok(entry.clone())
    }

    /// Change the algorithm of a stopped simulation
    pub fn set_algorithm(&self, id: SimulationId, algorithm: Algorithm) -> SimResult<Simulation> {
        let mut entry = self.entry_mut(id)?;
        ensure_configurable(&entry)?;
        entry.algorithm = algorithm;

        info!(simulation = %id, algorithm = %algorithm, "Algorithm updated");
        Ok(entry.clone())
    }

    /// Start (if needed) and step until every process has completed
    pub fn run_to_completion(&self, id: SimulationId) -> SimResult<Simulation> {
        let span = info_span!("run_to_completion", simulation = %id);
        let _enter = span.enter();

        let mut sim = match self.get(id)?.status {
            SimulationStatus::Stopped | SimulationStatus::Paused => self.start(id)?,
            _ => self.get(id)?,
        };

        while sim.status == SimulationStatus::Running {
            if sim.current_time >= MAX_SIMULATION_TICKS {
                warn!(ticks = sim.current_time, "Tick limit reached, pausing simulation");
                self.pause(id)?;
                return Err(SimulationError::TickLimitExceeded(MAX_SIMULATION_TICKS).into());
            }
            sim = self.step(id)?;
        }

        info!(
            ticks = sim.current_time,
            context_switches = sim.context_switches,
            "Simulation ran to completion"
        );
        Ok(sim)
    }

    /// Snapshot of a simulation
    pub fn get(&self, id: SimulationId) -> SimResult<Simulation> {
        self.simulations
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| SimulationError::NotFound(id).into())
    }

    /// The most recently created simulation
    pub fn current(&self) -> SimResult<Simulation> {
        let id = self.current_id().ok_or(SimulationError::NoCurrent)?;
        self.get(id)
    }

    pub fn current_id(&self) -> Option<SimulationId> {
        *self.current.read()
    }

    /// Identities of every stored simulation
    pub fn list(&self) -> Vec<SimulationId> {
        self.simulations.iter().map(|entry| *entry.key()).collect()
    }

    pub fn len(&self) -> usize {
        self.simulations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.simulations.is_empty()
    }

    /// Drop a simulation, clearing the current pointer if it matched
    pub fn delete_simulation(&self, id: SimulationId) -> SimResult<()> {
        self.simulations
            .remove(&id)
            .ok_or(SimulationError::NotFound(id))?;

        let mut current = self.current.write();
        if *current == Some(id) {
            *current = None;
        }
        info!(simulation = %id, "Simulation deleted");
        Ok(())
    }

    fn entry_mut(
        &self,
        id: SimulationId,
    ) -> SimResult<RefMut<'_, SimulationId, Simulation, RandomState>> {
        self.simulations
            .get_mut(&id)
            .ok_or_else(|| SimulationError::NotFound(id).into())
    }
}

impl Default for SimulationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationControl for SimulationManager {
    fn start(&self, id: SimulationId) -> SimResult<Simulation> {
        let mut entry = self.entry_mut(id)?;
        match entry.status {
            SimulationStatus::Stopped | SimulationStatus::Paused => {}
            status => return Err(invalid_transition("start", status)),
        }
        if entry.processes.is_empty() {
            return Err(SchedulerError::EmptyRoster.into());
        }

        entry.start();
        info!(
            simulation = %id,
            tick = entry.current_time,
            ready = entry.ready_queue.len(),
            "Simulation started"
        );
        Ok(entry.clone())
    }

    fn pause(&self, id: SimulationId) -> SimResult<Simulation> {
        let mut entry = self.entry_mut(id)?;
        if entry.status != SimulationStatus::Running {
            return Err(invalid_transition("pause", entry.status));
        }

        entry.status = SimulationStatus::Paused;
        info!(simulation = %id, tick = entry.current_time, "Simulation paused");
        Ok(entry.clone())
    }

    fn reset(&self, id: SimulationId) -> SimResult<Simulation> {
        let mut entry = self.entry_mut(id)?;
        entry.reset();
        info!(simulation = %id, "Simulation reset");
        Ok(entry.clone())
    }

    fn step(&self, id: SimulationId) -> SimResult<Simulation> {
        let mut entry = self.entry_mut(id)?;
        let next = scheduler::step(&entry)?;
        *entry = next.clone();
        Ok(next)
    }

    fn status(&self, id: SimulationId) -> SimResult<SimulationStatus> {
        self.simulations
            .get(&id)
            .map(|entry| entry.status)
            .ok_or_else(|| SimulationError::NotFound(id).into())
    }
}

fn ensure_configurable(sim: &Simulation) -> Result<(), ValidationError> {
    if sim.status != SimulationStatus::Stopped {
        return Err(ValidationError::NotConfigurable(sim.status));
    }
    Ok(())
}

fn invalid_transition(action: &str, status: SimulationStatus) -> SimError {
    SimulationError::InvalidTransition {
        action: action.to_string(),
        status,
    }
    .into()
}
