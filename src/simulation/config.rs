/*!
 * Simulation Configuration
 * Creation requests and scenario files
 */

use crate::core::errors::{SimError, SimResult, SimulationError, ValidationError};
use crate::core::limits::{MAX_CONTEXT_SWITCH_OVERHEAD, MIN_CONTEXT_SWITCH_OVERHEAD};
use crate::core::types::Tick;
use crate::process::NewProcess;
use crate::scheduler::{Algorithm, Simulation};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Request to create a simulation
///
/// Also the on-disk scenario format and the shape of the configuration
/// export, so an exported run can be loaded back as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationConfig {
    pub algorithm: Algorithm,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_quantum: Option<Tick>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_switch_overhead: Option<Tick>,
    #[serde(default)]
    pub processes: Vec<NewProcess>,
}

impl SimulationConfig {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            time_quantum: None,
            context_switch_overhead: None,
            processes: Vec::new(),
        }
    }

    pub fn with_time_quantum(mut self, ticks: Tick) -> Self {
        self.time_quantum = Some(ticks);
        self
    }

    pub fn with_context_switch_overhead(mut self, ticks: Tick) -> Self {
        self.context_switch_overhead = Some(ticks);
        self
    }

    pub fn with_process(mut self, process: NewProcess) -> Self {
        self.processes.push(process);
        self
    }

    pub fn with_processes(mut self, processes: impl IntoIterator<Item = NewProcess>) -> Self {
        self.processes.extend(processes);
        self
    }

    /// Configuration that recreates `sim` from scratch
    pub fn from_simulation(sim: &Simulation) -> Self {
        Self {
            algorithm: sim.algorithm,
            time_quantum: Some(sim.time_quantum.get()),
            context_switch_overhead: Some(sim.context_switch_overhead),
            processes: sim.processes.iter().map(|p| p.spec()).collect(),
        }
    }

    /// Parse a JSON scenario
    pub fn from_json(json: &str) -> SimResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| SimulationError::InvalidScenario(e.to_string()).into())
    }

    /// Load a JSON scenario file
    pub fn from_path(path: impl AsRef<Path>) -> SimResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref()).map_err(SimError::Io)?;
        Self::from_json(&raw)
    }

    /// Pretty-printed JSON in the scenario file format
    pub fn to_json(&self) -> SimResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SimulationError::Serialization(e.to_string()).into())
    }
}

pub(crate) fn validate_overhead(ticks: Tick) -> Result<Tick, ValidationError> {
    if !(MIN_CONTEXT_SWITCH_OVERHEAD..=MAX_CONTEXT_SWITCH_OVERHEAD).contains(&ticks) {
        return Err(ValidationError::InvalidOverhead {
            value: ticks,
            min: MIN_CONTEXT_SWITCH_OVERHEAD,
            max: MAX_CONTEXT_SWITCH_OVERHEAD,
        });
    }
    Ok(ticks)
}
