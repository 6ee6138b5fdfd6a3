/*!
 * JSON Exports
 * Metrics and configuration snapshots for external tooling
 */

use super::analysis::{analyze, Analysis};
use crate::core::errors::{SimResult, SimulationError};
use crate::core::id::SimulationId;
use crate::core::serde::tick_or_sentinel;
use crate::core::types::{Priority, Tick};
use crate::scheduler::{Algorithm, Metrics, Simulation};
use crate::simulation::SimulationConfig;
use serde::{Deserialize, Serialize};

/// Per-process outcome in the metrics export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutcome {
    pub label: String,
    pub arrival_time: Tick,
    pub burst_time: Tick,
    pub priority: Priority,
    pub waiting_time: Tick,
    pub turnaround_time: Tick,
    #[serde(with = "tick_or_sentinel")]
    pub response_time: Option<Tick>,
}

/// Metrics export document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsExport {
    pub simulation_id: SimulationId,
    pub algorithm: Algorithm,
    pub time_quantum: Tick,
    pub metrics: Metrics,
    pub analysis: Analysis,
    pub processes: Vec<ProcessOutcome>,
}

impl MetricsExport {
    pub fn from_simulation(sim: &Simulation) -> Self {
        Self {
            simulation_id: sim.id,
            algorithm: sim.algorithm,
            time_quantum: sim.time_quantum.get(),
            metrics: sim.metrics,
            analysis: analyze(sim),
            processes: sim
                .processes
                .iter()
                .map(|p| ProcessOutcome {
                    label: p.label.clone(),
                    arrival_time: p.arrival_time,
                    burst_time: p.burst_time,
                    priority: p.priority,
                    waiting_time: p.waiting_time,
                    turnaround_time: p.turnaround_time,
                    response_time: p.response_time,
                })
                .collect(),
        }
    }
}

/// Pretty-printed metrics export
pub fn metrics_json(sim: &Simulation) -> SimResult<String> {
    serde_json::to_string_pretty(&MetricsExport::from_simulation(sim))
        .map_err(|e| SimulationError::Serialization(e.to_string()).into())
}

/// Pretty-printed configuration export, loadable as a scenario file
pub fn config_json(sim: &Simulation) -> SimResult<String> {
    SimulationConfig::from_simulation(sim).to_json()
}
