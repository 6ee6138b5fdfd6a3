/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::id::{ProcessId, SimulationId};
use super::types::Tick;
use crate::scheduler::SimulationStatus;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors, rejected before anything reaches the engine
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Process label is required")]
    #[diagnostic(
        code(validation::empty_label),
        help("Give every process a non-blank label such as \"P1\".")
    )]
    EmptyLabel,

    #[error("Process label '{0}' is already used in this simulation")]
    #[diagnostic(
        code(validation::duplicate_label),
        help("Process labels must be unique within a simulation.")
    )]
    DuplicateLabel(String),

    #[error("Burst time {0} is invalid")]
    #[diagnostic(
        code(validation::invalid_burst_time),
        help("A process needs at least one tick of CPU time.")
    )]
    InvalidBurstTime(Tick),

    #[error("Time quantum {value} is outside {min}..={max}")]
    #[diagnostic(code(validation::invalid_time_quantum))]
    InvalidTimeQuantum { value: Tick, min: Tick, max: Tick },

    #[error("Context switch overhead {value} is outside {min}..={max}")]
    #[diagnostic(code(validation::invalid_overhead))]
    InvalidOverhead { value: Tick, min: Tick, max: Tick },

    #[error("Unknown scheduling algorithm '{0}'")]
    #[diagnostic(
        code(validation::invalid_algorithm),
        help("Use one of: fcfs, sjf, priority, rr, srtf.")
    )]
    InvalidAlgorithm(String),

    #[error("Simulation cannot be reconfigured while {0}")]
    #[diagnostic(
        code(validation::not_configurable),
        help("Reset the simulation before changing its processes or settings.")
    )]
    NotConfigurable(SimulationStatus),
}

/// Engine precondition violations; the input state is never modified
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Simulation is not running (status: {0})")]
    #[diagnostic(
        code(scheduler::not_running),
        help("Start or resume the simulation before stepping it.")
    )]
    NotRunning(SimulationStatus),

    #[error("Simulation has no processes")]
    #[diagnostic(
        code(scheduler::empty_roster),
        help("Add at least one process before stepping.")
    )]
    EmptyRoster,

    #[error("Process {0} is referenced by the scheduler but missing from the roster")]
    #[diagnostic(code(scheduler::unknown_process))]
    UnknownProcess(ProcessId),
}

/// Controller-level errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimulationError {
    #[error("Simulation {0} not found")]
    #[diagnostic(
        code(simulation::not_found),
        help("The simulation may have been deleted or never existed.")
    )]
    NotFound(SimulationId),

    #[error("Process {0} not found")]
    #[diagnostic(code(simulation::process_not_found))]
    ProcessNotFound(ProcessId),

    #[error("No current simulation")]
    #[diagnostic(
        code(simulation::no_current),
        help("Create a simulation first.")
    )]
    NoCurrent,

    #[error("Cannot {action} a simulation that is {status}")]
    #[diagnostic(code(simulation::invalid_transition))]
    InvalidTransition {
        action: String,
        status: SimulationStatus,
    },

    #[error("Simulation did not complete within {0} ticks")]
    #[diagnostic(
        code(simulation::tick_limit_exceeded),
        help("Check for processes with very distant arrival times.")
    )]
    TickLimitExceeded(Tick),

    #[error("Invalid scenario: {0}")]
    #[diagnostic(
        code(simulation::invalid_scenario),
        help("Scenario files use the same JSON shape as the configuration export.")
    )]
    InvalidScenario(String),

    #[error("Failed to serialize export: {0}")]
    #[diagnostic(code(simulation::serialization))]
    Serialization(String),
}

/// Unified simulator error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum SimError {
    #[error("Validation error: {0}")]
    #[diagnostic(transparent)]
    Validation(#[from] ValidationError),

    #[error("Scheduler error: {0}")]
    #[diagnostic(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error("Simulation error: {0}")]
    #[diagnostic(transparent)]
    Simulation(#[from] SimulationError),

    #[error("I/O error: {0}")]
    #[diagnostic(code(io::error))]
    Io(#[from] std::io::Error),
}

/// Engine result type
pub type SchedulerResult<T> = Result<T, SchedulerError>;

/// Common result type for controller operations
pub type SimResult<T> = Result<T, SimError>;
