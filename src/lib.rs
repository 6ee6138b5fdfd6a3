/*!
 * CPU Scheduling Simulator Library
 * Discrete-tick simulation of classic uniprocessor scheduling algorithms
 */

pub mod core;
pub mod monitoring;
pub mod process;
pub mod report;
pub mod scheduler;
pub mod simulation;

// Re-exports
pub use crate::core::errors::*;
pub use crate::core::{ProcessId, SimulationId, SimulatorConfig, Tick};
pub use monitoring::init_tracing;
pub use process::{NewProcess, Process, ProcessStatus};
pub use report::{analyze, config_json, csv_report, metrics_json, Analysis};
pub use scheduler::{
    compute_metrics, step, Algorithm, ExecutionBlock, Metrics, Simulation, SimulationStatus,
    TimeQuantum,
};
pub use simulation::{SimulationConfig, SimulationControl, SimulationManager, SimulationRunner};
