/*!
 * Scheduler Module
 * Tick-driven scheduling engine and its policies
 */

pub mod engine;
pub mod metrics;
mod policy;
pub mod state;
pub mod types;

// Re-export public API
pub use engine::{check_preconditions, step};
pub use metrics::{compute_metrics, Metrics};
pub use state::{ExecutionBlock, Simulation, SimulationStatus};
pub use types::{Algorithm, TimeQuantum};
