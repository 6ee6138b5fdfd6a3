/*!
 * Simulation Control Traits
 * Lifecycle interface consumed by the timed runner
 */

use crate::core::errors::SimResult;
use crate::core::id::SimulationId;
use crate::scheduler::{Simulation, SimulationStatus};

/// Lifecycle operations on a stored simulation
pub trait SimulationControl: Send + Sync {
    /// Start a stopped simulation or resume a paused one
    fn start(&self, id: SimulationId) -> SimResult<Simulation>;

    /// Stop issuing steps; state is kept
    fn pause(&self, id: SimulationId) -> SimResult<Simulation>;

    /// Restore the initial state
    fn reset(&self, id: SimulationId) -> SimResult<Simulation>;

    /// Advance one tick and commit the result
    fn step(&self, id: SimulationId) -> SimResult<Simulation>;

    /// Current lifecycle status
    fn status(&self, id: SimulationId) -> SimResult<SimulationStatus>;
}
