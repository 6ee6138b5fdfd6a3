/*!
 * Simulation Module
 * Simulation store, lifecycle control and timed stepping
 */

pub mod config;
pub mod manager;
pub mod manager_builder;
pub mod runner;
pub mod traits;

// Re-export public API
pub use config::SimulationConfig;
pub use manager::SimulationManager;
pub use manager_builder::SimulationManagerBuilder;
pub use runner::{RunnerCommand, SimulationRunner};
pub use traits::SimulationControl;
