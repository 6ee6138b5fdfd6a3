/*!
 * Core Module
 * Fundamental simulator types, configuration and error handling
 */

pub mod config;
pub mod errors;
pub mod id;
pub mod limits;
pub mod serde;
pub mod types;

// Re-export for convenience
pub use config::SimulatorConfig;
pub use errors::*;
pub use id::{ProcessId, SimulationId};
pub use types::*;
