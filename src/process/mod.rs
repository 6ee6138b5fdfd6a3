/*!
 * Process Module
 * Simulated process records and their creation rules
 */

pub mod types;
pub mod validation;

pub use types::{NewProcess, Process, ProcessStatus};
pub use validation::{validate_new_process, validate_roster};
