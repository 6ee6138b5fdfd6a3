/*!
 * Process Validation
 * Creation-boundary checks for process requests
 */

use super::types::{NewProcess, Process};
use crate::core::errors::ValidationError;
use crate::core::limits::MIN_BURST_TIME;
use crate::core::types::Tick;

/// Validate a creation request against the roster it will join
pub fn validate_new_process(roster: &[Process], spec: &NewProcess) -> Result<(), ValidationError> {
    validate_label(&spec.label)?;
    validate_burst_time(spec.burst_time)?;
    ensure_unique_label(roster, &spec.label)
}

/// Labels must contain something other than whitespace
pub(crate) fn validate_label(label: &str) -> Result<(), ValidationError> {
    if label.trim().is_empty() {
        return Err(ValidationError::EmptyLabel);
    }
    Ok(())
}

pub(crate) fn validate_burst_time(burst_time: Tick) -> Result<(), ValidationError> {
    if burst_time < MIN_BURST_TIME {
        return Err(ValidationError::InvalidBurstTime(burst_time));
    }
    Ok(())
}

fn ensure_unique_label(roster: &[Process], label: &str) -> Result<(), ValidationError> {
    if roster.iter().any(|p| p.label == label) {
        return Err(ValidationError::DuplicateLabel(label.to_string()));
    }
    Ok(())
}

/// Validate a whole batch of requests, including duplicates within the batch
pub fn validate_roster(specs: &[NewProcess]) -> Result<(), ValidationError> {
    for (index, spec) in specs.iter().enumerate() {
        validate_label(&spec.label)?;
        validate_burst_time(spec.burst_time)?;
        if specs[..index].iter().any(|other| other.label == spec.label) {
            return Err(ValidationError::DuplicateLabel(spec.label.clone()));
        }
    }
    Ok(())
}
