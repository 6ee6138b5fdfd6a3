/*!
 * Simulator Limits and Defaults
 *
 * Centralized location for configuration bounds and default values.
 */

use super::types::Tick;
use std::time::Duration;

// =============================================================================
// ROUND ROBIN
// =============================================================================

/// Default time quantum for newly created simulations
pub const DEFAULT_TIME_QUANTUM: Tick = 3;

/// Smallest accepted time quantum
pub const MIN_TIME_QUANTUM: Tick = 1;

/// Largest accepted time quantum
pub const MAX_TIME_QUANTUM: Tick = 10;

// =============================================================================
// CONTEXT SWITCH OVERHEAD
// =============================================================================

/// Default context switch overhead (recorded, not charged to the timeline)
pub const DEFAULT_CONTEXT_SWITCH_OVERHEAD: Tick = 1;

pub const MIN_CONTEXT_SWITCH_OVERHEAD: Tick = 0;

pub const MAX_CONTEXT_SWITCH_OVERHEAD: Tick = 5;

// =============================================================================
// PROCESSES
// =============================================================================

/// Minimum CPU time a process may request
pub const MIN_BURST_TIME: Tick = 1;

// =============================================================================
// RUNNER
// =============================================================================

/// Wall-clock interval between automatic steps
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(500);

/// Safety cap for `run_to_completion`
/// Every tick either executes a process or waits for a future arrival, so a
/// valid roster always completes well below this bound.
pub const MAX_SIMULATION_TICKS: Tick = 1_000_000;
