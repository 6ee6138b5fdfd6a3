/*!
 * Core Types
 * Common types used across the simulator
 */

/// Simulated time, in whole ticks
pub type Tick = u32;

/// Scheduling priority (lower value is more urgent)
pub type Priority = i32;

/// Context switch counter
pub type SwitchCount = u64;
