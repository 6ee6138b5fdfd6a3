/*!
 * Simulator Configuration
 *
 * Runtime configuration with environment overrides
 */

use super::limits::{
    DEFAULT_CONTEXT_SWITCH_OVERHEAD, DEFAULT_TICK_INTERVAL, DEFAULT_TIME_QUANTUM,
};
use super::types::Tick;
use log::warn;
use std::str::FromStr;
use std::time::Duration;

/// Environment variable for the runner interval in milliseconds
pub const ENV_TICK_INTERVAL_MS: &str = "SCHED_TICK_INTERVAL_MS";
/// Environment variable for the default round-robin quantum
pub const ENV_DEFAULT_QUANTUM: &str = "SCHED_DEFAULT_QUANTUM";
/// Environment variable for the default context switch overhead
pub const ENV_DEFAULT_OVERHEAD: &str = "SCHED_DEFAULT_OVERHEAD";

/// Simulator-wide configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Wall-clock delay between automatic steps
    pub tick_interval: Duration,
    /// Quantum used when a simulation request omits one
    pub default_time_quantum: Tick,
    /// Overhead used when a simulation request omits one
    pub default_context_switch_overhead: Tick,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            default_time_quantum: DEFAULT_TIME_QUANTUM,
            default_context_switch_overhead: DEFAULT_CONTEXT_SWITCH_OVERHEAD,
        }
    }
}

impl SimulatorConfig {
    /// Build configuration from defaults overridden by environment variables
    ///
    /// Unparseable values are ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let tick_interval = parse_var::<u64, _>(&lookup, ENV_TICK_INTERVAL_MS)
            .map(Duration::from_millis)
            .unwrap_or(defaults.tick_interval);

        Self {
            tick_interval,
            default_time_quantum: parse_var(&lookup, ENV_DEFAULT_QUANTUM)
                .unwrap_or(defaults.default_time_quantum),
            default_context_switch_overhead: parse_var(&lookup, ENV_DEFAULT_OVERHEAD)
                .unwrap_or(defaults.default_context_switch_overhead),
        }
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a valid number", key, raw);
            None
        }
    }
}
