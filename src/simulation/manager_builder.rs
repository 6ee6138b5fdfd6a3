/*!
 * Simulation Manager Builder
 * Builder pattern for SimulationManager construction
 */

use super::manager::SimulationManager;
use crate::core::config::SimulatorConfig;
use ahash::RandomState;
use dashmap::DashMap;
use log::info;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

/// Builder for SimulationManager
pub struct SimulationManagerBuilder {
    config: Option<SimulatorConfig>,
    tick_interval: Option<Duration>,
    capacity: usize,
}

impl SimulationManagerBuilder {
    /// Create a new SimulationManager builder
    pub fn new() -> Self {
        Self {
            config: None,
            tick_interval: None,
            capacity: 0,
        }
    }

    /// Use an explicit configuration instead of defaults
    pub fn with_config(mut self, config: SimulatorConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Read configuration from the environment
    pub fn with_env_config(mut self) -> Self {
        self.config = Some(SimulatorConfig::from_env());
        self
    }

    /// Override the runner interval
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = Some(interval);
        self
    }

    /// Pre-size the simulation store
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Build the SimulationManager
    pub fn build(self) -> SimulationManager {
        let mut config = self.config.unwrap_or_default();
        if let Some(interval) = self.tick_interval {
            config = config.with_tick_interval(interval);
        }

        info!(
            "Simulation manager initialized: tick_interval={:?}, default_quantum={}, default_overhead={}",
            config.tick_interval, config.default_time_quantum, config.default_context_switch_overhead
        );

        SimulationManager {
            simulations: Arc::new(DashMap::with_capacity_and_hasher(
                self.capacity,
                RandomState::new(),
            )),
            current: Arc::new(RwLock::new(None)),
            config,
        }
    }
}

impl Default for SimulationManagerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
