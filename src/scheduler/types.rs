/*!
 * Scheduler Types
 * Algorithm selection and time quantum configuration
 */

use crate::core::errors::ValidationError;
use crate::core::limits::{DEFAULT_TIME_QUANTUM, MAX_TIME_QUANTUM, MIN_TIME_QUANTUM};
use crate::core::types::Tick;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Scheduling algorithm, fixed for the lifetime of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// First-come-first-served
    Fcfs,
    /// Shortest job first (non-preemptive)
    Sjf,
    /// Lowest priority value first (non-preemptive)
    Priority,
    /// Round robin with a fixed time quantum
    RoundRobin,
    /// Shortest remaining time first (preemptive)
    Srtf,
}

impl Algorithm {
    /// Every algorithm, in display order
    pub const ALL: [Algorithm; 5] = [
        Self::Fcfs,
        Self::Sjf,
        Self::Priority,
        Self::RoundRobin,
        Self::Srtf,
    ];

    /// Convert to the short wire representation
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Priority => "priority",
            Self::RoundRobin => "rr",
            Self::Srtf => "srtf",
        }
    }

    /// Human-readable name
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Fcfs => "First-Come-First-Served",
            Self::Sjf => "Shortest Job First",
            Self::Priority => "Priority",
            Self::RoundRobin => "Round Robin",
            Self::Srtf => "Shortest Remaining Time First",
        }
    }

    /// Whether the dispatch phase may displace a running process
    #[inline(always)]
    pub const fn is_preemptive(&self) -> bool {
        matches!(self, Self::Srtf)
    }

    /// Whether the time quantum takes part in scheduling decisions
    #[inline(always)]
    pub const fn uses_quantum(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }
}

impl FromStr for Algorithm {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Self::Fcfs),
            "sjf" => Ok(Self::Sjf),
            "priority" | "prio" => Ok(Self::Priority),
            "rr" | "round_robin" | "roundrobin" => Ok(Self::RoundRobin),
            "srtf" => Ok(Self::Srtf),
            _ => Err(ValidationError::InvalidAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Algorithm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Round-robin time quantum in ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TimeQuantum(Tick);

impl TimeQuantum {
    /// Create a validated time quantum
    pub fn new(ticks: Tick) -> Result<Self, ValidationError> {
        if !(MIN_TIME_QUANTUM..=MAX_TIME_QUANTUM).contains(&ticks) {
            return Err(ValidationError::InvalidTimeQuantum {
                value: ticks,
                min: MIN_TIME_QUANTUM,
                max: MAX_TIME_QUANTUM,
            });
        }
        Ok(Self(ticks))
    }

    #[inline(always)]
    pub const fn get(&self) -> Tick {
        self.0
    }
}

impl Default for TimeQuantum {
    fn default() -> Self {
        Self(DEFAULT_TIME_QUANTUM)
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = Tick::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}
