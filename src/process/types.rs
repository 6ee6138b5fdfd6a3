/*!
 * Process Types
 * Process control block and creation request
 */

use crate::core::id::ProcessId;
use crate::core::serde::tick_or_sentinel;
use crate::core::types::{Priority, Tick};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Process status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessStatus {
    /// Not yet arrived
    Waiting,
    /// Arrived and eligible to run
    Ready,
    /// Holding the CPU
    Running,
    /// All burst time consumed
    Completed,
}

impl ProcessStatus {
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Ready => "ready",
            Self::Running => "running",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Process creation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NewProcess {
    pub label: String,
    pub arrival_time: Tick,
    pub burst_time: Tick,
    pub priority: Priority,
}

impl NewProcess {
    pub fn new(
        label: impl Into<String>,
        arrival_time: Tick,
        burst_time: Tick,
        priority: Priority,
    ) -> Self {
        Self {
            label: label.into(),
            arrival_time,
            burst_time,
            priority,
        }
    }
}

/// Simulated process control block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Process {
    pub id: ProcessId,
    pub label: String,
    pub arrival_time: Tick,
    pub burst_time: Tick,
    pub priority: Priority,
    pub status: ProcessStatus,
    pub remaining_time: Tick,
    pub waiting_time: Tick,
    pub turnaround_time: Tick,
    /// First dispatch tick minus arrival; `None` until dispatched
    #[serde(with = "tick_or_sentinel")]
    pub response_time: Option<Tick>,
    pub completion_time: Tick,
}

impl Process {
    /// Create a process in its initial waiting state with a fresh identity
    pub fn new(spec: NewProcess) -> Self {
        Self::with_id(ProcessId::new(), spec)
    }

    pub fn with_id(id: ProcessId, spec: NewProcess) -> Self {
        Self {
            id,
            label: spec.label,
            arrival_time: spec.arrival_time,
            burst_time: spec.burst_time,
            priority: spec.priority,
            status: ProcessStatus::Waiting,
            remaining_time: spec.burst_time,
            waiting_time: 0,
            turnaround_time: 0,
            response_time: None,
            completion_time: 0,
        }
    }

    /// Restore the initial waiting state, keeping identity and workload
    pub fn reset(&mut self) {
        self.status = ProcessStatus::Waiting;
        self.remaining_time = self.burst_time;
        self.waiting_time = 0;
        self.turnaround_time = 0;
        self.response_time = None;
        self.completion_time = 0;
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.status == ProcessStatus::Completed
    }

    /// The creation request this process was built from
    pub fn spec(&self) -> NewProcess {
        NewProcess::new(
            self.label.clone(),
            self.arrival_time,
            self.burst_time,
            self.priority,
        )
    }
}
