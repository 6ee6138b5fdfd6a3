/*!
 * Simulation State
 * The record advanced by the engine, one tick at a time
 */

use super::metrics::Metrics;
use super::types::{Algorithm, TimeQuantum};
use crate::core::id::{ProcessId, SimulationId};
use crate::core::types::{SwitchCount, Tick};
use crate::process::{Process, ProcessStatus};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Simulation lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationStatus {
    Stopped,
    Running,
    Paused,
    /// Terminal until reset
    Completed,
}

impl SimulationStatus {
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for SimulationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tick of CPU occupancy, `[start_time, end_time)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ExecutionBlock {
    pub process_id: ProcessId,
    pub start_time: Tick,
    pub end_time: Tick,
}

impl ExecutionBlock {
    pub fn new(process_id: ProcessId, start_time: Tick, end_time: Tick) -> Self {
        Self {
            process_id,
            start_time,
            end_time,
        }
    }

    #[inline]
    pub fn duration(&self) -> Tick {
        self.end_time - self.start_time
    }
}

/// One run of a scheduling algorithm over a fixed process set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Simulation {
    pub id: SimulationId,
    pub algorithm: Algorithm,
    pub time_quantum: TimeQuantum,
    /// Recorded for reporting; not charged to the timeline
    pub context_switch_overhead: Tick,
    pub current_time: Tick,
    pub status: SimulationStatus,
    pub processes: Vec<Process>,
    pub ready_queue: VecDeque<ProcessId>,
    pub running_process: Option<ProcessId>,
    /// Consecutive ticks the running process has held the CPU since dispatch
    pub slice_ticks: Tick,
    pub context_switches: SwitchCount,
    pub execution_history: Vec<ExecutionBlock>,
    pub metrics: Metrics,
}

impl Simulation {
    /// Create a stopped simulation with every process in its initial state
    pub fn new(
        id: SimulationId,
        algorithm: Algorithm,
        time_quantum: TimeQuantum,
        context_switch_overhead: Tick,
        processes: Vec<Process>,
    ) -> Self {
        let mut sim = Self {
            id,
            algorithm,
            time_quantum,
            context_switch_overhead,
            current_time: 0,
            status: SimulationStatus::Stopped,
            processes,
            ready_queue: VecDeque::new(),
            running_process: None,
            slice_ticks: 0,
            context_switches: 0,
            execution_history: Vec::new(),
            metrics: Metrics::default(),
        };
        sim.reset();
        sim
    }

    /// Look up a process by identity
    pub fn process(&self, id: ProcessId) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Look up a process by its display label
    pub fn process_by_label(&self, label: &str) -> Option<&Process> {
        self.processes.iter().find(|p| p.label == label)
    }

    /// The process holding the CPU, if any
    pub fn running(&self) -> Option<&Process> {
        self.running_process.and_then(|id| self.process(id))
    }

    /// Ready processes in queue order
    pub fn ready_processes(&self) -> impl Iterator<Item = &Process> + '_ {
        self.ready_queue.iter().filter_map(move |id| self.process(*id))
    }

    /// True once every process has completed
    pub fn all_completed(&self) -> bool {
        self.processes.iter().all(Process::is_completed)
    }

    /// Ticks during which some process held the CPU
    pub fn busy_ticks(&self) -> Tick {
        self.execution_history.iter().map(ExecutionBlock::duration).sum()
    }

    /// Begin or resume the run
    ///
    /// From `Stopped`, processes that have already arrived are promoted to
    /// ready in roster order. Resuming from `Paused` keeps the queue as is.
    pub fn start(&mut self) {
        if self.status == SimulationStatus::Stopped {
            let now = self.current_time;
            for p in self.processes.iter_mut() {
                if p.status == ProcessStatus::Waiting && p.arrival_time <= now {
                    p.status = ProcessStatus::Ready;
                    self.ready_queue.push_back(p.id);
                }
            }
        }
        self.status = SimulationStatus::Running;
    }

    /// Restore every process to waiting and clear all derived state
    pub fn reset(&mut self) {
        for p in self.processes.iter_mut() {
            p.reset();
        }
        self.current_time = 0;
        self.status = SimulationStatus::Stopped;
        self.ready_queue.clear();
        self.running_process = None;
        self.slice_ticks = 0;
        self.context_switches = 0;
        self.execution_history.clear();
        self.metrics = Metrics::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::NewProcess;

    fn sample() -> Simulation {
        let processes = vec![
            Process::new(NewProcess::new("A", 0, 3, 1)),
            Process::new(NewProcess::new("B", 2, 1, 1)),
            Process::new(NewProcess::new("C", 0, 2, 1)),
        ];
        Simulation::new(
            SimulationId::new(),
            Algorithm::Fcfs,
            TimeQuantum::default(),
            1,
            processes,
        )
    }

    #[test]
    fn test_start_seeds_ready_queue_in_roster_order() {
        let mut sim = sample();
        sim.start();

        let labels: Vec<_> = sim.ready_processes().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "C"]);
        assert_eq!(sim.status, SimulationStatus::Running);
        assert_eq!(
            sim.process_by_label("B").map(|p| p.status),
            Some(ProcessStatus::Waiting)
        );
    }

    #[test]
    fn test_resume_does_not_requeue() {
        let mut sim = sample();
        sim.start();
        sim.status = SimulationStatus::Paused;
        sim.start();
        assert_eq!(sim.ready_queue.len(), 2);
    }

    #[test]
    fn test_reset_clears_derived_state() {
        let mut sim = sample();
        sim.start();
        let first = sim.processes[0].id;
        sim.running_process = Some(first);
        sim.current_time = 4;
        sim.context_switches = 2;
        sim.execution_history.push(ExecutionBlock::new(first, 0, 1));
        sim.processes[0].remaining_time = 1;

        sim.reset();
        assert_eq!(sim.status, SimulationStatus::Stopped);
        assert_eq!(sim.current_time, 0);
        assert!(sim.ready_queue.is_empty());
        assert!(sim.running_process.is_none());
        assert!(sim.execution_history.is_empty());
        assert_eq!(sim.context_switches, 0);
        assert_eq!(sim.processes[0].remaining_time, 3);
        assert_eq!(sim.metrics, Metrics::default());
    }
}
