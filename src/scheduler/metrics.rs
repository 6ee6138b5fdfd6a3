/*!
 * Simulation Metrics
 * Aggregate performance statistics derived from the process roster
 */

use crate::core::types::{SwitchCount, Tick};
use crate::process::Process;
use serde::{Deserialize, Serialize};

/// Aggregate scheduling metrics
///
/// Averages are taken over completed processes only. `cpu_utilization`
/// divides the total burst time of the whole roster by elapsed time, so it
/// reaches 100 when the CPU never idled.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Metrics {
    pub cpu_utilization: f64,
    pub avg_waiting_time: f64,
    pub avg_turnaround_time: f64,
    pub avg_response_time: f64,
    pub throughput: f64,
    pub context_switches: SwitchCount,
    pub total_execution_time: Tick,
    pub completed_processes: usize,
}

/// Recompute metrics from scratch
///
/// Pure: identical arguments always produce identical results.
pub fn compute_metrics(
    processes: &[Process],
    current_time: Tick,
    context_switches: SwitchCount,
) -> Metrics {
    let completed: Vec<&Process> = processes.iter().filter(|p| p.is_completed()).collect();

    if completed.is_empty() {
        return Metrics {
            context_switches,
            total_execution_time: current_time,
            ..Metrics::default()
        };
    }

    let count = completed.len() as f64;
    let total_waiting: u64 = completed.iter().map(|p| u64::from(p.waiting_time)).sum();
    let total_turnaround: u64 = completed
        .iter()
        .map(|p| u64::from(p.turnaround_time))
        .sum();
    let total_response: u64 = completed
        .iter()
        .map(|p| u64::from(p.response_time.unwrap_or(0)))
        .sum();
    let total_burst: u64 = processes.iter().map(|p| u64::from(p.burst_time)).sum();

    let (cpu_utilization, throughput) = if current_time > 0 {
        let elapsed = f64::from(current_time);
        (total_burst as f64 / elapsed * 100.0, count / elapsed)
    } else {
        (0.0, 0.0)
    };

    Metrics {
        cpu_utilization,
        avg_waiting_time: total_waiting as f64 / count,
        avg_turnaround_time: total_turnaround as f64 / count,
        avg_response_time: total_response as f64 / count,
        throughput,
        context_switches,
        total_execution_time: current_time,
        completed_processes: completed.len(),
    }
}
