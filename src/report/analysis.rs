/*!
 * Run Analysis
 * Percentage scores summarizing a run for display
 */

use crate::scheduler::Simulation;
use serde::{Deserialize, Serialize};

/// Derived scores, each in `0..=100` except efficiency
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Analysis {
    pub efficiency: f64,
    pub fairness_index: f64,
    pub response_quality: f64,
}

pub fn analyze(sim: &Simulation) -> Analysis {
    Analysis {
        efficiency: efficiency(sim),
        fairness_index: fairness_index(sim),
        response_quality: response_quality(sim),
    }
}

/// Total requested CPU time as a percentage of elapsed time
pub fn efficiency(sim: &Simulation) -> f64 {
    let elapsed = sim.metrics.total_execution_time;
    if elapsed == 0 {
        return 0.0;
    }
    let total_burst: u64 = sim.processes.iter().map(|p| u64::from(p.burst_time)).sum();
    total_burst as f64 / f64::from(elapsed) * 100.0
}

/// How evenly waiting time is spread over the roster
///
/// `100 - 50 * cv` where `cv` is the coefficient of variation of waiting
/// times, floored at 0. No waiting at all scores 100.
pub fn fairness_index(sim: &Simulation) -> f64 {
    if sim.processes.is_empty() {
        return 0.0;
    }

    let waits: Vec<f64> = sim
        .processes
        .iter()
        .map(|p| f64::from(p.waiting_time))
        .collect();
    let n = waits.len() as f64;
    let mean = waits.iter().sum::<f64>() / n;
    if mean == 0.0 {
        return 100.0;
    }

    let variance = waits.iter().map(|w| (w - mean).powi(2)).sum::<f64>() / n;
    (100.0 - variance.sqrt() / mean * 50.0).max(0.0)
}

/// Penalizes slow first dispatch, 5 points per tick of average response
pub fn response_quality(sim: &Simulation) -> f64 {
    let completed: Vec<f64> = sim
        .processes
        .iter()
        .filter(|p| p.is_completed())
        .map(|p| f64::from(p.response_time.unwrap_or(0)))
        .collect();
    if completed.is_empty() {
        return 0.0;
    }

    let avg = completed.iter().sum::<f64>() / completed.len() as f64;
    (100.0 - avg * 5.0).max(0.0)
}
