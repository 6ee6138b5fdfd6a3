/*!
 * Execution Timeline
 * Coalesces per-tick execution blocks into contiguous runs
 */

use crate::core::id::ProcessId;
use crate::core::types::Tick;
use crate::scheduler::{ExecutionBlock, Simulation};
use serde::{Deserialize, Serialize};

/// Contiguous `[start, end)` interval on the CPU for one process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionRun {
    pub process_id: ProcessId,
    pub label: String,
    pub start_time: Tick,
    pub end_time: Tick,
}

impl ExecutionRun {
    pub fn duration(&self) -> Tick {
        self.end_time - self.start_time
    }
}

/// Merge adjacent blocks of the same process
///
/// Blocks separated by an idle tick stay separate runs.
pub fn coalesce(history: &[ExecutionBlock]) -> Vec<ExecutionBlock> {
    let mut runs: Vec<ExecutionBlock> = Vec::new();
    for block in history {
        match runs.last_mut() {
            Some(last) if last.process_id == block.process_id && last.end_time == block.start_time => {
                last.end_time = block.end_time;
            }
            _ => runs.push(*block),
        }
    }
    runs
}

/// Coalesced runs with display labels attached
pub fn timeline(sim: &Simulation) -> Vec<ExecutionRun> {
    coalesce(&sim.execution_history)
        .into_iter()
        .map(|block| ExecutionRun {
            label: sim
                .process(block.process_id)
                .map(|p| p.label.clone())
                .unwrap_or_default(),
            process_id: block.process_id,
            start_time: block.start_time,
            end_time: block.end_time,
        })
        .collect()
}
