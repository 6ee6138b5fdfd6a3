/*!
 * Simulation Engine
 * Advances a simulation by exactly one tick
 *
 * Each step runs six phases over a copy of the input state:
 * arrivals, dispatch, execution, completion / quantum check,
 * waiting-time accrual, time advance and metrics. Only dispatch and the
 * quantum check depend on the algorithm.
 */

use super::metrics::compute_metrics;
use super::policy::{select_candidate, should_preempt};
use super::state::{ExecutionBlock, Simulation, SimulationStatus};
use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::id::ProcessId;
use crate::process::{Process, ProcessStatus};
use ahash::AHashSet;
use log::{debug, trace};

/// Advance `sim` by one tick, returning the new state
///
/// The input is never modified; on error nothing is produced.
pub fn step(sim: &Simulation) -> SchedulerResult<Simulation> {
    check_preconditions(sim)?;

    let mut next = sim.clone();
    admit_arrivals(&mut next);
    dispatch(&mut next)?;
    execute(&mut next)?;
    accrue_waiting(&mut next);

    next.current_time += 1;
    next.metrics = compute_metrics(&next.processes, next.current_time, next.context_switches);
    if next.all_completed() {
        next.status = SimulationStatus::Completed;
        debug!(
            "Simulation {} completed at tick {} ({} context switches)",
            next.id, next.current_time, next.context_switches
        );
    }

    Ok(next)
}

/// Reject steps the caller should never have issued
pub fn check_preconditions(sim: &Simulation) -> SchedulerResult<()> {
    if sim.status != SimulationStatus::Running {
        return Err(SchedulerError::NotRunning(sim.status));
    }
    if sim.processes.is_empty() {
        return Err(SchedulerError::EmptyRoster);
    }
    Ok(())
}

fn index_of(sim: &Simulation, id: ProcessId) -> SchedulerResult<usize> {
    sim.processes
        .iter()
        .position(|p| p.id == id)
        .ok_or(SchedulerError::UnknownProcess(id))
}

/// Phase 1: processes arriving now join the ready queue in roster order
fn admit_arrivals(sim: &mut Simulation) {
    let now = sim.current_time;
    for p in sim.processes.iter_mut() {
        if p.arrival_time == now && p.status == ProcessStatus::Waiting {
            p.status = ProcessStatus::Ready;
            sim.ready_queue.push_back(p.id);
            trace!("t={}: {} arrived", now, p.label);
        }
    }
}

/// Phase 2: choose who holds the CPU for this tick
fn dispatch(sim: &mut Simulation) -> SchedulerResult<()> {
    let algorithm = sim.algorithm;

    let (position, preempt) = {
        let view: &Simulation = sim;
        let ready = view
            .ready_queue
            .iter()
            .map(|id| index_of(view, *id).map(|i| &view.processes[i]))
            .collect::<SchedulerResult<Vec<&Process>>>()?;

        let Some(position) = select_candidate(algorithm, &ready) else {
            return Ok(());
        };

        match view.running_process {
            None => (position, false),
            Some(_) if !algorithm.is_preemptive() => return Ok(()),
            Some(running_id) => {
                let running = &view.processes[index_of(view, running_id)?];
                if !should_preempt(algorithm, running, ready[position]) {
                    return Ok(());
                }
                (position, true)
            }
        }
    };

    if preempt {
        preempt_running(sim)?;
    }

    // Preemption only appends, so the candidate position is unchanged
    let Some(id) = sim.ready_queue.remove(position) else {
        return Ok(());
    };
    let now = sim.current_time;
    let index = index_of(sim, id)?;
    let p = &mut sim.processes[index];
    p.status = ProcessStatus::Running;
    if p.response_time.is_none() {
        p.response_time = Some(now - p.arrival_time);
    }
    sim.running_process = Some(id);
    sim.slice_ticks = 0;

    debug!("t={}: dispatched {} ({})", now, p.label, algorithm);
    Ok(())
}

/// Move the running process to the ready-queue tail and count the switch
fn preempt_running(sim: &mut Simulation) -> SchedulerResult<()> {
    let Some(id) = sim.running_process.take() else {
        return Ok(());
    };
    let index = index_of(sim, id)?;
    let p = &mut sim.processes[index];
    p.status = ProcessStatus::Ready;
    sim.ready_queue.push_back(id);
    sim.context_switches += 1;
    sim.slice_ticks = 0;

    debug!(
        "t={}: preempted {} with {} ticks remaining",
        sim.current_time, p.label, p.remaining_time
    );
    Ok(())
}

/// Phases 3 and 4: run the CPU for one tick, then check completion and quantum
fn execute(sim: &mut Simulation) -> SchedulerResult<()> {
    let Some(id) = sim.running_process else {
        trace!("t={}: cpu idle", sim.current_time);
        return Ok(());
    };

    let now = sim.current_time;
    let index = index_of(sim, id)?;
    let p = &mut sim.processes[index];
    p.remaining_time = p.remaining_time.saturating_sub(1);
    sim.execution_history.push(ExecutionBlock::new(id, now, now + 1));
    sim.slice_ticks += 1;

    if p.remaining_time == 0 {
        p.status = ProcessStatus::Completed;
        p.completion_time = now + 1;
        p.turnaround_time = p.completion_time - p.arrival_time;
        sim.running_process = None;
        debug!(
            "t={}: {} completed (turnaround {})",
            now + 1,
            p.label,
            p.turnaround_time
        );
    } else if sim.algorithm.uses_quantum()
        && sim.slice_ticks >= sim.time_quantum.get()
        && !sim.ready_queue.is_empty()
    {
        preempt_running(sim)?;
    }

    Ok(())
}

/// Phase 5: every process in the ready queue accrues one tick
///
/// This includes a process round robin re-enqueued during phase 4.
fn accrue_waiting(sim: &mut Simulation) {
    let queued: AHashSet<ProcessId> = sim.ready_queue.iter().copied().collect();
    for p in sim.processes.iter_mut() {
        if queued.contains(&p.id) {
            p.waiting_time += 1;
        }
    }
}
