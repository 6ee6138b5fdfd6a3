/*!
 * Scheduler Tests
 * Four-process reference workload under every algorithm
 */

use cpu_sched_sim::report::coalesce;
use cpu_sched_sim::{
    step, Algorithm, ExecutionBlock, NewProcess, Process, ProcessStatus, SchedulerError,
    Simulation, SimulationId, SimulationStatus, TimeQuantum,
};
use pretty_assertions::assert_eq;

/// P1(0,7,3) P2(1,4,1) P3(2,2,2) P4(3,1,4)
fn workload(algorithm: Algorithm) -> Simulation {
    let processes = [
        ("P1", 0, 7, 3),
        ("P2", 1, 4, 1),
        ("P3", 2, 2, 2),
        ("P4", 3, 1, 4),
    ]
    .into_iter()
    .map(|(label, arrival, burst, priority)| {
        Process::new(NewProcess::new(label, arrival, burst, priority))
    })
    .collect();

    let mut sim = Simulation::new(
        SimulationId::new(),
        algorithm,
        TimeQuantum::new(3).unwrap(),
        1,
        processes,
    );
    sim.start();
    sim
}

fn run(algorithm: Algorithm) -> Simulation {
    let mut sim = workload(algorithm);
    while sim.status == SimulationStatus::Running {
        sim = step(&sim).unwrap();
        assert!(sim.current_time <= 100, "simulation did not terminate");
    }
    sim
}

/// (completion, turnaround, waiting, response) per label in roster order
fn outcomes(sim: &Simulation) -> Vec<(&str, u32, u32, u32, Option<u32>)> {
    sim.processes
        .iter()
        .map(|p| {
            (
                p.label.as_str(),
                p.completion_time,
                p.turnaround_time,
                p.waiting_time,
                p.response_time,
            )
        })
        .collect()
}

fn runs(sim: &Simulation) -> Vec<(&str, u32, u32)> {
    coalesce(&sim.execution_history)
        .iter()
        .map(|b| {
            let label = sim.process(b.process_id).unwrap().label.as_str();
            (label, b.start_time, b.end_time)
        })
        .collect()
}

#[test]
fn test_fcfs_workload() {
    let sim = run(Algorithm::Fcfs);

    assert_eq!(sim.status, SimulationStatus::Completed);
    assert_eq!(sim.current_time, 14);
    assert_eq!(
        outcomes(&sim),
        vec![
            ("P1", 7, 7, 0, Some(0)),
            ("P2", 11, 10, 6, Some(6)),
            ("P3", 13, 11, 9, Some(9)),
            ("P4", 14, 11, 10, Some(10)),
        ]
    );
    assert_eq!(
        runs(&sim),
        vec![("P1", 0, 7), ("P2", 7, 11), ("P3", 11, 13), ("P4", 13, 14)]
    );

    let m = sim.metrics;
    assert_eq!(m.avg_waiting_time, 6.25);
    assert_eq!(m.avg_turnaround_time, 9.75);
    assert_eq!(m.avg_response_time, 6.25);
    assert_eq!(m.cpu_utilization, 100.0);
    assert_eq!(m.throughput, 4.0 / 14.0);
    assert_eq!(m.context_switches, 0);
    assert_eq!(m.total_execution_time, 14);
    assert_eq!(m.completed_processes, 4);
}

#[test]
fn test_sjf_workload() {
    let sim = run(Algorithm::Sjf);

    assert_eq!(
        runs(&sim),
        vec![("P1", 0, 7), ("P4", 7, 8), ("P3", 8, 10), ("P2", 10, 14)]
    );
    assert_eq!(
        outcomes(&sim),
        vec![
            ("P1", 7, 7, 0, Some(0)),
            ("P2", 14, 13, 9, Some(9)),
            ("P3", 10, 8, 6, Some(6)),
            ("P4", 8, 5, 4, Some(4)),
        ]
    );
    assert_eq!(sim.metrics.avg_waiting_time, 4.75);
    assert_eq!(sim.metrics.avg_turnaround_time, 8.25);
    assert_eq!(sim.context_switches, 0);
}

#[test]
fn test_priority_workload() {
    let sim = run(Algorithm::Priority);

    // P1 is alone at t=0 and is never preempted
    assert_eq!(
        runs(&sim),
        vec![("P1", 0, 7), ("P2", 7, 11), ("P3", 11, 13), ("P4", 13, 14)]
    );
    assert_eq!(sim.process_by_label("P2").unwrap().response_time, Some(6));
    assert_eq!(sim.context_switches, 0);
}

#[test]
fn test_round_robin_workload() {
    let sim = run(Algorithm::RoundRobin);

    assert_eq!(
        runs(&sim),
        vec![
            ("P1", 0, 3),
            ("P2", 3, 6),
            ("P3", 6, 8),
            ("P1", 8, 11),
            ("P4", 11, 12),
            ("P2", 12, 13),
            ("P1", 13, 14),
        ]
    );
    assert_eq!(
        outcomes(&sim),
        vec![
            ("P1", 14, 14, 9, Some(0)),
            ("P2", 13, 12, 9, Some(2)),
            ("P3", 8, 6, 4, Some(4)),
            ("P4", 12, 9, 8, Some(8)),
        ]
    );
    assert_eq!(sim.context_switches, 3);
    assert_eq!(sim.metrics.avg_waiting_time, 7.5);
    assert_eq!(sim.metrics.avg_turnaround_time, 10.25);
    assert_eq!(sim.metrics.avg_response_time, 3.5);
}

#[test]
fn test_round_robin_queue_after_first_quantum() {
    let mut sim = workload(Algorithm::RoundRobin);
    for _ in 0..3 {
        sim = step(&sim).unwrap();
    }

    let queue: Vec<&str> = sim.ready_processes().map(|p| p.label.as_str()).collect();
    assert_eq!(queue, vec!["P2", "P3", "P1"]);
    assert_eq!(sim.running_process, None);
    assert_eq!(sim.context_switches, 1);

    // P1 is charged the tick it was re-enqueued on
    let waits: Vec<u32> = sim.processes.iter().map(|p| p.waiting_time).collect();
    assert_eq!(waits, vec![1, 2, 1, 0]);
}

#[test]
fn test_srtf_workload() {
    let sim = run(Algorithm::Srtf);

    assert_eq!(
        runs(&sim),
        vec![
            ("P1", 0, 1),
            ("P2", 1, 2),
            ("P3", 2, 4),
            ("P4", 4, 5),
            ("P2", 5, 8),
            ("P1", 8, 14),
        ]
    );
    assert_eq!(
        outcomes(&sim),
        vec![
            ("P1", 14, 14, 7, Some(0)),
            ("P2", 8, 7, 3, Some(0)),
            ("P3", 4, 2, 0, Some(0)),
            ("P4", 5, 2, 1, Some(1)),
        ]
    );
    // P4 ties P3 at t=3 and does not preempt
    assert_eq!(sim.context_switches, 2);
    assert_eq!(sim.metrics.avg_response_time, 0.25);
}

#[test]
fn test_history_is_one_block_per_tick() {
    let sim = run(Algorithm::RoundRobin);
    assert_eq!(sim.execution_history.len(), 14);
    assert!(sim
        .execution_history
        .windows(2)
        .all(|w| w[0].end_time == w[1].start_time));
    assert_eq!(
        sim.execution_history[0],
        ExecutionBlock::new(sim.processes[0].id, 0, 1)
    );
}

#[test]
fn test_every_algorithm_completes_all_processes() {
    for algorithm in Algorithm::ALL {
        let sim = run(algorithm);
        assert!(sim
            .processes
            .iter()
            .all(|p| p.status == ProcessStatus::Completed && p.remaining_time == 0));
        assert_eq!(sim.current_time, 14, "{}", algorithm);
        assert_eq!(sim.busy_ticks(), 14);
    }
}

#[test]
fn test_empty_roster_is_rejected() {
    let mut sim = Simulation::new(
        SimulationId::new(),
        Algorithm::Fcfs,
        TimeQuantum::default(),
        1,
        Vec::new(),
    );
    sim.start();

    assert_eq!(step(&sim), Err(SchedulerError::EmptyRoster));
    assert_eq!(sim.current_time, 0);
}

#[test]
fn test_completed_simulation_cannot_step() {
    let sim = run(Algorithm::Fcfs);
    assert_eq!(
        step(&sim),
        Err(SchedulerError::NotRunning(SimulationStatus::Completed))
    );
}
