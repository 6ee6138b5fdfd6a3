/*!
 * Runner Tests
 * Timed stepping against the simulation manager
 */

use cpu_sched_sim::{
    Algorithm, NewProcess, SimulationConfig, SimulationControl, SimulationId, SimulationManager,
    SimulationRunner, SimulationStatus,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;

fn setup(algorithm: Algorithm) -> (Arc<SimulationManager>, SimulationId) {
    let manager = Arc::new(SimulationManager::new());
    let id = manager
        .create_simulation(SimulationConfig::new(algorithm).with_processes([
            NewProcess::new("P1", 0, 7, 3),
            NewProcess::new("P2", 1, 4, 1),
            NewProcess::new("P3", 2, 2, 2),
            NewProcess::new("P4", 3, 1, 4),
        ]))
        .unwrap()
        .id;
    (manager, id)
}

#[tokio::test]
async fn test_runner_matches_batch_run() {
    let (manager, id) = setup(Algorithm::Srtf);
    let batch_manager = SimulationManager::new();
    let batch_id = batch_manager
        .create_simulation(SimulationConfig::from_simulation(&manager.get(id).unwrap()))
        .unwrap()
        .id;
    let batch = batch_manager.run_to_completion(batch_id).unwrap();

    manager.start(id).unwrap();
    let runner = SimulationRunner::spawn(manager.clone(), id, Duration::from_millis(1));
    tokio::time::timeout(Duration::from_secs(5), runner.join())
        .await
        .expect("runner did not finish");

    let live = manager.get(id).unwrap();
    assert_eq!(live.status, SimulationStatus::Completed);
    assert_eq!(live.current_time, batch.current_time);
    assert_eq!(live.metrics, batch.metrics);
}

#[tokio::test]
async fn test_runner_waits_for_start() {
    let (manager, id) = setup(Algorithm::Fcfs);
    let runner = SimulationRunner::spawn(manager.clone(), id, Duration::from_millis(1));

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(manager.get(id).unwrap().current_time, 0);
    assert!(!runner.is_finished());

    runner.resume();
    tokio::time::timeout(Duration::from_secs(5), runner.join())
        .await
        .expect("runner did not finish");
    assert_eq!(manager.get(id).unwrap().current_time, 14);
}

#[tokio::test]
async fn test_pause_and_resume_through_runner() {
    let (manager, id) = setup(Algorithm::RoundRobin);
    manager.start(id).unwrap();

    let runner = SimulationRunner::spawn(manager.clone(), id, Duration::from_millis(2));
    runner.pause();
    tokio::time::sleep(Duration::from_millis(20)).await;

    let paused = manager.get(id).unwrap();
    assert_eq!(paused.status, SimulationStatus::Paused);
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(manager.get(id).unwrap().current_time, paused.current_time);

    runner.update_interval(Duration::from_millis(1));
    runner.resume();
    tokio::time::timeout(Duration::from_secs(5), runner.join())
        .await
        .expect("runner did not finish");

    let done = manager.get(id).unwrap();
    assert_eq!(done.status, SimulationStatus::Completed);
    assert_eq!(done.context_switches, 3);
}

#[tokio::test]
async fn test_shutdown_stops_stepping() {
    let (manager, id) = setup(Algorithm::Fcfs);
    manager.start(id).unwrap();

    let runner = SimulationRunner::spawn(manager.clone(), id, Duration::from_secs(3600));
    runner.shutdown().await;

    let before = manager.get(id).unwrap();
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(manager.get(id).unwrap(), before);
    assert_eq!(before.status, SimulationStatus::Running);
}

#[tokio::test]
async fn test_runner_exits_when_simulation_is_deleted() {
    let (manager, id) = setup(Algorithm::Fcfs);
    manager.start(id).unwrap();

    let runner = SimulationRunner::spawn(manager.clone(), id, Duration::from_millis(5));
    manager.delete_simulation(id).unwrap();

    tokio::time::timeout(Duration::from_secs(5), runner.join())
        .await
        .expect("runner did not exit");
}
