/*!
 * CPU Scheduling Simulator - Main Entry Point
 *
 * Loads a scenario (or the built-in four-process demo), runs it to
 * completion and prints the CSV report to stdout. With `--live` the run is
 * driven by the timed runner at the configured tick interval.
 */

use cpu_sched_sim::monitoring::span_run;
use cpu_sched_sim::report::{analyze, csv_report};
use cpu_sched_sim::{
    init_tracing, Algorithm, NewProcess, Simulation, SimulationConfig, SimulationControl,
    SimulationManager, SimulationRunner, SimulationStatus,
};
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// Run a CPU scheduling scenario and print its CSV report
#[derive(Debug, Parser)]
#[clap(name = "scheduler", version)]
struct Args {
    /// Scenario file (JSON). The built-in four-process demo runs when omitted.
    scenario: Option<PathBuf>,

    /// Drive the run with the timed runner at the configured tick interval.
    #[clap(long)]
    live: bool,
}

/// The classic four-process workload
fn demo_scenario() -> SimulationConfig {
    SimulationConfig::new(Algorithm::Fcfs).with_processes([
        NewProcess::new("P1", 0, 7, 3),
        NewProcess::new("P2", 1, 4, 1),
        NewProcess::new("P3", 2, 2, 2),
        NewProcess::new("P4", 3, 1, 4),
    ])
}

async fn run_live(manager: &Arc<SimulationManager>, sim: &Simulation) -> Result<Simulation> {
    manager.start(sim.id)?;

    let runner = SimulationRunner::spawn(manager.clone(), sim.id, manager.config().tick_interval);
    tokio::select! {
        _ = runner.join() => {}
        _ = tokio::signal::ctrl_c() => {
            warn!("Interrupted, pausing simulation");
            manager.pause(sim.id)?;
        }
    }

    Ok(manager.get(sim.id)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    info!("CPU scheduling simulator starting...");
    info!("================================================");

    let manager = Arc::new(SimulationManager::builder().with_env_config().build());

    let config = match &args.scenario {
        Some(path) => {
            info!(path = %path.display(), "Loading scenario");
            SimulationConfig::from_path(path)?
        }
        None => {
            info!("No scenario given, using the built-in demo");
            demo_scenario()
        }
    };

    let sim = manager.create_simulation(config)?;
    info!(
        simulation = %sim.id,
        algorithm = sim.algorithm.display_name(),
        processes = sim.processes.len(),
        live = args.live,
        "Simulation ready"
    );

    let run = span_run(if args.live { "live" } else { "batch" }, sim.id);
    let finished = if args.live {
        run_live(&manager, &sim).await
    } else {
        manager.run_to_completion(sim.id).map_err(Into::into)
    };
    let finished = match finished {
        Ok(sim) => sim,
        Err(e) => {
            run.record_error(&e.to_string());
            return Err(e);
        }
    };
    run.record_outcome(finished.current_time, finished.context_switches);
    drop(run);

    if finished.status != SimulationStatus::Completed {
        warn!(status = %finished.status, "Simulation stopped before completion");
    }

    let m = &finished.metrics;
    info!(
        cpu_utilization = m.cpu_utilization,
        avg_waiting = m.avg_waiting_time,
        avg_turnaround = m.avg_turnaround_time,
        avg_response = m.avg_response_time,
        throughput = m.throughput,
        context_switches = m.context_switches,
        total_time = m.total_execution_time,
        "Metrics"
    );

    let analysis = analyze(&finished);
    info!(
        efficiency = analysis.efficiency,
        fairness_index = analysis.fairness_index,
        response_quality = analysis.response_quality,
        "Analysis"
    );

    let report = csv_report(&finished);
    {
        use std::io::Write;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", report).into_diagnostic()?;
    }

    info!("================================================");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_scenario_and_live() {
        let args = Args::try_parse_from(["scheduler", "demo.json", "--live"]).unwrap();
        assert_eq!(args.scenario, Some(PathBuf::from("demo.json")));
        assert!(args.live);

        let args = Args::try_parse_from(["scheduler"]).unwrap();
        assert_eq!(args.scenario, None);
        assert!(!args.live);
    }

    #[test]
    fn test_cli_rejects_unknown_and_extra_arguments() {
        assert!(Args::try_parse_from(["scheduler", "--fast"]).is_err());
        assert!(Args::try_parse_from(["scheduler", "a.json", "b.json"]).is_err());
    }
}
