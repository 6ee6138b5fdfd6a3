/*!
 * Step Benchmarks
 * Per-tick cost and full runs under generated workloads
 */

use cpu_sched_sim::report::csv_report;
use cpu_sched_sim::{
    step, Algorithm, NewProcess, Process, Simulation, SimulationId, SimulationStatus, TimeQuantum,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random roster with arrivals spread over the first `n` ticks
fn workload(n: usize, algorithm: Algorithm, seed: u64) -> Simulation {
    let mut rng = StdRng::seed_from_u64(seed);
    let processes = (0..n)
        .map(|i| {
            Process::new(NewProcess::new(
                format!("P{}", i + 1),
                rng.gen_range(0..n as u32),
                rng.gen_range(1..=10),
                rng.gen_range(0..8),
            ))
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

fn run_to_completion(mut sim: Simulation) -> Simulation {
    while sim.status == SimulationStatus::Running {
        sim = step(&sim).unwrap();
    }
    sim
}

// Single tick in the middle of a busy run
fn bench_single_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_step");

    for algorithm in Algorithm::ALL {
        let mut sim = workload(64, algorithm, 7);
        for _ in 0..32 {
            sim = step(&sim).unwrap();
        }

        group.bench_with_input(BenchmarkId::from_parameter(algorithm), &sim, |b, sim| {
            b.iter(|| step(black_box(sim)).unwrap());
        });
    }

    group.finish();
}

// Whole runs as the roster grows
fn bench_full_run_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_run_scaling");
    group.sample_size(20);

    for size in [8usize, 32, 128] {
        for algorithm in [Algorithm::Fcfs, Algorithm::RoundRobin, Algorithm::Srtf] {
            let sim = workload(size, algorithm, 42);
            group.throughput(Throughput::Elements(size as u64));
            group.bench_with_input(
                BenchmarkId::new(algorithm.as_str(), size),
                &sim,
                |b, sim| {
                    b.iter(|| run_to_completion(black_box(sim.clone())));
                },
            );
        }
    }

    group.finish();
}

fn bench_csv_report(c: &mut Criterion) {
    let sim = run_to_completion(workload(128, Algorithm::RoundRobin, 3));
    c.bench_function("csv_report_128", |b| {
        b.iter(|| csv_report(black_box(&sim)));
    });
}

criterion_group!(
    benches,
    bench_single_step,
    bench_full_run_scaling,
    bench_csv_report,
);

criterion_main!(benches);
