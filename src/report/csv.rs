/*!
 * CSV Report
 * Per-process table followed by the aggregate metrics block
 */

use crate::core::serde::tick_or_sentinel;
use crate::scheduler::Simulation;
use std::borrow::Cow;

const HEADERS: [&str; 10] = [
    "Process ID",
    "Arrival Time",
    "Burst Time",
    "Priority",
    "Status",
    "Remaining Time",
    "Waiting Time",
    "Turnaround Time",
    "Response Time",
    "Completion Time",
];

/// Render a simulation as CSV
///
/// Rows are joined with `\n` and the output has no trailing newline.
pub fn csv_report(sim: &Simulation) -> String {
    let mut rows: Vec<String> = Vec::with_capacity(sim.processes.len() + 12);
    rows.push(HEADERS.join(","));

    for p in &sim.processes {
        rows.push(
            [
                escape(&p.label).into_owned(),
                p.arrival_time.to_string(),
                p.burst_time.to_string(),
                p.priority.to_string(),
                p.status.as_str().to_string(),
                p.remaining_time.to_string(),
                p.waiting_time.to_string(),
                p.turnaround_time.to_string(),
                tick_or_sentinel::to_signed(p.response_time).to_string(),
                p.completion_time.to_string(),
            ]
            .join(","),
        );
    }

    let m = &sim.metrics;
    rows.push(String::new());
    rows.push("Metrics".to_string());
    rows.push(format!("Algorithm,{}", sim.algorithm.as_str()));
    rows.push(format!("Time Quantum,{}", sim.time_quantum.get()));
    rows.push(format!("CPU Utilization,{:.2}%", m.cpu_utilization));
    rows.push(format!("Average Waiting Time,{:.2}", m.avg_waiting_time));
    rows.push(format!("Average Turnaround Time,{:.2}", m.avg_turnaround_time));
    rows.push(format!("Average Response Time,{:.2}", m.avg_response_time));
    rows.push(format!("Throughput,{:.4}", m.throughput));
    rows.push(format!("Context Switches,{}", m.context_switches));
    rows.push(format!("Total Execution Time,{}", m.total_execution_time));
    rows.push(format!("Completed Processes,{}", m.completed_processes));

    rows.join("\n")
}

/// Quote a field if it would otherwise break the row
fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
