/*!
 * Scheduling Policy
 * Candidate selection and preemption rules for each algorithm
 */

use super::types::Algorithm;
use crate::process::Process;

/// Pick the ready-queue position the algorithm would dispatch next
///
/// Ties resolve to the earliest position in queue order.
pub(super) fn select_candidate(algorithm: Algorithm, ready: &[&Process]) -> Option<usize> {
    if ready.is_empty() {
        return None;
    }

    match algorithm {
        Algorithm::Fcfs | Algorithm::RoundRobin => Some(0),
        Algorithm::Sjf | Algorithm::Srtf => first_min_by_key(ready, |p| p.remaining_time),
        Algorithm::Priority => first_min_by_key(ready, |p| p.priority),
    }
}

/// Whether `candidate` should displace `running` during dispatch
///
/// Only SRTF preempts at dispatch time, and only for a strictly shorter job.
/// Round robin preempts on quantum expiry after execution instead.
pub(super) fn should_preempt(algorithm: Algorithm, running: &Process, candidate: &Process) -> bool {
    match algorithm {
        Algorithm::Srtf => candidate.remaining_time < running.remaining_time,
        Algorithm::Fcfs | Algorithm::Sjf | Algorithm::Priority | Algorithm::RoundRobin => false,
    }
}

fn first_min_by_key<K, F>(ready: &[&Process], key: F) -> Option<usize>
where
    K: Ord,
    F: Fn(&Process) -> K,
{
    // min_by_key keeps the first of equal minima
    ready
        .iter()
        .enumerate()
        .min_by_key(|&(_, p)| key(*p))
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::NewProcess;

    fn procs(specs: &[(&str, u32, i32)]) -> Vec<Process> {
        specs
            .iter()
            .map(|(label, burst, prio)| Process::new(NewProcess::new(*label, 0, *burst, *prio)))
            .collect()
    }

    #[test]
    fn test_queue_order_policies() {
        let roster = procs(&[("A", 5, 3), ("B", 1, 1)]);
        let ready: Vec<&Process> = roster.iter().collect();
        assert_eq!(select_candidate(Algorithm::Fcfs, &ready), Some(0));
        assert_eq!(select_candidate(Algorithm::RoundRobin, &ready), Some(0));
    }

    #[test]
    fn test_shortest_job_ties_keep_queue_order() {
        let roster = procs(&[("A", 5, 1), ("B", 2, 1), ("C", 2, 1)]);
        let ready: Vec<&Process> = roster.iter().collect();
        assert_eq!(select_candidate(Algorithm::Sjf, &ready), Some(1));
        assert_eq!(select_candidate(Algorithm::Srtf, &ready), Some(1));
    }

    #[test]
    fn test_lowest_priority_value_wins() {
        let roster = procs(&[("A", 1, 4), ("B", 1, 2), ("C", 1, 2)]);
        let ready: Vec<&Process> = roster.iter().collect();
        assert_eq!(select_candidate(Algorithm::Priority, &ready), Some(1));
    }

    #[test]
    fn test_empty_queue() {
        assert_eq!(select_candidate(Algorithm::Srtf, &[]), None);
    }

    #[test]
    fn test_srtf_preempts_only_strictly_shorter() {
        let roster = procs(&[("run", 3, 1), ("equal", 3, 1), ("short", 2, 1)]);
        assert!(!should_preempt(Algorithm::Srtf, &roster[0], &roster[1]));
        assert!(should_preempt(Algorithm::Srtf, &roster[0], &roster[2]));
        assert!(!should_preempt(Algorithm::Sjf, &roster[0], &roster[2]));
    }
}
