/*!
 * Tracing
 * Subscriber setup and timed spans for simulation runs
 *
 * `log` records emitted by the engine and controller are bridged into the
 * same subscriber through `tracing-log`.
 */

use crate::core::id::SimulationId;
use crate::core::types::Tick;
use std::time::Instant;
use tracing::{debug, info, span, warn, Level};
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable selecting JSON output
pub const ENV_TRACE_JSON: &str = "SCHED_TRACE_JSON";

/// Runs slower than this are reported at warn level
const SLOW_RUN_MS: u128 = 1_000;

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - SCHED_TRACE_JSON: Enable JSON output (default: false)
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var(ENV_TRACE_JSON)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_writer(std::io::stderr),
            )
            .init();
        info!("Structured tracing initialized with JSON output");
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
        info!("Structured tracing initialized");
    }
}

/// Span covering one simulation run, reporting its duration on drop
pub struct RunSpan {
    span: tracing::Span,
    start: Instant,
    simulation: SimulationId,
}

impl RunSpan {
    pub fn new(operation: &str, simulation: SimulationId) -> Self {
        let span = span!(
            Level::INFO,
            "simulation_run",
            operation = operation,
            simulation = %simulation,
            ticks = tracing::field::Empty,
            context_switches = tracing::field::Empty,
            error = tracing::field::Empty,
        );

        span.in_scope(|| debug!(operation = operation, "run started"));

        Self {
            span,
            start: Instant::now(),
            simulation,
        }
    }

    /// Record the final clock and switch count
    pub fn record_outcome(&self, ticks: Tick, context_switches: u64) {
        self.span.record("ticks", ticks);
        self.span.record("context_switches", context_switches);
    }

    pub fn record_error(&self, error: &str) {
        self.span.record("error", error);
    }

    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }
}

impl Drop for RunSpan {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        let _entered = self.span.enter();

        if elapsed.as_millis() > SLOW_RUN_MS {
            warn!(
                simulation = %self.simulation,
                duration_ms = elapsed.as_millis() as u64,
                "slow simulation run"
            );
        } else {
            debug!(
                simulation = %self.simulation,
                duration_us = elapsed.as_micros() as u64,
                "simulation run finished"
            );
        }
    }
}

/// Helper to open a run span
#[inline]
pub fn span_run(operation: &str, simulation: SimulationId) -> RunSpan {
    RunSpan::new(operation, simulation)
}
