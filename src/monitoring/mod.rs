/*!
 * Monitoring
 * Tracing subscriber setup and run spans
 */

mod tracer;

pub use tracer::{init_tracing, span_run, RunSpan, ENV_TRACE_JSON};
