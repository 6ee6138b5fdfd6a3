/*!
 * Report Module
 * CSV and JSON exports, analysis scores and the execution timeline
 */

pub mod analysis;
pub mod csv;
pub mod export;
pub mod timeline;

pub use analysis::{analyze, Analysis};
pub use csv::csv_report;
pub use export::{config_json, metrics_json, MetricsExport, ProcessOutcome};
pub use timeline::{coalesce, timeline, ExecutionRun};
