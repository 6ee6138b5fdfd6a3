/*!
 * Simulation Runner - Timed Stepping
 *
 * Background task that issues one step per interval while the simulation
 * is running, and exits once it completes.
 */

use super::traits::SimulationControl;
use crate::core::id::SimulationId;
use crate::scheduler::SimulationStatus;
use log::{info, trace, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Control messages for the runner task
#[derive(Debug, Clone)]
pub enum RunnerCommand {
    /// Change the wall-clock delay between steps
    UpdateInterval(Duration),
    /// Pause the simulation
    Pause,
    /// Resume the simulation
    Resume,
    /// Step immediately, outside the interval
    Trigger,
    /// Stop the runner task
    Shutdown,
}

/// Handle to a runner task
pub struct SimulationRunner {
    command_tx: mpsc::UnboundedSender<RunnerCommand>,
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl SimulationRunner {
    /// Spawn a runner for `id`, stepping every `interval`
    ///
    /// The runner never starts the simulation itself; it only steps while
    /// the stored status is `running`.
    pub fn spawn<C>(control: Arc<C>, id: SimulationId, interval: Duration) -> Self
    where
        C: SimulationControl + 'static,
    {
        let (command_tx, command_rx) = mpsc::unbounded_channel();

        let handle = tokio::spawn(async move {
            run_loop(control, id, interval, command_rx).await;
        });

        info!("Runner spawned for simulation {} ({:?} per tick)", id, interval);

        Self {
            command_tx,
            handle: Some(handle),
        }
    }

    pub fn update_interval(&self, interval: Duration) {
        let _ = self.command_tx.send(RunnerCommand::UpdateInterval(interval));
    }

    pub fn pause(&self) {
        let _ = self.command_tx.send(RunnerCommand::Pause);
    }

    pub fn resume(&self) {
        let _ = self.command_tx.send(RunnerCommand::Resume);
    }

    pub fn trigger(&self) {
        let _ = self.command_tx.send(RunnerCommand::Trigger);
    }

    /// Whether the task has exited
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }

    /// Wait for the runner to exit on its own (completion or error)
    ///
    /// Dropping the returned future before it resolves shuts the runner down.
    pub async fn join(mut self) {
        if let Some(handle) = self.handle.as_mut() {
            if let Err(e) = handle.await {
                warn!("Runner task join error: {}", e);
            }
        }
        self.handle = None;
    }

    /// Shutdown the runner gracefully
    pub async fn shutdown(mut self) {
        let _ = self.command_tx.send(RunnerCommand::Shutdown);

        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                warn!("Runner shutdown error: {}", e);
            } else {
                info!("Runner shutdown complete");
            }
        }
    }
}

/// Outcome of one timer tick
enum TickOutcome {
    Continue,
    Finished,
}

async fn run_loop<C>(
    control: Arc<C>,
    id: SimulationId,
    period: Duration,
    mut command_rx: mpsc::UnboundedReceiver<RunnerCommand>,
) where
    C: SimulationControl,
{
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                if let TickOutcome::Finished = tick(control.as_ref(), id) {
                    break;
                }
            }

            Some(cmd) = command_rx.recv() => {
                match cmd {
                    RunnerCommand::UpdateInterval(new_period) => {
                        info!("Runner interval updated: {:?}", new_period);
                        interval = tokio::time::interval(new_period);
                        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
                    }

                    RunnerCommand::Pause => {
                        if let Err(e) = control.pause(id) {
                            warn!("Runner could not pause {}: {}", id, e);
                        }
                    }

                    RunnerCommand::Resume => {
                        if let Err(e) = control.start(id) {
                            warn!("Runner could not resume {}: {}", id, e);
                        }
                    }

                    RunnerCommand::Trigger => {
                        if let TickOutcome::Finished = tick(control.as_ref(), id) {
                            break;
                        }
                    }

                    RunnerCommand::Shutdown => {
                        info!("Runner for {} shutting down", id);
                        break;
                    }
                }
            }
        }
    }
}

/// Step once if the simulation is running
fn tick<C>(control: &C, id: SimulationId) -> TickOutcome
where
    C: SimulationControl + ?Sized,
{
    match control.status(id) {
        Ok(SimulationStatus::Running) => {}
        Ok(SimulationStatus::Completed) => return TickOutcome::Finished,
        Ok(_) => return TickOutcome::Continue,
        Err(e) => {
            warn!("Runner stopping: {}", e);
            return TickOutcome::Finished;
        }
    }

    match control.step(id) {
        Ok(sim) if sim.status == SimulationStatus::Completed => {
            info!(
                "Simulation {} completed after {} ticks",
                id, sim.current_time
            );
            TickOutcome::Finished
        }
        Ok(sim) => {
            trace!("Runner tick: simulation {} at t={}", id, sim.current_time);
            TickOutcome::Continue
        }
        Err(e) => {
            // Paused between the status check and the step
            trace!("Runner skipped step: {}", e);
            TickOutcome::Continue
        }
    }
}

impl Drop for SimulationRunner {
    fn drop(&mut self) {
        if self.handle.is_some() {
            let _ = self.command_tx.send(RunnerCommand::Shutdown);
        }
    }
}
