use std::time::Duration;

use jobspark_logging::spark_trace;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Recurring task that drives simulated progress while a request is out.
///
/// The first tick fires one `period` after start. Dropping the ticker cancels
/// it; [`ProgressTicker::stop`] also waits for the task so that no tick can be
/// delivered after it returns.
pub struct ProgressTicker {
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl ProgressTicker {
    /// Must be called from within a tokio runtime.
    pub fn start<F>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let period = period.max(Duration::from_millis(1));
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let task = tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    biased;

                    _ = token.cancelled() => {
                        spark_trace!("progress ticker cancelled");
                        break;
                    }

                    _ = ticks.tick() => on_tick(),
                }
            }
        });

        Self {
            cancel,
            task: Some(task),
        }
    }

    pub fn is_running(&self) -> bool {
        !self.cancel.is_cancelled()
    }

    pub async fn stop(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
