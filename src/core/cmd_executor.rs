use std::collections::HashMap;

use color_eyre::eyre::Result;
use tokio::{sync::mpsc, task::JoinHandle, time::MissedTickBehavior};

use crate::core::{
    cmd::{Cmd, TimerId},
    raw_msg::RawMsg,
};

/// Command executor that turns timer commands into tokio tasks.
///
/// Each pending timer is keyed by its [`TimerId`]; scheduling a key again
/// aborts the earlier task, so an expiry is only ever delivered for the most
/// recent request. Expiries come back as [`RawMsg::TimerFired`].
pub struct CmdExecutor {
    raw_tx: mpsc::UnboundedSender<RawMsg>,
    timers: HashMap<TimerId, JoinHandle<()>>,
}

impl CmdExecutor {
    pub fn new(raw_tx: mpsc::UnboundedSender<RawMsg>) -> Self {
        Self {
            raw_tx,
            timers: HashMap::new(),
        }
    }

    /// Execute a single command
    pub fn execute_command(&mut self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::ScheduleTimer { id, delay } => {
                let id = *id;
                let delay = *delay;
                let tx = self.raw_tx.clone();
                self.replace(
                    id,
                    tokio::spawn(async move {
                        tokio::time::sleep(delay).await;
                        let _ = tx.send(RawMsg::TimerFired(id));
                    }),
                );
            }
            Cmd::StartInterval { id, period } => {
                let id = *id;
                let period = *period;
                let tx = self.raw_tx.clone();
                self.replace(
                    id,
                    tokio::spawn(async move {
                        let mut interval = tokio::time::interval(period);
                        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                        // The first tick completes immediately
                        interval.tick().await;
                        loop {
                            interval.tick().await;
                            if tx.send(RawMsg::TimerFired(id)).is_err() {
                                break;
                            }
                        }
                    }),
                );
            }
            Cmd::CancelTimer(id) => {
                if let Some(handle) = self.timers.remove(id) {
                    log::debug!("Cancelled timer {id}");
                    handle.abort();
                }
            }
        }
        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&mut self, commands: &[Cmd]) -> Vec<Result<()>> {
        commands
            .iter()
            .map(|cmd| self.execute_command(cmd))
            .collect()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.get(&id).is_some_and(|handle| !handle.is_finished())
    }

    /// Abort every pending timer
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.timers.drain() {
            handle.abort();
        }
    }

    fn replace(&mut self, id: TimerId, handle: JoinHandle<()>) {
        if let Some(previous) = self.timers.insert(id, handle) {
            previous.abort();
        }
    }
}

impl Drop for CmdExecutor {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;

    fn setup() -> (CmdExecutor, mpsc::UnboundedReceiver<RawMsg>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (CmdExecutor::new(tx), rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_schedule_fires_once() {
        let (mut executor, mut rx) = setup();
        executor
            .execute_command(&Cmd::schedule(TimerId::CarouselRender, Duration::from_millis(200)))
            .unwrap();
        assert!(executor.is_pending(TimerId::CarouselRender));

        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(rx.try_recv().ok(), Some(RawMsg::TimerFired(TimerId::CarouselRender)));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_replaces_pending_timer() {
        let (mut executor, mut rx) = setup();
        let first = Cmd::schedule(TimerId::CarouselResume, Duration::from_millis(100));
        let second = Cmd::schedule(TimerId::CarouselResume, Duration::from_millis(200));
        executor.execute_command(&first).unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        executor.execute_command(&second).unwrap();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(rx.try_recv().ok(), Some(RawMsg::TimerFired(TimerId::CarouselResume)));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_interval_repeats_until_cancelled() {
        let (mut executor, mut rx) = setup();
        executor
            .execute_command(&Cmd::StartInterval {
                id: TimerId::CarouselAutoAdvance,
                period: Duration::from_secs(5),
            })
            .unwrap();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(rx.try_recv().ok(), Some(RawMsg::TimerFired(TimerId::CarouselAutoAdvance)));
        assert_eq!(rx.try_recv().ok(), Some(RawMsg::TimerFired(TimerId::CarouselAutoAdvance)));

        executor
            .execute_command(&Cmd::CancelTimer(TimerId::CarouselAutoAdvance))
            .unwrap();
        assert!(!executor.is_pending(TimerId::CarouselAutoAdvance));
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_unknown_timer_is_noop() {
        let (mut executor, _rx) = setup();
        let results = executor.execute_commands(&[Cmd::CancelTimer(TimerId::MenuClose)]);
        assert_eq!(results.len(), 1);
        assert!(results[0].is_ok());
    }
}
