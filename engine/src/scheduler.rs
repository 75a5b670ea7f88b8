// Scheduled tasks with cancellation handles
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Owns a scheduled task. Dropping the handle cancels it.
#[derive(Debug)]
pub struct TaskHandle {
    cancel_token: CancellationToken,
    join: JoinHandle<()>,
}

impl TaskHandle {
    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.cancel_token.cancel();
    }
}

/// Runs `task` once after `delay` unless cancelled first.
pub fn spawn_after<F>(delay: Duration, task: F) -> TaskHandle
where
    F: Future<Output = ()> + Send + 'static,
{
    let cancel_token = CancellationToken::new();
    let token = cancel_token.clone();
    let join = tokio::spawn(async move {
        let main = async {
            tokio::time::sleep(delay).await;
            task.await;
        };

        tokio::select! {
            biased;
            () = token.cancelled() => {}
            () = main => {}
        }
    });

    TaskHandle { cancel_token, join }
}

/// Calls `tick` right away and then every `period` until cancelled.
/// Ticks that fall behind are skipped rather than bunched up.
pub fn spawn_interval<F, Fut>(period: Duration, mut tick: F) -> TaskHandle
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let cancel_token = CancellationToken::new();
    let token = cancel_token.clone();
    // tokio panics on a zero period.
    let period = period.max(Duration::from_millis(1));
    let join = tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                biased;
                () = token.cancelled() => break,
                _ = interval.tick() => {
                    tokio::select! {
                        biased;
                        () = token.cancelled() => break,
                        () = tick() => {}
                    }
                }
            }
        }
    });

    TaskHandle { cancel_token, join }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_spawn_after_fires_once_delay_elapses() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();
        let handle = spawn_after(Duration::from_secs(5), async move {
            flag.store(true, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_secs(4)).await;
        assert!(!fired.load(Ordering::SeqCst));

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(fired.load(Ordering::SeqCst));
        assert!(handle.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_handle_cancels_pending_task() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();
        let handle = spawn_after(Duration::from_secs(5), async move {
            flag.store(true, Ordering::SeqCst);
        });
        drop(handle);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(!fired.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_explicit_cancel() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();
        let handle = spawn_after(Duration::from_secs(1), async move {
            flag.store(true, Ordering::SeqCst);
        });
        handle.cancel();
        assert!(handle.is_cancelled());

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(!fired.load(Ordering::SeqCst));
        assert!(handle.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_interval_ticks_immediately_then_periodically() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = ticks.clone();
        let handle = spawn_interval(Duration::from_secs(3600), move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 1);

        tokio::time::sleep(Duration::from_secs(2 * 3600)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 3);

        drop(handle);
        tokio::time::sleep(Duration::from_secs(5 * 3600)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 3);
    }
}
