use crate::prelude::{Arc, Duration};
use crate::runtime::{Scheduler, TaskHandle};
use crossbeam_channel::{unbounded, Receiver, Sender};

/// Delays a rapidly changing value until it has been stable for a quiet period.
///
/// Every [`Debouncer::push`] cancels the pending timer and starts a new one,
/// so only the latest value survives and it is emitted `delay` after the
/// *last* push. Emitted values are picked up with [`Debouncer::poll`] by the
/// owner of the debouncer, which keeps all state single-writer.
pub struct Debouncer<T> {
    delay: Duration,
    scheduler: Arc<dyn Scheduler>,
    pending: Option<TaskHandle>,
    settled_tx: Sender<T>,
    settled_rx: Receiver<T>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration, scheduler: Arc<dyn Scheduler>) -> Self {
        let (settled_tx, settled_rx) = unbounded();
        Self {
            delay,
            scheduler,
            pending: None,
            settled_tx,
            settled_rx,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Feed a new raw value, restarting the quiet period
    pub fn push(&mut self, value: T) {
        if let Some(previous) = self.pending.take() {
            previous.cancel();
        }

        if self.delay.is_zero() {
            let _ = self.settled_tx.send(value);
            return;
        }

        let tx = self.settled_tx.clone();
        let handle = self.scheduler.schedule(
            self.delay,
            Box::new(move || {
                let _ = tx.send(value);
            }),
        );
        self.pending = Some(handle);
    }

    /// Takes the most recently settled value, if one arrived since the last poll
    pub fn poll(&mut self) -> Option<T> {
        let latest = self.settled_rx.try_iter().last();
        if latest.is_some() && self.pending.as_ref().is_some_and(TaskHandle::is_finished) {
            self.pending = None;
        }
        latest
    }

    /// Whether a value is still waiting, either for its quiet period to end
    /// or to be picked up by [`Debouncer::poll`]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished()) || !self.settled_rx.is_empty()
    }

    /// Drop the pending value without emitting it
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::spawners::ImmediateScheduler;

    #[test]
    fn test_zero_delay_emits_immediately() {
        let mut debouncer = Debouncer::new(Duration::ZERO, Arc::new(ImmediateScheduler));
        debouncer.push(14.2);
        assert_eq!(debouncer.poll(), Some(14.2));
        assert_eq!(debouncer.poll(), None);
    }

    #[test]
    fn test_settled_value_pending_until_polled() {
        let mut debouncer = Debouncer::new(Duration::from_millis(150), Arc::new(ImmediateScheduler));
        debouncer.push(15.0);
        // The timer already fired, but nobody has taken the value yet
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.poll(), Some(15.0));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_poll_keeps_only_latest() {
        let mut debouncer = Debouncer::new(Duration::from_millis(150), Arc::new(ImmediateScheduler));
        debouncer.push(14.0);
        debouncer.push(14.5);
        debouncer.push(15.1);
        assert_eq!(debouncer.poll(), Some(15.1));
        assert!(!debouncer.is_pending());
    }

    #[cfg(feature = "tokio-runtime")]
    #[::tokio::test(start_paused = true)]
    async fn test_burst_emits_last_value_once() {
        use ::tokio::time::sleep;

        let mut debouncer = Debouncer::new(
            Duration::from_millis(150),
            crate::runtime::default_scheduler(),
        );

        debouncer.push(14.0);
        sleep(Duration::from_millis(50)).await;
        debouncer.push(14.6);
        sleep(Duration::from_millis(50)).await;
        debouncer.push(15.2);

        // 150ms after the first push, but only 50ms after the last
        sleep(Duration::from_millis(100)).await;
        assert_eq!(debouncer.poll(), None);
        assert!(debouncer.is_pending());

        sleep(Duration::from_millis(60)).await;
        assert_eq!(debouncer.poll(), Some(15.2));
        assert!(!debouncer.is_pending());

        sleep(Duration::from_millis(500)).await;
        assert_eq!(debouncer.poll(), None);
    }

    #[cfg(feature = "tokio-runtime")]
    #[::tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_value() {
        let mut debouncer = Debouncer::new(
            Duration::from_millis(150),
            crate::runtime::default_scheduler(),
        );
        debouncer.push(16.0);
        debouncer.cancel();
        ::tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(debouncer.poll(), None);
    }
}
