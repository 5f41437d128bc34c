// tokio-backed auto-dismiss timers

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use super::notification::{Scheduler, TimerHandle, ToastId};

/// Spawns a sleeping task per timer and sends the expiry into the owner's
/// event channel, wrapped by `wrap`.
///
/// Must be used from inside a tokio runtime.
pub struct TokioScheduler<E> {
    tx: UnboundedSender<E>,
    wrap: fn(ToastId) -> E,
}

impl<E: Send + 'static> TokioScheduler<E> {
    pub fn new(tx: UnboundedSender<E>, wrap: fn(ToastId) -> E) -> Self {
        Self { tx, wrap }
    }
}

pub struct TokioTimer(JoinHandle<()>);

impl<E: Send + 'static> Scheduler for TokioScheduler<E> {
    type Handle = TokioTimer;

    fn schedule(&mut self, delay: Duration, id: ToastId) -> TokioTimer {
        let tx = self.tx.clone();
        let event = (self.wrap)(id);
        TokioTimer(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the app is shutting down
            let _ = tx.send(event);
        }))
    }
}

impl TimerHandle for TokioTimer {
    fn cancel(self) {
        self.0.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notification::{NotificationCenter, NotificationKind};
    use tokio::sync::mpsc::{self, UnboundedReceiver};

    fn center() -> (NotificationCenter<TokioScheduler<ToastId>>, UnboundedReceiver<ToastId>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (NotificationCenter::new(TokioScheduler::new(tx, std::convert::identity)), rx)
    }

    /// Lets spawned timer tasks observe the advanced clock.
    async fn settle() {
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_dismiss_after_three_seconds() {
        let (mut center, mut rx) = center();
        center.notify("A", NotificationKind::Success);
        settle().await;

        tokio::time::advance(Duration::from_millis(2999)).await;
        settle().await;
        assert!(rx.try_recv().is_err());
        assert!(center.is_visible());

        tokio::time::advance(Duration::from_millis(1)).await;
        settle().await;
        let id = rx.try_recv().expect("timer should have fired");
        assert!(center.expire(id));
        assert!(!center.is_visible());

        tokio::time::advance(Duration::from_secs(10)).await;
        settle().await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_notify_resets_countdown() {
        let (mut center, mut rx) = center();
        center.notify("A", NotificationKind::Success);
        settle().await;
        tokio::time::advance(Duration::from_millis(2000)).await;
        settle().await;

        center.notify("B", NotificationKind::Error);
        settle().await;

        // A's original deadline passes without any expiry
        tokio::time::advance(Duration::from_millis(1500)).await;
        settle().await;
        assert!(rx.try_recv().is_err());
        let snapshot = center.snapshot();
        assert_eq!(snapshot.message, "B");
        assert_eq!(snapshot.kind, NotificationKind::Error);
        assert!(snapshot.visible);

        tokio::time::advance(Duration::from_millis(1500)).await;
        settle().await;
        let id = rx.try_recv().expect("B's timer should have fired");
        assert!(center.expire(id));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_prevents_late_expiry() {
        let (mut center, mut rx) = center();
        center.notify("A", NotificationKind::Info);
        settle().await;
        center.dismiss();
        assert!(!center.is_visible());

        tokio::time::advance(Duration::from_secs(5)).await;
        settle().await;
        assert!(rx.try_recv().is_err());
        assert!(!center.is_visible());
    }
}
