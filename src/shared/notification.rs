// Single-slot toast notifications with a cancellable auto-dismiss timer

use std::time::Duration;

/// How long a toast stays up without user action.
pub const AUTO_DISMISS: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
    Info,
}

/// What the view renders for the toast banner.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub visible: bool,
}

/// Stamped on every armed timer so a late expiry can be told apart from the
/// current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

/// Arms one-shot timers. When a timer fires, its owner must be handed the
/// `ToastId` back and call [`NotificationCenter::expire`] with it.
pub trait Scheduler {
    type Handle: TimerHandle;

    fn schedule(&mut self, delay: Duration, id: ToastId) -> Self::Handle;
}

pub trait TimerHandle {
    /// Stops the timer. A timer that already fired is left alone.
    fn cancel(self);
}

struct Active<H> {
    message: String,
    kind: NotificationKind,
    id: ToastId,
    timer: H,
}

/// Holds at most one visible notification.
///
/// Idle when `active` is `None`; Visible otherwise, and then exactly one
/// timer is pending.
pub struct NotificationCenter<S: Scheduler> {
    scheduler: S,
    active: Option<Active<S::Handle>>,
    next_id: u64,
}

impl<S: Scheduler> NotificationCenter<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            active: None,
            next_id: 0,
        }
    }

    /// Shows `message`, replacing whatever was up, and restarts the countdown.
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) {
        if let Some(previous) = self.active.take() {
            previous.timer.cancel();
        }

        let id = ToastId(self.next_id);
        self.next_id += 1;
        let timer = self.scheduler.schedule(AUTO_DISMISS, id);
        let message = message.into();
        log::debug!("toast {:?} ({:?}): {}", id, kind, message);

        self.active = Some(Active {
            message,
            kind,
            id,
            timer,
        });
    }

    /// Hides the current notification. No-op while idle.
    pub fn dismiss(&mut self) {
        if let Some(active) = self.active.take() {
            log::debug!("toast {:?} dismissed", active.id);
            active.timer.cancel();
        }
    }

    /// Timer callback. Returns `true` if the notification was hidden, `false`
    /// for a stale id whose notification was already replaced or dismissed.
    pub fn expire(&mut self, id: ToastId) -> bool {
        match &self.active {
            Some(active) if active.id == id => {
                log::debug!("toast {:?} expired", id);
                self.active = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.active.is_some()
    }

    /// Id of the timer currently armed, if any.
    pub fn pending_timer(&self) -> Option<ToastId> {
        self.active.as_ref().map(|active| active.id)
    }

    pub fn snapshot(&self) -> Notification {
        match &self.active {
            Some(active) => Notification {
                message: active.message.clone(),
                kind: active.kind,
                visible: true,
            },
            None => Notification::default(),
        }
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}
