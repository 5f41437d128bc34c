// Auto-dismiss timers as iced tasks, and the toast banner widget

use std::time::Duration;

use iced::task::Handle;
use iced::widget::{button, container, row, text};
use iced::{Element, Length, Task};

use super::message::Message;
use super::theme::{icon_button, surface_style, HubColors};
use crate::shared::{Notification, NotificationKind, Scheduler, TimerHandle, ToastId};

/// Turns each armed timer into an abortable task that emits
/// `Message::ToastExpired`. The tasks are collected here until `update`
/// hands them to the runtime.
#[derive(Default)]
pub struct IcedScheduler {
    pending: Vec<Task<Message>>,
}

impl IcedScheduler {
    pub fn take_tasks(&mut self) -> Task<Message> {
        Task::batch(std::mem::take(&mut self.pending))
    }
}

pub struct IcedTimer(Handle);

impl Scheduler for IcedScheduler {
    type Handle = IcedTimer;

    fn schedule(&mut self, delay: Duration, id: ToastId) -> IcedTimer {
        let (task, handle) =
            Task::perform(tokio::time::sleep(delay), move |_| Message::ToastExpired(id)).abortable();
        self.pending.push(task);
        IcedTimer(handle)
    }
}

impl TimerHandle for IcedTimer {
    fn cancel(self) {
        self.0.abort();
    }
}

pub fn view_toast<'a>(notification: Notification, colors: HubColors) -> Element<'a, Message> {
    let icon = match notification.kind {
        NotificationKind::Success => "✔",
        NotificationKind::Error => "✘",
        NotificationKind::Info => "ℹ",
    };

    let content = row![
        text(icon).size(14),
        text(notification.message).size(14),
        button(text("✕").size(12))
            .on_press(Message::DismissToast)
            .padding([0, 4])
            .style(move |_theme, status| icon_button(&colors, status)),
    ]
    .spacing(8)
    .align_y(iced::Alignment::Center);

    let border = colors.kind_color(notification.kind);
    container(
        container(content)
            .padding([10, 16])
            .style(move |_theme| surface_style(&colors, border)),
    )
    .padding(16)
    .center_x(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{NotificationCenter, AUTO_DISMISS};

    #[tokio::test]
    async fn test_schedule_queues_one_task_and_take_drains() {
        let mut center = NotificationCenter::new(IcedScheduler::default());
        center.notify("Copied", NotificationKind::Success);
        assert_eq!(center.scheduler_mut().pending.len(), 1);

        let id = center.pending_timer().unwrap();
        let _timer = center.scheduler_mut().schedule(AUTO_DISMISS, id);
        assert_eq!(center.scheduler_mut().pending.len(), 2);

        let _ = center.scheduler_mut().take_tasks();
        assert!(center.scheduler_mut().pending.is_empty());
        let _ = center.scheduler_mut().take_tasks();
        assert!(center.scheduler_mut().pending.is_empty());
    }

    #[tokio::test]
    async fn test_rearm_and_dismiss_ignore_stale_expiry() {
        let mut center = NotificationCenter::new(IcedScheduler::default());

        center.notify("first", NotificationKind::Info);
        let first = center.pending_timer().unwrap();
        center.notify("second", NotificationKind::Error);
        let second = center.pending_timer().unwrap();
        assert_ne!(first, second);
        // One task per notify, each handed over on the next update
        assert_eq!(center.scheduler_mut().pending.len(), 2);

        assert!(!center.expire(first));
        assert!(center.is_visible());
        assert_eq!(center.snapshot().message, "second");

        center.dismiss();
        assert_eq!(center.pending_timer(), None);
        assert!(!center.is_visible());
        assert!(!center.expire(first));
        assert!(!center.expire(second));
    }
}
