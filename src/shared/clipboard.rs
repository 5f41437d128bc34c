// Copy-to-clipboard action reporting its outcome as a toast

use arboard::Clipboard;

use super::error::LinkhubError;
use super::notification::{NotificationCenter, NotificationKind, Scheduler};

/// "Copied successfully!"
pub const COPY_SUCCESS: &str = "ចម្លងបានជោគជ័យ!";
/// "Could not copy!"
pub const COPY_FAILURE: &str = "មិនអាចចម្លងបាន!";

pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), LinkhubError>;
}

/// System clipboard through arboard, opened on first use.
///
/// The handle is kept for the life of the app; on X11 and Wayland the copied
/// text is only served while it is alive.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), LinkhubError> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new()?,
        };
        self.inner.insert(clipboard).set_text(text)?;
        Ok(())
    }
}

/// Writes `text` and reports the outcome through `center`. The cause of a
/// failure only goes to the log.
pub fn copy_to_clipboard<W, S>(writer: &mut W, text: &str, center: &mut NotificationCenter<S>)
where
    W: ClipboardWriter + ?Sized,
    S: Scheduler,
{
    match writer.write_text(text) {
        Ok(()) => center.notify(COPY_SUCCESS, NotificationKind::Success),
        Err(err) => {
            log::warn!("copy failed: {}", err);
            center.notify(COPY_FAILURE, NotificationKind::Error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notification::{TimerHandle, ToastId};
    use std::time::Duration;

    struct NoopScheduler;
    struct NoopTimer;

    impl Scheduler for NoopScheduler {
        type Handle = NoopTimer;

        fn schedule(&mut self, _delay: Duration, _id: ToastId) -> NoopTimer {
            NoopTimer
        }
    }

    impl TimerHandle for NoopTimer {
        fn cancel(self) {}
    }

    #[derive(Default)]
    struct FakeClipboard {
        fail: bool,
        contents: Option<String>,
    }

    impl ClipboardWriter for FakeClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), LinkhubError> {
            if self.fail {
                return Err(LinkhubError::Clipboard("no display".to_string()));
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_copy_success_notifies_success() {
        let mut clipboard = FakeClipboard::default();
        let mut center = NotificationCenter::new(NoopScheduler);

        copy_to_clipboard(&mut clipboard, "+85592881545", &mut center);

        assert_eq!(clipboard.contents.as_deref(), Some("+85592881545"));
        let snapshot = center.snapshot();
        assert!(snapshot.visible);
        assert_eq!(snapshot.kind, NotificationKind::Success);
        assert_eq!(snapshot.message, COPY_SUCCESS);
    }

    #[test]
    fn test_copy_failure_notifies_error() {
        let mut clipboard = FakeClipboard {
            fail: true,
            ..Default::default()
        };
        let mut center = NotificationCenter::new(NoopScheduler);
        center.notify("earlier", NotificationKind::Info);

        copy_to_clipboard(&mut clipboard, "rpp.cambodia@savethechildren.org", &mut center);

        assert!(clipboard.contents.is_none());
        let snapshot = center.snapshot();
        assert!(snapshot.visible);
        assert_eq!(snapshot.kind, NotificationKind::Error);
        assert_eq!(snapshot.message, COPY_FAILURE);
    }
}
