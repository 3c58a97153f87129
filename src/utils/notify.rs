use std::rc::Rc;

use strum_macros::{AsRefStr, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

/// Transient user-facing messages (the "toast" surface).
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for Rc<N> {
    fn success(&self, message: &str) {
        (**self).success(message)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }
}

/// Prints to the terminal and mirrors to the log file.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        tracing::info!(notification = %message, "Success notification");
        println!("✔ {message}");
    }

    fn error(&self, message: &str) {
        tracing::warn!(notification = %message, "Error notification");
        eprintln!("✘ {message}");
    }
}

#[cfg(any(test, feature = "testing"))]
pub use recording::RecordingNotifier;

#[cfg(any(test, feature = "testing"))]
mod recording {
    use std::cell::RefCell;

    use super::{Notification, NotificationLevel, Notifier};

    /// Keeps every notification in order of arrival.
    #[derive(Debug, Default)]
    pub struct RecordingNotifier {
        seen: RefCell<Vec<Notification>>,
    }

    impl RecordingNotifier {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn notifications(&self) -> Vec<Notification> {
            self.seen.borrow().clone()
        }

        pub fn last(&self) -> Option<Notification> {
            self.seen.borrow().last().cloned()
        }

        fn push(&self, level: NotificationLevel, message: &str) {
            self.seen.borrow_mut().push(Notification {
                level,
                message: message.to_string(),
            });
        }
    }

    impl Notifier for RecordingNotifier {
        fn success(&self, message: &str) {
            self.push(NotificationLevel::Success, message);
        }

        fn error(&self, message: &str) {
            self.push(NotificationLevel::Error, message);
        }
    }
}
