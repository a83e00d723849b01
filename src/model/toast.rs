//! Transient status notifications
//!
//! A toast is shown in the status line until it expires. Only the most
//! recent one is kept.

use chrono::{DateTime, Duration, Local};

/// How long a toast stays visible
pub const TOAST_TTL_SECS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub created_at: DateTime<Local>,
}

impl Toast {
    pub fn is_expired(&self, now: DateTime<Local>) -> bool {
        now - self.created_at >= Duration::seconds(TOAST_TTL_SECS)
    }
}

#[derive(Debug, Default)]
pub struct Toasts {
    current: Option<Toast>,
}

impl Toasts {
    pub fn new() -> Self {
        Self { current: None }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into(), Local::now());
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into(), Local::now());
    }

    fn push(&mut self, kind: ToastKind, message: String, created_at: DateTime<Local>) {
        tracing::info!("toast: {}", message);
        self.current = Some(Toast {
            kind,
            message,
            created_at,
        });
    }

    /// Drop the current toast once it has been visible long enough
    pub fn expire(&mut self, now: DateTime<Local>) {
        if self.current.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_toast_wins() {
        let mut toasts = Toasts::new();
        toasts.info("first");
        toasts.success("Draft reset");
        let toast = toasts.current().unwrap();
        assert_eq!(toast.message, "Draft reset");
        assert_eq!(toast.kind, ToastKind::Success);
    }

    #[test]
    fn test_toast_expires_after_ttl() {
        let mut toasts = Toasts::new();
        let start = Local::now();
        toasts.push(ToastKind::Success, "saved".to_string(), start);

        toasts.expire(start + Duration::seconds(1));
        assert!(toasts.current().is_some());

        toasts.expire(start + Duration::seconds(TOAST_TTL_SECS));
        assert!(toasts.current().is_none());
    }
}
