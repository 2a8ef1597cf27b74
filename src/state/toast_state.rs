//! ToastState - Transient Notifications

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Local};

/// How long a toast stays on screen
pub const TOAST_LIFETIME_SECS: i64 = 5;

/// Kind of notification, selects icon and color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✅",
            ToastKind::Error => "❌",
            ToastKind::Info => "ℹ️",
        }
    }
}

/// A single transient notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub expires_at: DateTime<Local>,
}

/// State for the toast overlay; expired toasts are pruned on clock ticks
#[derive(Debug, Default)]
pub struct ToastState {
    toasts: VecDeque<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Push a notification that expires after [`TOAST_LIFETIME_SECS`]
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>, now: DateTime<Local>) {
        self.next_id += 1;
        self.toasts.push_back(Toast {
            id: self.next_id,
            kind,
            message: message.into(),
            expires_at: now + Duration::seconds(TOAST_LIFETIME_SECS),
        });
    }

    /// Drop expired toasts; returns true when anything changed
    pub fn prune(&mut self, now: DateTime<Local>) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.expires_at > now);
        self.toasts.len() != before
    }

    /// Dismiss a toast by id
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_expire_after_lifetime() {
        let mut state = ToastState::default();
        let now = Local::now();
        state.push(ToastKind::Success, "Dispositivo creado", now);
        state.push(ToastKind::Error, "Error al guardar", now);

        assert!(!state.prune(now + Duration::seconds(1)));
        assert_eq!(state.toasts().count(), 2);

        assert!(state.prune(now + Duration::seconds(TOAST_LIFETIME_SECS + 1)));
        assert!(state.is_empty());
    }

    #[test]
    fn test_dismiss_removes_single_toast() {
        let mut state = ToastState::default();
        let now = Local::now();
        state.push(ToastKind::Info, "uno", now);
        state.push(ToastKind::Info, "dos", now);

        let first_id = state.toasts().next().expect("toast").id;
        state.dismiss(first_id);

        assert_eq!(state.toasts().count(), 1);
        assert_eq!(state.toasts().next().expect("toast").message, "dos");
    }
}
