//! Transient toast notifications shared across pages.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

/// Oldest toasts are dropped beyond this many.
pub const MAX_TOASTS: usize = 5;

/// Milliseconds a toast stays on screen.
pub const TOAST_LIFETIME_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub message: String,
}

/// Toast stack, newest last.
#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub toasts: Vec<Toast>,
}

impl NotificationsState {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.toasts.push(Toast { id: id.clone(), kind, message: message.into() });
        if self.toasts.len() > MAX_TOASTS {
            let overflow = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: &str) {
        self.toasts.retain(|toast| toast.id != id);
    }
}
