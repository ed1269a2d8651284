//! Toast notification queue.
//!
//! Pages push messages; `ToastHost` renders them and schedules dismissal.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long a toast stays on screen.
pub const TOAST_TTL_MS: u32 = 4_000;

/// Oldest toasts are dropped beyond this many.
pub const MAX_TOASTS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
            Self::Info => "toast toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, message: message.into() });
        if self.items.len() > MAX_TOASTS {
            let excess = self.items.len() - MAX_TOASTS;
            self.items.drain(..excess);
        }
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}
