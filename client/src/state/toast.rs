//! Toast notification queue.
//!
//! DESIGN
//! ======
//! A toast moves through two timed phases: visible for `duration_ms`, then
//! `leaving` for [`LEAVE_ANIMATION_MS`] while the exit transition plays, then
//! removed. The queue only tracks phases; timers live in
//! `components::toast_host`.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use crate::components::icons::Icon;

/// How long a toast stays visible when no duration is given.
pub const DEFAULT_DURATION_MS: u32 = 3000;

/// Delay between starting the exit animation and removing the toast.
pub const LEAVE_ANIMATION_MS: u32 = 200;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
    Info,
}

impl ToastKind {
    /// Modifier class appended to `toast--`.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Self::Success => Icon::CheckCircle,
            Self::Error => Icon::ExclamationCircle,
            Self::Info => Icon::InfoCircle,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub duration_ms: u32,
    pub leaving: bool,
}

/// Ordered queue of live toasts.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id. Ids are never reused.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>, duration_ms: u32) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, kind, message: message.into(), duration_ms, leaving: false });
        id
    }

    /// Mark a toast as leaving. Returns `false` if it is gone or already leaving.
    pub fn begin_leave(&mut self, id: u64) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) if !toast.leaving => {
                toast.leaving = true;
                true
            }
            _ => false,
        }
    }

    /// Drop a toast. Unknown ids are ignored.
    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}
