//! Toast rendering and the `Toaster` handle.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app::App` provides one [`Toaster`] via context and mounts one
//! [`ToastHost`]. Pages call `use_toaster().success(..)` and friends; the host
//! owns the dismissal timers. Timers are fire-and-forget: a toast that was
//! already dismissed by click simply fails the `begin_leave` check.

use leptos::prelude::*;

use super::icons::IconGlyph;
use crate::state::toast::{DEFAULT_DURATION_MS, LEAVE_ANIMATION_MS, ToastKind, ToastState};

/// Copyable handle for raising toasts.
#[derive(Clone, Copy)]
pub struct Toaster {
    state: RwSignal<ToastState>,
}

impl Toaster {
    pub fn new(state: RwSignal<ToastState>) -> Self {
        Self { state }
    }

    /// Raise a toast. `duration_ms` defaults to [`DEFAULT_DURATION_MS`].
    pub fn show(&self, kind: ToastKind, message: impl Into<String>, duration_ms: Option<u32>) {
        let duration_ms = duration_ms.unwrap_or(DEFAULT_DURATION_MS);
        let message = message.into();
        let state = self.state;
        if let Some(id) = state.try_update(|s| s.push(kind, message, duration_ms)) {
            schedule(duration_ms, move || dismiss(state, id));
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message, None);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message, None);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(ToastKind::Info, message, None);
    }
}

/// Fetch the app-wide toaster. Panics if `App` did not provide one.
pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

fn dismiss(state: RwSignal<ToastState>, id: u64) {
    if state.try_update(|s| s.begin_leave(id)).unwrap_or(false) {
        schedule(LEAVE_ANIMATION_MS, move || state.update(|s| s.remove(id)));
    }
}

fn schedule(millis: u32, callback: impl FnOnce() + 'static) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(millis, callback).forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (millis, callback);
    }
}

/// Fixed-position stack rendering every live toast.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();
    let state = toaster.state;

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || state.get().toasts
                key=|toast| (toast.id, toast.leaving)
                children=move |toast| {
                    let id = toast.id;
                    let class = format!(
                        "toast toast--{}{}",
                        toast.kind.css_modifier(),
                        if toast.leaving { " toast--leaving" } else { "" },
                    );
                    view! {
                        <div class=class role="status" on:click=move |_| dismiss(state, id)>
                            <IconGlyph icon=toast.kind.icon() class="toast__icon"/>
                            <span class="toast__message">{toast.message.clone()}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
