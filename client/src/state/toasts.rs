//! Toast notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Contract calls report through `market::contract::Notifier`. [`ToastNotifier`]
//! is the browser implementation: it pushes into [`ToastState`], which the
//! `ToastStack` component renders and auto-dismisses.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use leptos::prelude::*;
use market::contract::{Notice, NoticeVariant, Notifier};

/// Most toasts kept on screen; older ones are dropped first.
pub const MAX_TOASTS: usize = 3;

/// Milliseconds a toast stays visible before auto-dismiss.
pub const TOAST_TTL_MS: u32 = 5_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

impl Toast {
    pub fn is_destructive(&self) -> bool {
        self.notice.variant == NoticeVariant::Destructive
    }
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a notice and return its toast id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, notice });
        if self.items.len() > MAX_TOASTS {
            let overflow = self.items.len() - MAX_TOASTS;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }
}

/// `Notifier` backed by the shared toast signal.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: RwSignal<ToastState>,
}

impl ToastNotifier {
    pub fn new(toasts: RwSignal<ToastState>) -> Self {
        Self { toasts }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notice: Notice) {
        let id = self.toasts.try_update(|state| state.push(notice));
        #[cfg(feature = "hydrate")]
        {
            if let Some(id) = id {
                let toasts = self.toasts;
                leptos::task::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
                    toasts.try_update(|state| state.dismiss(id));
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    }
}
