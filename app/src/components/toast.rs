//! Toast notifications for save/reset feedback.
//!
//! A manager lives in context; any component can push a message with
//! `use_toast().show(..)` and it disappears on its own or on click.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

const MAX_TOASTS: usize = 3;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    Success,
    Error,
}

impl ToastSeverity {
    fn duration_ms(self) -> u32 {
        match self {
            ToastSeverity::Success => 3000,
            ToastSeverity::Error => 6000,
        }
    }
}

#[derive(Clone)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub severity: ToastSeverity,
}

#[derive(Clone, Copy)]
pub struct ToastManager {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u32>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(vec![]),
            next_id: Signal::new(0),
        }
    }

    /// Show a toast; the oldest one is dropped past `MAX_TOASTS`.
    pub fn show(&mut self, message: impl Into<String>, severity: ToastSeverity) {
        let id = *self.next_id.peek();
        *self.next_id.write() += 1;

        {
            let mut toasts = self.toasts.write();
            if toasts.len() >= MAX_TOASTS {
                toasts.remove(0);
            }
            toasts.push(Toast {
                id,
                message: message.into(),
                severity,
            });
        }

        let mut toasts_signal = self.toasts;
        spawn(async move {
            TimeoutFuture::new(severity.duration_ms()).await;
            toasts_signal.write().retain(|t| t.id != id);
        });
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.write().retain(|t| t.id != id);
    }
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the manager. Call once in the root component.
pub fn use_toast_provider() -> ToastManager {
    use_context_provider(ToastManager::new)
}

pub fn use_toast() -> ToastManager {
    use_context::<ToastManager>()
}

/// Renders all active toasts.
#[component]
pub fn ToastFrame() -> Element {
    let mut manager = use_toast();
    let toasts = manager.toasts.read();

    rsx! {
        div { class: "toast-container",
            for toast in toasts.iter() {
                div {
                    key: "{toast.id}",
                    class: match toast.severity {
                        ToastSeverity::Success => "toast toast-success",
                        ToastSeverity::Error => "toast toast-error",
                    },
                    span { class: "toast-message", "{toast.message}" }
                    button {
                        class: "toast-close",
                        onclick: {
                            let id = toast.id;
                            move |_| manager.dismiss(id)
                        },
                        "X"
                    }
                }
            }
        }
    }
}
