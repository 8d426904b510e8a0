//! Transient notification stack.
//!
//! The sink is an explicit context value handed to whichever component
//! needs to report success or failure, rather than an ambient global.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

const TOAST_DISMISS_MS: i32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    Normal,
    Destructive,
}

impl ToastSeverity {
    fn css_class(self) -> &'static str {
        match self {
            ToastSeverity::Normal => "toast-normal",
            ToastSeverity::Destructive => "toast-destructive",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub severity: ToastSeverity,
}

/// Notification sink. Copyable so event handlers can capture it freely.
#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastContext {
    pub fn new() -> Self {
        ToastContext {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn toasts(&self) -> RwSignal<Vec<Toast>> {
        self.toasts
    }

    pub fn success(&self, title: &str, description: &str) {
        self.push(title, description, ToastSeverity::Normal);
    }

    pub fn error(&self, title: &str, description: &str) {
        self.push(title, description, ToastSeverity::Destructive);
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    fn push(&self, title: &str, description: &str, severity: ToastSeverity) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.toasts.update(|list| {
            list.push(Toast {
                id,
                title: title.to_string(),
                description: description.to_string(),
                severity,
            })
        });

        // Auto-dismiss; the close button remains for impatient users.
        let ctx = *self;
        let callback = wasm_bindgen::closure::Closure::once(move || ctx.dismiss(id));
        let _ = web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                TOAST_DISMISS_MS,
            );
        callback.forget();
    }
}

/// Renders the active notifications in a fixed corner stack.
#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = expect_context::<ToastContext>();

    view! {
        <div class="toast-stack">
            <style>{include_str!("toast.css")}</style>
            {move || {
                ctx.toasts()
                    .get()
                    .iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=format!("toast {}", toast.severity.css_class())>
                                <div class="toast-body">
                                    <span class="toast-title">{toast.title.clone()}</span>
                                    <span class="toast-description">{toast.description.clone()}</span>
                                </div>
                                <button class="toast-close" on:click=move |_| ctx.dismiss(id)>
                                    "\u{00d7}"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
