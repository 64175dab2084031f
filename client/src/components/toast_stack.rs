//! Fixed-position stack of toast notifications.

use leptos::prelude::*;

use crate::state::toasts::{Toast, ToastState};

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <ol class="toast-stack" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let destructive = toast.is_destructive();
                    let description = (!toast.notice.description.is_empty())
                        .then(|| view! { <p class="toast__description">{toast.notice.description}</p> });
                    let link = toast.notice.link.map(|href| {
                        view! {
                            <a class="toast__link" href=href target="_blank" rel="noopener noreferrer">
                                "View on explorer"
                            </a>
                        }
                    });
                    view! {
                        <li class="toast" class:toast--destructive=destructive>
                            <div class="toast__body">
                                <strong class="toast__title">{toast.notice.title}</strong>
                                {description}
                                {link}
                            </div>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.update(|state| state.dismiss(id))
                            >
                                "✕"
                            </button>
                        </li>
                    }
                }
            />
        </ol>
    }
}
