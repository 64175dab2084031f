//! Top navigation bar with route links, wallet button, and theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by `App` above the routed pages. Connecting the wallet and
//! opening the Post Job dialog both write shared state; pages react to it.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use market::config::{APP_NAME, NetworkConfig};
use market::contract::{Notice, Notifier};

use crate::state::toasts::{ToastNotifier, ToastState};
use crate::state::ui::UiState;
use crate::state::wallet::WalletState;
use crate::util::theme;

/// Route links in display order.
pub const NAV_LINKS: [(&str, &str); 3] = [("/jobs", "Browse Jobs"), ("/dashboard", "Dashboard"), ("/disputes", "Disputes")];

/// CSS class for a nav link, highlighted when `pathname` is under `href`.
pub fn nav_link_class(href: &str, pathname: &str) -> &'static str {
    let active = pathname == href || pathname.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'));
    if active { "nav__link nav__link--active" } else { "nav__link" }
}

#[component]
pub fn Navigation() -> impl IntoView {
    let wallet = expect_context::<RwSignal<WalletState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let networks = expect_context::<RwSignal<NetworkConfig>>();
    let pathname = use_location().pathname;

    let on_wallet = move |_| {
        if wallet.with_untracked(|w| w.connecting) {
            return;
        }
        if wallet.with_untracked(WalletState::is_connected) {
            wallet.update(WalletState::disconnect);
            return;
        }
        wallet.update(|w| w.connecting = true);
        leptos::task::spawn_local(async move {
            match crate::net::wallet::connect().await {
                Ok((account, chain_id)) => wallet.update(|w| w.connected(account, chain_id)),
                Err(err) => {
                    wallet.update(|w| w.connecting = false);
                    ToastNotifier::new(toasts).notify(Notice::destructive("Wallet Connection Failed", err.to_string()));
                }
            }
        });
    };

    let network_label = move || {
        let state = wallet.get();
        if !state.is_connected() {
            return None;
        }
        let label = if state.wrong_network(&networks.get()) {
            "Unsupported Network".to_owned()
        } else {
            state.network(&networks.get()).name.into_owned()
        };
        Some(view! { <span class="nav__network">{label}</span> })
    };

    view! {
        <nav class="nav">
            <a href="/" class="nav__brand">
                {APP_NAME}
            </a>
            <div class="nav__links">
                {NAV_LINKS
                    .into_iter()
                    .map(|(href, label)| {
                        view! {
                            <a href=href class=move || nav_link_class(href, &pathname.get())>
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <span class="nav__spacer"></span>
            <button class="btn btn--primary" on:click=move |_| ui.update(UiState::open_post_job)>
                "Post Job"
            </button>
            {network_label}
            <button
                class="btn nav__wallet"
                disabled=move || wallet.get().connecting
                title=move || wallet.get().address().unwrap_or_default()
                on:click=on_wallet
            >
                {move || wallet.get().button_label()}
            </button>
            <button
                class="btn nav__theme"
                title="Toggle dark mode"
                on:click=move |_| {
                    if let Some(theme) = ui.try_update(UiState::toggle_theme) {
                        theme::apply(theme);
                        theme::save(theme);
                    }
                }
            >
                {move || ui.with(|u| u.theme.toggle_icon())}
            </button>
        </nav>
    }
}
