//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page reads shared state from context, so `App` owns the signals.
//! Anything that depends on the browser (random mock jobs, stored theme,
//! network config fetch, an already-authorized wallet) runs in effects, which
//! only fire after hydration. Server HTML is therefore deterministic.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use market::config::{APP_NAME, NetworkConfig};

use crate::components::navigation::Navigation;
use crate::components::post_job_dialog::PostJobDialog;
use crate::components::toast_stack::ToastStack;
use crate::pages::{dashboard::DashboardPage, disputes::DisputesPage, home::HomePage, jobs::JobsPage};
use crate::state::{
    disputes::DisputesState, jobs::JobsState, toasts::ToastState, ui::UiState, wallet::WalletState,
};
use crate::util::{clock, theme};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let jobs = RwSignal::new(JobsState::default());
    let disputes = RwSignal::new(DisputesState::seeded(clock::now_ms()));
    let wallet = RwSignal::new(WalletState::default());
    let toasts = RwSignal::new(ToastState::default());
    let ui = RwSignal::new(UiState::default());
    let networks = RwSignal::new(NetworkConfig::default());

    provide_context(jobs);
    provide_context(disputes);
    provide_context(wallet);
    provide_context(toasts);
    provide_context(ui);
    provide_context(networks);

    Effect::new(move || {
        let seed = clock::load_seed();
        jobs.update(|state| state.seed(seed, clock::now_ms()));
        disputes.update(|state| state.seed(seed.rotate_left(32), clock::now_ms()));

        let saved = theme::load();
        theme::apply(saved);
        ui.update(|u| u.theme = saved);

        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_config().await {
                Ok(config) => networks.set(config.network_config()),
                Err(err) => leptos::logging::warn!("using built-in network config: {err}"),
            }
        });

        leptos::task::spawn_local(async move {
            match crate::net::wallet::restore().await {
                Ok(Some((account, chain_id))) => wallet.update(|w| w.connected(account, chain_id)),
                Ok(None) => {}
                Err(err) => leptos::logging::log!("no wallet session: {err}"),
            }
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/arbifreelance.css"/>
        <Title text=APP_NAME/>

        <Router>
            <Navigation/>
            <main class="main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("jobs") view=JobsPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("disputes") view=DisputesPage/>
                </Routes>
            </main>
            <Show when=move || ui.get().post_job_open>
                <PostJobDialog/>
            </Show>
            <ToastStack/>
        </Router>
    }
}
