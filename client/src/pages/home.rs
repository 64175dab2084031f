//! Landing page: hero, feature cards, workflow steps, and headline figures.

use leptos::prelude::*;
use market::config::APP_NAME;

use crate::state::ui::UiState;

/// (title, description) feature cards.
pub const FEATURES: [(&str, &str); 3] = [
    (
        "Secure Escrow",
        "USDC funds are locked in smart contracts until job completion, ensuring payment security for both parties.",
    ),
    (
        "Instant Releases",
        "Payments are released instantly upon job completion confirmation, with no intermediary delays.",
    ),
    (
        "Community Disputes",
        "Fair dispute resolution through community voting, ensuring transparent and democratic outcomes.",
    ),
];

/// (step, description) in workflow order.
pub const STEPS: [(&str, &str); 4] = [
    ("Post Job", "Client deposits USDC into escrow smart contract with job details"),
    ("Accept Work", "Freelancer accepts the job, locking their address to the contract"),
    ("Complete & Review", "Work is delivered and reviewed by the client for approval"),
    ("Get Paid", "Funds are instantly released to freelancer upon client approval"),
];

const HEADLINES: [(&str, &str); 3] =
    [("$2.5M+", "Total Volume Secured"), ("1,247", "Jobs Completed"), ("99.2%", "Success Rate")];

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="home">
            <section class="hero">
                <h1 class="hero__title">
                    <span class="hero__accent">"Decentralized"</span>
                    <br />
                    "Freelance Platform"
                </h1>
                <p class="hero__lead">
                    "Secure escrow smart contracts on Arbitrum. Zero disputes, instant payments, "
                    "and community-driven resolution for the future of freelance work."
                </p>
                <div class="hero__actions">
                    <a href="/jobs" class="btn btn--primary btn--lg">
                        "Browse Jobs →"
                    </a>
                    <button class="btn btn--outline btn--lg" on:click=move |_| ui.update(UiState::open_post_job)>
                        "+ Post a Job"
                    </button>
                </div>
            </section>

            <section class="home__section">
                <h2 class="home__heading">"Built on " <span class="hero__accent">"Arbitrum"</span></h2>
                <p class="home__subheading">
                    "Leveraging smart contracts for transparent, secure, and efficient freelance transactions"
                </p>
                <div class="feature-grid">
                    {FEATURES
                        .into_iter()
                        .map(|(title, description)| {
                            view! {
                                <div class="card feature">
                                    <h3 class="card__title">{title}</h3>
                                    <p class="card__description">{description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="home__section">
                <h2 class="home__heading">"How It Works"</h2>
                <p class="home__subheading">"Simple, secure, and transparent freelance workflow"</p>
                <ol class="steps">
                    {STEPS
                        .into_iter()
                        .enumerate()
                        .map(|(index, (title, description))| {
                            view! {
                                <li class="step">
                                    <span class="step__number">{index + 1}</span>
                                    <h3 class="step__title">{title}</h3>
                                    <p class="step__description">{description}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </section>

            <section class="home__section home__stats">
                {HEADLINES
                    .into_iter()
                    .map(|(value, label)| {
                        view! {
                            <div class="headline">
                                <div class="headline__value">{value}</div>
                                <div class="headline__label">{label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <footer class="home__footer">{APP_NAME} " · Escrow on Arbitrum"</footer>
        </div>
    }
}
