//! Community disputes page: voting rules, status tabs, dispute cards, and
//! pagination.
//!
//! SYSTEM CONTEXT
//! ==============
//! Votes go on-chain first through `actions::run_vote`; the local tally moves
//! once the wallet accepts the transaction, or straight away when no contract
//! is deployed on the wallet's network. Undo has no contract counterpart and
//! only rewinds the local tally.

#[cfg(test)]
#[path = "disputes_test.rs"]
mod disputes_test;

use leptos::prelude::*;
use market::contract::{Notice, Notifier};
use market::dispute::{Dispute, DisputeStatus, RESOLUTION_THRESHOLD, VoteSide};

use crate::actions::{ContractContext, run_vote};
use crate::components::dispute_card::DisputeCard;
use crate::state::disputes::DisputesState;
use crate::state::toasts::ToastNotifier;

/// (heading, body) blocks of the voting-rules card.
pub fn voting_rules() -> [(String, &'static str); 3] {
    [
        (format!("Threshold: {RESOLUTION_THRESHOLD} Votes"), "Disputes are resolved once total votes reach the threshold"),
        ("Majority Rules".to_owned(), "The side with more votes wins the dispute resolution"),
        ("Fair & Transparent".to_owned(), "All votes are recorded on-chain for full transparency"),
    ]
}

/// Status tabs above the dispute list; `None` is the "All" tab.
pub const STATUS_TABS: [(Option<DisputeStatus>, &str); 3] =
    [(None, "All"), (Some(DisputeStatus::Active), "Active"), (Some(DisputeStatus::Resolved), "Resolved")];

/// `For` key: changes whenever the card's rendered tally does.
pub fn card_key(dispute: &Dispute) -> (u64, u32, u32, Option<VoteSide>) {
    (dispute.id, dispute.votes_yes, dispute.votes_no, dispute.your_vote)
}

#[component]
pub fn DisputesPage() -> impl IntoView {
    let disputes = expect_context::<RwSignal<DisputesState>>();
    let ctx = ContractContext::from_context();

    let on_vote = Callback::new(move |(id, side): (u64, VoteSide)| run_vote(ctx, disputes, id, side));
    let on_undo = Callback::new(move |id: u64| {
        let undone = disputes.try_update(|state| state.undo_vote(id));
        if let Some(Err(err)) = undone {
            ToastNotifier::new(ctx.toasts).notify(Notice::destructive("Cannot Undo Vote", err.to_string()));
        }
    });

    let visible = Memo::new(move |_| disputes.with(DisputesState::visible));
    let category = Memo::new(move |_| disputes.with(|state| state.query.category));

    view! {
        <div class="page disputes-page">
            <header class="page__header">
                <div>
                    <h1 class="page__title">"Community Disputes"</h1>
                    <p class="page__subtitle">
                        "Help resolve disputes through community voting. Each vote helps maintain platform integrity."
                    </p>
                </div>
                <div class="page__meta">
                    {move || disputes.with(|state| format!("{} active · {} resolved", state.active_count(), state.resolved_count()))}
                </div>
            </header>

            <section class="card info-card">
                <h2 class="card__title">"How Community Voting Works"</h2>
                <div class="info-card__grid">
                    {voting_rules()
                        .into_iter()
                        .map(|(heading, body)| {
                            view! {
                                <div>
                                    <h4 class="info-card__heading">{heading}</h4>
                                    <p class="info-card__body">{body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <div class="tabs" role="tablist">
                {STATUS_TABS
                    .into_iter()
                    .map(|(option, label)| {
                        view! {
                            <button
                                class="tabs__trigger"
                                class:tabs__trigger--active=move || category.get() == option
                                role="tab"
                                on:click=move |_| disputes.update(|state| state.set_category(option))
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="card-list">
                <Show
                    when=move || !visible.with(Vec::is_empty)
                    fallback=|| view! { <div class="card empty">"No disputes on this tab"</div> }
                >
                    <For
                        each=move || visible.get()
                        key=card_key
                        children=move |dispute| {
                            let id = dispute.id;
                            let pending = Signal::derive(move || disputes.with(|state| state.pending == Some(id)));
                            view! { <DisputeCard dispute=dispute pending=pending on_vote=on_vote on_undo=on_undo /> }
                        }
                    />
                </Show>
            </div>

            <Show when=move || disputes.with(DisputesState::has_more)>
                <div class="load-more">
                    <button class="btn btn--outline btn--lg" on:click=move |_| disputes.update(DisputesState::load_more)>
                        "Load More Disputes"
                    </button>
                </div>
            </Show>
        </div>
    }
}
