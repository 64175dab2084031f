//! Dispute card with the vote tally, vote buttons, and resolution panel.

use leptos::either::Either;
use leptos::prelude::*;
use market::dispute::{Dispute, VoteSide};

use super::status_badge::DisputeBadge;
use crate::util::format::{money, percent, vote_progress};

#[component]
pub fn DisputeCard(
    dispute: Dispute,
    #[prop(into)] pending: Signal<bool>,
    on_vote: Callback<(u64, VoteSide)>,
    on_undo: Callback<u64>,
) -> impl IntoView {
    let id = dispute.id;
    let yes_share = dispute.share(VoteSide::FavorFreelancer);
    let no_share = dispute.share(VoteSide::FavorClient);
    let tally = vote_progress(dispute.total_votes(), dispute.threshold);
    let amount = money(&dispute.amount, &dispute.currency);

    let footer = match (dispute.resolution, dispute.your_vote) {
        (Some(resolution), _) => Either::Left(view! {
            <div class="dispute-card__resolution">
                <strong>{resolution.headline()}</strong>
                <p>{resolution.payout_summary()}</p>
            </div>
        }),
        (None, Some(side)) => Either::Right(Either::Left(view! {
            <div class="dispute-card__voted">
                <span class="badge badge--secondary">"You voted: " {side.label()}</span>
                <button class="btn btn--ghost" on:click=move |_| on_undo.run(id)>
                    "Undo"
                </button>
            </div>
        })),
        (None, None) => Either::Right(Either::Right(view! {
            <div class="dispute-card__actions">
                <button
                    class="btn btn--success"
                    disabled=move || pending.get()
                    on:click=move |_| on_vote.run((id, VoteSide::FavorFreelancer))
                >
                    {VoteSide::FavorFreelancer.label()}
                </button>
                <button
                    class="btn btn--destructive"
                    disabled=move || pending.get()
                    on:click=move |_| on_vote.run((id, VoteSide::FavorClient))
                >
                    {VoteSide::FavorClient.label()}
                </button>
                <Show when=move || pending.get()>
                    <span class="dispute-card__pending">"Submitting vote..."</span>
                </Show>
            </div>
        })),
    };

    view! {
        <article class="card dispute-card">
            <header class="dispute-card__header">
                <h3>{dispute.job_title}</h3>
                <DisputeBadge status=dispute.status/>
            </header>
            <p class="dispute-card__description">{dispute.description}</p>
            <dl class="dispute-card__meta">
                <div>
                    <dt>"Amount"</dt>
                    <dd>{amount}</dd>
                </div>
                <div>
                    <dt>"Time left"</dt>
                    <dd>{dispute.time_left}</dd>
                </div>
                <div>
                    <dt>"Votes"</dt>
                    <dd>{tally}</dd>
                </div>
            </dl>
            <div class="dispute-card__tally">
                <VoteBar label="Favor Freelancer" votes=dispute.votes_yes share=yes_share modifier="yes"/>
                <VoteBar label="Favor Client" votes=dispute.votes_no share=no_share modifier="no"/>
            </div>
            {footer}
        </article>
    }
}

#[component]
fn VoteBar(label: &'static str, votes: u32, share: f64, modifier: &'static str) -> impl IntoView {
    view! {
        <div class=format!("vote-bar vote-bar--{modifier}")>
            <div class="vote-bar__label">
                <span>{label}</span>
                <span>{format!("{votes} ({})", percent(share))}</span>
            </div>
            <div class="progress">
                <div class="progress__fill" style=format!("width: {share:.0}%")></div>
            </div>
        </div>
    }
}
