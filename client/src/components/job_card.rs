//! Job listing card for the Jobs page.

use leptos::prelude::*;
use market::job::{Job, JobStatus, short_address};

use super::status_badge::StatusBadge;
use crate::actions::JobAction;
use crate::util::format::money;

/// A job on the public board. Open jobs get an "Apply Now" button.
#[component]
pub fn JobCard(job: Job, #[prop(into)] pending: Signal<bool>, on_apply: Callback<u64>) -> impl IntoView {
    let id = job.id;
    let can_apply = job.status == JobStatus::Open;
    let budget = money(&job.budget, &job.currency);
    let client = short_address(&job.client);
    let skills = job
        .skills
        .into_iter()
        .map(|skill| view! { <span class="badge badge--outline">{skill}</span> })
        .collect::<Vec<_>>();

    view! {
        <article class="card job-card">
            <header class="job-card__header">
                <h3 class="job-card__title">{job.title}</h3>
                <StatusBadge status=job.status/>
            </header>
            <p class="job-card__description">{job.description}</p>
            <dl class="job-card__meta">
                <div>
                    <dt>"Budget"</dt>
                    <dd class="job-card__budget">{budget}</dd>
                </div>
                <div>
                    <dt>"Duration"</dt>
                    <dd>{job.duration}</dd>
                </div>
                <div>
                    <dt>"Posted"</dt>
                    <dd>{job.posted}</dd>
                </div>
            </dl>
            <div class="job-card__skills">{skills}</div>
            <footer class="job-card__footer">
                <span class="job-card__client" title=job.client.clone()>
                    "Client: "
                    {client}
                </span>
                <Show when=move || can_apply>
                    <button
                        class="btn btn--primary"
                        disabled=move || pending.get()
                        on:click=move |_| on_apply.run(id)
                    >
                        {move || {
                            if pending.get() { JobAction::Accept.pending_label() } else { JobAction::Accept.label() }
                        }}
                    </button>
                </Show>
            </footer>
        </article>
    }
}
