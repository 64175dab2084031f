//! Browse Jobs page: search, status filter, sort, and paged job cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes `JobsState`. Every filter change resets pagination in the
//! state layer, so this page only forwards input values. "Apply Now" accepts
//! the job on-chain through `actions::run_job_action`.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use leptos::prelude::*;
use market::job::JobStatus;
use market::listing::SortKey;

use crate::actions::{ContractContext, JobAction, run_job_action};
use crate::components::job_card::JobCard;
use crate::state::jobs::JobsState;
use crate::state::ui::UiState;

/// Select value meaning "no status filter".
pub const ALL_STATUSES: &str = "all";

/// Status filter from a select value; unknown values clear the filter.
pub fn category_from_select(raw: &str) -> Option<JobStatus> {
    JobStatus::from_slug(raw)
}

/// Select value for the current filter.
pub fn category_to_select(category: Option<JobStatus>) -> &'static str {
    category.map_or(ALL_STATUSES, JobStatus::slug)
}

/// "Showing N of M jobs".
pub fn results_label(shown: usize, total: usize) -> String {
    let noun = if total == 1 { "job" } else { "jobs" };
    format!("Showing {shown} of {total} {noun}")
}

#[component]
pub fn JobsPage() -> impl IntoView {
    let jobs = expect_context::<RwSignal<JobsState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let ctx = ContractContext::from_context();

    let on_apply = Callback::new(move |job_id: u64| run_job_action(ctx, jobs, job_id, JobAction::Accept));

    let visible = Memo::new(move |_| jobs.with(JobsState::visible));
    let total = Memo::new(move |_| jobs.with(|state| state.filtered().len()));

    view! {
        <div class="page jobs-page">
            <header class="page__header">
                <div>
                    <h1 class="page__title">"Browse Jobs"</h1>
                    <p class="page__subtitle">"Find your next freelance opportunity on the decentralized web"</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| ui.update(UiState::open_post_job)>
                    "+ Post Job"
                </button>
            </header>

            <div class="filters">
                <input
                    class="form__input filters__search"
                    type="search"
                    placeholder="Search jobs, skills, or keywords..."
                    prop:value=move || jobs.with(|state| state.query.search.clone())
                    on:input=move |ev| jobs.update(|state| state.set_search(event_target_value(&ev)))
                />
                <select
                    class="form__select"
                    prop:value=move || jobs.with(|state| category_to_select(state.query.category))
                    on:change=move |ev| {
                        jobs.update(|state| state.set_category(category_from_select(&event_target_value(&ev))));
                    }
                >
                    <option value=ALL_STATUSES>"All Jobs"</option>
                    {JobStatus::ALL
                        .into_iter()
                        .map(|status| view! { <option value=status.slug()>{status.label()}</option> })
                        .collect_view()}
                </select>
                <select
                    class="form__select"
                    prop:value=move || jobs.with(|state| state.query.sort.slug())
                    on:change=move |ev| {
                        let sort = SortKey::from_slug(&event_target_value(&ev)).unwrap_or_default();
                        jobs.update(|state| state.set_sort(sort));
                    }
                >
                    {SortKey::ALL
                        .into_iter()
                        .map(|sort| view! { <option value=sort.slug()>{sort.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            <p class="page__meta">{move || results_label(visible.with(Vec::len), total.get())}</p>

            <div class="card-list">
                <Show
                    when=move || !visible.with(Vec::is_empty)
                    fallback=|| view! { <p class="empty">"No jobs match your filters"</p> }
                >
                    <For
                        each=move || visible.get()
                        key=|job| (job.id, job.status)
                        children=move |job| {
                            let id = job.id;
                            let pending = Signal::derive(move || jobs.with(|state| state.is_pending(id)));
                            view! { <JobCard job=job pending=pending on_apply=on_apply /> }
                        }
                    />
                </Show>
            </div>

            <Show when=move || jobs.with(JobsState::has_more)>
                <div class="load-more">
                    <button class="btn btn--outline btn--lg" on:click=move |_| jobs.update(JobsState::load_more)>
                        "Load More Jobs"
                    </button>
                </div>
            </Show>
        </div>
    }
}
