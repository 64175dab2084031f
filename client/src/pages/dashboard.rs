//! Dashboard page: headline stats, role tabs, and per-job contract actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shares `JobsState` with the Jobs page. Stats are recomputed from the whole
//! store on every change; the tab selection lives in state so it survives
//! navigation.
//!
//! DESIGN
//! ======
//! Which buttons a card shows depends only on the viewer's role and the job's
//! status ([`available_actions`]). The contract decides whether the caller is
//! actually allowed; the UI only hides actions that can never apply.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use market::job::{Job, JobRole, JobStatus, short_address};
use market::stats::{DashboardStats, DashboardTab};

use crate::actions::{ContractContext, JobAction, run_job_action};
use crate::components::status_badge::StatusBadge;
use crate::state::jobs::JobsState;
use crate::state::ui::UiState;
use crate::util::format::{group_thousands, money, success_rate};

/// Actions offered on a dashboard card, in display order.
pub fn available_actions(job: &Job) -> Vec<JobAction> {
    match (job.role, job.status) {
        (JobRole::Posted, JobStatus::InProgress) => vec![JobAction::Approve, JobAction::RaiseDispute],
        (JobRole::Working, JobStatus::InProgress) => vec![JobAction::SubmitWork, JobAction::RaiseDispute],
        _ => Vec::new(),
    }
}

/// (label, value) tiles for the stats grid.
pub fn stat_tiles(stats: &DashboardStats) -> [(&'static str, String); 4] {
    [
        ("Total Earned", format!("{} USDC", group_thousands(stats.total_earned))),
        ("Jobs Completed", stats.jobs_completed.to_string()),
        ("Success Rate", success_rate(stats.success_rate)),
        ("In Escrow", format!("{} USDC", group_thousands(stats.in_escrow))),
    ]
}

fn action_class(action: JobAction) -> &'static str {
    match action {
        JobAction::Approve => "btn btn--success",
        JobAction::RaiseDispute => "btn btn--destructive",
        JobAction::Accept | JobAction::SubmitWork => "btn btn--primary",
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let jobs = expect_context::<RwSignal<JobsState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let ctx = ContractContext::from_context();

    let stats = Memo::new(move |_| jobs.with(JobsState::stats));
    let tab = Memo::new(move |_| jobs.with(|state| state.dashboard_tab));
    let listed = Memo::new(move |_| jobs.with(JobsState::dashboard_jobs));

    view! {
        <div class="page dashboard-page">
            <header class="page__header">
                <div>
                    <h1 class="page__title">"Dashboard"</h1>
                    <p class="page__subtitle">"Manage your jobs, escrow, and payments"</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| ui.update(UiState::open_post_job)>
                    "+ Post New Job"
                </button>
            </header>

            <div class="stats-grid">
                {move || {
                    stat_tiles(&stats.get())
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="card stat">
                                    <div class="stat__label">{label}</div>
                                    <div class="stat__value">{value}</div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="tabs" role="tablist">
                {DashboardTab::ALL
                    .into_iter()
                    .map(|option| {
                        view! {
                            <button
                                class="tabs__trigger"
                                class:tabs__trigger--active=move || tab.get() == option
                                role="tab"
                                on:click=move |_| jobs.update(|state| state.dashboard_tab = option)
                            >
                                {option.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="card-list">
                <Show
                    when=move || !listed.with(Vec::is_empty)
                    fallback=move || view! { <div class="card empty">{tab.get().empty_message()}</div> }
                >
                    <For
                        each=move || listed.get()
                        key=|job| (job.id, job.status)
                        children=move |job| view! { <DashboardJobCard job=job jobs=jobs ctx=ctx /> }
                    />
                </Show>
            </div>
        </div>
    }
}

#[component]
fn DashboardJobCard(job: Job, jobs: RwSignal<JobsState>, ctx: ContractContext) -> impl IntoView {
    let id = job.id;
    let pending = move || jobs.with(|state| state.is_pending(id));
    let counterparty = job.counterparty().map(short_address);
    let escrow = money(&job.escrow_amount().to_string(), &job.currency);
    let actions = available_actions(&job);

    view! {
        <article class="card job-card">
            <header class="job-card__header">
                <div>
                    <h3 class="card__title">{job.title}</h3>
                    <div class="job-card__meta">
                        <span class="badge badge--outline">{job.role.label()}</span>
                        <span>{job.deadline}</span>
                        {counterparty.map(|address| view! { <span class="mono">{address}</span> })}
                    </div>
                </div>
                <StatusBadge status=job.status />
            </header>

            <div class="progress">
                <div class="progress__label">
                    <span>"Progress"</span>
                    <span>{job.progress} "%"</span>
                </div>
                <div class="progress__track">
                    <div class="progress__fill" style:width=format!("{}%", job.progress)></div>
                </div>
            </div>

            <div class="job-card__footer">
                <div>
                    <div class="stat__label">"Escrow Amount"</div>
                    <div class="job-card__escrow">{escrow}</div>
                </div>
                <div class="job-card__actions">
                    {actions
                        .into_iter()
                        .map(|action| {
                            view! {
                                <button
                                    class=action_class(action)
                                    disabled=pending
                                    on:click=move |_| run_job_action(ctx, jobs, id, action)
                                >
                                    {move || if pending() { action.pending_label() } else { action.label() }}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </article>
    }
}
