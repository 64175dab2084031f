//! Colored status pill for jobs and disputes.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use leptos::prelude::*;
use market::dispute::DisputeStatus;
use market::job::JobStatus;

/// Badge modifier class for a job status.
pub fn job_badge_class(status: JobStatus) -> &'static str {
    match status {
        JobStatus::Open => "badge badge--success",
        JobStatus::InProgress => "badge badge--info",
        JobStatus::Completed => "badge badge--secondary",
        JobStatus::Disputed => "badge badge--warning",
        JobStatus::Cancelled => "badge badge--destructive",
    }
}

pub fn dispute_badge_class(status: DisputeStatus) -> &'static str {
    match status {
        DisputeStatus::Active => "badge badge--warning",
        DisputeStatus::Resolved => "badge badge--success",
    }
}

pub fn dispute_status_label(status: DisputeStatus) -> &'static str {
    match status {
        DisputeStatus::Active => "Active",
        DisputeStatus::Resolved => "Resolved",
    }
}

#[component]
pub fn StatusBadge(status: JobStatus) -> impl IntoView {
    view! { <span class=job_badge_class(status)>{status.label()}</span> }
}

#[component]
pub fn DisputeBadge(status: DisputeStatus) -> impl IntoView {
    view! { <span class=dispute_badge_class(status)>{dispute_status_label(status)}</span> }
}
