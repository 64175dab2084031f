use super::*;

fn sample_job(status: JobStatus, role: JobRole) -> Job {
    Job {
        id: 1,
        title: "Smart Contract Audit for DeFi Protocol".to_owned(),
        description: "Review the lending pool".to_owned(),
        budget: "5000".to_owned(),
        currency: DEFAULT_CURRENCY.to_owned(),
        duration: "2 weeks".to_owned(),
        deadline: "5 days left".to_owned(),
        status,
        skills: vec!["Solidity".to_owned(), "Security".to_owned()],
        client: "0x742d35Cc6639C0532fEb96966F4fd329b5b2e8".to_owned(),
        freelancer: Some("0x8ba1f109551bD432803012645Hao98765".to_owned()),
        role,
        progress: 0,
        posted: "2 hours ago".to_owned(),
        created_at_ms: 0,
    }
}

// =============================================================
// JobStatus
// =============================================================

#[test]
fn status_slugs_round_trip() {
    for status in JobStatus::ALL {
        assert_eq!(JobStatus::from_slug(status.slug()), Some(status));
    }
    assert_eq!(JobStatus::from_slug("assigned"), None);
}

#[test]
fn status_serializes_as_kebab_case() {
    let raw = serde_json::to_string(&JobStatus::InProgress).expect("serialize");
    assert_eq!(raw, "\"in-progress\"");
}

#[test]
fn status_labels_match_badges() {
    assert_eq!(JobStatus::InProgress.label(), "In Progress");
    assert_eq!(JobStatus::Cancelled.label(), "Cancelled");
}

#[test]
fn escrow_held_only_while_unsettled() {
    assert!(JobStatus::Open.holds_escrow());
    assert!(JobStatus::Disputed.holds_escrow());
    assert!(!JobStatus::Completed.holds_escrow());
    assert!(!JobStatus::Cancelled.holds_escrow());
}

// =============================================================
// Job
// =============================================================

#[test]
fn escrow_amount_is_budget_while_in_progress() {
    let job = sample_job(JobStatus::InProgress, JobRole::Posted);
    assert_eq!(job.escrow_amount(), 5000.0);
}

#[test]
fn escrow_amount_is_zero_once_completed() {
    let job = sample_job(JobStatus::Completed, JobRole::Posted);
    assert_eq!(job.escrow_amount(), 0.0);
}

#[test]
fn counterparty_depends_on_role() {
    let posted = sample_job(JobStatus::Open, JobRole::Posted);
    assert_eq!(posted.counterparty(), posted.freelancer.as_deref());

    let working = sample_job(JobStatus::Open, JobRole::Working);
    assert_eq!(working.counterparty(), Some(working.client.as_str()));
}

// =============================================================
// Helpers
// =============================================================

#[test]
fn parse_budget_handles_decimals_and_garbage() {
    assert_eq!(parse_budget(" 250.50 "), 250.5);
    assert_eq!(parse_budget("abc"), 0.0);
    assert_eq!(parse_budget(""), 0.0);
    assert_eq!(parse_budget("inf"), 0.0);
}

#[test]
fn short_address_keeps_head_and_tail() {
    assert_eq!(short_address("0x742d35Cc6639C0532fEb96966F4fd329b5b2e8"), "0x742d35Cc...b5b2e8");
}

#[test]
fn short_address_leaves_short_values_alone() {
    assert_eq!(short_address("0xabc"), "0xabc");
}

#[test]
fn posted_label_formats_hours_and_days() {
    assert_eq!(posted_label(0, 0), "Just now");
    assert_eq!(posted_label(0, 1), "1 hour ago");
    assert_eq!(posted_label(0, 5), "5 hours ago");
    assert_eq!(posted_label(1, 3), "1 day ago");
    assert_eq!(posted_label(12, 0), "12 days ago");
}

#[test]
fn dedup_skills_trims_and_drops_duplicates() {
    let skills = dedup_skills([" React", "TypeScript", "React ", "", "Web3"]);
    assert_eq!(skills, vec!["React", "TypeScript", "Web3"]);
}
