use super::*;

#[test]
fn every_job_status_has_a_distinct_class() {
    let mut classes: Vec<&str> = JobStatus::ALL.iter().map(|s| job_badge_class(*s)).collect();
    classes.sort_unstable();
    classes.dedup();
    assert_eq!(classes.len(), JobStatus::ALL.len());
}

#[test]
fn dispute_badges_follow_status() {
    assert_eq!(dispute_badge_class(DisputeStatus::Active), "badge badge--warning");
    assert_eq!(dispute_status_label(DisputeStatus::Resolved), "Resolved");
}
