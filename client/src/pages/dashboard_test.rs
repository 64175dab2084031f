use super::*;

fn job(role: JobRole, status: JobStatus) -> Job {
    Job {
        id: 1,
        title: "Oracle Integration Service".to_owned(),
        description: "Wire the price feeds into the vault".to_owned(),
        budget: "2500".to_owned(),
        currency: "USDC".to_owned(),
        duration: "2 weeks".to_owned(),
        deadline: "5 days left".to_owned(),
        status,
        skills: vec!["Oracle".to_owned()],
        client: "0x742d35Cc6639C0532fEb96966F4fd329b5b2e8aa".to_owned(),
        freelancer: None,
        role,
        progress: 40,
        posted: "1 day ago".to_owned(),
        created_at_ms: 0,
    }
}

#[test]
fn client_can_release_payment_on_work_in_progress() {
    let actions = available_actions(&job(JobRole::Posted, JobStatus::InProgress));
    assert_eq!(actions, vec![JobAction::Approve, JobAction::RaiseDispute]);
    assert_eq!(actions[0].label(), "Release Payment");
}

#[test]
fn freelancer_can_submit_work_in_progress() {
    let actions = available_actions(&job(JobRole::Working, JobStatus::InProgress));
    assert_eq!(actions, vec![JobAction::SubmitWork, JobAction::RaiseDispute]);
}

#[test]
fn settled_jobs_offer_no_actions() {
    for status in [JobStatus::Open, JobStatus::Completed, JobStatus::Disputed, JobStatus::Cancelled] {
        assert!(available_actions(&job(JobRole::Posted, status)).is_empty(), "{status:?}");
        assert!(available_actions(&job(JobRole::Working, status)).is_empty(), "{status:?}");
    }
}

#[test]
fn stat_tiles_format_amounts() {
    let stats = DashboardStats { total_earned: 12_500.0, jobs_completed: 3, success_rate: Some(75.0), in_escrow: 0.0 };
    let tiles = stat_tiles(&stats);
    assert_eq!(tiles[0], ("Total Earned", "12,500 USDC".to_owned()));
    assert_eq!(tiles[1], ("Jobs Completed", "3".to_owned()));
    assert_eq!(tiles[2], ("Success Rate", "75%".to_owned()));
    assert_eq!(tiles[3], ("In Escrow", "0 USDC".to_owned()));
}

#[test]
fn success_rate_tile_waits_for_finished_jobs() {
    let tiles = stat_tiles(&DashboardStats::default());
    assert_eq!(tiles[2].1, "-");
}
