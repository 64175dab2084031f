use super::*;

fn open_dispute(votes_yes: u32, votes_no: u32) -> Dispute {
    Dispute::new(7, "Frontend UI/UX Design", "Scope creep", "1800", votes_yes, votes_no)
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_dispute_below_threshold_is_active() {
    let dispute = open_dispute(2, 1);
    assert_eq!(dispute.status, DisputeStatus::Active);
    assert_eq!(dispute.resolution, None);
    assert_eq!(dispute.threshold, RESOLUTION_THRESHOLD);
    assert_eq!(dispute.time_left, "Open");
}

#[test]
fn new_dispute_at_threshold_is_settled_immediately() {
    let dispute = open_dispute(8, 2);
    assert!(dispute.is_resolved());
    assert_eq!(dispute.resolution, Some(Resolution::FavorFreelancer));
    assert_eq!(dispute.time_left, "Resolved");
}

// =============================================================
// cast_vote
// =============================================================

#[test]
fn three_yes_two_no_resolves_for_freelancer() {
    let mut dispute = open_dispute(2, 2);
    let outcome = dispute.cast_vote(VoteSide::FavorFreelancer).expect("vote");
    assert_eq!(outcome, VoteOutcome::Resolved(Resolution::FavorFreelancer));
    assert_eq!(dispute.votes_yes, 3);
    assert_eq!(dispute.votes_no, 2);
    assert_eq!(dispute.status, DisputeStatus::Resolved);
}

#[test]
fn vote_below_threshold_only_counts() {
    let mut dispute = open_dispute(1, 1);
    let outcome = dispute.cast_vote(VoteSide::FavorClient).expect("vote");
    assert_eq!(outcome, VoteOutcome::Counted { total: 3 });
    assert_eq!(dispute.votes_no, 2);
    assert_eq!(dispute.your_vote, Some(VoteSide::FavorClient));
    assert_eq!(dispute.status, DisputeStatus::Active);
}

#[test]
fn client_majority_resolves_for_client() {
    let mut dispute = open_dispute(1, 3);
    let outcome = dispute.cast_vote(VoteSide::FavorClient).expect("vote");
    assert_eq!(outcome, VoteOutcome::Resolved(Resolution::FavorClient));
}

#[test]
fn second_vote_is_rejected() {
    let mut dispute = open_dispute(0, 0);
    dispute.cast_vote(VoteSide::FavorFreelancer).expect("first vote");
    let err = dispute.cast_vote(VoteSide::FavorClient).expect_err("second vote");
    assert_eq!(err, VoteError::AlreadyVoted { dispute_id: 7, side: VoteSide::FavorFreelancer });
    assert_eq!(dispute.total_votes(), 1);
}

#[test]
fn voting_on_resolved_dispute_is_rejected() {
    let mut dispute = open_dispute(4, 1);
    let before = dispute.clone();
    let err = dispute.cast_vote(VoteSide::FavorClient).expect_err("resolved");
    assert_eq!(err, VoteError::Resolved(7));
    assert_eq!(dispute, before);
}

#[test]
fn tie_at_threshold_is_flagged_not_guessed() {
    let mut dispute = open_dispute(2, 2);
    dispute.threshold = 6;
    dispute.settle();
    dispute.cast_vote(VoteSide::FavorFreelancer).expect("vote");
    assert_eq!(dispute.status, DisputeStatus::Active);

    let mut tied = open_dispute(3, 2);
    tied.threshold = 6;
    tied.settle();
    tied.cast_vote(VoteSide::FavorClient).expect("vote");
    assert_eq!(tied.status, DisputeStatus::Resolved);
    assert_eq!(tied.resolution, Some(Resolution::Tie));
}

#[test]
fn resolved_status_always_matches_strict_majority() {
    for yes in 0..=6 {
        for no in 0..=6 {
            let dispute = open_dispute(yes, no);
            if yes + no >= RESOLUTION_THRESHOLD {
                assert!(dispute.is_resolved(), "{yes}/{no} should be resolved");
                let expected = match yes.cmp(&no) {
                    std::cmp::Ordering::Greater => Resolution::FavorFreelancer,
                    std::cmp::Ordering::Less => Resolution::FavorClient,
                    std::cmp::Ordering::Equal => Resolution::Tie,
                };
                assert_eq!(dispute.resolution, Some(expected));
            } else {
                assert!(!dispute.is_resolved(), "{yes}/{no} should be active");
            }
        }
    }
}

// =============================================================
// undo_vote
// =============================================================

#[test]
fn undo_decrements_the_voted_counter() {
    let mut dispute = open_dispute(1, 1);
    dispute.cast_vote(VoteSide::FavorClient).expect("vote");
    let side = dispute.undo_vote().expect("undo");
    assert_eq!(side, VoteSide::FavorClient);
    assert_eq!(dispute.votes_no, 1);
    assert_eq!(dispute.votes_yes, 1);
    assert_eq!(dispute.your_vote, None);
    assert_eq!(dispute.status, DisputeStatus::Active);
}

#[test]
fn undo_allows_voting_again() {
    let mut dispute = open_dispute(0, 0);
    dispute.cast_vote(VoteSide::FavorClient).expect("vote");
    dispute.undo_vote().expect("undo");
    dispute.cast_vote(VoteSide::FavorFreelancer).expect("revote");
    assert_eq!((dispute.votes_yes, dispute.votes_no), (1, 0));
}

#[test]
fn undo_never_goes_negative() {
    let mut dispute = open_dispute(0, 0);
    dispute.your_vote = Some(VoteSide::FavorFreelancer);
    dispute.undo_vote().expect("undo");
    assert_eq!(dispute.votes_yes, 0);
    assert_eq!(dispute.total_votes(), 0);
}

#[test]
fn undo_without_vote_is_rejected() {
    let mut dispute = open_dispute(1, 0);
    assert_eq!(dispute.undo_vote(), Err(VoteError::NoVote(7)));
}

#[test]
fn undo_after_resolution_is_rejected() {
    let mut dispute = open_dispute(3, 1);
    dispute.cast_vote(VoteSide::FavorFreelancer).expect("deciding vote");
    assert_eq!(dispute.undo_vote(), Err(VoteError::Resolved(7)));
    assert_eq!(dispute.votes_yes, 4);
    assert_eq!(dispute.your_vote, Some(VoteSide::FavorFreelancer));
}

// =============================================================
// Display helpers
// =============================================================

#[test]
fn share_is_percentage_of_cast_votes() {
    let dispute = open_dispute(3, 1);
    assert_eq!(dispute.share(VoteSide::FavorFreelancer), 75.0);
    assert_eq!(dispute.share(VoteSide::FavorClient), 25.0);
}

#[test]
fn share_with_no_votes_is_zero() {
    let dispute = open_dispute(0, 0);
    assert_eq!(dispute.share(VoteSide::FavorFreelancer), 0.0);
}

#[test]
fn vote_side_serializes_as_yes_no() {
    assert_eq!(serde_json::to_string(&VoteSide::FavorFreelancer).expect("json"), "\"yes\"");
    assert_eq!(serde_json::to_string(&VoteSide::FavorClient).expect("json"), "\"no\"");
    assert!(VoteSide::FavorFreelancer.for_freelancer());
    assert!(!VoteSide::FavorClient.for_freelancer());
}

#[test]
fn resolution_serializes_as_kebab_case() {
    assert_eq!(serde_json::to_string(&Resolution::FavorFreelancer).expect("json"), "\"favor-freelancer\"");
}
