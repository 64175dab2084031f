use market::mock::seed_disputes;

use super::*;

#[test]
fn threshold_rule_names_the_resolution_threshold() {
    let rules = voting_rules();
    assert_eq!(rules[0].0, "Threshold: 5 Votes");
    assert_eq!(rules[1].0, "Majority Rules");
}

#[test]
fn card_key_changes_when_a_vote_is_counted() {
    let mut dispute = seed_disputes(0).remove(0);
    let before = card_key(&dispute);
    dispute.cast_vote(VoteSide::FavorFreelancer).expect("vote");
    assert_ne!(card_key(&dispute), before);
}

#[test]
fn card_key_changes_on_undo() {
    let mut dispute = seed_disputes(0).remove(1);
    let before = card_key(&dispute);
    dispute.undo_vote().expect("undo");
    assert_ne!(card_key(&dispute), before);
}

#[test]
fn status_tabs_cover_every_dispute_status() {
    let labels: Vec<&str> = STATUS_TABS.iter().map(|(_, label)| *label).collect();
    assert_eq!(labels, ["All", "Active", "Resolved"]);
    assert_eq!(STATUS_TABS[0].0, None);
    assert_eq!(STATUS_TABS[2].0, Some(DisputeStatus::Resolved));
}
