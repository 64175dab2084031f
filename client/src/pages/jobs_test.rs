use super::*;

#[test]
fn all_select_value_clears_filter() {
    assert_eq!(category_from_select(ALL_STATUSES), None);
    assert_eq!(category_from_select("bogus"), None);
}

#[test]
fn status_select_value_round_trips() {
    assert_eq!(category_from_select("in-progress"), Some(JobStatus::InProgress));
    assert_eq!(category_to_select(Some(JobStatus::InProgress)), "in-progress");
    assert_eq!(category_to_select(None), "all");
}

#[test]
fn results_label_pluralizes_on_total() {
    assert_eq!(results_label(10, 120), "Showing 10 of 120 jobs");
    assert_eq!(results_label(1, 1), "Showing 1 of 1 job");
    assert_eq!(results_label(0, 0), "Showing 0 of 0 jobs");
}
