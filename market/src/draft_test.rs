use super::*;

fn valid_draft() -> JobDraft {
    JobDraft {
        title: "Smart Contract Audit".to_owned(),
        description: "Audit our lending protocol before mainnet launch.".to_owned(),
        budget: "5000".to_owned(),
        duration: "14".to_owned(),
        skills: vec!["Solidity".to_owned()],
    }
}

// =============================================================
// validate
// =============================================================

#[test]
fn valid_draft_produces_trimmed_job() {
    let mut draft = valid_draft();
    draft.title = "  Smart Contract Audit  ".to_owned();
    let job = draft.validate().expect("valid");
    assert_eq!(job.title, "Smart Contract Audit");
    assert_eq!(job.duration_days, 14);
    assert_eq!(job.budget, "5000");
}

#[test]
fn empty_draft_reports_every_field() {
    let errors = JobDraft::default().validate().expect_err("invalid");
    assert_eq!(
        errors,
        vec![
            FieldError::TitleTooShort,
            FieldError::DescriptionTooShort,
            FieldError::BudgetMissing,
            FieldError::DurationMissing,
            FieldError::SkillsMissing,
        ]
    );
}

#[test]
fn budget_accepts_up_to_two_decimals() {
    for budget in ["1", "250.5", "250.50", "0.99"] {
        let mut draft = valid_draft();
        draft.budget = budget.to_owned();
        assert!(draft.validate().is_ok(), "{budget} should be valid");
    }
}

#[test]
fn budget_rejects_malformed_values() {
    for budget in ["250.", ".5", "1.234", "-5", "1e3", "12a", "1,000"] {
        let mut draft = valid_draft();
        draft.budget = budget.to_owned();
        let errors = draft.validate().expect_err("invalid budget");
        assert_eq!(errors, vec![FieldError::BudgetFormat], "{budget}");
    }
}

#[test]
fn duration_reads_leading_days() {
    let mut draft = valid_draft();
    draft.duration = "3 weeks".to_owned();
    assert_eq!(draft.validate().expect("valid").duration_days, 3);
}

#[test]
fn duration_without_number_is_rejected() {
    let mut draft = valid_draft();
    draft.duration = "two weeks".to_owned();
    assert_eq!(draft.validate().expect_err("invalid"), vec![FieldError::DurationFormat]);

    draft.duration = "0".to_owned();
    assert_eq!(draft.validate().expect_err("invalid"), vec![FieldError::DurationFormat]);
}

#[test]
fn short_description_is_rejected() {
    let mut draft = valid_draft();
    draft.description = "Too short".to_owned();
    let errors = draft.validate().expect_err("invalid");
    assert_eq!(JobDraft::error_for(&errors, DraftField::Description), Some(FieldError::DescriptionTooShort));
    assert_eq!(JobDraft::error_for(&errors, DraftField::Title), None);
}

// =============================================================
// Skills
// =============================================================

#[test]
fn add_skill_trims_and_ignores_duplicates() {
    let mut draft = JobDraft::default();
    assert!(draft.add_skill(" React "));
    assert!(!draft.add_skill("React"));
    assert!(!draft.add_skill("   "));
    assert!(draft.add_skill("Web3"));
    assert_eq!(draft.skills, vec!["React", "Web3"]);
}

#[test]
fn remove_skill_drops_matching_tag() {
    let mut draft = JobDraft::default();
    draft.add_skill("React");
    draft.add_skill("Web3");
    draft.remove_skill("React");
    assert_eq!(draft.skills, vec!["Web3"]);
}

// =============================================================
// ValidJob
// =============================================================

#[test]
fn deadline_is_duration_days_after_now() {
    let job = valid_draft().validate().expect("valid");
    assert_eq!(job.deadline_secs(1_000), 1_000 + 14 * 86_400);
}

#[test]
fn duration_label_pluralizes() {
    let mut job = valid_draft().validate().expect("valid");
    assert_eq!(job.duration_label(), "14 days");
    job.duration_days = 1;
    assert_eq!(job.duration_label(), "1 day");
}

#[test]
fn field_errors_display_form_messages() {
    assert_eq!(FieldError::BudgetFormat.to_string(), "Invalid budget format");
    assert_eq!(FieldError::SkillsMissing.field(), DraftField::Skills);
}
