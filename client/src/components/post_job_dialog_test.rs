use super::*;

#[test]
fn field_message_reads_first_error_for_field() {
    let errors = vec![FieldError::TitleTooShort, FieldError::BudgetFormat];
    assert_eq!(field_message(&errors, DraftField::Budget).as_deref(), Some("Invalid budget format"));
    assert_eq!(field_message(&errors, DraftField::Title).as_deref(), Some("Title must be at least 5 characters"));
    assert_eq!(field_message(&errors, DraftField::Skills), None);
}

#[test]
fn commit_skill_clears_input_when_added() {
    let mut draft = JobDraft::default();
    let mut input = "  Solidity ".to_owned();
    assert!(commit_skill(&mut draft, &mut input));
    assert_eq!(draft.skills, vec!["Solidity".to_owned()]);
    assert!(input.is_empty());
}

#[test]
fn commit_skill_keeps_input_for_duplicates() {
    let mut draft = JobDraft { skills: vec!["Rust".to_owned()], ..JobDraft::default() };
    let mut input = "Rust".to_owned();
    assert!(!commit_skill(&mut draft, &mut input));
    assert_eq!(input, "Rust");
    assert_eq!(draft.skills.len(), 1);
}
