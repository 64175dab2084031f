//! Job-posting form model and validation.
//!
//! ERROR HANDLING
//! ==============
//! Validation collects every failing field instead of stopping at the first,
//! so the form can show all inline messages at once. A draft only becomes a
//! [`ValidJob`] when the list is empty; nothing reaches the contract layer
//! otherwise.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use serde::{Deserialize, Serialize};

const MIN_TITLE_CHARS: usize = 5;
const MIN_DESCRIPTION_CHARS: usize = 20;
const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Form field a validation message belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DraftField {
    Title,
    Description,
    Budget,
    Duration,
    Skills,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Title must be at least 5 characters")]
    TitleTooShort,
    #[error("Description must be at least 20 characters")]
    DescriptionTooShort,
    #[error("Budget is required")]
    BudgetMissing,
    #[error("Invalid budget format")]
    BudgetFormat,
    #[error("Duration is required")]
    DurationMissing,
    #[error("Duration must start with a whole number of days")]
    DurationFormat,
    #[error("At least one skill is required")]
    SkillsMissing,
}

impl FieldError {
    #[must_use]
    pub fn field(self) -> DraftField {
        match self {
            Self::TitleTooShort => DraftField::Title,
            Self::DescriptionTooShort => DraftField::Description,
            Self::BudgetMissing | Self::BudgetFormat => DraftField::Budget,
            Self::DurationMissing | Self::DurationFormat => DraftField::Duration,
            Self::SkillsMissing => DraftField::Skills,
        }
    }
}

/// Raw, possibly invalid form input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDraft {
    pub title: String,
    pub description: String,
    pub budget: String,
    pub duration: String,
    pub skills: Vec<String>,
}

impl JobDraft {
    /// Add a trimmed skill tag. Returns `false` for empty or duplicate input.
    pub fn add_skill(&mut self, raw: &str) -> bool {
        let skill = raw.trim();
        if skill.is_empty() || self.skills.iter().any(|existing| existing == skill) {
            return false;
        }
        self.skills.push(skill.to_owned());
        true
    }

    pub fn remove_skill(&mut self, skill: &str) {
        self.skills.retain(|existing| existing != skill);
    }

    /// First message for `field`, if any, from a previous [`Self::validate`].
    #[must_use]
    pub fn error_for(errors: &[FieldError], field: DraftField) -> Option<FieldError> {
        errors.iter().copied().find(|err| err.field() == field)
    }

    /// Check every field.
    ///
    /// # Errors
    ///
    /// Returns all failing fields, in form order.
    pub fn validate(&self) -> Result<ValidJob, Vec<FieldError>> {
        let mut errors = Vec::new();

        let title = self.title.trim();
        if title.chars().count() < MIN_TITLE_CHARS {
            errors.push(FieldError::TitleTooShort);
        }

        let description = self.description.trim();
        if description.chars().count() < MIN_DESCRIPTION_CHARS {
            errors.push(FieldError::DescriptionTooShort);
        }

        let budget = self.budget.trim();
        if budget.is_empty() {
            errors.push(FieldError::BudgetMissing);
        } else if !is_well_formed_budget(budget) {
            errors.push(FieldError::BudgetFormat);
        }

        let duration = self.duration.trim();
        let duration_days = if duration.is_empty() {
            errors.push(FieldError::DurationMissing);
            0
        } else {
            match leading_days(duration) {
                Some(days) => days,
                None => {
                    errors.push(FieldError::DurationFormat);
                    0
                }
            }
        };

        if self.skills.is_empty() {
            errors.push(FieldError::SkillsMissing);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidJob {
            title: title.to_owned(),
            description: description.to_owned(),
            budget: budget.to_owned(),
            duration_days,
            skills: self.skills.clone(),
        })
    }
}

/// A draft that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidJob {
    pub title: String,
    pub description: String,
    pub budget: String,
    pub duration_days: u32,
    pub skills: Vec<String>,
}

impl ValidJob {
    /// Unix deadline in seconds, `duration_days` after `now_secs`.
    #[must_use]
    pub fn deadline_secs(&self, now_secs: u64) -> u64 {
        now_secs.saturating_add(u64::from(self.duration_days) * SECONDS_PER_DAY)
    }

    #[must_use]
    pub fn duration_label(&self) -> String {
        if self.duration_days == 1 { "1 day".to_owned() } else { format!("{} days", self.duration_days) }
    }
}

/// `^\d+(\.\d{1,2})?$`
fn is_well_formed_budget(raw: &str) -> bool {
    let (whole, fraction) = match raw.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (raw, None),
    };
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !digits(whole) {
        return false;
    }
    match fraction {
        None => true,
        Some(fraction) => fraction.len() <= 2 && digits(fraction),
    }
}

/// Positive integer at the start of `raw`, so `"14"` and `"14 days"` both
/// read as fourteen.
fn leading_days(raw: &str) -> Option<u32> {
    let end = raw.find(|c: char| !c.is_ascii_digit()).unwrap_or(raw.len());
    match raw[..end].parse::<u32>() {
        Ok(days) if days > 0 => Some(days),
        _ => None,
    }
}
