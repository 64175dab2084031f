//! Job records as the marketplace views see them.
//!
//! DESIGN
//! ======
//! Budgets stay as the numeric strings users typed; [`parse_budget`] is the
//! single place that turns them into numbers for sorting and totals. Status
//! is descriptive only: nothing here enforces transitions between states.

#[cfg(test)]
#[path = "job_test.rs"]
mod job_test;

use serde::{Deserialize, Serialize};

/// Currency label attached to every job budget.
pub const DEFAULT_CURRENCY: &str = "USDC";

/// Lifecycle status shown on job cards and used as the listing category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobStatus {
    #[default]
    Open,
    InProgress,
    Completed,
    Disputed,
    Cancelled,
}

impl JobStatus {
    pub const ALL: [Self; 5] = [Self::Open, Self::InProgress, Self::Completed, Self::Disputed, Self::Cancelled];

    /// Human-readable badge label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Disputed => "Disputed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Stable identifier used in select values and CSS modifiers.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Disputed => "disputed",
            Self::Cancelled => "cancelled",
        }
    }

    #[must_use]
    pub fn from_slug(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.slug() == raw)
    }

    /// Whether funds for a job in this status are still held by the contract.
    #[must_use]
    pub fn holds_escrow(self) -> bool {
        matches!(self, Self::Open | Self::InProgress | Self::Disputed)
    }
}

/// The viewer's side of a job.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobRole {
    /// The viewer posted the job and acts as client.
    #[default]
    Posted,
    /// The viewer is the freelancer doing the work.
    Working,
}

impl JobRole {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Posted => "Client",
            Self::Working => "Freelancer",
        }
    }
}

/// A job listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Budget as entered, e.g. `"5000"` or `"250.50"`.
    pub budget: String,
    pub currency: String,
    /// Expected duration label, e.g. `"2 weeks"`.
    pub duration: String,
    /// Remaining-time label, e.g. `"5 days left"`.
    pub deadline: String,
    pub status: JobStatus,
    pub skills: Vec<String>,
    pub client: String,
    pub freelancer: Option<String>,
    pub role: JobRole,
    /// Completion percentage, 0..=100.
    pub progress: u8,
    /// Relative creation label, e.g. `"3 hours ago"`.
    pub posted: String,
    /// Milliseconds since the Unix epoch.
    pub created_at_ms: i64,
}

impl Job {
    #[must_use]
    pub fn budget_amount(&self) -> f64 {
        parse_budget(&self.budget)
    }

    /// Amount still locked in escrow for this job.
    #[must_use]
    pub fn escrow_amount(&self) -> f64 {
        if self.status.holds_escrow() { self.budget_amount() } else { 0.0 }
    }

    /// Address of the other party from the viewer's perspective.
    #[must_use]
    pub fn counterparty(&self) -> Option<&str> {
        match self.role {
            JobRole::Posted => self.freelancer.as_deref(),
            JobRole::Working => Some(self.client.as_str()),
        }
    }
}

/// Parse a budget string into a number. Malformed or non-finite input is zero.
#[must_use]
pub fn parse_budget(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Shorten an address to `0x12345678...abcdef` form.
#[must_use]
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 16 {
        return address.to_owned();
    }
    let head: String = chars[..10].iter().collect();
    let tail: String = chars[chars.len() - 6..].iter().collect();
    format!("{head}...{tail}")
}

/// Relative "posted" label for a job created `days_ago` days (or, on the
/// same day, `hours_ago` hours) before now.
#[must_use]
pub fn posted_label(days_ago: u32, hours_ago: u32) -> String {
    match (days_ago, hours_ago) {
        (0, 0) => "Just now".to_owned(),
        (0, 1) => "1 hour ago".to_owned(),
        (0, hours) => format!("{hours} hours ago"),
        (1, _) => "1 day ago".to_owned(),
        (days, _) => format!("{days} days ago"),
    }
}

/// Trim skills, drop empties, and keep the first occurrence of each.
pub fn dedup_skills<I, S>(skills: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for skill in skills {
        let skill = skill.as_ref().trim();
        if skill.is_empty() || out.iter().any(|existing| existing == skill) {
            continue;
        }
        out.push(skill.to_owned());
    }
    out
}
