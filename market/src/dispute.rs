//! Community dispute records and the local vote tally.
//!
//! DESIGN
//! ======
//! A dispute is settled by a fixed number of community votes. Every mutation
//! goes through [`Dispute::settle`], which re-derives status and resolution
//! from the raw counters, so a record can never sit in `Active` with a total
//! at or above the threshold, and a resolution always reflects the counts.
//!
//! "Yes" votes favor the freelancer, "no" votes favor the client. A tie at
//! or past the threshold resolves to [`Resolution::Tie`]: neither side wins
//! locally and the escrow decision stays with the contract.
//!
//! The tally is single-owner state. Updates are applied synchronously by the
//! caller's event handler, last writer wins.

#[cfg(test)]
#[path = "dispute_test.rs"]
mod dispute_test;

use serde::{Deserialize, Serialize};

use crate::job::DEFAULT_CURRENCY;

/// Total votes required before a dispute resolves.
pub const RESOLUTION_THRESHOLD: u32 = 5;

/// Direction of a single vote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoteSide {
    #[serde(rename = "yes")]
    FavorFreelancer,
    #[serde(rename = "no")]
    FavorClient,
}

impl VoteSide {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FavorFreelancer => "Favor Freelancer",
            Self::FavorClient => "Favor Client",
        }
    }

    /// Boolean argument for the contract's `voteOnDispute`.
    #[must_use]
    pub fn for_freelancer(self) -> bool {
        matches!(self, Self::FavorFreelancer)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisputeStatus {
    #[default]
    Active,
    Resolved,
}

/// Outcome of a resolved dispute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Resolution {
    FavorFreelancer,
    FavorClient,
    /// Equal counts when the threshold was reached.
    Tie,
}

impl Resolution {
    /// Majority rule over the two counters.
    #[must_use]
    pub fn from_counts(votes_yes: u32, votes_no: u32) -> Self {
        match votes_yes.cmp(&votes_no) {
            std::cmp::Ordering::Greater => Self::FavorFreelancer,
            std::cmp::Ordering::Less => Self::FavorClient,
            std::cmp::Ordering::Equal => Self::Tie,
        }
    }

    #[must_use]
    pub fn headline(self) -> &'static str {
        match self {
            Self::FavorFreelancer => "Resolved in favor of freelancer",
            Self::FavorClient => "Resolved in favor of client",
            Self::Tie => "Resolved with a tied vote",
        }
    }

    #[must_use]
    pub fn payout_summary(self) -> &'static str {
        match self {
            Self::FavorFreelancer => "Payment has been released to freelancer",
            Self::FavorClient => "Payment has been returned to client",
            Self::Tie => "Escrow stays with the contract until it is arbitrated on-chain",
        }
    }
}

/// Result of a successful [`Dispute::cast_vote`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteOutcome {
    /// Vote recorded; the dispute is still open.
    Counted { total: u32 },
    /// Vote recorded and it pushed the dispute over the threshold.
    Resolved(Resolution),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VoteError {
    #[error("already voted on dispute {dispute_id}: {}", .side.label())]
    AlreadyVoted { dispute_id: u64, side: VoteSide },
    #[error("dispute {0} is already resolved")]
    Resolved(u64),
    #[error("no vote to undo on dispute {0}")]
    NoVote(u64),
    #[error("dispute {0} not found")]
    NotFound(u64),
}

/// A dispute raised against a job.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dispute {
    pub id: u64,
    pub job_title: String,
    pub description: String,
    /// Disputed amount as a numeric string.
    pub amount: String,
    pub currency: String,
    pub votes_yes: u32,
    pub votes_no: u32,
    pub threshold: u32,
    /// Remaining-time label, `"Resolved"` once settled.
    pub time_left: String,
    pub status: DisputeStatus,
    /// The local caller's vote, if any.
    pub your_vote: Option<VoteSide>,
    pub resolution: Option<Resolution>,
    /// Milliseconds since the Unix epoch when the dispute was raised.
    pub created_at_ms: i64,
}

impl Dispute {
    /// Build a dispute with the standard threshold and settle it against the
    /// supplied counters.
    #[must_use]
    pub fn new(id: u64, job_title: &str, description: &str, amount: &str, votes_yes: u32, votes_no: u32) -> Self {
        let mut dispute = Self {
            id,
            job_title: job_title.to_owned(),
            description: description.to_owned(),
            amount: amount.to_owned(),
            currency: DEFAULT_CURRENCY.to_owned(),
            votes_yes,
            votes_no,
            threshold: RESOLUTION_THRESHOLD,
            time_left: String::new(),
            status: DisputeStatus::Active,
            your_vote: None,
            resolution: None,
            created_at_ms: 0,
        };
        dispute.settle();
        dispute
    }

    #[must_use]
    pub fn total_votes(&self) -> u32 {
        self.votes_yes.saturating_add(self.votes_no)
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.status == DisputeStatus::Resolved
    }

    #[must_use]
    pub fn votes_for(&self, side: VoteSide) -> u32 {
        match side {
            VoteSide::FavorFreelancer => self.votes_yes,
            VoteSide::FavorClient => self.votes_no,
        }
    }

    /// Percentage of cast votes on `side`, for progress bars.
    #[must_use]
    pub fn share(&self, side: VoteSide) -> f64 {
        f64::from(self.votes_for(side)) / f64::from(self.total_votes().max(1)) * 100.0
    }

    /// Record the caller's vote and resolve the dispute if it reaches the
    /// threshold.
    ///
    /// # Errors
    ///
    /// [`VoteError::Resolved`] once the dispute is settled and
    /// [`VoteError::AlreadyVoted`] when the caller has a vote on record.
    pub fn cast_vote(&mut self, side: VoteSide) -> Result<VoteOutcome, VoteError> {
        if self.is_resolved() {
            return Err(VoteError::Resolved(self.id));
        }
        if let Some(previous) = self.your_vote {
            return Err(VoteError::AlreadyVoted { dispute_id: self.id, side: previous });
        }

        let counter = self.counter_mut(side);
        *counter = counter.saturating_add(1);
        self.your_vote = Some(side);
        self.settle();

        Ok(match self.resolution {
            Some(resolution) => VoteOutcome::Resolved(resolution),
            None => VoteOutcome::Counted { total: self.total_votes() },
        })
    }

    /// Withdraw the caller's vote while the dispute is still open.
    ///
    /// # Errors
    ///
    /// [`VoteError::NoVote`] when there is nothing to withdraw and
    /// [`VoteError::Resolved`] once the threshold has been crossed.
    pub fn undo_vote(&mut self) -> Result<VoteSide, VoteError> {
        let Some(side) = self.your_vote else {
            return Err(VoteError::NoVote(self.id));
        };
        if self.is_resolved() {
            return Err(VoteError::Resolved(self.id));
        }

        let counter = self.counter_mut(side);
        *counter = counter.saturating_sub(1);
        self.your_vote = None;
        self.settle();
        Ok(side)
    }

    /// Re-derive status, resolution and time label from the counters.
    pub fn settle(&mut self) {
        if self.total_votes() >= self.threshold {
            self.status = DisputeStatus::Resolved;
            self.resolution = Some(Resolution::from_counts(self.votes_yes, self.votes_no));
            "Resolved".clone_into(&mut self.time_left);
        } else {
            self.status = DisputeStatus::Active;
            self.resolution = None;
            if self.time_left.is_empty() || self.time_left == "Resolved" {
                "Open".clone_into(&mut self.time_left);
            }
        }
    }

    fn counter_mut(&mut self, side: VoteSide) -> &mut u32 {
        match side {
            VoteSide::FavorFreelancer => &mut self.votes_yes,
            VoteSide::FavorClient => &mut self.votes_no,
        }
    }
}
