//! Dashboard tabs and summary figures derived from the viewer's jobs.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use serde::{Deserialize, Serialize};

use crate::job::{Job, JobRole, JobStatus};

/// Tabs on the dashboard job list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardTab {
    /// Jobs still being worked on, from either side.
    #[default]
    Active,
    Posted,
    Working,
    Completed,
}

impl DashboardTab {
    pub const ALL: [Self; 4] = [Self::Active, Self::Posted, Self::Working, Self::Completed];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active Jobs",
            Self::Posted => "Jobs Posted",
            Self::Working => "Working On",
            Self::Completed => "Completed",
        }
    }

    #[must_use]
    pub fn empty_message(self) -> &'static str {
        match self {
            Self::Active => "No active jobs",
            Self::Posted => "No jobs posted yet",
            Self::Working => "No active work",
            Self::Completed => "No completed jobs yet",
        }
    }

    #[must_use]
    pub fn includes(self, job: &Job) -> bool {
        let in_flight = matches!(job.status, JobStatus::InProgress | JobStatus::Disputed);
        match self {
            Self::Active => in_flight,
            Self::Posted => job.role == JobRole::Posted,
            Self::Working => job.role == JobRole::Working && in_flight,
            Self::Completed => job.status == JobStatus::Completed,
        }
    }

    /// Jobs shown under this tab, in their original order.
    #[must_use]
    pub fn select(self, jobs: &[Job]) -> Vec<Job> {
        jobs.iter().filter(|job| self.includes(job)).cloned().collect()
    }
}

/// Headline numbers for the dashboard stats grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct DashboardStats {
    /// Sum of budgets of completed jobs the viewer worked on.
    pub total_earned: f64,
    /// Completed jobs on either side.
    pub jobs_completed: usize,
    /// Completed share of finished jobs (completed, disputed, cancelled), in
    /// percent. `None` until at least one job has finished.
    pub success_rate: Option<f64>,
    /// Funds the viewer has locked in escrow as a client.
    pub in_escrow: f64,
}

impl DashboardStats {
    #[must_use]
    pub fn from_jobs(jobs: &[Job]) -> Self {
        let mut stats = Self::default();
        let mut finished = 0_usize;

        for job in jobs {
            match job.status {
                JobStatus::Completed => {
                    stats.jobs_completed += 1;
                    finished += 1;
                    if job.role == JobRole::Working {
                        stats.total_earned += job.budget_amount();
                    }
                }
                JobStatus::Disputed | JobStatus::Cancelled => finished += 1,
                JobStatus::Open | JobStatus::InProgress => {}
            }
            if job.role == JobRole::Posted {
                stats.in_escrow += job.escrow_amount();
            }
        }

        if finished > 0 {
            #[allow(clippy::cast_precision_loss)]
            let rate = stats.jobs_completed as f64 / finished as f64 * 100.0;
            stats.success_rate = Some(rate);
        }
        stats
    }
}
