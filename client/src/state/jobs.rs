//! Job board and dashboard state.
//!
//! DESIGN
//! ======
//! One in-memory [`JobStore`] backs both the Jobs page and the Dashboard.
//! The Jobs page view is derived on every read: `query.apply` over the whole
//! store, then the paginator prefix. Query changes collapse pagination back to
//! the first page.
//!
//! The store starts empty and is seeded after mount, so server-rendered HTML
//! and the hydrated page agree before the random data appears.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use std::collections::BTreeSet;

use market::draft::ValidJob;
use market::job::{Job, JobStatus};
use market::listing::{JOBS_PAGE_SIZE, ListingQuery, Paginator, SortKey};
use market::mock::JobStore;
use market::stats::{DashboardStats, DashboardTab};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Clone, Debug)]
pub struct JobsState {
    pub store: JobStore,
    pub query: ListingQuery<JobStatus>,
    pub paginator: Paginator,
    pub dashboard_tab: DashboardTab,
    /// Job ids with a contract call in flight.
    pub pending: BTreeSet<u64>,
    pub seeded: bool,
}

impl Default for JobsState {
    fn default() -> Self {
        Self {
            store: JobStore::default(),
            query: ListingQuery::default(),
            paginator: Paginator::new(JOBS_PAGE_SIZE),
            dashboard_tab: DashboardTab::Active,
            pending: BTreeSet::new(),
            seeded: false,
        }
    }
}

impl JobsState {
    /// Fill the store with generated jobs. Later calls are no-ops.
    pub fn seed(&mut self, seed: u64, now_ms: i64) {
        if self.seeded {
            return;
        }
        self.store = JobStore::seeded(&mut StdRng::seed_from_u64(seed), now_ms);
        self.seeded = true;
    }

    /// Search, status, and sort applied to the whole store.
    pub fn filtered(&self) -> Vec<Job> {
        self.query.apply(self.store.jobs())
    }

    /// The revealed page prefix of [`Self::filtered`].
    pub fn visible(&self) -> Vec<Job> {
        let filtered = self.filtered();
        self.paginator.window(&filtered).to_vec()
    }

    pub fn has_more(&self) -> bool {
        self.paginator.has_more(self.filtered().len())
    }

    pub fn load_more(&mut self) {
        let total = self.filtered().len();
        self.paginator.load_more(total);
    }

    pub fn set_search(&mut self, search: String) {
        self.query.search = search;
        self.paginator.reset();
    }

    pub fn set_category(&mut self, category: Option<JobStatus>) {
        self.query.category = category;
        self.paginator.reset();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.query.sort = sort;
        self.paginator.reset();
    }

    pub fn dashboard_jobs(&self) -> Vec<Job> {
        self.dashboard_tab.select(self.store.jobs())
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::from_jobs(self.store.jobs())
    }

    /// Add a job the connected wallet just posted.
    pub fn post(&mut self, job: ValidJob, client: &str, now_ms: i64) -> u64 {
        let id = self.store.add(job, client, now_ms);
        self.paginator.reset();
        id
    }

    /// Mark `id` as busy. Returns `false` when a call is already in flight.
    pub fn begin(&mut self, id: u64) -> bool {
        self.pending.insert(id)
    }

    /// Clear the busy flag and, on success, move the job to `next`.
    pub fn finish(&mut self, id: u64, next: Option<JobStatus>) {
        self.pending.remove(&id);
        if let Some(status) = next {
            self.store.set_status(id, status);
        }
    }

    pub fn is_pending(&self, id: u64) -> bool {
        self.pending.contains(&id)
    }
}
