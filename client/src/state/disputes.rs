//! Disputes page state: the dispute list, its status tab, pagination, and
//! local votes.
//!
//! The three seed disputes are present from first render. Generated disputes
//! are appended after mount with ids continuing from the seeds, so "Load
//! More" has something to reveal. The list keeps insertion order; the status
//! tab only filters.

#[cfg(test)]
#[path = "disputes_test.rs"]
mod disputes_test;

use market::dispute::{Dispute, DisputeStatus, VoteError, VoteOutcome, VoteSide};
use market::listing::{DISPUTES_PAGE_SIZE, ListingQuery, Paginator};
use market::mock::{GENERATED_DISPUTES, generate_disputes, seed_disputes};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Clone, Debug)]
pub struct DisputesState {
    pub disputes: Vec<Dispute>,
    pub query: ListingQuery<DisputeStatus>,
    pub paginator: Paginator,
    /// Dispute with a contract vote in flight.
    pub pending: Option<u64>,
    pub seeded: bool,
}

impl Default for DisputesState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl DisputesState {
    pub fn new(disputes: Vec<Dispute>) -> Self {
        Self {
            disputes,
            query: ListingQuery::default(),
            paginator: Paginator::new(DISPUTES_PAGE_SIZE),
            pending: None,
            seeded: false,
        }
    }

    /// The three fixed disputes shown on first load.
    pub fn seeded(now_ms: i64) -> Self {
        Self::new(seed_disputes(now_ms))
    }

    /// Append generated disputes after the current ones. Later calls are
    /// no-ops.
    pub fn seed(&mut self, seed: u64, now_ms: i64) {
        if self.seeded {
            return;
        }
        let first_id = self.disputes.iter().map(|dispute| dispute.id).max().unwrap_or(0) + 1;
        let mut rng = StdRng::seed_from_u64(seed);
        self.disputes.extend(generate_disputes(&mut rng, first_id, GENERATED_DISPUTES, now_ms));
        self.seeded = true;
    }

    /// Disputes on the selected status tab, in list order.
    pub fn filtered(&self) -> Vec<Dispute> {
        self.disputes.iter().filter(|dispute| self.query.matches(*dispute)).cloned().collect()
    }

    /// The revealed page prefix of [`Self::filtered`].
    pub fn visible(&self) -> Vec<Dispute> {
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

    pub fn set_category(&mut self, category: Option<DisputeStatus>) {
        self.query.category = category;
        self.paginator.reset();
    }

    pub fn get(&self, id: u64) -> Option<&Dispute> {
        self.disputes.iter().find(|dispute| dispute.id == id)
    }

    /// # Errors
    ///
    /// [`VoteError::NotFound`] for an unknown id, otherwise whatever
    /// [`Dispute::cast_vote`] rejects.
    pub fn cast_vote(&mut self, id: u64, side: VoteSide) -> Result<VoteOutcome, VoteError> {
        self.dispute_mut(id)?.cast_vote(side)
    }

    /// # Errors
    ///
    /// [`VoteError::NotFound`] for an unknown id, otherwise whatever
    /// [`Dispute::undo_vote`] rejects.
    pub fn undo_vote(&mut self, id: u64) -> Result<VoteSide, VoteError> {
        self.dispute_mut(id)?.undo_vote()
    }

    pub fn active_count(&self) -> usize {
        self.disputes.iter().filter(|dispute| !dispute.is_resolved()).count()
    }

    pub fn resolved_count(&self) -> usize {
        self.disputes.len() - self.active_count()
    }

    /// Mark a vote in flight. Returns `false` while another vote is pending.
    pub fn begin_vote(&mut self, id: u64) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(id);
        true
    }

    /// Clear the in-flight vote and, when `counted`, tally it locally.
    ///
    /// # Errors
    ///
    /// Same as [`Self::cast_vote`].
    pub fn finish_vote(&mut self, id: u64, side: VoteSide, counted: bool) -> Result<Option<VoteOutcome>, VoteError> {
        self.pending = None;
        if !counted {
            return Ok(None);
        }
        self.cast_vote(id, side).map(Some)
    }

    fn dispute_mut(&mut self, id: u64) -> Result<&mut Dispute, VoteError> {
        self.disputes.iter_mut().find(|dispute| dispute.id == id).ok_or(VoteError::NotFound(id))
    }
}
