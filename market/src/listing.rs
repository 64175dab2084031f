//! Client-side filter, sort, and paginate pipeline for list views.
//!
//! DESIGN
//! ======
//! Views hold the full in-memory list plus a [`ListingQuery`] and a
//! [`Paginator`]. The derived view is recomputed from scratch on every
//! change: search match, then category filter, then a stable sort. The
//! paginator only decides how long a prefix of that result is shown.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::dispute::{Dispute, DisputeStatus};
use crate::job::{Job, JobStatus, parse_budget};

/// Page size for the jobs board.
pub const JOBS_PAGE_SIZE: usize = 10;
/// Page size for the disputes list.
pub const DISPUTES_PAGE_SIZE: usize = 3;

/// A record that can flow through the listing pipeline.
pub trait Listable {
    /// Value matched exactly by the active-tab category filter.
    type Category: Copy + PartialEq;

    fn title(&self) -> &str;
    fn description(&self) -> &str;
    fn tags(&self) -> &[String];
    fn category(&self) -> Self::Category;
    fn budget(&self) -> f64;
    fn created_at_ms(&self) -> i64;
}

impl Listable for Job {
    type Category = JobStatus;

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn tags(&self) -> &[String] {
        &self.skills
    }

    fn category(&self) -> JobStatus {
        self.status
    }

    fn budget(&self) -> f64 {
        self.budget_amount()
    }

    fn created_at_ms(&self) -> i64 {
        self.created_at_ms
    }
}

impl Listable for Dispute {
    type Category = DisputeStatus;

    fn title(&self) -> &str {
        &self.job_title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn tags(&self) -> &[String] {
        &[]
    }

    fn category(&self) -> DisputeStatus {
        self.status
    }

    fn budget(&self) -> f64 {
        parse_budget(&self.amount)
    }

    fn created_at_ms(&self) -> i64 {
        self.created_at_ms
    }
}

/// Sort order offered by list views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Newest first.
    #[default]
    Latest,
    BudgetHigh,
    BudgetLow,
}

impl SortKey {
    pub const ALL: [Self; 3] = [Self::Latest, Self::BudgetHigh, Self::BudgetLow];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Latest => "Latest",
            Self::BudgetHigh => "Highest Budget",
            Self::BudgetLow => "Lowest Budget",
        }
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::BudgetHigh => "budget-high",
            Self::BudgetLow => "budget-low",
        }
    }

    #[must_use]
    pub fn from_slug(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.slug() == raw)
    }

    fn compare<T: Listable>(self, a: &T, b: &T) -> Ordering {
        match self {
            Self::Latest => b.created_at_ms().cmp(&a.created_at_ms()),
            Self::BudgetHigh => b.budget().total_cmp(&a.budget()),
            Self::BudgetLow => a.budget().total_cmp(&b.budget()),
        }
    }
}

/// Search text, category tab, and sort key for one list view.
#[derive(Clone, Debug, PartialEq)]
pub struct ListingQuery<C> {
    pub search: String,
    /// `None` means the "all" tab.
    pub category: Option<C>,
    pub sort: SortKey,
}

impl<C> Default for ListingQuery<C> {
    fn default() -> Self {
        Self { search: String::new(), category: None, sort: SortKey::default() }
    }
}

impl<C: Copy + PartialEq> ListingQuery<C> {
    /// Whether `item` passes both the search and the category filter.
    pub fn matches<T: Listable<Category = C>>(&self, item: &T) -> bool {
        if let Some(category) = self.category {
            if item.category() != category {
                return false;
            }
        }
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        item.title().to_lowercase().contains(&needle)
            || item.description().to_lowercase().contains(&needle)
            || item.tags().iter().any(|tag| tag.to_lowercase().contains(&needle))
    }

    /// Produce the filtered and sorted view of `items`.
    pub fn apply<T>(&self, items: &[T]) -> Vec<T>
    where
        T: Listable<Category = C> + Clone,
    {
        let mut out: Vec<T> = items.iter().filter(|item| self.matches(*item)).cloned().collect();
        let sort = self.sort;
        out.sort_by(|a, b| sort.compare(a, b));
        out
    }
}

/// Growing-prefix pagination ("Load More").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    visible: usize,
}

impl Paginator {
    /// A zero page size is treated as one.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self { page_size, visible: page_size }
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn visible(&self) -> usize {
        self.visible
    }

    /// The currently revealed prefix of `items`.
    #[must_use]
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible.min(items.len())]
    }

    #[must_use]
    pub fn has_more(&self, total: usize) -> bool {
        self.visible < total
    }

    /// Reveal one more page, never past `total`.
    pub fn load_more(&mut self, total: usize) {
        if self.has_more(total) {
            self.visible = self.visible.saturating_add(self.page_size).min(total);
        }
    }

    /// Collapse back to the first page, e.g. after the query changes.
    pub fn reset(&mut self) {
        self.visible = self.page_size;
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(JOBS_PAGE_SIZE)
    }
}
