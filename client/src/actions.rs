//! Page actions that go through the contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! Buttons on the Jobs, Dashboard, and Disputes pages call into here. Each
//! action marks its record pending, sends one contract call on a local task,
//! and applies the local state change when the call succeeds or when the
//! wallet's network has no contract deployed (local-only mode). Failures are
//! already surfaced as toasts by `ContractService`, so the result is only
//! used to clear the pending flag.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use leptos::prelude::*;
use market::abi::job_key;
use market::contract::{ContractError, applies_locally};
use market::config::NetworkConfig;
use market::dispute::VoteSide;
use market::job::JobStatus;

use crate::net::wallet::{MarketContract, contract_service};
use crate::state::disputes::DisputesState;
use crate::state::jobs::JobsState;
use crate::state::toasts::ToastState;
use crate::state::wallet::WalletState;

/// Job actions available from job cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobAction {
    Accept,
    SubmitWork,
    Approve,
    RaiseDispute,
}

impl JobAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Accept => "Apply Now",
            Self::SubmitWork => "Submit Work",
            Self::Approve => "Release Payment",
            Self::RaiseDispute => "Raise Dispute",
        }
    }

    pub fn pending_label(self) -> &'static str {
        match self {
            Self::Accept => "Applying...",
            Self::SubmitWork => "Submitting...",
            Self::Approve => "Releasing...",
            Self::RaiseDispute => "Raising...",
        }
    }

    /// Local status after the call succeeds. Submitting work keeps the job
    /// in progress until the client approves.
    pub fn next_status(self) -> Option<JobStatus> {
        match self {
            Self::Accept => Some(JobStatus::InProgress),
            Self::SubmitWork => None,
            Self::Approve => Some(JobStatus::Completed),
            Self::RaiseDispute => Some(JobStatus::Disputed),
        }
    }

    /// Local status to apply once the contract call returns `result`.
    pub fn status_after<T>(self, result: &Result<T, ContractError>) -> Option<JobStatus> {
        if applies_locally(result) { self.next_status() } else { None }
    }
}

/// Signals every contract action needs, captured at component creation.
#[derive(Clone, Copy)]
pub struct ContractContext {
    pub wallet: RwSignal<WalletState>,
    pub toasts: RwSignal<ToastState>,
    pub networks: RwSignal<NetworkConfig>,
}

impl ContractContext {
    pub fn from_context() -> Self {
        Self {
            wallet: expect_context::<RwSignal<WalletState>>(),
            toasts: expect_context::<RwSignal<ToastState>>(),
            networks: expect_context::<RwSignal<NetworkConfig>>(),
        }
    }

    pub fn service(&self) -> MarketContract {
        contract_service(&self.wallet.get_untracked(), self.toasts, self.networks.get_untracked())
    }
}

/// Run `action` for job `job_id`. Ignored while a call for that job is in flight.
pub fn run_job_action(ctx: ContractContext, jobs: RwSignal<JobsState>, job_id: u64, action: JobAction) {
    let started = jobs.try_update(|state| state.begin(job_id)).unwrap_or(false);
    if !started {
        return;
    }
    let service = ctx.service();
    leptos::task::spawn_local(async move {
        let key = job_key(job_id);
        let result = match action {
            JobAction::Accept => service.accept_job(key).await,
            JobAction::SubmitWork => service.submit_work(key).await,
            JobAction::Approve => service.approve_work(key).await,
            JobAction::RaiseDispute => service.raise_dispute(key).await,
        };
        let next = action.status_after(&result);
        jobs.update(|state| state.finish(job_id, next));
    });
}

/// Send a dispute vote and count it locally once the wallet accepts it, or
/// straight away when no contract is deployed.
pub fn run_vote(ctx: ContractContext, disputes: RwSignal<DisputesState>, dispute_id: u64, side: VoteSide) {
    let started = disputes.try_update(|state| state.begin_vote(dispute_id)).unwrap_or(false);
    if !started {
        return;
    }
    let service = ctx.service();
    leptos::task::spawn_local(async move {
        let result = service.vote_on_dispute(job_key(dispute_id), side.for_freelancer()).await;
        let counted = disputes.try_update(|state| state.finish_vote(dispute_id, side, applies_locally(&result)));
        if let Some(Err(err)) = counted {
            leptos::logging::warn!("vote not counted locally: {err}");
        }
    });
}
