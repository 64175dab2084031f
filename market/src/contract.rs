//! Contract-call wrapper around an external chain client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call one [`ContractService`] method per user action. The service
//! checks that a wallet is connected, encodes the call against the fixed ABI,
//! forwards exactly one request to the [`ChainClient`], and reports the result
//! through a [`Notifier`] (toasts in the browser).
//!
//! ERROR HANDLING
//! ==============
//! Failures are logged, surfaced as a destructive notice, and then returned
//! to the caller. There is no retry and no idempotency key: submitting twice
//! sends two transactions.
//!
//! LOCAL-ONLY MODE
//! ===============
//! A network whose contract address is zero has nothing to call. Writes
//! there send nothing, notify an info notice instead of a failure, and
//! return [`ContractError::NotDeployed`]. Callers check [`applies_locally`]
//! and keep their local change, so the marketplace stays usable before a
//! contract is deployed.

#[cfg(test)]
#[path = "contract_test.rs"]
mod contract_test;

use alloy_primitives::utils::parse_ether;
use alloy_primitives::{Address, B256, Bytes, U256};
use alloy_sol_types::SolCall;
use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::abi::{
    OnChainJob, acceptJobCall, approveWorkCall, createJobCall, getJobCall, raiseDisputeCall, submitWorkCall,
    voteOnDisputeCall,
};
use crate::config::NetworkConfig;

// =============================================================================
// ERRORS
// =============================================================================

/// Transport-level failure reported by the wallet / RPC provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    #[error("no wallet provider available")]
    NoProvider,
    #[error("request rejected by wallet: {0}")]
    Rejected(String),
    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("malformed provider response: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    #[error("wallet not connected")]
    WalletNotConnected,
    #[error("contract is not deployed on chain {0}")]
    NotDeployed(u64),
    #[error("invalid budget: {0}")]
    InvalidBudget(String),
    #[error(transparent)]
    Chain(#[from] ChainError),
    #[error("failed to decode contract response: {0}")]
    Decode(String),
}

// =============================================================================
// SEAMS
// =============================================================================

/// Transaction forwarded to the wallet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxRequest {
    pub chain_id: u64,
    pub from: Address,
    pub to: Address,
    pub value: U256,
    pub data: Bytes,
}

/// Read-only `eth_call`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallRequest {
    pub to: Address,
    pub data: Bytes,
}

/// External chain client: a browser wallet in production, a fake in tests.
#[async_trait(?Send)]
pub trait ChainClient {
    /// Connected account, if any.
    fn account(&self) -> Option<Address>;

    fn chain_id(&self) -> u64;

    /// Submit a transaction and return its hash.
    async fn send_transaction(&self, tx: TxRequest) -> Result<B256, ChainError>;

    /// Execute a read-only call and return the raw ABI response.
    async fn call(&self, request: CallRequest) -> Result<Bytes, ChainError>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeVariant {
    #[default]
    Default,
    Destructive,
}

/// User-facing notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
    /// Block explorer page for the transaction, when there is one.
    pub link: Option<String>,
}

impl Notice {
    #[must_use]
    pub fn info(title: &str, description: impl Into<String>) -> Self {
        Self { title: title.to_owned(), description: description.into(), variant: NoticeVariant::Default, link: None }
    }

    #[must_use]
    pub fn destructive(title: &str, description: impl Into<String>) -> Self {
        Self {
            title: title.to_owned(),
            description: description.into(),
            variant: NoticeVariant::Destructive,
            link: None,
        }
    }

    #[must_use]
    pub fn with_link(mut self, url: impl Into<String>) -> Self {
        self.link = Some(url.into());
        self
    }
}

pub trait Notifier {
    fn notify(&self, notice: Notice);
}

// =============================================================================
// ACTIONS
// =============================================================================

/// Contract entry points exposed to the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    CreateJob,
    AcceptJob,
    SubmitWork,
    ApproveWork,
    RaiseDispute,
    VoteOnDispute,
    GetJob,
}

/// Suffix of the info notice shown when a write stays local.
pub const LOCAL_ONLY_NOTE: &str = "Recorded locally: no contract is deployed on";

/// Whether the caller should apply its local change for `result`: the call
/// succeeded, or there was no contract to call.
pub fn applies_locally<T>(result: &Result<T, ContractError>) -> bool {
    matches!(result, Ok(_) | Err(ContractError::NotDeployed(_)))
}

impl Action {
    /// ABI function name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::CreateJob => "createJob",
            Self::AcceptJob => "acceptJob",
            Self::SubmitWork => "submitWork",
            Self::ApproveWork => "approveWork",
            Self::RaiseDispute => "raiseDispute",
            Self::VoteOnDispute => "voteOnDispute",
            Self::GetJob => "getJob",
        }
    }

    fn connect_hint(self) -> &'static str {
        match self {
            Self::CreateJob => "Please connect your wallet to create a job",
            Self::AcceptJob => "Please connect your wallet to accept this job",
            Self::SubmitWork => "Please connect your wallet to submit work",
            Self::ApproveWork => "Please connect your wallet to approve work",
            Self::RaiseDispute => "Please connect your wallet to raise a dispute",
            Self::VoteOnDispute => "Please connect your wallet to vote",
            Self::GetJob => "Please connect your wallet to load this job",
        }
    }

    fn success_title(self) -> &'static str {
        match self {
            Self::CreateJob => "Job Created Successfully!",
            Self::AcceptJob => "Job Accepted!",
            Self::SubmitWork => "Work Submitted!",
            Self::ApproveWork => "Work Approved!",
            Self::RaiseDispute => "Dispute Raised",
            Self::VoteOnDispute => "Vote Submitted",
            Self::GetJob => "Job Loaded",
        }
    }

    fn failure_title(self) -> &'static str {
        match self {
            Self::CreateJob => "Failed to Create Job",
            Self::AcceptJob => "Failed to Accept Job",
            Self::SubmitWork => "Failed to Submit Work",
            Self::ApproveWork => "Failed to Approve Work",
            Self::RaiseDispute => "Failed to Raise Dispute",
            Self::VoteOnDispute => "Failed to Submit Vote",
            Self::GetJob => "Failed to Load Job",
        }
    }
}

// =============================================================================
// SERVICE
// =============================================================================

/// Typed wrapper over the escrow contract.
pub struct ContractService<C, N> {
    client: C,
    notifier: N,
    networks: NetworkConfig,
}

impl<C: ChainClient, N: Notifier> ContractService<C, N> {
    pub fn new(client: C, notifier: N, networks: NetworkConfig) -> Self {
        Self { client, notifier, networks }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn is_connected(&self) -> bool {
        self.client.account().is_some()
    }

    /// Contract address for the wallet's current chain.
    pub fn contract_address(&self) -> Address {
        self.networks.contract_for(self.client.chain_id())
    }

    /// Post a job and lock `budget` (ether units) in escrow.
    ///
    /// # Errors
    ///
    /// See [`ContractError`]; every error has already been notified.
    pub async fn create_job(
        &self,
        title: &str,
        description: &str,
        budget: &str,
        deadline_secs: u64,
        skills: &[String],
    ) -> Result<B256, ContractError> {
        let action = Action::CreateJob;
        let from = self.require_account(action)?;
        let value = parse_ether(budget.trim())
            .map_err(|err| self.fail(action, ContractError::InvalidBudget(format!("{budget}: {err}"))))?;

        let call = createJobCall {
            _title: title.to_owned(),
            _description: description.to_owned(),
            _budget: value,
            _deadline: U256::from(deadline_secs),
            _skillsRequired: skills.to_vec(),
        };
        self.write(action, from, call.abi_encode(), value, |hash| {
            Notice::info(action.success_title(), format!("Transaction hash: {hash}"))
        })
        .await
    }

    /// # Errors
    ///
    /// See [`ContractError`]; every error has already been notified.
    pub async fn accept_job(&self, job_id: B256) -> Result<B256, ContractError> {
        let action = Action::AcceptJob;
        let from = self.require_account(action)?;
        let data = acceptJobCall { _jobId: job_id }.abi_encode();
        self.write(action, from, data, U256::ZERO, |_| {
            Notice::info(action.success_title(), "You can now start working on this job")
        })
        .await
    }

    /// # Errors
    ///
    /// See [`ContractError`]; every error has already been notified.
    pub async fn submit_work(&self, job_id: B256) -> Result<B256, ContractError> {
        let action = Action::SubmitWork;
        let from = self.require_account(action)?;
        let data = submitWorkCall { _jobId: job_id }.abi_encode();
        self.write(action, from, data, U256::ZERO, |_| {
            Notice::info(action.success_title(), "Waiting for client approval")
        })
            .await
    }

    /// Approve submitted work, releasing escrow to the freelancer.
    ///
    /// # Errors
    ///
    /// See [`ContractError`]; every error has already been notified.
    pub async fn approve_work(&self, job_id: B256) -> Result<B256, ContractError> {
        let action = Action::ApproveWork;
        let from = self.require_account(action)?;
        let data = approveWorkCall { _jobId: job_id }.abi_encode();
        self.write(action, from, data, U256::ZERO, |_| {
            Notice::info(action.success_title(), "Payment released to freelancer")
        })
            .await
    }

    /// # Errors
    ///
    /// See [`ContractError`]; every error has already been notified.
    pub async fn raise_dispute(&self, job_id: B256) -> Result<B256, ContractError> {
        let action = Action::RaiseDispute;
        let from = self.require_account(action)?;
        let data = raiseDisputeCall { _jobId: job_id }.abi_encode();
        self.write(action, from, data, U256::ZERO, |_| {
            Notice::info(action.success_title(), "Community voting has started")
        })
            .await
    }

    /// # Errors
    ///
    /// See [`ContractError`]; every error has already been notified.
    pub async fn vote_on_dispute(&self, job_id: B256, vote_for_freelancer: bool) -> Result<B256, ContractError> {
        let action = Action::VoteOnDispute;
        let from = self.require_account(action)?;
        let data = voteOnDisputeCall { _jobId: job_id, _voteForFreelancer: vote_for_freelancer }.abi_encode();
        let direction = if vote_for_freelancer { "for" } else { "against" };
        self.write(action, from, data, U256::ZERO, |_| {
            Notice::info(action.success_title(), format!("Voted {direction} freelancer"))
        })
        .await
    }

    /// Read a job from the contract. Needs no wallet account.
    ///
    /// # Errors
    ///
    /// See [`ContractError`]; every error has already been notified.
    pub async fn get_job(&self, job_id: B256) -> Result<OnChainJob, ContractError> {
        let action = Action::GetJob;
        let to = self.deployed_address(action)?;
        let data = Bytes::from(getJobCall { _jobId: job_id }.abi_encode());

        let raw = self.client.call(CallRequest { to, data }).await.map_err(|err| self.fail(action, err.into()))?;
        let decoded = getJobCall::abi_decode_returns(&raw, true)
            .map_err(|err| self.fail(action, ContractError::Decode(err.to_string())))?;
        Ok(decoded._0)
    }

    async fn write(
        &self,
        action: Action,
        from: Address,
        data: Vec<u8>,
        value: U256,
        on_success: impl FnOnce(B256) -> Notice,
    ) -> Result<B256, ContractError> {
        let chain_id = self.client.chain_id();
        let network = self.networks.network(chain_id);
        if !network.is_deployed() {
            warn!(action = action.name(), chain_id, "no contract deployed; keeping change local");
            let note = format!("{LOCAL_ONLY_NOTE} {}", network.name);
            self.notifier.notify(Notice::info(action.success_title(), note));
            return Err(ContractError::NotDeployed(chain_id));
        }
        let to = network.contract;
        let tx = TxRequest { chain_id, from, to, value, data: Bytes::from(data) };

        match self.client.send_transaction(tx).await {
            Ok(hash) => {
                info!(action = action.name(), %hash, "contract write submitted");
                let explorer = network.tx_url(&hash.to_string());
                self.notifier.notify(on_success(hash).with_link(explorer));
                Ok(hash)
            }
            Err(err) => Err(self.fail(action, err.into())),
        }
    }

    fn require_account(&self, action: Action) -> Result<Address, ContractError> {
        match self.client.account() {
            Some(account) => Ok(account),
            None => {
                self.notifier.notify(Notice::destructive("Connect Wallet", action.connect_hint()));
                Err(ContractError::WalletNotConnected)
            }
        }
    }

    fn deployed_address(&self, action: Action) -> Result<Address, ContractError> {
        let chain_id = self.client.chain_id();
        let address = self.networks.contract_for(chain_id);
        if address == Address::ZERO {
            return Err(self.fail(action, ContractError::NotDeployed(chain_id)));
        }
        Ok(address)
    }

    fn fail(&self, action: Action, err: ContractError) -> ContractError {
        error!(action = action.name(), error = %err, "contract call failed");
        self.notifier.notify(Notice::destructive(action.failure_title(), err.to_string()));
        err
    }
}
