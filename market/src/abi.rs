//! Solidity interface of the escrow contract.
//!
//! The contract itself lives on-chain; this module only declares its ABI so
//! calls can be encoded and `getJob` responses decoded with static types.

#[cfg(test)]
#[path = "abi_test.rs"]
mod abi_test;

use alloy_primitives::{Address, B256, U256};
use alloy_sol_types::sol;

use crate::job::JobStatus;

sol! {
    /// Job tuple returned by `getJob`.
    #[derive(Debug, PartialEq, Eq)]
    struct OnChainJob {
        bytes32 id;
        address client;
        address freelancer;
        string title;
        string description;
        uint256 budget;
        uint256 escrowAmount;
        uint256 deadline;
        uint8 status;
        uint256 createdAt;
    }

    function createJob(
        string _title,
        string _description,
        uint256 _budget,
        uint256 _deadline,
        string[] _skillsRequired
    ) external payable returns (bytes32 jobId);

    function acceptJob(bytes32 _jobId) external;

    function submitWork(bytes32 _jobId) external;

    function approveWork(bytes32 _jobId) external;

    function raiseDispute(bytes32 _jobId) external;

    function voteOnDispute(bytes32 _jobId, bool _voteForFreelancer) external;

    function getJob(bytes32 _jobId) external view returns (OnChainJob memory);
}

/// Job status as stored by the contract (`uint8`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ChainJobStatus {
    Open = 0,
    Assigned = 1,
    InProgress = 2,
    Submitted = 3,
    Completed = 4,
    Disputed = 5,
    Cancelled = 6,
}

impl TryFrom<u8> for ChainJobStatus {
    type Error = u8;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Open),
            1 => Ok(Self::Assigned),
            2 => Ok(Self::InProgress),
            3 => Ok(Self::Submitted),
            4 => Ok(Self::Completed),
            5 => Ok(Self::Disputed),
            6 => Ok(Self::Cancelled),
            other => Err(other),
        }
    }
}

impl From<ChainJobStatus> for JobStatus {
    fn from(status: ChainJobStatus) -> Self {
        match status {
            ChainJobStatus::Open => Self::Open,
            ChainJobStatus::Assigned | ChainJobStatus::InProgress | ChainJobStatus::Submitted => Self::InProgress,
            ChainJobStatus::Completed => Self::Completed,
            ChainJobStatus::Disputed => Self::Disputed,
            ChainJobStatus::Cancelled => Self::Cancelled,
        }
    }
}

impl OnChainJob {
    /// Decoded contract status.
    ///
    /// # Errors
    ///
    /// Returns the raw byte when it is outside the contract's enum.
    pub fn chain_status(&self) -> Result<ChainJobStatus, u8> {
        ChainJobStatus::try_from(self.status)
    }

    /// Freelancer address, `None` while unassigned.
    #[must_use]
    pub fn assigned_freelancer(&self) -> Option<Address> {
        (self.freelancer != Address::ZERO).then_some(self.freelancer)
    }
}

/// Contract key for a locally numbered job: the id as a big-endian word.
#[must_use]
pub fn job_key(id: u64) -> B256 {
    B256::from(U256::from(id).to_be_bytes::<32>())
}
