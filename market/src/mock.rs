//! Mock marketplace data.
//!
//! There is no indexer or backend yet, so pages start from randomly generated
//! jobs plus three fixed disputes. Generators take the RNG and the current
//! time explicitly so tests can pin both.

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

use alloy_primitives::Address;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

use crate::dispute::{Dispute, VoteSide};
use crate::draft::ValidJob;
use crate::job::{DEFAULT_CURRENCY, Job, JobRole, JobStatus, posted_label};

const MS_PER_HOUR: i64 = 60 * 60 * 1000;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

pub const TITLES: &[&str] = &[
    "Smart Contract Audit for DeFi Protocol",
    "Frontend Development for NFT Marketplace",
    "Tokenomics Design & Whitepaper",
    "Cross-chain Bridge Implementation",
    "Backend API for a Gaming Platform",
    "UI/UX Design for Mobile Wallet",
    "Technical Writer for Web3 Documentation",
    "Community Manager for a DAO",
    "Rust Developer for Solana Project",
    "Node.js Developer for Indexing Service",
    "React Native Developer for dApp",
    "Solidity Developer for Yield Farming Protocol",
    "Graphic Designer for Pitch Deck",
    "DevOps Engineer for Blockchain Infrastructure",
    "NFT Marketplace Backend",
    "DeFi Protocol Audit",
    "Web3 Wallet Integration",
    "Blockchain Game Development",
    "DAO Governance Tool",
    "Yield Farming Optimizer",
    "Oracle Integration Service",
    "Security Vulnerability Scan",
    "Whitepaper Writing",
    "Community Management Bot",
    "Staking Platform UI",
    "Liquidity Pool Manager",
    "Flash Loan Arbitrage Bot",
    "Governance Proposal System",
    "NFT Minting Contract",
    "Decentralized Identity System",
    "Prediction Market DApp",
    "Supply Chain Tracker",
    "Voting Escrow Token",
    "Perpetual Futures Exchange",
    "Decentralized Lending Platform",
    "Asset Tokenization Service",
    "Privacy Mixer Implementation",
    "Layer 2 Scaling Solution",
    "Blockchain Analytics Dashboard",
    "Crypto Payment Gateway",
];

pub const DESCRIPTIONS: &[&str] = &[
    "Need comprehensive security audit for our new DeFi lending protocol. Must have experience with Solidity and security best practices.",
    "Build a modern React frontend for our NFT marketplace with wallet integration and clean UI/UX design.",
    "Design comprehensive tokenomics model and create detailed whitepaper for our new blockchain project.",
    "Implement secure cross-chain bridge between Ethereum and Arbitrum with comprehensive testing.",
    "Develop a scalable and secure backend API using Node.js, Express, and PostgreSQL to support our upcoming blockchain-based game.",
    "Design an intuitive and beautiful user interface for our new non-custodial mobile wallet.",
    "Create clear, concise, and comprehensive documentation for our developer community.",
    "Engage and grow our community across Discord, Twitter, and other social media platforms.",
];

pub const SKILLS: &[&str] = &[
    "Solidity",
    "React",
    "Web3",
    "TypeScript",
    "Security",
    "DeFi",
    "Tokenomics",
    "Writing",
    "Cross-chain",
    "Node.js",
    "Rust",
    "UI/UX",
    "DevOps",
    "NFT",
    "DAO",
    "Oracle",
    "Staking",
    "Liquidity",
];

const DISPUTE_REASONS: &[&str] = &[
    "Client claims work was incomplete, freelancer says requirements changed",
    "Freelancer claims client requested additional work beyond scope",
    "Quality dispute - client unsatisfied with deliverable quality",
    "Deadline missed after milestone scope was renegotiated",
    "Client withheld approval after deliverables were accepted in review",
];

const GENERATED_STATUSES: [JobStatus; 3] = [JobStatus::Open, JobStatus::InProgress, JobStatus::Completed];

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool.choose(rng).copied().unwrap_or_default()
}

/// Random `0x`-prefixed 40-hex-digit address.
pub fn random_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    Address::from(rng.random::<[u8; 20]>()).to_string()
}

fn random_skills<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    let count = rng.random_range(2..=4);
    SKILLS.choose_multiple(rng, count).map(|skill| (*skill).to_owned()).collect()
}

/// `count` jobs with ids `1..=count`, created within the 30 days before `now_ms`.
pub fn generate_jobs<R: Rng + ?Sized>(rng: &mut R, count: usize, now_ms: i64) -> Vec<Job> {
    (1..=count as u64).map(|id| generate_job(rng, id, now_ms)).collect()
}

fn generate_job<R: Rng + ?Sized>(rng: &mut R, id: u64, now_ms: i64) -> Job {
    let status = GENERATED_STATUSES.choose(rng).copied().unwrap_or(JobStatus::Open);
    let days_ago: u32 = rng.random_range(0..30);
    let hours_ago: u32 = if days_ago == 0 { rng.random_range(1..=24) } else { 0 };
    let progress = match status {
        JobStatus::InProgress => rng.random_range(10..90),
        JobStatus::Completed => 100,
        _ => 0,
    };
    let freelancer = (status != JobStatus::Open).then(|| random_address(rng));

    Job {
        id,
        title: pick(rng, TITLES).to_owned(),
        description: pick(rng, DESCRIPTIONS).to_owned(),
        budget: rng.random_range(2_000..20_000_u32).to_string(),
        currency: DEFAULT_CURRENCY.to_owned(),
        duration: weeks_label(rng.random_range(1..=4)),
        deadline: format!("{} days left", rng.random_range(2..30_u32)),
        status,
        skills: random_skills(rng),
        client: random_address(rng),
        freelancer,
        role: if rng.random_bool(0.5) { JobRole::Posted } else { JobRole::Working },
        progress,
        posted: posted_label(days_ago, hours_ago),
        created_at_ms: now_ms - i64::from(days_ago) * MS_PER_DAY - i64::from(hours_ago) * MS_PER_HOUR,
    }
}

fn weeks_label(weeks: u32) -> String {
    if weeks == 1 { "1 week".to_owned() } else { format!("{weeks} weeks") }
}

/// Number of generated disputes listed after the seed disputes.
pub const GENERATED_DISPUTES: usize = 9;

/// `count` disputes numbered from `first_id`, with random tallies, each
/// settled on construction.
pub fn generate_disputes<R: Rng + ?Sized>(rng: &mut R, first_id: u64, count: usize, now_ms: i64) -> Vec<Dispute> {
    (first_id..first_id + count as u64)
        .map(|id| {
            let amount = rng.random_range(500..5_000_u32).to_string();
            let mut dispute = Dispute::new(
                id,
                pick(rng, TITLES),
                pick(rng, DISPUTE_REASONS),
                &amount,
                rng.random_range(0..=6),
                rng.random_range(0..=6),
            );
            let days_ago: i64 = rng.random_range(0..14);
            dispute.created_at_ms = now_ms - days_ago * MS_PER_DAY;
            if !dispute.is_resolved() {
                dispute.time_left = format!("{} days", rng.random_range(1..=6_u32));
            }
            dispute
        })
        .collect()
}

/// The three fixed disputes shown on first load.
#[must_use]
pub fn seed_disputes(now_ms: i64) -> Vec<Dispute> {
    let mut contested = Dispute::new(1, "Smart Contract Development", DISPUTE_REASONS[0], "2500", 3, 1);
    "2 days".clone_into(&mut contested.time_left);
    contested.created_at_ms = now_ms - 3 * MS_PER_DAY;

    let mut voted = Dispute::new(2, "Frontend UI/UX Design", DISPUTE_REASONS[1], "1800", 1, 3);
    "4 days".clone_into(&mut voted.time_left);
    voted.your_vote = Some(VoteSide::FavorClient);
    voted.created_at_ms = now_ms - MS_PER_DAY;

    let mut resolved = Dispute::new(3, "Tokenomics Consultation", DISPUTE_REASONS[2], "1200", 12, 1);
    resolved.created_at_ms = now_ms - 9 * MS_PER_DAY;

    vec![contested, voted, resolved]
}

// =============================================================================
// JOB STORE
// =============================================================================

/// In-memory job list backing the Jobs and Dashboard pages.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JobStore {
    jobs: Vec<Job>,
}

impl JobStore {
    pub const SEED_COUNT: usize = 120;

    #[must_use]
    pub fn new(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }

    /// Store filled with [`Self::SEED_COUNT`] generated jobs.
    pub fn seeded<R: Rng + ?Sized>(rng: &mut R, now_ms: i64) -> Self {
        Self::new(generate_jobs(rng, Self::SEED_COUNT, now_ms))
    }

    /// Jobs, newest first for anything added after seeding.
    #[must_use]
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// Prepend a freshly posted job owned by `client` and return its id.
    pub fn add(&mut self, job: ValidJob, client: &str, now_ms: i64) -> u64 {
        let id = self.jobs.iter().map(|job| job.id).max().unwrap_or(0) + 1;
        let deadline = format!("{} days left", job.duration_days);
        let duration = job.duration_label();
        self.jobs.insert(
            0,
            Job {
                id,
                title: job.title,
                description: job.description,
                budget: job.budget,
                currency: DEFAULT_CURRENCY.to_owned(),
                duration,
                deadline,
                status: JobStatus::Open,
                skills: job.skills,
                client: client.to_owned(),
                freelancer: None,
                role: JobRole::Posted,
                progress: 0,
                posted: posted_label(0, 0),
                created_at_ms: now_ms,
            },
        );
        debug!(id, "job added to store");
        id
    }

    /// Update a job's status. Returns `false` when the id is unknown.
    pub fn set_status(&mut self, id: u64, status: JobStatus) -> bool {
        match self.jobs.iter_mut().find(|job| job.id == id) {
            Some(job) => {
                job.status = status;
                if status == JobStatus::Completed {
                    job.progress = 100;
                }
                true
            }
            None => false,
        }
    }
}
