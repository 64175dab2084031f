//! Marketplace domain model shared by the `client` UI and the host binary.
//!
//! This crate owns everything that is not rendering: job and dispute records,
//! the dispute vote tally, the filter/sort/paginate listing pipeline, mock
//! data generation, job-posting validation, and the typed contract-call
//! wrapper that forwards user actions to an external chain client.
//!
//! Nothing here touches the browser. The wallet transport is a trait
//! ([`contract::ChainClient`]) implemented by the client crate, so every rule
//! in this crate runs under plain `cargo test`.

pub mod abi;
pub mod config;
pub mod contract;
pub mod dispute;
pub mod draft;
pub mod job;
pub mod listing;
pub mod mock;
pub mod stats;
