//! Browser-facing I/O.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` fetches host configuration over HTTP. `wallet` bridges the EIP-1193
//! provider injected at `window.ethereum` to `market::contract::ChainClient`.
//! Both compile to stubs without the `hydrate` feature.

pub mod api;
pub mod wallet;
