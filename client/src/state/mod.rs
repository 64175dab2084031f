//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`jobs`, `disputes`, `wallet`, `toasts`, `ui`)
//! and provided as `RwSignal`s from `App`, so each page depends only on the
//! small models it renders. The models are plain structs over `market` types
//! and are tested without a browser.

pub mod disputes;
pub mod jobs;
pub mod toasts;
pub mod ui;
pub mod wallet;
