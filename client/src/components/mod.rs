//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render cards, dialogs, and chrome. They read shared state from
//! Leptos context providers and report user intent back through callbacks.

pub mod dispute_card;
pub mod job_card;
pub mod navigation;
pub mod post_job_dialog;
pub mod status_badge;
pub mod toast_stack;
