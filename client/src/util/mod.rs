//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (clock, storage,
//! theme) and display formatting from page and component logic.

pub mod clock;
pub mod format;
pub mod theme;
