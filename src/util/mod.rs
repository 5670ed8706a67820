//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure transforms (`format`, `data_panel`, `shortcuts`) live next to the
//! browser-only helpers (`theme`, `clock`) so components stay thin and the
//! transforms stay testable without a DOM.

pub mod clock;
pub mod data_panel;
pub mod format;
pub mod shortcuts;
pub mod theme;
