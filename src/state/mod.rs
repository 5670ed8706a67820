//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`conversation`, `transcript`, `ui`) so
//! components can depend on small focused models.

pub mod conversation;
pub mod transcript;
pub mod ui;
