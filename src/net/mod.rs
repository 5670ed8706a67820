//! Networking modules for the chat backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the [`api::Backend`] seam and its `fetch` implementation,
//! `error` the transport failure type, and `types` the wire schema.

pub mod api;
pub mod error;
pub mod types;
