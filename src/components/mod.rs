//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat surface from the shared conversation model and
//! dispatch user intent through the `Commands` context. None of them talk to
//! the backend.

pub mod chat_panel;
pub mod data_table;
pub mod formatted_text;
pub mod message_view;
pub mod quick_actions;
pub mod status_bar;
pub mod toolbar;
