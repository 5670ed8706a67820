//! Conversation phase, connectivity, and the model the controller mutates.
//!
//! DESIGN
//! ======
//! `ConversationState` is a small state machine:
//!
//! ```text
//! ready --begin--> loading --finish(ok)--> ready
//!                  loading --finish(err)-> error
//! error --begin--> loading
//! error --probe ok--> ready
//! ```
//!
//! `loading` is never re-entered while already loading; [`ConversationState::begin`]
//! refuses instead. Connectivity is tracked separately from the phase: a
//! failed probe reads as `Offline`, a failed chat request as
//! `Connection Failed`, until the next probe says otherwise.

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use super::transcript::TranscriptStore;

/// Request lifecycle phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Ready,
    Loading,
    Error,
}

/// Backend reachability as last observed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Connection {
    /// Not yet probed, or the last probe failed.
    #[default]
    Offline,
    Connected,
    /// A chat request could not reach the backend.
    Failed,
}

/// Busy/error phase plus backend reachability.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConversationState {
    phase: Phase,
    connection: Connection,
}

impl ConversationState {
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    #[must_use]
    pub fn connected(&self) -> bool {
        self.connection == Connection::Connected
    }

    #[must_use]
    pub fn connection(&self) -> Connection {
        self.connection
    }

    /// Enter `loading`. Returns `false` if a request is already outstanding.
    pub fn begin(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.phase = Phase::Loading;
        true
    }

    /// Leave `loading` for a terminal phase. No-op unless loading.
    pub fn finish(&mut self, succeeded: bool) {
        if self.is_loading() {
            self.phase = if succeeded { Phase::Ready } else { Phase::Error };
        }
    }

    /// Record a health probe result.
    pub fn set_connected(&mut self, connected: bool) {
        self.connection = if connected { Connection::Connected } else { Connection::Offline };
    }

    /// Record a chat request that never reached the backend.
    pub fn connection_failed(&mut self) {
        self.connection = Connection::Failed;
    }

    /// A healthy probe clears a stale error. An in-flight request keeps its
    /// `loading` phase.
    pub fn recover(&mut self) {
        if self.phase == Phase::Error {
            self.phase = Phase::Ready;
        }
    }

    /// Status line text.
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        match (self.phase, self.connected()) {
            (Phase::Ready, _) => "Ready",
            (Phase::Loading, _) => "Processing...",
            (Phase::Error, false) => "Error connecting to server",
            (Phase::Error, true) => "Request failed",
        }
    }

    /// Connection badge text.
    #[must_use]
    pub fn connection_label(&self) -> &'static str {
        match self.connection {
            Connection::Connected => "Connected",
            Connection::Offline => "Offline",
            Connection::Failed => "Connection Failed",
        }
    }
}

/// Everything the conversation view renders from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConversationModel {
    pub state: ConversationState,
    pub transcript: TranscriptStore,
}
