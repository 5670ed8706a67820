//! Conversation transcript: the ordered log the message list renders from.
//!
//! DESIGN
//! ======
//! Entries are only ever appended. The single exception is the pending
//! placeholder (id [`PLACEHOLDER_ID`]), which is removed once its request
//! settles. Nothing is edited in place or reordered, so a view can render
//! straight from [`TranscriptStore::all`].

#[cfg(test)]
#[path = "transcript_test.rs"]
mod transcript_test;

use crate::net::types::ScanPayload;

/// Reserved id of the "bot is typing" entry.
pub const PLACEHOLDER_ID: &str = "typing-indicator";

/// Who wrote a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// Display status of a message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MessageStatus {
    #[default]
    Success,
    Error,
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    pub status: MessageStatus,
    /// Creation time in milliseconds since the Unix epoch.
    pub timestamp: f64,
    /// Backend action that produced a bot reply, if reported.
    pub action: Option<String>,
    pub attached_data: Option<ScanPayload>,
}

impl Message {
    /// A message typed by the user.
    #[must_use]
    pub fn user(text: impl Into<String>, timestamp: f64) -> Self {
        Self::new(Sender::User, text.into(), MessageStatus::Success, timestamp)
    }

    /// A bot reply with the given status.
    #[must_use]
    pub fn bot(text: impl Into<String>, status: MessageStatus, timestamp: f64) -> Self {
        Self::new(Sender::Bot, text.into(), status, timestamp)
    }

    /// The typing indicator shown while a request is outstanding.
    #[must_use]
    pub fn placeholder(timestamp: f64) -> Self {
        Self {
            id: PLACEHOLDER_ID.to_owned(),
            sender: Sender::Bot,
            text: String::new(),
            status: MessageStatus::Success,
            timestamp,
            action: None,
            attached_data: None,
        }
    }

    #[must_use]
    pub fn with_action(mut self, action: Option<String>) -> Self {
        self.action = action;
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: Option<ScanPayload>) -> Self {
        self.attached_data = data;
        self
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.id == PLACEHOLDER_ID
    }

    fn new(sender: Sender, text: String, status: MessageStatus, timestamp: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sender,
            text,
            status,
            timestamp,
            action: None,
            attached_data: None,
        }
    }
}

/// Append-only message log.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TranscriptStore {
    messages: Vec<Message>,
}

impl TranscriptStore {
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Remove the entry with `id`. Returns `false` (and does nothing) when no
    /// such entry exists, so repeated removal is harmless.
    pub fn remove_by_id(&mut self, id: &str) -> bool {
        let Some(index) = self.messages.iter().position(|m| m.id == id) else {
            return false;
        };
        self.messages.remove(index);
        true
    }

    /// Entries in insertion order. Each call starts a fresh pass.
    pub fn all(&self) -> impl Iterator<Item = &Message> + Clone + '_ {
        self.messages.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Number of placeholder entries currently shown (0 or 1).
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_placeholder()).count()
    }
}
