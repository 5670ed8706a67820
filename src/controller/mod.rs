//! Conversation controller: the submit/help request lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components never touch the backend directly. They call
//! [`ConversationController::submit`] / [`ConversationController::request_help`],
//! which append to the transcript, flip the busy flag, talk to the
//! [`Backend`], and settle the model. Views re-render from the model.
//!
//! ORDERING
//! ========
//! Within one call: user message (submit only), `loading`, placeholder, then
//! the network call. On settle the placeholder is removed before the reply is
//! appended, in a single model update, so the view never shows both.
//!
//! ERROR HANDLING
//! ==============
//! Nothing escapes to the caller. Transport failures become an error message
//! in the transcript; a backend-reported error keeps the backend's text. The
//! busy flag is released on every path, including a dropped future, by
//! [`BusyGuard`].

pub mod monitor;

#[cfg(test)]
mod scripted_backend;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::{RwSignal, Update, WithUntracked};

use crate::net::api::Backend;
use crate::net::types::ScanPayload;
use crate::state::conversation::ConversationModel;
use crate::state::transcript::{Message, MessageStatus, PLACEHOLDER_ID};
use crate::util::clock;

/// Shown when the chat request never produced a usable reply.
pub const APOLOGY_TEXT: &str =
    "⚠️ Sorry, I encountered an error. Please make sure the server is running and try again.";

/// Shown when the help request fails.
pub const HELP_ERROR_TEXT: &str = "Error loading help. Please try again.";

/// Access to the conversation model, wherever it lives.
///
/// In the app this is an `RwSignal`; tests use a plain `Rc<RefCell<_>>`.
pub trait ModelHandle: Clone {
    fn mutate(&self, f: impl FnOnce(&mut ConversationModel));
    fn inspect<R>(&self, f: impl FnOnce(&ConversationModel) -> R) -> R;
}

impl ModelHandle for RwSignal<ConversationModel> {
    fn mutate(&self, f: impl FnOnce(&mut ConversationModel)) {
        Update::update(self, f);
    }

    fn inspect<R>(&self, f: impl FnOnce(&ConversationModel) -> R) -> R {
        WithUntracked::with_untracked(self, f)
    }
}

impl ModelHandle for Rc<RefCell<ConversationModel>> {
    fn mutate(&self, f: impl FnOnce(&mut ConversationModel)) {
        f(&mut self.borrow_mut());
    }

    fn inspect<R>(&self, f: impl FnOnce(&ConversationModel) -> R) -> R {
        f(&self.borrow())
    }
}

/// What a submit/help call ended up doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Empty input or a request already in flight; nothing changed.
    Rejected,
    /// Reply received and appended.
    Completed,
    /// 2xx reply whose status was `"error"`.
    BackendError,
    /// Network failure, non-2xx status, or unreadable body.
    TransportFailure,
}

/// Drives the conversation model against a backend.
#[derive(Clone, Debug)]
pub struct ConversationController<B, S> {
    backend: B,
    store: S,
}

impl<B: Backend, S: ModelHandle> ConversationController<B, S> {
    pub fn new(backend: B, store: S) -> Self {
        Self { backend, store }
    }

    /// Whether a request is outstanding.
    pub fn is_busy(&self) -> bool {
        self.store.inspect(|m| m.state.is_loading())
    }

    /// Send user text to the backend and append the reply.
    ///
    /// Whitespace-only input, or a call while another request is in flight,
    /// is rejected without touching the model.
    pub async fn submit(&self, raw_text: &str) -> Outcome {
        let text = raw_text.trim();
        if text.is_empty() {
            return Outcome::Rejected;
        }

        let Some(guard) = BusyGuard::acquire(&self.store, |m| {
            m.transcript.append(Message::user(text, clock::now_ms()));
        }) else {
            leptos::logging::log!("submit ignored: request already in flight");
            return Outcome::Rejected;
        };

        match self.backend.send_chat(text).await {
            Ok(resp) => {
                let failed = resp.is_error();
                let status = if failed { MessageStatus::Error } else { MessageStatus::Success };
                let data = resp.data.as_ref().and_then(ScanPayload::classify);
                let reply = Message::bot(resp.message, status, clock::now_ms())
                    .with_action(resp.action)
                    .with_data(data);
                guard.settle(reply, !failed, false);
                if failed {
                    leptos::logging::warn!("backend reported an error for: {text}");
                    Outcome::BackendError
                } else {
                    Outcome::Completed
                }
            }
            Err(err) => {
                leptos::logging::warn!("chat request failed: {err}");
                let reply = Message::bot(APOLOGY_TEXT, MessageStatus::Error, clock::now_ms());
                guard.settle(reply, false, true);
                Outcome::TransportFailure
            }
        }
    }

    /// Fetch the help text and append it. Never changes connectivity.
    pub async fn request_help(&self) -> Outcome {
        let Some(guard) = BusyGuard::acquire(&self.store, |_| {}) else {
            leptos::logging::log!("help ignored: request already in flight");
            return Outcome::Rejected;
        };

        match self.backend.fetch_help().await {
            Ok(resp) => {
                let reply = Message::bot(resp.message, MessageStatus::Success, clock::now_ms())
                    .with_action(resp.action);
                guard.settle(reply, true, false);
                Outcome::Completed
            }
            Err(err) => {
                leptos::logging::warn!("help request failed: {err}");
                let reply = Message::bot(HELP_ERROR_TEXT, MessageStatus::Error, clock::now_ms());
                guard.settle(reply, false, false);
                Outcome::TransportFailure
            }
        }
    }
}

/// Holds the busy flag and the placeholder for one request.
///
/// Settling removes the placeholder, appends the reply and leaves `loading`
/// in one update. Dropping an unsettled guard removes the placeholder and
/// moves to `error`.
struct BusyGuard<S: ModelHandle> {
    store: S,
    settled: bool,
}

impl<S: ModelHandle> BusyGuard<S> {
    /// Enter `loading` and show the placeholder, running `before` first in the
    /// same update. Returns `None` if already loading.
    fn acquire(store: &S, before: impl FnOnce(&mut ConversationModel)) -> Option<Self> {
        let mut acquired = false;
        store.mutate(|m| {
            if m.state.is_loading() {
                return;
            }
            before(m);
            m.state.begin();
            m.transcript.append(Message::placeholder(clock::now_ms()));
            acquired = true;
        });
        acquired.then(|| Self { store: store.clone(), settled: false })
    }

    fn settle(mut self, reply: Message, succeeded: bool, unreachable: bool) {
        self.store.mutate(|m| {
            m.transcript.remove_by_id(PLACEHOLDER_ID);
            m.transcript.append(reply);
            m.state.finish(succeeded);
            if unreachable {
                m.state.connection_failed();
            }
        });
        self.settled = true;
    }
}

impl<S: ModelHandle> Drop for BusyGuard<S> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        self.store.mutate(|m| {
            m.transcript.remove_by_id(PLACEHOLDER_ID);
            m.state.finish(false);
        });
    }
}
