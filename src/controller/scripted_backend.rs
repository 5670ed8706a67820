//! In-memory [`Backend`] for controller and monitor tests.
//!
//! Replies are queued per endpoint. A reply can be immediate or gated on a
//! oneshot channel so a test can hold a request in flight. Every call
//! records what was sent and, when a model is attached, a snapshot of the
//! model at the moment the call was issued.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use futures::channel::oneshot;

use crate::net::api::Backend;
use crate::net::error::ApiError;
use crate::net::types::{ChatResponse, HelpResponse};
use crate::state::conversation::ConversationModel;

pub(crate) enum Reply<T> {
    Now(Result<T, ApiError>),
    Gated(oneshot::Receiver<Result<T, ApiError>>),
}

#[derive(Default)]
struct Script {
    chat: VecDeque<Reply<ChatResponse>>,
    help: VecDeque<Reply<HelpResponse>>,
    health: VecDeque<Result<(), ApiError>>,
    sent: Vec<String>,
    snapshots: Vec<ConversationModel>,
    watch: Option<Rc<RefCell<ConversationModel>>>,
}

#[derive(Clone, Default)]
pub(crate) struct ScriptedBackend {
    script: Rc<RefCell<Script>>,
}

impl ScriptedBackend {
    /// Snapshot `model` whenever a request is issued.
    pub(crate) fn watching(model: &Rc<RefCell<ConversationModel>>) -> Self {
        let backend = Self::default();
        backend.script.borrow_mut().watch = Some(Rc::clone(model));
        backend
    }

    pub(crate) fn push_chat(&self, reply: Result<ChatResponse, ApiError>) {
        self.script.borrow_mut().chat.push_back(Reply::Now(reply));
    }

    /// Queue a chat reply that resolves when the returned sender fires.
    pub(crate) fn gate_chat(&self) -> oneshot::Sender<Result<ChatResponse, ApiError>> {
        let (tx, rx) = oneshot::channel();
        self.script.borrow_mut().chat.push_back(Reply::Gated(rx));
        tx
    }

    pub(crate) fn push_help(&self, reply: Result<HelpResponse, ApiError>) {
        self.script.borrow_mut().help.push_back(Reply::Now(reply));
    }

    pub(crate) fn gate_help(&self) -> oneshot::Sender<Result<HelpResponse, ApiError>> {
        let (tx, rx) = oneshot::channel();
        self.script.borrow_mut().help.push_back(Reply::Gated(rx));
        tx
    }

    pub(crate) fn push_health(&self, reply: Result<(), ApiError>) {
        self.script.borrow_mut().health.push_back(reply);
    }

    /// Chat bodies sent so far.
    pub(crate) fn sent(&self) -> Vec<String> {
        self.script.borrow().sent.clone()
    }

    /// Model snapshots taken as each request was issued.
    pub(crate) fn snapshots(&self) -> Vec<ConversationModel> {
        self.script.borrow().snapshots.clone()
    }

    fn record(&self, sent: Option<&str>) {
        let mut script = self.script.borrow_mut();
        if let Some(body) = sent {
            script.sent.push(body.to_owned());
        }
        if let Some(model) = script.watch.clone() {
            script.snapshots.push(model.borrow().clone());
        }
    }
}

async fn resolve<T>(reply: Option<Reply<T>>) -> Result<T, ApiError> {
    match reply {
        Some(Reply::Now(result)) => result,
        Some(Reply::Gated(rx)) => match rx.await {
            Ok(result) => result,
            Err(_) => Err(ApiError::Network("gate dropped".to_owned())),
        },
        None => Err(ApiError::Network("no scripted reply".to_owned())),
    }
}

impl Backend for ScriptedBackend {
    async fn send_chat(&self, message: &str) -> Result<ChatResponse, ApiError> {
        self.record(Some(message));
        let reply = self.script.borrow_mut().chat.pop_front();
        resolve(reply).await
    }

    async fn fetch_help(&self) -> Result<HelpResponse, ApiError> {
        self.record(None);
        let reply = self.script.borrow_mut().help.pop_front();
        resolve(reply).await
    }

    async fn check_health(&self) -> Result<(), ApiError> {
        let reply = self.script.borrow_mut().health.pop_front();
        reply.unwrap_or(Err(ApiError::Network("no scripted reply".to_owned())))
    }
}
