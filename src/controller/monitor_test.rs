use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::{LocalPool, block_on};
use futures::task::LocalSpawnExt;

use super::*;
use crate::controller::ConversationController;
use crate::controller::scripted_backend::ScriptedBackend;
use crate::net::error::ApiError;
use crate::net::types::ChatResponse;
use crate::state::conversation::{ConversationModel, Phase};

type Model = Rc<RefCell<ConversationModel>>;

fn setup() -> (ConnectionMonitor<ScriptedBackend, Model>, ScriptedBackend, Model) {
    let model: Model = Rc::new(RefCell::new(ConversationModel::default()));
    let backend = ScriptedBackend::default();
    let monitor = ConnectionMonitor::new(backend.clone(), Rc::clone(&model));
    (monitor, backend, model)
}

#[test]
fn healthy_probe_sets_connected() {
    let (monitor, backend, model) = setup();
    backend.push_health(Ok(()));

    assert!(block_on(monitor.probe()));
    assert!(model.borrow().state.connected());
    assert_eq!(model.borrow().state.phase(), Phase::Ready);
}

#[test]
fn failed_probe_clears_connected() {
    let (monitor, backend, model) = setup();
    model.borrow_mut().state.set_connected(true);
    backend.push_health(Err(ApiError::Status(503)));

    assert!(!block_on(monitor.probe()));
    assert!(!model.borrow().state.connected());
}

#[test]
fn healthy_probe_recovers_from_error() {
    let (monitor, backend, model) = setup();
    {
        let mut m = model.borrow_mut();
        m.state.begin();
        m.state.finish(false);
    }
    backend.push_health(Ok(()));

    block_on(monitor.probe());
    assert_eq!(model.borrow().state.phase(), Phase::Ready);
}

#[test]
fn failed_probe_keeps_error_phase() {
    let (monitor, backend, model) = setup();
    {
        let mut m = model.borrow_mut();
        m.state.begin();
        m.state.finish(false);
    }
    backend.push_health(Err(ApiError::Network("offline".to_owned())));

    block_on(monitor.probe());
    assert_eq!(model.borrow().state.phase(), Phase::Error);
}

#[test]
fn probe_during_request_leaves_loading_alone() {
    let model: Model = Rc::new(RefCell::new(ConversationModel::default()));
    let backend = ScriptedBackend::default();
    let controller = ConversationController::new(backend.clone(), Rc::clone(&model));
    let monitor = ConnectionMonitor::new(backend.clone(), Rc::clone(&model));
    let gate = backend.gate_chat();
    let mut pool = LocalPool::new();

    let c = controller.clone();
    pool.spawner()
        .spawn_local(async move {
            c.submit("scan network").await;
        })
        .unwrap();
    pool.run_until_stalled();
    assert!(controller.is_busy());

    backend.push_health(Ok(()));
    assert!(block_on(monitor.probe()));
    assert!(controller.is_busy());
    assert_eq!(model.borrow().state.phase(), Phase::Loading);
    assert_eq!(model.borrow().transcript.pending_count(), 1);

    gate.send(Ok(ChatResponse {
        message: "done".to_owned(),
        action: None,
        status: Some("success".to_owned()),
        data: None,
    }))
    .unwrap();
    pool.run();

    assert!(!controller.is_busy());
    assert!(model.borrow().state.connected());
    assert_eq!(model.borrow().state.phase(), Phase::Ready);
}
