use super::*;

fn texts(store: &TranscriptStore) -> Vec<&str> {
    store.all().map(|m| m.text.as_str()).collect()
}

// =============================================================
// Message constructors
// =============================================================

#[test]
fn user_and_bot_messages_get_distinct_ids() {
    let a = Message::user("hello", 1.0);
    let b = Message::bot("hi", MessageStatus::Success, 2.0);
    assert_ne!(a.id, b.id);
    assert_eq!(a.sender, Sender::User);
    assert_eq!(b.sender, Sender::Bot);
}

#[test]
fn placeholder_uses_reserved_id() {
    let p = Message::placeholder(0.0);
    assert_eq!(p.id, PLACEHOLDER_ID);
    assert!(p.is_placeholder());
    assert!(!Message::user("x", 0.0).is_placeholder());
}

#[test]
fn builder_attaches_action_and_data() {
    let payload = ScanPayload::DeviceList { devices: Vec::new() };
    let m = Message::bot("done", MessageStatus::Success, 0.0)
        .with_action(Some("scan_network".to_owned()))
        .with_data(Some(payload.clone()));
    assert_eq!(m.action.as_deref(), Some("scan_network"));
    assert_eq!(m.attached_data, Some(payload));
}

// =============================================================
// TranscriptStore
// =============================================================

#[test]
fn store_default_is_empty() {
    let store = TranscriptStore::default();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.last().is_none());
}

#[test]
fn append_preserves_insertion_order() {
    let mut store = TranscriptStore::default();
    store.append(Message::user("one", 0.0));
    store.append(Message::bot("two", MessageStatus::Success, 0.0));
    store.append(Message::user("three", 0.0));
    assert_eq!(texts(&store), vec!["one", "two", "three"]);
    assert_eq!(store.last().map(|m| m.text.as_str()), Some("three"));
}

#[test]
fn all_is_restartable() {
    let mut store = TranscriptStore::default();
    store.append(Message::user("a", 0.0));
    store.append(Message::user("b", 0.0));
    let first = store.all();
    let second = first.clone();
    assert_eq!(first.count(), 2);
    assert_eq!(second.count(), 2);
    assert_eq!(store.all().count(), 2);
}

#[test]
fn remove_by_id_removes_placeholder_only() {
    let mut store = TranscriptStore::default();
    store.append(Message::user("q", 0.0));
    store.append(Message::placeholder(0.0));
    assert_eq!(store.pending_count(), 1);

    assert!(store.remove_by_id(PLACEHOLDER_ID));
    assert_eq!(store.pending_count(), 0);
    assert_eq!(texts(&store), vec!["q"]);
}

#[test]
fn remove_by_id_twice_is_idempotent() {
    let mut store = TranscriptStore::default();
    store.append(Message::placeholder(0.0));
    assert!(store.remove_by_id(PLACEHOLDER_ID));
    assert!(!store.remove_by_id(PLACEHOLDER_ID));
    assert!(store.is_empty());
}

#[test]
fn remove_by_unknown_id_leaves_store_untouched() {
    let mut store = TranscriptStore::default();
    store.append(Message::user("keep", 0.0));
    let before = store.clone();
    assert!(!store.remove_by_id("missing"));
    assert_eq!(store, before);
}
