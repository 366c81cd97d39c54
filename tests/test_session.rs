use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use ferrocat::http::request::RequestBuilder;
use ferrocat::session::{MemorySessionStore, SessionStore, current_identity, new_session_id};

#[test]
fn test_session_create_and_get() {
    let store = MemorySessionStore::new();

    let id = store.create("gugu").unwrap();
    let session = store.get(&id).unwrap();

    assert_eq!(session.id, id);
    assert_eq!(session.identity, "gugu");
}

#[test]
fn test_session_get_unknown_id() {
    let store = MemorySessionStore::new();

    assert!(store.get("does-not-exist").is_none());
}

#[test]
fn test_session_remove() {
    let store = MemorySessionStore::new();
    let id = store.create("gugu").unwrap();

    let removed = store.remove(&id).unwrap();

    assert_eq!(removed.identity, "gugu");
    assert!(store.get(&id).is_none());
    assert!(store.remove(&id).is_none());
    assert!(store.is_empty());
}

#[test]
fn test_session_ids_are_uuid_shaped() {
    let id = new_session_id();

    assert_eq!(id.len(), 36);
    assert_eq!(id.matches('-').count(), 4);
    assert_ne!(id, new_session_id());
}

#[test]
fn test_session_concurrent_creates_are_distinct() {
    const THREADS: usize = 16;
    const PER_THREAD: usize = 50;

    let store = Arc::new(MemorySessionStore::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                (0..PER_THREAD)
                    .map(|i| {
                        let identity = format!("user-{t}-{i}");
                        (store.create(&identity).unwrap(), identity)
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let created: Vec<(String, String)> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();

    let ids: HashSet<&str> = created.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(ids.len(), THREADS * PER_THREAD);
    assert_eq!(store.len(), THREADS * PER_THREAD);

    for (id, identity) in &created {
        assert_eq!(&store.get(id).unwrap().identity, identity);
    }
}

#[test]
fn test_session_concurrent_get_and_remove() {
    let store = Arc::new(MemorySessionStore::new());
    let id = store.create("gugu").unwrap();

    let reader = {
        let store = Arc::clone(&store);
        let id = id.clone();
        thread::spawn(move || {
            for _ in 0..1000 {
                if let Some(session) = store.get(&id) {
                    assert_eq!(session.identity, "gugu");
                }
            }
        })
    };

    store.remove(&id);
    reader.join().unwrap();

    assert!(store.get(&id).is_none());
}

#[test]
fn test_current_identity_from_request_cookie() {
    let store = MemorySessionStore::new();
    let id = store.create("gugu").unwrap();

    let logged_in = RequestBuilder::new("GET", "/login")
        .header("Cookie", format!("JSESSIONID={id}"))
        .build();
    let guest = RequestBuilder::new("GET", "/login")
        .header("Cookie", "JSESSIONID=unknown")
        .build();
    let anonymous = RequestBuilder::new("GET", "/login").build();

    assert_eq!(current_identity(&logged_in, &store).as_deref(), Some("gugu"));
    assert_eq!(current_identity(&guest, &store), None);
    assert_eq!(current_identity(&anonymous, &store), None);
}
