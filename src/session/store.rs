use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use thiserror::Error;

use super::new_session_id;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("generated session id {0} already exists")]
    IdCollision(String),
}

/// Snapshot of one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    /// Account name of the authenticated user.
    pub identity: String,
}

/// Keyed store of live sessions.
///
/// Implementations are shared across connections without external locking.
/// A `get` racing a `create` or `remove` for the same id sees either the
/// whole session or nothing.
pub trait SessionStore: Send + Sync {
    /// Opens a session for `identity` and returns its id.
    fn create(&self, identity: &str) -> Result<String, SessionError>;

    fn get(&self, id: &str) -> Option<Session>;

    /// Drops a session, returning it if it existed.
    fn remove(&self, id: &str) -> Option<Session>;
}

/// Process-lifetime in-memory store. Sessions never expire.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insert(&self, id: String, identity: &str) -> Result<String, SessionError> {
        let mut sessions = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if sessions.contains_key(&id) {
            tracing::error!(session_id = %id, "session id collision");
            return Err(SessionError::IdCollision(id));
        }

        sessions.insert(
            id.clone(),
            Session {
                id: id.clone(),
                identity: identity.to_string(),
            },
        );
        Ok(id)
    }
}

impl SessionStore for MemorySessionStore {
    fn create(&self, identity: &str) -> Result<String, SessionError> {
        let id = self.insert(new_session_id(), identity)?;
        tracing::info!(session_id = %id, user = identity, "session created");
        Ok(id)
    }

    fn get(&self, id: &str) -> Option<Session> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    fn remove(&self, id: &str) -> Option<Session> {
        let removed = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id);

        if removed.is_some() {
            tracing::info!(session_id = id, "session removed");
        }
        removed
    }
}
