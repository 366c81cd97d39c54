//! Server-side sessions.
//!
//! A session ties a random token (sent to the client as the `JSESSIONID`
//! cookie) to the account that authenticated with it. Stores are shared by
//! every connection and must be internally synchronized.

pub mod store;

pub use store::{MemorySessionStore, Session, SessionError, SessionStore};

use crate::http::request::Request;

/// Generates a fresh 128-bit random session token.
pub fn new_session_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Account bound to the session the request's cookie points at, if any.
pub fn current_identity(request: &Request, store: &dyn SessionStore) -> Option<String> {
    let session_id = request.session_id()?;
    store.get(&session_id).map(|session| session.identity)
}
