use std::collections::HashMap;
use std::sync::Arc;

use crate::routing::handler::Handler;

/// Exact-match path router with a single fallback handler.
///
/// There is no prefix, wildcard or parameter matching: `/login/x` does not
/// reach a handler registered at `/login`.
pub struct Router {
    routes: HashMap<String, Arc<dyn Handler>>,
    fallback: Arc<dyn Handler>,
}

impl Router {
    pub fn new(fallback: Arc<dyn Handler>) -> Self {
        Self {
            routes: HashMap::new(),
            fallback,
        }
    }

    /// Binds `handler` to `path`, replacing any earlier registration.
    pub fn register(&mut self, path: impl Into<String>, handler: Arc<dyn Handler>) {
        let path = normalize(&path.into()).to_string();
        if self.routes.insert(path.clone(), handler).is_some() {
            tracing::debug!(path = %path, "replaced route");
        }
    }

    /// Builder-style [`register`](Self::register).
    pub fn route(mut self, path: impl Into<String>, handler: Arc<dyn Handler>) -> Self {
        self.register(path, handler);
        self
    }

    pub fn resolve(&self, path: &str) -> &dyn Handler {
        self.routes
            .get(normalize(path))
            .unwrap_or(&self.fallback)
            .as_ref()
    }

    pub fn is_registered(&self, path: &str) -> bool {
        self.routes.contains_key(normalize(path))
    }
}

// An empty path is the root.
fn normalize(path: &str) -> &str {
    if path.is_empty() { "/" } else { path }
}
