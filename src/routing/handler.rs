use std::sync::Arc;

use crate::http::request::{Method, Request};
use crate::http::response::Response;
use crate::routing::assets::AssetStore;
use crate::routing::static_files;

/// A path-bound unit that turns a request into a response.
///
/// An `Err` is a handler failure: the connection is dropped without a
/// response.
pub trait Handler: Send + Sync {
    fn service(&self, request: &Request) -> anyhow::Result<Response>;
}

impl<F> Handler for F
where
    F: Fn(&Request) -> anyhow::Result<Response> + Send + Sync,
{
    fn service(&self, request: &Request) -> anyhow::Result<Response> {
        self(request)
    }
}

/// Handlers that only answer GET and POST.
///
/// Wrap one in [`MethodDispatch`] to register it with the router.
pub trait MethodHandler: Send + Sync {
    fn get(&self, request: &Request) -> anyhow::Result<Response>;

    fn post(&self, request: &Request) -> anyhow::Result<Response>;
}

/// Routes GET and POST to a [`MethodHandler`]; every other verb gets the
/// 405 page.
pub struct MethodDispatch<H> {
    inner: H,
    assets: Arc<dyn AssetStore>,
}

impl<H: MethodHandler> MethodDispatch<H> {
    pub fn new(inner: H, assets: Arc<dyn AssetStore>) -> Self {
        Self { inner, assets }
    }
}

impl<H: MethodHandler> Handler for MethodDispatch<H> {
    fn service(&self, request: &Request) -> anyhow::Result<Response> {
        match request.verb() {
            Some(Method::GET) => self.inner.get(request),
            Some(Method::POST) => self.inner.post(request),
            None => {
                tracing::debug!(method = request.method(), path = request.path(), "method not allowed");
                Ok(static_files::method_not_allowed(self.assets.as_ref()))
            }
        }
    }
}
