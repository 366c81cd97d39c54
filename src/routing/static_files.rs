//! Static asset serving and the canned error pages built from assets.

use std::sync::Arc;

use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::routing::assets::AssetStore;
use crate::routing::handler::Handler;

const HTML: &str = "text/html;charset=utf-8";
const CSS: &str = "text/css;charset=utf-8";

const NOT_FOUND_FALLBACK: &str = "<html><body><h1>404 Not Found</h1></body></html>";
const METHOD_NOT_ALLOWED_FALLBACK: &str =
    "<html><body><h1>405 Method Not Allowed</h1></body></html>";

/// Default handler: serves whatever asset matches the request path.
pub struct StaticHandler {
    assets: Arc<dyn AssetStore>,
}

impl StaticHandler {
    pub fn new(assets: Arc<dyn AssetStore>) -> Self {
        Self { assets }
    }
}

impl Handler for StaticHandler {
    fn service(&self, request: &Request) -> anyhow::Result<Response> {
        Ok(serve_asset(self.assets.as_ref(), request.path()))
    }
}

/// 200 with the asset at `path` (leading `/` ignored), or the 404 page.
pub fn serve_asset(assets: &dyn AssetStore, path: &str) -> Response {
    let relative = path.strip_prefix('/').unwrap_or(path);

    match assets.lookup(relative) {
        Some(bytes) => {
            tracing::debug!(asset = relative, "serving static asset");
            ResponseBuilder::new(StatusCode::Ok)
                .header("Content-Type", content_type(relative))
                .body(asset_text(&bytes) + "\n")
                .build()
        }
        None => {
            tracing::debug!(asset = relative, "asset not found");
            not_found(assets)
        }
    }
}

/// Content type by extension. Only CSS is distinguished; everything else is
/// served as HTML.
pub fn content_type(path: &str) -> &'static str {
    if path.ends_with(".css") { CSS } else { HTML }
}

pub fn not_found(assets: &dyn AssetStore) -> Response {
    error_page(assets, StatusCode::NotFound, "404.html", NOT_FOUND_FALLBACK)
}

pub fn method_not_allowed(assets: &dyn AssetStore) -> Response {
    error_page(
        assets,
        StatusCode::MethodNotAllowed,
        "405.html",
        METHOD_NOT_ALLOWED_FALLBACK,
    )
}

fn error_page(
    assets: &dyn AssetStore,
    status: StatusCode,
    page: &str,
    fallback: &str,
) -> Response {
    let body = assets
        .lookup(page)
        .map(|bytes| asset_text(&bytes))
        .unwrap_or_else(|| fallback.to_string());

    ResponseBuilder::new(status)
        .header("Content-Type", HTML)
        .body(body)
        .build()
}

// Lines are rejoined with `\n`, so CRLF files come out normalized and the
// final newline is dropped.
fn asset_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .lines()
        .collect::<Vec<_>>()
        .join("\n")
}
