//! The bundled web application: index page, login and signup.

pub mod login;
pub mod signup;
pub mod users;

use std::collections::HashMap;
use std::sync::Arc;

use crate::http::cookie::{SESSION_COOKIE, set_cookie_value};
use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::routing::{AssetStore, Handler, MethodDispatch, Router, StaticHandler};
use crate::session::SessionStore;

pub use login::LoginHandler;
pub use signup::SignupHandler;
pub use users::{InMemoryUserStore, User, UserStore};

pub(crate) const INDEX_PAGE: &str = "/index.html";

/// Root page.
pub struct IndexHandler;

impl Handler for IndexHandler {
    fn service(&self, _request: &Request) -> anyhow::Result<Response> {
        Ok(Response::ok("Hello world!"))
    }
}

/// Wires the application routes over the given stores.
pub fn build_router(
    assets: Arc<dyn AssetStore>,
    sessions: Arc<dyn SessionStore>,
    users: Arc<dyn UserStore>,
) -> Router {
    let login = LoginHandler::new(users.clone(), sessions.clone(), assets.clone());
    let signup = SignupHandler::new(users, sessions, assets.clone());

    Router::new(Arc::new(StaticHandler::new(assets.clone())))
        .route("/", Arc::new(IndexHandler))
        .route("/login", Arc::new(MethodDispatch::new(login, assets.clone())))
        .route("/register", Arc::new(MethodDispatch::new(signup, assets)))
}

/// Decodes an `application/x-www-form-urlencoded` body. Empty values are
/// treated as absent.
pub(crate) fn form_fields(body: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(body.as_bytes())
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

/// Redirect to the index page that also hands the client its session.
pub(crate) fn logged_in_response(session_id: &str) -> Response {
    ResponseBuilder::new(StatusCode::Found)
        .header("Location", INDEX_PAGE)
        .header("Set-Cookie", set_cookie_value(SESSION_COOKIE, session_id))
        .build()
}
