use std::sync::Arc;

use crate::app::users::{User, UserStore};
use crate::app::{INDEX_PAGE, form_fields, logged_in_response};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::routing::assets::AssetStore;
use crate::routing::handler::MethodHandler;
use crate::routing::static_files;
use crate::session::SessionStore;

const SIGNUP_PAGE: &str = "/register";

pub struct SignupHandler {
    users: Arc<dyn UserStore>,
    sessions: Arc<dyn SessionStore>,
    assets: Arc<dyn AssetStore>,
}

impl SignupHandler {
    pub fn new(
        users: Arc<dyn UserStore>,
        sessions: Arc<dyn SessionStore>,
        assets: Arc<dyn AssetStore>,
    ) -> Self {
        Self {
            users,
            sessions,
            assets,
        }
    }
}

impl MethodHandler for SignupHandler {
    fn get(&self, request: &Request) -> anyhow::Result<Response> {
        if crate::session::current_identity(request, self.sessions.as_ref()).is_some() {
            return Ok(Response::redirect(INDEX_PAGE));
        }
        Ok(static_files::serve_asset(self.assets.as_ref(), "register.html"))
    }

    fn post(&self, request: &Request) -> anyhow::Result<Response> {
        let form = form_fields(request.body());
        let (Some(account), Some(password), Some(email)) =
            (form.get("account"), form.get("password"), form.get("email"))
        else {
            return Ok(Response::redirect(SIGNUP_PAGE));
        };

        if !self.users.insert_new(User::new(account, password, email)) {
            tracing::info!(user = %account, "signup rejected: account taken");
            return Ok(Response::redirect(SIGNUP_PAGE));
        }

        let session_id = self.sessions.create(account)?;
        tracing::info!(user = %account, "signup succeeded");

        Ok(logged_in_response(&session_id))
    }
}
