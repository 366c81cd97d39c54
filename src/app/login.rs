use std::sync::Arc;

use crate::app::{INDEX_PAGE, form_fields, logged_in_response};
use crate::app::users::UserStore;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::routing::assets::AssetStore;
use crate::routing::handler::MethodHandler;
use crate::routing::static_files;
use crate::session::SessionStore;

const LOGIN_FAILED_PAGE: &str = "/401.html";

pub struct LoginHandler {
    users: Arc<dyn UserStore>,
    sessions: Arc<dyn SessionStore>,
    assets: Arc<dyn AssetStore>,
}

impl LoginHandler {
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

impl MethodHandler for LoginHandler {
    fn get(&self, request: &Request) -> anyhow::Result<Response> {
        if crate::session::current_identity(request, self.sessions.as_ref()).is_some() {
            return Ok(Response::redirect(INDEX_PAGE));
        }
        Ok(static_files::serve_asset(self.assets.as_ref(), "login.html"))
    }

    fn post(&self, request: &Request) -> anyhow::Result<Response> {
        let form = form_fields(request.body());
        let (Some(account), Some(password)) = (form.get("account"), form.get("password")) else {
            return Ok(Response::redirect(LOGIN_FAILED_PAGE));
        };

        match self.users.find_by_account(account) {
            Some(user) if user.check_password(password) => {
                let session_id = self.sessions.create(user.account())?;
                tracing::info!(user = user.account(), "login succeeded");
                Ok(logged_in_response(&session_id))
            }
            _ => {
                tracing::info!(user = %account, "login rejected");
                Ok(Response::redirect(LOGIN_FAILED_PAGE))
            }
        }
    }
}
