//! Session cookie handling and the login guards used by handlers.

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_cookies::cookie::{SameSite, time};
use tower_cookies::{Cookie, Cookies};

use crate::domain::Library;
use crate::infrastructure::session::{Flash, FlashKind, SessionData, SessionStore};
use crate::infrastructure::state::AppState;
use crate::models::CurrentUser;

/// Session id resolved by [`session_middleware`] for the current request
#[derive(Debug, Clone)]
pub struct SessionId(pub String);

/// Resolve the caller's session from its signed cookie, or pick a new id.
///
/// New ids are only stored once a handler writes to them, and the cookie is
/// (re)issued whenever the session is stored so `Max-Age` follows activity.
pub async fn session_middleware(
    State(state): State<AppState>,
    cookies: Cookies,
    mut req: Request,
    next: Next,
) -> Response {
    let cookie_name = state.config.session_cookie.clone();
    let id = cookies
        .signed(&state.cookie_key)
        .get(&cookie_name)
        .map(|c| c.value().to_string())
        .filter(|id| state.sessions.resume(id))
        .unwrap_or_else(SessionStore::new_id);

    req.extensions_mut().insert(SessionId(id.clone()));
    let response = next.run(req).await;

    if state.sessions.contains(&id) {
        let max_age = time::Duration::seconds(state.sessions.ttl().num_seconds());
        let cookie = Cookie::build((cookie_name, id))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .max_age(max_age);
        cookies.signed(&state.cookie_key).add(cookie.build());
    }

    response
}

/// Handle to the caller's session data
pub struct Session {
    id: String,
    store: Arc<SessionStore>,
}

#[async_trait]
impl FromRequestParts<AppState> for Session {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let id = parts
            .extensions
            .get::<SessionId>()
            .map(|s| s.0.clone())
            .ok_or_else(|| {
                tracing::error!("Session extractor used on a route without the session layer");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            })?;

        Ok(Self {
            id,
            store: state.sessions.clone(),
        })
    }
}

impl Session {
    pub fn write<R>(&self, f: impl FnOnce(&mut SessionData) -> R) -> R {
        self.store.write(&self.id, f)
    }

    pub fn read<R>(&self, f: impl FnOnce(&SessionData) -> R) -> R {
        self.store.read(&self.id, f)
    }

    pub fn library<R>(&self, f: impl FnOnce(&Library) -> R) -> R {
        self.read(|data| f(&data.library))
    }

    pub fn library_mut<R>(&self, f: impl FnOnce(&mut Library) -> R) -> R {
        self.write(|data| f(&mut data.library))
    }

    pub fn user(&self) -> Option<CurrentUser> {
        self.read(|data| data.user.clone())
    }

    pub fn login(&self, user: CurrentUser) {
        self.write(|data| data.user = Some(user));
    }

    /// Forget the identity; the dataset stays with the session.
    pub fn logout(&self) {
        self.write(|data| data.user = None);
    }

    pub fn flash(&self, kind: FlashKind, message: impl Into<String>) {
        let message = message.into();
        self.write(|data| data.flashes.push(Flash { kind, message }));
    }

    pub fn take_flashes(&self) -> Vec<Flash> {
        self.store.take_flashes(&self.id)
    }
}

/// Any logged-in user. Anonymous callers are sent to the landing page.
pub struct LoggedIn(pub CurrentUser);

#[async_trait]
impl FromRequestParts<AppState> for LoggedIn {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state).await?;
        session
            .user()
            .map(LoggedIn)
            .ok_or_else(|| Redirect::to("/").into_response())
    }
}

/// A logged-in admin. Other users are bounced to the dashboard with a flash.
pub struct AdminUser(pub CurrentUser);

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state).await?;
        match session.user() {
            Some(user) if user.is_admin() => Ok(AdminUser(user)),
            Some(user) => {
                tracing::warn!("User {} tried to reach an admin page", user.id);
                session.flash(FlashKind::Error, "Access denied. Admin privileges required.");
                Err(Redirect::to("/dashboard").into_response())
            }
            None => Err(Redirect::to("/").into_response()),
        }
    }
}
