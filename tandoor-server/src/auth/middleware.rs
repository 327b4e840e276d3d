//! Authentication middleware
//!
//! Guards the `/api/admin` subtree. Verifies the session cookie and
//! injects [`CurrentUser`] into request extensions.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

use crate::auth::{CurrentUser, SESSION_COOKIE, SessionError};
use crate::core::ServerState;
use crate::utils::AppError;

pub async fn require_operator(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let jar = CookieJar::from_headers(req.headers());
    let token = match jar.get(SESSION_COOKIE) {
        Some(cookie) => cookie.value().to_string(),
        None => {
            tracing::warn!(uri = %req.uri(), "admin request without session cookie");
            return Err(AppError::Unauthorized);
        }
    };

    match state.sessions.verify(&token) {
        Ok(claims) => {
            let user = CurrentUser::from(claims);
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::warn!(error = %e, uri = %req.uri(), "admin session rejected");
            match e {
                SessionError::Expired => Err(AppError::SessionExpired),
                _ => Err(AppError::InvalidSession),
            }
        }
    }
}
