//! Authentication handlers

use std::time::Duration;

use axum::{Json, extract::State};
use axum_extra::extract::cookie::CookieJar;
use shared::models::{LoginRequest, MessageResponse, UserInfo};

use crate::auth::{CurrentUser, SessionService};
use crate::core::ServerState;
use crate::db::models::api_id;
use crate::db::repository::UserRepository;
use crate::utils::{AppError, AppResult};

// Failed logins take the same time whether or not the username exists
const FAILED_LOGIN_DELAY: Duration = Duration::from_millis(250);

/// POST /api/login
pub async fn login(
    State(state): State<ServerState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> AppResult<(CookieJar, Json<UserInfo>)> {
    let repo = UserRepository::new(state.db.clone());
    let user = match repo.find_by_username(&payload.username).await? {
        Some(user) => user,
        None => return Err(failed_login(&payload.username).await),
    };

    let verified = user
        .verify_password(&payload.password)
        .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;
    if !verified {
        return Err(failed_login(&payload.username).await);
    }

    let id = api_id(&user.id);
    let token = state
        .sessions
        .issue(&id, &user.username)
        .map_err(|e| AppError::internal(e.to_string()))?;
    let cookie = state
        .sessions
        .build_cookie(token, state.config.is_production());

    tracing::info!(username = %user.username, "operator logged in");
    Ok((jar.add(cookie), Json(user.into())))
}

async fn failed_login(username: &str) -> AppError {
    tracing::warn!(username = %username, "failed login attempt");
    tokio::time::sleep(FAILED_LOGIN_DELAY).await;
    AppError::invalid_credentials()
}

/// POST /api/logout
pub async fn logout(
    State(state): State<ServerState>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    let cookie = SessionService::clear_cookie(state.config.is_production());
    (
        jar.add(cookie),
        Json(MessageResponse {
            message: "Logged out".to_string(),
        }),
    )
}

/// GET /api/user
pub async fn current_user(user: CurrentUser) -> Json<UserInfo> {
    Json(UserInfo {
        id: user.id,
        username: user.username,
    })
}
