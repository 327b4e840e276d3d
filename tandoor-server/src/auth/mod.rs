//! Session-cookie authentication
//!
//! The operator session is a signed HS256 token (argon2-verified login)
//! carried in an HTTP-only cookie with a fixed 24-hour expiry. Admin
//! routes are guarded by [`middleware::require_operator`]; individual
//! handlers use the [`CurrentUser`] extractor.

pub mod extractor;
pub mod middleware;
pub mod session;

pub use session::{Claims, SESSION_COOKIE, SessionConfig, SessionError, SessionService};

/// Authenticated operator, injected into request extensions after the
/// session cookie is verified
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: String,
    pub username: String,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            username: claims.username,
        }
    }
}
