//! Session token service
//!
//! Issues and verifies the signed tokens stored in the session cookie.

use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::Rng;
use rand::distributions::Alphanumeric;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the operator session cookie
pub const SESSION_COOKIE: &str = "tandoor_session";

/// Session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Signing key (at least 32 bytes)
    pub secret: String,
    /// Fixed session lifetime in minutes; there is no refresh-on-activity
    pub expiry_minutes: i64,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        let secret = match std::env::var("SESSION_SECRET") {
            Ok(s) if s.len() >= 32 => s,
            Ok(_) => {
                tracing::warn!("SESSION_SECRET shorter than 32 chars; generating a temporary key");
                generate_secret()
            }
            Err(_) => {
                tracing::warn!(
                    "SESSION_SECRET not set; generating a temporary key (sessions will not survive a restart)"
                );
                generate_secret()
            }
        };

        Self {
            secret,
            expiry_minutes: std::env::var("SESSION_EXPIRY_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1440), // 24 hours
        }
    }
}

fn generate_secret() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}

/// Claims stored in the session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Operator id (subject)
    pub sub: String,
    /// Operator username
    pub username: String,
    /// Expiry timestamp
    pub exp: i64,
    /// Issued-at timestamp
    pub iat: i64,
}

/// Session token errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session expired")]
    Expired,

    #[error("invalid session token: {0}")]
    Invalid(String),

    #[error("token generation failed: {0}")]
    GenerationFailed(String),
}

/// Session token service
#[derive(Clone)]
pub struct SessionService {
    config: SessionConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl SessionService {
    pub fn with_config(config: SessionConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issue a session token for an authenticated operator
    pub fn issue(&self, user_id: &str, username: &str) -> Result<String, SessionError> {
        let now = Utc::now();
        let expiry = now + Duration::minutes(self.config.expiry_minutes);

        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            exp: expiry.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| SessionError::GenerationFailed(e.to_string()))
    }

    /// Verify and decode a session token
    pub fn verify(&self, token: &str) -> Result<Claims, SessionError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["sub", "exp", "iat"]);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => SessionError::Expired,
                _ => SessionError::Invalid(e.to_string()),
            })?;

        Ok(token_data.claims)
    }

    /// Build the session cookie carrying a freshly issued token.
    ///
    /// Production: `Secure` + `SameSite=None` to tolerate cross-origin
    /// proxying. Development: `Lax` over plain HTTP.
    pub fn build_cookie(&self, token: String, production: bool) -> Cookie<'static> {
        let mut cookie = Cookie::new(SESSION_COOKIE, token);
        cookie.set_path("/");
        cookie.set_http_only(true);
        cookie.set_max_age(time::Duration::minutes(self.config.expiry_minutes));
        if production {
            cookie.set_secure(true);
            cookie.set_same_site(SameSite::None);
        } else {
            cookie.set_secure(false);
            cookie.set_same_site(SameSite::Lax);
        }
        cookie
    }

    /// An immediately-expiring cookie that removes the session on logout
    pub fn clear_cookie(production: bool) -> Cookie<'static> {
        let mut cookie = Cookie::new(SESSION_COOKIE, "");
        cookie.set_path("/");
        cookie.set_http_only(true);
        cookie.set_max_age(time::Duration::ZERO);
        if production {
            cookie.set_secure(true);
            cookie.set_same_site(SameSite::None);
        } else {
            cookie.set_same_site(SameSite::Lax);
        }
        cookie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> SessionService {
        SessionService::with_config(SessionConfig {
            secret: "test-secret-test-secret-test-secret!".to_string(),
            expiry_minutes: 60,
        })
    }

    #[test]
    fn issued_tokens_verify_round_trip() {
        let svc = service();
        let token = svc.issue("user:admin", "admin").unwrap();
        let claims = svc.verify(&token).unwrap();
        assert_eq!(claims.sub, "user:admin");
        assert_eq!(claims.username, "admin");
    }

    #[test]
    fn tampered_tokens_are_rejected() {
        let svc = service();
        let token = svc.issue("user:admin", "admin").unwrap();
        let other = SessionService::with_config(SessionConfig {
            secret: "another-secret-another-secret-another!".to_string(),
            expiry_minutes: 60,
        });
        assert!(matches!(
            other.verify(&token),
            Err(SessionError::Invalid(_))
        ));
    }

    #[test]
    fn expired_tokens_are_rejected() {
        let svc = SessionService::with_config(SessionConfig {
            secret: "test-secret-test-secret-test-secret!".to_string(),
            expiry_minutes: -5,
        });
        let token = svc.issue("user:admin", "admin").unwrap();
        assert!(matches!(svc.verify(&token), Err(SessionError::Expired)));
    }

    #[test]
    fn production_cookie_is_secure_cross_site() {
        let svc = service();
        let cookie = svc.build_cookie("tok".to_string(), true);
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::None));

        let dev = svc.build_cookie("tok".to_string(), false);
        assert_eq!(dev.same_site(), Some(SameSite::Lax));
    }
}
