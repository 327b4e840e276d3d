use crate::auth::SessionConfig;

/// Server configuration
///
/// All settings can be overridden through environment variables:
///
/// | Variable | Default | Purpose |
/// |----------|---------|---------|
/// | WORK_DIR | /var/lib/tandoor | Database and log files |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | development \| production |
/// | SESSION_SECRET | (generated in dev) | Session signing key |
/// | SESSION_EXPIRY_MINUTES | 1440 | Session cookie lifetime |
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the embedded database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | production
    pub environment: String,
    /// Session-cookie configuration
    pub session: SessionConfig,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults where unset
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/tandoor".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            session: SessionConfig::from_env(),
        }
    }

    /// Production cookies are `Secure` + `SameSite=None` so the session
    /// survives cross-origin proxying; development uses `Lax` over HTTP.
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Override work dir and port, keeping the rest from the environment.
    /// Used by tests.
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }
}
