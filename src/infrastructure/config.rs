use std::env;
use std::path::PathBuf;

const DEFAULT_SESSION_TTL_HOURS: i64 = 24 * 7;

/// Longest idle session lifetime accepted from the environment (one year)
pub const MAX_SESSION_TTL_HOURS: i64 = 24 * 365;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub admin_username: String,
    pub admin_password: String,
    pub session_secret: String,
    pub session_ttl_hours: i64,
    pub session_cookie: String,
    pub cors_allowed_origins: Vec<String>,
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup, so tests need not touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let session_secret = lookup("SESSION_SECRET").unwrap_or_else(|| {
            tracing::warn!("SESSION_SECRET not set, sessions will not survive a restart");
            format!("{}{}", uuid::Uuid::new_v4().simple(), uuid::Uuid::new_v4().simple())
        });

        let session_ttl_hours = match lookup("SESSION_TTL_HOURS").and_then(|h| h.parse::<i64>().ok()) {
            Some(h) if h > MAX_SESSION_TTL_HOURS => {
                tracing::warn!(
                    "SESSION_TTL_HOURS={} is too long, capping at {}",
                    h,
                    MAX_SESSION_TTL_HOURS
                );
                MAX_SESSION_TTL_HOURS
            }
            Some(h) if h > 0 => h,
            _ => DEFAULT_SESSION_TTL_HOURS,
        };

        Self {
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            admin_username: lookup("ADMIN_USERNAME").unwrap_or_else(|| "admin".to_string()),
            admin_password: lookup("ADMIN_PASSWORD").unwrap_or_else(|| "123".to_string()),
            session_secret,
            session_ttl_hours,
            session_cookie: lookup("SESSION_COOKIE")
                .unwrap_or_else(|| "library_session".to_string()),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("static")),
        }
    }
}
