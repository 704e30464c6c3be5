//! Environment-driven settings
//!
//! Read once at startup and handed down by reference. Only `API_PORT`,
//! `DATABASE_URL` and `JWT_SECRET` are mandatory.

use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Deployment stage, from `APP_ENV`; unknown values fall back to development
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        *self == Self::Production
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        *self == Self::Development
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("production") || s.eq_ignore_ascii_case("prod") {
            Ok(Self::Production)
        } else if s.eq_ignore_ascii_case("staging") {
            Ok(Self::Staging)
        } else if s.eq_ignore_ascii_case("development") || s.eq_ignore_ascii_case("dev") {
            Ok(Self::Development)
        } else {
            Err(())
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `host:port`, ready for `SocketAddr` parsing
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Run the bootstrap schema before serving
    pub auto_migrate: bool,
}

/// Token signing settings; expiries are in seconds
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry: i64,
    pub refresh_token_expiry: i64,
}

#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst: u32,
}

#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    /// Empty means any origin outside production, none in production
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Read the process environment, after loading `.env` if one exists
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key/value source; tests pass a map
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(lookup);

        Ok(Self {
            app: AppSettings {
                name: vars.or("APP_NAME", "blog-server".to_string())?,
                env: vars
                    .raw("APP_ENV")
                    .and_then(|s| s.trim().parse().ok())
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: vars.or("API_HOST", "127.0.0.1".to_string())?,
                port: vars.required("API_PORT")?,
            },
            database: DatabaseConfig {
                url: vars.required("DATABASE_URL")?,
                max_connections: vars.or("DATABASE_MAX_CONNECTIONS", 20)?,
                min_connections: vars.or("DATABASE_MIN_CONNECTIONS", 5)?,
                auto_migrate: vars.flag("DATABASE_AUTO_MIGRATE"),
            },
            jwt: JwtConfig {
                secret: vars.required("JWT_SECRET")?,
                access_token_expiry: vars.or("JWT_ACCESS_TOKEN_EXPIRY", 15 * 60)?,
                refresh_token_expiry: vars.or("JWT_REFRESH_TOKEN_EXPIRY", 7 * 24 * 60 * 60)?,
            },
            rate_limit: RateLimitConfig {
                requests_per_second: vars.or("RATE_LIMIT_REQUESTS_PER_SECOND", 10)?,
                burst: vars.or("RATE_LIMIT_BURST", 50)?,
            },
            cors: CorsConfig {
                allowed_origins: vars.list("CORS_ALLOWED_ORIGINS"),
            },
        })
    }
}

struct Vars<F>(F);

impl<F> Vars<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn raw(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|v| !v.trim().is_empty())
    }

    fn parse<T: FromStr>(key: &'static str, raw: String) -> Result<T, ConfigError> {
        raw.trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw))
    }

    fn required<T: FromStr>(&self, key: &'static str) -> Result<T, ConfigError> {
        let raw = self.raw(key).ok_or(ConfigError::MissingVar(key))?;
        Self::parse(key, raw)
    }

    fn or<T: FromStr>(&self, key: &'static str, default: T) -> Result<T, ConfigError> {
        self.raw(key).map_or(Ok(default), |raw| Self::parse(key, raw))
    }

    fn flag(&self, key: &str) -> bool {
        self.raw(key)
            .is_some_and(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
    }

    fn list(&self, key: &str) -> Vec<String> {
        self.raw(key)
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingVar(&'static str),

    #[error("{0} has an invalid value: {1:?}")]
    InvalidValue(&'static str, String),
}
