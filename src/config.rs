/*
 * Responsibility
 * - 環境変数や設定の読み込み (session backend, login path など)
 * - 設定値のバリデーション (不足なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    /// Origin of the backend that serves `GET /api/session`.
    pub session_api_origin: String,
    /// Where to send the client when the session fetch fails.
    pub login_path: String,
    pub session_fetch_timeout_seconds: u64,

    /// Inherited permissive behavior: role checks with no resolvable course
    /// grant by default. Set to `false` to deny instead.
    pub grant_without_course: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();

        let session_api_origin = std::env::var("SESSION_API_ORIGIN")
            .map_err(|_| ConfigError::Missing("SESSION_API_ORIGIN"))?;

        let login_path = std::env::var("LOGIN_PATH").unwrap_or_else(|_| "/login".to_string());
        if !login_path.starts_with('/') {
            return Err(ConfigError::Invalid("LOGIN_PATH"));
        }

        let session_fetch_timeout_seconds = std::env::var("SESSION_FETCH_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(10);

        let grant_without_course = match std::env::var("GRANT_WITHOUT_COURSE") {
            Ok(v) => v
                .parse::<bool>()
                .map_err(|_| ConfigError::Invalid("GRANT_WITHOUT_COURSE"))?,
            Err(_) => true,
        };

        Ok(Self {
            addr,
            app_env,
            session_api_origin,
            login_path,
            session_fetch_timeout_seconds,
            grant_without_course,
        })
    }
}
