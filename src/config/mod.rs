use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub upstream: UpstreamConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

/// Remote auth/REST API the portal proxies credentials to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub enable_cors: bool,
    pub cors_origins: Vec<String>,
    pub cookie_secure: bool,
    pub session_cookie_days: i64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Upstream overrides
        if let Ok(v) = env::var("UPSTREAM_BASE_URL") {
            self.upstream.base_url = v.trim_end_matches('/').to_string();
        }
        if let Ok(v) = env::var("UPSTREAM_CONNECT_TIMEOUT_SECS") {
            self.upstream.connect_timeout_secs = v.parse().unwrap_or(self.upstream.connect_timeout_secs);
        }
        if let Ok(v) = env::var("UPSTREAM_REQUEST_TIMEOUT_SECS") {
            self.upstream.request_timeout_secs = v.parse().unwrap_or(self.upstream.request_timeout_secs);
        }

        // Security overrides
        if let Ok(v) = env::var("SECURITY_ENABLE_CORS") {
            self.security.enable_cors = v.parse().unwrap_or(self.security.enable_cors);
        }
        if let Ok(v) = env::var("SECURITY_CORS_ORIGINS") {
            self.security.cors_origins = v.split(',').map(|s| s.trim().to_string()).collect();
        }
        if let Ok(v) = env::var("SECURITY_COOKIE_SECURE") {
            self.security.cookie_secure = v.parse().unwrap_or(self.security.cookie_secure);
        }
        if let Ok(v) = env::var("SECURITY_SESSION_COOKIE_DAYS") {
            self.security.session_cookie_days = v.parse().unwrap_or(self.security.session_cookie_days);
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            upstream: UpstreamConfig {
                base_url: "http://localhost:4000/api".to_string(),
                connect_timeout_secs: 5,
                request_timeout_secs: 30,
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec![
                    "http://localhost:3000".to_string(),
                    "http://localhost:5173".to_string(),
                ],
                cookie_secure: false,
                session_cookie_days: 7,
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            upstream: UpstreamConfig {
                base_url: "https://api.staging.example.com/api".to_string(),
                connect_timeout_secs: 5,
                request_timeout_secs: 15,
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["https://portal.staging.example.com".to_string()],
                cookie_secure: true,
                session_cookie_days: 1,
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            upstream: UpstreamConfig {
                base_url: "https://api.example.com/api".to_string(),
                connect_timeout_secs: 3,
                request_timeout_secs: 10,
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["https://portal.example.com".to_string()],
                cookie_secure: true,
                session_cookie_days: 1,
            },
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
