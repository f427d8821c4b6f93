use std::env;
use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout_ms: u64,
    pub log_level: String,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    /// Loads `.env` file if present, then reads required vars.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_process_env()
    }

    /// Reads the process environment only, without consulting `.env`.
    pub fn from_process_env() -> Result<Self, ConfigError> {
        let api_key = get_var("GEMINI_API_KEY")?;

        let port = get_var_or("PORT", "5001")
            .parse::<u16>()
            .map_err(|e| ConfigError::Invalid {
                var: "PORT",
                reason: e.to_string(),
            })?;

        let timeout_ms = get_var_or("MODEL_TIMEOUT_MS", "30000")
            .parse::<u64>()
            .map_err(|e| ConfigError::Invalid {
                var: "MODEL_TIMEOUT_MS",
                reason: e.to_string(),
            })?;

        Ok(Self {
            host: get_var_or("HOST", "0.0.0.0"),
            port,
            api_key,
            model: get_var_or("GEMINI_MODEL", DEFAULT_MODEL),
            base_url: get_var_or("GEMINI_BASE_URL", DEFAULT_BASE_URL),
            timeout_ms,
            log_level: get_var_or("LOG_LEVEL", "info"),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn get_var(key: &'static str) -> Result<String, ConfigError> {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}

fn get_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_optional_vars() {
        for key in [
            "PORT",
            "HOST",
            "GEMINI_MODEL",
            "GEMINI_BASE_URL",
            "MODEL_TIMEOUT_MS",
            "LOG_LEVEL",
        ] {
            env::remove_var(key);
        }
    }

    fn sample() -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
            api_key: "super-secret-key".to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_ms: 1_000,
            log_level: "debug".to_owned(),
        }
    }

    #[test]
    fn from_process_env_applies_defaults() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        clear_optional_vars();
        env::set_var("GEMINI_API_KEY", "test-key");

        let cfg = AppConfig::from_process_env().expect("should parse config");
        assert_eq!(cfg.api_key, "test-key");
        assert_eq!(cfg.port, 5001);
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.model, DEFAULT_MODEL);
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.timeout(), Duration::from_secs(30));
        assert_eq!(cfg.log_level, "info");

        env::remove_var("GEMINI_API_KEY");
    }

    #[test]
    fn from_process_env_fails_without_api_key() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        env::remove_var("GEMINI_API_KEY");

        let err = AppConfig::from_process_env().unwrap_err();
        assert!(matches!(err, ConfigError::Missing("GEMINI_API_KEY")));
    }

    #[test]
    fn from_process_env_treats_blank_api_key_as_missing() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        env::set_var("GEMINI_API_KEY", "   ");

        assert!(AppConfig::from_process_env().is_err());

        env::remove_var("GEMINI_API_KEY");
    }

    #[test]
    fn from_process_env_rejects_bad_port() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        clear_optional_vars();
        env::set_var("GEMINI_API_KEY", "test-key");
        env::set_var("PORT", "not-a-port");

        let err = AppConfig::from_process_env().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));

        env::remove_var("PORT");
        env::remove_var("GEMINI_API_KEY");
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let rendered = format!("{:?}", sample());
        assert!(!rendered.contains("super-secret-key"));
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("127.0.0.1"));
    }

    #[test]
    fn bind_addr_formats_correctly() {
        assert_eq!(sample().bind_addr(), "127.0.0.1:3000");
    }
}
