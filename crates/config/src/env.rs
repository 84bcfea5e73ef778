use leadlight_common::error::{LeadError, LeadResult};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    /// Loads `.env` file if present, then reads vars with defaults.
    pub fn from_env() -> LeadResult<Self> {
        // Best-effort .env load; ignore if missing
        let _ = dotenvy::dotenv();

        Ok(Self {
            host: get_var_or("HOST", "0.0.0.0"),
            port: get_var_or("PORT", "8080")
                .parse()
                .map_err(|e| LeadError::Config(format!("invalid PORT: {e}")))?,
            log_level: get_var_or("LOG_LEVEL", "info"),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn get_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn config_defaults_apply_without_env() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");

        env::remove_var("HOST");
        env::remove_var("PORT");
        env::remove_var("LOG_LEVEL");

        let cfg = AppConfig::from_env().expect("should parse config");
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn config_reads_port_override() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");

        env::set_var("PORT", "3100");
        let cfg = AppConfig::from_env().expect("should parse config");
        assert_eq!(cfg.port, 3100);
        env::remove_var("PORT");
    }

    #[test]
    fn config_rejects_non_numeric_port() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");

        env::set_var("PORT", "not-a-port");
        let result = AppConfig::from_env();
        assert!(result.is_err());
        env::remove_var("PORT");
    }

    #[test]
    fn bind_addr_formats_correctly() {
        let cfg = AppConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
            log_level: "debug".to_owned(),
        };
        assert_eq!(cfg.bind_addr(), "127.0.0.1:3000");
    }
}
