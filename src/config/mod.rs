//! Configuration module for the school records backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Pre-shared key guarding the API (optional in development)
    pub api_psk: Option<String>,
    /// Directory holding admin_id.json, classes.json and teachers.json
    pub data_dir: PathBuf,
    /// Admin ID written to a fresh data directory that has no admin profile yet
    pub bootstrap_admin_id: Option<String>,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_psk = env::var("SCHOOL_API_PSK").ok();

        let data_dir = env::var("SCHOOL_DATA_DIR")
            .unwrap_or_else(|_| "./data".to_string())
            .into();

        let bootstrap_admin_id = env::var("SCHOOL_ADMIN_ID")
            .ok()
            .filter(|id| !id.trim().is_empty());

        let bind_addr = parse_bind_addr(env::var("SCHOOL_BIND_ADDR").ok());

        let log_level = env::var("SCHOOL_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_json = env::var("SCHOOL_LOG_FORMAT")
            .map(|f| f.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Self {
            api_psk,
            data_dir,
            bootstrap_admin_id,
            bind_addr,
            log_level,
            log_json,
        }
    }
}

fn parse_bind_addr(raw: Option<String>) -> SocketAddr {
    let default: SocketAddr = ([127, 0, 0, 1], 8080).into();
    match raw {
        Some(value) => value.parse().unwrap_or_else(|_| {
            // The subscriber is not installed yet, so this goes to stderr directly.
            eprintln!(
                "Invalid SCHOOL_BIND_ADDR {:?}, falling back to {}",
                value, DEFAULT_BIND_ADDR
            );
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;
    use std::sync::Mutex;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const VARS: [&str; 6] = [
        "SCHOOL_API_PSK",
        "SCHOOL_DATA_DIR",
        "SCHOOL_ADMIN_ID",
        "SCHOOL_BIND_ADDR",
        "SCHOOL_LOG_LEVEL",
        "SCHOOL_LOG_FORMAT",
    ];

    #[test]
    fn test_default_config() {
        let _guard = ENV_LOCK.lock().unwrap();
        for var in VARS {
            env::remove_var(var);
        }

        let config = Config::from_env();

        assert!(config.api_psk.is_none());
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert!(config.bootstrap_admin_id.is_none());
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.log_level, "info");
        assert!(!config.log_json);
    }

    #[test]
    fn test_overrides_and_blank_admin_id() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::set_var("SCHOOL_DATA_DIR", "/srv/school");
        env::set_var("SCHOOL_ADMIN_ID", "   ");
        env::set_var("SCHOOL_BIND_ADDR", "0.0.0.0:9000");
        env::set_var("SCHOOL_LOG_FORMAT", "JSON");

        let config = Config::from_env();

        assert_eq!(config.data_dir, PathBuf::from("/srv/school"));
        assert!(config.bootstrap_admin_id.is_none());
        assert_eq!(config.bind_addr.port(), 9000);
        assert!(config.log_json);

        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_invalid_bind_addr_falls_back() {
        let addr = parse_bind_addr(Some("not-an-address".to_string()));
        assert_eq!(addr.to_string(), DEFAULT_BIND_ADDR);
    }
}
