use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_CONTACT_INBOX: &str = "info@nzinga.ao";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} is not a valid socket address: {value}")]
    InvalidAddr { key: &'static str, value: String },
    #[error("SMTP_HOST is set but {0} is missing")]
    IncompleteSmtp(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SmtpSettings {
    pub host: String,
    pub username: String,
    pub password: String,
    pub from: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// `development` locally, anything else is treated as production.
    pub environment: String,
    pub static_dir: Option<PathBuf>,
    pub sentry_dsn: Option<String>,
    pub contact_inbox: String,
    pub smtp: Option<SmtpSettings>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddr { key: "BIND_ADDR", value: bind_raw.clone() })?;

        let contact_inbox = get("CONTACT_INBOX").unwrap_or_else(|| DEFAULT_CONTACT_INBOX.to_string());

        let smtp = match get("SMTP_HOST") {
            Some(host) => {
                let username = get("SMTP_USERNAME").ok_or(ConfigError::IncompleteSmtp("SMTP_USERNAME"))?;
                let password = get("SMTP_PASSWORD").ok_or(ConfigError::IncompleteSmtp("SMTP_PASSWORD"))?;
                let from = get("SMTP_FROM").unwrap_or_else(|| username.clone());
                Some(SmtpSettings { host, username, password, from })
            }
            None => None,
        };

        Ok(ServerConfig {
            bind_addr,
            environment: get("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            static_dir: get("STATIC_DIR").map(PathBuf::from),
            sentry_dsn: get("SENTRY_DSN"),
            contact_inbox,
            smtp,
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse().unwrap());
        assert_eq!(config.contact_inbox, DEFAULT_CONTACT_INBOX);
        assert!(config.is_development());
        assert!(config.smtp.is_none());
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn smtp_from_falls_back_to_username() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_USERNAME", "site@nzinga.ao"),
            ("SMTP_PASSWORD", "secret"),
        ]))
        .unwrap();
        let smtp = config.smtp.unwrap();
        assert_eq!(smtp.from, "site@nzinga.ao");
        assert_eq!(smtp.host, "smtp.example.com");
    }

    #[test]
    fn partial_smtp_config_is_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[("SMTP_HOST", "smtp.example.com")])).unwrap_err();
        assert!(matches!(err, ConfigError::IncompleteSmtp("SMTP_USERNAME")));
    }

    #[test]
    fn bad_bind_addr_is_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "nope")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAddr { key: "BIND_ADDR", .. }));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = ServerConfig::from_lookup(lookup(&[("STATIC_DIR", "  "), ("ENVIRONMENT", "production")])).unwrap();
        assert!(config.static_dir.is_none());
        assert!(!config.is_development());
    }
}
