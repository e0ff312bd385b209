use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub smtp: SmtpConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmtpConfig {
    /// Address of the outbound relay, host:port
    pub relay_addr: String,
    /// Envelope sender for all outgoing mail
    pub from_address: String,
    /// Display name used in the From header
    pub from_name: String,
    /// Hard ceiling on one transport call, in seconds
    pub send_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    pub database_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::CourierError::Config(e.to_string()))?;

        toml::from_str(&content)
            .map_err(|e| crate::error::CourierError::Config(e.to_string()))
    }

    pub fn default() -> Self {
        Self {
            smtp: SmtpConfig {
                relay_addr: "127.0.0.1:2525".to_string(),
                from_address: "sales@localhost".to_string(),
                from_name: "Sales Team".to_string(),
                send_timeout_secs: 30,
            },
            storage: StorageConfig {
                database_url: "sqlite://courier.db".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.smtp.relay_addr, "127.0.0.1:2525");
        assert_eq!(config.smtp.send_timeout_secs, 30);
        assert_eq!(config.storage.database_url, "sqlite://courier.db");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[smtp]
relay_addr = "mail.internal:25"
from_address = "sales@example.com"
from_name = "Wholesale Desk"
send_timeout_secs = 10

[storage]
database_url = "sqlite::memory:"

[logging]
level = "debug"
format = "json"
"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.smtp.relay_addr, "mail.internal:25");
        assert_eq!(config.smtp.from_name, "Wholesale Desk");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_from_file_missing() {
        let result = Config::from_file("/nonexistent/config.toml");
        assert!(result.is_err());
    }
}
