// crates/server/src/config.rs
//! Server configuration read from the environment.

use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use hr_intelligence_observability::{LogConfig, LogFormat};

/// Default bind address for the server.
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Default port for the server.
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// HS256 secret for access tokens. `None` disables authentication.
    pub jwt_secret: Option<String>,
    pub log: LogConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            jwt_secret: None,
            log: LogConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable values fall back to
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = lookup("HR_INTELLIGENCE_HOST")
            .and_then(|h| h.trim().parse().ok())
            .unwrap_or(defaults.host);

        let port = lookup("HR_INTELLIGENCE_PORT")
            .or_else(|| lookup("PORT"))
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(defaults.port);

        let jwt_secret = lookup("HR_INTELLIGENCE_JWT_SECRET").filter(|s| !s.is_empty());

        let log = LogConfig {
            format: lookup("HR_INTELLIGENCE_LOG_FORMAT")
                .map(|f| LogFormat::parse(&f))
                .unwrap_or_default(),
            dir: lookup("HR_INTELLIGENCE_LOG_DIR")
                .filter(|d| !d.is_empty())
                .map(PathBuf::from),
            ..defaults.log
        };

        Self {
            host,
            port,
            jwt_secret,
            log,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ServerConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[]);
        assert_eq!(cfg, ServerConfig::default());
        assert_eq!(cfg.port, 8000);
        assert!(cfg.jwt_secret.is_none());
    }

    #[test]
    fn test_port_precedence() {
        assert_eq!(config(&[("PORT", "9000")]).port, 9000);
        assert_eq!(
            config(&[("PORT", "9000"), ("HR_INTELLIGENCE_PORT", "9100")]).port,
            9100
        );
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let cfg = config(&[
            ("HR_INTELLIGENCE_PORT", "not-a-port"),
            ("HR_INTELLIGENCE_HOST", "nowhere"),
        ]);
        assert_eq!(cfg.port, DEFAULT_PORT);
        assert_eq!(cfg.host, DEFAULT_HOST);
    }

    #[test]
    fn test_logging_and_secret() {
        let cfg = config(&[
            ("HR_INTELLIGENCE_HOST", "0.0.0.0"),
            ("HR_INTELLIGENCE_JWT_SECRET", "s3cret"),
            ("HR_INTELLIGENCE_LOG_FORMAT", "json"),
            ("HR_INTELLIGENCE_LOG_DIR", "/var/log/hr"),
        ]);
        assert_eq!(cfg.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(cfg.jwt_secret.as_deref(), Some("s3cret"));
        assert_eq!(cfg.log.format, LogFormat::Json);
        assert_eq!(cfg.log.dir, Some(PathBuf::from("/var/log/hr")));
    }

    #[test]
    fn test_empty_secret_disables_auth() {
        assert!(config(&[("HR_INTELLIGENCE_JWT_SECRET", "")]).jwt_secret.is_none());
    }
}
