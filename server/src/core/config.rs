//! Server configuration
//!
//! Every field can be overridden through an environment variable:
//!
//! | Variable | Default | Notes |
//! |----------|---------|-------|
//! | HTTP_PORT | 3000 | HTTP API port |
//! | DB_ENDPOINT | mem:// | `ws://host:port` for a remote store |
//! | DB_USERNAME / DB_PASSWORD | unset | only for remote endpoints |
//! | DB_NAMESPACE | comanda | |
//! | DB_DATABASE | main | |
//! | MESSAGING_GATEWAY_URL | https://graph.facebook.com/v17.0 | |
//! | MESSAGING_PHONE_ID / MESSAGING_ACCESS_TOKEN | unset | messaging off unless BOTH set |
//! | RUST_LOG | info | tracing env filter |
//! | LOG_DIR | unset | daily-rotated file logs when set |

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Store endpoint (`mem://`, `ws://host:port`, ...)
    pub db_endpoint: String,
    pub db_username: Option<String>,
    pub db_password: Option<String>,
    pub db_namespace: String,
    pub db_database: String,
    /// Messaging gateway base URL
    pub messaging_gateway_url: String,
    /// Gateway phone identifier; messaging is disabled when absent
    pub messaging_phone_id: Option<String>,
    /// Gateway access token; messaging is disabled when absent
    pub messaging_access_token: Option<String>,
    /// Optional directory for rotated file logs
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            db_endpoint: std::env::var("DB_ENDPOINT").unwrap_or_else(|_| "mem://".into()),
            db_username: std::env::var("DB_USERNAME").ok(),
            db_password: std::env::var("DB_PASSWORD").ok(),
            db_namespace: std::env::var("DB_NAMESPACE").unwrap_or_else(|_| "comanda".into()),
            db_database: std::env::var("DB_DATABASE").unwrap_or_else(|_| "main".into()),
            messaging_gateway_url: std::env::var("MESSAGING_GATEWAY_URL")
                .unwrap_or_else(|_| "https://graph.facebook.com/v17.0".into()),
            messaging_phone_id: std::env::var("MESSAGING_PHONE_ID").ok(),
            messaging_access_token: std::env::var("MESSAGING_ACCESS_TOKEN").ok(),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Override the fields tests care about
    pub fn with_overrides(db_endpoint: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.db_endpoint = db_endpoint.into();
        config.http_port = http_port;
        // Tests never talk to the messaging gateway
        config.messaging_phone_id = None;
        config.messaging_access_token = None;
        config
    }

    /// Whether both messaging credentials are present
    pub fn messaging_enabled(&self) -> bool {
        self.messaging_phone_id.is_some() && self.messaging_access_token.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_and_disable_messaging() {
        let config = Config::with_overrides("mem://", 4242);
        assert_eq!(config.db_endpoint, "mem://");
        assert_eq!(config.http_port, 4242);
        assert!(!config.messaging_enabled());
    }

    #[test]
    fn messaging_requires_both_credentials() {
        let mut config = Config::with_overrides("mem://", 0);
        config.messaging_phone_id = Some("123".to_string());
        assert!(!config.messaging_enabled());
        config.messaging_access_token = Some("token".to_string());
        assert!(config.messaging_enabled());
    }
}
