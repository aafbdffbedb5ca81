//! API configuration

use serde::Deserialize;

use domain_billing::BalanceLookup;

/// Which ledger store backs the server
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    /// Process-local map, lost on restart
    #[default]
    Memory,
    /// PostgreSQL via `infra_db`
    Postgres,
}

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Ledger store backend
    pub store_backend: StoreBackend,
    /// Database URL, used when `store_backend` is `postgres`
    pub database_url: String,
    /// Log level
    pub log_level: String,
    /// Which account supplies the balance for payment checks
    pub payment_balance_lookup: BalanceLookup,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            store_backend: StoreBackend::Memory,
            database_url: "postgres://localhost/ledger".to_string(),
            log_level: "info".to_string(),
            payment_balance_lookup: BalanceLookup::Sentinel,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_*` environment variables
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
