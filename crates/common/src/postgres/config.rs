use serde::{Deserialize, Serialize};
use std::time::Duration;

/// PostgreSQL configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostgresConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: String,
    pub max_pool_size: usize,
    /// How long a caller waits for a free pooled connection before failing
    pub pool_wait_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    /// Server-side `statement_timeout`; 0 disables it
    pub statement_timeout_ms: u64,
}

impl PostgresConfig {
    pub fn pool_wait_timeout(&self) -> Duration {
        Duration::from_secs(self.pool_wait_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            database: "smart_waste".to_string(),
            username: "smart_waste".to_string(),
            password: "smart_waste".to_string(),
            max_pool_size: 10,
            pool_wait_timeout_secs: 5,
            connect_timeout_secs: 5,
            statement_timeout_ms: 10_000,
        }
    }
}
