//! Employee service configuration.

use std::env;

use common::DatabaseConfig;

/// Employee service configuration.
#[derive(Debug, Clone)]
pub struct EmployeeServiceConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
    /// Apply pending migrations when connecting
    pub run_migrations: bool,
}

impl EmployeeServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = DatabaseConfig::default();

        Self {
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or(defaults.url),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.min_connections),
            },
            run_migrations: env::var("RUN_MIGRATIONS")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }
}

impl Default for EmployeeServiceConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            run_migrations: true,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
