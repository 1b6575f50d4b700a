//! API configuration.

use common::ServiceConfig;
use employee_service_lib::config::EmployeeServiceConfig;

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone, Default)]
pub struct ApiConfig {
    /// Bind address and logging settings
    pub server: ServiceConfig,
    /// Database settings for the embedded employee service
    pub employees: EmployeeServiceConfig,
}

impl ApiConfig {
    /// Load configuration from environment variables, binding to `host:port`.
    pub fn from_env(host: &str, port: u16) -> Self {
        Self {
            server: ServiceConfig {
                host: host.to_string(),
                port,
                ..ServiceConfig::default()
            },
            employees: EmployeeServiceConfig::from_env(),
        }
    }
}
