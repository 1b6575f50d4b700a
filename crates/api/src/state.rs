//! Application state for dependency injection.

use std::sync::Arc;

use employee_service_lib::infra::Database;
use employee_service_lib::service::EmployeeService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub employees: Arc<dyn EmployeeService>,
    pub database: Arc<Database>,
}

impl AppState {
    /// Create new app state.
    pub fn new(employees: Arc<dyn EmployeeService>, database: Arc<Database>) -> Self {
        Self {
            employees,
            database,
        }
    }
}
