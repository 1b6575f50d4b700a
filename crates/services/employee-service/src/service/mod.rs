//! Service layer - business logic.

mod employee_service;

pub use employee_service::{EmployeeManager, EmployeeService};

#[cfg(any(test, feature = "test-utils"))]
pub use employee_service::MockEmployeeService;
