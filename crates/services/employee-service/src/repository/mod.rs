//! Repository layer for data access.

pub mod entities;
pub mod projection;
mod employee_repository;

pub use employee_repository::{EmployeeRepository, EmployeeStore};

#[cfg(any(test, feature = "test-utils"))]
pub use employee_repository::MockEmployeeRepository;
