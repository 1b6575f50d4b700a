//! Domain layer - Core employee entities and field rules.
//!
//! This crate contains pure domain types with no infrastructure dependencies.
//! It is shared by the employee service and the HTTP API.

pub mod constants;
pub mod employee;
pub mod error;

pub use constants::*;
pub use employee::{Company, Department, Employee, Passport};
pub use error::{DomainError, DomainResult};
