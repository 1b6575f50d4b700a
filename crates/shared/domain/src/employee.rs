//! Employee domain entities.
//!
//! Plain records: an employee owns one department and one passport row,
//! and references a company by identifier only.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Department owned by a single employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: i32,
    pub name: String,
    pub phone: String,
}

/// Passport data owned by a single employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passport {
    pub id: i32,
    pub passport_type: String,
    pub number: String,
}

/// Company referenced by employees through `company_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: i32,
    pub name: String,
}

/// Employee domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub company_id: i32,
    /// Absent when the joined department row is missing
    pub department: Option<Department>,
    /// Absent when the joined passport row is missing
    pub passport: Option<Passport>,
}

impl Employee {
    /// Department that must exist before the employee can be persisted
    pub fn require_department(&self) -> DomainResult<&Department> {
        self.department
            .as_ref()
            .ok_or_else(|| DomainError::validation("Department is required"))
    }

    /// Passport that must exist before the employee can be persisted
    pub fn require_passport(&self) -> DomainResult<&Passport> {
        self.passport
            .as_ref()
            .ok_or_else(|| DomainError::validation("Passport is required"))
    }
}
