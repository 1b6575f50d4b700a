//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod department;
pub mod employee;
pub mod passport;

pub use department::{ActiveModel as DepartmentActiveModel, Entity as DepartmentEntity};
pub use employee::{ActiveModel as EmployeeActiveModel, Entity as EmployeeEntity};
pub use passport::{ActiveModel as PassportActiveModel, Entity as PassportEntity};
