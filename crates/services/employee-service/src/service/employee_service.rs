//! Employee service - use cases over the employee repository.
//!
//! Operations forward to the repository unchanged. Whether an empty
//! result is an error is decided at the HTTP edge.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::Employee;

use crate::repository::EmployeeRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Employee service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// List every employee
    async fn get_employees(&self) -> AppResult<Vec<Employee>>;

    /// Get employee by ID, `None` when absent
    async fn get_employee_by_id(&self, id: i32) -> AppResult<Option<Employee>>;

    /// Create employee together with its department and passport
    async fn create_employee(&self, employee: Employee) -> AppResult<Employee>;

    /// Persist a fully merged employee
    async fn update_employee(&self, employee: Employee) -> AppResult<Employee>;

    /// Delete employee, returning the removed row if any
    async fn delete_employee(&self, id: i32) -> AppResult<Option<Employee>>;

    /// List employees of one company
    async fn get_employees_by_company(&self, company_id: i32) -> AppResult<Vec<Employee>>;

    /// List employees of one department
    async fn get_employees_by_department(&self, department_id: i32) -> AppResult<Vec<Employee>>;
}

/// Concrete implementation of EmployeeService using repository.
pub struct EmployeeManager {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeManager {
    /// Create new employee service instance with repository
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl EmployeeService for EmployeeManager {
    async fn get_employees(&self) -> AppResult<Vec<Employee>> {
        tracing::debug!("Listing employees");
        self.repo.list().await
    }

    async fn get_employee_by_id(&self, id: i32) -> AppResult<Option<Employee>> {
        tracing::debug!(employee_id = id, "Fetching employee");
        self.repo.find_by_id(id).await
    }

    async fn create_employee(&self, employee: Employee) -> AppResult<Employee> {
        tracing::debug!(company_id = employee.company_id, "Creating employee");
        self.repo.create(employee).await
    }

    async fn update_employee(&self, employee: Employee) -> AppResult<Employee> {
        tracing::debug!(employee_id = employee.id, "Updating employee");
        self.repo.update(employee).await
    }

    async fn delete_employee(&self, id: i32) -> AppResult<Option<Employee>> {
        tracing::debug!(employee_id = id, "Deleting employee");
        self.repo.delete(id).await
    }

    async fn get_employees_by_company(&self, company_id: i32) -> AppResult<Vec<Employee>> {
        tracing::debug!(company_id, "Listing employees by company");
        self.repo.list_by_company(company_id).await
    }

    async fn get_employees_by_department(&self, department_id: i32) -> AppResult<Vec<Employee>> {
        tracing::debug!(department_id, "Listing employees by department");
        self.repo.list_by_department(department_id).await
    }
}
