//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::dto::{
    CreatedEmployee, DepartmentDto, DepartmentEditDto, EmployeeDto, EmployeeEditDto, PassportDto,
    PassportEditDto,
};
use crate::handlers::health_handler::{HealthResponse, ServiceHealth, ServiceStatus};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::employee_handler::list_employees,
        crate::handlers::employee_handler::get_employee,
        crate::handlers::employee_handler::create_employee,
        crate::handlers::employee_handler::update_employee,
        crate::handlers::employee_handler::delete_employee,
        crate::handlers::employee_handler::list_by_company,
        crate::handlers::employee_handler::list_by_department,
        crate::handlers::health_handler::health_check,
    ),
    components(
        schemas(
            EmployeeDto,
            PassportDto,
            DepartmentDto,
            EmployeeEditDto,
            PassportEditDto,
            DepartmentEditDto,
            CreatedEmployee,
            HealthResponse,
            ServiceStatus,
            ServiceHealth,
        )
    ),
    tags(
        (name = "Employees", description = "Employee management endpoints"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_employee_path() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/api/employee",
            "/api/employee/{id}",
            "/api/employee/company/{company_id}",
            "/api/employee/department/{department_id}",
            "/health",
        ] {
            assert!(paths.contains(&expected), "missing path {}", expected);
        }
    }
}
