//! Employee handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use common::{AppError, AppResult, OptionExt};
use domain::Employee;

use crate::dto::{CreatedEmployee, EmployeeDto, EmployeeEditDto};
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Create employee routes
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route(
            "/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .route("/company/:company_id", get(list_by_company))
        .route("/department/:department_id", get(list_by_department))
}

/// List all employees
#[utoipa::path(
    get,
    path = "/api/employee",
    tag = "Employees",
    responses(
        (status = 200, description = "All employees", body = Vec<EmployeeDto>)
    )
)]
pub async fn list_employees(State(state): State<AppState>) -> AppResult<Json<Vec<EmployeeDto>>> {
    let employees = state.employees.get_employees().await?;
    Ok(Json(into_dtos(employees)))
}

/// Get employee by ID
#[utoipa::path(
    get,
    path = "/api/employee/{id}",
    tag = "Employees",
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee with department and passport", body = EmployeeDto),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<EmployeeDto>> {
    let employee = state
        .employees
        .get_employee_by_id(id)
        .await?
        .ok_or_not_found()?;

    Ok(Json(EmployeeDto::from(employee)))
}

/// Create employee with department and passport
#[utoipa::path(
    post,
    path = "/api/employee",
    tag = "Employees",
    request_body = EmployeeDto,
    responses(
        (status = 200, description = "Employee created", body = CreatedEmployee),
        (status = 400, description = "Missing or invalid body")
    )
)]
pub async fn create_employee(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<EmployeeDto>,
) -> AppResult<Json<CreatedEmployee>> {
    let created = state
        .employees
        .create_employee(Employee::from(payload))
        .await?;

    tracing::info!(employee_id = created.id, "Employee created");
    Ok(Json(CreatedEmployee { id: created.id }))
}

/// Update employee; absent fields keep their stored values
#[utoipa::path(
    put,
    path = "/api/employee/{id}",
    tag = "Employees",
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    request_body = EmployeeEditDto,
    responses(
        (status = 200, description = "Updated employee", body = EmployeeDto),
        (status = 400, description = "Invalid body or id mismatch"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<EmployeeEditDto>,
) -> AppResult<Json<EmployeeDto>> {
    if payload.id != id {
        return Err(AppError::bad_request("Path id does not match body id"));
    }

    let mut employee = state
        .employees
        .get_employee_by_id(id)
        .await?
        .ok_or_not_found()?;

    payload.apply_to(&mut employee);

    let updated = state.employees.update_employee(employee).await?;
    Ok(Json(EmployeeDto::from(updated)))
}

/// Delete employee; responds with `null` when nothing was deleted
#[utoipa::path(
    delete,
    path = "/api/employee/{id}",
    tag = "Employees",
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Deleted employee row, or null", body = EmployeeDto)
    )
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Option<EmployeeDto>>> {
    let deleted = state.employees.delete_employee(id).await?;
    Ok(Json(deleted.map(EmployeeDto::from)))
}

/// List employees of a company
#[utoipa::path(
    get,
    path = "/api/employee/company/{company_id}",
    tag = "Employees",
    params(
        ("company_id" = i32, Path, description = "Company ID")
    ),
    responses(
        (status = 200, description = "Employees of the company", body = Vec<EmployeeDto>),
        (status = 404, description = "No employees in the company")
    )
)]
pub async fn list_by_company(
    State(state): State<AppState>,
    Path(company_id): Path<i32>,
) -> AppResult<Json<Vec<EmployeeDto>>> {
    let employees = state.employees.get_employees_by_company(company_id).await?;
    non_empty(employees)
}

/// List employees of a department
#[utoipa::path(
    get,
    path = "/api/employee/department/{department_id}",
    tag = "Employees",
    params(
        ("department_id" = i32, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Employees of the department", body = Vec<EmployeeDto>),
        (status = 404, description = "No employees in the department")
    )
)]
pub async fn list_by_department(
    State(state): State<AppState>,
    Path(department_id): Path<i32>,
) -> AppResult<Json<Vec<EmployeeDto>>> {
    let employees = state
        .employees
        .get_employees_by_department(department_id)
        .await?;
    non_empty(employees)
}

fn non_empty(employees: Vec<Employee>) -> AppResult<Json<Vec<EmployeeDto>>> {
    if employees.is_empty() {
        return Err(AppError::NotFound);
    }
    Ok(Json(into_dtos(employees)))
}

fn into_dtos(employees: Vec<Employee>) -> Vec<EmployeeDto> {
    employees.into_iter().map(EmployeeDto::from).collect()
}
