//! Named projection for the employee/department/passport join.
//!
//! Every joined query selects the same aliased columns and decodes them by
//! name into [`EmployeeRow`], so the SQL join order never affects which
//! values land in which nested record.

use sea_orm::{
    EntityTrait, FromQueryResult, JoinType, QueryOrder, QuerySelect, RelationTrait, Select,
};

use domain::{Department, Employee, Passport};

use super::entities::{department, employee, passport, EmployeeEntity};

/// Column aliases used by [`employee_graph`]; each must match a field of [`EmployeeRow`].
pub mod alias {
    pub const EMPLOYEE_ID: &str = "employee_id";
    pub const EMPLOYEE_NAME: &str = "employee_name";
    pub const EMPLOYEE_SURNAME: &str = "employee_surname";
    pub const EMPLOYEE_PHONE: &str = "employee_phone";
    pub const EMPLOYEE_COMPANY_ID: &str = "employee_company_id";
    pub const DEPARTMENT_ID: &str = "department_id";
    pub const DEPARTMENT_NAME: &str = "department_name";
    pub const DEPARTMENT_PHONE: &str = "department_phone";
    pub const PASSPORT_ID: &str = "passport_id";
    pub const PASSPORT_TYPE: &str = "passport_type";
    pub const PASSPORT_NUMBER: &str = "passport_number";
}

/// One flat row of the employee join.
///
/// Department and passport columns are nullable because of the left joins.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct EmployeeRow {
    pub employee_id: i32,
    pub employee_name: String,
    pub employee_surname: String,
    pub employee_phone: String,
    pub employee_company_id: i32,
    pub department_id: Option<i32>,
    pub department_name: Option<String>,
    pub department_phone: Option<String>,
    pub passport_id: Option<i32>,
    pub passport_type: Option<String>,
    pub passport_number: Option<String>,
}

/// Base select for the employee graph: employees left-joined with their
/// department and passport, ordered by employee id.
pub fn employee_graph() -> Select<EmployeeEntity> {
    EmployeeEntity::find()
        .select_only()
        .column_as(employee::Column::Id, alias::EMPLOYEE_ID)
        .column_as(employee::Column::Name, alias::EMPLOYEE_NAME)
        .column_as(employee::Column::Surname, alias::EMPLOYEE_SURNAME)
        .column_as(employee::Column::Phone, alias::EMPLOYEE_PHONE)
        .column_as(employee::Column::CompanyId, alias::EMPLOYEE_COMPANY_ID)
        .column_as(department::Column::Id, alias::DEPARTMENT_ID)
        .column_as(department::Column::Name, alias::DEPARTMENT_NAME)
        .column_as(department::Column::Phone, alias::DEPARTMENT_PHONE)
        .column_as(passport::Column::Id, alias::PASSPORT_ID)
        .column_as(passport::Column::PassportType, alias::PASSPORT_TYPE)
        .column_as(passport::Column::Number, alias::PASSPORT_NUMBER)
        .join(JoinType::LeftJoin, employee::Relation::Department.def())
        .join(JoinType::LeftJoin, employee::Relation::Passport.def())
        .order_by_asc(employee::Column::Id)
}

/// Split a flat row into the employee and its nested records.
impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        let department = match (row.department_id, row.department_name, row.department_phone) {
            (Some(id), Some(name), Some(phone)) => Some(Department { id, name, phone }),
            _ => None,
        };

        let passport = match (row.passport_id, row.passport_type, row.passport_number) {
            (Some(id), Some(passport_type), Some(number)) => Some(Passport {
                id,
                passport_type,
                number,
            }),
            _ => None,
        };

        Employee {
            id: row.employee_id,
            name: row.employee_name,
            surname: row.employee_surname,
            phone: row.employee_phone,
            company_id: row.employee_company_id,
            department,
            passport,
        }
    }
}
