//! Employee repository implementation.
//!
//! Reads go through the named join projection in [`super::projection`].
//! Creates and updates fan out over three tables inside one transaction.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    sea_query::{Query, SimpleExpr},
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, NotSet, QueryFilter, Set, Unchanged,
};

use common::{AppError, AppResult};
use domain::{Department, Employee, Passport};

use super::entities::{
    employee, DepartmentActiveModel, EmployeeActiveModel, EmployeeEntity, PassportActiveModel,
};
use super::projection::{employee_graph, EmployeeRow};
use crate::infra::transaction;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Employee repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// List every employee with department and passport attached
    async fn list(&self) -> AppResult<Vec<Employee>>;

    /// List employees of one company
    async fn list_by_company(&self, company_id: i32) -> AppResult<Vec<Employee>>;

    /// List employees of one department
    async fn list_by_department(&self, department_id: i32) -> AppResult<Vec<Employee>>;

    /// Find employee by ID with department and passport attached
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Employee>>;

    /// Insert a new department, passport and employee row
    async fn create(&self, employee: Employee) -> AppResult<Employee>;

    /// Replace employee, passport and department fields
    async fn update(&self, employee: Employee) -> AppResult<Employee>;

    /// Delete the employee row, returning it if it existed
    async fn delete(&self, id: i32) -> AppResult<Option<Employee>>;
}

/// Concrete implementation of EmployeeRepository backed by SeaORM
pub struct EmployeeStore {
    db: Arc<DatabaseConnection>,
}

impl EmployeeStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn select_graph(&self, filter: Option<SimpleExpr>) -> AppResult<Vec<Employee>> {
        let mut query = employee_graph();
        if let Some(condition) = filter {
            query = query.filter(condition);
        }

        let rows = query
            .into_model::<EmployeeRow>()
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn list(&self) -> AppResult<Vec<Employee>> {
        self.select_graph(None).await
    }

    async fn list_by_company(&self, company_id: i32) -> AppResult<Vec<Employee>> {
        self.select_graph(Some(employee::Column::CompanyId.eq(company_id)))
            .await
    }

    async fn list_by_department(&self, department_id: i32) -> AppResult<Vec<Employee>> {
        self.select_graph(Some(employee::Column::DepartmentId.eq(department_id)))
            .await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Employee>> {
        let row = employee_graph()
            .filter(employee::Column::Id.eq(id))
            .into_model::<EmployeeRow>()
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(row.map(Employee::from))
    }

    async fn create(&self, employee: Employee) -> AppResult<Employee> {
        // Reject before any statement runs
        let department = employee.require_department()?.clone();
        let passport = employee.require_passport()?.clone();

        let created = transaction(self.db.as_ref(), move |txn| {
            Box::pin(async move { insert_graph(txn, employee, department, passport).await })
        })
        .await?;

        tracing::debug!(employee_id = created.id, "Employee created");
        Ok(created)
    }

    async fn update(&self, employee: Employee) -> AppResult<Employee> {
        let id = employee.id;

        let updated = transaction(self.db.as_ref(), move |txn| {
            Box::pin(async move { update_graph(txn, employee).await })
        })
        .await?;

        tracing::debug!(employee_id = id, "Employee updated");
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> AppResult<Option<Employee>> {
        // Department and passport rows are left in place
        let query = Query::delete()
            .from_table(EmployeeEntity)
            .and_where(employee::Column::Id.eq(id))
            .returning_all()
            .to_owned();
        let statement = self.db.get_database_backend().build(&query);

        let deleted = EmployeeEntity::find()
            .from_raw_sql(statement)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        tracing::debug!(employee_id = id, deleted = deleted.is_some(), "Employee delete");
        Ok(deleted.map(Employee::from))
    }
}

/// Insert department, then passport, then the employee row linking both.
async fn insert_graph<C: ConnectionTrait>(
    conn: &C,
    employee: Employee,
    department: Department,
    passport: Passport,
) -> AppResult<Employee> {
    let department = DepartmentActiveModel {
        id: NotSet,
        name: Set(department.name),
        phone: Set(department.phone),
    }
    .insert(conn)
    .await?;

    let passport = PassportActiveModel {
        id: NotSet,
        passport_type: Set(passport.passport_type),
        number: Set(passport.number),
    }
    .insert(conn)
    .await?;

    let model = EmployeeActiveModel {
        id: NotSet,
        name: Set(employee.name),
        surname: Set(employee.surname),
        phone: Set(employee.phone),
        company_id: Set(employee.company_id),
        department_id: Set(department.id),
        passport_id: Set(passport.id),
    }
    .insert(conn)
    .await?;

    let mut created = Employee::from(model);
    created.department = Some(Department::from(department));
    created.passport = Some(Passport::from(passport));
    Ok(created)
}

/// Update the employee row, then its passport and department rows.
async fn update_graph<C: ConnectionTrait>(conn: &C, employee: Employee) -> AppResult<Employee> {
    let model = EmployeeActiveModel {
        id: Unchanged(employee.id),
        name: Set(employee.name),
        surname: Set(employee.surname),
        phone: Set(employee.phone),
        company_id: Set(employee.company_id),
        department_id: NotSet,
        passport_id: NotSet,
    }
    .update(conn)
    .await
    .map_err(not_found_if_missing)?;

    let passport = match employee.passport {
        Some(passport) => Some(
            PassportActiveModel {
                id: Unchanged(passport.id),
                passport_type: Set(passport.passport_type),
                number: Set(passport.number),
            }
            .update(conn)
            .await
            .map_err(not_found_if_missing)?,
        ),
        None => None,
    };

    let department = match employee.department {
        Some(department) => Some(
            DepartmentActiveModel {
                id: Unchanged(department.id),
                name: Set(department.name),
                phone: Set(department.phone),
            }
            .update(conn)
            .await
            .map_err(not_found_if_missing)?,
        ),
        None => None,
    };

    let mut updated = Employee::from(model);
    updated.passport = passport.map(Passport::from);
    updated.department = department.map(Department::from);
    Ok(updated)
}

/// An update that matched no row means the record is gone.
fn not_found_if_missing(err: DbErr) -> AppError {
    match err {
        DbErr::RecordNotUpdated => AppError::NotFound,
        other => AppError::from(other),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use sea_orm::{DatabaseBackend, MockDatabase, Statement, Transaction, Value};

    use super::*;
    use crate::repository::entities::{department, passport};

    fn store(mock: MockDatabase) -> EmployeeStore {
        EmployeeStore::new(Arc::new(mock.into_connection()))
    }

    fn transaction_log(repo: EmployeeStore) -> Vec<Transaction> {
        Arc::try_unwrap(repo.db)
            .unwrap_or_else(|_| panic!("connection still shared"))
            .into_transaction_log()
    }

    fn sqls(transaction: &Transaction) -> Vec<&str> {
        transaction.statements().iter().map(|s| s.sql.as_str()).collect()
    }

    fn only_statement(repo: EmployeeStore) -> Statement {
        let log = transaction_log(repo);
        assert_eq!(log.len(), 1);
        let statements = log[0].statements();
        assert_eq!(statements.len(), 1);
        statements[0].clone()
    }

    fn joined_row(id: i32, company_id: i32) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([
            ("employee_id", Value::from(id)),
            ("employee_name", Value::from("Ivan")),
            ("employee_surname", Value::from("Petrov")),
            ("employee_phone", Value::from("+79991112233")),
            ("employee_company_id", Value::from(company_id)),
            ("department_id", Value::from(Some(id + 100))),
            ("department_name", Value::from(Some("Sales".to_string()))),
            ("department_phone", Value::from(Some("+79990000000".to_string()))),
            ("passport_id", Value::from(Some(id + 200))),
            ("passport_type", Value::from(Some("internal".to_string()))),
            ("passport_number", Value::from(Some("1234 567890".to_string()))),
        ])
    }

    fn employee_model(id: i32) -> employee::Model {
        employee::Model {
            id,
            name: "Ivan".to_string(),
            surname: "Petrov".to_string(),
            phone: "+79991112233".to_string(),
            company_id: 2,
            department_id: 11,
            passport_id: 21,
        }
    }

    fn department_model() -> department::Model {
        department::Model {
            id: 11,
            name: "Sales".to_string(),
            phone: "+79991112233".to_string(),
        }
    }

    fn passport_model() -> passport::Model {
        passport::Model {
            id: 21,
            passport_type: "internal".to_string(),
            number: "1234 567890".to_string(),
        }
    }

    fn new_employee() -> Employee {
        Employee {
            id: 0,
            name: "Ivan".to_string(),
            surname: "Petrov".to_string(),
            phone: "+79991112233".to_string(),
            company_id: 2,
            department: Some(Department {
                id: 0,
                name: "Sales".to_string(),
                phone: "+79991112233".to_string(),
            }),
            passport: Some(Passport {
                id: 0,
                passport_type: "internal".to_string(),
                number: "1234 567890".to_string(),
            }),
        }
    }

    #[tokio::test]
    async fn list_reconstructs_nested_records_per_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![joined_row(1, 2), joined_row(2, 3)]])
            .into_connection();
        let repo = EmployeeStore::new(Arc::new(db));

        let employees = repo.list().await.unwrap();

        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].id, 1);
        assert_eq!(employees[0].department.as_ref().unwrap().id, 101);
        assert_eq!(employees[1].passport.as_ref().unwrap().id, 202);
        assert_eq!(employees[1].company_id, 3);
    }

    #[tokio::test]
    async fn find_by_id_returns_none_without_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<BTreeMap<&'static str, Value>>::new()])
            .into_connection();
        let repo = EmployeeStore::new(Arc::new(db));

        let found = repo.find_by_id(42).await.unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn find_by_id_filters_on_employee_id() {
        let repo = store(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<BTreeMap<&'static str, Value>>::new()]),
        );

        repo.find_by_id(9).await.unwrap();

        let statement = only_statement(repo);
        assert!(statement.sql.contains(r#"WHERE "employees"."id" = $1"#));
        assert_eq!(statement.values.unwrap().0[0], Value::from(9));
    }

    #[tokio::test]
    async fn list_by_company_filters_on_company_id() {
        let repo = store(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![joined_row(1, 3)]]),
        );

        let employees = repo.list_by_company(3).await.unwrap();
        assert_eq!(employees[0].company_id, 3);

        let statement = only_statement(repo);
        assert!(statement.sql.contains(r#"WHERE "employees"."company_id" = $1"#));
        assert_eq!(statement.values.unwrap().0[0], Value::from(3));
    }

    #[tokio::test]
    async fn list_by_department_filters_on_department_id() {
        let repo = store(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<BTreeMap<&'static str, Value>>::new()]),
        );

        assert!(repo.list_by_department(7).await.unwrap().is_empty());

        let statement = only_statement(repo);
        assert!(statement.sql.contains(r#"WHERE "employees"."department_id" = $1"#));
        assert_eq!(statement.values.unwrap().0[0], Value::from(7));
    }

    #[tokio::test]
    async fn list_has_no_filter() {
        let repo = store(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<BTreeMap<&'static str, Value>>::new()]),
        );

        repo.list().await.unwrap();

        assert!(!only_statement(repo).sql.contains("WHERE"));
    }

    #[tokio::test]
    async fn find_by_id_returns_first_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![joined_row(7, 1)]])
            .into_connection();
        let repo = EmployeeStore::new(Arc::new(db));

        let found = repo.find_by_id(7).await.unwrap().expect("employee");

        assert_eq!(found.id, 7);
        assert_eq!(found.passport.unwrap().number, "1234 567890");
    }

    #[tokio::test]
    async fn create_links_generated_department_and_passport_ids() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![department_model()]])
            .append_query_results([vec![passport_model()]])
            .append_query_results([vec![employee_model(5)]])
            .into_connection();
        let repo = EmployeeStore::new(Arc::new(db));

        let created = repo.create(new_employee()).await.unwrap();

        assert_eq!(created.id, 5);
        assert_eq!(created.department.unwrap().id, 11);
        assert_eq!(created.passport.unwrap().id, 21);
    }

    #[tokio::test]
    async fn create_without_passport_is_rejected_before_any_statement() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let repo = EmployeeStore::new(Arc::new(db));

        let mut employee = new_employee();
        employee.passport = None;

        let result = repo.create(employee).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn create_rolls_back_when_a_later_insert_fails() {
        let repo = store(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![department_model()]])
                .append_query_errors([DbErr::Custom("passport insert failed".to_string())]),
        );

        let result = repo.create(new_employee()).await;
        assert!(matches!(result, Err(AppError::Database(_))));

        let log = transaction_log(repo);
        assert_eq!(log.len(), 1);
        let sqls = sqls(&log[0]);
        assert_eq!(sqls.len(), 4);
        assert_eq!(sqls[0], "BEGIN");
        assert!(sqls[1].starts_with(r#"INSERT INTO "departments""#));
        assert!(sqls[2].starts_with(r#"INSERT INTO "passports""#));
        assert_eq!(sqls[3], "ROLLBACK");
        assert!(!sqls.contains(&"COMMIT"));
        assert!(!sqls.iter().any(|sql| sql.contains(r#"INSERT INTO "employees""#)));
    }

    #[tokio::test]
    async fn create_commits_all_three_inserts_in_one_transaction() {
        let repo = store(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![department_model()]])
                .append_query_results([vec![passport_model()]])
                .append_query_results([vec![employee_model(5)]]),
        );

        repo.create(new_employee()).await.unwrap();

        let log = transaction_log(repo);
        assert_eq!(log.len(), 1);
        let sqls = sqls(&log[0]);
        assert_eq!(sqls.first(), Some(&"BEGIN"));
        assert!(sqls[3].starts_with(r#"INSERT INTO "employees""#));
        assert_eq!(sqls.last(), Some(&"COMMIT"));
    }

    #[tokio::test]
    async fn update_composes_three_updated_rows() {
        let mut updated_passport = passport_model();
        updated_passport.number = "4321 098765".to_string();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![employee_model(5)]])
            .append_query_results([vec![updated_passport]])
            .append_query_results([vec![department_model()]])
            .into_connection();
        let repo = EmployeeStore::new(Arc::new(db));

        let mut employee = new_employee();
        employee.id = 5;

        let updated = repo.update(employee).await.unwrap();

        assert_eq!(updated.id, 5);
        assert_eq!(updated.passport.unwrap().number, "4321 098765");
        assert_eq!(updated.department.unwrap().name, "Sales");
    }

    #[tokio::test]
    async fn update_rolls_back_when_passport_update_fails() {
        let repo = store(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![employee_model(5)]])
                .append_query_errors([DbErr::Custom("passport update failed".to_string())]),
        );

        let mut employee = new_employee();
        employee.id = 5;

        let result = repo.update(employee).await;
        assert!(matches!(result, Err(AppError::Database(_))));

        let log = transaction_log(repo);
        assert_eq!(log.len(), 1);
        let sqls = sqls(&log[0]);
        assert_eq!(sqls.len(), 4);
        assert_eq!(sqls[0], "BEGIN");
        assert!(sqls[1].starts_with(r#"UPDATE "employees""#));
        assert!(sqls[2].starts_with(r#"UPDATE "passports""#));
        assert_eq!(sqls[3], "ROLLBACK");
        assert!(!sqls.contains(&"COMMIT"));
        assert!(!sqls.iter().any(|sql| sql.contains(r#"UPDATE "departments""#)));
    }

    #[tokio::test]
    async fn update_of_missing_employee_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<employee::Model>::new()])
            .into_connection();
        let repo = EmployeeStore::new(Arc::new(db));

        let result = repo.update(new_employee()).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn delete_returns_the_removed_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![employee_model(9)]])
            .into_connection();
        let repo = EmployeeStore::new(Arc::new(db));

        let deleted = repo.delete(9).await.unwrap().expect("deleted row");

        assert_eq!(deleted.id, 9);
        assert!(deleted.department.is_none());
        assert!(deleted.passport.is_none());
    }

    #[tokio::test]
    async fn delete_of_missing_employee_returns_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<employee::Model>::new()])
            .into_connection();
        let repo = EmployeeStore::new(Arc::new(db));

        assert!(repo.delete(404).await.unwrap().is_none());
    }
}
