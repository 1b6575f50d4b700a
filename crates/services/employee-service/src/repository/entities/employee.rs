//! Employee database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Employee;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub company_id: i32,
    pub department_id: i32,
    pub passport_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DepartmentId",
        to = "super::department::Column::Id"
    )]
    Department,
    #[sea_orm(
        belongs_to = "super::passport::Entity",
        from = "Column::PassportId",
        to = "super::passport::Column::Id"
    )]
    Passport,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::passport::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Passport.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert a bare employee row to a domain entity without nested records
impl From<Model> for Employee {
    fn from(model: Model) -> Self {
        Employee {
            id: model.id,
            name: model.name,
            surname: model.surname,
            phone: model.phone,
            company_id: model.company_id,
            department: None,
            passport: None,
        }
    }
}
