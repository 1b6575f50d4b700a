//! Migration: Create departments, passports and employees tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Departments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Departments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Departments::Name).string().not_null())
                    .col(ColumnDef::new(Departments::Phone).string_len(12).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Passports::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Passports::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Passports::Type).string().not_null())
                    .col(ColumnDef::new(Passports::Number).string_len(11).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employees::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employees::Name).string_len(50).not_null())
                    .col(ColumnDef::new(Employees::Surname).string_len(50).not_null())
                    .col(ColumnDef::new(Employees::Phone).string_len(12).not_null())
                    .col(ColumnDef::new(Employees::CompanyId).integer().not_null())
                    .col(ColumnDef::new(Employees::DepartmentId).integer().not_null())
                    .col(ColumnDef::new(Employees::PassportId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employees_department_id")
                            .from(Employees::Table, Employees::DepartmentId)
                            .to(Departments::Table, Departments::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employees_passport_id")
                            .from(Employees::Table, Employees::PassportId)
                            .to(Passports::Table, Passports::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Company and department listings filter on these columns
        manager
            .create_index(
                Index::create()
                    .name("idx_employees_company_id")
                    .table(Employees::Table)
                    .col(Employees::CompanyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_employees_department_id")
                    .table(Employees::Table)
                    .col(Employees::DepartmentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Passports::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Departments::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Employees {
    Table,
    Id,
    Name,
    Surname,
    Phone,
    CompanyId,
    DepartmentId,
    PassportId,
}

#[derive(Iden)]
enum Departments {
    Table,
    Id,
    Name,
    Phone,
}

#[derive(Iden)]
enum Passports {
    Table,
    Id,
    Type,
    Number,
}
