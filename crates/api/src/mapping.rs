//! Conversions between transfer shapes and domain entities.
//!
//! Transfer shapes carry no nested ids, so nested records map to id `0`
//! on the way in and drop their id on the way out.

use domain::{Department, Employee, Passport};

use crate::dto::{
    DepartmentDto, DepartmentEditDto, EmployeeDto, EmployeeEditDto, PassportDto, PassportEditDto,
};

impl From<EmployeeDto> for Employee {
    fn from(dto: EmployeeDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            surname: dto.surname,
            phone: dto.phone,
            company_id: dto.company_id,
            department: dto.department.map(Department::from),
            passport: dto.passport.map(Passport::from),
        }
    }
}

impl From<Employee> for EmployeeDto {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            surname: employee.surname,
            phone: employee.phone,
            company_id: employee.company_id,
            passport: employee.passport.map(PassportDto::from),
            department: employee.department.map(DepartmentDto::from),
        }
    }
}

impl From<PassportDto> for Passport {
    fn from(dto: PassportDto) -> Self {
        Self {
            id: 0,
            passport_type: dto.passport_type,
            number: dto.number,
        }
    }
}

impl From<Passport> for PassportDto {
    fn from(passport: Passport) -> Self {
        Self {
            passport_type: passport.passport_type,
            number: passport.number,
        }
    }
}

impl From<DepartmentDto> for Department {
    fn from(dto: DepartmentDto) -> Self {
        Self {
            id: 0,
            name: dto.name,
            phone: dto.phone,
        }
    }
}

impl From<Department> for DepartmentDto {
    fn from(department: Department) -> Self {
        Self {
            name: department.name,
            phone: department.phone,
        }
    }
}

impl EmployeeEditDto {
    /// Merge present fields into `employee`, leaving absent ones untouched.
    pub fn apply_to(self, employee: &mut Employee) {
        if let Some(name) = self.name {
            employee.name = name;
        }
        if let Some(surname) = self.surname {
            employee.surname = surname;
        }
        if let Some(phone) = self.phone {
            employee.phone = phone;
        }
        if let Some(company_id) = self.company_id {
            employee.company_id = company_id;
        }
        // Nested edits only touch records that already exist
        if let (Some(edit), Some(passport)) = (self.passport, employee.passport.as_mut()) {
            edit.apply_to(passport);
        }
        if let (Some(edit), Some(department)) = (self.department, employee.department.as_mut()) {
            edit.apply_to(department);
        }
    }
}

impl PassportEditDto {
    pub fn apply_to(self, passport: &mut Passport) {
        if let Some(passport_type) = self.passport_type {
            passport.passport_type = passport_type;
        }
        if let Some(number) = self.number {
            passport.number = number;
        }
    }
}

impl DepartmentEditDto {
    pub fn apply_to(self, department: &mut Department) {
        if let Some(name) = self.name {
            department.name = name;
        }
        if let Some(phone) = self.phone {
            department.phone = phone;
        }
    }
}
