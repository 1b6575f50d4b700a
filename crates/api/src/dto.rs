//! Request and response shapes.
//!
//! Field rules come from `domain::constants`; the `ValidatedJson` extractor
//! checks them before any handler logic runs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use domain::{
    MAX_COMPANY_ID, MAX_NAME_LENGTH, MIN_COMPANY_ID, MIN_NAME_LENGTH, PASSPORT_NUMBER_REGEX,
    PHONE_REGEX,
};

/// Employee as accepted on create and returned on reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    /// Assigned by the database, ignored on create
    #[serde(default)]
    #[schema(example = 1)]
    pub id: i32,
    #[validate(length(
        min = MIN_NAME_LENGTH,
        max = MAX_NAME_LENGTH,
        message = "Name must be between 1 and 50 characters"
    ))]
    #[schema(example = "Ivan")]
    pub name: String,
    #[validate(length(
        min = MIN_NAME_LENGTH,
        max = MAX_NAME_LENGTH,
        message = "Surname must be between 1 and 50 characters"
    ))]
    #[schema(example = "Petrov")]
    pub surname: String,
    #[validate(regex(path = *PHONE_REGEX, message = "Phone must match +7XXXXXXXXXX"))]
    #[schema(example = "+79991234567")]
    pub phone: String,
    #[validate(range(
        min = MIN_COMPANY_ID,
        max = MAX_COMPANY_ID,
        message = "Company id must be between 1 and 5"
    ))]
    #[schema(example = 1)]
    pub company_id: i32,
    #[validate(required(message = "Passport is required"), nested)]
    pub passport: Option<PassportDto>,
    #[validate(required(message = "Department is required"), nested)]
    pub department: Option<DepartmentDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PassportDto {
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Passport type is required"))]
    #[schema(example = "internal")]
    pub passport_type: String,
    #[validate(regex(
        path = *PASSPORT_NUMBER_REGEX,
        message = "Passport number must match NNNN NNNNNN"
    ))]
    #[schema(example = "1234 567890")]
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDto {
    #[validate(length(min = MIN_NAME_LENGTH, message = "Department name is required"))]
    #[schema(example = "Sales")]
    pub name: String,
    #[validate(regex(path = *PHONE_REGEX, message = "Department phone must match +7XXXXXXXXXX"))]
    #[schema(example = "+79990000000")]
    pub phone: String,
}

/// Partial employee update; absent fields keep their stored values
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeEditDto {
    /// Must equal the id in the request path
    #[schema(example = 1)]
    pub id: i32,
    #[validate(length(
        min = MIN_NAME_LENGTH,
        max = MAX_NAME_LENGTH,
        message = "Name must be between 1 and 50 characters"
    ))]
    pub name: Option<String>,
    #[validate(length(
        min = MIN_NAME_LENGTH,
        max = MAX_NAME_LENGTH,
        message = "Surname must be between 1 and 50 characters"
    ))]
    pub surname: Option<String>,
    #[validate(regex(path = *PHONE_REGEX, message = "Phone must match +7XXXXXXXXXX"))]
    pub phone: Option<String>,
    #[validate(range(
        min = MIN_COMPANY_ID,
        max = MAX_COMPANY_ID,
        message = "Company id must be between 1 and 5"
    ))]
    pub company_id: Option<i32>,
    #[validate(nested)]
    pub passport: Option<PassportEditDto>,
    #[validate(nested)]
    pub department: Option<DepartmentEditDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PassportEditDto {
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Passport type is required"))]
    pub passport_type: Option<String>,
    #[validate(regex(
        path = *PASSPORT_NUMBER_REGEX,
        message = "Passport number must match NNNN NNNNNN"
    ))]
    pub number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentEditDto {
    #[validate(length(min = MIN_NAME_LENGTH, message = "Department name is required"))]
    pub name: Option<String>,
    #[validate(regex(path = *PHONE_REGEX, message = "Department phone must match +7XXXXXXXXXX"))]
    pub phone: Option<String>,
}

/// Response body of a successful create
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatedEmployee {
    #[schema(example = 1)]
    pub id: i32,
}
