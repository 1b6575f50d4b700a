//! Domain-level constants.
//!
//! These constants define the field rules every employee record must satisfy.
//! Transfer shapes reference them from their validation attributes.

use once_cell::sync::Lazy;
use regex::Regex;

// =============================================================================
// Names
// =============================================================================

/// Minimum length of a name, surname or department name
pub const MIN_NAME_LENGTH: u64 = 1;

/// Maximum length of an employee name or surname
pub const MAX_NAME_LENGTH: u64 = 50;

// =============================================================================
// Phones
// =============================================================================

/// Phone format: `+7` followed by exactly ten digits
pub const PHONE_PATTERN: &str = r"^\+7\d{10}$";

/// Compiled phone pattern
pub static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(PHONE_PATTERN).expect("phone pattern is a valid regex"));

/// Check if a phone number matches `+7XXXXXXXXXX`
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

// =============================================================================
// Companies
// =============================================================================

/// Lowest company identifier accepted on employee records
pub const MIN_COMPANY_ID: i32 = 1;

/// Highest company identifier accepted on employee records
pub const MAX_COMPANY_ID: i32 = 5;

/// Check if a company identifier is within the accepted range
pub fn is_valid_company_id(company_id: i32) -> bool {
    (MIN_COMPANY_ID..=MAX_COMPANY_ID).contains(&company_id)
}

// =============================================================================
// Passports
// =============================================================================

/// Passport number format: four digits, a space, six digits
pub const PASSPORT_NUMBER_PATTERN: &str = r"^\d{4} \d{6}$";

/// Compiled passport number pattern
pub static PASSPORT_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(PASSPORT_NUMBER_PATTERN).expect("passport number pattern is a valid regex")
});

/// Check if a passport number matches `NNNN NNNNNN`
pub fn is_valid_passport_number(number: &str) -> bool {
    PASSPORT_NUMBER_REGEX.is_match(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_accepts_plus_seven_and_ten_digits() {
        assert!(is_valid_phone("+79991234567"));
    }

    #[test]
    fn phone_rejects_other_formats() {
        assert!(!is_valid_phone("89991234567"));
        assert!(!is_valid_phone("+7999123456"));
        assert!(!is_valid_phone("+799912345678"));
        assert!(!is_valid_phone(" +79991234567"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn passport_number_accepts_four_space_six() {
        assert!(is_valid_passport_number("1234 567890"));
    }

    #[test]
    fn passport_number_rejects_misplaced_space() {
        assert!(!is_valid_passport_number("123 4567890"));
        assert!(!is_valid_passport_number("12345 67890"));
        assert!(!is_valid_passport_number("1234567890"));
        assert!(!is_valid_passport_number("1234 56789a"));
    }

    #[test]
    fn company_id_range_is_inclusive() {
        assert!(!is_valid_company_id(0));
        assert!(is_valid_company_id(1));
        assert!(is_valid_company_id(5));
        assert!(!is_valid_company_id(6));
    }
}
