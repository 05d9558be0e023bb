use super::*;
use chrono::{TimeZone, Utc};

fn valid_fields() -> FormFields {
    FormFields {
        name: "Jane Doe".to_owned(),
        email: "jane@corp.test".to_owned(),
        position: "Engineer".to_owned(),
        department: "Engineering".to_owned(),
        salary: "85000".to_owned(),
    }
}

// =============================================================
// Whole-form validation
// =============================================================

#[test]
fn valid_form_has_no_errors() {
    let errors = valid_fields().validate();
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

#[test]
fn every_field_reports_independently() {
    let errors = FormFields::default().validate();
    assert_eq!(errors.name.as_deref(), Some("Name is required"));
    assert_eq!(errors.email.as_deref(), Some("Email is required"));
    assert_eq!(errors.position.as_deref(), Some("Position is required"));
    assert_eq!(
        errors.department.as_deref(),
        Some("Please select a department")
    );
    assert_eq!(
        errors.salary.as_deref(),
        Some("Salary must be greater than 0")
    );
}

// =============================================================
// Name
// =============================================================

#[test]
fn name_of_one_character_is_too_short() {
    let mut fields = valid_fields();
    fields.name = "J".to_owned();
    assert_eq!(
        fields.validate().name.as_deref(),
        Some("Name must be at least 2 characters long")
    );
}

#[test]
fn name_over_fifty_characters_is_too_long() {
    let mut fields = valid_fields();
    fields.name = "x".repeat(51);
    assert_eq!(
        fields.validate().name.as_deref(),
        Some("Name must be less than 50 characters")
    );
}

#[test]
fn name_of_fifty_characters_is_accepted() {
    let mut fields = valid_fields();
    fields.name = "x".repeat(50);
    assert!(fields.validate().name.is_none());
}

// =============================================================
// Email
// =============================================================

#[test]
fn email_shape_accepts_local_at_domain_tld() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last@sub.domain.org"));
}

#[test]
fn email_shape_rejects_bad_inputs() {
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("plain"));
    assert!(!is_valid_email("no-tld@domain"));
    assert!(!is_valid_email("@domain.tld"));
    assert!(!is_valid_email("two@@at.tld"));
    assert!(!is_valid_email("has space@domain.tld"));
    assert!(!is_valid_email("a@.tld"));
    assert!(!is_valid_email("a@domain."));
}

#[test]
fn invalid_email_reports_message() {
    let mut fields = valid_fields();
    fields.email = "nope".to_owned();
    assert_eq!(
        fields.validate().email.as_deref(),
        Some("Please enter a valid email address")
    );
}

// =============================================================
// Position and department
// =============================================================

#[test]
fn position_of_one_character_is_too_short() {
    let mut fields = valid_fields();
    fields.position = "X".to_owned();
    assert_eq!(
        fields.validate().position.as_deref(),
        Some("Position must be at least 2 characters long")
    );
}

#[test]
fn department_outside_fixed_list_is_rejected() {
    let mut fields = valid_fields();
    fields.department = "Astrology".to_owned();
    assert_eq!(
        fields.validate().department.as_deref(),
        Some("Please select a department")
    );
}

#[test]
fn all_fixed_departments_are_accepted() {
    for dept in DEPARTMENTS {
        let mut fields = valid_fields();
        fields.department = dept.to_owned();
        assert!(fields.validate().department.is_none(), "rejected {dept}");
    }
}

// =============================================================
// Salary bounds
// =============================================================

#[test]
fn salary_of_zero_is_rejected() {
    let mut fields = valid_fields();
    fields.salary = "0".to_owned();
    assert_eq!(
        fields.validate().salary.as_deref(),
        Some("Salary must be greater than 0")
    );
}

#[test]
fn salary_over_one_million_is_rejected() {
    let mut fields = valid_fields();
    fields.salary = "1000001".to_owned();
    assert_eq!(
        fields.validate().salary.as_deref(),
        Some("Salary cannot exceed 1,000,000")
    );
}

#[test]
fn salary_bounds_are_inclusive_of_one_million() {
    for ok in ["1", "1000000"] {
        let mut fields = valid_fields();
        fields.salary = ok.to_owned();
        assert!(fields.validate().salary.is_none(), "rejected {ok}");
    }
}

#[test]
fn unparseable_salary_counts_as_zero() {
    let mut fields = valid_fields();
    fields.salary = "lots".to_owned();
    assert_eq!(fields.salary_value(), 0.0);
    assert!(fields.validate().salary.is_some());
}

// =============================================================
// Draft and pre-fill
// =============================================================

#[test]
fn to_draft_carries_parsed_salary() {
    let draft = valid_fields().to_draft();
    assert_eq!(draft.name, "Jane Doe");
    assert_eq!(draft.salary, 85_000.0);
}

#[test]
fn from_employee_prefills_whole_salary_without_fraction() {
    let employee = Employee {
        id: "e-1".to_owned(),
        name: "Jane Doe".to_owned(),
        email: "jane@corp.test".to_owned(),
        position: "Engineer".to_owned(),
        department: "Engineering".to_owned(),
        salary: 85_000.0,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    };
    let fields = FormFields::from_employee(&employee);
    assert_eq!(fields.salary, "85000");
    assert_eq!(fields.department, "Engineering");
}

#[test]
fn from_employee_keeps_fractional_salary() {
    let mut employee = Employee {
        id: "e-1".to_owned(),
        name: "Jane Doe".to_owned(),
        email: "jane@corp.test".to_owned(),
        position: "Engineer".to_owned(),
        department: "Engineering".to_owned(),
        salary: 85_000.0,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    };
    employee.salary = 85_000.5;
    assert_eq!(FormFields::from_employee(&employee).salary, "85000.5");
}
