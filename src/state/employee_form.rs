#[cfg(test)]
#[path = "employee_form_test.rs"]
mod employee_form_test;

use crate::net::types::{Employee, EmployeeDraft};

/// The fixed department list offered by the form's select.
pub const DEPARTMENTS: [&str; 8] = [
    "Engineering",
    "Marketing",
    "Sales",
    "Human Resources",
    "Finance",
    "Operations",
    "IT",
    "Customer Support",
];

/// Upper bound accepted for a salary, inclusive.
pub const MAX_SALARY: f64 = 1_000_000.0;

/// Raw form field values as typed. Salary stays a string until submission
/// so partial numeric input never round-trips through a parse.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    pub salary: String,
}

/// Per-field validation errors. A populated field blocks submission until
/// the corresponding input is edited again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub salary: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.position.is_none()
            && self.department.is_none()
            && self.salary.is_none()
    }
}

impl FormFields {
    /// Pre-fill the form from an existing record for editing.
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            email: employee.email.clone(),
            position: employee.position.clone(),
            department: employee.department.clone(),
            salary: format_salary(employee.salary),
        }
    }

    /// Numeric salary value: unparseable input counts as zero, which the
    /// salary rule then rejects.
    pub fn salary_value(&self) -> f64 {
        self.salary.trim().parse().unwrap_or(0.0)
    }

    /// Validate all fields, returning the error map. Empty map means the
    /// form may be submitted.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        if self.name.trim().is_empty() {
            errors.name = Some("Name is required".to_owned());
        } else if self.name.chars().count() < 2 {
            errors.name = Some("Name must be at least 2 characters long".to_owned());
        } else if self.name.chars().count() > 50 {
            errors.name = Some("Name must be less than 50 characters".to_owned());
        }

        if self.email.is_empty() {
            errors.email = Some("Email is required".to_owned());
        } else if !is_valid_email(&self.email) {
            errors.email = Some("Please enter a valid email address".to_owned());
        }

        if self.position.trim().is_empty() {
            errors.position = Some("Position is required".to_owned());
        } else if self.position.chars().count() < 2 {
            errors.position = Some("Position must be at least 2 characters long".to_owned());
        }

        if !DEPARTMENTS.contains(&self.department.as_str()) {
            errors.department = Some("Please select a department".to_owned());
        }

        let salary = self.salary_value();
        if salary <= 0.0 {
            errors.salary = Some("Salary must be greater than 0".to_owned());
        } else if salary > MAX_SALARY {
            errors.salary = Some("Salary cannot exceed 1,000,000".to_owned());
        }

        errors
    }

    /// The submission payload: only the mutable fields.
    pub fn to_draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            position: self.position.clone(),
            department: self.department.clone(),
            salary: self.salary_value(),
        }
    }
}

/// Basic `local@domain.tld` shape check: exactly one `@`, no whitespace,
/// and at least one dot in the domain with text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || local.contains(char::is_whitespace) {
        return false;
    }
    if domain.contains(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Render a salary for a numeric input: whole amounts without the
/// fractional part.
fn format_salary(salary: f64) -> String {
    if salary.fract() == 0.0 {
        format!("{salary:.0}")
    } else {
        salary.to_string()
    }
}
