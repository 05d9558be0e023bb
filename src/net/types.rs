#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::auth::Role;

/// Envelope every API success response uses: `{ "success": bool, "data": … }`.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: T,
}

/// An employee record as owned by the remote API. The client never assigns
/// `_id` or the timestamps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    pub salary: f64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// The mutable fields sent on create and update.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EmployeeDraft {
    pub name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    pub salary: f64,
}

/// Payload of a successful sign-in.
#[derive(Clone, Debug, Deserialize)]
pub struct SigninData {
    pub token: String,
    pub user: SigninUser,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SigninUser {
    pub email: String,
    pub role: Role,
}

/// Drop the employee with the given `_id` from a local list, leaving the
/// rest untouched.
pub fn remove_employee(list: &mut Vec<Employee>, id: &str) {
    list.retain(|e| e.id != id);
}
