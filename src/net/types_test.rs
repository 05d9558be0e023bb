use super::*;
use chrono::{TimeZone, Utc};

fn employee(id: &str) -> Employee {
    Employee {
        id: id.to_owned(),
        name: "Jane Doe".to_owned(),
        email: "jane@corp.test".to_owned(),
        position: "Engineer".to_owned(),
        department: "Engineering".to_owned(),
        salary: 85_000.0,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
    }
}

// =============================================================
// Wire shapes
// =============================================================

#[test]
fn employee_parses_mongo_style_record() {
    let raw = r#"{
        "_id": "65f0c0ffee",
        "name": "Jane Doe",
        "email": "jane@corp.test",
        "position": "Engineer",
        "department": "Engineering",
        "salary": 85000,
        "createdAt": "2024-01-01T00:00:00.000Z",
        "updatedAt": "2024-02-01T00:00:00.000Z"
    }"#;
    let parsed: Employee = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.id, "65f0c0ffee");
    assert_eq!(parsed.salary, 85_000.0);
    assert_eq!(parsed.created_at, employee("x").created_at);
}

#[test]
fn employee_serializes_with_renamed_fields() {
    let value = serde_json::to_value(employee("e-1")).unwrap();
    assert!(value.get("_id").is_some());
    assert!(value.get("createdAt").is_some());
    assert!(value.get("id").is_none());
}

#[test]
fn draft_sends_exactly_the_mutable_fields() {
    let draft = EmployeeDraft {
        name: "Jane Doe".to_owned(),
        email: "jane@corp.test".to_owned(),
        position: "Engineer".to_owned(),
        department: "Engineering".to_owned(),
        salary: 85_000.0,
    };
    let value = serde_json::to_value(&draft).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 5);
    for key in ["name", "email", "position", "department", "salary"] {
        assert!(object.contains_key(key), "missing {key}");
    }
    assert!(!object.contains_key("_id"));
    assert!(!object.contains_key("createdAt"));
}

#[test]
fn signin_envelope_parses() {
    let raw = r#"{
        "success": true,
        "data": {
            "token": "tok-123",
            "user": { "email": "jane@corp.test", "role": "ADMIN" }
        }
    }"#;
    let envelope: ApiEnvelope<SigninData> = serde_json::from_str(raw).unwrap();
    assert!(envelope.success);
    assert_eq!(envelope.data.token, "tok-123");
    assert_eq!(envelope.data.user.role, crate::state::auth::Role::Admin);
}

// =============================================================
// Local list mutation
// =============================================================

#[test]
fn remove_employee_drops_only_the_matching_id() {
    let mut list = vec![employee("a"), employee("b"), employee("c")];
    remove_employee(&mut list, "b");
    let ids: Vec<&str> = list.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["a", "c"]);
}

#[test]
fn remove_employee_with_unknown_id_leaves_list_unchanged() {
    let mut list = vec![employee("a"), employee("b")];
    remove_employee(&mut list, "nope");
    assert_eq!(list.len(), 2);
}
