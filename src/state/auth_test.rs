use super::*;

fn admin() -> AuthState {
    AuthState {
        user: Some(User::from_credentials("boss@corp.test", Role::Admin)),
        loading: false,
    }
}

fn employee() -> AuthState {
    AuthState {
        user: Some(User::from_credentials("staff@corp.test", Role::Employee)),
        loading: false,
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

#[test]
fn auth_state_with_user_is_authenticated() {
    assert!(admin().is_authenticated());
}

// =============================================================
// User derivation
// =============================================================

#[test]
fn user_id_equals_email() {
    let user = User::from_credentials("jane.doe@corp.test", Role::Employee);
    assert_eq!(user.id, "jane.doe@corp.test");
    assert_eq!(user.email, "jane.doe@corp.test");
}

#[test]
fn user_name_is_local_part_of_email() {
    let user = User::from_credentials("jane.doe@corp.test", Role::Employee);
    assert_eq!(user.name, "jane.doe");
}

#[test]
fn user_name_falls_back_to_whole_email_without_at() {
    let user = User::from_credentials("not-an-email", Role::Employee);
    assert_eq!(user.name, "not-an-email");
}

#[test]
fn is_admin_only_for_admin_role() {
    assert!(User::from_credentials("a@b.test", Role::Admin).is_admin());
    assert!(!User::from_credentials("a@b.test", Role::Employee).is_admin());
}

// =============================================================
// Role wire format
// =============================================================

#[test]
fn role_serializes_uppercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
    assert_eq!(
        serde_json::to_string(&Role::Employee).unwrap(),
        "\"EMPLOYEE\""
    );
}

#[test]
fn role_deserializes_uppercase() {
    assert_eq!(
        serde_json::from_str::<Role>("\"ADMIN\"").unwrap(),
        Role::Admin
    );
}

// =============================================================
// Guard decisions
// =============================================================

#[test]
fn guard_waits_while_loading() {
    let state = AuthState {
        user: None,
        loading: true,
    };
    assert_eq!(state.check_access(false, None), GuardDecision::Wait);
    assert_eq!(state.check_access(true, None), GuardDecision::Wait);
}

#[test]
fn guard_redirects_to_login_without_user() {
    let state = AuthState::default();
    assert_eq!(state.check_access(false, None), GuardDecision::RedirectLogin);
}

#[test]
fn guard_allows_signed_in_user_on_plain_route() {
    assert_eq!(employee().check_access(false, None), GuardDecision::Allow);
    assert_eq!(admin().check_access(false, None), GuardDecision::Allow);
}

#[test]
fn guard_redirects_non_admin_to_dashboard_on_admin_route() {
    assert_eq!(
        employee().check_access(true, None),
        GuardDecision::RedirectDashboard
    );
}

#[test]
fn guard_allows_admin_on_admin_route() {
    assert_eq!(admin().check_access(true, None), GuardDecision::Allow);
}

#[test]
fn guard_redirects_role_outside_allowed_set() {
    assert_eq!(
        employee().check_access(false, Some(&[Role::Admin])),
        GuardDecision::RedirectDashboard
    );
}

#[test]
fn guard_allows_role_inside_allowed_set() {
    assert_eq!(
        employee().check_access(false, Some(&[Role::Admin, Role::Employee])),
        GuardDecision::Allow
    );
}
