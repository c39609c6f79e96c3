use super::*;
use crate::net::types::{Session, UserProfile};
use crate::state::auth::AuthPhase;

fn signed_in(role: &str) -> AuthState {
    AuthState {
        session: Some(Session {
            token: "tok123".to_owned(),
            user: UserProfile {
                id: "u1".to_owned(),
                email: "a@b.com".to_owned(),
                first_name: "alice".to_owned(),
                last_name: String::new(),
                role: role.to_owned(),
            },
        }),
        phase: AuthPhase::Authenticated,
        loading: false,
        error: None,
    }
}

#[test]
fn loading_wins_over_everything() {
    assert_eq!(guard_decision(true, false, None, false), GuardDecision::Loading);
    assert_eq!(guard_decision(true, true, Some("user"), true), GuardDecision::Loading);
}

#[test]
fn unauthenticated_redirects_to_login() {
    assert_eq!(guard_decision(false, false, None, false), GuardDecision::RedirectToLogin);
    assert_eq!(guard_decision(false, false, None, true), GuardDecision::RedirectToLogin);
}

#[test]
fn admin_route_denies_other_roles() {
    assert_eq!(guard_decision(false, true, Some("user"), true), GuardDecision::AccessDenied);
    assert_eq!(guard_decision(false, true, None, true), GuardDecision::AccessDenied);
    assert_eq!(guard_decision(false, true, Some("admin"), true), GuardDecision::Render);
}

#[test]
fn authenticated_user_renders_plain_route() {
    assert_eq!(guard_decision(false, true, Some("user"), false), GuardDecision::Render);
}

#[test]
fn decide_reads_auth_state() {
    assert_eq!(decide(&AuthState::default(), false), GuardDecision::Loading);
    let signed_out = AuthState { loading: false, ..AuthState::default() };
    assert_eq!(decide(&signed_out, false), GuardDecision::RedirectToLogin);
    assert_eq!(decide(&signed_in("user"), true), GuardDecision::AccessDenied);
    assert_eq!(decide(&signed_in("admin"), true), GuardDecision::Render);
}
