//! Route guarding for authenticated views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded route applies the same decision: wait for the persisted
//! session to load, then redirect, deny, or render.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::components::{A, Redirect};

use crate::state::auth::AuthState;
use crate::util::navigation::LOGIN_ROUTE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Loading,
    RedirectToLogin,
    AccessDenied,
    Render,
}

/// Decide what a guarded route shows. Loading always wins.
#[must_use]
pub fn guard_decision(
    loading: bool,
    is_authenticated: bool,
    role: Option<&str>,
    require_admin: bool,
) -> GuardDecision {
    if loading {
        GuardDecision::Loading
    } else if !is_authenticated {
        GuardDecision::RedirectToLogin
    } else if require_admin && role != Some("admin") {
        GuardDecision::AccessDenied
    } else {
        GuardDecision::Render
    }
}

/// `guard_decision` over the current auth state.
#[must_use]
pub fn decide(state: &AuthState, require_admin: bool) -> GuardDecision {
    guard_decision(
        state.loading,
        state.is_authenticated(),
        state.user().map(|u| u.role.as_str()),
        require_admin,
    )
}

/// Renders `children` only for a signed-in user (and an admin when
/// `require_admin` is set).
#[component]
pub fn ProtectedRoute(#[prop(optional)] require_admin: bool, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    move || match decide(&auth.get(), require_admin) {
        GuardDecision::Loading => view! {
            <div class="route-loading">
                <div class="spinner"></div>
            </div>
        }
        .into_any(),
        GuardDecision::RedirectToLogin => view! { <Redirect path=LOGIN_ROUTE/> }.into_any(),
        GuardDecision::AccessDenied => view! {
            <div class="access-denied">
                <div class="access-denied__card">
                    <h2>"Access Denied"</h2>
                    <p>"You don't have permission to access this page."</p>
                    <A href="/courses">"Go to Courses"</A>
                </div>
            </div>
        }
        .into_any(),
        GuardDecision::Render => children().into_any(),
    }
}
