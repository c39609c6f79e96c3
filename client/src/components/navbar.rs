//! Top navigation bar shown on every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads auth state to switch between the signed-in menu (dashboard link,
//! avatar, logout) and the Login/Register links.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AppAuth, AuthState};
use crate::util::navigation::LOGIN_ROUTE;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<AppAuth>();
    let navigate = use_navigate();

    let signed_in = move || auth.get().is_authenticated();
    let initials = move || auth.get().user().map(|u| u.initials()).unwrap_or_default();
    let display_name = move || auth.get().user().map(|u| u.display_name()).unwrap_or_default();

    let on_logout = move |_| {
        session.logout();
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <A href="/" attr:class="navbar__brand">"SkillNest"</A>
                <div class="navbar__links">
                    <A href="/courses" attr:class="navbar__link">"Courses"</A>
                    <Show
                        when=signed_in
                        fallback=|| view! {
                            <A href="/login" attr:class="navbar__link">"Login"</A>
                            <A href="/register" attr:class="navbar__button">"Register"</A>
                        }
                    >
                        <A href="/dashboard" attr:class="navbar__link">"Dashboard"</A>
                        <div class="navbar__user">
                            <span class="navbar__avatar">{initials}</span>
                            <span class="navbar__name">{display_name}</span>
                        </div>
                        <button class="navbar__button navbar__button--logout" on:click=on_logout.clone()>
                            "Logout"
                        </button>
                    </Show>
                </div>
            </div>
        </nav>
    }
}
