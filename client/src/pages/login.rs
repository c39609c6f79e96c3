//! Login page: email + password form backed by the auth manager.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::types::Credentials;
use crate::state::auth::{AppAuth, AuthState};

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";

/// Require both fields before anything is sent.
pub fn validate_login_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(FILL_ALL_FIELDS);
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<AppAuth>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let local_error = RwSignal::new(String::new());

    let busy = move || auth.get().loading;
    let message = move || {
        let local = local_error.get();
        if local.is_empty() { auth.get().error } else { Some(local) }
    };

    let on_edit = {
        let session = session.clone();
        move || {
            local_error.set(String::new());
            session.clear_error();
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().loading {
            return;
        }
        let credentials = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(msg) => {
                local_error.set(msg.to_owned());
                return;
            }
        };
        local_error.set(String::new());

        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if session.login(&credentials).await.is_ok() {
                navigate("/courses", NavigateOptions::default());
            }
        });
    };

    let on_edit_email = on_edit.clone();
    let on_edit_password = on_edit;

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__header">
                    <h1>"SkillNest"</h1>
                    <h2>"Welcome back"</h2>
                </div>
                {move || message().map(|m| view! { <div class="auth-card__error">{m}</div> })}
                <form class="auth-form" on:submit=on_submit>
                    <label for="email">"Email Address"</label>
                    <input
                        id="email"
                        class="auth-input"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            email.set(event_target_value(&ev));
                            on_edit_email();
                        }
                    />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        class="auth-input"
                        type="password"
                        placeholder="Enter your password"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            on_edit_password();
                        }
                    />
                    <button class="auth-button" type="submit" disabled=busy>
                        {move || if busy() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? " <A href="/register">"Register here"</A>
                </p>
            </div>
        </div>
    }
}
