//! Registration page. Validation lives in the auth manager so the rules are
//! shared with anything else that registers a user.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::types::RegistrationForm;
use crate::state::auth::{AppAuth, AuthState};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<AppAuth>();
    let navigate = use_navigate();

    let form = RwSignal::new(RegistrationForm::default());
    let busy = move || auth.get().loading;

    let edit = {
        let session = session.clone();
        move |apply: fn(&mut RegistrationForm, String), value: String| {
            form.update(|f| apply(f, value));
            session.clear_error();
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().loading {
            return;
        }
        let input = form.get_untracked();
        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if session.register(&input).await.is_ok() {
                navigate("/courses", NavigateOptions::default());
            }
        });
    };

    let field = move |id: &'static str,
                      label: &'static str,
                      kind: &'static str,
                      placeholder: &'static str,
                      read: fn(&RegistrationForm) -> String,
                      apply: fn(&mut RegistrationForm, String)| {
        let edit = edit.clone();
        view! {
            <label for=id>{label}</label>
            <input
                id=id
                class="auth-input"
                type=kind
                placeholder=placeholder
                prop:value=move || form.with(read)
                on:input=move |ev| edit(apply, event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__header">
                    <h1>"SkillNest"</h1>
                    <h2>"Create your account"</h2>
                </div>
                {move || auth.get().error.map(|m| view! { <div class="auth-card__error">{m}</div> })}
                <form class="auth-form" on:submit=on_submit>
                    {field("username", "Username", "text", "Choose a username", |f| f.username.clone(), |f, v| f.username = v)}
                    {field("email", "Email Address", "email", "Enter your email", |f| f.email.clone(), |f, v| f.email = v)}
                    {field("password", "Password", "password", "Enter your password", |f| f.password.clone(), |f, v| f.password = v)}
                    {field(
                        "confirmPassword",
                        "Confirm Password",
                        "password",
                        "Re-enter your password",
                        |f| f.confirm_password.clone(),
                        |f, v| f.confirm_password = v,
                    )}
                    <button class="auth-button" type="submit" disabled=busy>
                        {move || if busy() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? " <A href="/login">"Login here"</A>
                </p>
            </div>
        </div>
    }
}
