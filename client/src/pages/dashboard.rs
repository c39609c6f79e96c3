//! Learner dashboard: progress stats and enrolled courses.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded landing route after login. Fetches `GET /enrollments` once on
//! mount; stats are derived from the fetched list, never stored.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::navbar::Navbar;
use crate::state::auth::{AppAuth, AuthState};
use crate::state::enrollments::{EnrollmentRow, EnrollmentsState};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<AppAuth>().api().clone();
    let state = RwSignal::new(EnrollmentsState { loading: true, ..EnrollmentsState::default() });

    let load = {
        let api = api.clone();
        move || {
            let api = api.clone();
            state.update(|s| {
                s.loading = true;
                s.error = None;
            });
            leptos::task::spawn_local(async move {
                match api.get_user_enrollments().await {
                    Ok(items) => state.update(|s| {
                        s.items = items;
                        s.loading = false;
                    }),
                    Err(e) => {
                        log::warn!("enrollment list failed: {e}");
                        state.update(|s| s.fail_load(&e));
                    }
                }
            });
        }
    };

    let initial_load = load.clone();
    Effect::new(move |_| initial_load());

    let on_unenroll = Callback::new(move |course_id: String| {
        let api = api.clone();
        state.update(|s| s.removing = Some(course_id.clone()));
        leptos::task::spawn_local(async move {
            let result = api.unenroll_from_course(&course_id).await;
            state.update(|s| s.finish_unenroll(&course_id, result.as_ref().copied()));
        });
    });

    let first_name = move || auth.get().user().map(|u| u.first_name.clone()).unwrap_or_default();
    let stats = Memo::new(move |_| state.with(EnrollmentsState::stats));

    let body = move || {
        let current = state.get();
        if current.loading {
            return view! { <div class="spinner"></div> }.into_any();
        }
        if let Some(error) = current.error {
            let retry = load.clone();
            return view! {
                <div class="error-box">
                    <p class="error-box__title">"Error loading enrollments"</p>
                    <p>{error}</p>
                    <button class="error-box__retry" on:click=move |_| retry()>"Try again"</button>
                </div>
            }
            .into_any();
        }
        if current.items.is_empty() {
            return view! {
                <div class="empty-state">
                    <h3>"No courses enrolled yet"</h3>
                    <p>"Start your learning journey by enrolling in courses"</p>
                    <A href="/courses" attr:class="button">"Browse Courses"</A>
                </div>
            }
            .into_any();
        }
        current
            .items
            .iter()
            .map(EnrollmentRow::from)
            .map(|row| enrollment_row(row, on_unenroll, state))
            .collect_view()
            .into_any()
    };

    view! {
        <div class="page">
            <Navbar/>
            <div class="container">
                <div class="page-header">
                    <h1>"Welcome back, " {first_name} "!"</h1>
                    <p>"Track your learning progress and continue your courses"</p>
                </div>
                <div class="stats-grid">
                    <StatCard label="Total Courses" value=Signal::derive(move || stats.get().total.to_string())/>
                    <StatCard label="In Progress" value=Signal::derive(move || stats.get().in_progress.to_string())/>
                    <StatCard label="Completed" value=Signal::derive(move || stats.get().completed.to_string())/>
                    <StatCard label="Hours Learned" value=Signal::derive(move || stats.get().hours_learned.to_string())/>
                </div>
                <div class="panel">
                    <div class="panel__header">
                        <h2>"My Courses"</h2>
                        <A href="/courses" attr:class="button">"Browse More Courses"</A>
                    </div>
                    <div class="enrollment-list">{body}</div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-card__label">{label}</p>
            <p class="stat-card__value">{value}</p>
        </div>
    }
}

fn enrollment_row(row: EnrollmentRow, on_unenroll: Callback<String>, state: RwSignal<EnrollmentsState>) -> AnyView {
    let EnrollmentRow { key, course_id, title, instructor, image_url, progress, completed, certificate_issued } = row;
    let width = format!("width: {progress}%");
    let alt = title.clone();
    let unenroll = course_id.map(|id| {
        let busy_id = id.clone();
        let busy = Signal::derive(move || state.with(|s| s.removing.as_deref() == Some(busy_id.as_str())));
        view! {
            <button
                class="enrollment__unenroll"
                disabled=busy
                on:click=move |_| on_unenroll.run(id.clone())
            >
                {move || if busy.get() { "Removing..." } else { "Unenroll" }}
            </button>
        }
    });

    view! {
        <div class="enrollment" data-enrollment=key>
            <img class="enrollment__thumb" src=image_url alt=alt/>
            <div class="enrollment__info">
                <h3>{title}</h3>
                <p class="enrollment__instructor">"By " {instructor}</p>
                <div class="enrollment__progress">
                    <span>"Progress"</span>
                    <span>{progress} "%"</span>
                </div>
                <div class="progress-bar">
                    <div class="progress-bar__fill" style=width></div>
                </div>
                <div class="enrollment__badges">
                    {if completed {
                        view! { <span class="badge badge--completed">"✓ Completed"</span> }.into_any()
                    } else {
                        view! { <span class="badge badge--active">"In Progress"</span> }.into_any()
                    }}
                    {certificate_issued.then(|| view! { <span class="badge badge--certificate">"Certificate Earned"</span> })}
                </div>
            </div>
            {unenroll}
        </div>
    }
    .into_any()
}
