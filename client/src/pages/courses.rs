//! Course catalog with search, category and level filters.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded route. Refetches `GET /courses` whenever a filter changes and lets
//! the learner enroll straight from a card.

use leptos::prelude::*;

use crate::components::course_card::CourseCard;
use crate::components::navbar::Navbar;
use crate::net::types::CourseFilters;
use crate::state::auth::AppAuth;
use crate::state::courses::{CATEGORIES, CoursesState, LEVELS, level_label};

#[component]
pub fn CoursesPage() -> impl IntoView {
    let api = expect_context::<AppAuth>().api().clone();
    let state = RwSignal::new(CoursesState { loading: true, ..CoursesState::default() });
    let filters = Memo::new(move |_| state.with(|s| s.filters.clone()));

    let load = {
        let api = api.clone();
        move |filters: CourseFilters| {
            let api = api.clone();
            state.update(|s| {
                s.loading = true;
                s.error = None;
            });
            leptos::task::spawn_local(async move {
                match api.get_courses(&filters).await {
                    Ok(courses) => state.update(|s| s.set_courses(&courses)),
                    Err(e) => {
                        log::warn!("course list failed: {e}");
                        state.update(|s| s.fail_load(&e));
                    }
                }
            });
        }
    };

    let initial_load = load.clone();
    Effect::new(move |_| initial_load(filters.get()));

    let on_enroll = Callback::new(move |course_id: String| {
        let api = api.clone();
        state.update(|s| {
            s.enrolling = Some(course_id.clone());
            s.notice = None;
        });
        leptos::task::spawn_local(async move {
            let result = api.enroll_in_course(&course_id).await;
            state.update(|s| s.finish_enroll(result.as_ref().map(|_| ())));
        });
    });

    let body = move || {
        let current = state.get();
        if current.loading {
            return view! { <div class="spinner"></div> }.into_any();
        }
        if let Some(error) = current.error {
            let retry = load.clone();
            return view! {
                <div class="error-box">
                    <p class="error-box__title">"Error loading courses"</p>
                    <p>{error}</p>
                    <button class="error-box__retry" on:click=move |_| retry(filters.get_untracked())>
                        "Try again"
                    </button>
                </div>
            }
            .into_any();
        }
        if current.items.is_empty() {
            return view! {
                <div class="empty-state">
                    <h3>"No courses found"</h3>
                    <p>"Try adjusting your search or filters"</p>
                </div>
            }
            .into_any();
        }
        let count = current.count_label();
        let cards = current
            .items
            .into_iter()
            .map(|course| {
                let id = course.id.clone();
                let enrolling = Signal::derive(move || state.with(|s| s.enrolling.as_deref() == Some(id.as_str())));
                view! { <CourseCard course=course on_enroll=on_enroll enrolling=enrolling/> }
            })
            .collect_view();
        view! {
            <p class="course-count">{count}</p>
            <div class="course-grid">{cards}</div>
        }
        .into_any()
    };

    view! {
        <div class="page">
            <Navbar/>
            <div class="container">
                <div class="page-header">
                    <h1>"Explore Courses"</h1>
                    <p>"Discover courses to boost your skills"</p>
                </div>
                <div class="filters">
                    <input
                        class="filters__search"
                        type="text"
                        placeholder="Search courses..."
                        prop:value=move || filters.get().search
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.filters.search = value);
                        }
                    />
                    <select
                        class="filters__select"
                        prop:value=move || filters.get().category
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.filters.category = value);
                        }
                    >
                        <option value="">"All Categories"</option>
                        {CATEGORIES
                            .iter()
                            .copied()
                            .map(|c| view! { <option value=c>{c}</option> })
                            .collect_view()}
                    </select>
                    <select
                        class="filters__select"
                        prop:value=move || filters.get().level
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.filters.level = value);
                        }
                    >
                        <option value="">"All Levels"</option>
                        {LEVELS
                            .iter()
                            .copied()
                            .map(|l| view! { <option value=l>{level_label(l)}</option> })
                            .collect_view()}
                    </select>
                    <Show when=move || filters.get().is_filtered()>
                        <button class="filters__clear" on:click=move |_| state.update(CoursesState::clear_filters)>
                            "Clear all filters"
                        </button>
                    </Show>
                </div>
                {move || state.get().notice.map(|n| view! { <div class="notice">{n}</div> })}
                {body}
            </div>
        </div>
    }
}
