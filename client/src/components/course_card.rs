//! Card for one course in the catalog grid.
//!
//! DESIGN
//! ======
//! Takes an already-defaulted `CourseSummary`, so the card never decides what
//! a missing field looks like.

use leptos::prelude::*;

use crate::net::types::CourseSummary;

#[component]
pub fn CourseCard(
    course: CourseSummary,
    #[prop(optional)] on_enroll: Option<Callback<String>>,
    #[prop(into)] enrolling: Signal<bool>,
) -> impl IntoView {
    let CourseSummary {
        id,
        title,
        image_url,
        category,
        level,
        instructor,
        description,
        rating,
        enrolled_students,
        price,
        duration,
    } = course;
    let alt = title.clone();

    view! {
        <div class="course-card">
            <img
                class="course-card__image"
                src=image_url
                alt=alt
                on:error=move |_ev| {
                    #[cfg(feature = "hydrate")]
                    {
                        use wasm_bindgen::JsCast as _;
                        if let Some(img) = _ev
                            .target()
                            .and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok())
                        {
                            img.set_src(crate::net::types::PLACEHOLDER_COURSE_IMAGE);
                        }
                    }
                }
            />
            <div class="course-card__body">
                <div class="course-card__tags">
                    <span class="course-card__tag course-card__tag--category">{category}</span>
                    <span class="course-card__tag course-card__tag--level">{level}</span>
                </div>
                <h3 class="course-card__title">{title}</h3>
                <p class="course-card__instructor">"By " {instructor}</p>
                <p class="course-card__description">{description}</p>
                <div class="course-card__footer">
                    <div class="course-card__stats">
                        <span class="course-card__rating">"★ " {rating}</span>
                        <span class="course-card__students">
                            "(" {enrolled_students} " students)"
                        </span>
                    </div>
                    <span class="course-card__price">"$" {price}</span>
                </div>
                {duration.map(|d| view! { <div class="course-card__duration">"⏱ " {d}</div> })}
                {on_enroll.map(|cb| {
                    let id = id.clone();
                    view! {
                        <button
                            class="course-card__enroll"
                            disabled=move || enrolling.get()
                            on:click=move |_| cb.run(id.clone())
                        >
                            {move || if enrolling.get() { "Enrolling..." } else { "Enroll" }}
                        </button>
                    }
                })}
            </div>
        </div>
    }
}
