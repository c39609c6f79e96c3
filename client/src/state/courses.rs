//! Course-catalog state for the listing page.
//!
//! DESIGN
//! ======
//! Filters live next to the fetched items so the page can refetch whenever a
//! filter changes and render "Clear all filters" from the same value.

#[cfg(test)]
#[path = "courses_test.rs"]
mod courses_test;

use crate::net::error::ApiError;
use crate::net::types::{Course, CourseFilters, CourseSummary};

/// Category options offered by the listing filter.
pub const CATEGORIES: &[&str] = &[
    "Web Development",
    "Mobile Development",
    "Data Science",
    "Machine Learning",
    "UI/UX Design",
    "DevOps",
    "Cybersecurity",
];

pub const ENROLLED_NOTICE: &str = "Enrolled! Find the course on your dashboard.";

/// Level options as the backend spells them.
pub const LEVELS: &[&str] = &["beginner", "intermediate", "advanced"];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoursesState {
    pub filters: CourseFilters,
    pub items: Vec<CourseSummary>,
    pub loading: bool,
    pub error: Option<String>,
    /// Id of the course whose enroll request is in flight.
    pub enrolling: Option<String>,
    pub notice: Option<String>,
}

impl CoursesState {
    pub fn set_courses(&mut self, courses: &[Course]) {
        self.items = courses.iter().map(CourseSummary::from).collect();
        self.loading = false;
        self.error = None;
    }

    /// A failed listing empties the grid. An expired session shows nothing
    /// since the page is about to reload at `/login`.
    pub fn fail_load(&mut self, error: &ApiError) {
        self.loading = false;
        if let Some(message) = error.inline_message() {
            self.items.clear();
            self.error = Some(message);
        }
    }

    /// Settle an enroll request into the notice banner.
    pub fn finish_enroll(&mut self, result: Result<(), &ApiError>) {
        self.enrolling = None;
        self.notice = match result {
            Ok(()) => Some(ENROLLED_NOTICE.to_owned()),
            Err(e) => e.inline_message(),
        };
    }

    pub fn clear_filters(&mut self) {
        self.filters = CourseFilters::default();
    }

    /// "1 course found" / "N courses found".
    #[must_use]
    pub fn count_label(&self) -> String {
        let n = self.items.len();
        format!("{n} course{} found", if n == 1 { "" } else { "s" })
    }
}

/// Capitalize a level for display ("beginner" -> "Beginner").
#[must_use]
pub fn level_label(level: &str) -> String {
    let mut chars = level.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}
