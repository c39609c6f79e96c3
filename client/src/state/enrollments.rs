//! Enrollment list state and the dashboard's progress arithmetic.

#[cfg(test)]
#[path = "enrollments_test.rs"]
mod enrollments_test;

use crate::net::error::ApiError;
use crate::net::types::Enrollment;

/// Thumbnail shown for enrollments whose course has none.
pub const PLACEHOLDER_ENROLLMENT_IMAGE: &str = "https://via.placeholder.com/200x150?text=Course";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnrollmentsState {
    pub items: Vec<Enrollment>,
    pub loading: bool,
    pub error: Option<String>,
    /// Course id of the unenroll request in flight.
    pub removing: Option<String>,
}

impl EnrollmentsState {
    #[must_use]
    pub fn stats(&self) -> EnrollmentStats {
        enrollment_stats(&self.items)
    }

    /// A failed fetch empties the list, unless the session expired: the
    /// redirect to `/login` is already underway and the list stays as it was.
    pub fn fail_load(&mut self, error: &ApiError) {
        self.loading = false;
        if let Some(message) = error.inline_message() {
            self.items.clear();
            self.error = Some(message);
        }
    }

    /// Settle an unenroll request for `course_id`.
    pub fn finish_unenroll(&mut self, course_id: &str, result: Result<(), &ApiError>) {
        self.removing = None;
        match result {
            Ok(()) => self.remove_course(course_id),
            Err(e) => {
                if let Some(message) = e.inline_message() {
                    self.error = Some(message);
                }
            }
        }
    }

    /// Drop the enrollment for `course_id` after a successful unenroll.
    pub fn remove_course(&mut self, course_id: &str) {
        self.items.retain(|e| course_id_of(e) != Some(course_id));
    }
}

/// Headline numbers for the dashboard cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnrollmentStats {
    pub total: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub hours_learned: u64,
}

/// Count enrollments by state and sum progress-weighted course hours.
#[must_use]
pub fn enrollment_stats(enrollments: &[Enrollment]) -> EnrollmentStats {
    let hours: f64 = enrollments
        .iter()
        .map(|e| {
            let duration = e.course.as_ref().and_then(|c| c.duration).unwrap_or(0.0).max(0.0);
            duration * e.progress_percent() / 100.0
        })
        .sum();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let hours_learned = hours.round() as u64;

    EnrollmentStats {
        total: enrollments.len(),
        in_progress: enrollments.iter().filter(|e| e.is_in_progress()).count(),
        completed: enrollments.iter().filter(|e| e.is_completed()).count(),
        hours_learned,
    }
}

/// Display fields for one dashboard row.
#[derive(Clone, Debug, PartialEq)]
pub struct EnrollmentRow {
    pub key: String,
    pub course_id: Option<String>,
    pub title: String,
    pub instructor: String,
    pub image_url: String,
    pub progress: f64,
    pub completed: bool,
    pub certificate_issued: bool,
}

impl From<&Enrollment> for EnrollmentRow {
    fn from(e: &Enrollment) -> Self {
        let course = e.course.as_ref();
        let text = |field: Option<&String>, fallback: &str| {
            field
                .filter(|v| !v.trim().is_empty())
                .map_or_else(|| fallback.to_owned(), Clone::clone)
        };
        Self {
            key: e.id.clone().or_else(|| course_id_of(e).map(str::to_owned)).unwrap_or_default(),
            course_id: course_id_of(e).map(str::to_owned),
            title: text(course.and_then(|c| c.title.as_ref()), "Course Title"),
            instructor: text(course.and_then(|c| c.instructor.as_ref()), "Unknown Instructor"),
            image_url: text(course.and_then(|c| c.thumbnail.as_ref()), PLACEHOLDER_ENROLLMENT_IMAGE),
            progress: e.progress_percent(),
            completed: e.is_completed(),
            certificate_issued: e.certificate_issued,
        }
    }
}

fn course_id_of(e: &Enrollment) -> Option<&str> {
    e.course.as_ref().and_then(|c| c.id.as_deref())
}
