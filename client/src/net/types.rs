//! Wire DTOs for the course backend plus their normalized client-side forms.
//!
//! DESIGN
//! ======
//! The backend sends loosely-shaped JSON (every course field optional, numbers
//! sometimes encoded as strings). Deserialization stays permissive here and
//! defaults are applied exactly once, when wire types are converted into the
//! normalized `UserProfile` / `CourseSummary` values the UI renders.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Image shown when a course carries neither a thumbnail nor a video file.
pub const PLACEHOLDER_COURSE_IMAGE: &str = "https://via.placeholder.com/400x300?text=Course+Image";

/// Role assigned when the backend omits one.
pub const DEFAULT_ROLE: &str = "user";

// =============================================================================
// USERS & SESSION
// =============================================================================

/// The signed-in user as persisted in storage and rendered by the UI.
///
/// Field names on the wire/storage side match the keys the web client has
/// always written, so sessions saved by older builds keep loading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Backend user identifier.
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    /// Carries the backend `username`.
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    /// Always empty today; the backend has no last name.
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    #[serde(default = "default_role")]
    pub role: String,
}

impl UserProfile {
    /// Name shown in the navbar and dashboard greeting.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }

    /// Up to two uppercase initials for the avatar bubble.
    #[must_use]
    pub fn initials(&self) -> String {
        [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

fn default_role() -> String {
    DEFAULT_ROLE.to_owned()
}

/// Client-held proof of authentication.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

/// Login form input. Never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration form input, including the confirmation field that must never
/// leave the browser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Registration body as transmitted to `POST /users/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegistrationData {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl From<&RegistrationForm> for RegistrationData {
    fn from(form: &RegistrationForm) -> Self {
        Self {
            username: form.username.clone(),
            email: form.email.clone(),
            password: form.password.clone(),
        }
    }
}

/// `data` payload of the login/register envelope.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthPayload {
    #[serde(rename = "accessToken")]
    pub access_token: Option<String>,
    pub user: Option<WireUser>,
}

/// User record as the backend sends it.
#[derive(Clone, Debug, Deserialize)]
pub struct WireUser {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    pub role: Option<String>,
}

impl From<WireUser> for UserProfile {
    fn from(user: WireUser) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.username,
            last_name: String::new(),
            role: user
                .role
                .filter(|role| !role.is_empty())
                .unwrap_or_else(default_role),
        }
    }
}

impl AuthPayload {
    /// Convert into a session, or `None` when the token or user is missing.
    #[must_use]
    pub fn into_session(self) -> Option<Session> {
        let token = self.access_token.filter(|t| !t.is_empty())?;
        let user = self.user?;
        Some(Session { token, user: user.into() })
    }
}

/// Standard `{ success, data, message }` response wrapper.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
    /// Absent on some endpoints; only an explicit `false` counts as failure.
    #[serde(default)]
    pub success: Option<bool>,
    pub data: Option<T>,
    pub message: Option<String>,
}

// =============================================================================
// COURSES
// =============================================================================

/// Course listing filters. Empty strings and `None` are omitted from queries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CourseFilters {
    pub search: String,
    pub category: String,
    pub level: String,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl CourseFilters {
    /// Whether any user-facing filter is set (drives "Clear all filters").
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty() || !self.category.is_empty() || !self.level.is_empty()
    }
}

/// Course as the backend sends it; every field optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "videoFile", default)]
    pub video_file: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub rating: Option<f64>,
    #[serde(rename = "enrolledStudents", default, deserialize_with = "deserialize_opt_f64")]
    pub enrolled_students: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub duration: Option<f64>,
}

/// A course with every display default already applied.
#[derive(Clone, Debug, PartialEq)]
pub struct CourseSummary {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub category: String,
    pub level: String,
    pub instructor: String,
    pub description: String,
    pub rating: String,
    pub enrolled_students: u64,
    pub price: String,
    /// `"{n} hours"`, only when the course declares a duration.
    pub duration: Option<String>,
}

impl From<&Course> for CourseSummary {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id.clone().unwrap_or_default(),
            title: course.title.clone().unwrap_or_default(),
            image_url: non_empty(course.thumbnail.as_deref())
                .or_else(|| non_empty(course.video_file.as_deref()))
                .unwrap_or(PLACEHOLDER_COURSE_IMAGE)
                .to_owned(),
            category: text_or(course.category.as_deref(), "General"),
            level: text_or(course.level.as_deref(), "Beginner"),
            instructor: text_or(course.instructor.as_deref(), "Unknown Instructor"),
            description: text_or(course.description.as_deref(), "No description available"),
            rating: nonzero(course.rating).map_or_else(|| "0.0".to_owned(), format_number),
            enrolled_students: nonzero(course.enrolled_students).map_or(0, count_from_f64),
            price: nonzero(course.price).map_or_else(|| "0.00".to_owned(), format_number),
            duration: nonzero(course.duration).map(|hours| format!("{} hours", format_number(hours))),
        }
    }
}

// =============================================================================
// ENROLLMENTS
// =============================================================================

/// A learner's enrollment in one course.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    /// Populated course document; a bare id string deserializes to `None`.
    #[serde(default, deserialize_with = "deserialize_populated_course")]
    pub course: Option<Course>,
    /// Completion percentage, 0 to 100.
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub progress: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "certificateIssued", default)]
    pub certificate_issued: bool,
}

impl Enrollment {
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        self.progress.unwrap_or(0.0).clamp(0.0, 100.0)
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status.as_deref() == Some("completed") || self.progress_percent() >= 100.0
    }

    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.status.as_deref() == Some("active") && self.progress_percent() < 100.0
    }
}

/// `data` of list endpoints: either a bare array or an object wrapping one.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Items(Vec<T>),
    Courses { courses: Vec<T> },
    Enrollments { enrollments: Vec<T> },
}

impl<T> ListPayload<T> {
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Items(items) | Self::Courses { courses: items } | Self::Enrollments { enrollments: items } => {
                items
            }
        }
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn text_or(value: Option<&str>, fallback: &str) -> String {
    non_empty(value).unwrap_or(fallback).to_owned()
}

fn nonzero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v != 0.0)
}

/// Render whole numbers without a fraction and keep others as-is.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        #[allow(clippy::cast_possible_truncation)]
        let whole = value as i64;
        whole.to_string()
    } else {
        value.to_string()
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count_from_f64(value: f64) -> u64 {
    if value <= 0.0 { 0 } else { value.round() as u64 }
}

fn deserialize_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(number)) => Ok(number.as_f64()),
        Some(serde_json::Value::String(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<f64>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("expected numeric string, got {trimmed:?}")))
        }
        Some(_) => Err(D::Error::custom("expected number or numeric string")),
    }
}

fn deserialize_populated_course<'de, D>(deserializer: D) -> Result<Option<Course>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        Some(obj @ serde_json::Value::Object(_)) => serde_json::from_value(obj).map(Some).map_err(D::Error::custom),
        _ => Ok(None),
    }
}
