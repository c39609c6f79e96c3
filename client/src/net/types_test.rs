use super::*;

// =============================================================
// Helpers
// =============================================================

fn wire_user(role: Option<&str>) -> WireUser {
    WireUser {
        id: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        username: "alice".to_owned(),
        role: role.map(str::to_owned),
    }
}

fn profile() -> UserProfile {
    UserProfile {
        id: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        first_name: "alice".to_owned(),
        last_name: String::new(),
        role: "user".to_owned(),
    }
}

// =============================================================
// Users
// =============================================================

#[test]
fn wire_user_username_becomes_first_name() {
    let user: UserProfile = wire_user(Some("admin")).into();
    assert_eq!(user.first_name, "alice");
    assert_eq!(user.last_name, "");
    assert_eq!(user.role, "admin");
    assert!(user.is_admin());
}

#[test]
fn wire_user_missing_role_defaults_to_user() {
    let user: UserProfile = wire_user(None).into();
    assert_eq!(user.role, DEFAULT_ROLE);

    let user: UserProfile = wire_user(Some("")).into();
    assert_eq!(user.role, DEFAULT_ROLE);
}

#[test]
fn user_profile_serializes_with_storage_key_names() {
    let json = serde_json::to_value(profile()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "_id": "u1",
            "email": "a@b.com",
            "firstName": "alice",
            "lastName": "",
            "role": "user"
        })
    );
}

#[test]
fn user_profile_deserializes_without_optional_fields() {
    let user: UserProfile = serde_json::from_str(r#"{"_id":"u9","email":"x@y.z"}"#).unwrap();
    assert_eq!(user.first_name, "");
    assert_eq!(user.role, "user");
}

#[test]
fn display_name_and_initials() {
    let mut user = profile();
    assert_eq!(user.display_name(), "alice");
    assert_eq!(user.initials(), "A");

    user.last_name = "smith".to_owned();
    assert_eq!(user.display_name(), "alice smith");
    assert_eq!(user.initials(), "AS");
}

#[test]
fn auth_payload_requires_token_and_user() {
    let payload: AuthPayload = serde_json::from_value(serde_json::json!({
        "accessToken": "tok123",
        "user": { "_id": "u1", "email": "a@b.com", "username": "alice", "role": "user" }
    }))
    .unwrap();
    let session = payload.into_session().unwrap();
    assert_eq!(session.token, "tok123");
    assert_eq!(session.user, profile());

    let missing_token: AuthPayload =
        serde_json::from_value(serde_json::json!({ "user": { "_id": "u1" } })).unwrap();
    assert!(missing_token.into_session().is_none());

    let empty_token: AuthPayload =
        serde_json::from_value(serde_json::json!({ "accessToken": "", "user": { "_id": "u1" } })).unwrap();
    assert!(empty_token.into_session().is_none());

    let missing_user: AuthPayload = serde_json::from_value(serde_json::json!({ "accessToken": "t" })).unwrap();
    assert!(missing_user.into_session().is_none());
}

#[test]
fn registration_data_drops_confirmation() {
    let form = RegistrationForm {
        username: "alice".to_owned(),
        email: "a@b.com".to_owned(),
        password: "secret1".to_owned(),
        confirm_password: "secret1".to_owned(),
    };
    let json = serde_json::to_value(RegistrationData::from(&form)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "username": "alice", "email": "a@b.com", "password": "secret1" })
    );
}

// =============================================================
// Courses
// =============================================================

#[test]
fn course_summary_applies_defaults_for_empty_course() {
    let summary = CourseSummary::from(&Course::default());
    assert_eq!(summary.title, "");
    assert_eq!(summary.image_url, PLACEHOLDER_COURSE_IMAGE);
    assert_eq!(summary.category, "General");
    assert_eq!(summary.level, "Beginner");
    assert_eq!(summary.instructor, "Unknown Instructor");
    assert_eq!(summary.description, "No description available");
    assert_eq!(summary.rating, "0.0");
    assert_eq!(summary.enrolled_students, 0);
    assert_eq!(summary.price, "0.00");
    assert_eq!(summary.duration, None);
}

#[test]
fn course_summary_prefers_thumbnail_then_video() {
    let mut course = Course { video_file: Some("v.mp4".to_owned()), ..Course::default() };
    assert_eq!(CourseSummary::from(&course).image_url, "v.mp4");

    course.thumbnail = Some("t.png".to_owned());
    assert_eq!(CourseSummary::from(&course).image_url, "t.png");
}

#[test]
fn course_deserializes_numbers_and_numeric_strings() {
    let course: Course = serde_json::from_value(serde_json::json!({
        "_id": "c1",
        "title": "Rust 101",
        "rating": "4.5",
        "enrolledStudents": 120,
        "price": 49.99,
        "duration": "12"
    }))
    .unwrap();
    let summary = CourseSummary::from(&course);
    assert_eq!(summary.id, "c1");
    assert_eq!(summary.rating, "4.5");
    assert_eq!(summary.enrolled_students, 120);
    assert_eq!(summary.price, "49.99");
    assert_eq!(summary.duration.as_deref(), Some("12 hours"));
}

#[test]
fn course_rejects_non_numeric_rating() {
    let result = serde_json::from_value::<Course>(serde_json::json!({ "rating": "great" }));
    assert!(result.is_err());
}

#[test]
fn course_filters_is_filtered_ignores_paging() {
    let mut filters = CourseFilters { page: Some(2), limit: Some(10), ..CourseFilters::default() };
    assert!(!filters.is_filtered());
    filters.level = "advanced".to_owned();
    assert!(filters.is_filtered());
}

// =============================================================
// Enrollments
// =============================================================

#[test]
fn enrollment_with_bare_course_id_has_no_course_details() {
    let enrollment: Enrollment = serde_json::from_value(serde_json::json!({
        "_id": "e1",
        "course": "c1",
        "progress": 40,
        "status": "active"
    }))
    .unwrap();
    assert!(enrollment.course.is_none());
    assert!(enrollment.is_in_progress());
    assert!(!enrollment.is_completed());
}

#[test]
fn enrollment_completed_by_status_or_full_progress() {
    let by_status = Enrollment { status: Some("completed".to_owned()), ..Enrollment::default() };
    assert!(by_status.is_completed());

    let by_progress = Enrollment { progress: Some(100.0), status: Some("active".to_owned()), ..Enrollment::default() };
    assert!(by_progress.is_completed());
    assert!(!by_progress.is_in_progress());
}

#[test]
fn enrollment_progress_is_clamped() {
    let enrollment = Enrollment { progress: Some(140.0), ..Enrollment::default() };
    assert_eq!(enrollment.progress_percent(), 100.0);
    assert_eq!(Enrollment::default().progress_percent(), 0.0);
}

#[test]
fn list_payload_accepts_array_or_wrapped_object() {
    let bare: ListPayload<Course> = serde_json::from_value(serde_json::json!([{ "_id": "c1" }])).unwrap();
    assert_eq!(bare.into_items().len(), 1);

    let wrapped: ListPayload<Course> =
        serde_json::from_value(serde_json::json!({ "courses": [{ "_id": "c1" }, { "_id": "c2" }] })).unwrap();
    assert_eq!(wrapped.into_items().len(), 2);

    let enrollments: ListPayload<Enrollment> =
        serde_json::from_value(serde_json::json!({ "enrollments": [] })).unwrap();
    assert!(enrollments.into_items().is_empty());
}
