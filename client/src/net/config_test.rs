use super::*;

#[test]
fn default_matches_local_backend() {
    let cfg = ApiConfig::default();
    assert_eq!(cfg.base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.timeout, Duration::from_millis(10_000));
    assert!(cfg.include_credentials);
}

#[test]
fn from_base_url_trims_trailing_slashes() {
    let cfg = ApiConfig::from_base_url("https://api.example.test/v1//");
    assert_eq!(cfg.base_url, "https://api.example.test/v1");
}

#[test]
fn from_base_url_blank_falls_back_to_default() {
    assert_eq!(ApiConfig::from_base_url("   ").base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn url_for_joins_with_single_slash() {
    let cfg = ApiConfig::from_base_url("https://api.example.test/v1");
    assert_eq!(cfg.url_for("/courses"), "https://api.example.test/v1/courses");
    assert_eq!(cfg.url_for("enrollments/c1"), "https://api.example.test/v1/enrollments/c1");
}
