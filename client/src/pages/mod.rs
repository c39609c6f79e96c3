//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped fetching and delegates card/list rendering to
//! `components`. Defaulting and arithmetic live in `state`.

pub mod courses;
pub mod dashboard;
pub mod login;
pub mod register;
