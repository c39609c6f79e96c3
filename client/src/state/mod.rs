//! Client-side application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! State structs are provided through Leptos context as `RwSignal`s; the pure
//! helpers on them carry the logic pages would otherwise inline.

pub mod auth;
pub mod courses;
pub mod enrollments;
