//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read auth state from Leptos context; data arrives as props.

pub mod course_card;
pub mod navbar;
