//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` exposes typed operations, `pipeline` holds the request/response
//! stages they share, and `transport` is the only code that touches the
//! browser's fetch.

pub mod api;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod transport;
pub mod types;
