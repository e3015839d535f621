//! Request handling module
//!
//! Routing dispatch, the dashboard page, and static asset serving.

pub mod dashboard;
pub mod router;
pub mod static_files;

pub use router::handle_request;
