//! HTTP protocol layer module
//!
//! Protocol-level helpers decoupled from the dashboard's business logic:
//! MIME lookup and response builders.

pub mod mime;
pub mod response;

pub use response::{
    build_404_response, build_405_response, build_413_response, build_error_json_response,
    build_html_response, build_json_response, build_options_response, build_static_file_response,
};
