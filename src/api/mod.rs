//! Data API module
//!
//! Maps the fixed set of dashboard resources to JSON files on disk and
//! translates filesystem/parse failures into the API error taxonomy.

pub mod resource;

pub use resource::{fetch, FetchError, Resource};
