//! Response shapes returned by the HTTP endpoints.

pub mod submission;
