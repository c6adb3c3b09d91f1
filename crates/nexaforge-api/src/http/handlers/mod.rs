//! HTTP request handlers for the REST API.

pub mod forge;
pub mod project;
