//! Repository trait definitions (ports).
//!
//! The infrastructure layer (nexaforge-infra) implements these. The core
//! crate never depends on any specific storage technology.

pub mod blueprint;
