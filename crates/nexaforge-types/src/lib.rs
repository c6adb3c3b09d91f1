//! Shared data contracts for NexaForge.
//!
//! This crate holds the request/response shapes exchanged with the forge
//! pipeline, the fixed industry/theme catalogs, LLM message types, slug
//! generation, configuration, and the error enums used across the workspace.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod catalog;
pub mod config;
pub mod error;
pub mod forge;
pub mod llm;
pub mod slug;
