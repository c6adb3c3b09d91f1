//! Forge engine for NexaForge.
//!
//! This crate runs the four-stage agent pipeline (architect, copywriter,
//! visual, integration) and defines the "ports" (traits) for every outbound
//! collaborator: chat completion, image generation, blueprint storage, and
//! payment provisioning. It depends only on `nexaforge-types` -- never on
//! `nexaforge-infra` or any HTTP/database crate.

pub mod agent;
pub mod image;
pub mod llm;
pub mod pipeline;
pub mod provisioning;
pub mod repository;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;
