//! Infrastructure layer for NexaForge.
//!
//! Contains implementations of the ports defined in `nexaforge-core`:
//! OpenAI-compatible chat completions, OpenAI image generation, SQLite and
//! Supabase blueprint storage, and Stripe product provisioning. Also loads
//! `forge.toml` and the API keys from the environment.

pub mod config;
pub mod image;
pub mod llm;
pub mod secret;
pub mod sqlite;
pub mod storage;
pub mod stripe;
pub mod supabase;
