//! Pipeline orchestration and side-effect fan-out.
//!
//! - `ForgePipeline`: sequences the four agent stages and assembles the blueprint
//! - `fan_out`: best-effort persistence and payment provisioning

pub mod fanout;
pub mod orchestrator;
