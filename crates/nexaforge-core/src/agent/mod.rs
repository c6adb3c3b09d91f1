//! The four forge agents.
//!
//! Each stage composes the same four pieces: a prompt builder, the model
//! caller, the response parser, and a deterministic fallback generator.
//! A stage cannot fail; it degrades to template output instead, and reports
//! which path it took through [`StageOutcome`].

pub mod caller;
pub mod fallback;
pub mod parse;
pub mod prompt;
pub mod stages;

use std::fmt;

use serde::Serialize;

/// One step of the fixed four-step pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStage {
    Architect,
    Copywriter,
    Visual,
    Integration,
}

impl AgentStage {
    /// Sampling temperature used for this stage's completion call.
    pub fn temperature(&self) -> f64 {
        match self {
            AgentStage::Architect => 0.3,
            AgentStage::Copywriter => 0.5,
            AgentStage::Visual => 0.6,
            AgentStage::Integration => 0.35,
        }
    }
}

impl fmt::Display for AgentStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentStage::Architect => write!(f, "architect"),
            AgentStage::Copywriter => write!(f, "copywriter"),
            AgentStage::Visual => write!(f, "visual"),
            AgentStage::Integration => write!(f, "integration"),
        }
    }
}

/// Where a stage's deliverable came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageSource {
    Model,
    Fallback,
}

/// Result of one agent stage: either the parsed model output or the
/// template fallback. Both carry a complete deliverable.
#[derive(Debug, Clone, PartialEq)]
pub enum StageOutcome<T> {
    Generated(T),
    Fallback(T),
}

impl<T> StageOutcome<T> {
    /// Use `parsed` when present, otherwise build the fallback.
    pub fn from_parsed(parsed: Option<T>, fallback: impl FnOnce() -> T) -> Self {
        match parsed {
            Some(value) => StageOutcome::Generated(value),
            None => StageOutcome::Fallback(fallback()),
        }
    }

    pub fn source(&self) -> StageSource {
        match self {
            StageOutcome::Generated(_) => StageSource::Model,
            StageOutcome::Fallback(_) => StageSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, StageOutcome::Fallback(_))
    }

    pub fn value(&self) -> &T {
        match self {
            StageOutcome::Generated(value) | StageOutcome::Fallback(value) => value,
        }
    }

    pub fn value_mut(&mut self) -> &mut T {
        match self {
            StageOutcome::Generated(value) | StageOutcome::Fallback(value) => value,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            StageOutcome::Generated(value) | StageOutcome::Fallback(value) => value,
        }
    }
}
