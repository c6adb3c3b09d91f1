//! Response parsing for agent output.
//!
//! Models sometimes wrap JSON in a markdown code fence even when told not
//! to. A single surrounding fence (with or without a `json` tag) is removed
//! before decoding; anything else must be a complete JSON document matching
//! the target type.

use serde::de::DeserializeOwned;
use tracing::debug;

/// Decode `raw` into `T`, returning `None` for absent, empty, or
/// non-conforming text. Never panics.
pub fn parse_response<T: DeserializeOwned>(raw: Option<&str>) -> Option<T> {
    let raw = raw?;
    let body = strip_code_fence(raw.trim());
    if body.is_empty() {
        return None;
    }

    match serde_json::from_str::<T>(body) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(error = %e, "model output did not match the expected shape");
            None
        }
    }
}

/// Remove one surrounding ```` ``` ```` / ```` ```json ```` fence, if present.
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let Some(rest) = rest.strip_suffix("```") else {
        return text;
    };
    // Drop the info string on the opening line (e.g. "json").
    match rest.find('\n') {
        Some(idx) => rest[idx + 1..].trim(),
        None => rest.trim(),
    }
}
