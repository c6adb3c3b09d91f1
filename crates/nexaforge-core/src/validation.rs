//! Request validation run before any agent is invoked.

use nexaforge_types::catalog::{INDUSTRY_OPTIONS, THEME_OPTIONS};
use nexaforge_types::error::ValidationError;
use nexaforge_types::forge::ForgeRequest;

pub const MIN_PROJECT_NAME_LEN: usize = 2;
pub const MIN_BRAND_VOICE_LEN: usize = 6;
pub const MIN_TARGET_AUDIENCE_LEN: usize = 6;
pub const MIN_PRIMARY_GOAL_LEN: usize = 4;
pub const MAX_FEATURES: usize = 10;

/// True when `value` is one of the catalog industries (exact match).
pub fn validate_industry(value: &str) -> bool {
    INDUSTRY_OPTIONS.contains(&value)
}

/// True when `value` is one of the catalog themes (exact match).
pub fn validate_theme(value: &str) -> bool {
    THEME_OPTIONS.contains(&value)
}

/// Check every input constraint of a forge request.
///
/// Tone and the integration toggles are enforced by the type itself at
/// deserialization time. Returns the first violation found.
pub fn validate_request(request: &ForgeRequest) -> Result<(), ValidationError> {
    check_min_len("projectName", &request.project_name, MIN_PROJECT_NAME_LEN)?;
    check_min_len("brandVoice", &request.brand_voice, MIN_BRAND_VOICE_LEN)?;
    check_min_len(
        "targetAudience",
        &request.target_audience,
        MIN_TARGET_AUDIENCE_LEN,
    )?;
    check_min_len("primaryGoal", &request.primary_goal, MIN_PRIMARY_GOAL_LEN)?;

    if !validate_industry(&request.industry) {
        return Err(ValidationError::UnknownIndustry(request.industry.clone()));
    }
    if !validate_theme(&request.theme) {
        return Err(ValidationError::UnknownTheme(request.theme.clone()));
    }
    if request.features.len() > MAX_FEATURES {
        return Err(ValidationError::TooManyFeatures {
            max: MAX_FEATURES,
            actual: request.features.len(),
        });
    }

    Ok(())
}

fn check_min_len(field: &'static str, value: &str, min: usize) -> Result<(), ValidationError> {
    if value.chars().count() < min {
        return Err(ValidationError::TooShort { field, min });
    }
    Ok(())
}
