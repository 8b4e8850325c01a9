// Content generation flows. Each flow: validate the request → build a
// prompt → one structured call through ai_client → typed response.
// All provider calls go through ai_client — no direct HTTP here.

pub mod captions;
pub mod handlers;
pub mod hashtags;
pub mod ideas;
pub mod metadata;
pub mod prompts;
pub mod scripts;
pub mod strategy;
pub mod trends;
pub mod voiceover;

use crate::errors::AppError;

/// Rejects empty or whitespace-only required fields before any provider call.
pub(crate) fn require_nonempty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!(
            "Invalid argument: {field} required"
        )));
    }
    Ok(())
}
