//! User-Facing Error Translator — final errors become short display strings.
//!
//! The end user sees a title and an actionable description, never raw
//! provider text. Pure mapping; logging and notification delivery are the
//! caller's job.

use serde::Serialize;

use crate::resilience::classify::{classify, ErrorClass};

/// Title and description pair suitable for a toast/notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserMessage {
    pub title: String,
    pub description: String,
}

/// Maps a final (non-retried) error to its user-visible message by
/// case-insensitive content matching on the rendered error.
pub fn translate<E: std::fmt::Display>(error: &E) -> UserMessage {
    let text = error.to_string();
    let (title, description) = match classify(None, &text) {
        ErrorClass::QuotaOrCredential => (
            "API Key Issue",
            "Your Gemini API key limit may have been reached or it is invalid. \
             Please update it in your profile and try again.",
        ),
        ErrorClass::ServiceBusy => (
            "Model Busy",
            "The AI model is currently busy. Please wait a moment and try again.",
        ),
        ErrorClass::Permanent => (
            "An Error Occurred",
            "An unknown error occurred. Please try again.",
        ),
    };
    UserMessage {
        title: title.to_string(),
        description: description.to_string(),
    }
}
