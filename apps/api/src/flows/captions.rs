//! Social caption flow.

use serde::{Deserialize, Serialize};

use crate::ai_client::GeminiClient;
use crate::errors::AppError;
use crate::flows::prompts::{CAPTION_PROMPT_TEMPLATE, CAPTION_SYSTEM};
use crate::flows::require_nonempty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptionTone {
    Bold,
    Chill,
    Classy,
    Funny,
}

impl CaptionTone {
    fn label(self) -> &'static str {
        match self {
            CaptionTone::Bold => "bold",
            CaptionTone::Chill => "chill",
            CaptionTone::Classy => "classy",
            CaptionTone::Funny => "funny",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Facebook,
    X,
    Tiktok,
}

impl Platform {
    fn label(self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
            Platform::X => "X (formerly Twitter)",
            Platform::Tiktok => "TikTok",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaptionRequest {
    pub topic: String,
    pub tone: CaptionTone,
    pub platform: Platform,
    pub additional_emojis: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionResponse {
    pub caption: String,
}

pub async fn generate_caption(
    llm: &GeminiClient,
    api_key: &str,
    request: &CaptionRequest,
) -> Result<CaptionResponse, AppError> {
    require_nonempty("topic", &request.topic)?;
    let prompt = CAPTION_PROMPT_TEMPLATE
        .replace("{topic}", request.topic.trim())
        .replace("{tone}", request.tone.label())
        .replace("{platform}", request.platform.label())
        .replace(
            "{emojis}",
            request.additional_emojis.as_deref().unwrap_or("none"),
        );
    Ok(llm.generate_json(&prompt, CAPTION_SYSTEM, api_key).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_tone_serde_lowercase() {
        let tone: CaptionTone = serde_json::from_str(r#""classy""#).unwrap();
        assert_eq!(tone, CaptionTone::Classy);
        assert_eq!(
            serde_json::to_string(&CaptionTone::Bold).unwrap(),
            r#""bold""#
        );
    }

    #[test]
    fn test_platform_serde_lowercase() {
        let platform: Platform = serde_json::from_str(r#""tiktok""#).unwrap();
        assert_eq!(platform, Platform::Tiktok);
        let platform: Platform = serde_json::from_str(r#""x""#).unwrap();
        assert_eq!(platform, Platform::X);
    }

    #[test]
    fn test_unknown_tone_is_rejected() {
        let result: Result<CaptionTone, _> = serde_json::from_str(r#""sarcastic""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_caption_request_deserialization() {
        let json = r#"{
            "topic": "morning routines",
            "tone": "chill",
            "platform": "instagram",
            "additional_emojis": "☀️"
        }"#;
        let request: CaptionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.tone, CaptionTone::Chill);
        assert_eq!(request.platform, Platform::Instagram);
    }

    #[tokio::test]
    async fn test_empty_topic_rejected() {
        let llm = GeminiClient::new();
        let request = CaptionRequest {
            topic: String::new(),
            tone: CaptionTone::Funny,
            platform: Platform::Facebook,
            additional_emojis: None,
        };
        let err = generate_caption(&llm, "key", &request).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
