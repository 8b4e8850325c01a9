//! Ideation flows — video ideas for a niche and thumbnail concepts.

use serde::{Deserialize, Serialize};

use crate::ai_client::GeminiClient;
use crate::errors::AppError;
use crate::flows::prompts::{
    THUMBNAIL_IDEAS_PROMPT_TEMPLATE, THUMBNAIL_IDEAS_SYSTEM, VIDEO_IDEAS_PROMPT_TEMPLATE,
    VIDEO_IDEAS_SYSTEM,
};
use crate::flows::require_nonempty;

#[derive(Debug, Clone, Deserialize)]
pub struct VideoIdeasRequest {
    pub niche: String,
    pub trending_topics: Option<String>,
    pub past_video_types: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoIdeasResponse {
    pub video_ideas: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThumbnailIdeasRequest {
    pub topic: String,
}

/// Each idea is one string combining text, color, and emotion suggestions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThumbnailIdeasResponse {
    pub ideas: Vec<String>,
}

pub async fn generate_video_ideas(
    llm: &GeminiClient,
    api_key: &str,
    request: &VideoIdeasRequest,
) -> Result<VideoIdeasResponse, AppError> {
    require_nonempty("niche", &request.niche)?;
    let prompt = VIDEO_IDEAS_PROMPT_TEMPLATE
        .replace("{niche}", request.niche.trim())
        .replace(
            "{trending_topics}",
            request.trending_topics.as_deref().unwrap_or(""),
        )
        .replace(
            "{past_video_types}",
            request.past_video_types.as_deref().unwrap_or(""),
        );
    Ok(llm
        .generate_json(&prompt, VIDEO_IDEAS_SYSTEM, api_key)
        .await?)
}

pub async fn generate_thumbnail_ideas(
    llm: &GeminiClient,
    api_key: &str,
    request: &ThumbnailIdeasRequest,
) -> Result<ThumbnailIdeasResponse, AppError> {
    require_nonempty("topic", &request.topic)?;
    let prompt = THUMBNAIL_IDEAS_PROMPT_TEMPLATE.replace("{topic}", request.topic.trim());
    Ok(llm
        .generate_json(&prompt, THUMBNAIL_IDEAS_SYSTEM, api_key)
        .await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_ideas_response_deserializes() {
        let json = r#"{"video_ideas": ["idea one", "idea two", "idea three"]}"#;
        let response: VideoIdeasResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.video_ideas.len(), 3);
    }

    #[test]
    fn test_video_ideas_request_optionals() {
        let json = r#"{"niche": "urban gardening", "trending_topics": "hydroponics"}"#;
        let request: VideoIdeasRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.trending_topics.as_deref(), Some("hydroponics"));
        assert!(request.past_video_types.is_none());
    }

    #[tokio::test]
    async fn test_empty_niche_rejected() {
        let llm = GeminiClient::new();
        let request = VideoIdeasRequest {
            niche: String::new(),
            trending_topics: None,
            past_video_types: None,
        };
        let err = generate_video_ideas(&llm, "key", &request)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_empty_topic_rejected_for_thumbnails() {
        let llm = GeminiClient::new();
        let request = ThumbnailIdeasRequest {
            topic: "  ".to_string(),
        };
        let err = generate_thumbnail_ideas(&llm, "key", &request)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
