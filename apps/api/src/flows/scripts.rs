//! Script flows — long-form YouTube scripts, short-form reel scripts, and
//! improvement of existing scripts.

use serde::{Deserialize, Serialize};

use crate::ai_client::GeminiClient;
use crate::errors::AppError;
use crate::flows::prompts::{
    IMPROVE_SCRIPT_PROMPT_TEMPLATE, IMPROVE_SCRIPT_SYSTEM, REEL_SCRIPT_PROMPT_TEMPLATE,
    REEL_SCRIPT_SYSTEM, YOUTUBE_SCRIPT_PROMPT_TEMPLATE, YOUTUBE_SCRIPT_SYSTEM,
};
use crate::flows::require_nonempty;

/// Desired script length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScriptLength {
    ShortForm,
    #[default]
    LongForm,
}

impl ScriptLength {
    fn label(self) -> &'static str {
        match self {
            ScriptLength::ShortForm => "short-form (under 60 seconds)",
            ScriptLength::LongForm => "long-form (8+ minutes)",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct YoutubeScriptRequest {
    pub topic: String,
    pub tone: Option<String>,
    #[serde(default)]
    pub script_length: ScriptLength,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReelScriptRequest {
    pub topic: String,
    pub trending_song: Option<String>,
    pub style: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImproveScriptRequest {
    pub script: String,
    pub tone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptResponse {
    pub script: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImprovedScriptResponse {
    pub improved_script: String,
}

pub async fn generate_youtube_script(
    llm: &GeminiClient,
    api_key: &str,
    request: &YoutubeScriptRequest,
) -> Result<ScriptResponse, AppError> {
    require_nonempty("topic", &request.topic)?;
    let prompt = YOUTUBE_SCRIPT_PROMPT_TEMPLATE
        .replace("{topic}", request.topic.trim())
        .replace("{tone}", request.tone.as_deref().unwrap_or("engaging"))
        .replace("{script_length}", request.script_length.label());
    Ok(llm
        .generate_json(&prompt, YOUTUBE_SCRIPT_SYSTEM, api_key)
        .await?)
}

pub async fn generate_reel_script(
    llm: &GeminiClient,
    api_key: &str,
    request: &ReelScriptRequest,
) -> Result<ScriptResponse, AppError> {
    require_nonempty("topic", &request.topic)?;
    let prompt = REEL_SCRIPT_PROMPT_TEMPLATE
        .replace("{topic}", request.topic.trim())
        .replace(
            "{trending_song}",
            request.trending_song.as_deref().unwrap_or("none"),
        )
        .replace("{style}", request.style.as_deref().unwrap_or("engaging"));
    Ok(llm
        .generate_json(&prompt, REEL_SCRIPT_SYSTEM, api_key)
        .await?)
}

pub async fn improve_script(
    llm: &GeminiClient,
    api_key: &str,
    request: &ImproveScriptRequest,
) -> Result<ImprovedScriptResponse, AppError> {
    require_nonempty("script", &request.script)?;
    let prompt = IMPROVE_SCRIPT_PROMPT_TEMPLATE
        .replace("{tone}", request.tone.as_deref().unwrap_or("keep the original"))
        .replace("{script}", request.script.trim());
    Ok(llm
        .generate_json(&prompt, IMPROVE_SCRIPT_SYSTEM, api_key)
        .await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_length_serde_kebab_case() {
        let length: ScriptLength = serde_json::from_str(r#""short-form""#).unwrap();
        assert_eq!(length, ScriptLength::ShortForm);
        assert_eq!(
            serde_json::to_string(&ScriptLength::LongForm).unwrap(),
            r#""long-form""#
        );
    }

    #[test]
    fn test_script_length_defaults_to_long_form() {
        let json = r#"{"topic": "the history of ancient Rome"}"#;
        let request: YoutubeScriptRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.script_length, ScriptLength::LongForm);
        assert!(request.tone.is_none());
    }

    #[test]
    fn test_script_response_deserializes_from_model_json() {
        let json = r#"{"script": "HOOK: Did you know..."}"#;
        let response: ScriptResponse = serde_json::from_str(json).unwrap();
        assert!(response.script.starts_with("HOOK"));
    }

    #[test]
    fn test_improved_script_response_requires_field() {
        let result: Result<ImprovedScriptResponse, _> = serde_json::from_str(r#"{}"#);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_empty_topic_fails_before_any_provider_call() {
        let llm = GeminiClient::new();
        let request = YoutubeScriptRequest {
            topic: "  ".to_string(),
            tone: None,
            script_length: ScriptLength::default(),
        };
        let err = generate_youtube_script(&llm, "key", &request)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_empty_script_rejected_for_improvement() {
        let llm = GeminiClient::new();
        let request = ImproveScriptRequest {
            script: String::new(),
            tone: Some("funny".to_string()),
        };
        let err = improve_script(&llm, "key", &request).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
