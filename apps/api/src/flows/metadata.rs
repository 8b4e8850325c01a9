//! Video metadata flows — title ideas, SEO descriptions, chapter lists.

use serde::{Deserialize, Serialize};

use crate::ai_client::GeminiClient;
use crate::errors::AppError;
use crate::flows::prompts::{
    CHAPTERS_PROMPT_TEMPLATE, CHAPTERS_SYSTEM, YOUTUBE_DESCRIPTION_PROMPT_TEMPLATE,
    YOUTUBE_DESCRIPTION_SYSTEM, YOUTUBE_TITLE_PROMPT_TEMPLATE, YOUTUBE_TITLE_SYSTEM,
};
use crate::flows::require_nonempty;

#[derive(Debug, Clone, Deserialize)]
pub struct YoutubeTitleRequest {
    pub topic: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YoutubeTitleResponse {
    pub titles: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YoutubeDescriptionRequest {
    pub topic: String,
    pub script: Option<String>,
    pub example_links: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YoutubeDescriptionResponse {
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChaptersRequest {
    pub script: String,
}

/// One chapter marker. `timestamp` is "MM:SS".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    pub timestamp: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChaptersResponse {
    pub chapters: Vec<Chapter>,
}

pub async fn generate_youtube_title(
    llm: &GeminiClient,
    api_key: &str,
    request: &YoutubeTitleRequest,
) -> Result<YoutubeTitleResponse, AppError> {
    require_nonempty("topic", &request.topic)?;
    let prompt = YOUTUBE_TITLE_PROMPT_TEMPLATE.replace("{topic}", request.topic.trim());
    Ok(llm
        .generate_json(&prompt, YOUTUBE_TITLE_SYSTEM, api_key)
        .await?)
}

pub async fn generate_youtube_description(
    llm: &GeminiClient,
    api_key: &str,
    request: &YoutubeDescriptionRequest,
) -> Result<YoutubeDescriptionResponse, AppError> {
    require_nonempty("topic", &request.topic)?;
    let prompt = YOUTUBE_DESCRIPTION_PROMPT_TEMPLATE
        .replace("{topic}", request.topic.trim())
        .replace("{script}", request.script.as_deref().unwrap_or(""))
        .replace(
            "{example_links}",
            request.example_links.as_deref().unwrap_or(""),
        );
    Ok(llm
        .generate_json(&prompt, YOUTUBE_DESCRIPTION_SYSTEM, api_key)
        .await?)
}

pub async fn generate_chapters(
    llm: &GeminiClient,
    api_key: &str,
    request: &ChaptersRequest,
) -> Result<ChaptersResponse, AppError> {
    require_nonempty("script", &request.script)?;
    let prompt = CHAPTERS_PROMPT_TEMPLATE.replace("{script}", request.script.trim());
    Ok(llm.generate_json(&prompt, CHAPTERS_SYSTEM, api_key).await?)
}
