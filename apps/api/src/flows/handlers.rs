//! HTTP handlers for the content flows. Thin: resolve the credential,
//! delegate to the flow, return JSON.

use axum::{extract::State, http::HeaderMap, Json};

use crate::errors::AppError;
use crate::flows::captions::{self, CaptionRequest, CaptionResponse};
use crate::flows::hashtags::{self, HashtagRequest, HashtagResponse};
use crate::flows::ideas::{
    self, ThumbnailIdeasRequest, ThumbnailIdeasResponse, VideoIdeasRequest, VideoIdeasResponse,
};
use crate::flows::metadata::{
    self, ChaptersRequest, ChaptersResponse, YoutubeDescriptionRequest,
    YoutubeDescriptionResponse, YoutubeTitleRequest, YoutubeTitleResponse,
};
use crate::flows::scripts::{
    self, ImproveScriptRequest, ImprovedScriptResponse, ReelScriptRequest, ScriptResponse,
    YoutubeScriptRequest,
};
use crate::flows::strategy::{self, ContentStrategyRequest, ContentStrategyResponse};
use crate::flows::trends::{self, TrendingReelsRequest, TrendingReelsResponse};
use crate::flows::voiceover::{self, VoiceoverRequest, VoiceoverResponse};
use crate::state::AppState;

/// Per-request header carrying the user's own Gemini key.
pub const API_KEY_HEADER: &str = "x-gemini-api-key";

/// Resolves the credential for one request: the user's header key wins,
/// otherwise the server-wide fallback from config. No key at all is the
/// API-key-required gate.
fn resolve_api_key(state: &AppState, headers: &HeaderMap) -> Result<String, AppError> {
    pick_api_key(headers, state.config.gemini_api_key.as_deref())
}

fn pick_api_key(headers: &HeaderMap, fallback: Option<&str>) -> Result<String, AppError> {
    if let Some(value) = headers.get(API_KEY_HEADER) {
        let key = value.to_str().map_err(|_| {
            AppError::Validation(format!("{API_KEY_HEADER} header is not valid ASCII"))
        })?;
        if !key.trim().is_empty() {
            return Ok(key.trim().to_string());
        }
    }
    fallback
        .map(str::to_string)
        .ok_or(AppError::MissingApiKey)
}

/// POST /api/v1/flows/youtube-script
pub async fn handle_youtube_script(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<YoutubeScriptRequest>,
) -> Result<Json<ScriptResponse>, AppError> {
    let api_key = resolve_api_key(&state, &headers)?;
    let response = scripts::generate_youtube_script(&state.llm, &api_key, &request).await?;
    Ok(Json(response))
}

/// POST /api/v1/flows/reel-script
pub async fn handle_reel_script(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ReelScriptRequest>,
) -> Result<Json<ScriptResponse>, AppError> {
    let api_key = resolve_api_key(&state, &headers)?;
    let response = scripts::generate_reel_script(&state.llm, &api_key, &request).await?;
    Ok(Json(response))
}

/// POST /api/v1/flows/improve-script
pub async fn handle_improve_script(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ImproveScriptRequest>,
) -> Result<Json<ImprovedScriptResponse>, AppError> {
    let api_key = resolve_api_key(&state, &headers)?;
    let response = scripts::improve_script(&state.llm, &api_key, &request).await?;
    Ok(Json(response))
}

/// POST /api/v1/flows/caption
pub async fn handle_caption(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CaptionRequest>,
) -> Result<Json<CaptionResponse>, AppError> {
    let api_key = resolve_api_key(&state, &headers)?;
    let response = captions::generate_caption(&state.llm, &api_key, &request).await?;
    Ok(Json(response))
}

/// POST /api/v1/flows/hashtags
pub async fn handle_hashtags(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<HashtagRequest>,
) -> Result<Json<HashtagResponse>, AppError> {
    let api_key = resolve_api_key(&state, &headers)?;
    let response = hashtags::generate_hashtags(&state.llm, &api_key, &request).await?;
    Ok(Json(response))
}

/// POST /api/v1/flows/youtube-title
pub async fn handle_youtube_title(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<YoutubeTitleRequest>,
) -> Result<Json<YoutubeTitleResponse>, AppError> {
    let api_key = resolve_api_key(&state, &headers)?;
    let response = metadata::generate_youtube_title(&state.llm, &api_key, &request).await?;
    Ok(Json(response))
}

/// POST /api/v1/flows/youtube-description
pub async fn handle_youtube_description(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<YoutubeDescriptionRequest>,
) -> Result<Json<YoutubeDescriptionResponse>, AppError> {
    let api_key = resolve_api_key(&state, &headers)?;
    let response = metadata::generate_youtube_description(&state.llm, &api_key, &request).await?;
    Ok(Json(response))
}

/// POST /api/v1/flows/chapters
pub async fn handle_chapters(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ChaptersRequest>,
) -> Result<Json<ChaptersResponse>, AppError> {
    let api_key = resolve_api_key(&state, &headers)?;
    let response = metadata::generate_chapters(&state.llm, &api_key, &request).await?;
    Ok(Json(response))
}

/// POST /api/v1/flows/video-ideas
pub async fn handle_video_ideas(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<VideoIdeasRequest>,
) -> Result<Json<VideoIdeasResponse>, AppError> {
    let api_key = resolve_api_key(&state, &headers)?;
    let response = ideas::generate_video_ideas(&state.llm, &api_key, &request).await?;
    Ok(Json(response))
}

/// POST /api/v1/flows/thumbnail-ideas
pub async fn handle_thumbnail_ideas(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ThumbnailIdeasRequest>,
) -> Result<Json<ThumbnailIdeasResponse>, AppError> {
    let api_key = resolve_api_key(&state, &headers)?;
    let response = ideas::generate_thumbnail_ideas(&state.llm, &api_key, &request).await?;
    Ok(Json(response))
}

/// POST /api/v1/flows/content-strategy
pub async fn handle_content_strategy(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ContentStrategyRequest>,
) -> Result<Json<ContentStrategyResponse>, AppError> {
    let api_key = resolve_api_key(&state, &headers)?;
    let response = strategy::generate_content_strategy(&state.llm, &api_key, &request).await?;
    Ok(Json(response))
}

/// POST /api/v1/flows/trending-reels
pub async fn handle_trending_reels(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<TrendingReelsRequest>,
) -> Result<Json<TrendingReelsResponse>, AppError> {
    let api_key = resolve_api_key(&state, &headers)?;
    let response = trends::discover_trending_reels(&state.llm, &api_key, &request).await?;
    Ok(Json(response))
}

/// POST /api/v1/flows/voiceover
pub async fn handle_voiceover(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<VoiceoverRequest>,
) -> Result<Json<VoiceoverResponse>, AppError> {
    let api_key = resolve_api_key(&state, &headers)?;
    let response = voiceover::generate_voiceover(&state.llm, &api_key, &request).await?;
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_header_key_wins_over_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, HeaderValue::from_static("user-key"));
        let key = pick_api_key(&headers, Some("server-key")).unwrap();
        assert_eq!(key, "user-key");
    }

    #[test]
    fn test_fallback_used_without_header() {
        let key = pick_api_key(&HeaderMap::new(), Some("server-key")).unwrap();
        assert_eq!(key, "server-key");
    }

    #[test]
    fn test_blank_header_falls_through_to_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, HeaderValue::from_static("   "));
        let key = pick_api_key(&headers, Some("server-key")).unwrap();
        assert_eq!(key, "server-key");
    }

    #[test]
    fn test_no_key_anywhere_is_gated() {
        let err = pick_api_key(&HeaderMap::new(), None).unwrap_err();
        assert!(matches!(err, AppError::MissingApiKey));
    }

    #[test]
    fn test_header_key_is_trimmed() {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, HeaderValue::from_static(" user-key "));
        let key = pick_api_key(&headers, None).unwrap();
        assert_eq!(key, "user-key");
    }
}
