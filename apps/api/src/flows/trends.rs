//! Trend discovery flow — current Reels trends for a topic, with content
//! suggestions.

use serde::{Deserialize, Serialize};

use crate::ai_client::GeminiClient;
use crate::errors::AppError;
use crate::flows::prompts::{TRENDING_REELS_PROMPT_TEMPLATE, TRENDING_REELS_SYSTEM};
use crate::flows::require_nonempty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendPopularity {
    #[serde(rename = "Very Hot")]
    VeryHot,
    #[serde(rename = "Gaining Momentum")]
    GainingMomentum,
    #[serde(rename = "Niche-Specific")]
    NicheSpecific,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trend {
    pub title: String,
    pub reason: String,
    pub content_suggestion: String,
    pub popularity: TrendPopularity,
    pub suggested_cta: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrendingReelsRequest {
    pub topic: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingReelsResponse {
    pub trends: Vec<Trend>,
}

pub async fn discover_trending_reels(
    llm: &GeminiClient,
    api_key: &str,
    request: &TrendingReelsRequest,
) -> Result<TrendingReelsResponse, AppError> {
    require_nonempty("topic", &request.topic)?;
    let prompt = TRENDING_REELS_PROMPT_TEMPLATE.replace("{topic}", request.topic.trim());
    Ok(llm
        .generate_json(&prompt, TRENDING_REELS_SYSTEM, api_key)
        .await?)
}
