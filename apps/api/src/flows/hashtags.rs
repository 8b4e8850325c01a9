//! Hashtag flow — tiered hashtag sets by popularity.

use serde::{Deserialize, Serialize};

use crate::ai_client::GeminiClient;
use crate::errors::AppError;
use crate::flows::prompts::{HASHTAG_PROMPT_TEMPLATE, HASHTAG_SYSTEM};
use crate::flows::require_nonempty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PopularityLevel {
    Low,
    Medium,
    Viral,
}

impl PopularityLevel {
    fn label(self) -> &'static str {
        match self {
            PopularityLevel::Low => "low",
            PopularityLevel::Medium => "medium",
            PopularityLevel::Viral => "viral",
        }
    }
}

fn default_popularity_levels() -> Vec<PopularityLevel> {
    vec![
        PopularityLevel::Low,
        PopularityLevel::Medium,
        PopularityLevel::Viral,
    ]
}

#[derive(Debug, Clone, Deserialize)]
pub struct HashtagRequest {
    pub topic: String,
    pub tone: Option<String>,
    #[serde(default = "default_popularity_levels")]
    pub popularity_levels: Vec<PopularityLevel>,
}

/// Hashtags grouped by popularity tier. Tiers that were not requested come
/// back empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HashtagSets {
    #[serde(default)]
    pub low: Vec<String>,
    #[serde(default)]
    pub medium: Vec<String>,
    #[serde(default)]
    pub viral: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashtagResponse {
    pub hashtags: HashtagSets,
}

pub async fn generate_hashtags(
    llm: &GeminiClient,
    api_key: &str,
    request: &HashtagRequest,
) -> Result<HashtagResponse, AppError> {
    require_nonempty("topic", &request.topic)?;
    let levels = if request.popularity_levels.is_empty() {
        default_popularity_levels()
    } else {
        request.popularity_levels.clone()
    };
    let levels = levels
        .iter()
        .map(|l| l.label())
        .collect::<Vec<_>>()
        .join(", ");
    let prompt = HASHTAG_PROMPT_TEMPLATE
        .replace("{topic}", request.topic.trim())
        .replace("{tone}", request.tone.as_deref().unwrap_or("any"))
        .replace("{levels}", &levels);
    Ok(llm.generate_json(&prompt, HASHTAG_SYSTEM, api_key).await?)
}
