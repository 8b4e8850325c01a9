//! Content strategist flow — a full multi-platform content plan.

use serde::{Deserialize, Serialize};

use crate::ai_client::GeminiClient;
use crate::errors::AppError;
use crate::flows::prompts::{CONTENT_STRATEGY_PROMPT_TEMPLATE, CONTENT_STRATEGY_SYSTEM};
use crate::flows::require_nonempty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyGoal {
    GrowAudience,
    LaunchProduct,
    BuildAuthority,
}

impl StrategyGoal {
    fn label(self) -> &'static str {
        match self {
            StrategyGoal::GrowAudience => "grow a loyal audience",
            StrategyGoal::LaunchProduct => "launch a product",
            StrategyGoal::BuildAuthority => "build topical authority",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SocialPlatform {
    YouTube,
    Instagram,
    TikTok,
    X,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentStrategyRequest {
    pub topic: String,
    pub goal: StrategyGoal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudiencePersona {
    pub name: String,
    pub demographics: String,
    pub pain_points: Vec<String>,
    pub goals: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformStrategy {
    pub platform: SocialPlatform,
    pub content_format: String,
    pub posting_frequency: String,
    pub strategic_advice: String,
}

/// One slot in the sample posting week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub day: String,
    pub platform: String,
    pub idea: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentStrategyResponse {
    pub audience_persona: AudiencePersona,
    pub content_pillars: Vec<String>,
    pub platform_strategies: Vec<PlatformStrategy>,
    pub weekly_schedule: Vec<ScheduleSlot>,
    pub specific_ideas: Vec<String>,
}

pub async fn generate_content_strategy(
    llm: &GeminiClient,
    api_key: &str,
    request: &ContentStrategyRequest,
) -> Result<ContentStrategyResponse, AppError> {
    require_nonempty("topic", &request.topic)?;
    let prompt = CONTENT_STRATEGY_PROMPT_TEMPLATE
        .replace("{topic}", request.topic.trim())
        .replace("{goal}", request.goal.label());
    Ok(llm
        .generate_json(&prompt, CONTENT_STRATEGY_SYSTEM, api_key)
        .await?)
}
