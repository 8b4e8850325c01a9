/// Gemini Client — the single point of entry for all generative AI calls.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// All provider interactions MUST go through this module.
///
/// The client holds no credential. Every call takes the API key explicitly,
/// so concurrent requests with different user keys never interfere.
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::resilience::{invoke_with_retry, Classify, ErrorClass, RetryPolicy};

pub mod tts;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all text generation flows.
/// Intentionally hardcoded to prevent accidental drift between flows.
pub const GENERATION_MODEL: &str = "gemini-2.0-flash";
const MAX_OUTPUT_TOKENS: u32 = 8192;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Model returned empty content")]
    EmptyContent,

    #[error("No audio media was returned from the model")]
    EmptyAudio,

    #[error("Audio payload decode error: {0}")]
    AudioDecode(#[from] base64::DecodeError),
}

impl Classify for ProviderError {
    fn class(&self) -> ErrorClass {
        match self {
            ProviderError::Api { status, message } => {
                crate::resilience::classify::classify(Some(*status), message)
            }
            other => crate::resilience::classify::classify(None, &other.to_string()),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types (Gemini generateContent REST)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<RequestContent<'a>>,
    contents: Vec<RequestContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

impl<'a> RequestContent<'a> {
    fn text(text: &'a str) -> Self {
        Self {
            parts: vec![RequestPart { text }],
        }
    }
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_modalities: Option<Vec<&'a str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    speech_config: Option<SpeechConfig<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpeechConfig<'a> {
    voice_config: VoiceConfig<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceConfig<'a> {
    prebuilt_voice_config: PrebuiltVoiceConfig<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrebuiltVoiceConfig<'a> {
    voice_name: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text of the first candidate's first text part, if any.
    fn text(&self) -> Option<&str> {
        self.candidates
            .iter()
            .flat_map(|c| c.content.parts.iter())
            .find_map(|p| p.text.as_deref())
    }

    /// Inline binary payload of the first candidate, if any.
    fn inline_data(&self) -> Option<&InlineData> {
        self.candidates
            .iter()
            .flat_map(|c| c.content.parts.iter())
            .find_map(|p| p.inline_data.as_ref())
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CandidatePart {
    text: Option<String>,
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[allow(dead_code)]
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// The single Gemini client used by all flows.
/// Wraps the generateContent REST API with retry and structured output
/// helpers. Transient overload errors are retried per `RetryPolicy`;
/// quota/credential errors and everything else propagate on the first
/// failure.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    retry: RetryPolicy,
}

impl GeminiClient {
    pub fn new() -> Self {
        Self::with_retry_policy(RetryPolicy::default())
    }

    pub fn with_retry_policy(retry: RetryPolicy) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: GEMINI_API_BASE.to_string(),
            retry,
        }
    }

    /// Makes a text generation call, returning the model's raw text output.
    pub async fn generate(
        &self,
        prompt: &str,
        system: &str,
        api_key: &str,
    ) -> Result<String, ProviderError> {
        let response = invoke_with_retry(&self.retry, || {
            self.generate_once(GENERATION_MODEL, prompt, Some(system), None, api_key)
        })
        .await?;

        let text = response.text().ok_or(ProviderError::EmptyContent)?;
        debug!("Generation call succeeded ({} chars)", text.len());
        Ok(text.to_string())
    }

    /// Convenience method that calls the model and deserializes the text
    /// response as JSON. The prompt must instruct the model to return valid
    /// JSON.
    pub async fn generate_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
        api_key: &str,
    ) -> Result<T, ProviderError> {
        let text = self.generate(prompt, system, api_key).await?;
        let text = strip_json_fences(&text);
        serde_json::from_str(text).map_err(ProviderError::Parse)
    }

    /// One attempt against the generateContent endpoint. Retry lives in the
    /// callers via `invoke_with_retry` — this method never loops.
    async fn generate_once(
        &self,
        model: &str,
        prompt: &str,
        system: Option<&str>,
        generation_config: Option<GenerationConfig<'_>>,
        api_key: &str,
    ) -> Result<GenerateContentResponse, ProviderError> {
        let request_body = GenerateContentRequest {
            system_instruction: system.map(RequestContent::text),
            contents: vec![RequestContent::text(prompt)],
            generation_config: Some(generation_config.unwrap_or(GenerationConfig {
                max_output_tokens: Some(MAX_OUTPUT_TOKENS),
                ..GenerationConfig::default()
            })),
        };

        let response = self
            .client
            .post(format!("{}/{}:generateContent", self.base_url, model))
            .header("x-goog-api-key", api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Prefer the provider's structured message when the body parses
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let body = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    let body = body.trim_start();
    body.strip_suffix("```").map(str::trim).unwrap_or(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"caption\": \"hello\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"caption\": \"hello\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"caption\": \"hello\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"caption\": \"hello\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"caption\": \"hello\"}";
        assert_eq!(strip_json_fences(input), "{\"caption\": \"hello\"}");
    }

    #[test]
    fn test_response_text_extraction() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "generated script"}]}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), Some("generated script"));
    }

    #[test]
    fn test_response_inline_data_extraction() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [
                    {"inlineData": {"mimeType": "audio/L16;rate=24000", "data": "AAAA"}}
                ]}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.inline_data().unwrap().data, "AAAA");
    }

    #[test]
    fn test_empty_candidates_has_no_text() {
        let response: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(response.text().is_none());
        assert!(response.inline_data().is_none());
    }

    #[test]
    fn test_provider_error_body_parses() {
        let body = r#"{"error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}}"#;
        let parsed: GeminiError = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.message, "Quota exceeded");
    }

    #[test]
    fn test_api_error_classification() {
        use crate::resilience::ErrorClass;

        let busy = ProviderError::Api {
            status: 503,
            message: "The model is overloaded".to_string(),
        };
        assert_eq!(busy.class(), ErrorClass::ServiceBusy);

        let quota = ProviderError::Api {
            status: 429,
            message: "Quota exceeded".to_string(),
        };
        assert_eq!(quota.class(), ErrorClass::QuotaOrCredential);

        let bad_request = ProviderError::Api {
            status: 400,
            message: "Invalid argument".to_string(),
        };
        assert_eq!(bad_request.class(), ErrorClass::Permanent);

        assert_eq!(ProviderError::EmptyContent.class(), ErrorClass::Permanent);
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let request = GenerateContentRequest {
            system_instruction: Some(RequestContent::text("system")),
            contents: vec![RequestContent::text("prompt")],
            generation_config: Some(GenerationConfig {
                max_output_tokens: Some(1024),
                ..GenerationConfig::default()
            }),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("systemInstruction").is_some());
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 1024);
        assert_eq!(value["contents"][0]["parts"][0]["text"], "prompt");
    }
}
