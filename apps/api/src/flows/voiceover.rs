//! Voiceover flow — text-to-speech through the provider, returned as a
//! playable WAV data URI.

use serde::{Deserialize, Serialize};

use crate::ai_client::GeminiClient;
use crate::audio::{pcm_to_wav, wav_data_uri, WavSpec};
use crate::errors::AppError;
use crate::flows::require_nonempty;

#[derive(Debug, Clone, Deserialize)]
pub struct VoiceoverRequest {
    pub script: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceoverResponse {
    /// `data:audio/wav;base64,` URI of the synthesized audio.
    pub audio_url: String,
}

pub async fn generate_voiceover(
    llm: &GeminiClient,
    api_key: &str,
    request: &VoiceoverRequest,
) -> Result<VoiceoverResponse, AppError> {
    require_nonempty("script", &request.script)?;
    let pcm = llm
        .synthesize_speech(request.script.trim(), api_key)
        .await?;
    let wav = pcm_to_wav(&pcm, WavSpec::default());
    Ok(VoiceoverResponse {
        audio_url: wav_data_uri(&wav),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voiceover_response_serializes_audio_url() {
        let response = VoiceoverResponse {
            audio_url: "data:audio/wav;base64,UklGRg==".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["audio_url"]
            .as_str()
            .unwrap()
            .starts_with("data:audio/wav;base64,"));
    }

    #[tokio::test]
    async fn test_empty_script_rejected_before_synthesis() {
        let llm = GeminiClient::new();
        let request = VoiceoverRequest {
            script: "   ".to_string(),
        };
        let err = generate_voiceover(&llm, "key", &request).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
