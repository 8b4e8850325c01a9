//! Speech synthesis via the Gemini TTS model.
//!
//! The provider returns raw 16-bit PCM (mono, 24 kHz) base64-encoded in the
//! candidate's inline data. WAV container assembly happens in `audio`, not
//! here.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use tracing::debug;

use super::{GeminiClient, GenerationConfig, PrebuiltVoiceConfig, ProviderError, SpeechConfig, VoiceConfig};
use crate::resilience::invoke_with_retry;

/// The model used for all voiceover synthesis.
pub const TTS_MODEL: &str = "gemini-2.5-flash-preview-tts";
/// Prebuilt provider voice used for all voiceovers.
pub const TTS_VOICE: &str = "Algenib";

impl GeminiClient {
    /// Synthesizes speech for `text`, returning the decoded PCM bytes.
    pub async fn synthesize_speech(
        &self,
        text: &str,
        api_key: &str,
    ) -> Result<Vec<u8>, ProviderError> {
        let response = invoke_with_retry(&self.retry, || {
            self.generate_once(TTS_MODEL, text, None, Some(tts_config()), api_key)
        })
        .await?;

        let inline = response.inline_data().ok_or(ProviderError::EmptyAudio)?;
        let pcm = BASE64.decode(&inline.data)?;
        debug!("TTS call succeeded ({} PCM bytes)", pcm.len());
        Ok(pcm)
    }
}

fn tts_config() -> GenerationConfig<'static> {
    GenerationConfig {
        response_modalities: Some(vec!["AUDIO"]),
        speech_config: Some(SpeechConfig {
            voice_config: VoiceConfig {
                prebuilt_voice_config: PrebuiltVoiceConfig {
                    voice_name: TTS_VOICE,
                },
            },
        }),
        ..GenerationConfig::default()
    }
}
