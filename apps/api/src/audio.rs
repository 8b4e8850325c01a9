//! WAV container assembly for synthesized speech.
//!
//! The TTS model returns bare PCM samples; browsers need a RIFF/WAVE
//! container around them before an `<audio>` element will play the result.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use bytes::{BufMut, BytesMut};

/// PCM sample layout of a WAV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSpec {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
}

impl Default for WavSpec {
    /// What the Gemini TTS model emits: mono 16-bit PCM at 24 kHz.
    fn default() -> Self {
        Self {
            channels: 1,
            sample_rate: 24_000,
            bits_per_sample: 16,
        }
    }
}

/// Wraps raw PCM bytes in a RIFF/WAVE container (PCM format chunk + data chunk).
pub fn pcm_to_wav(pcm: &[u8], spec: WavSpec) -> Vec<u8> {
    let block_align = spec.channels * spec.bits_per_sample / 8;
    let byte_rate = spec.sample_rate * u32::from(block_align);
    let data_len = pcm.len() as u32;

    let mut buf = BytesMut::with_capacity(44 + pcm.len());
    buf.put_slice(b"RIFF");
    buf.put_u32_le(36 + data_len);
    buf.put_slice(b"WAVE");

    buf.put_slice(b"fmt ");
    buf.put_u32_le(16); // PCM format chunk size
    buf.put_u16_le(1); // audio format: uncompressed PCM
    buf.put_u16_le(spec.channels);
    buf.put_u32_le(spec.sample_rate);
    buf.put_u32_le(byte_rate);
    buf.put_u16_le(block_align);
    buf.put_u16_le(spec.bits_per_sample);

    buf.put_slice(b"data");
    buf.put_u32_le(data_len);
    buf.put_slice(pcm);

    buf.to_vec()
}

/// Encodes WAV bytes as a `data:audio/wav;base64,` URI for direct playback.
pub fn wav_data_uri(wav: &[u8]) -> String {
    format!("data:audio/wav;base64,{}", BASE64.encode(wav))
}
