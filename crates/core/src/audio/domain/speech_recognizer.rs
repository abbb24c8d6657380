use super::audio_segment::AudioSegment;

/// Domain interface for speech-to-text transcription.
///
/// Implementations take a mono 16 kHz segment and return its transcript as
/// plain text.
pub trait SpeechRecognizer: Send {
    fn transcribe(&self, audio: &AudioSegment) -> Result<String, Box<dyn std::error::Error>>;
}
