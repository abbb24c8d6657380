use super::audio_segment::AudioSegment;

/// Domain interface for playing a decoded segment on the default output
/// device. Blocks until playback finishes; callers that need a responsive UI
/// run it on a throwaway thread.
pub trait AudioPlayer: Send {
    fn play(&self, audio: &AudioSegment) -> Result<(), Box<dyn std::error::Error>>;
}
