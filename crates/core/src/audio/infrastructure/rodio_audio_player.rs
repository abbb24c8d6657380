use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, Sink};

use crate::audio::domain::audio_player::AudioPlayer;
use crate::audio::domain::audio_segment::AudioSegment;

/// Plays decoded segments through the default output device using rodio.
pub struct RodioAudioPlayer;

impl AudioPlayer for RodioAudioPlayer {
    fn play(&self, audio: &AudioSegment) -> Result<(), Box<dyn std::error::Error>> {
        if audio.samples().is_empty() {
            return Ok(());
        }

        // The stream handle must outlive the sink, so both live here until
        // playback finishes.
        let (_stream, handle) = OutputStream::try_default()
            .map_err(|e| format!("No audio output device: {e}"))?;
        let sink = Sink::try_new(&handle).map_err(|e| format!("Failed to open sink: {e}"))?;

        sink.append(SamplesBuffer::new(
            audio.channels(),
            audio.sample_rate(),
            audio.samples().to_vec(),
        ));
        sink.sleep_until_end();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_empty_segment_is_noop() {
        // An empty fragment must not touch the output device; this also keeps
        // the test runnable on machines without one.
        let player = RodioAudioPlayer;
        let silent = AudioSegment::new(Vec::new(), 16000, 1);
        assert!(player.play(&silent).is_ok());
    }
}
