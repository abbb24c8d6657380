use std::thread;

use audioscout_core::audio::domain::audio_player::AudioPlayer;
use audioscout_core::audio::domain::audio_segment::AudioSegment;
use audioscout_core::audio::infrastructure::rodio_audio_player::RodioAudioPlayer;

/// Play a fragment on a throwaway thread so the UI never blocks on the
/// output device. Errors are logged; there is nothing to recover.
pub fn spawn(audio: AudioSegment) {
    thread::spawn(move || {
        if let Err(e) = RodioAudioPlayer.play(&audio) {
            log::warn!("fragment playback failed: {e}");
        }
    });
}
