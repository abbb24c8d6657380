use std::path::Path;

use crate::audio::domain::audio_reader::AudioReader;
use crate::audio::domain::audio_segment::AudioSegment;

/// Decodes audio files using ffmpeg-next, resampling straight to the mono
/// f32 rate the recognizer wants.
pub struct FfmpegAudioReader;

impl AudioReader for FfmpegAudioReader {
    fn read_audio(
        &self,
        path: &Path,
        target_sample_rate: u32,
    ) -> Result<Option<AudioSegment>, Box<dyn std::error::Error>> {
        ffmpeg_next::init()?;

        let mut input = ffmpeg_next::format::input(path)?;

        let stream = match input.streams().best(ffmpeg_next::media::Type::Audio) {
            Some(stream) => stream,
            None => return Ok(None),
        };
        let stream_index = stream.index();

        let codec_ctx =
            ffmpeg_next::codec::context::Context::from_parameters(stream.parameters())?;
        let mut decoder = codec_ctx.decoder().audio()?;

        let mut resampler = ffmpeg_next::software::resampling::Context::get(
            decoder.format(),
            decoder.channel_layout(),
            decoder.rate(),
            ffmpeg_next::format::Sample::F32(ffmpeg_next::format::sample::Type::Planar),
            ffmpeg_next::ChannelLayout::MONO,
            target_sample_rate,
        )?;

        let mut samples: Vec<f32> = Vec::new();
        let mut decoded = ffmpeg_next::util::frame::audio::Audio::empty();
        let mut resampled = ffmpeg_next::util::frame::audio::Audio::empty();

        for (packet_stream, packet) in input.packets() {
            if packet_stream.index() != stream_index {
                continue;
            }
            decoder.send_packet(&packet)?;
            while decoder.receive_frame(&mut decoded).is_ok() {
                resampler.run(&decoded, &mut resampled)?;
                append_f32_samples(&resampled, &mut samples);
            }
        }

        // Drain what the decoder and resampler still hold.
        decoder.send_eof()?;
        while decoder.receive_frame(&mut decoded).is_ok() {
            resampler.run(&decoded, &mut resampled)?;
            append_f32_samples(&resampled, &mut samples);
        }
        if let Ok(Some(delay)) = resampler.flush(&mut resampled) {
            if delay.output > 0 {
                append_f32_samples(&resampled, &mut samples);
            }
        }

        log::debug!(
            "decoded {} as {:.1}s of mono pcm at {target_sample_rate} Hz",
            path.display(),
            samples.len() as f64 / target_sample_rate as f64,
        );

        Ok(Some(AudioSegment::new(samples, target_sample_rate, 1)))
    }
}

/// Append the f32 samples of a planar mono frame.
fn append_f32_samples(frame: &ffmpeg_next::util::frame::audio::Audio, out: &mut Vec<f32>) {
    let count = frame.samples();
    if count == 0 {
        return;
    }
    let data = frame.data(0);
    let floats = unsafe { std::slice::from_raw_parts(data.as_ptr() as *const f32, count) };
    out.extend_from_slice(floats);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_audio_nonexistent_file() {
        let reader = FfmpegAudioReader;
        let path = if cfg!(windows) {
            Path::new("Z:\\nonexistent\\recording.m4a")
        } else {
            Path::new("/nonexistent/recording.m4a")
        };
        assert!(reader.read_audio(path, 16000).is_err());
    }

    #[test]
    fn test_read_audio_rejects_non_audio_bytes() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("not-audio.wav");
        std::fs::write(&path, b"definitely not a riff header").unwrap();

        let reader = FfmpegAudioReader;
        assert!(reader.read_audio(&path, 16000).is_err());
    }
}
