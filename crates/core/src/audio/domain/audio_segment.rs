/// A run of decoded audio: interleaved PCM samples normalized to [-1.0, 1.0].
#[derive(Clone, Debug)]
pub struct AudioSegment {
    samples: Vec<f32>,
    sample_rate: u32,
    channels: u16,
}

impl AudioSegment {
    pub fn new(samples: Vec<f32>, sample_rate: u32, channels: u16) -> Self {
        Self {
            samples,
            sample_rate,
            channels,
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / (self.sample_rate as f64 * self.channels as f64)
    }

    /// Index of the interleaved sample at `time` seconds, aligned to a frame
    /// boundary so multi-channel slices never start mid-frame.
    pub fn sample_index_at_time(&self, time: f64) -> usize {
        let frame = (time.max(0.0) * self.sample_rate as f64) as usize;
        frame * self.channels as usize
    }

    /// Copy out the samples between `start` and `end` seconds as a new
    /// segment. The range is clamped to the segment bounds; an inverted or
    /// fully out-of-range request yields an empty segment.
    pub fn slice_seconds(&self, start: f64, end: f64) -> AudioSegment {
        let from = self.sample_index_at_time(start).min(self.samples.len());
        let to = self.sample_index_at_time(end).min(self.samples.len());
        let samples = if from < to {
            self.samples[from..to].to_vec()
        } else {
            Vec::new()
        };
        AudioSegment::new(samples, self.sample_rate, self.channels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_keeps_fields() {
        let seg = AudioSegment::new(vec![0.0; 16000], 16000, 1);
        assert_eq!(seg.samples().len(), 16000);
        assert_eq!(seg.sample_rate(), 16000);
        assert_eq!(seg.channels(), 1);
    }

    #[test]
    fn test_duration_mono() {
        let seg = AudioSegment::new(vec![0.0; 48000], 16000, 1);
        assert_relative_eq!(seg.duration(), 3.0);
    }

    #[test]
    fn test_duration_stereo() {
        let seg = AudioSegment::new(vec![0.0; 96000], 48000, 2);
        assert_relative_eq!(seg.duration(), 1.0);
    }

    #[test]
    fn test_sample_index_at_time_stereo_frame_aligned() {
        let seg = AudioSegment::new(vec![0.0; 32000], 16000, 2);
        // 0.5 s into a stereo stream is frame 8000, interleaved index 16000.
        assert_eq!(seg.sample_index_at_time(0.5), 16000);
    }

    #[test]
    fn test_slice_seconds_extracts_range() {
        let mut samples = vec![0.0f32; 16000];
        samples[8000] = 0.7;
        let seg = AudioSegment::new(samples, 16000, 1);

        let slice = seg.slice_seconds(0.25, 0.75);
        assert_eq!(slice.samples().len(), 8000);
        // The marked sample at 0.5 s lands a quarter second into the slice.
        assert_eq!(slice.samples()[4000], 0.7);
    }

    #[test]
    fn test_slice_seconds_clamps_past_end() {
        let seg = AudioSegment::new(vec![0.0; 16000], 16000, 1);
        let slice = seg.slice_seconds(0.5, 10.0);
        assert_eq!(slice.samples().len(), 8000);
    }

    #[test]
    fn test_slice_seconds_negative_start_clamps_to_zero() {
        let seg = AudioSegment::new(vec![0.0; 16000], 16000, 1);
        let slice = seg.slice_seconds(-2.0, 0.5);
        assert_eq!(slice.samples().len(), 8000);
    }

    #[test]
    fn test_slice_seconds_inverted_range_is_empty() {
        let seg = AudioSegment::new(vec![0.0; 16000], 16000, 1);
        assert!(seg.slice_seconds(0.8, 0.2).samples().is_empty());
    }
}
