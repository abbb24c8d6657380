use crate::shared::constants::{STRIDE_SECS, WINDOW_SECS};

/// One transcription window: `[start, end)` in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScanWindow {
    pub start: f64,
    pub end: f64,
}

impl ScanWindow {
    pub fn length(&self) -> f64 {
        self.end - self.start
    }
}

/// Lay out the overlapping windows covering a recording.
///
/// Starts advance by the stride from offset 0 up to the whole-second ceiling
/// of the duration; each window end is clamped to that ceiling. For a
/// duration `D` this yields exactly `ceil(D / stride)` windows.
pub fn plan_windows(duration_secs: f64) -> Vec<ScanWindow> {
    let ceiling = duration_secs.ceil();
    let mut windows = Vec::new();
    let mut start = 0.0;
    while start < ceiling {
        windows.push(ScanWindow {
            start,
            end: (start + WINDOW_SECS).min(ceiling),
        });
        start += STRIDE_SECS;
    }
    windows
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_window_count_matches_ceil_of_duration_over_stride() {
        for duration in [1.0, 14.9, 15.0, 15.1, 60.0, 61.5, 300.0, 3600.0] {
            let expected = (duration / STRIDE_SECS).ceil() as usize;
            assert_eq!(
                plan_windows(duration).len(),
                expected,
                "duration {duration}"
            );
        }
    }

    #[test]
    fn test_zero_duration_yields_no_windows() {
        assert!(plan_windows(0.0).is_empty());
    }

    #[test]
    fn test_windows_overlap_by_window_minus_stride() {
        let windows = plan_windows(120.0);
        assert_relative_eq!(windows[0].start, 0.0);
        assert_relative_eq!(windows[0].end, 20.0);
        assert_relative_eq!(windows[1].start, 15.0);
        assert_relative_eq!(windows[1].end, 35.0);
    }

    #[test]
    fn test_final_window_clamped_to_ceiling() {
        let windows = plan_windows(47.3);
        let last = windows.last().unwrap();
        assert_relative_eq!(last.start, 45.0);
        assert_relative_eq!(last.end, 48.0);
        assert!(last.length() < WINDOW_SECS);
    }

    #[test]
    fn test_short_recording_single_clamped_window() {
        let windows = plan_windows(7.0);
        assert_eq!(windows.len(), 1);
        assert_relative_eq!(windows[0].start, 0.0);
        assert_relative_eq!(windows[0].end, 7.0);
    }
}
