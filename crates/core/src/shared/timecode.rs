/// Format a second offset as a `MM:SS` label.
///
/// Minutes are not wrapped at an hour: 65 minutes renders as `65:00`,
/// matching how offsets into long recordings are usually read.
pub fn format_timecode(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(format_timecode(0.0), "00:00");
    }

    #[test]
    fn test_sub_minute() {
        assert_eq!(format_timecode(45.0), "00:45");
    }

    #[test]
    fn test_minutes_and_seconds() {
        assert_eq!(format_timecode(125.0), "02:05");
    }

    #[test]
    fn test_fractional_seconds_truncate() {
        assert_eq!(format_timecode(59.9), "00:59");
    }

    #[test]
    fn test_over_an_hour_keeps_minutes() {
        assert_eq!(format_timecode(3900.0), "65:00");
    }

    #[test]
    fn test_negative_clamps_to_zero() {
        assert_eq!(format_timecode(-3.0), "00:00");
    }
}
