//! Human-readable elapsed times

use std::time::Duration;

/// Format an elapsed span for a report line
///
/// Below one millisecond prints `<1ms`, below one second prints milliseconds
/// with two decimals, anything longer prints seconds with two decimals.
pub fn format_duration(elapsed: Duration) -> String {
    let seconds = elapsed.as_secs_f64();
    if seconds < 1.0 {
        let millis = seconds * 1000.0;
        if millis < 1.0 {
            return "<1ms".to_string();
        }
        return format!("{millis:.2}ms");
    }
    format!("{seconds:.2}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_millisecond() {
        assert_eq!(format_duration(Duration::ZERO), "<1ms");
        assert_eq!(format_duration(Duration::from_micros(999)), "<1ms");
    }

    #[test]
    fn test_milliseconds() {
        assert_eq!(format_duration(Duration::from_millis(1)), "1.00ms");
        assert_eq!(format_duration(Duration::from_micros(12_346)), "12.35ms");
        assert_eq!(format_duration(Duration::from_millis(999)), "999.00ms");
    }

    #[test]
    fn test_seconds() {
        assert_eq!(format_duration(Duration::from_secs(1)), "1.00s");
        assert_eq!(format_duration(Duration::from_millis(2_500)), "2.50s");
    }
}
