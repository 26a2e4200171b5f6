//! Playable duration estimate

/// Convert a container-reported duration into whole seconds.
///
/// Libraries tend to truncate the reported value, so one second is added on
/// top of the floor. Zero, negative, non-finite or missing durations give
/// `None`.
pub fn estimate_duration(reported_secs: Option<f64>) -> Option<u64> {
    let secs = reported_secs?;
    if !secs.is_finite() || secs <= 0.0 {
        return None;
    }
    Some(secs.floor() as u64 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fractional_duration() {
        assert_eq!(estimate_duration(Some(12.7)), Some(13));
        assert_eq!(estimate_duration(Some(0.4)), Some(1));
    }

    #[test]
    fn test_whole_duration_still_rounds_up() {
        assert_eq!(estimate_duration(Some(60.0)), Some(61));
    }

    #[test]
    fn test_unknown_duration() {
        assert_eq!(estimate_duration(None), None);
        assert_eq!(estimate_duration(Some(0.0)), None);
        assert_eq!(estimate_duration(Some(-3.5)), None);
        assert_eq!(estimate_duration(Some(f64::NAN)), None);
    }
}
