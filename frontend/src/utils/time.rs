use chrono::{DateTime, NaiveDateTime, Utc};

/// Formats an elapsed duration in seconds as "{h}h {m}m {s}s".
pub fn format_elapsed(total_seconds: i64) -> String {
    let total_seconds = total_seconds.max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{}h {}m {}s", hours, minutes, seconds)
}

/// Parses a server check-in timestamp. Accepts RFC 3339, and a bare naive
/// timestamp read as UTC for servers that omit the offset.
pub fn parse_check_in(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

/// Whole seconds between `check_in` and `now`, clamped at zero so clock
/// skew never produces a negative counter.
pub fn seed_elapsed(check_in: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - check_in).num_seconds().max(0)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn formats_zero_and_mixed_durations() {
        assert_eq!(format_elapsed(0), "0h 0m 0s");
        assert_eq!(format_elapsed(59), "0h 0m 59s");
        assert_eq!(format_elapsed(3661), "1h 1m 1s");
        assert_eq!(format_elapsed(7322), "2h 2m 2s");
    }

    #[test]
    fn negative_durations_clamp_to_zero() {
        assert_eq!(format_elapsed(-5), "0h 0m 0s");
    }

    #[test]
    fn parses_rfc3339_and_naive_timestamps() {
        let with_offset = parse_check_in("2025-06-01T08:00:00Z").unwrap();
        let naive_t = parse_check_in("2025-06-01T08:00:00").unwrap();
        let naive_space = parse_check_in("2025-06-01 08:00:00").unwrap();
        assert_eq!(with_offset, naive_t);
        assert_eq!(naive_t, naive_space);
        assert!(parse_check_in("not a timestamp").is_none());
    }

    #[test]
    fn seeded_elapsed_counts_forward_and_clamps_backward() {
        let check_in = parse_check_in("2025-06-01T08:00:00Z").unwrap();
        let later = parse_check_in("2025-06-01T09:30:05Z").unwrap();
        assert_eq!(seed_elapsed(check_in, later), 5405);
        assert_eq!(seed_elapsed(later, check_in), 0);
    }
}
