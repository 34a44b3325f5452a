use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse a backend timestamp string into a UTC datetime.
///
/// The backend stores timestamps as opaque strings: class times arrive in the
/// `datetime-local` form ("2025-01-01T10:00") while server-generated fields
/// are full RFC 3339. Both are accepted; naive values are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_rfc3339() {
        let dt = parse_timestamp("2025-01-01T10:00:00Z").unwrap();
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let dt = parse_timestamp("2025-01-01T12:00:00+02:00").unwrap();
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn parses_datetime_local() {
        let dt = parse_timestamp("2025-01-01T10:00").unwrap();
        assert_eq!(dt.hour(), 10);
        assert_eq!(dt.minute(), 0);
    }

    #[test]
    fn parses_with_seconds() {
        assert!(parse_timestamp("2025-06-15T09:05:30").is_some());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("not a date").is_none());
        assert!(parse_timestamp("").is_none());
    }
}
