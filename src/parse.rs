//! Parsing primitives

use chrono::{DateTime, NaiveDate};
use lazy_regex::regex;

/// Turn a label into a URL path segment: lowercase, whitespace runs become
/// a single `-`.
pub fn slug(s: &str) -> String {
    regex!(r"\s+").replace_all(&s.to_lowercase(), "-").into_owned()
}

/// Parse a publication timestamp, either RFC 3339 or a bare `YYYY-MM-DD`
/// date.
pub fn date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t.date_naive());
    }
    // Timestamps without a zone, as some exports write them.
    if let Ok(t) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
    {
        return Some(t.date());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug() {
        assert_eq!(slug("Compostable Bags"), "compostable-bags");
        assert_eq!(slug("Zero   Waste\tLiving"), "zero-waste-living");
        assert_eq!(slug("EPR"), "epr");
        assert_eq!(slug(" lead"), "-lead");
        assert_eq!(slug(""), "");
    }

    #[test]
    fn test_date() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(date("2024-03-05"), Some(d));
        assert_eq!(date("2024-03-05T10:20:30Z"), Some(d));
        assert_eq!(date("2024-03-05T10:20:30.123+02:00"), Some(d));
        assert_eq!(date("2024-03-05T10:20:30"), Some(d));
        assert_eq!(date("yesterday"), None);
        assert_eq!(date(""), None);
    }
}
