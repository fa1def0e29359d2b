//! Date helper functions

use chrono::{Local, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

/// Display format for absolute dates, e.g. "March 1, 2025"
const DISPLAY_FORMAT: &str = "%B %-d, %Y";

/// Format a publish date for display
///
/// # Examples
/// ```ignore
/// format_date(date, false, today) // -> "June 15, 2024"
/// format_date(date, true, today)  // -> "June 15, 2024 (3mo ago)"
/// ```
pub fn format_date(date: NaiveDate, include_relative: bool, today: NaiveDate) -> String {
    let full_date = date.format(DISPLAY_FORMAT).to_string();
    if !include_relative {
        return full_date;
    }
    format!("{} ({})", full_date, relative_date(date, today))
}

/// Get relative time (like "3mo ago") between a date and today
pub fn relative_date(date: NaiveDate, today: NaiveDate) -> String {
    let days = today.signed_duration_since(date).num_days();

    if days < 1 {
        "Today".to_string()
    } else if days < 30 {
        format!("{}d ago", days)
    } else if days < 365 {
        format!("{}mo ago", days / 30)
    } else {
        format!("{}y ago", days / 365)
    }
}

/// Parse a date produced by [`format_date`] (with or without the relative suffix)
pub fn parse_display_date(s: &str) -> Option<NaiveDate> {
    let absolute = s.split(" (").next().unwrap_or(s).trim();
    NaiveDate::parse_from_str(absolute, "%B %d, %Y").ok()
}

/// Today's date in an IANA timezone; local time if empty or unknown
pub fn today_in(timezone: &str) -> NaiveDate {
    if timezone.is_empty() {
        return Local::now().date_naive();
    }
    match timezone.parse::<Tz>() {
        Ok(tz) => Utc::now().with_timezone(&tz).date_naive(),
        Err(_) => {
            tracing::warn!("Unknown timezone {:?}, using local time", timezone);
            Local::now().date_naive()
        }
    }
}

/// RFC 2822 timestamp at midnight UTC, as RSS expects
pub fn rss_date(date: NaiveDate) -> String {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| Utc.from_utc_datetime(&dt).to_rfc2822())
        .unwrap_or_default()
}

/// Format date in ISO 8601 form (like "2024-01-15")
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date() {
        let today = ymd(2025, 3, 1);
        assert_eq!(format_date(ymd(2024, 6, 15), false, today), "June 15, 2024");
        assert_eq!(format_date(ymd(2025, 3, 1), false, today), "March 1, 2025");
    }

    #[test]
    fn test_relative_thresholds() {
        let today = ymd(2025, 3, 1);
        assert_eq!(relative_date(ymd(2025, 3, 1), today), "Today");
        assert_eq!(relative_date(ymd(2025, 2, 28), today), "1d ago");
        assert_eq!(relative_date(ymd(2025, 1, 31), today), "29d ago");
        assert_eq!(relative_date(ymd(2025, 1, 30), today), "1mo ago");
        assert_eq!(relative_date(ymd(2024, 3, 2), today), "12mo ago");
        assert_eq!(relative_date(ymd(2024, 3, 1), today), "1y ago");
        assert_eq!(relative_date(ymd(2022, 3, 1), today), "3y ago");
    }

    #[test]
    fn test_future_date_is_today() {
        assert_eq!(relative_date(ymd(2025, 3, 5), ymd(2025, 3, 1)), "Today");
    }

    #[test]
    fn test_format_with_relative() {
        let today = ymd(2025, 3, 1);
        assert_eq!(
            format_date(ymd(2024, 6, 15), true, today),
            "June 15, 2024 (8mo ago)"
        );
    }

    #[test]
    fn test_display_round_trip() {
        let today = ymd(2025, 3, 1);
        for date in [ymd(2024, 1, 1), ymd(2024, 6, 15), ymd(2025, 3, 1), ymd(1999, 12, 31)] {
            assert_eq!(parse_display_date(&format_date(date, false, today)), Some(date));
            assert_eq!(parse_display_date(&format_date(date, true, today)), Some(date));
        }
    }

    #[test]
    fn test_today_in_falls_back() {
        // Unknown zone falls back to local time rather than failing
        let local = Local::now().date_naive();
        let fallback = today_in("Not/A_Zone");
        assert!((fallback - local).num_days().abs() <= 1);
        let vancouver = today_in("America/Vancouver");
        assert!((vancouver - local).num_days().abs() <= 1);
    }

    #[test]
    fn test_rss_date() {
        assert_eq!(rss_date(ymd(2024, 1, 15)), "Mon, 15 Jan 2024 00:00:00 +0000");
    }
}
