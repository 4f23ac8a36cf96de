//! Lenient date parsing for SDTM `--DTC` style values.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

// ISO 8601 complete or partial date with optional time and UTC offset, as used in SDTM.
static ISO_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(\d{4})(?:-(\d{1,2})(?:-(\d{1,2})(?:[T ](\d{1,2}):(\d{2})(?::(\d{2})(?:\.\d+)?)?(Z|([+-])(\d{2}):?(\d{2}))?)?)?)?$",
    )
    .unwrap()
});

/// Other accepted layouts, tried in order after the ISO pattern.
const DATE_FORMATS: &[&str] = &["%Y/%m/%d", "%m/%d/%Y", "%d%b%Y", "%d-%b-%Y"];

/// Parse a date or date-time value.
///
/// Partial ISO dates resolve to the start of the period (`2020-03` is
/// 2020-03-01 00:00). Values carrying a UTC offset are normalized to UTC so
/// they compare correctly with each other. Returns `None` for anything
/// unparseable.
pub fn parse_date(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(caps) = ISO_DATE.captures(trimmed) {
        let field = |i: usize, default: u32| -> Option<u32> {
            match caps.get(i) {
                Some(m) => m.as_str().parse().ok(),
                None => Some(default),
            }
        };
        let year: i32 = caps.get(1)?.as_str().parse().ok()?;
        let date = NaiveDate::from_ymd_opt(year, field(2, 1)?, field(3, 1)?)?;
        let time = NaiveTime::from_hms_opt(field(4, 0)?, field(5, 0)?, field(6, 0)?)?;
        let local = date.and_time(time);

        let offset = match caps.get(8) {
            Some(sign) => {
                let (hours, minutes) = (field(9, 0)?, field(10, 0)?);
                if hours > 23 || minutes > 59 {
                    return None;
                }
                let seconds = i64::from(hours * 3600 + minutes * 60);
                if sign.as_str() == "-" { -seconds } else { seconds }
            }
            None => 0,
        };
        return local.checked_sub_signed(Duration::seconds(offset));
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_iso_dates() {
        assert_eq!(parse_date("2019-12-01"), Some(ymd(2019, 12, 1)));
        assert_eq!(parse_date(" 1990-05-01 "), Some(ymd(1990, 5, 1)));
    }

    #[test]
    fn test_partial_iso_dates() {
        assert_eq!(parse_date("2020-03"), Some(ymd(2020, 3, 1)));
        assert_eq!(parse_date("2020"), Some(ymd(2020, 1, 1)));
    }

    #[test]
    fn test_iso_datetime() {
        let parsed = parse_date("2020-01-10T08:30").unwrap();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2020, 1, 10).unwrap());
        assert_eq!(parsed.time(), NaiveTime::from_hms_opt(8, 30, 0).unwrap());
        assert!(parse_date("2020-01-10T08:30:15.250").is_some());
    }

    #[test]
    fn test_iso_datetime_with_offset() {
        assert_eq!(parse_date("2020-01-10T08:30Z"), parse_date("2020-01-10T08:30"));
        assert_eq!(parse_date("2020-01-10T08:30:00+02:00"), parse_date("2020-01-10T06:30"));
        assert_eq!(parse_date("2020-01-10T23:30-0130"), parse_date("2020-01-11T01:00"));
        assert!(parse_date("2020-01-10T08:30+25:00").is_none());
        assert!(parse_date("2020-01-10Z").is_none());
    }

    #[test]
    fn test_other_layouts() {
        assert_eq!(parse_date("2020/01/10"), Some(ymd(2020, 1, 10)));
        assert_eq!(parse_date("01/10/2020"), Some(ymd(2020, 1, 10)));
        assert_eq!(parse_date("10JAN2020"), Some(ymd(2020, 1, 10)));
        assert_eq!(parse_date("10-Jan-2020"), Some(ymd(2020, 1, 10)));
    }

    #[test]
    fn test_invalid_dates() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date("2020-13-01"), None);
        assert_eq!(parse_date("2020-02-30"), None);
        assert_eq!(parse_date("UNKNOWN"), None);
    }
}
