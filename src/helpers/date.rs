//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::{Error, Result};

/// Display pattern used for publication dates, e.g. "15 Mar 2021"
pub const DEFAULT_DATE_FORMAT: &str = "dd MMM yyyy";

const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%z", "%Y-%m-%dT%H:%M:%S%.f%z"];
const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Format a CMS timestamp as "dd MMM yyyy"
///
/// A missing or unparseable timestamp is an `InvalidArgument` error; callers
/// that want a placeholder must substitute one themselves.
///
/// # Examples
/// ```
/// # use spacetravelling::helpers::format_date;
/// assert_eq!(format_date(Some("2021-03-15T19:25:28+0000")).unwrap(), "15 Mar 2021");
/// assert!(format_date(None).is_err());
/// ```
pub fn format_date(input: Option<&str>) -> Result<String> {
    format_date_with(input, DEFAULT_DATE_FORMAT)
}

/// Format a CMS timestamp with a date-fns style pattern
pub fn format_date_with(input: Option<&str>, pattern: &str) -> Result<String> {
    let input = input
        .ok_or_else(|| Error::InvalidArgument("expected a date, got nothing".to_string()))?;
    let date = parse_timestamp(input)?;
    Ok(format_datetime(&date, pattern))
}

/// Format a date using a date-fns compatible pattern ("dd MMM yyyy")
pub fn format_datetime<Tz: TimeZone>(date: &DateTime<Tz>, pattern: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let chrono_format = date_fns_to_chrono_format(pattern);
    date.format(&chrono_format).to_string()
}

/// Parse the timestamp shapes a CMS hands out, normalized to UTC
///
/// Values without an offset are taken to be UTC already.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(input) {
        return Ok(date.with_timezone(&Utc));
    }

    // Prismic writes offsets without a colon: 2021-03-15T19:25:28+0000
    for format in OFFSET_FORMATS {
        if let Ok(date) = DateTime::parse_from_str(input, format) {
            return Ok(date.with_timezone(&Utc));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| Error::InvalidArgument(format!("{:?} is not a valid date", input)))
}

/// Convert a date-fns pattern to a chrono format string
///
/// Runs of the same letter form one token; anything else is copied literally.
fn date_fns_to_chrono_format(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut result = String::with_capacity(pattern.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let mut run = 1;
        while i + run < chars.len() && chars[i + run] == c {
            run += 1;
        }

        let token = match (c, run) {
            ('y', 4) => Some("%Y"),
            ('y', 2) => Some("%y"),
            ('M', 4) => Some("%B"),
            ('M', 3) => Some("%b"),
            ('M', 2) => Some("%m"),
            ('M', 1) => Some("%-m"),
            ('d', 2) => Some("%d"),
            ('d', 1) => Some("%-d"),
            ('E', 4) => Some("%A"),
            ('E', 1..=3) => Some("%a"),
            ('H', 2) => Some("%H"),
            ('h', 2) => Some("%I"),
            ('m', 2) => Some("%M"),
            ('s', 2) => Some("%S"),
            ('a', 1) => Some("%p"),
            _ => None,
        };

        match token {
            Some(token) => result.push_str(token),
            None => {
                for _ in 0..run {
                    if c == '%' {
                        result.push_str("%%");
                    } else {
                        result.push(c);
                    }
                }
            }
        }

        i += run;
    }

    result
}
