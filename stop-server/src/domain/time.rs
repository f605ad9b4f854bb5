//! Arrival time parsing.
//!
//! Arrival times are plain times of day. Callers supply them as "HH:MM" or
//! "HH:MM:SS"; both forms are accepted and compared exactly.

use chrono::NaiveTime;

/// Error returned when parsing an invalid arrival time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid arrival time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Parse an arrival time from "HH:MM" or "HH:MM:SS".
///
/// # Examples
///
/// ```
/// use stop_server::domain::parse_arrival_time;
/// use chrono::NaiveTime;
///
/// let t = parse_arrival_time("09:15").unwrap();
/// assert_eq!(t, NaiveTime::from_hms_opt(9, 15, 0).unwrap());
///
/// let t = parse_arrival_time("09:15:30").unwrap();
/// assert_eq!(t, NaiveTime::from_hms_opt(9, 15, 30).unwrap());
///
/// assert!(parse_arrival_time("9:15").is_err());
/// assert!(parse_arrival_time("24:00").is_err());
/// ```
pub fn parse_arrival_time(s: &str) -> Result<NaiveTime, TimeError> {
    let bytes = s.as_bytes();

    let seconds = match bytes.len() {
        5 => None,
        8 => {
            if bytes[5] != b':' {
                return Err(TimeError::new("expected colon at position 5"));
            }
            Some(&bytes[6..8])
        }
        _ => return Err(TimeError::new("expected HH:MM or HH:MM:SS format")),
    };

    if bytes[2] != b':' {
        return Err(TimeError::new("expected colon at position 2"));
    }

    let hour =
        parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
    if hour > 23 {
        return Err(TimeError::new("hour must be 0-23"));
    }

    let minute =
        parse_two_digits(&bytes[3..5]).ok_or_else(|| TimeError::new("invalid minute digits"))?;
    if minute > 59 {
        return Err(TimeError::new("minute must be 0-59"));
    }

    let second = match seconds {
        Some(digits) => {
            parse_two_digits(digits).ok_or_else(|| TimeError::new("invalid second digits"))?
        }
        None => 0,
    };
    if second > 59 {
        return Err(TimeError::new("second must be 0-59"));
    }

    NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| TimeError::new("invalid time"))
}

/// Parse exactly two ASCII digits.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    match bytes {
        [a, b] if a.is_ascii_digit() && b.is_ascii_digit() => {
            Some(u32::from(a - b'0') * 10 + u32::from(b - b'0'))
        }
        _ => None,
    }
}
