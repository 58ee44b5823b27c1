use chrono::{Datelike, NaiveDate};

use crate::models::DateFormat;
use crate::utils::{accept, is_blank, Rejection};

// Years below this never round-trip; two-digit years are ambiguous.
const MIN_YEAR: u32 = 100;

/// Strict, format-specific date parsing. A string is only read with the
/// pattern it is given; there is no fallback to the other patterns.
pub struct DateValidator;

impl DateValidator {
    pub fn validate(date: &str, format: DateFormat) -> bool {
        accept("Date", Self::parse(date, format))
    }

    /// Parses `date` with `format`, rejecting anything that is not an exact
    /// calendar date.
    pub fn parse(date: &str, format: DateFormat) -> Result<NaiveDate, Rejection> {
        // Anything after the third component is ignored.
        let parts: Vec<&str> = date.split(format.separator()).take(3).collect();
        if parts.len() < 3 {
            return Err(Rejection::DateComponents(parts.len()));
        }

        let components = [
            Self::component(parts[0])?,
            Self::component(parts[1])?,
            Self::component(parts[2])?,
        ];
        let (year, month, day) = format.arrange(components);

        let overflow = Rejection::CalendarOverflow { year, month, day };
        if year < MIN_YEAR {
            return Err(overflow);
        }
        let parsed = i32::try_from(year)
            .ok()
            .and_then(|y| NaiveDate::from_ymd_opt(y, month, day))
            .ok_or_else(|| overflow.clone())?;

        // Rendered components must reproduce the input exactly.
        if parsed.year() as u32 != year || parsed.month() != month || parsed.day() != day {
            return Err(overflow);
        }

        Ok(parsed)
    }

    /// Surrounding blanks and a leading `+` are allowed around the digits.
    fn component(part: &str) -> Result<u32, Rejection> {
        let invalid = || Rejection::DateComponent(part.to_string());
        let trimmed = part.trim_matches(is_blank);
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        match digits.parse::<u32>() {
            Ok(0) | Err(_) => Err(invalid()),
            Ok(value) => Ok(value),
        }
    }
}
