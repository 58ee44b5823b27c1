use chrono::{Datelike, Local, NaiveDate};

use crate::models::DateFormat;
use crate::utils::{accept, Rejection};
use crate::validation::DateValidator;

pub struct BirthDateValidator;

impl BirthDateValidator {
    /// Valid when `date` parses with `format` and the person is at least
    /// `min_age` whole years old today (local time).
    pub fn validate(date: &str, min_age: u32, format: DateFormat) -> bool {
        let today = Local::now().naive_local().date();
        Self::validate_on(date, min_age, format, today)
    }

    /// Same as [`BirthDateValidator::validate`] with an explicit current date.
    pub fn validate_on(date: &str, min_age: u32, format: DateFormat, today: NaiveDate) -> bool {
        accept("Birth date", Self::check(date, min_age, format, today))
    }

    pub(crate) fn check(
        date: &str,
        min_age: u32,
        format: DateFormat,
        today: NaiveDate,
    ) -> Result<i64, Rejection> {
        let birth = DateValidator::parse(date, format)?;
        let age = Self::age_on(birth, today);
        if age < i64::from(min_age) {
            return Err(Rejection::BelowMinimumAge { age, min_age });
        }
        Ok(age)
    }

    /// Whole years elapsed between `birth` and `today`. Negative for dates in
    /// the future.
    pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i64 {
        let mut age = i64::from(today.year()) - i64::from(birth.year());
        if (today.month(), today.day()) < (birth.month(), birth.day()) {
            age -= 1;
        }
        age
    }
}
