//! Calendar-aware age calculation.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Datetime layouts tolerated for legacy rows, tried after plain dates.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Birth date could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unparseable date: {0:?}")]
pub struct DateParseError(pub String);

/// Parse a stored birth date.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS` and `YYYY-MM-DDTHH:MM:SS`.
/// Anything else is cut at the first `T` or space and the head is parsed as a
/// plain date.
pub fn parse_birth_date(input: &str) -> Result<NaiveDate, DateParseError> {
    if let Ok(date) = NaiveDate::parse_from_str(input, DATE_FORMAT) {
        return Ok(date);
    }

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(datetime.date());
        }
    }

    let head = input.split(|c: char| c == 'T' || c == ' ').next().unwrap_or_default();
    NaiveDate::parse_from_str(head, DATE_FORMAT).map_err(|_| DateParseError(input.to_string()))
}

/// Anything that can be turned into a birth date.
pub trait AsBirthDate {
    fn as_birth_date(&self) -> Result<NaiveDate, DateParseError>;
}

impl AsBirthDate for NaiveDate {
    fn as_birth_date(&self) -> Result<NaiveDate, DateParseError> {
        Ok(*self)
    }
}

impl AsBirthDate for NaiveDateTime {
    fn as_birth_date(&self) -> Result<NaiveDate, DateParseError> {
        Ok(self.date())
    }
}

impl AsBirthDate for str {
    fn as_birth_date(&self) -> Result<NaiveDate, DateParseError> {
        parse_birth_date(self)
    }
}

impl AsBirthDate for String {
    fn as_birth_date(&self) -> Result<NaiveDate, DateParseError> {
        parse_birth_date(self)
    }
}

impl<T: AsBirthDate + ?Sized> AsBirthDate for &T {
    fn as_birth_date(&self) -> Result<NaiveDate, DateParseError> {
        (**self).as_birth_date()
    }
}

/// Whole years elapsed between `birth` and `reference`.
///
/// One year is subtracted while the birthday has not yet come round in the
/// reference year. Negative for birth dates after the reference.
pub fn age_on(birth: NaiveDate, reference: NaiveDate) -> i32 {
    let mut age = reference.year() - birth.year();
    if (reference.month(), reference.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Age in whole years of someone born on `birth_date`, as of `reference`.
pub fn calc_age<D: AsBirthDate + ?Sized>(
    birth_date: &D,
    reference: NaiveDate,
) -> Result<i32, DateParseError> {
    Ok(age_on(birth_date.as_birth_date()?, reference))
}
