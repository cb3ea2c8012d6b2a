//! Calendar date text helpers.
//!
//! Dates cross the driver boundary as `Y-M-D` text. The components are not
//! zero-padded (`2021-1-5`, not `2021-01-05`); that is the format existing
//! rows were written with, so both directions keep it.

use jiff::civil::Date;

use crate::error::{DecodeError, Result};

/// Render a calendar date in the driver's unpadded `Y-M-D` text form.
pub fn format_date(date: Date) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}

/// Parse the driver's `Y-M-D` text form into a calendar date.
///
/// Requires exactly three `-`-separated integer tokens, a month in
/// `1..=12`, and a day valid for that month and year (leap years included).
/// Every failure mode reports the original text.
pub fn parse_date(text: &str) -> Result<Date> {
    let fail = || DecodeError::new(format!("Date parsing failed for value: {text}"));
    let tokens: Vec<&str> = text.split('-').collect();
    let (year, month, day) = match tokens.as_slice() {
        [y, m, d] => (*y, *m, *d),
        _ => return Err(fail()),
    };
    let year: i16 = year.parse().map_err(|_| fail())?;
    let month: i8 = month.parse().map_err(|_| fail())?;
    let day: i8 = day.parse().map_err(|_| fail())?;
    Date::new(year, month, day).map_err(|_| fail())
}
