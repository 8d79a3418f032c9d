// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const CALENDAR_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Checks that a required text field is not blank.
///
/// # Arguments
///
/// * `field` - The field name reported on failure
/// * `value` - The raw input
///
/// # Returns
///
/// The input with surrounding whitespace removed.
///
/// # Errors
///
/// Returns `DomainError::EmptyField` if nothing remains after trimming.
pub fn require_non_empty<'a>(field: &'static str, value: &'a str) -> Result<&'a str, DomainError> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyField { field });
    }
    Ok(trimmed)
}

/// Normalizes an optional description: blank input is stored as `None`.
#[must_use]
pub fn normalize_description(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|description| !description.is_empty())
        .map(String::from)
}

/// Coerces raw quantity input into a non-negative integer.
///
/// Leading whitespace is skipped and the longest run of digits (with an
/// optional sign) is read, so `"12 boxes"` yields 12. Input with no leading
/// digits yields 0, negative values clamp to 0, and values beyond `u32::MAX`
/// saturate.
#[must_use]
pub fn coerce_quantity(raw: &str) -> u32 {
    let input: &str = raw.trim_start();
    let (negative, digits): (bool, &str) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    let digit_count: usize = digits.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count == 0 || negative {
        return 0;
    }

    digits[..digit_count]
        .bytes()
        .fold(0u32, |acc, digit| {
            acc.saturating_mul(10).saturating_add(u32::from(digit - b'0'))
        })
}

/// Parses an ISO `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if the input is not a valid date.
pub fn parse_calendar_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), CALENDAR_DATE).map_err(|e| DomainError::InvalidDate {
        value: value.to_string(),
        error: e.to_string(),
    })
}

/// Formats a calendar date as ISO `YYYY-MM-DD`.
///
/// ISO dates sort lexicographically in calendar order, which the store
/// relies on for range filters.
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if the date cannot be formatted.
pub fn format_calendar_date(date: Date) -> Result<String, DomainError> {
    date.format(CALENDAR_DATE)
        .map_err(|e| DomainError::InvalidDate {
            value: date.to_string(),
            error: e.to_string(),
        })
}
