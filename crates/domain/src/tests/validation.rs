// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::{Date, Month};

use crate::{
    DomainError, coerce_quantity, format_calendar_date, normalize_description,
    parse_calendar_date, require_non_empty,
};

#[test]
fn test_require_non_empty_returns_trimmed_value() {
    assert_eq!(require_non_empty("name", "  Wing  ").unwrap(), "Wing");
}

#[test]
fn test_require_non_empty_reports_field() {
    let result = require_non_empty("content", "   ");
    assert_eq!(result, Err(DomainError::EmptyField { field: "content" }));
}

#[test]
fn test_normalize_description() {
    assert_eq!(normalize_description(None), None);
    assert_eq!(normalize_description(Some("")), None);
    assert_eq!(
        normalize_description(Some(" spare parts ")),
        Some(String::from("spare parts"))
    );
}

#[test]
fn test_coerce_quantity_parses_plain_integers() {
    assert_eq!(coerce_quantity("0"), 0);
    assert_eq!(coerce_quantity("42"), 42);
    assert_eq!(coerce_quantity("  7"), 7);
    assert_eq!(coerce_quantity("+3"), 3);
}

#[test]
fn test_coerce_quantity_reads_leading_digits() {
    assert_eq!(coerce_quantity("12 boxes"), 12);
    assert_eq!(coerce_quantity("3.9"), 3);
}

#[test]
fn test_coerce_quantity_never_rejects() {
    assert_eq!(coerce_quantity(""), 0);
    assert_eq!(coerce_quantity("abc"), 0);
    assert_eq!(coerce_quantity("-5"), 0);
    assert_eq!(coerce_quantity("-"), 0);
}

#[test]
fn test_coerce_quantity_saturates() {
    assert_eq!(coerce_quantity("99999999999999999999"), u32::MAX);
}

#[test]
fn test_calendar_date_round_trip() {
    let date: Date = Date::from_calendar_date(2026, Month::October, 5).unwrap();
    let text: String = format_calendar_date(date).unwrap();
    assert_eq!(text, "2026-10-05");
    assert_eq!(parse_calendar_date(&text).unwrap(), date);
}

#[test]
fn test_parse_calendar_date_rejects_garbage() {
    let result = parse_calendar_date("2026-13-01");
    assert!(matches!(result, Err(DomainError::InvalidDate { .. })));
}
