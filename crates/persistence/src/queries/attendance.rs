// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Attendance queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use kestrel_domain::Attendance;
use time::Date;
use tracing::debug;

use crate::data_models::{AttendanceRow, encode_date};
use crate::diesel_schema::attendance;
use crate::error::PersistenceError;

/// Lists the attendance rows recorded for `date`.
///
/// # Errors
///
/// Returns an error if the database query fails or a row cannot be decoded.
pub fn list_attendance_for_date(
    conn: &mut SqliteConnection,
    date: Date,
) -> Result<Vec<Attendance>, PersistenceError> {
    let date: String = encode_date(date)?;
    debug!(attendance_date = %date, "Listing attendance");

    let rows: Vec<AttendanceRow> = attendance::table
        .filter(attendance::attendance_date.eq(&date))
        .select(AttendanceRow::as_select())
        .load(conn)?;

    rows.into_iter().map(Attendance::try_from).collect()
}
