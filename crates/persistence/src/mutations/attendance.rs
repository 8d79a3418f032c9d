// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Attendance mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use kestrel_domain::{Attendance, AttendanceId, ProfileId};
use time::Date;
use tracing::info;

use crate::data_models::{encode_date, new_id, now_timestamp};
use crate::diesel_schema::attendance;
use crate::error::PersistenceError;

/// Records `member_id` as present on `date`.
///
/// # Errors
///
/// Returns `PersistenceError::ConstraintViolation` if the member is already
/// marked present on that date, or another error if the insert fails.
pub fn insert_attendance(
    conn: &mut SqliteConnection,
    member_id: &ProfileId,
    date: Date,
    marked_by: &ProfileId,
) -> Result<Attendance, PersistenceError> {
    let id: String = new_id();
    let (_, created_at) = now_timestamp()?;
    let date_text: String = encode_date(date)?;

    diesel::insert_into(attendance::table)
        .values((
            attendance::id.eq(&id),
            attendance::user_id.eq(member_id.as_str()),
            attendance::attendance_date.eq(&date_text),
            attendance::marked_by.eq(marked_by.as_str()),
            attendance::created_at.eq(&created_at),
        ))
        .execute(conn)?;

    info!(
        attendance_id = %id,
        member_id = %member_id,
        attendance_date = %date_text,
        marked_by = %marked_by,
        "Marked member present"
    );

    Ok(Attendance {
        id: AttendanceId::new(id),
        member_id: member_id.clone(),
        attendance_date: date,
        marked_by: marked_by.clone(),
    })
}

/// Deletes a presence record.
///
/// # Returns
///
/// The number of rows deleted.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_attendance(
    conn: &mut SqliteConnection,
    id: &AttendanceId,
) -> Result<usize, PersistenceError> {
    let deleted: usize = diesel::delete(attendance::table)
        .filter(attendance::id.eq(id.as_str()))
        .execute(conn)?;

    info!(attendance_id = %id, deleted, "Marked member absent");
    Ok(deleted)
}
