// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row shapes and their conversion into domain types.
//!
//! Identifiers are UUID v4 text. Timestamps are UTC text with a fixed-width
//! nanosecond fraction so that ordering by the text column is chronological.
//! Calendar dates are `YYYY-MM-DD` text, which orders the same way.

use diesel::prelude::*;
use kestrel_domain::{
    Attendance, AttendanceId, InventoryItem, ItemId, LogId, Profile, ProfileId, Project,
    ProjectId, ProjectLog, ProjectMember, Role, format_calendar_date, parse_calendar_date,
};
use num_traits::ToPrimitive;
use serde::Serialize;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::diesel_schema::{attendance, inventory_items, profiles, project_logs, projects};
use crate::error::PersistenceError;

const TIMESTAMP: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:9]Z");

/// A project log together with its author's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectLogEntry {
    /// The log entry.
    #[serde(flatten)]
    pub log: ProjectLog,
    /// The author's profile name.
    pub author_name: String,
}

/// Generates a fresh opaque identifier.
#[must_use]
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Returns the current instant together with its encoded form.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be formatted.
pub fn now_timestamp() -> Result<(OffsetDateTime, String), PersistenceError> {
    let now: OffsetDateTime = OffsetDateTime::now_utc();
    let encoded: String = encode_timestamp(now)?;
    Ok((now, encoded))
}

/// Encodes an instant as UTC timestamp text.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be formatted.
pub fn encode_timestamp(value: OffsetDateTime) -> Result<String, PersistenceError> {
    value
        .to_offset(UtcOffset::UTC)
        .format(TIMESTAMP)
        .map_err(|e| PersistenceError::InvalidStoredValue {
            field: "timestamp",
            message: e.to_string(),
        })
}

fn decode_timestamp(field: &'static str, value: &str) -> Result<OffsetDateTime, PersistenceError> {
    PrimitiveDateTime::parse(value, TIMESTAMP)
        .map(PrimitiveDateTime::assume_utc)
        .map_err(|e| PersistenceError::InvalidStoredValue {
            field,
            message: format!("'{value}': {e}"),
        })
}

/// Encodes a calendar date as `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns an error if the date cannot be formatted.
pub fn encode_date(value: Date) -> Result<String, PersistenceError> {
    format_calendar_date(value).map_err(|e| PersistenceError::InvalidStoredValue {
        field: "date",
        message: e.to_string(),
    })
}

fn decode_date(field: &'static str, value: &str) -> Result<Date, PersistenceError> {
    parse_calendar_date(value).map_err(|e| PersistenceError::InvalidStoredValue {
        field,
        message: e.to_string(),
    })
}

/// Diesel Queryable struct for profile rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = profiles)]
pub struct ProfileRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = PersistenceError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        let role: Role = row
            .role
            .parse()
            .map_err(|e: kestrel_domain::DomainError| PersistenceError::InvalidStoredValue {
                field: "profiles.role",
                message: e.to_string(),
            })?;
        Ok(Self {
            id: ProfileId::new(row.id),
            name: row.name,
            email: row.email,
            role,
        })
    }
}

/// Diesel Queryable struct for project rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = projects)]
pub struct ProjectRow {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
}

impl TryFrom<ProjectRow> for Project {
    type Error = PersistenceError;

    fn try_from(row: ProjectRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProjectId::new(row.id),
            name: row.name,
            description: row.description,
            created_at: decode_timestamp("projects.created_at", &row.created_at)?,
        })
    }
}

/// Diesel Queryable struct for membership link rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = crate::diesel_schema::project_members)]
pub struct ProjectMemberRow {
    pub project_id: String,
    pub user_id: String,
}

impl From<ProjectMemberRow> for ProjectMember {
    fn from(row: ProjectMemberRow) -> Self {
        Self {
            project_id: ProjectId::new(row.project_id),
            user_id: ProfileId::new(row.user_id),
        }
    }
}

/// Diesel Queryable struct for project log rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = project_logs)]
pub struct ProjectLogRow {
    pub id: String,
    pub project_id: String,
    pub author_id: String,
    pub content: String,
    pub log_date: String,
    pub created_at: String,
    pub updated_at: String,
}

impl TryFrom<ProjectLogRow> for ProjectLog {
    type Error = PersistenceError;

    fn try_from(row: ProjectLogRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: LogId::new(row.id),
            project_id: ProjectId::new(row.project_id),
            author_id: ProfileId::new(row.author_id),
            content: row.content,
            log_date: decode_date("project_logs.log_date", &row.log_date)?,
            created_at: decode_timestamp("project_logs.created_at", &row.created_at)?,
            updated_at: decode_timestamp("project_logs.updated_at", &row.updated_at)?,
        })
    }
}

/// Diesel Queryable struct for inventory rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = inventory_items)]
pub struct InventoryRow {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub quantity: i64,
}

impl TryFrom<InventoryRow> for InventoryItem {
    type Error = PersistenceError;

    fn try_from(row: InventoryRow) -> Result<Self, Self::Error> {
        let quantity: u32 =
            row.quantity
                .to_u32()
                .ok_or_else(|| PersistenceError::InvalidStoredValue {
                    field: "inventory_items.quantity",
                    message: format!("{} is not a valid quantity", row.quantity),
                })?;
        Ok(Self {
            id: ItemId::new(row.id),
            name: row.name,
            description: row.description,
            quantity,
        })
    }
}

/// Diesel Queryable struct for attendance rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = attendance)]
pub struct AttendanceRow {
    pub id: String,
    pub user_id: String,
    pub attendance_date: String,
    pub marked_by: String,
}

impl TryFrom<AttendanceRow> for Attendance {
    type Error = PersistenceError;

    fn try_from(row: AttendanceRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: AttendanceId::new(row.id),
            member_id: ProfileId::new(row.user_id),
            attendance_date: decode_date("attendance.attendance_date", &row.attendance_date)?,
            marked_by: ProfileId::new(row.marked_by),
        })
    }
}

/// Converts a `COUNT(*)` result into an unsigned count.
///
/// # Errors
///
/// Returns an error if the database reported a negative count.
pub fn count_to_u64(field: &'static str, count: i64) -> Result<u64, PersistenceError> {
    count
        .to_u64()
        .ok_or_else(|| PersistenceError::InvalidStoredValue {
            field,
            message: format!("negative count {count}"),
        })
}
