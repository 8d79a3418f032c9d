// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Project log queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use kestrel_domain::{LogId, ProjectId, ProjectLog};
use time::Date;
use tracing::debug;

use crate::data_models::{ProjectLogEntry, ProjectLogRow, count_to_u64, encode_date};
use crate::diesel_schema::{profiles, project_logs};
use crate::error::PersistenceError;

/// Lists a project's logs with author names, latest log date first.
///
/// Entries sharing a log date are ordered by creation, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails or a row cannot be decoded.
pub fn list_project_logs(
    conn: &mut SqliteConnection,
    project_id: &ProjectId,
) -> Result<Vec<ProjectLogEntry>, PersistenceError> {
    debug!(project_id = %project_id, "Listing project logs");

    let rows: Vec<(ProjectLogRow, String)> = project_logs::table
        .inner_join(profiles::table)
        .filter(project_logs::project_id.eq(project_id.as_str()))
        .order((project_logs::log_date.desc(), project_logs::created_at.desc()))
        .select((ProjectLogRow::as_select(), profiles::name))
        .load(conn)?;

    rows.into_iter()
        .map(|(row, author_name)| {
            Ok(ProjectLogEntry {
                log: ProjectLog::try_from(row)?,
                author_name,
            })
        })
        .collect()
}

/// Retrieves a project log by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the log is not found.
pub fn get_project_log(
    conn: &mut SqliteConnection,
    id: &LogId,
) -> Result<Option<ProjectLog>, PersistenceError> {
    debug!(log_id = %id, "Looking up project log");

    let result: Result<ProjectLogRow, diesel::result::Error> = project_logs::table
        .filter(project_logs::id.eq(id.as_str()))
        .select(ProjectLogRow::as_select())
        .first(conn);

    match result {
        Ok(row) => ProjectLog::try_from(row).map(Some),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Counts a project's logs dated on or after `since`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_project_logs_since(
    conn: &mut SqliteConnection,
    project_id: &ProjectId,
    since: Date,
) -> Result<u64, PersistenceError> {
    let since: String = encode_date(since)?;

    let count: i64 = project_logs::table
        .filter(project_logs::project_id.eq(project_id.as_str()))
        .filter(project_logs::log_date.ge(&since))
        .count()
        .get_result(conn)?;

    count_to_u64("project_logs", count)
}
