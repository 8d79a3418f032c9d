// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Project log mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use kestrel_domain::{LogDraft, LogId, ProfileId, ProjectId, ProjectLog};
use time::Date;
use tracing::info;

use crate::data_models::{encode_date, new_id, now_timestamp};
use crate::diesel_schema::project_logs;
use crate::error::PersistenceError;

/// Inserts a log entry owned by `author_id`.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `project_id` - The project the entry belongs to
/// * `author_id` - The creating profile; never reassigned afterwards
/// * `draft` - The validated content
/// * `log_date` - The day the entry describes
///
/// # Errors
///
/// Returns an error if the project or author does not exist, or the insert
/// fails.
pub fn insert_project_log(
    conn: &mut SqliteConnection,
    project_id: &ProjectId,
    author_id: &ProfileId,
    draft: &LogDraft,
    log_date: Date,
) -> Result<ProjectLog, PersistenceError> {
    let id: String = new_id();
    let (now, now_text) = now_timestamp()?;
    let log_date_text: String = encode_date(log_date)?;

    diesel::insert_into(project_logs::table)
        .values((
            project_logs::id.eq(&id),
            project_logs::project_id.eq(project_id.as_str()),
            project_logs::author_id.eq(author_id.as_str()),
            project_logs::content.eq(draft.content()),
            project_logs::log_date.eq(&log_date_text),
            project_logs::created_at.eq(&now_text),
            project_logs::updated_at.eq(&now_text),
        ))
        .execute(conn)?;

    info!(log_id = %id, project_id = %project_id, author_id = %author_id, "Created project log");

    Ok(ProjectLog {
        id: LogId::new(id),
        project_id: project_id.clone(),
        author_id: author_id.clone(),
        content: draft.content().to_string(),
        log_date,
        created_at: now,
        updated_at: now,
    })
}

/// Replaces a log entry's content and refreshes its update timestamp.
///
/// The author and log date are left untouched.
///
/// # Returns
///
/// The number of rows updated (0 if the log does not exist).
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_project_log(
    conn: &mut SqliteConnection,
    id: &LogId,
    draft: &LogDraft,
) -> Result<usize, PersistenceError> {
    let (_, updated_at) = now_timestamp()?;

    let updated: usize = diesel::update(project_logs::table)
        .filter(project_logs::id.eq(id.as_str()))
        .set((
            project_logs::content.eq(draft.content()),
            project_logs::updated_at.eq(&updated_at),
        ))
        .execute(conn)?;

    info!(log_id = %id, updated, "Updated project log");
    Ok(updated)
}

/// Deletes a log entry.
///
/// # Returns
///
/// The number of rows deleted.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_project_log(conn: &mut SqliteConnection, id: &LogId) -> Result<usize, PersistenceError> {
    let deleted: usize = diesel::delete(project_logs::table)
        .filter(project_logs::id.eq(id.as_str()))
        .execute(conn)?;

    info!(log_id = %id, deleted, "Deleted project log");
    Ok(deleted)
}
