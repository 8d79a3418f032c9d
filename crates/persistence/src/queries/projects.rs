// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Project and membership queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use kestrel_domain::{ProfileId, Project, ProjectId, ProjectMember};
use tracing::debug;

use crate::data_models::{ProjectMemberRow, ProjectRow, count_to_u64};
use crate::diesel_schema::{project_members, projects};
use crate::error::PersistenceError;

/// Lists every project, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails or a row cannot be decoded.
pub fn list_projects(conn: &mut SqliteConnection) -> Result<Vec<Project>, PersistenceError> {
    debug!("Listing projects");

    let rows: Vec<ProjectRow> = projects::table
        .order(projects::created_at.desc())
        .select(ProjectRow::as_select())
        .load(conn)?;

    rows.into_iter().map(Project::try_from).collect()
}

/// Lists the projects `user_id` is linked to, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails or a row cannot be decoded.
pub fn list_projects_for_member(
    conn: &mut SqliteConnection,
    user_id: &ProfileId,
) -> Result<Vec<Project>, PersistenceError> {
    debug!(user_id = %user_id, "Listing projects for member");

    let rows: Vec<ProjectRow> = projects::table
        .inner_join(project_members::table)
        .filter(project_members::user_id.eq(user_id.as_str()))
        .order(projects::created_at.desc())
        .select(ProjectRow::as_select())
        .load(conn)?;

    rows.into_iter().map(Project::try_from).collect()
}

/// Retrieves a project by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the project is not found.
pub fn get_project(
    conn: &mut SqliteConnection,
    id: &ProjectId,
) -> Result<Option<Project>, PersistenceError> {
    debug!(project_id = %id, "Looking up project");

    let result: Result<ProjectRow, diesel::result::Error> = projects::table
        .filter(projects::id.eq(id.as_str()))
        .select(ProjectRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Project::try_from(row).map(Some),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists the membership links of a project.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_project_members(
    conn: &mut SqliteConnection,
    project_id: &ProjectId,
) -> Result<Vec<ProjectMember>, PersistenceError> {
    let rows: Vec<ProjectMemberRow> = project_members::table
        .filter(project_members::project_id.eq(project_id.as_str()))
        .order(project_members::created_at.asc())
        .select(ProjectMemberRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(ProjectMember::from).collect())
}

/// Counts the membership links of a project.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_project_members(
    conn: &mut SqliteConnection,
    project_id: &ProjectId,
) -> Result<u64, PersistenceError> {
    let count: i64 = project_members::table
        .filter(project_members::project_id.eq(project_id.as_str()))
        .count()
        .get_result(conn)?;

    count_to_u64("project_members", count)
}
