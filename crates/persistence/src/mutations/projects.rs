// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Project and membership mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use kestrel_domain::{Project, ProjectDraft, ProjectId, ProjectMember};
use tracing::info;

use crate::data_models::{new_id, now_timestamp};
use crate::diesel_schema::{project_members, projects};
use crate::error::PersistenceError;

/// Inserts a project stamped with the current time.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_project(
    conn: &mut SqliteConnection,
    draft: &ProjectDraft,
) -> Result<Project, PersistenceError> {
    let id: String = new_id();
    let (created_at, created_at_text) = now_timestamp()?;

    diesel::insert_into(projects::table)
        .values((
            projects::id.eq(&id),
            projects::name.eq(draft.name()),
            projects::description.eq(draft.description()),
            projects::created_at.eq(&created_at_text),
        ))
        .execute(conn)?;

    info!(project_id = %id, name = draft.name(), "Created project");

    Ok(Project {
        id: ProjectId::new(id),
        name: draft.name().to_string(),
        description: draft.description().map(str::to_string),
        created_at,
    })
}

/// Replaces a project's name and description.
///
/// # Returns
///
/// The number of rows updated (0 if the project does not exist).
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_project(
    conn: &mut SqliteConnection,
    id: &ProjectId,
    draft: &ProjectDraft,
) -> Result<usize, PersistenceError> {
    let updated: usize = diesel::update(projects::table)
        .filter(projects::id.eq(id.as_str()))
        .set((
            projects::name.eq(draft.name()),
            projects::description.eq(draft.description()),
        ))
        .execute(conn)?;

    info!(project_id = %id, updated, "Updated project");
    Ok(updated)
}

/// Deletes a project.
///
/// Membership links and logs are removed by `ON DELETE CASCADE`.
///
/// # Returns
///
/// The number of rows deleted.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_project(conn: &mut SqliteConnection, id: &ProjectId) -> Result<usize, PersistenceError> {
    let deleted: usize = diesel::delete(projects::table)
        .filter(projects::id.eq(id.as_str()))
        .execute(conn)?;

    info!(project_id = %id, deleted, "Deleted project");
    Ok(deleted)
}

/// Links a profile to a project.
///
/// # Errors
///
/// Returns an error if the link already exists, either side is missing, or
/// the insert fails.
pub fn insert_project_member(
    conn: &mut SqliteConnection,
    link: &ProjectMember,
) -> Result<usize, PersistenceError> {
    let (_, created_at) = now_timestamp()?;

    let inserted: usize = diesel::insert_into(project_members::table)
        .values((
            project_members::project_id.eq(link.project_id.as_str()),
            project_members::user_id.eq(link.user_id.as_str()),
            project_members::created_at.eq(&created_at),
        ))
        .execute(conn)?;

    info!(project_id = %link.project_id, user_id = %link.user_id, "Added project member");
    Ok(inserted)
}

/// Removes a profile's link to a project.
///
/// # Returns
///
/// The number of rows deleted.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_project_member(
    conn: &mut SqliteConnection,
    link: &ProjectMember,
) -> Result<usize, PersistenceError> {
    let deleted: usize = diesel::delete(project_members::table)
        .filter(project_members::project_id.eq(link.project_id.as_str()))
        .filter(project_members::user_id.eq(link.user_id.as_str()))
        .execute(conn)?;

    info!(project_id = %link.project_id, user_id = %link.user_id, deleted, "Removed project member");
    Ok(deleted)
}
