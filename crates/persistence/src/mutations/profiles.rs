// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Profile mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use kestrel_domain::{Profile, ProfileId, Role, require_non_empty};
use tracing::info;

use crate::data_models::{new_id, now_timestamp};
use crate::diesel_schema::profiles;
use crate::error::PersistenceError;

/// Creates a profile.
///
/// Registration happens outside the dashboard; this is the path it uses.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `name` - The display name
/// * `email` - The unique email address
/// * `role` - The initial role
///
/// # Errors
///
/// Returns an error if the name is blank, the email is already registered,
/// or the insert fails.
pub fn create_profile(
    conn: &mut SqliteConnection,
    name: &str,
    email: &str,
    role: Role,
) -> Result<Profile, PersistenceError> {
    let name: &str = require_non_empty("name", name)
        .map_err(|e| PersistenceError::ConstraintViolation(e.to_string()))?;
    let id: String = new_id();
    let (_, created_at) = now_timestamp()?;

    diesel::insert_into(profiles::table)
        .values((
            profiles::id.eq(&id),
            profiles::name.eq(name),
            profiles::email.eq(email),
            profiles::role.eq(role.as_str()),
            profiles::created_at.eq(&created_at),
        ))
        .execute(conn)?;

    info!(profile_id = %id, role = %role, "Created profile");

    Ok(Profile {
        id: ProfileId::new(id),
        name: name.to_string(),
        email: email.to_string(),
        role,
    })
}

/// Changes a profile's role.
///
/// # Returns
///
/// The number of rows updated (0 if the profile does not exist).
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_profile_role(
    conn: &mut SqliteConnection,
    id: &ProfileId,
    role: Role,
) -> Result<usize, PersistenceError> {
    let updated: usize = diesel::update(profiles::table)
        .filter(profiles::id.eq(id.as_str()))
        .set(profiles::role.eq(role.as_str()))
        .execute(conn)?;

    info!(profile_id = %id, role = %role, updated, "Updated profile role");
    Ok(updated)
}
