// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Profile queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use kestrel_domain::{Profile, ProfileId};
use tracing::debug;

use crate::data_models::ProfileRow;
use crate::diesel_schema::profiles;
use crate::error::PersistenceError;

/// Lists every profile ordered by name.
///
/// # Errors
///
/// Returns an error if the database query fails or a row cannot be decoded.
pub fn list_profiles(conn: &mut SqliteConnection) -> Result<Vec<Profile>, PersistenceError> {
    debug!("Listing profiles");

    let rows: Vec<ProfileRow> = profiles::table
        .order((profiles::name.asc(), profiles::id.asc()))
        .select(ProfileRow::as_select())
        .load(conn)?;

    rows.into_iter().map(Profile::try_from).collect()
}

/// Retrieves a profile by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the profile is not found.
pub fn get_profile(
    conn: &mut SqliteConnection,
    id: &ProfileId,
) -> Result<Option<Profile>, PersistenceError> {
    debug!(profile_id = %id, "Looking up profile");

    let result: Result<ProfileRow, diesel::result::Error> = profiles::table
        .filter(profiles::id.eq(id.as_str()))
        .select(ProfileRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Profile::try_from(row).map(Some),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
