// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Kestrel dashboard.
//!
//! This crate defines the [`DashboardStore`] contract and implements it on
//! `SQLite` through Diesel. Migrations are embedded and run on open; foreign
//! key enforcement is verified before the adapter is handed out.
//!
//! ## Testing
//!
//! Tests run against unique shared in-memory databases created with
//! [`Persistence::new_in_memory`], so every test gets an isolated schema.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use kestrel_domain::{
    Attendance, AttendanceId, InventoryDraft, InventoryItem, ItemId, LogDraft, LogId, Profile,
    ProfileId, Project, ProjectDraft, ProjectId, ProjectLog, ProjectMember, Role,
};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::Date;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod store;

#[cfg(test)]
mod tests;

pub use data_models::ProjectLogEntry;
pub use error::PersistenceError;
pub use store::DashboardStore;

/// Diesel-backed `SQLite` implementation of [`DashboardStore`].
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique shared in-memory database via an atomic
    /// counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_kestrel_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }
}

impl DashboardStore for Persistence {
    // ========================================================================
    // Profiles
    // ========================================================================

    fn list_profiles(&mut self) -> Result<Vec<Profile>, PersistenceError> {
        queries::profiles::list_profiles(&mut self.conn)
    }

    fn get_profile(&mut self, id: &ProfileId) -> Result<Option<Profile>, PersistenceError> {
        queries::profiles::get_profile(&mut self.conn, id)
    }

    fn create_profile(
        &mut self,
        name: &str,
        email: &str,
        role: Role,
    ) -> Result<Profile, PersistenceError> {
        mutations::profiles::create_profile(&mut self.conn, name, email, role)
    }

    fn update_profile_role(
        &mut self,
        id: &ProfileId,
        role: Role,
    ) -> Result<usize, PersistenceError> {
        mutations::profiles::update_profile_role(&mut self.conn, id, role)
    }

    // ========================================================================
    // Projects & Membership
    // ========================================================================

    fn list_projects(&mut self) -> Result<Vec<Project>, PersistenceError> {
        queries::projects::list_projects(&mut self.conn)
    }

    fn list_projects_for_member(
        &mut self,
        user_id: &ProfileId,
    ) -> Result<Vec<Project>, PersistenceError> {
        queries::projects::list_projects_for_member(&mut self.conn, user_id)
    }

    fn get_project(&mut self, id: &ProjectId) -> Result<Option<Project>, PersistenceError> {
        queries::projects::get_project(&mut self.conn, id)
    }

    fn insert_project(&mut self, draft: &ProjectDraft) -> Result<Project, PersistenceError> {
        mutations::projects::insert_project(&mut self.conn, draft)
    }

    fn update_project(
        &mut self,
        id: &ProjectId,
        draft: &ProjectDraft,
    ) -> Result<usize, PersistenceError> {
        mutations::projects::update_project(&mut self.conn, id, draft)
    }

    fn delete_project(&mut self, id: &ProjectId) -> Result<usize, PersistenceError> {
        mutations::projects::delete_project(&mut self.conn, id)
    }

    fn list_project_members(
        &mut self,
        project_id: &ProjectId,
    ) -> Result<Vec<ProjectMember>, PersistenceError> {
        queries::projects::list_project_members(&mut self.conn, project_id)
    }

    fn count_project_members(&mut self, project_id: &ProjectId) -> Result<u64, PersistenceError> {
        queries::projects::count_project_members(&mut self.conn, project_id)
    }

    fn insert_project_member(&mut self, link: &ProjectMember) -> Result<usize, PersistenceError> {
        mutations::projects::insert_project_member(&mut self.conn, link)
    }

    fn delete_project_member(&mut self, link: &ProjectMember) -> Result<usize, PersistenceError> {
        mutations::projects::delete_project_member(&mut self.conn, link)
    }

    // ========================================================================
    // Project Logs
    // ========================================================================

    fn list_project_logs(
        &mut self,
        project_id: &ProjectId,
    ) -> Result<Vec<ProjectLogEntry>, PersistenceError> {
        queries::logs::list_project_logs(&mut self.conn, project_id)
    }

    fn get_project_log(&mut self, id: &LogId) -> Result<Option<ProjectLog>, PersistenceError> {
        queries::logs::get_project_log(&mut self.conn, id)
    }

    fn count_project_logs_since(
        &mut self,
        project_id: &ProjectId,
        since: Date,
    ) -> Result<u64, PersistenceError> {
        queries::logs::count_project_logs_since(&mut self.conn, project_id, since)
    }

    fn insert_project_log(
        &mut self,
        project_id: &ProjectId,
        author_id: &ProfileId,
        draft: &LogDraft,
        log_date: Date,
    ) -> Result<ProjectLog, PersistenceError> {
        mutations::logs::insert_project_log(&mut self.conn, project_id, author_id, draft, log_date)
    }

    fn update_project_log(
        &mut self,
        id: &LogId,
        draft: &LogDraft,
    ) -> Result<usize, PersistenceError> {
        mutations::logs::update_project_log(&mut self.conn, id, draft)
    }

    fn delete_project_log(&mut self, id: &LogId) -> Result<usize, PersistenceError> {
        mutations::logs::delete_project_log(&mut self.conn, id)
    }

    // ========================================================================
    // Inventory
    // ========================================================================

    fn list_inventory(&mut self) -> Result<Vec<InventoryItem>, PersistenceError> {
        queries::inventory::list_inventory(&mut self.conn)
    }

    fn get_inventory_item(
        &mut self,
        id: &ItemId,
    ) -> Result<Option<InventoryItem>, PersistenceError> {
        queries::inventory::get_inventory_item(&mut self.conn, id)
    }

    fn insert_inventory_item(
        &mut self,
        draft: &InventoryDraft,
    ) -> Result<InventoryItem, PersistenceError> {
        mutations::inventory::insert_inventory_item(&mut self.conn, draft)
    }

    fn update_inventory_item(
        &mut self,
        id: &ItemId,
        draft: &InventoryDraft,
    ) -> Result<usize, PersistenceError> {
        mutations::inventory::update_inventory_item(&mut self.conn, id, draft)
    }

    fn delete_inventory_item(&mut self, id: &ItemId) -> Result<usize, PersistenceError> {
        mutations::inventory::delete_inventory_item(&mut self.conn, id)
    }

    // ========================================================================
    // Attendance
    // ========================================================================

    fn list_attendance_for_date(
        &mut self,
        date: Date,
    ) -> Result<Vec<Attendance>, PersistenceError> {
        queries::attendance::list_attendance_for_date(&mut self.conn, date)
    }

    fn insert_attendance(
        &mut self,
        member_id: &ProfileId,
        date: Date,
        marked_by: &ProfileId,
    ) -> Result<Attendance, PersistenceError> {
        mutations::attendance::insert_attendance(&mut self.conn, member_id, date, marked_by)
    }

    fn delete_attendance(&mut self, id: &AttendanceId) -> Result<usize, PersistenceError> {
        mutations::attendance::delete_attendance(&mut self.conn, id)
    }
}
