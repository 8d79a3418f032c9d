// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The store contract the dashboard reads and writes through.

use kestrel::Mutation;
use kestrel_domain::{
    Attendance, AttendanceId, InventoryDraft, InventoryItem, ItemId, LogDraft, LogId, Profile,
    ProfileId, Project, ProjectDraft, ProjectId, ProjectLog, ProjectMember, Role,
};
use time::Date;

use crate::data_models::ProjectLogEntry;
use crate::error::PersistenceError;

/// Typed access to the relational store.
///
/// Update and delete methods return the number of affected rows. A delete
/// that matches nothing returns `Ok(0)`.
pub trait DashboardStore {
    /// Lists every profile ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_profiles(&mut self) -> Result<Vec<Profile>, PersistenceError>;

    /// Retrieves a profile by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn get_profile(&mut self, id: &ProfileId) -> Result<Option<Profile>, PersistenceError>;

    /// Creates a profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the email is taken or the write fails.
    fn create_profile(
        &mut self,
        name: &str,
        email: &str,
        role: Role,
    ) -> Result<Profile, PersistenceError>;

    /// Changes a profile's role.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn update_profile_role(&mut self, id: &ProfileId, role: Role)
    -> Result<usize, PersistenceError>;

    /// Lists every project, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_projects(&mut self) -> Result<Vec<Project>, PersistenceError>;

    /// Lists the projects a profile is linked to, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_projects_for_member(
        &mut self,
        user_id: &ProfileId,
    ) -> Result<Vec<Project>, PersistenceError>;

    /// Retrieves a project by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn get_project(&mut self, id: &ProjectId) -> Result<Option<Project>, PersistenceError>;

    /// Inserts a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn insert_project(&mut self, draft: &ProjectDraft) -> Result<Project, PersistenceError>;

    /// Replaces a project's name and description.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn update_project(
        &mut self,
        id: &ProjectId,
        draft: &ProjectDraft,
    ) -> Result<usize, PersistenceError>;

    /// Deletes a project together with its links and logs.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn delete_project(&mut self, id: &ProjectId) -> Result<usize, PersistenceError>;

    /// Lists a project's membership links.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_project_members(
        &mut self,
        project_id: &ProjectId,
    ) -> Result<Vec<ProjectMember>, PersistenceError>;

    /// Counts a project's membership links.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn count_project_members(&mut self, project_id: &ProjectId) -> Result<u64, PersistenceError>;

    /// Links a profile to a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the link exists or the write fails.
    fn insert_project_member(&mut self, link: &ProjectMember) -> Result<usize, PersistenceError>;

    /// Removes a profile's link to a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn delete_project_member(&mut self, link: &ProjectMember) -> Result<usize, PersistenceError>;

    /// Lists a project's logs with author names, latest log date first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_project_logs(
        &mut self,
        project_id: &ProjectId,
    ) -> Result<Vec<ProjectLogEntry>, PersistenceError>;

    /// Retrieves a project log by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn get_project_log(&mut self, id: &LogId) -> Result<Option<ProjectLog>, PersistenceError>;

    /// Counts a project's logs dated on or after `since`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn count_project_logs_since(
        &mut self,
        project_id: &ProjectId,
        since: Date,
    ) -> Result<u64, PersistenceError>;

    /// Inserts a log entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn insert_project_log(
        &mut self,
        project_id: &ProjectId,
        author_id: &ProfileId,
        draft: &LogDraft,
        log_date: Date,
    ) -> Result<ProjectLog, PersistenceError>;

    /// Replaces a log entry's content and refreshes its update timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn update_project_log(&mut self, id: &LogId, draft: &LogDraft)
    -> Result<usize, PersistenceError>;

    /// Deletes a log entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn delete_project_log(&mut self, id: &LogId) -> Result<usize, PersistenceError>;

    /// Lists every inventory item ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_inventory(&mut self) -> Result<Vec<InventoryItem>, PersistenceError>;

    /// Retrieves an inventory item by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn get_inventory_item(&mut self, id: &ItemId)
    -> Result<Option<InventoryItem>, PersistenceError>;

    /// Inserts an inventory item.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn insert_inventory_item(
        &mut self,
        draft: &InventoryDraft,
    ) -> Result<InventoryItem, PersistenceError>;

    /// Replaces an inventory item's fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn update_inventory_item(
        &mut self,
        id: &ItemId,
        draft: &InventoryDraft,
    ) -> Result<usize, PersistenceError>;

    /// Deletes an inventory item.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn delete_inventory_item(&mut self, id: &ItemId) -> Result<usize, PersistenceError>;

    /// Lists the attendance rows recorded for a date.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_attendance_for_date(&mut self, date: Date)
    -> Result<Vec<Attendance>, PersistenceError>;

    /// Records a member as present on a date.
    ///
    /// # Errors
    ///
    /// Returns an error if the member is already present or the write fails.
    fn insert_attendance(
        &mut self,
        member_id: &ProfileId,
        date: Date,
        marked_by: &ProfileId,
    ) -> Result<Attendance, PersistenceError>;

    /// Deletes a presence record.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn delete_attendance(&mut self, id: &AttendanceId) -> Result<usize, PersistenceError>;

    /// Issues the single write a mutation describes.
    ///
    /// # Returns
    ///
    /// The number of affected rows. Inserts report 1.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn apply_mutation(&mut self, mutation: &Mutation) -> Result<usize, PersistenceError> {
        match mutation {
            Mutation::CreateProject(draft) => self.insert_project(draft).map(|_| 1),
            Mutation::UpdateProject { id, draft } => self.update_project(id, draft),
            Mutation::DeleteProject { id } => self.delete_project(id),
            Mutation::AddProjectMember(link) => self.insert_project_member(link),
            Mutation::RemoveProjectMember(link) => self.delete_project_member(link),
            Mutation::CreateProjectLog {
                project_id,
                author_id,
                draft,
                log_date,
            } => self
                .insert_project_log(project_id, author_id, draft, *log_date)
                .map(|_| 1),
            Mutation::UpdateProjectLog { id, draft } => self.update_project_log(id, draft),
            Mutation::DeleteProjectLog { id } => self.delete_project_log(id),
            Mutation::CreateInventoryItem(draft) => self.insert_inventory_item(draft).map(|_| 1),
            Mutation::UpdateInventoryItem { id, draft } => self.update_inventory_item(id, draft),
            Mutation::DeleteInventoryItem { id } => self.delete_inventory_item(id),
            Mutation::MarkPresent {
                member_id,
                date,
                marked_by,
            } => self.insert_attendance(member_id, *date, marked_by).map(|_| 1),
            Mutation::MarkAbsent { id } => self.delete_attendance(id),
            Mutation::ChangeRole { id, role } => self.update_profile_role(id, *role),
        }
    }
}
