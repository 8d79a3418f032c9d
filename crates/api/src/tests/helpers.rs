// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use kestrel::IdentityState;
use kestrel_domain::{
    Attendance, AttendanceId, InventoryDraft, InventoryItem, ItemId, LogDraft, LogId, Profile,
    ProfileId, Project, ProjectDraft, ProjectId, ProjectLog, ProjectMember, Role,
};
use kestrel_persistence::{DashboardStore, Persistence, PersistenceError, ProjectLogEntry};
use time::{Date, Month};

use crate::identity::{IdentityResolver, ProfileSession};

/// A store that records every write it receives and can be told to fail them.
pub struct RecordingStore {
    pub inner: Persistence,
    pub writes: Vec<&'static str>,
    pub fail_writes: bool,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self {
            inner: Persistence::new_in_memory().expect("in-memory database"),
            writes: Vec::new(),
            fail_writes: false,
        }
    }

    fn record(&mut self, operation: &'static str) -> Result<(), PersistenceError> {
        self.writes.push(operation);
        if self.fail_writes {
            return Err(PersistenceError::QueryFailed(format!(
                "{operation}: connection lost"
            )));
        }
        Ok(())
    }
}

impl DashboardStore for RecordingStore {
    fn list_profiles(&mut self) -> Result<Vec<Profile>, PersistenceError> {
        self.inner.list_profiles()
    }

    fn get_profile(&mut self, id: &ProfileId) -> Result<Option<Profile>, PersistenceError> {
        self.inner.get_profile(id)
    }

    fn create_profile(
        &mut self,
        name: &str,
        email: &str,
        role: Role,
    ) -> Result<Profile, PersistenceError> {
        self.record("create_profile")?;
        self.inner.create_profile(name, email, role)
    }

    fn update_profile_role(
        &mut self,
        id: &ProfileId,
        role: Role,
    ) -> Result<usize, PersistenceError> {
        self.record("update_profile_role")?;
        self.inner.update_profile_role(id, role)
    }

    fn list_projects(&mut self) -> Result<Vec<Project>, PersistenceError> {
        self.inner.list_projects()
    }

    fn list_projects_for_member(
        &mut self,
        user_id: &ProfileId,
    ) -> Result<Vec<Project>, PersistenceError> {
        self.inner.list_projects_for_member(user_id)
    }

    fn get_project(&mut self, id: &ProjectId) -> Result<Option<Project>, PersistenceError> {
        self.inner.get_project(id)
    }

    fn insert_project(&mut self, draft: &ProjectDraft) -> Result<Project, PersistenceError> {
        self.record("insert_project")?;
        self.inner.insert_project(draft)
    }

    fn update_project(
        &mut self,
        id: &ProjectId,
        draft: &ProjectDraft,
    ) -> Result<usize, PersistenceError> {
        self.record("update_project")?;
        self.inner.update_project(id, draft)
    }

    fn delete_project(&mut self, id: &ProjectId) -> Result<usize, PersistenceError> {
        self.record("delete_project")?;
        self.inner.delete_project(id)
    }

    fn list_project_members(
        &mut self,
        project_id: &ProjectId,
    ) -> Result<Vec<ProjectMember>, PersistenceError> {
        self.inner.list_project_members(project_id)
    }

    fn count_project_members(&mut self, project_id: &ProjectId) -> Result<u64, PersistenceError> {
        self.inner.count_project_members(project_id)
    }

    fn insert_project_member(&mut self, link: &ProjectMember) -> Result<usize, PersistenceError> {
        self.record("insert_project_member")?;
        self.inner.insert_project_member(link)
    }

    fn delete_project_member(&mut self, link: &ProjectMember) -> Result<usize, PersistenceError> {
        self.record("delete_project_member")?;
        self.inner.delete_project_member(link)
    }

    fn list_project_logs(
        &mut self,
        project_id: &ProjectId,
    ) -> Result<Vec<ProjectLogEntry>, PersistenceError> {
        self.inner.list_project_logs(project_id)
    }

    fn get_project_log(&mut self, id: &LogId) -> Result<Option<ProjectLog>, PersistenceError> {
        self.inner.get_project_log(id)
    }

    fn count_project_logs_since(
        &mut self,
        project_id: &ProjectId,
        since: Date,
    ) -> Result<u64, PersistenceError> {
        self.inner.count_project_logs_since(project_id, since)
    }

    fn insert_project_log(
        &mut self,
        project_id: &ProjectId,
        author_id: &ProfileId,
        draft: &LogDraft,
        log_date: Date,
    ) -> Result<ProjectLog, PersistenceError> {
        self.record("insert_project_log")?;
        self.inner
            .insert_project_log(project_id, author_id, draft, log_date)
    }

    fn update_project_log(
        &mut self,
        id: &LogId,
        draft: &LogDraft,
    ) -> Result<usize, PersistenceError> {
        self.record("update_project_log")?;
        self.inner.update_project_log(id, draft)
    }

    fn delete_project_log(&mut self, id: &LogId) -> Result<usize, PersistenceError> {
        self.record("delete_project_log")?;
        self.inner.delete_project_log(id)
    }

    fn list_inventory(&mut self) -> Result<Vec<InventoryItem>, PersistenceError> {
        self.inner.list_inventory()
    }

    fn get_inventory_item(
        &mut self,
        id: &ItemId,
    ) -> Result<Option<InventoryItem>, PersistenceError> {
        self.inner.get_inventory_item(id)
    }

    fn insert_inventory_item(
        &mut self,
        draft: &InventoryDraft,
    ) -> Result<InventoryItem, PersistenceError> {
        self.record("insert_inventory_item")?;
        self.inner.insert_inventory_item(draft)
    }

    fn update_inventory_item(
        &mut self,
        id: &ItemId,
        draft: &InventoryDraft,
    ) -> Result<usize, PersistenceError> {
        self.record("update_inventory_item")?;
        self.inner.update_inventory_item(id, draft)
    }

    fn delete_inventory_item(&mut self, id: &ItemId) -> Result<usize, PersistenceError> {
        self.record("delete_inventory_item")?;
        self.inner.delete_inventory_item(id)
    }

    fn list_attendance_for_date(
        &mut self,
        date: Date,
    ) -> Result<Vec<Attendance>, PersistenceError> {
        self.inner.list_attendance_for_date(date)
    }

    fn insert_attendance(
        &mut self,
        member_id: &ProfileId,
        date: Date,
        marked_by: &ProfileId,
    ) -> Result<Attendance, PersistenceError> {
        self.record("insert_attendance")?;
        self.inner.insert_attendance(member_id, date, marked_by)
    }

    fn delete_attendance(&mut self, id: &AttendanceId) -> Result<usize, PersistenceError> {
        self.record("delete_attendance")?;
        self.inner.delete_attendance(id)
    }
}

/// A seeded store with one administrator and two members.
pub struct TestContext {
    pub store: RecordingStore,
    pub admin: Profile,
    pub member_a: Profile,
    pub member_b: Profile,
    pub as_admin: IdentityState,
    pub as_member_a: IdentityState,
    pub as_member_b: IdentityState,
}

impl TestContext {
    pub fn new() -> Self {
        let mut store: RecordingStore = RecordingStore::new();
        let admin: Profile = store
            .inner
            .create_profile("Ada Admin", "ada@example.com", Role::Admin)
            .unwrap();
        let member_a: Profile = store
            .inner
            .create_profile("Member A", "a@example.com", Role::Member)
            .unwrap();
        let member_b: Profile = store
            .inner
            .create_profile("Member B", "b@example.com", Role::Member)
            .unwrap();
        Self {
            store,
            as_admin: identity_of(&admin),
            as_member_a: identity_of(&member_a),
            as_member_b: identity_of(&member_b),
            admin,
            member_a,
            member_b,
        }
    }

    /// Seeds a project directly, bypassing the handlers.
    pub fn seed_project(&mut self, name: &str) -> Project {
        let draft: ProjectDraft = ProjectDraft::new(name, None).unwrap();
        self.store.inner.insert_project(&draft).unwrap()
    }

    /// Seeds a log entry directly, bypassing the handlers.
    pub fn seed_log(&mut self, project: &Project, author: &Profile, content: &str) -> ProjectLog {
        let draft: LogDraft = LogDraft::new(content).unwrap();
        self.store
            .inner
            .insert_project_log(&project.id, &author.id, &draft, create_test_today())
            .unwrap()
    }
}

pub fn identity_of(profile: &Profile) -> IdentityState {
    ProfileSession::from_profile(profile.clone()).state().clone()
}

/// Returns October 15, 2026 as a fixed "today".
pub fn create_test_today() -> Date {
    Date::from_calendar_date(2026, Month::October, 15).expect("Valid test date")
}
