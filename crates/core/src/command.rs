// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use kestrel_domain::{
    AttendanceId, InventoryDraft, ItemId, LogDraft, LogId, ProfileId, ProjectDraft, ProjectId,
    ProjectMember, Role,
};
use time::Date;

use crate::policy::{Action, EntityKind};

/// A single store mutation, expressed as data.
///
/// Every write the dashboard performs is one of these. Inputs are already
/// validated drafts, so a `Mutation` can only fail on authorization or in the
/// store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Insert a new project.
    CreateProject(ProjectDraft),
    /// Replace a project's name and description.
    UpdateProject {
        /// The project to update.
        id: ProjectId,
        /// The new fields.
        draft: ProjectDraft,
    },
    /// Delete a project. Links and logs go with it.
    DeleteProject {
        /// The project to delete.
        id: ProjectId,
    },
    /// Link a profile to a project.
    AddProjectMember(ProjectMember),
    /// Remove a profile's link to a project.
    RemoveProjectMember(ProjectMember),
    /// Insert a log entry authored by `author_id`.
    CreateProjectLog {
        /// The project the entry belongs to.
        project_id: ProjectId,
        /// The creating identity; becomes the permanent owner.
        author_id: ProfileId,
        /// The validated content.
        draft: LogDraft,
        /// The day the entry describes.
        log_date: Date,
    },
    /// Replace a log entry's content.
    UpdateProjectLog {
        /// The entry to update.
        id: LogId,
        /// The new content.
        draft: LogDraft,
    },
    /// Delete a log entry.
    DeleteProjectLog {
        /// The entry to delete.
        id: LogId,
    },
    /// Insert a new inventory item.
    CreateInventoryItem(InventoryDraft),
    /// Replace an inventory item's fields.
    UpdateInventoryItem {
        /// The item to update.
        id: ItemId,
        /// The new fields.
        draft: InventoryDraft,
    },
    /// Delete an inventory item.
    DeleteInventoryItem {
        /// The item to delete.
        id: ItemId,
    },
    /// Record a member as present on a date.
    MarkPresent {
        /// The member.
        member_id: ProfileId,
        /// The day.
        date: Date,
        /// The acting administrator.
        marked_by: ProfileId,
    },
    /// Remove a presence record.
    MarkAbsent {
        /// The record to delete.
        id: AttendanceId,
    },
    /// Change a profile's role.
    ChangeRole {
        /// The profile to update.
        id: ProfileId,
        /// The new role.
        role: Role,
    },
}

impl Mutation {
    /// Returns the entity kind this mutation writes.
    #[must_use]
    pub const fn entity_kind(&self) -> EntityKind {
        match self {
            Self::CreateProject(_) | Self::UpdateProject { .. } | Self::DeleteProject { .. } => {
                EntityKind::Project
            }
            Self::AddProjectMember(_) | Self::RemoveProjectMember(_) => EntityKind::ProjectMember,
            Self::CreateProjectLog { .. }
            | Self::UpdateProjectLog { .. }
            | Self::DeleteProjectLog { .. } => EntityKind::ProjectLog,
            Self::CreateInventoryItem(_)
            | Self::UpdateInventoryItem { .. }
            | Self::DeleteInventoryItem { .. } => EntityKind::InventoryItem,
            Self::MarkPresent { .. } | Self::MarkAbsent { .. } => EntityKind::Attendance,
            Self::ChangeRole { .. } => EntityKind::Profile,
        }
    }

    /// Returns the action this mutation performs.
    #[must_use]
    pub const fn action(&self) -> Action {
        match self {
            Self::CreateProject(_)
            | Self::AddProjectMember(_)
            | Self::CreateProjectLog { .. }
            | Self::CreateInventoryItem(_)
            | Self::MarkPresent { .. } => Action::Create,
            Self::UpdateProject { .. }
            | Self::UpdateProjectLog { .. }
            | Self::UpdateInventoryItem { .. }
            | Self::ChangeRole { .. } => Action::Update,
            Self::DeleteProject { .. }
            | Self::RemoveProjectMember(_)
            | Self::DeleteProjectLog { .. }
            | Self::DeleteInventoryItem { .. }
            | Self::MarkAbsent { .. } => Action::Delete,
        }
    }

    /// Returns a stable name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateProject(_) => "create_project",
            Self::UpdateProject { .. } => "update_project",
            Self::DeleteProject { .. } => "delete_project",
            Self::AddProjectMember(_) => "add_project_member",
            Self::RemoveProjectMember(_) => "remove_project_member",
            Self::CreateProjectLog { .. } => "create_project_log",
            Self::UpdateProjectLog { .. } => "update_project_log",
            Self::DeleteProjectLog { .. } => "delete_project_log",
            Self::CreateInventoryItem(_) => "create_inventory_item",
            Self::UpdateInventoryItem { .. } => "update_inventory_item",
            Self::DeleteInventoryItem { .. } => "delete_inventory_item",
            Self::MarkPresent { .. } => "mark_present",
            Self::MarkAbsent { .. } => "mark_absent",
            Self::ChangeRole { .. } => "change_role",
        }
    }
}
