// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Every mutating handler runs the same sequence: validate the request,
//! authorize it, issue exactly one store write, then read the affected view
//! back from the store and return it. Nothing is applied to a view
//! optimistically; on any failure the error is returned and the caller keeps
//! its last view.

use std::fmt::Display;

use kestrel::{
    Action, AttendanceRoster, AttendanceTransition, EntityKind, Identity, IdentityState, Mutation,
    authorize, authorize_mutation, plan_toggle, recent_window_start,
};
use kestrel_domain::{
    Attendance, InventoryDraft, LogDraft, Profile, ProfileId, Project, ProjectDraft, ProjectId,
    ProjectLog, ProjectMember, parse_calendar_date,
};
use kestrel_persistence::{DashboardStore, PersistenceError};
use time::Date;
use tracing::{debug, info, warn};

use crate::capabilities::{
    compute_can_create_log, compute_global_capabilities, compute_log_capabilities,
};
use crate::error::{
    ApiError, translate_access_denied, translate_core_error, translate_domain_error,
    translate_persistence_error,
};
use crate::identity::{IdentityResolver, ProfileSession};
use crate::request_response::{
    AttendanceEntry, AttendanceView, CreateInventoryItemRequest, CreateProjectLogRequest,
    CreateProjectRequest, DeleteInventoryItemRequest, DeleteProjectLogRequest,
    DeleteProjectRequest, InventoryView, LogView, MemberDirectoryView, ProjectDetailView,
    ProjectListView, ProjectMemberRequest, ProjectSummary, ToggleAttendanceRequest,
    UpdateInventoryItemRequest, UpdateProfileRoleRequest, UpdateProjectLogRequest,
    UpdateProjectRequest, WhoAmIResponse,
};

// ============================================================================
// Shared steps
// ============================================================================

/// Requires a resolved identity, which is all any read needs.
fn require_identity<'a>(
    identity: &'a IdentityState,
    entity: EntityKind,
    operation: &str,
) -> Result<&'a Identity, ApiError> {
    authorize(identity, Action::Read, entity, None).map_err(|e| {
        debug!(operation, reason = %e, "Read refused");
        translate_access_denied(e, operation)
    })
}

/// Authorizes a mutation and issues it as a single store write.
///
/// # Returns
///
/// The number of rows the write affected.
fn execute<S: DashboardStore>(
    store: &mut S,
    identity: &IdentityState,
    mutation: &Mutation,
    owner: Option<&ProfileId>,
) -> Result<usize, ApiError> {
    let operation: &str = mutation.name();
    let actor: &Identity = authorize_mutation(identity, mutation, owner).map_err(|e| {
        warn!(operation, reason = %e, "Mutation denied");
        translate_access_denied(e, operation)
    })?;

    info!(operation, actor_id = %actor.id, "Applying mutation");
    let affected: usize = store.apply_mutation(mutation).map_err(|e| {
        warn!(operation, actor_id = %actor.id, error = %e, "Mutation failed");
        translate_persistence_error(e)
    })?;

    debug!(operation, affected, "Mutation acknowledged");
    Ok(affected)
}

fn not_found(resource_type: &str, id: &impl Display) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: resource_type.to_string(),
        message: format!("{resource_type} '{id}' does not exist"),
    }
}

fn store_err(err: PersistenceError) -> ApiError {
    translate_persistence_error(err)
}

// ============================================================================
// Identity
// ============================================================================

/// Returns the signed-in profile with its dashboard capabilities.
///
/// # Errors
///
/// Returns `ApiError::AuthenticationRequired` if the session is not resolved.
pub fn whoami(session: &ProfileSession) -> Result<WhoAmIResponse, ApiError> {
    require_identity(session.state(), EntityKind::Profile, "whoami")?;
    let profile: &Profile = session.profile().ok_or_else(|| ApiError::AuthenticationRequired {
        reason: String::from("no profile is signed in"),
    })?;

    Ok(WhoAmIResponse {
        profile: profile.clone(),
        capabilities: compute_global_capabilities(session.state()),
    })
}

// ============================================================================
// Projects
// ============================================================================

fn build_project_list<S: DashboardStore>(
    store: &mut S,
    identity: &IdentityState,
    projects: Vec<Project>,
    today: Date,
) -> Result<ProjectListView, ApiError> {
    let since: Date = recent_window_start(today);

    let projects: Vec<ProjectSummary> = projects
        .into_iter()
        .map(|project| {
            let member_count: u64 = store.count_project_members(&project.id)?;
            let recent_log_count: u64 = store.count_project_logs_since(&project.id, since)?;
            Ok(ProjectSummary {
                project,
                member_count,
                recent_log_count,
            })
        })
        .collect::<Result<Vec<ProjectSummary>, PersistenceError>>()
        .map_err(store_err)?;

    Ok(ProjectListView {
        projects,
        capabilities: compute_global_capabilities(identity),
    })
}

/// Lists every project, newest first, with member and recent-log counts.
///
/// # Arguments
///
/// * `store` - The store to read from
/// * `identity` - The caller's identity state
/// * `today` - The current date; logs dated within seven days before it count
///   as recent
///
/// # Errors
///
/// Returns an error if the identity is not resolved or the store fails.
pub fn list_projects<S: DashboardStore>(
    store: &mut S,
    identity: &IdentityState,
    today: Date,
) -> Result<ProjectListView, ApiError> {
    require_identity(identity, EntityKind::Project, "list_projects")?;
    let projects: Vec<Project> = store.list_projects().map_err(store_err)?;
    build_project_list(store, identity, projects, today)
}

/// Lists the projects the caller is linked to, newest first.
///
/// # Errors
///
/// Returns an error if the identity is not resolved or the store fails.
pub fn list_my_projects<S: DashboardStore>(
    store: &mut S,
    identity: &IdentityState,
    today: Date,
) -> Result<ProjectListView, ApiError> {
    let caller: &Identity = require_identity(identity, EntityKind::Project, "list_my_projects")?;
    let projects: Vec<Project> = store
        .list_projects_for_member(&caller.id)
        .map_err(store_err)?;
    build_project_list(store, identity, projects, today)
}

/// Returns one project with its members and logs.
///
/// # Errors
///
/// Returns an error if the identity is not resolved, the project does not
/// exist, or the store fails.
pub fn get_project_detail<S: DashboardStore>(
    store: &mut S,
    identity: &IdentityState,
    project_id: &ProjectId,
) -> Result<ProjectDetailView, ApiError> {
    require_identity(identity, EntityKind::Project, "get_project_detail")?;

    let project: Project = store
        .get_project(project_id)
        .map_err(store_err)?
        .ok_or_else(|| not_found("Project", project_id))?;
    let members: Vec<ProjectMember> = store
        .list_project_members(project_id)
        .map_err(store_err)?;
    let logs: Vec<LogView> = store
        .list_project_logs(project_id)
        .map_err(store_err)?
        .into_iter()
        .map(|entry| LogView {
            capabilities: compute_log_capabilities(identity, &entry.log),
            entry,
        })
        .collect();

    Ok(ProjectDetailView {
        project,
        members,
        logs,
        can_create_log: compute_can_create_log(identity),
        capabilities: compute_global_capabilities(identity),
    })
}

/// Creates a project.
///
/// # Arguments
///
/// * `store` - The store to write to
/// * `identity` - The caller's identity state
/// * `request` - The project fields
/// * `today` - The current date, used for the refetched listing
///
/// # Returns
///
/// The refetched project listing.
///
/// # Errors
///
/// Returns an error if:
/// - The name is blank
/// - The caller is not an administrator
/// - The store fails
pub fn create_project<S: DashboardStore>(
    store: &mut S,
    identity: &IdentityState,
    request: &CreateProjectRequest,
    today: Date,
) -> Result<ProjectListView, ApiError> {
    let draft: ProjectDraft = ProjectDraft::new(&request.name, request.description.as_deref())
        .map_err(translate_domain_error)?;

    execute(store, identity, &Mutation::CreateProject(draft), None)?;
    list_projects(store, identity, today)
}

/// Replaces a project's name and description.
///
/// # Returns
///
/// The refetched project listing.
///
/// # Errors
///
/// Returns an error if:
/// - The name is blank
/// - The caller is not an administrator
/// - The project does not exist
/// - The store fails
pub fn update_project<S: DashboardStore>(
    store: &mut S,
    identity: &IdentityState,
    request: &UpdateProjectRequest,
    today: Date,
) -> Result<ProjectListView, ApiError> {
    let draft: ProjectDraft = ProjectDraft::new(&request.name, request.description.as_deref())
        .map_err(translate_domain_error)?;
    let mutation: Mutation = Mutation::UpdateProject {
        id: request.project_id.clone(),
        draft,
    };

    if execute(store, identity, &mutation, None)? == 0 {
        return Err(not_found("Project", &request.project_id));
    }
    list_projects(store, identity, today)
}

/// Deletes a project together with its membership links and logs.
///
/// Deleting a project that does not exist succeeds without effect.
///
/// # Returns
///
/// The refetched project listing.
///
/// # Errors
///
/// Returns an error if:
/// - The request is not confirmed
/// - The caller is not an administrator
/// - The store fails
pub fn delete_project<S: DashboardStore>(
    store: &mut S,
    identity: &IdentityState,
    request: &DeleteProjectRequest,
    today: Date,
) -> Result<ProjectListView, ApiError> {
    if !request.confirmed {
        return Err(ApiError::ConfirmationRequired {
            action: String::from("delete_project"),
        });
    }
    let mutation: Mutation = Mutation::DeleteProject {
        id: request.project_id.clone(),
    };

    if execute(store, identity, &mutation, None)? == 0 {
        debug!(project_id = %request.project_id, "Project already absent");
    }
    list_projects(store, identity, today)
}

/// Links a profile to a project.
///
/// # Returns
///
/// The refetched project listing.
///
/// # Errors
///
/// Returns an error if the caller is not an administrator, the link already
/// exists, either side does not exist, or the store fails.
pub fn add_project_member<S: DashboardStore>(
    store: &mut S,
    identity: &IdentityState,
    request: &ProjectMemberRequest,
    today: Date,
) -> Result<ProjectListView, ApiError> {
    let mutation: Mutation = Mutation::AddProjectMember(ProjectMember {
        project_id: request.project_id.clone(),
        user_id: request.user_id.clone(),
    });

    execute(store, identity, &mutation, None)?;
    list_projects(store, identity, today)
}

/// Removes a profile's link to a project.
///
/// Removing a link that does not exist succeeds without effect.
///
/// # Returns
///
/// The refetched project listing.
///
/// # Errors
///
/// Returns an error if the caller is not an administrator or the store fails.
pub fn remove_project_member<S: DashboardStore>(
    store: &mut S,
    identity: &IdentityState,
    request: &ProjectMemberRequest,
    today: Date,
) -> Result<ProjectListView, ApiError> {
    let mutation: Mutation = Mutation::RemoveProjectMember(ProjectMember {
        project_id: request.project_id.clone(),
        user_id: request.user_id.clone(),
    });

    execute(store, identity, &mutation, None)?;
    list_projects(store, identity, today)
}

// ============================================================================
// Project logs
// ============================================================================

/// Writes a log entry owned by the caller.
///
/// Any signed-in profile may write to any project; membership is not
/// checked.
///
/// # Arguments
///
/// * `store` - The store to write to
/// * `identity` - The caller's identity state
/// * `request` - The entry
/// * `today` - The log date used when the request names none
///
/// # Returns
///
/// The refetched project detail.
///
/// # Errors
///
/// Returns an error if:
/// - The content is blank or the log date is malformed
/// - The identity is not resolved
/// - The project does not exist
/// - The store fails
pub fn create_project_log<S: DashboardStore>(
    store: &mut S,
    identity: &IdentityState,
    request: &CreateProjectLogRequest,
    today: Date,
) -> Result<ProjectDetailView, ApiError> {
    let draft: LogDraft = LogDraft::new(&request.content).map_err(translate_domain_error)?;
    let log_date: Date = match request.log_date.as_deref() {
        Some(raw) => parse_calendar_date(raw).map_err(translate_domain_error)?,
        None => today,
    };

    let author: &Identity = authorize(identity, Action::Create, EntityKind::ProjectLog, None)
        .map_err(|e| translate_access_denied(e, "create_project_log"))?;

    if store
        .get_project(&request.project_id)
        .map_err(store_err)?
        .is_none()
    {
        return Err(not_found("Project", &request.project_id));
    }

    let mutation: Mutation = Mutation::CreateProjectLog {
        project_id: request.project_id.clone(),
        author_id: author.id.clone(),
        draft,
        log_date,
    };
    execute(store, identity, &mutation, None)?;
    get_project_detail(store, identity, &request.project_id)
}

/// Replaces a log entry's content.
///
/// Only the author may edit an entry. The update timestamp is refreshed.
///
/// # Returns
///
/// The refetched detail of the entry's project.
///
/// # Errors
///
/// Returns an error if:
/// - The content is blank
/// - The identity is not resolved
/// - The entry does not exist
/// - The caller is not the author
/// - The store fails
pub fn update_project_log<S: DashboardStore>(
    store: &mut S,
    identity: &IdentityState,
    request: &UpdateProjectLogRequest,
) -> Result<ProjectDetailView, ApiError> {
    let draft: LogDraft = LogDraft::new(&request.content).map_err(translate_domain_error)?;
    require_identity(identity, EntityKind::ProjectLog, "update_project_log")?;

    let existing: ProjectLog = store
        .get_project_log(&request.log_id)
        .map_err(store_err)?
        .ok_or_else(|| not_found("Project log", &request.log_id))?;

    let mutation: Mutation = Mutation::UpdateProjectLog {
        id: request.log_id.clone(),
        draft,
    };
    if execute(store, identity, &mutation, Some(&existing.author_id))? == 0 {
        return Err(not_found("Project log", &request.log_id));
    }
    get_project_detail(store, identity, &existing.project_id)
}

/// Deletes a log entry.
///
/// Only the author may delete an entry. Deleting an entry that does not
/// exist succeeds without effect.
///
/// # Returns
///
/// The refetched project detail, or `None` when the project itself no
/// longer exists.
///
/// # Errors
///
/// Returns an error if the identity is not resolved, the caller is not the
/// author, or the store fails.
pub fn delete_project_log<S: DashboardStore>(
    store: &mut S,
    identity: &IdentityState,
    request: &DeleteProjectLogRequest,
) -> Result<Option<ProjectDetailView>, ApiError> {
    require_identity(identity, EntityKind::ProjectLog, "delete_project_log")?;

    let Some(existing) = store
        .get_project_log(&request.log_id)
        .map_err(store_err)?
    else {
        debug!(log_id = %request.log_id, "Project log already absent");
        if store
            .get_project(&request.project_id)
            .map_err(store_err)?
            .is_none()
        {
            debug!(project_id = %request.project_id, "Project already absent");
            return Ok(None);
        }
        return get_project_detail(store, identity, &request.project_id).map(Some);
    };

    let mutation: Mutation = Mutation::DeleteProjectLog {
        id: request.log_id.clone(),
    };
    execute(store, identity, &mutation, Some(&existing.author_id))?;
    get_project_detail(store, identity, &existing.project_id).map(Some)
}

// ============================================================================
// Inventory
// ============================================================================

/// Lists the inventory ordered by name.
///
/// # Errors
///
/// Returns an error if the identity is not resolved or the store fails.
pub fn list_inventory<S: DashboardStore>(
    store: &mut S,
    identity: &IdentityState,
) -> Result<InventoryView, ApiError> {
    require_identity(identity, EntityKind::InventoryItem, "list_inventory")?;
    let items = store.list_inventory().map_err(store_err)?;

    Ok(InventoryView {
        items,
        can_manage_inventory: compute_global_capabilities(identity).can_manage_inventory,
    })
}

/// Creates an inventory item.
///
/// The quantity is coerced: non-numeric input becomes 0 and negative input
/// is clamped to 0.
///
/// # Returns
///
/// The refetched inventory.
///
/// # Errors
///
/// Returns an error if the name is blank, the caller is not an
/// administrator, or the store fails.
pub fn create_inventory_item<S: DashboardStore>(
    store: &mut S,
    identity: &IdentityState,
    request: &CreateInventoryItemRequest,
) -> Result<InventoryView, ApiError> {
    let draft: InventoryDraft = InventoryDraft::new(
        &request.name,
        request.description.as_deref(),
        &request.quantity.to_raw(),
    )
    .map_err(translate_domain_error)?;

    execute(store, identity, &Mutation::CreateInventoryItem(draft), None)?;
    list_inventory(store, identity)
}

/// Replaces an inventory item's fields.
///
/// # Returns
///
/// The refetched inventory.
///
/// # Errors
///
/// Returns an error if the name is blank, the caller is not an
/// administrator, the item does not exist, or the store fails.
pub fn update_inventory_item<S: DashboardStore>(
    store: &mut S,
    identity: &IdentityState,
    request: &UpdateInventoryItemRequest,
) -> Result<InventoryView, ApiError> {
    let draft: InventoryDraft = InventoryDraft::new(
        &request.name,
        request.description.as_deref(),
        &request.quantity.to_raw(),
    )
    .map_err(translate_domain_error)?;
    let mutation: Mutation = Mutation::UpdateInventoryItem {
        id: request.item_id.clone(),
        draft,
    };

    if execute(store, identity, &mutation, None)? == 0 {
        return Err(not_found("Inventory item", &request.item_id));
    }
    list_inventory(store, identity)
}

/// Deletes an inventory item.
///
/// Deleting an item that does not exist succeeds without effect.
///
/// # Returns
///
/// The refetched inventory.
///
/// # Errors
///
/// Returns an error if the caller is not an administrator or the store
/// fails.
pub fn delete_inventory_item<S: DashboardStore>(
    store: &mut S,
    identity: &IdentityState,
    request: &DeleteInventoryItemRequest,
) -> Result<InventoryView, ApiError> {
    let mutation: Mutation = Mutation::DeleteInventoryItem {
        id: request.item_id.clone(),
    };

    execute(store, identity, &mutation, None)?;
    list_inventory(store, identity)
}

// ============================================================================
// Attendance
// ============================================================================

/// Returns every member with their presence on `date`, ordered by name.
///
/// # Errors
///
/// Returns an error if the identity is not resolved or the store fails.
pub fn get_attendance<S: DashboardStore>(
    store: &mut S,
    identity: &IdentityState,
    date: Date,
) -> Result<AttendanceView, ApiError> {
    require_identity(identity, EntityKind::Attendance, "get_attendance")?;

    let profiles: Vec<Profile> = store.list_profiles().map_err(store_err)?;
    let rows: Vec<Attendance> = store.list_attendance_for_date(date).map_err(store_err)?;
    let roster: AttendanceRoster = AttendanceRoster::for_date(date, &rows);

    let members: Vec<AttendanceEntry> = profiles
        .into_iter()
        .map(|profile| AttendanceEntry {
            state: roster.state_of(&profile.id),
            attendance_id: roster.record_for(&profile.id).cloned(),
            profile,
        })
        .collect();

    Ok(AttendanceView {
        date,
        members,
        present_count: roster.present_count(),
        can_mark_attendance: compute_global_capabilities(identity).can_mark_attendance,
    })
}

/// Flips a member's presence on a date.
///
/// An absent member gets a record marked by the caller; a present member's
/// record is deleted. The decision is made against the store as read at the
/// start of the call.
///
/// # Returns
///
/// The refetched attendance for the date.
///
/// # Errors
///
/// Returns an error if:
/// - The date is malformed
/// - The caller is not an administrator
/// - The member does not exist
/// - The store fails, including a concurrent toggle that already inserted
///   the record
pub fn toggle_attendance<S: DashboardStore>(
    store: &mut S,
    identity: &IdentityState,
    request: &ToggleAttendanceRequest,
) -> Result<AttendanceView, ApiError> {
    const OPERATION: &str = "toggle_attendance";

    let date: Date = parse_calendar_date(&request.date).map_err(translate_domain_error)?;
    authorize(identity, Action::Create, EntityKind::Attendance, None)
        .map_err(|e| translate_access_denied(e, OPERATION))?;

    if store
        .get_profile(&request.member_id)
        .map_err(store_err)?
        .is_none()
    {
        return Err(not_found("Profile", &request.member_id));
    }

    let rows: Vec<Attendance> = store.list_attendance_for_date(date).map_err(store_err)?;
    let roster: AttendanceRoster = AttendanceRoster::for_date(date, &rows);
    let transition: AttendanceTransition = plan_toggle(identity, &roster, &request.member_id)
        .map_err(|e| translate_core_error(e, OPERATION))?;

    info!(
        member_id = %request.member_id,
        date = %request.date,
        target = ?transition.target_state(),
        "Toggling attendance"
    );
    execute(store, identity, &transition.into_mutation(), None)?;
    get_attendance(store, identity, date)
}

// ============================================================================
// Members
// ============================================================================

/// Lists every profile ordered by name.
///
/// # Errors
///
/// Returns an error if the identity is not resolved or the store fails.
pub fn list_members<S: DashboardStore>(
    store: &mut S,
    identity: &IdentityState,
) -> Result<MemberDirectoryView, ApiError> {
    require_identity(identity, EntityKind::Profile, "list_members")?;
    let members: Vec<Profile> = store.list_profiles().map_err(store_err)?;

    Ok(MemberDirectoryView {
        members,
        can_change_roles: compute_global_capabilities(identity).can_change_roles,
    })
}

/// Changes a profile's role.
///
/// # Returns
///
/// The refetched member directory.
///
/// # Errors
///
/// Returns an error if the caller is not an administrator, the profile does
/// not exist, or the store fails.
pub fn update_profile_role<S: DashboardStore>(
    store: &mut S,
    identity: &IdentityState,
    request: &UpdateProfileRoleRequest,
) -> Result<MemberDirectoryView, ApiError> {
    let mutation: Mutation = Mutation::ChangeRole {
        id: request.profile_id.clone(),
        role: request.role,
    };

    if execute(store, identity, &mutation, None)? == 0 {
        return Err(not_found("Profile", &request.profile_id));
    }
    list_members(store, identity)
}

