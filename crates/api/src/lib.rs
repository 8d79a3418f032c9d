// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod capabilities;
mod error;
mod handlers;
mod identity;
mod request_response;

#[cfg(test)]
mod tests;

pub use capabilities::{
    compute_can_create_log, compute_global_capabilities, compute_log_capabilities,
};
pub use error::{
    ApiError, translate_access_denied, translate_core_error, translate_domain_error,
    translate_persistence_error,
};
pub use handlers::{
    add_project_member, create_inventory_item, create_project, create_project_log,
    delete_inventory_item, delete_project, delete_project_log, get_attendance,
    get_project_detail, list_inventory, list_members, list_my_projects, list_projects,
    remove_project_member, toggle_attendance, update_inventory_item, update_profile_role,
    update_project, update_project_log, whoami,
};
pub use identity::{IdentityResolver, ProfileSession};
pub use request_response::{
    AttendanceEntry, AttendanceView, Capability, CreateInventoryItemRequest,
    CreateProjectLogRequest, CreateProjectRequest, DeleteInventoryItemRequest,
    DeleteProjectLogRequest, DeleteProjectRequest, GlobalCapabilities, InventoryView,
    LogCapabilities, LogView, MemberDirectoryView, ProjectDetailView, ProjectListView,
    ProjectMemberRequest, ProjectSummary, QuantityInput, ToggleAttendanceRequest,
    UpdateInventoryItemRequest, UpdateProfileRoleRequest, UpdateProjectLogRequest,
    UpdateProjectRequest, WhoAmIResponse,
};
