// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capability computation for authorization-aware UI gating.
//!
//! Capabilities expose what an identity is permitted to do. They are
//! advisory only: every handler runs the access policy again before any
//! store call.

use kestrel::{Action, EntityKind, IdentityState, can_perform};
use kestrel_domain::ProjectLog;

use crate::request_response::{Capability, GlobalCapabilities, LogCapabilities};

/// Computes dashboard-wide capabilities.
///
/// # Arguments
///
/// * `identity` - The caller's identity state
#[must_use]
pub fn compute_global_capabilities(identity: &IdentityState) -> GlobalCapabilities {
    let allowed = |action: Action, entity: EntityKind| -> Capability {
        Capability::from_bool(can_perform(identity, action, entity, None))
    };

    GlobalCapabilities {
        can_create_project: allowed(Action::Create, EntityKind::Project),
        can_manage_members: allowed(Action::Create, EntityKind::ProjectMember),
        can_manage_inventory: allowed(Action::Create, EntityKind::InventoryItem),
        can_mark_attendance: allowed(Action::Create, EntityKind::Attendance),
        can_change_roles: allowed(Action::Update, EntityKind::Profile),
    }
}

/// Computes what the caller may do with one log entry.
///
/// Only the author is offered edit and delete, administrators included.
#[must_use]
pub fn compute_log_capabilities(identity: &IdentityState, log: &ProjectLog) -> LogCapabilities {
    let owner = Some(&log.author_id);
    LogCapabilities {
        can_edit: Capability::from_bool(can_perform(
            identity,
            Action::Update,
            EntityKind::ProjectLog,
            owner,
        )),
        can_delete: Capability::from_bool(can_perform(
            identity,
            Action::Delete,
            EntityKind::ProjectLog,
            owner,
        )),
    }
}

/// Computes whether the caller may write a new log entry.
#[must_use]
pub fn compute_can_create_log(identity: &IdentityState) -> Capability {
    Capability::from_bool(can_perform(
        identity,
        Action::Create,
        EntityKind::ProjectLog,
        None,
    ))
}
