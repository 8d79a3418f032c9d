// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Access policy.
//!
//! A single decision function answers whether an identity may perform an
//! action on an entity kind. Rules are evaluated top to bottom and the first
//! match wins:
//!
//! 1. An unresolved identity (still loading, or signed out) is denied.
//! 2. Create, update and delete on projects, inventory items and attendance
//!    require the administrator role.
//! 3. Update and delete on a project log require the caller to be its author,
//!    whatever the caller's role.
//! 4. Any resolved identity may create a project log.
//! 5. Any resolved identity may read anything.
//! 6. Project membership links are managed by administrators.
//! 7. Only administrators change a profile (its role); profiles are never
//!    created or deleted here.
//! 8. Everything else is denied.
//!
//! The policy is enforced inside every mutating operation before the store is
//! touched. Capability flags shown to a UI are derived from it, never the
//! other way around.

use kestrel_domain::{ProfileId, Role};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::command::Mutation;

/// A resolved caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// The caller's profile identifier.
    pub id: ProfileId,
    /// The caller's role as recorded on the profile.
    pub role: Role,
}

impl Identity {
    /// Creates a new identity.
    #[must_use]
    pub const fn new(id: ProfileId, role: Role) -> Self {
        Self { id, role }
    }

    /// Returns whether this identity carries administrator authority.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// What the identity resolver currently knows about the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IdentityState {
    /// Resolution is in flight; nothing may be read or written yet.
    #[default]
    Loading,
    /// Resolution finished without an identity.
    SignedOut,
    /// Resolution finished with an identity.
    Resolved(Identity),
}

impl IdentityState {
    /// Builds the state from the resolver's `{identity, is_loading}` pair.
    ///
    /// Loading takes precedence: an identity reported while still loading is
    /// not trusted yet.
    #[must_use]
    pub fn from_parts(identity: Option<Identity>, is_loading: bool) -> Self {
        match (identity, is_loading) {
            (_, true) => Self::Loading,
            (None, false) => Self::SignedOut,
            (Some(identity), false) => Self::Resolved(identity),
        }
    }

    /// Returns the resolved identity, if any.
    #[must_use]
    pub const fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Resolved(identity) => Some(identity),
            Self::Loading | Self::SignedOut => None,
        }
    }

    /// Returns whether resolution is still in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// The kinds of record the policy distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Profile,
    Project,
    ProjectMember,
    ProjectLog,
    InventoryItem,
    Attendance,
}

impl EntityKind {
    /// Every entity kind, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Profile,
        Self::Project,
        Self::ProjectMember,
        Self::ProjectLog,
        Self::InventoryItem,
        Self::Attendance,
    ];

    /// Returns the snake-case name of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Project => "project",
            Self::ProjectMember => "project_member",
            Self::ProjectLog => "project_log",
            Self::InventoryItem => "inventory_item",
            Self::Attendance => "attendance",
        }
    }

    /// Returns whether mutations on this kind are reserved for administrators.
    #[must_use]
    pub const fn is_admin_managed(&self) -> bool {
        matches!(self, Self::Project | Self::InventoryItem | Self::Attendance)
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The operations the policy distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Read,
    Create,
    Update,
    Delete,
}

impl Action {
    /// Every action, in declaration order.
    pub const ALL: [Self; 4] = [Self::Read, Self::Create, Self::Update, Self::Delete];

    /// Returns the lowercase name of this action.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    /// Returns whether this action writes to the store.
    #[must_use]
    pub const fn is_mutation(&self) -> bool {
        !matches!(self, Self::Read)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why the policy refused an operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessDenied {
    /// The identity is still loading.
    #[error("identity is still loading")]
    IdentityLoading,
    /// No identity is signed in.
    #[error("no identity is signed in")]
    SignedOut,
    /// The operation requires the administrator role.
    #[error("'{action}' on {entity} requires the admin role")]
    RequiresAdmin {
        /// The attempted action.
        action: Action,
        /// The targeted entity kind.
        entity: EntityKind,
    },
    /// The operation is reserved for the record's author.
    #[error("'{action}' on {entity} is reserved for its author")]
    NotOwner {
        /// The attempted action.
        action: Action,
        /// The targeted entity kind.
        entity: EntityKind,
    },
    /// No rule allows the operation for anyone.
    #[error("'{action}' on {entity} is not permitted")]
    NotPermitted {
        /// The attempted action.
        action: Action,
        /// The targeted entity kind.
        entity: EntityKind,
    },
}

impl AccessDenied {
    /// Returns whether the denial stems from an unresolved identity rather
    /// than from the resolved identity's rights.
    #[must_use]
    pub const fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::IdentityLoading | Self::SignedOut)
    }
}

/// Decides whether an identity may perform `action` on `entity`.
///
/// `owner` is the author of the targeted record; it only matters for project
/// log updates and deletes, where a missing owner denies.
///
/// # Returns
///
/// The resolved identity that was granted access.
///
/// # Errors
///
/// Returns the `AccessDenied` reason of the first rule that matched.
pub fn authorize<'a>(
    state: &'a IdentityState,
    action: Action,
    entity: EntityKind,
    owner: Option<&ProfileId>,
) -> Result<&'a Identity, AccessDenied> {
    let identity: &Identity = match state {
        IdentityState::Loading => return Err(AccessDenied::IdentityLoading),
        IdentityState::SignedOut => return Err(AccessDenied::SignedOut),
        IdentityState::Resolved(identity) => identity,
    };

    let allowed: Result<(), AccessDenied> = match (entity, action) {
        (kind, action) if kind.is_admin_managed() && action.is_mutation() => {
            admin_only(identity, action, entity)
        }
        (EntityKind::ProjectLog, Action::Update | Action::Delete) => {
            if owner == Some(&identity.id) {
                Ok(())
            } else {
                Err(AccessDenied::NotOwner { action, entity })
            }
        }
        (EntityKind::ProjectLog, Action::Create) | (_, Action::Read) => Ok(()),
        (EntityKind::ProjectMember, Action::Create | Action::Delete)
        | (EntityKind::Profile, Action::Update) => admin_only(identity, action, entity),
        _ => Err(AccessDenied::NotPermitted { action, entity }),
    };

    allowed.map(|()| identity)
}

fn admin_only(identity: &Identity, action: Action, entity: EntityKind) -> Result<(), AccessDenied> {
    if identity.is_admin() {
        Ok(())
    } else {
        Err(AccessDenied::RequiresAdmin { action, entity })
    }
}

/// Boolean form of [`authorize`].
#[must_use]
pub fn can_perform(
    state: &IdentityState,
    action: Action,
    entity: EntityKind,
    owner: Option<&ProfileId>,
) -> bool {
    authorize(state, action, entity, owner).is_ok()
}

/// Authorizes a concrete mutation.
///
/// # Errors
///
/// Returns the `AccessDenied` reason if the policy refuses the mutation.
pub fn authorize_mutation<'a>(
    state: &'a IdentityState,
    mutation: &Mutation,
    owner: Option<&ProfileId>,
) -> Result<&'a Identity, AccessDenied> {
    authorize(state, mutation.action(), mutation.entity_kind(), owner)
}
