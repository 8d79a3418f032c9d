// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::ids::{AttendanceId, ItemId, LogId, ProfileId, ProjectId};
use crate::validation::{coerce_quantity, normalize_description, require_non_empty};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, OffsetDateTime};

time::serde::format_description!(pub calendar_date, Date, "[year]-[month]-[day]");

/// The role attached to a profile.
///
/// Roles gate mutations only; every resolved identity may read every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Manages projects, inventory, attendance and member roles.
    Admin,
    /// Any other registered user. Members write their own project logs.
    #[default]
    Member,
}

impl Role {
    /// Converts this role to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }

    /// Returns whether this role carries administrator authority.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "member" => Ok(Self::Member),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// The profile identifier, shared with the identity provider.
    pub id: ProfileId,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// The profile's role.
    pub role: Role,
}

/// A tracked initiative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// The project identifier.
    pub id: ProjectId,
    /// The project name, never empty.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Store-assigned creation timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Links a profile to a project.
///
/// The `(project_id, user_id)` pair is unique in the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectMember {
    /// The linked project.
    pub project_id: ProjectId,
    /// The linked profile.
    pub user_id: ProfileId,
}

/// A dated progress entry written by one author against one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLog {
    /// The log identifier.
    pub id: LogId,
    /// The project the entry belongs to.
    pub project_id: ProjectId,
    /// The profile that created the entry. Fixed at creation.
    pub author_id: ProfileId,
    /// Free-text content, never empty.
    pub content: String,
    /// The calendar day the entry describes.
    #[serde(with = "calendar_date")]
    pub log_date: Date,
    /// Store-assigned creation timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Refreshed by the store on every content update.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// A stock record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// The item identifier.
    pub id: ItemId,
    /// The item name, never empty.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Units on hand.
    pub quantity: u32,
}

/// A presence record for one member on one day.
///
/// The record's existence means "present"; no absent record is ever stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendance {
    /// The attendance identifier.
    pub id: AttendanceId,
    /// The member marked present.
    pub member_id: ProfileId,
    /// The day of attendance.
    #[serde(with = "calendar_date")]
    pub attendance_date: Date,
    /// The administrator who recorded the presence.
    pub marked_by: ProfileId,
}

/// Validated project fields ready for insert or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    name: String,
    description: Option<String>,
}

impl ProjectDraft {
    /// Validates raw project input.
    ///
    /// The name is trimmed; a blank description becomes `None`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyField` if the name is blank.
    pub fn new(name: &str, description: Option<&str>) -> Result<Self, DomainError> {
        let name: &str = require_non_empty("name", name)?;
        Ok(Self {
            name: name.to_string(),
            description: normalize_description(description),
        })
    }

    /// Returns the validated name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the normalized description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Validated log content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogDraft {
    content: String,
}

impl LogDraft {
    /// Validates raw log content.
    ///
    /// Content is stored as written; the blank check ignores surrounding
    /// whitespace.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyField` if the content is blank.
    pub fn new(content: &str) -> Result<Self, DomainError> {
        require_non_empty("content", content)?;
        Ok(Self {
            content: content.to_string(),
        })
    }

    /// Returns the validated content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Validated inventory fields ready for insert or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryDraft {
    name: String,
    description: Option<String>,
    quantity: u32,
}

impl InventoryDraft {
    /// Validates raw inventory input.
    ///
    /// The quantity is never rejected: unparseable or negative input is
    /// coerced to zero.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyField` if the name is blank.
    pub fn new(
        name: &str,
        description: Option<&str>,
        raw_quantity: &str,
    ) -> Result<Self, DomainError> {
        let name: &str = require_non_empty("name", name)?;
        Ok(Self {
            name: name.to_string(),
            description: normalize_description(description),
            quantity: coerce_quantity(raw_quantity),
        })
    }

    /// Returns the validated name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the normalized description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the coerced quantity.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }
}
