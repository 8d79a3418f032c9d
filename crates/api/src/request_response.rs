// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response data transfer objects.

use kestrel::AttendanceState;
use kestrel_domain::{
    AttendanceId, InventoryItem, ItemId, LogId, Profile, ProfileId, Project, ProjectId,
    ProjectMember, Role, calendar_date,
};
use kestrel_persistence::ProjectLogEntry;
use num_traits::ToPrimitive;
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use time::Date;

/// Whether an identity may perform an action.
///
/// Serialized as a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// The action is permitted.
    Allowed,
    /// The action is not permitted.
    Denied,
}

impl Capability {
    /// Returns true if the capability is allowed.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Creates a capability from a boolean value.
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::Allowed } else { Self::Denied }
    }
}

impl Serialize for Capability {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_bool(self.is_allowed())
    }
}

impl<'de> Deserialize<'de> for Capability {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value: bool = bool::deserialize(deserializer)?;
        Ok(Self::from_bool(value))
    }
}

/// A quantity as typed by the user: a JSON number or free text.
///
/// Free text is coerced the same way a form field is: leading digits are
/// read and anything else becomes zero. Deserialization accepts any JSON
/// value; fractions are truncated and values that are neither numbers nor
/// text become zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QuantityInput {
    /// A numeric value.
    Number(i64),
    /// Raw text.
    Text(String),
}

impl QuantityInput {
    /// Returns the raw text to coerce.
    #[must_use]
    pub fn to_raw(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(text) => text.clone(),
        }
    }

    fn from_float(value: f64) -> Self {
        let truncated: f64 = value.trunc();
        let number: i64 = truncated.to_i64().unwrap_or(if truncated > 0.0 {
            i64::MAX
        } else {
            0
        });
        Self::Number(number)
    }
}

impl Default for QuantityInput {
    fn default() -> Self {
        Self::Number(0)
    }
}

struct QuantityInputVisitor;

impl<'de> Visitor<'de> for QuantityInputVisitor {
    type Value = QuantityInput;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a quantity")
    }

    fn visit_bool<E: de::Error>(self, _value: bool) -> Result<Self::Value, E> {
        Ok(QuantityInput::default())
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(QuantityInput::Number(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(QuantityInput::Number(i64::try_from(value).unwrap_or(i64::MAX)))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(QuantityInput::from_float(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(QuantityInput::Text(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(QuantityInput::Text(value))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(QuantityInput::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(QuantityInput::default())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(QuantityInput::default())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(QuantityInput::default())
    }
}

impl<'de> Deserialize<'de> for QuantityInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(QuantityInputVisitor)
    }
}

// ============================================================================
// Requests
// ============================================================================

/// API request to create a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    /// The project name.
    pub name: String,
    /// An optional description; blank text is stored as none.
    #[serde(default)]
    pub description: Option<String>,
}

/// API request to update a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProjectRequest {
    /// The project to update.
    pub project_id: ProjectId,
    /// The new name.
    pub name: String,
    /// The new description.
    #[serde(default)]
    pub description: Option<String>,
}

/// API request to delete a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteProjectRequest {
    /// The project to delete.
    pub project_id: ProjectId,
    /// Must be true; deleting a project also removes its links and logs.
    #[serde(default)]
    pub confirmed: bool,
}

/// API request to link or unlink a profile and a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMemberRequest {
    /// The project.
    pub project_id: ProjectId,
    /// The profile.
    pub user_id: ProfileId,
}

/// API request to write a project log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProjectLogRequest {
    /// The project the entry belongs to.
    pub project_id: ProjectId,
    /// The entry text.
    pub content: String,
    /// The day the entry describes (`YYYY-MM-DD`); today when omitted.
    #[serde(default)]
    pub log_date: Option<String>,
}

/// API request to edit a project log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProjectLogRequest {
    /// The entry to edit.
    pub log_id: LogId,
    /// The new text.
    pub content: String,
}

/// API request to delete a project log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteProjectLogRequest {
    /// The project whose detail view is returned.
    pub project_id: ProjectId,
    /// The entry to delete.
    pub log_id: LogId,
}

/// API request to create an inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateInventoryItemRequest {
    /// The item name.
    pub name: String,
    /// An optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// The stock count.
    #[serde(default)]
    pub quantity: QuantityInput,
}

/// API request to update an inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateInventoryItemRequest {
    /// The item to update.
    pub item_id: ItemId,
    /// The new name.
    pub name: String,
    /// The new description.
    #[serde(default)]
    pub description: Option<String>,
    /// The new stock count.
    #[serde(default)]
    pub quantity: QuantityInput,
}

/// API request to delete an inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteInventoryItemRequest {
    /// The item to delete.
    pub item_id: ItemId,
}

/// API request to flip a member's presence on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleAttendanceRequest {
    /// The member to toggle.
    pub member_id: ProfileId,
    /// The day (`YYYY-MM-DD`).
    pub date: String,
}

/// API request to change a profile's role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProfileRoleRequest {
    /// The profile to update.
    pub profile_id: ProfileId,
    /// The new role.
    pub role: Role,
}

// ============================================================================
// Views
// ============================================================================

/// Dashboard-wide capabilities of the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalCapabilities {
    /// Whether the caller may create, edit and delete projects.
    pub can_create_project: Capability,
    /// Whether the caller may link and unlink project members.
    pub can_manage_members: Capability,
    /// Whether the caller may create, edit and delete inventory items.
    pub can_manage_inventory: Capability,
    /// Whether the caller may toggle attendance.
    pub can_mark_attendance: Capability,
    /// Whether the caller may change profile roles.
    pub can_change_roles: Capability,
}

/// Capabilities of the caller on one project log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogCapabilities {
    /// Whether the caller may edit the entry.
    pub can_edit: Capability,
    /// Whether the caller may delete the entry.
    pub can_delete: Capability,
}

/// A project with its listing statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    /// The project.
    #[serde(flatten)]
    pub project: Project,
    /// Number of linked members.
    pub member_count: u64,
    /// Number of logs dated in the last seven days.
    pub recent_log_count: u64,
}

/// The project listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectListView {
    /// Projects, newest first.
    pub projects: Vec<ProjectSummary>,
    /// What the caller may do.
    pub capabilities: GlobalCapabilities,
}

/// A project log as shown in the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogView {
    /// The entry and its author's name.
    #[serde(flatten)]
    pub entry: ProjectLogEntry,
    /// What the caller may do with this entry.
    pub capabilities: LogCapabilities,
}

/// One project with its members and logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDetailView {
    /// The project.
    pub project: Project,
    /// The membership links.
    pub members: Vec<ProjectMember>,
    /// Logs, latest log date first.
    pub logs: Vec<LogView>,
    /// Whether the caller may write a new entry.
    pub can_create_log: Capability,
    /// What the caller may do dashboard-wide.
    pub capabilities: GlobalCapabilities,
}

/// The inventory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryView {
    /// Items ordered by name.
    pub items: Vec<InventoryItem>,
    /// Whether the caller may change inventory.
    pub can_manage_inventory: Capability,
}

/// One member's presence on the view's date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceEntry {
    /// The member.
    pub profile: Profile,
    /// Present or absent.
    pub state: AttendanceState,
    /// The presence record, when present.
    pub attendance_id: Option<AttendanceId>,
}

/// Attendance of every member on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceView {
    /// The date shown.
    #[serde(with = "calendar_date")]
    pub date: Date,
    /// Members ordered by name.
    pub members: Vec<AttendanceEntry>,
    /// Number of members present.
    pub present_count: usize,
    /// Whether the caller may toggle attendance.
    pub can_mark_attendance: Capability,
}

impl AttendanceView {
    /// Returns the state of `member_id`, absent if the member is not listed.
    #[must_use]
    pub fn state_of(&self, member_id: &ProfileId) -> AttendanceState {
        self.members
            .iter()
            .find(|entry| &entry.profile.id == member_id)
            .map_or(AttendanceState::Absent, |entry| entry.state)
    }
}

/// The profile directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberDirectoryView {
    /// Profiles ordered by name.
    pub members: Vec<Profile>,
    /// Whether the caller may change roles.
    pub can_change_roles: Capability,
}

/// The signed-in profile and what it may do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WhoAmIResponse {
    /// The caller's stored profile.
    pub profile: Profile,
    /// The caller's dashboard-wide capabilities.
    pub capabilities: GlobalCapabilities,
}
