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

mod error;
mod ids;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::DomainError;
pub use ids::{AttendanceId, ItemId, LogId, ProfileId, ProjectId};
pub use types::{
    Attendance, InventoryDraft, InventoryItem, LogDraft, Profile, Project, ProjectDraft,
    ProjectLog, ProjectMember, Role, calendar_date,
};
pub use validation::{
    coerce_quantity, format_calendar_date, normalize_description, parse_calendar_date,
    require_non_empty,
};
