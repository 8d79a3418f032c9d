// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Attendance toggle.
//!
//! Each `(member, date)` pair is `Absent` until a record is inserted and
//! oscillates on every toggle. A toggle is exactly one insert or one delete.

use kestrel_domain::{AttendanceId, ProfileId};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::aggregation::AttendanceRoster;
use crate::command::Mutation;
use crate::error::CoreError;
use crate::policy::{Action, EntityKind, Identity, IdentityState, authorize};

/// Presence of one member on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceState {
    /// A record exists.
    Present,
    /// No record exists.
    #[default]
    Absent,
}

impl AttendanceState {
    /// Returns the state a toggle leads to.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Present => Self::Absent,
            Self::Absent => Self::Present,
        }
    }
}

/// The store change a toggle requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendanceTransition {
    /// `Absent -> Present`: insert a record.
    MarkPresent {
        /// The member.
        member_id: ProfileId,
        /// The day.
        date: Date,
        /// The acting administrator.
        marked_by: ProfileId,
    },
    /// `Present -> Absent`: delete the existing record.
    MarkAbsent {
        /// The record to delete.
        attendance_id: AttendanceId,
        /// The member.
        member_id: ProfileId,
        /// The day.
        date: Date,
    },
}

impl AttendanceTransition {
    /// Returns the state after the transition is applied.
    #[must_use]
    pub const fn target_state(&self) -> AttendanceState {
        match self {
            Self::MarkPresent { .. } => AttendanceState::Present,
            Self::MarkAbsent { .. } => AttendanceState::Absent,
        }
    }

    /// Converts the transition into the store mutation that performs it.
    #[must_use]
    pub fn into_mutation(self) -> Mutation {
        match self {
            Self::MarkPresent {
                member_id,
                date,
                marked_by,
            } => Mutation::MarkPresent {
                member_id,
                date,
                marked_by,
            },
            Self::MarkAbsent { attendance_id, .. } => Mutation::MarkAbsent { id: attendance_id },
        }
    }
}

/// Plans the toggle of `member_id` on the roster's date.
///
/// The roster must reflect the store as last read; the plan is only as fresh
/// as that read.
///
/// # Errors
///
/// Returns `CoreError::AccessDenied` unless the caller is a resolved
/// administrator.
pub fn plan_toggle(
    state: &IdentityState,
    roster: &AttendanceRoster,
    member_id: &ProfileId,
) -> Result<AttendanceTransition, CoreError> {
    let transition_action: Action = match roster.state_of(member_id) {
        AttendanceState::Absent => Action::Create,
        AttendanceState::Present => Action::Delete,
    };
    let actor: &Identity = authorize(state, transition_action, EntityKind::Attendance, None)?;

    let transition: AttendanceTransition = match roster.record_for(member_id) {
        Some(attendance_id) => AttendanceTransition::MarkAbsent {
            attendance_id: attendance_id.clone(),
            member_id: member_id.clone(),
            date: roster.date(),
        },
        None => AttendanceTransition::MarkPresent {
            member_id: member_id.clone(),
            date: roster.date(),
            marked_by: actor.id.clone(),
        },
    };
    Ok(transition)
}
