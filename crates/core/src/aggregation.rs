// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Derived statistics computed on read.
//!
//! These functions are the reference definitions of the listing statistics.
//! The store computes the same numbers with count queries; both must agree
//! for any dataset.

use std::collections::HashMap;

use kestrel_domain::{Attendance, AttendanceId, ProfileId, ProjectId, ProjectLog, ProjectMember};
use serde::{Deserialize, Serialize};
use time::{Date, Duration};

use crate::attendance::AttendanceState;

/// Length of the trailing window used for recent activity.
pub const RECENT_WINDOW_DAYS: i64 = 7;

/// Returns the first day inside the recent window ending on `today`.
///
/// The comparison is by calendar date: a log dated exactly seven days before
/// `today` is recent, one dated eight days before is not.
#[must_use]
pub fn recent_window_start(today: Date) -> Date {
    today
        .checked_sub(Duration::days(RECENT_WINDOW_DAYS))
        .unwrap_or(Date::MIN)
}

/// Returns whether a log date falls inside the recent window.
#[must_use]
pub fn is_recent(log_date: Date, today: Date) -> bool {
    log_date >= recent_window_start(today)
}

/// Counts the membership links that reference `project_id`.
///
/// Reference semantics for the store's member count query.
#[must_use]
pub fn member_count(project_id: &ProjectId, links: &[ProjectMember]) -> u64 {
    links
        .iter()
        .filter(|link| &link.project_id == project_id)
        .map(|_| 1u64)
        .sum()
}

/// Counts the logs of `project_id` dated inside the recent window.
///
/// Reference semantics for the store's recent log count query.
#[must_use]
pub fn recent_log_count(project_id: &ProjectId, logs: &[ProjectLog], today: Date) -> u64 {
    logs.iter()
        .filter(|log| &log.project_id == project_id && is_recent(log.log_date, today))
        .map(|_| 1u64)
        .sum()
}

/// Statistics shown next to a project in the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectStats {
    /// Number of linked members.
    pub member_count: u64,
    /// Number of logs dated inside the recent window.
    pub recent_log_count: u64,
}

/// Computes both listing statistics for one project.
///
/// The listing reads these numbers from the store; any dataset must produce
/// the same values here.
#[must_use]
pub fn project_stats(
    project_id: &ProjectId,
    links: &[ProjectMember],
    logs: &[ProjectLog],
    today: Date,
) -> ProjectStats {
    ProjectStats {
        member_count: member_count(project_id, links),
        recent_log_count: recent_log_count(project_id, logs, today),
    }
}

/// Presence of members on one date.
///
/// Built from the attendance rows of that date. A member with no row is
/// absent; there is no absent record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRoster {
    date: Date,
    present: HashMap<ProfileId, AttendanceId>,
}

impl AttendanceRoster {
    /// Builds the roster for `date`, ignoring rows dated otherwise.
    #[must_use]
    pub fn for_date(date: Date, rows: &[Attendance]) -> Self {
        let present: HashMap<ProfileId, AttendanceId> = rows
            .iter()
            .filter(|row| row.attendance_date == date)
            .map(|row| (row.member_id.clone(), row.id.clone()))
            .collect();
        Self { date, present }
    }

    /// Returns the roster's date.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    /// Returns whether `member_id` is marked present.
    #[must_use]
    pub fn is_present(&self, member_id: &ProfileId) -> bool {
        self.present.contains_key(member_id)
    }

    /// Returns the current state of `member_id`.
    #[must_use]
    pub fn state_of(&self, member_id: &ProfileId) -> AttendanceState {
        if self.is_present(member_id) {
            AttendanceState::Present
        } else {
            AttendanceState::Absent
        }
    }

    /// Returns the record marking `member_id` present, if any.
    #[must_use]
    pub fn record_for(&self, member_id: &ProfileId) -> Option<&AttendanceId> {
        self.present.get(member_id)
    }

    /// Returns the number of members marked present.
    #[must_use]
    pub fn present_count(&self) -> usize {
        self.present.len()
    }
}
