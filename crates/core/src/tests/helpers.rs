// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use kestrel_domain::{
    Attendance, AttendanceId, LogId, ProfileId, ProjectId, ProjectLog, ProjectMember, Role,
};
use time::{Date, Duration, Month, OffsetDateTime};

use crate::{Identity, IdentityState};

pub fn create_test_admin() -> IdentityState {
    IdentityState::Resolved(Identity::new(ProfileId::new("admin-1"), Role::Admin))
}

pub fn create_test_member(id: &str) -> IdentityState {
    IdentityState::Resolved(Identity::new(ProfileId::new(id), Role::Member))
}

/// Returns October 15, 2026 as the fixed "today" for window tests.
pub fn create_test_today() -> Date {
    Date::from_calendar_date(2026, Month::October, 15).unwrap()
}

pub fn days_before(today: Date, days: i64) -> Date {
    today - Duration::days(days)
}

pub fn create_test_link(project: &str, user: &str) -> ProjectMember {
    ProjectMember {
        project_id: ProjectId::new(project),
        user_id: ProfileId::new(user),
    }
}

pub fn create_test_log(id: &str, project: &str, author: &str, log_date: Date) -> ProjectLog {
    ProjectLog {
        id: LogId::new(id),
        project_id: ProjectId::new(project),
        author_id: ProfileId::new(author),
        content: String::from("Progress"),
        log_date,
        created_at: OffsetDateTime::UNIX_EPOCH,
        updated_at: OffsetDateTime::UNIX_EPOCH,
    }
}

pub fn create_test_attendance(id: &str, member: &str, date: Date) -> Attendance {
    Attendance {
        id: AttendanceId::new(id),
        member_id: ProfileId::new(member),
        attendance_date: date,
        marked_by: ProfileId::new("admin-1"),
    }
}
