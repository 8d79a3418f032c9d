// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod initialization_tests;
mod inventory_tests;
mod log_tests;

use kestrel_domain::{Profile, Project, ProjectDraft, Role};
use time::{Date, Month};

use crate::{DashboardStore, Persistence};

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database")
}

pub fn create_test_admin(persistence: &mut Persistence) -> Profile {
    persistence
        .create_profile("Ada Admin", "ada@example.com", Role::Admin)
        .unwrap()
}

pub fn create_test_member(persistence: &mut Persistence, name: &str) -> Profile {
    let email: String = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
    persistence
        .create_profile(name, &email, Role::Member)
        .unwrap()
}

pub fn create_test_project(persistence: &mut Persistence, name: &str) -> Project {
    let draft: ProjectDraft = ProjectDraft::new(name, Some("Test project")).unwrap();
    persistence.insert_project(&draft).unwrap()
}

/// Returns October 15, 2026 as a fixed "today".
pub fn create_test_today() -> Date {
    Date::from_calendar_date(2026, Month::October, 15).expect("Valid test date")
}
