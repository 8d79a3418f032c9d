// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::str::FromStr;

use crate::{DomainError, InventoryDraft, LogDraft, ProfileId, ProjectDraft, ProjectId, Role};

#[test]
fn test_role_round_trips_through_its_string_form() {
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("Member").unwrap(), Role::Member);
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::Member.to_string(), "member");
}

#[test]
fn test_role_rejects_unknown_value() {
    let result = Role::from_str("owner");
    assert_eq!(result, Err(DomainError::InvalidRole(String::from("owner"))));
}

#[test]
fn test_only_admin_role_is_admin() {
    assert!(Role::Admin.is_admin());
    assert!(!Role::Member.is_admin());
    assert_eq!(Role::default(), Role::Member);
}

#[test]
fn test_ids_of_different_kinds_share_display_form() {
    let profile: ProfileId = ProfileId::new("abc");
    let project: ProjectId = ProjectId::from("abc");
    assert_eq!(profile.to_string(), project.to_string());
    assert_eq!(profile.as_str(), "abc");
}

#[test]
fn test_project_draft_trims_name_and_drops_blank_description() {
    let draft = ProjectDraft::new("  Drone X  ", Some("   ")).unwrap();
    assert_eq!(draft.name(), "Drone X");
    assert_eq!(draft.description(), None);
}

#[test]
fn test_project_draft_keeps_description() {
    let draft = ProjectDraft::new("Drone X", Some("Quadcopter build")).unwrap();
    assert_eq!(draft.description(), Some("Quadcopter build"));
}

#[test]
fn test_project_draft_rejects_blank_name() {
    let result = ProjectDraft::new(" \t ", None);
    assert_eq!(result, Err(DomainError::EmptyField { field: "name" }));
}

#[test]
fn test_log_draft_keeps_content_as_written() {
    let draft = LogDraft::new("  soldered the ESC\n").unwrap();
    assert_eq!(draft.content(), "  soldered the ESC\n");
}

#[test]
fn test_log_draft_rejects_whitespace_only_content() {
    let result = LogDraft::new("\n\n  ");
    assert_eq!(result, Err(DomainError::EmptyField { field: "content" }));
}

#[test]
fn test_inventory_draft_coerces_invalid_quantity_to_zero() {
    let draft = InventoryDraft::new("Propellers", None, "lots").unwrap();
    assert_eq!(draft.quantity(), 0);
}

#[test]
fn test_inventory_draft_rejects_blank_name_even_with_quantity() {
    let result = InventoryDraft::new("", Some("spare"), "4");
    assert_eq!(result, Err(DomainError::EmptyField { field: "name" }));
}
