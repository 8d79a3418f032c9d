// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use kestrel::IdentityState;

use super::helpers::TestContext;
use crate::capabilities::{
    compute_can_create_log, compute_global_capabilities, compute_log_capabilities,
};
use crate::request_response::{Capability, GlobalCapabilities};

#[test]
fn test_admin_has_every_global_capability() {
    let ctx = TestContext::new();

    let capabilities: GlobalCapabilities = compute_global_capabilities(&ctx.as_admin);

    assert_eq!(capabilities.can_create_project, Capability::Allowed);
    assert_eq!(capabilities.can_manage_members, Capability::Allowed);
    assert_eq!(capabilities.can_manage_inventory, Capability::Allowed);
    assert_eq!(capabilities.can_mark_attendance, Capability::Allowed);
    assert_eq!(capabilities.can_change_roles, Capability::Allowed);
}

#[test]
fn test_member_has_no_global_capability_but_may_log() {
    let ctx = TestContext::new();
    let member = ctx.as_member_a.clone();

    let capabilities = compute_global_capabilities(&member);

    assert_eq!(capabilities.can_create_project, Capability::Denied);
    assert_eq!(capabilities.can_manage_members, Capability::Denied);
    assert_eq!(capabilities.can_manage_inventory, Capability::Denied);
    assert_eq!(capabilities.can_mark_attendance, Capability::Denied);
    assert_eq!(capabilities.can_change_roles, Capability::Denied);
    assert_eq!(compute_can_create_log(&member), Capability::Allowed);
}

#[test]
fn test_loading_identity_may_not_log() {
    assert_eq!(
        compute_can_create_log(&IdentityState::Loading),
        Capability::Denied
    );
}

#[test]
fn test_log_capabilities_follow_authorship_only() {
    let mut ctx = TestContext::new();
    let project = ctx.seed_project("Rover");
    let author = ctx.member_a.clone();
    let log = ctx.seed_log(&project, &author, "Entry");

    let own = compute_log_capabilities(&ctx.as_member_a, &log);
    let admin = compute_log_capabilities(&ctx.as_admin, &log);

    assert!(own.can_edit.is_allowed() && own.can_delete.is_allowed());
    assert!(!admin.can_edit.is_allowed() && !admin.can_delete.is_allowed());
}

#[test]
fn test_capability_serializes_as_bool() {
    let json = serde_json::to_string(&Capability::Allowed).unwrap();
    assert_eq!(json, "true");

    let parsed: Capability = serde_json::from_str("false").unwrap();
    assert_eq!(parsed, Capability::Denied);
}
