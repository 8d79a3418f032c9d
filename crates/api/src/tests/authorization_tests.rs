// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Every refused mutation must leave the store untouched.

use kestrel::IdentityState;
use kestrel_domain::Role;

use super::helpers::{TestContext, create_test_today};
use crate::error::ApiError;
use crate::handlers::{
    create_inventory_item, create_project, delete_project, list_inventory, list_members,
    list_projects, remove_project_member, update_profile_role, update_project,
};
use crate::request_response::{
    CreateInventoryItemRequest, CreateProjectRequest, DeleteProjectRequest, ProjectMemberRequest,
    QuantityInput, UpdateProfileRoleRequest, UpdateProjectRequest,
};

#[test]
fn test_member_denials_issue_no_writes() {
    let mut ctx = TestContext::new();
    let project = ctx.seed_project("Rover");
    let member = ctx.as_member_a.clone();
    let today = create_test_today();

    let results = [
        update_project(
            &mut ctx.store,
            &member,
            &UpdateProjectRequest {
                project_id: project.id.clone(),
                name: String::from("Renamed"),
                description: None,
            },
            today,
        )
        .map(|_| ()),
        delete_project(
            &mut ctx.store,
            &member,
            &DeleteProjectRequest {
                project_id: project.id.clone(),
                confirmed: true,
            },
            today,
        )
        .map(|_| ()),
        remove_project_member(
            &mut ctx.store,
            &member,
            &ProjectMemberRequest {
                project_id: project.id.clone(),
                user_id: ctx.member_b.id.clone(),
            },
            today,
        )
        .map(|_| ()),
        create_inventory_item(
            &mut ctx.store,
            &member,
            &CreateInventoryItemRequest {
                name: String::from("Tape"),
                description: None,
                quantity: QuantityInput::Number(3),
            },
        )
        .map(|_| ()),
        update_profile_role(
            &mut ctx.store,
            &member,
            &UpdateProfileRoleRequest {
                profile_id: ctx.member_a.id.clone(),
                role: Role::Admin,
            },
        )
        .map(|_| ()),
    ];

    for result in results {
        assert!(matches!(
            result,
            Err(ApiError::Unauthorized { ref required_role, .. }) if required_role == "admin"
        ));
    }
    assert!(ctx.store.writes.is_empty());
}

#[test]
fn test_unresolved_identities_cannot_read_or_write() {
    let mut ctx = TestContext::new();
    let today = create_test_today();

    for state in [IdentityState::Loading, IdentityState::SignedOut] {
        assert!(matches!(
            list_projects(&mut ctx.store, &state, today),
            Err(ApiError::AuthenticationRequired { .. })
        ));
        assert!(matches!(
            list_inventory(&mut ctx.store, &state),
            Err(ApiError::AuthenticationRequired { .. })
        ));
        assert!(matches!(
            list_members(&mut ctx.store, &state),
            Err(ApiError::AuthenticationRequired { .. })
        ));
        assert!(matches!(
            create_project(
                &mut ctx.store,
                &state,
                &CreateProjectRequest {
                    name: String::from("Drone X"),
                    description: None,
                },
                today,
            ),
            Err(ApiError::AuthenticationRequired { .. })
        ));
    }
    assert!(ctx.store.writes.is_empty());
}
