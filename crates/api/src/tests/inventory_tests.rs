// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::TestContext;
use crate::error::ApiError;
use crate::handlers::{
    create_inventory_item, delete_inventory_item, list_inventory, update_inventory_item,
};
use crate::request_response::{
    CreateInventoryItemRequest, DeleteInventoryItemRequest, QuantityInput,
    UpdateInventoryItemRequest,
};

fn create_request(name: &str, quantity: QuantityInput) -> CreateInventoryItemRequest {
    CreateInventoryItemRequest {
        name: name.to_string(),
        description: None,
        quantity,
    }
}

#[test]
fn test_admin_manages_inventory() {
    let mut ctx = TestContext::new();

    let view = create_inventory_item(
        &mut ctx.store,
        &ctx.as_admin,
        &create_request("Propellers", QuantityInput::Number(12)),
    )
    .unwrap();
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].quantity, 12);
    assert!(view.can_manage_inventory.is_allowed());

    let item_id = view.items[0].id.clone();
    let update = UpdateInventoryItemRequest {
        item_id: item_id.clone(),
        name: String::from("Propellers"),
        description: Some(String::from("5 inch")),
        quantity: QuantityInput::Text(String::from("8")),
    };
    let view = update_inventory_item(&mut ctx.store, &ctx.as_admin, &update).unwrap();
    assert_eq!(view.items[0].quantity, 8);
    assert_eq!(view.items[0].description.as_deref(), Some("5 inch"));

    let view = delete_inventory_item(
        &mut ctx.store,
        &ctx.as_admin,
        &DeleteInventoryItemRequest { item_id },
    )
    .unwrap();
    assert!(view.items.is_empty());
}

#[test]
fn test_quantity_is_coerced_not_rejected() {
    let mut ctx = TestContext::new();

    create_inventory_item(
        &mut ctx.store,
        &ctx.as_admin,
        &create_request("Batteries", QuantityInput::Text(String::from("lots"))),
    )
    .unwrap();
    let view = create_inventory_item(
        &mut ctx.store,
        &ctx.as_admin,
        &create_request("Cables", QuantityInput::Number(-4)),
    )
    .unwrap();

    assert_eq!(view.items.len(), 2);
    assert!(view.items.iter().all(|item| item.quantity == 0));
    assert_eq!(view.items[0].name, "Batteries");
}

#[test]
fn test_member_reads_but_cannot_change_inventory() {
    let mut ctx = TestContext::new();

    let result = create_inventory_item(
        &mut ctx.store,
        &ctx.as_member_a,
        &create_request("Solder", QuantityInput::Number(1)),
    );
    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
    assert!(ctx.store.writes.is_empty());

    let view = list_inventory(&mut ctx.store, &ctx.as_member_a).unwrap();
    assert!(view.items.is_empty());
    assert!(!view.can_manage_inventory.is_allowed());
}

#[test]
fn test_update_missing_item_is_not_found() {
    let mut ctx = TestContext::new();
    let update = UpdateInventoryItemRequest {
        item_id: "missing".into(),
        name: String::from("Ghost"),
        description: None,
        quantity: QuantityInput::default(),
    };

    let result = update_inventory_item(&mut ctx.store, &ctx.as_admin, &update);

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_json_quantities_of_any_shape_are_coerced() {
    let mut ctx = TestContext::new();
    let bodies: [(&str, u32); 7] = [
        (r#"{"name": "Fraction", "quantity": 2.5}"#, 2),
        (r#"{"name": "Negative fraction", "quantity": -3.7}"#, 0),
        (r#"{"name": "Null", "quantity": null}"#, 0),
        (r#"{"name": "Flag", "quantity": true}"#, 0),
        (r#"{"name": "Huge", "quantity": 99999999999999999999}"#, u32::MAX),
        (r#"{"name": "Text", "quantity": "7"}"#, 7),
        (r#"{"name": "Missing"}"#, 0),
    ];

    for (body, _) in &bodies {
        let request: CreateInventoryItemRequest = serde_json::from_str(body).unwrap();
        create_inventory_item(&mut ctx.store, &ctx.as_admin, &request).unwrap();
    }

    let view = list_inventory(&mut ctx.store, &ctx.as_admin).unwrap();
    assert_eq!(view.items.len(), bodies.len());
    for (body, expected) in &bodies {
        let request: CreateInventoryItemRequest = serde_json::from_str(body).unwrap();
        let item = view
            .items
            .iter()
            .find(|item| item.name == request.name)
            .unwrap();
        assert_eq!(item.quantity, *expected, "{body}");
    }
}

#[test]
fn test_structured_quantity_deserializes_to_zero() {
    let request: CreateInventoryItemRequest =
        serde_json::from_str(r#"{"name": "Odd", "quantity": [1, 2]}"#).unwrap();
    assert_eq!(request.quantity, QuantityInput::Number(0));

    let request: CreateInventoryItemRequest =
        serde_json::from_str(r#"{"name": "Odd", "quantity": {"count": 3}}"#).unwrap();
    assert_eq!(request.quantity, QuantityInput::Number(0));
}
