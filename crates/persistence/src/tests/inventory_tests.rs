// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use kestrel_domain::{InventoryDraft, ItemId};

use super::create_test_persistence;
use crate::DashboardStore;

#[test]
fn test_insert_inventory_item_coerces_quantity() {
    let mut persistence = create_test_persistence();
    let draft = InventoryDraft::new("Propellers", Some("5 inch"), "12 boxes").unwrap();

    let item = persistence.insert_inventory_item(&draft).unwrap();
    assert_eq!(item.quantity, 12);

    let fetched = persistence.get_inventory_item(&item.id).unwrap().unwrap();
    assert_eq!(fetched, item);
}

#[test]
fn test_inventory_is_listed_by_name() {
    let mut persistence = create_test_persistence();
    for name in ["Solder", "Batteries", "Motors"] {
        let draft = InventoryDraft::new(name, None, "1").unwrap();
        persistence.insert_inventory_item(&draft).unwrap();
    }

    let names: Vec<String> = persistence
        .list_inventory()
        .unwrap()
        .into_iter()
        .map(|item| item.name)
        .collect();
    assert_eq!(names, vec!["Batteries", "Motors", "Solder"]);
}

#[test]
fn test_update_and_delete_inventory_item() {
    let mut persistence = create_test_persistence();
    let item = persistence
        .insert_inventory_item(&InventoryDraft::new("Motors", None, "4").unwrap())
        .unwrap();

    let draft = InventoryDraft::new("Motors", Some("2207"), "-3").unwrap();
    assert_eq!(persistence.update_inventory_item(&item.id, &draft).unwrap(), 1);

    let fetched = persistence.get_inventory_item(&item.id).unwrap().unwrap();
    assert_eq!(fetched.quantity, 0);
    assert_eq!(fetched.description.as_deref(), Some("2207"));

    assert_eq!(persistence.delete_inventory_item(&item.id).unwrap(), 1);
    assert_eq!(persistence.delete_inventory_item(&item.id).unwrap(), 0);
    assert!(persistence.get_inventory_item(&item.id).unwrap().is_none());
}

#[test]
fn test_update_missing_inventory_item_changes_nothing() {
    let mut persistence = create_test_persistence();
    let draft = InventoryDraft::new("Motors", None, "4").unwrap();
    let updated = persistence
        .update_inventory_item(&ItemId::new("missing"), &draft)
        .unwrap();
    assert_eq!(updated, 0);
    assert!(persistence.list_inventory().unwrap().is_empty());
}
