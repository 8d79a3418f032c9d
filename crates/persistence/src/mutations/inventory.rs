// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Inventory mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use kestrel_domain::{InventoryDraft, InventoryItem, ItemId};
use tracing::info;

use crate::data_models::{new_id, now_timestamp};
use crate::diesel_schema::inventory_items;
use crate::error::PersistenceError;

/// Inserts an inventory item.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_inventory_item(
    conn: &mut SqliteConnection,
    draft: &InventoryDraft,
) -> Result<InventoryItem, PersistenceError> {
    let id: String = new_id();
    let (_, created_at) = now_timestamp()?;

    diesel::insert_into(inventory_items::table)
        .values((
            inventory_items::id.eq(&id),
            inventory_items::name.eq(draft.name()),
            inventory_items::description.eq(draft.description()),
            inventory_items::quantity.eq(i64::from(draft.quantity())),
            inventory_items::created_at.eq(&created_at),
        ))
        .execute(conn)?;

    info!(item_id = %id, name = draft.name(), quantity = draft.quantity(), "Created inventory item");

    Ok(InventoryItem {
        id: ItemId::new(id),
        name: draft.name().to_string(),
        description: draft.description().map(str::to_string),
        quantity: draft.quantity(),
    })
}

/// Replaces an inventory item's fields.
///
/// # Returns
///
/// The number of rows updated (0 if the item does not exist).
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_inventory_item(
    conn: &mut SqliteConnection,
    id: &ItemId,
    draft: &InventoryDraft,
) -> Result<usize, PersistenceError> {
    let updated: usize = diesel::update(inventory_items::table)
        .filter(inventory_items::id.eq(id.as_str()))
        .set((
            inventory_items::name.eq(draft.name()),
            inventory_items::description.eq(draft.description()),
            inventory_items::quantity.eq(i64::from(draft.quantity())),
        ))
        .execute(conn)?;

    info!(item_id = %id, updated, "Updated inventory item");
    Ok(updated)
}

/// Deletes an inventory item.
///
/// # Returns
///
/// The number of rows deleted.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_inventory_item(
    conn: &mut SqliteConnection,
    id: &ItemId,
) -> Result<usize, PersistenceError> {
    let deleted: usize = diesel::delete(inventory_items::table)
        .filter(inventory_items::id.eq(id.as_str()))
        .execute(conn)?;

    info!(item_id = %id, deleted, "Deleted inventory item");
    Ok(deleted)
}
