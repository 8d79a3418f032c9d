// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Inventory queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use kestrel_domain::{InventoryItem, ItemId};
use tracing::debug;

use crate::data_models::InventoryRow;
use crate::diesel_schema::inventory_items;
use crate::error::PersistenceError;

/// Lists every inventory item ordered by name.
///
/// # Errors
///
/// Returns an error if the database query fails or a row cannot be decoded.
pub fn list_inventory(conn: &mut SqliteConnection) -> Result<Vec<InventoryItem>, PersistenceError> {
    debug!("Listing inventory");

    let rows: Vec<InventoryRow> = inventory_items::table
        .order((inventory_items::name.asc(), inventory_items::id.asc()))
        .select(InventoryRow::as_select())
        .load(conn)?;

    rows.into_iter().map(InventoryItem::try_from).collect()
}

/// Retrieves an inventory item by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the item is not found.
pub fn get_inventory_item(
    conn: &mut SqliteConnection,
    id: &ItemId,
) -> Result<Option<InventoryItem>, PersistenceError> {
    let result: Result<InventoryRow, diesel::result::Error> = inventory_items::table
        .filter(inventory_items::id.eq(id.as_str()))
        .select(InventoryRow::as_select())
        .first(conn);

    match result {
        Ok(row) => InventoryItem::try_from(row).map(Some),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
