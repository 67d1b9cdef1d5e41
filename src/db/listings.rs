use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, OptionalExtension, Row};
use tracing::warn;

use crate::db::connection::Database;
use crate::domain::listing::Listing;
use crate::domain::query::FilterCriteria;
use crate::errors::ServerError;

const LISTING_COLUMNS: &str = r#"
    id, owner_handle, name, description, images,
    price, category, location, condition, in_stock, created_at
"#;

fn row_to_listing(row: &Row) -> rusqlite::Result<Listing> {
    let raw_images: String = row.get(4)?;
    let id: String = row.get(0)?;

    // One row with broken images JSON shouldn't take the grid down.
    let images = serde_json::from_str::<Vec<String>>(&raw_images).unwrap_or_else(|e| {
        warn!(listing_id = %id, "ignoring malformed images column: {e}");
        Vec::new()
    });

    Ok(Listing {
        id,
        owner_handle: row.get(1)?,
        name: row.get(2)?,
        description: row.get(3)?,
        images,
        // SQLite columns are dynamically typed; a price or timestamp of
        // the wrong type degrades to "missing" for that one record
        // instead of failing the whole query.
        price: row.get(5).unwrap_or(None),
        category: row.get(6)?,
        location: row.get(7)?,
        condition: row.get(8)?,
        in_stock: row.get(9)?,
        created_at: row.get(10).unwrap_or_default(),
    })
}

/// Insert a listing under its pre-generated id.
///
/// A duplicate id means the owner is re-using a listing name; the create is
/// rejected so a stale form can never silently overwrite a live listing.
pub fn insert_listing(db: &Database, listing: &Listing) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        let images_json = serde_json::to_string(&listing.images)
            .map_err(|e| ServerError::DbError(format!("encode images failed: {e}")))?;

        let inserted = conn
            .execute(
                r#"
                insert into listings (
                    id, owner_handle, name, description, images,
                    price, category, location, condition, in_stock, created_at
                ) values (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                on conflict(id) do nothing
                "#,
                params![
                    listing.id,
                    listing.owner_handle,
                    listing.name,
                    listing.description,
                    images_json,
                    listing.price,
                    listing.category,
                    listing.location,
                    listing.condition,
                    listing.in_stock,
                    listing.created_at,
                ],
            )
            .map_err(|e| ServerError::DbError(format!("insert listing failed: {e}")))?;

        if inserted == 0 {
            return Err(ServerError::Conflict(
                "You already have a listing with that name. Pick a different name.".into(),
            ));
        }
        Ok(())
    })
}

/// Fetch candidate rows for the listings page.
///
/// Stock state and price bounds are pushed into SQL to keep the candidate
/// set small; everything is re-checked by `FilterCriteria::apply`, which
/// stays the source of truth for the final set and order.
pub fn search_listings(
    db: &Database,
    criteria: &FilterCriteria,
) -> Result<Vec<Listing>, ServerError> {
    let mut sql = format!(
        "select {LISTING_COLUMNS} from listings where 1=1"
    );
    let mut args: Vec<Value> = Vec::new();

    if criteria.in_stock_only {
        sql.push_str(" and in_stock = 1");
    }
    if criteria.sold_only {
        sql.push_str(" and in_stock = 0");
    }
    if let Some(min) = criteria.min_price {
        sql.push_str(" and price >= ?");
        args.push(Value::Real(min));
    }
    if let Some(max) = criteria.max_price {
        sql.push_str(" and price <= ?");
        args.push(Value::Real(max));
    }
    // Coarse newest-first default; the composer re-sorts per the criteria.
    sql.push_str(" order by created_at desc");

    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map(params_from_iter(args.iter()), row_to_listing)
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row.map_err(|e| ServerError::DbError(e.to_string()))?);
        }
        Ok(out)
    })
}

/// One listing by its detail-page address `(owner_handle, id)`.
pub fn get_listing(
    db: &Database,
    owner_handle: &str,
    id: &str,
) -> Result<Option<Listing>, ServerError> {
    db.with_conn(|conn| {
        conn.query_row(
            &format!("select {LISTING_COLUMNS} from listings where owner_handle = ? and id = ?"),
            params![owner_handle, id],
            row_to_listing,
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("select listing failed: {e}")))
    })
}

/// Everything a user is selling, newest first, for their profile page.
pub fn listings_for_user(db: &Database, handle: &str) -> Result<Vec<Listing>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(&format!(
                "select {LISTING_COLUMNS} from listings where owner_handle = ? order by created_at desc"
            ))
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map(params![handle], row_to_listing)
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row.map_err(|e| ServerError::DbError(e.to_string()))?);
        }
        Ok(out)
    })
}
