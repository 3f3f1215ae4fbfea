use crate::models::{CreateVenue, Sortable, Venue};
use crate::services::catalogue::{create_with_slug, Keys};
use crate::services::naturalize::SortConfig;
use crate::Database;
use anyhow::{bail, Result};
use rusqlite::OptionalExtension;

const TABLE: &str = "venues";
const COLUMNS: &str = "id, slug, name, name_sort, city, created_at, updated_at";

pub fn create_venue(db: &Database, keys: Keys<'_>, input: &CreateVenue) -> Result<i64> {
    if input.name.trim().is_empty() {
        bail!("Venue name cannot be empty");
    }
    let name_sort = input.sort_key(keys.sorting);

    let mut conn = db.get()?;
    let (id, slug) = create_with_slug(
        &mut conn,
        TABLE,
        "INSERT INTO venues (name, name_sort, city) VALUES (?, ?, ?)",
        (input.name.trim(), &name_sort, &input.city),
        keys.slugs,
    )?;

    tracing::info!("Created venue '{}' ({})", input.name.trim(), slug);
    Ok(id)
}

pub fn get_venue_by_id(db: &Database, id: i64) -> Result<Option<Venue>> {
    let conn = db.get()?;
    let venue = conn
        .query_row(
            &format!("SELECT {} FROM venues WHERE id = ?", COLUMNS),
            [id],
            row_to_venue,
        )
        .optional()?;
    Ok(venue)
}

pub fn get_venue_by_slug(db: &Database, slug: &str) -> Result<Option<Venue>> {
    let conn = db.get()?;
    let venue = conn
        .query_row(
            &format!("SELECT {} FROM venues WHERE slug = ?", COLUMNS),
            [slug],
            row_to_venue,
        )
        .optional()?;
    Ok(venue)
}

pub fn list_venues(db: &Database, limit: usize, offset: usize) -> Result<Vec<Venue>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM venues ORDER BY name_sort, id LIMIT ? OFFSET ?",
        COLUMNS
    ))?;
    let venues = stmt
        .query_map((limit as i64, offset as i64), row_to_venue)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(venues)
}

pub fn rename_venue(db: &Database, sorting: &SortConfig, id: i64, name: &str) -> Result<()> {
    let current = get_venue_by_id(db, id)?.ok_or_else(|| anyhow::anyhow!("Venue not found"))?;

    let updated = CreateVenue {
        name: name.to_string(),
        city: current.city,
    };
    if updated.name.trim().is_empty() {
        bail!("Venue name cannot be empty");
    }
    let name_sort = updated.sort_key(sorting);

    let conn = db.get()?;
    conn.execute(
        "UPDATE venues SET name = ?, name_sort = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
        (updated.name.trim(), &name_sort, id),
    )?;

    tracing::info!("Renamed venue {} ({})", id, current.slug);
    Ok(())
}

/// Events held there keep existing, without a venue.
pub fn delete_venue(db: &Database, id: i64) -> Result<bool> {
    let conn = db.get()?;
    let deleted = conn.execute("DELETE FROM venues WHERE id = ?", [id])?;
    if deleted > 0 {
        tracing::info!("Deleted venue {}", id);
    }
    Ok(deleted > 0)
}

pub(crate) fn row_to_venue(row: &rusqlite::Row) -> rusqlite::Result<Venue> {
    Ok(Venue {
        id: row.get(0)?,
        slug: row.get(1)?,
        name: row.get(2)?,
        name_sort: row.get(3)?,
        city: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}
