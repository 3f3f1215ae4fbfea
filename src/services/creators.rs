use crate::models::{CreateCreator, Creator, CreatorKind, CreatorWithCount, Sortable, UpdateCreator};
use crate::services::catalogue::{create_with_slug, Keys};
use crate::services::chart::{chartify, Charted};
use crate::services::naturalize::SortConfig;
use crate::Database;
use anyhow::{bail, Result};
use rusqlite::OptionalExtension;

const TABLE: &str = "creators";
const COLUMNS: &str = "id, slug, name, name_sort, kind, created_at, updated_at";

pub fn create_creator(db: &Database, keys: Keys<'_>, input: &CreateCreator) -> Result<i64> {
    if input.name.trim().is_empty() {
        bail!("Creator name cannot be empty");
    }
    let name_sort = input.sort_key(keys.sorting);

    let mut conn = db.get()?;
    let (id, slug) = create_with_slug(
        &mut conn,
        TABLE,
        "INSERT INTO creators (name, name_sort, kind) VALUES (?, ?, ?)",
        (input.name.trim(), &name_sort, input.kind.to_string()),
        keys.slugs,
    )?;

    tracing::info!("Created creator '{}' ({})", input.name.trim(), slug);
    Ok(id)
}

pub fn get_creator_by_id(db: &Database, id: i64) -> Result<Option<Creator>> {
    let conn = db.get()?;
    let creator = conn
        .query_row(
            &format!("SELECT {} FROM creators WHERE id = ?", COLUMNS),
            [id],
            row_to_creator,
        )
        .optional()?;
    Ok(creator)
}

pub fn get_creator_by_slug(db: &Database, slug: &str) -> Result<Option<Creator>> {
    let conn = db.get()?;
    let creator = conn
        .query_row(
            &format!("SELECT {} FROM creators WHERE slug = ?", COLUMNS),
            [slug],
            row_to_creator,
        )
        .optional()?;
    Ok(creator)
}

pub fn list_creators(
    db: &Database,
    kind: Option<CreatorKind>,
    limit: usize,
    offset: usize,
) -> Result<Vec<Creator>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM creators WHERE (?1 IS NULL OR kind = ?1) ORDER BY name_sort, id LIMIT ?2 OFFSET ?3",
        COLUMNS
    ))?;
    let creators = stmt
        .query_map(
            (kind.map(|k| k.to_string()), limit as i64, offset as i64),
            row_to_creator,
        )?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(creators)
}

/// Change a creator's name or kind. The sort key follows; the slug never
/// changes.
pub fn update_creator(
    db: &Database,
    sorting: &SortConfig,
    id: i64,
    input: UpdateCreator,
) -> Result<()> {
    let current =
        get_creator_by_id(db, id)?.ok_or_else(|| anyhow::anyhow!("Creator not found"))?;

    let updated = CreateCreator {
        name: input.name.unwrap_or(current.name),
        kind: input.kind.unwrap_or(current.kind),
    };
    if updated.name.trim().is_empty() {
        bail!("Creator name cannot be empty");
    }
    let name_sort = updated.sort_key(sorting);

    let conn = db.get()?;
    conn.execute(
        "UPDATE creators SET name = ?, name_sort = ?, kind = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
        (updated.name.trim(), &name_sort, updated.kind.to_string(), id),
    )?;

    tracing::info!("Updated creator {} ({})", id, current.slug);
    Ok(())
}

pub fn delete_creator(db: &Database, id: i64) -> Result<bool> {
    let conn = db.get()?;
    let deleted = conn.execute("DELETE FROM creators WHERE id = ?", [id])?;
    if deleted > 0 {
        tracing::info!("Deleted creator {}", id);
    }
    Ok(deleted > 0)
}

/// Creators ranked by how many publications they are credited on.
pub fn creator_chart(db: &Database, limit: usize) -> Result<Vec<Charted<CreatorWithCount>>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(
        r#"
        SELECT c.id, c.slug, c.name, c.name_sort, c.kind, c.created_at, c.updated_at,
               COUNT(DISTINCT pr.publication_id) AS count
        FROM creators c
        LEFT JOIN publication_roles pr ON pr.creator_id = c.id
        GROUP BY c.id
        ORDER BY count DESC, c.name_sort
        LIMIT ?
        "#,
    )?;
    let creators = stmt
        .query_map([limit as i64], |row| {
            Ok(CreatorWithCount {
                creator: row_to_creator(row)?,
                count: row.get(7)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(chartify(creators, |c| c.count, Some(0), true))
}

pub(crate) fn row_to_creator(row: &rusqlite::Row) -> rusqlite::Result<Creator> {
    Ok(Creator {
        id: row.get(0)?,
        slug: row.get(1)?,
        name: row.get(2)?,
        name_sort: row.get(3)?,
        kind: row
            .get::<_, String>(4)?
            .parse()
            .unwrap_or(CreatorKind::Individual),
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}
