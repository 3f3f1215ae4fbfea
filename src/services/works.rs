use crate::models::{CreateWork, Credit, Sortable, Work, WorkKind, WorkRole};
use crate::services::catalogue::{create_with_slug, Keys};
use crate::services::credits::{self, WORK_ROLES};
use crate::services::naturalize::SortConfig;
use crate::Database;
use anyhow::{bail, Result};
use rusqlite::OptionalExtension;

const TABLE: &str = "works";
const COLUMNS: &str = "id, slug, title, title_sort, kind, year, created_at, updated_at";

pub fn create_work(db: &Database, keys: Keys<'_>, input: &CreateWork) -> Result<i64> {
    if input.title.trim().is_empty() {
        bail!("Work title cannot be empty");
    }
    let title_sort = input.sort_key(keys.sorting);

    let mut conn = db.get()?;
    let (id, slug) = create_with_slug(
        &mut conn,
        TABLE,
        "INSERT INTO works (title, title_sort, kind, year) VALUES (?, ?, ?, ?)",
        (
            input.title.trim(),
            &title_sort,
            input.kind.to_string(),
            input.year,
        ),
        keys.slugs,
    )?;

    tracing::info!("Created {} '{}' ({})", input.kind, input.title.trim(), slug);
    Ok(id)
}

pub fn get_work_by_id(db: &Database, id: i64) -> Result<Option<Work>> {
    let conn = db.get()?;
    let work = conn
        .query_row(
            &format!("SELECT {} FROM works WHERE id = ?", COLUMNS),
            [id],
            row_to_work,
        )
        .optional()?;
    Ok(work)
}

pub fn get_work_by_slug(db: &Database, slug: &str) -> Result<Option<Work>> {
    let conn = db.get()?;
    let work = conn
        .query_row(
            &format!("SELECT {} FROM works WHERE slug = ?", COLUMNS),
            [slug],
            row_to_work,
        )
        .optional()?;
    Ok(work)
}

pub fn list_works(
    db: &Database,
    kind: Option<WorkKind>,
    limit: usize,
    offset: usize,
) -> Result<Vec<Work>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM works WHERE (?1 IS NULL OR kind = ?1) ORDER BY title_sort, id LIMIT ?2 OFFSET ?3",
        COLUMNS
    ))?;
    let works = stmt
        .query_map(
            (kind.map(|k| k.to_string()), limit as i64, offset as i64),
            row_to_work,
        )?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(works)
}

pub fn rename_work(db: &Database, sorting: &SortConfig, id: i64, title: &str) -> Result<()> {
    let current = get_work_by_id(db, id)?.ok_or_else(|| anyhow::anyhow!("Work not found"))?;

    let updated = CreateWork {
        title: title.to_string(),
        kind: current.kind,
        year: current.year,
    };
    if updated.title.trim().is_empty() {
        bail!("Work title cannot be empty");
    }
    let title_sort = updated.sort_key(sorting);

    let conn = db.get()?;
    conn.execute(
        "UPDATE works SET title = ?, title_sort = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
        (updated.title.trim(), &title_sort, id),
    )?;

    tracing::info!("Renamed {} {} ({})", current.kind, id, current.slug);
    Ok(())
}

pub fn delete_work(db: &Database, id: i64) -> Result<bool> {
    let conn = db.get()?;
    let deleted = conn.execute("DELETE FROM works WHERE id = ?", [id])?;
    Ok(deleted > 0)
}

/// Credit a creator on a work, e.g. as "Director".
pub fn add_work_role(
    db: &Database,
    work_id: i64,
    creator_id: i64,
    role_name: &str,
    role_order: Option<i32>,
) -> Result<WorkRole> {
    let (id, role_order) = credits::add(db, WORK_ROLES, work_id, creator_id, role_name, role_order)?;

    Ok(WorkRole {
        id,
        creator_id,
        work_id,
        role_name: role_name.to_string(),
        role_order,
    })
}

pub fn remove_work_role(db: &Database, work_id: i64, creator_id: i64) -> Result<bool> {
    credits::remove(db, WORK_ROLES, work_id, creator_id)
}

pub fn list_work_credits(db: &Database, work_id: i64) -> Result<Vec<Credit>> {
    credits::list(db, WORK_ROLES, work_id)
}

pub(crate) fn row_to_work(row: &rusqlite::Row) -> rusqlite::Result<Work> {
    Ok(Work {
        id: row.get(0)?,
        slug: row.get(1)?,
        title: row.get(2)?,
        title_sort: row.get(3)?,
        kind: row.get::<_, String>(4)?.parse().unwrap_or(WorkKind::Movie),
        year: row.get(5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}
