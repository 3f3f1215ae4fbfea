use crate::models::{
    CreatePublication, CreatePublicationSeries, Credit, Publication, PublicationKind,
    PublicationRole, PublicationSeries, PublicationWithCredits, Sortable,
};
use crate::services::catalogue::{create_with_slug, Keys};
use crate::services::credits::{self, PUBLICATION_ROLES};
use crate::services::naturalize::SortConfig;
use crate::Database;
use anyhow::{bail, Result};
use rusqlite::OptionalExtension;

const SERIES_TABLE: &str = "publication_series";
const SERIES_COLUMNS: &str = "id, slug, title, title_sort, url, created_at, updated_at";
const TABLE: &str = "publications";
const COLUMNS: &str = "id, slug, title, title_sort, kind, series_id, created_at, updated_at";

pub fn create_series(db: &Database, keys: Keys<'_>, input: &CreatePublicationSeries) -> Result<i64> {
    if input.title.trim().is_empty() {
        bail!("Series title cannot be empty");
    }
    let title_sort = input.sort_key(keys.sorting);

    let mut conn = db.get()?;
    let (id, slug) = create_with_slug(
        &mut conn,
        SERIES_TABLE,
        "INSERT INTO publication_series (title, title_sort, url) VALUES (?, ?, ?)",
        (input.title.trim(), &title_sort, &input.url),
        keys.slugs,
    )?;

    tracing::info!("Created series '{}' ({})", input.title.trim(), slug);
    Ok(id)
}

pub fn get_series_by_id(db: &Database, id: i64) -> Result<Option<PublicationSeries>> {
    let conn = db.get()?;
    let series = conn
        .query_row(
            &format!("SELECT {} FROM publication_series WHERE id = ?", SERIES_COLUMNS),
            [id],
            row_to_series,
        )
        .optional()?;
    Ok(series)
}

pub fn get_series_by_slug(db: &Database, slug: &str) -> Result<Option<PublicationSeries>> {
    let conn = db.get()?;
    let series = conn
        .query_row(
            &format!("SELECT {} FROM publication_series WHERE slug = ?", SERIES_COLUMNS),
            [slug],
            row_to_series,
        )
        .optional()?;
    Ok(series)
}

pub fn list_series(db: &Database, limit: usize, offset: usize) -> Result<Vec<PublicationSeries>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM publication_series ORDER BY title_sort, id LIMIT ? OFFSET ?",
        SERIES_COLUMNS
    ))?;
    let series = stmt
        .query_map((limit as i64, offset as i64), row_to_series)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(series)
}

pub fn rename_series(db: &Database, sorting: &SortConfig, id: i64, title: &str) -> Result<()> {
    let current =
        get_series_by_id(db, id)?.ok_or_else(|| anyhow::anyhow!("Series not found"))?;

    let updated = CreatePublicationSeries {
        title: title.to_string(),
        url: current.url,
    };
    if updated.title.trim().is_empty() {
        bail!("Series title cannot be empty");
    }
    let title_sort = updated.sort_key(sorting);

    let conn = db.get()?;
    conn.execute(
        "UPDATE publication_series SET title = ?, title_sort = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
        (updated.title.trim(), &title_sort, id),
    )?;

    tracing::info!("Renamed series {} ({})", id, current.slug);
    Ok(())
}

/// Its publications are kept and no longer belong to a series.
pub fn delete_series(db: &Database, id: i64) -> Result<bool> {
    let conn = db.get()?;
    let deleted = conn.execute("DELETE FROM publication_series WHERE id = ?", [id])?;
    Ok(deleted > 0)
}

pub fn create_publication(db: &Database, keys: Keys<'_>, input: &CreatePublication) -> Result<i64> {
    if input.title.trim().is_empty() {
        bail!("Publication title cannot be empty");
    }
    if let Some(series_id) = input.series_id {
        if get_series_by_id(db, series_id)?.is_none() {
            bail!("Series {} not found", series_id);
        }
    }
    let title_sort = input.sort_key(keys.sorting);

    let mut conn = db.get()?;
    let (id, slug) = create_with_slug(
        &mut conn,
        TABLE,
        "INSERT INTO publications (title, title_sort, kind, series_id) VALUES (?, ?, ?, ?)",
        (
            input.title.trim(),
            &title_sort,
            input.kind.to_string(),
            input.series_id,
        ),
        keys.slugs,
    )?;

    tracing::info!("Created publication '{}' ({})", input.title.trim(), slug);
    Ok(id)
}

pub fn get_publication_by_id(db: &Database, id: i64) -> Result<Option<Publication>> {
    let conn = db.get()?;
    let publication = conn
        .query_row(
            &format!("SELECT {} FROM publications WHERE id = ?", COLUMNS),
            [id],
            row_to_publication,
        )
        .optional()?;
    Ok(publication)
}

pub fn get_publication_by_slug(db: &Database, slug: &str) -> Result<Option<PublicationWithCredits>> {
    let conn = db.get()?;
    let publication = conn
        .query_row(
            &format!("SELECT {} FROM publications WHERE slug = ?", COLUMNS),
            [slug],
            row_to_publication,
        )
        .optional()?;

    let Some(publication) = publication else {
        return Ok(None);
    };

    let series = match publication.series_id {
        Some(series_id) => get_series_by_id(db, series_id)?,
        None => None,
    };
    let credits = list_credits(db, publication.id)?;

    Ok(Some(PublicationWithCredits {
        publication,
        series,
        credits,
    }))
}

pub fn list_publications(
    db: &Database,
    kind: Option<PublicationKind>,
    limit: usize,
    offset: usize,
) -> Result<Vec<Publication>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM publications WHERE (?1 IS NULL OR kind = ?1) ORDER BY title_sort, id LIMIT ?2 OFFSET ?3",
        COLUMNS
    ))?;
    let publications = stmt
        .query_map(
            (kind.map(|k| k.to_string()), limit as i64, offset as i64),
            row_to_publication,
        )?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(publications)
}

pub fn list_series_publications(db: &Database, series_id: i64) -> Result<Vec<Publication>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM publications WHERE series_id = ? ORDER BY title_sort, id",
        COLUMNS
    ))?;
    let publications = stmt
        .query_map([series_id], row_to_publication)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(publications)
}

pub fn rename_publication(db: &Database, sorting: &SortConfig, id: i64, title: &str) -> Result<()> {
    let current =
        get_publication_by_id(db, id)?.ok_or_else(|| anyhow::anyhow!("Publication not found"))?;

    let updated = CreatePublication {
        title: title.to_string(),
        kind: current.kind,
        series_id: current.series_id,
    };
    if updated.title.trim().is_empty() {
        bail!("Publication title cannot be empty");
    }
    let title_sort = updated.sort_key(sorting);

    let conn = db.get()?;
    conn.execute(
        "UPDATE publications SET title = ?, title_sort = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
        (updated.title.trim(), &title_sort, id),
    )?;

    tracing::info!("Renamed publication {} ({})", id, current.slug);
    Ok(())
}

pub fn delete_publication(db: &Database, id: i64) -> Result<bool> {
    let conn = db.get()?;
    let deleted = conn.execute("DELETE FROM publications WHERE id = ?", [id])?;
    Ok(deleted > 0)
}

/// Credit a creator on a publication, e.g. as "Author".
pub fn add_role(
    db: &Database,
    publication_id: i64,
    creator_id: i64,
    role_name: &str,
    role_order: Option<i32>,
) -> Result<PublicationRole> {
    let (id, role_order) = credits::add(
        db,
        PUBLICATION_ROLES,
        publication_id,
        creator_id,
        role_name,
        role_order,
    )?;

    Ok(PublicationRole {
        id,
        creator_id,
        publication_id,
        role_name: role_name.to_string(),
        role_order,
    })
}

pub fn remove_role(db: &Database, publication_id: i64, creator_id: i64) -> Result<bool> {
    credits::remove(db, PUBLICATION_ROLES, publication_id, creator_id)
}

/// The creators of a publication, in credit order.
pub fn list_credits(db: &Database, publication_id: i64) -> Result<Vec<Credit>> {
    credits::list(db, PUBLICATION_ROLES, publication_id)
}

/// Everything a creator is credited on, each publication once.
pub fn list_creator_publications(db: &Database, creator_id: i64) -> Result<Vec<Publication>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(
        r#"
        SELECT DISTINCT p.id, p.slug, p.title, p.title_sort, p.kind, p.series_id,
               p.created_at, p.updated_at
        FROM publications p
        JOIN publication_roles pr ON pr.publication_id = p.id
        WHERE pr.creator_id = ?
        ORDER BY p.title_sort, p.id
        "#,
    )?;
    let publications = stmt
        .query_map([creator_id], row_to_publication)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(publications)
}

fn row_to_series(row: &rusqlite::Row) -> rusqlite::Result<PublicationSeries> {
    Ok(PublicationSeries {
        id: row.get(0)?,
        slug: row.get(1)?,
        title: row.get(2)?,
        title_sort: row.get(3)?,
        url: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

pub(crate) fn row_to_publication(row: &rusqlite::Row) -> rusqlite::Result<Publication> {
    Ok(Publication {
        id: row.get(0)?,
        slug: row.get(1)?,
        title: row.get(2)?,
        title_sort: row.get(3)?,
        kind: row
            .get::<_, String>(4)?
            .parse()
            .unwrap_or(PublicationKind::Book),
        series_id: row.get(5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}
