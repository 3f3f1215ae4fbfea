use crate::models::{
    CreateEvent, Credit, Event, EventDetail, EventKind, EventRole, Sortable, Work,
};
use crate::services::catalogue::{create_with_slug, Keys};
use crate::services::credits::{self, EVENT_ROLES};
use crate::services::naturalize::SortConfig;
use crate::services::venues::get_venue_by_id;
use crate::services::works::{get_work_by_id, row_to_work};
use crate::Database;
use anyhow::{bail, Result};
use rusqlite::OptionalExtension;

const TABLE: &str = "events";
const COLUMNS: &str = "id, slug, title, title_sort, kind, date, venue_id, created_at, updated_at";

pub fn create_event(db: &Database, keys: Keys<'_>, input: &CreateEvent) -> Result<i64> {
    if input.title.trim().is_empty() {
        bail!("Event title cannot be empty");
    }
    if let Some(venue_id) = input.venue_id {
        if get_venue_by_id(db, venue_id)?.is_none() {
            bail!("Venue {} not found", venue_id);
        }
    }
    let title_sort = input.sort_key(keys.sorting);

    let mut conn = db.get()?;
    let (id, slug) = create_with_slug(
        &mut conn,
        TABLE,
        "INSERT INTO events (title, title_sort, kind, date, venue_id) VALUES (?, ?, ?, ?, ?)",
        (
            input.title.trim(),
            &title_sort,
            input.kind.to_string(),
            input.date,
            input.venue_id,
        ),
        keys.slugs,
    )?;

    tracing::info!("Created {} event '{}' ({})", input.kind, input.title.trim(), slug);
    Ok(id)
}

pub fn get_event_by_id(db: &Database, id: i64) -> Result<Option<Event>> {
    let conn = db.get()?;
    let event = conn
        .query_row(
            &format!("SELECT {} FROM events WHERE id = ?", COLUMNS),
            [id],
            row_to_event,
        )
        .optional()?;
    Ok(event)
}

pub fn get_event_by_slug(db: &Database, slug: &str) -> Result<Option<EventDetail>> {
    let conn = db.get()?;
    let event = conn
        .query_row(
            &format!("SELECT {} FROM events WHERE slug = ?", COLUMNS),
            [slug],
            row_to_event,
        )
        .optional()?;

    let Some(event) = event else {
        return Ok(None);
    };
    let venue = match event.venue_id {
        Some(venue_id) => get_venue_by_id(db, venue_id)?,
        None => None,
    };
    let credits = list_event_credits(db, event.id)?;
    let works = list_event_works(db, event.id)?;
    Ok(Some(EventDetail {
        event,
        venue,
        credits,
        works,
    }))
}

/// Most recent first, unlike other lists which go by sort key.
pub fn list_events(
    db: &Database,
    kind: Option<EventKind>,
    limit: usize,
    offset: usize,
) -> Result<Vec<Event>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM events WHERE (?1 IS NULL OR kind = ?1) ORDER BY date DESC, title_sort LIMIT ?2 OFFSET ?3",
        COLUMNS
    ))?;
    let events = stmt
        .query_map(
            (kind.map(|k| k.to_string()), limit as i64, offset as i64),
            row_to_event,
        )?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(events)
}

/// Everything that happened at a venue, in sort key order.
pub fn list_venue_events(db: &Database, venue_id: i64) -> Result<Vec<Event>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM events WHERE venue_id = ? ORDER BY title_sort, id",
        COLUMNS
    ))?;
    let events = stmt
        .query_map([venue_id], row_to_event)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(events)
}

pub fn rename_event(db: &Database, sorting: &SortConfig, id: i64, title: &str) -> Result<()> {
    let current = get_event_by_id(db, id)?.ok_or_else(|| anyhow::anyhow!("Event not found"))?;

    let updated = CreateEvent {
        title: title.to_string(),
        kind: current.kind,
        date: current.date,
        venue_id: current.venue_id,
    };
    if updated.title.trim().is_empty() {
        bail!("Event title cannot be empty");
    }
    let title_sort = updated.sort_key(sorting);

    let conn = db.get()?;
    conn.execute(
        "UPDATE events SET title = ?, title_sort = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
        (updated.title.trim(), &title_sort, id),
    )?;

    tracing::info!("Renamed event {} ({})", id, current.slug);
    Ok(())
}

pub fn delete_event(db: &Database, id: i64) -> Result<bool> {
    let conn = db.get()?;
    let deleted = conn.execute("DELETE FROM events WHERE id = ?", [id])?;
    if deleted > 0 {
        tracing::info!("Deleted event {}", id);
    }
    Ok(deleted > 0)
}

/// Credit a creator on an event, e.g. as "Headliner".
pub fn add_event_role(
    db: &Database,
    event_id: i64,
    creator_id: i64,
    role_name: &str,
    role_order: Option<i32>,
) -> Result<EventRole> {
    let (id, role_order) = credits::add(db, EVENT_ROLES, event_id, creator_id, role_name, role_order)?;

    Ok(EventRole {
        id,
        creator_id,
        event_id,
        role_name: role_name.to_string(),
        role_order,
    })
}

pub fn remove_event_role(db: &Database, event_id: i64, creator_id: i64) -> Result<bool> {
    credits::remove(db, EVENT_ROLES, event_id, creator_id)
}

pub fn list_event_credits(db: &Database, event_id: i64) -> Result<Vec<Credit>> {
    credits::list(db, EVENT_ROLES, event_id)
}

/// Record that `work_id` was seen at `event_id`, after any works already
/// there. Linking the same pair twice does nothing.
pub fn add_work_to_event(db: &Database, event_id: i64, work_id: i64) -> Result<()> {
    if get_event_by_id(db, event_id)?.is_none() {
        bail!("Event {} not found", event_id);
    }
    if get_work_by_id(db, work_id)?.is_none() {
        bail!("Work {} not found", work_id);
    }

    let conn = db.get()?;
    conn.execute(
        r#"
        INSERT OR IGNORE INTO event_works (event_id, work_id, position)
        SELECT ?1, ?2, COALESCE(MAX(position), 0) + 1 FROM event_works WHERE event_id = ?1
        "#,
        (event_id, work_id),
    )?;
    Ok(())
}

pub fn remove_work_from_event(db: &Database, event_id: i64, work_id: i64) -> Result<bool> {
    let conn = db.get()?;
    let deleted = conn.execute(
        "DELETE FROM event_works WHERE event_id = ? AND work_id = ?",
        (event_id, work_id),
    )?;
    Ok(deleted > 0)
}

/// The works seen at an event, in the order they were added.
pub fn list_event_works(db: &Database, event_id: i64) -> Result<Vec<Work>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(
        r#"
        SELECT w.id, w.slug, w.title, w.title_sort, w.kind, w.year, w.created_at, w.updated_at
        FROM event_works ew
        JOIN works w ON ew.work_id = w.id
        WHERE ew.event_id = ?
        ORDER BY ew.position, w.title_sort
        "#,
    )?;
    let works = stmt
        .query_map([event_id], row_to_work)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(works)
}

/// Every occasion a work was seen, most recent first.
pub fn list_work_events(db: &Database, work_id: i64) -> Result<Vec<Event>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(
        r#"
        SELECT e.id, e.slug, e.title, e.title_sort, e.kind, e.date, e.venue_id,
               e.created_at, e.updated_at
        FROM event_works ew
        JOIN events e ON ew.event_id = e.id
        WHERE ew.work_id = ?
        ORDER BY e.date DESC, e.title_sort
        "#,
    )?;
    let events = stmt
        .query_map([work_id], row_to_event)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(events)
}

fn row_to_event(row: &rusqlite::Row) -> rusqlite::Result<Event> {
    Ok(Event {
        id: row.get(0)?,
        slug: row.get(1)?,
        title: row.get(2)?,
        title_sort: row.get(3)?,
        kind: row.get::<_, String>(4)?.parse().unwrap_or(EventKind::Gig),
        date: row.get(5)?,
        venue_id: row.get(6)?,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
    })
}
