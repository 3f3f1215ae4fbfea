//! When publications were read.

use crate::models::{CreateReading, DateGranularity, Reading, ReadingWithPublication};
use crate::services::publications::{get_publication_by_id, row_to_publication};
use crate::Database;
use anyhow::{bail, Result};
use chrono::NaiveDate;
use rusqlite::OptionalExtension;

const COLUMNS: &str = "id, publication_id, start_date, start_granularity, end_date, \
                       end_granularity, is_finished, created_at, updated_at";

fn check_dates(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<()> {
    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            bail!("A reading's end date ({}) can't be before its start date ({})", end, start);
        }
    }
    Ok(())
}

pub fn create_reading(db: &Database, input: &CreateReading) -> Result<i64> {
    check_dates(input.start_date, input.end_date)?;
    let publication = get_publication_by_id(db, input.publication_id)?
        .ok_or_else(|| anyhow::anyhow!("Publication {} not found", input.publication_id))?;

    let conn = db.get()?;
    conn.execute(
        r#"
        INSERT INTO readings (publication_id, start_date, start_granularity, end_date,
                              end_granularity, is_finished)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
        (
            input.publication_id,
            input.start_date,
            input.start_granularity.code(),
            input.end_date,
            input.end_granularity.code(),
            input.is_finished,
        ),
    )?;
    let id = conn.last_insert_rowid();

    tracing::info!("Added reading {} of '{}'", id, publication.title);
    Ok(id)
}

pub fn get_reading_by_id(db: &Database, id: i64) -> Result<Option<Reading>> {
    let conn = db.get()?;
    let reading = conn
        .query_row(
            &format!("SELECT {} FROM readings WHERE id = ?", COLUMNS),
            [id],
            row_to_reading,
        )
        .optional()?;
    Ok(reading)
}

/// Readings of one publication, oldest end date first and unfinished ones
/// last.
pub fn list_publication_readings(db: &Database, publication_id: i64) -> Result<Vec<Reading>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM readings WHERE publication_id = ? \
         ORDER BY end_date IS NULL, end_date, start_date, id",
        COLUMNS
    ))?;
    let readings = stmt
        .query_map([publication_id], row_to_reading)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(readings)
}

/// Every reading with its publication, most recently ended first. Readings
/// still in progress come before all of them.
pub fn list_readings(
    db: &Database,
    limit: usize,
    offset: usize,
) -> Result<Vec<ReadingWithPublication>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(
        r#"
        SELECT p.id, p.slug, p.title, p.title_sort, p.kind, p.series_id,
               p.created_at, p.updated_at,
               r.id, r.publication_id, r.start_date, r.start_granularity, r.end_date,
               r.end_granularity, r.is_finished, r.created_at, r.updated_at
        FROM readings r
        JOIN publications p ON r.publication_id = p.id
        ORDER BY r.end_date IS NULL DESC, r.end_date DESC, r.start_date DESC, r.id DESC
        LIMIT ? OFFSET ?
        "#,
    )?;
    let readings = stmt
        .query_map((limit as i64, offset as i64), |row| {
            Ok(ReadingWithPublication {
                publication: row_to_publication(row)?,
                reading: reading_from(row, 8)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(readings)
}

/// Readings that have started but not ended, earliest start first.
pub fn list_in_progress(db: &Database) -> Result<Vec<Reading>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM readings WHERE start_date IS NOT NULL AND end_date IS NULL \
         ORDER BY start_date, id",
        COLUMNS
    ))?;
    let readings = stmt
        .query_map([], row_to_reading)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(readings)
}

/// Set the end of a reading and whether the publication was finished.
pub fn end_reading(
    db: &Database,
    id: i64,
    end_date: NaiveDate,
    end_granularity: DateGranularity,
    is_finished: bool,
) -> Result<()> {
    let current = get_reading_by_id(db, id)?.ok_or_else(|| anyhow::anyhow!("Reading not found"))?;
    check_dates(current.start_date, Some(end_date))?;

    let conn = db.get()?;
    conn.execute(
        r#"
        UPDATE readings
        SET end_date = ?, end_granularity = ?, is_finished = ?, updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
        (end_date, end_granularity.code(), is_finished, id),
    )?;

    tracing::info!("Ended reading {}", id);
    Ok(())
}

pub fn delete_reading(db: &Database, id: i64) -> Result<bool> {
    let conn = db.get()?;
    let deleted = conn.execute("DELETE FROM readings WHERE id = ?", [id])?;
    Ok(deleted > 0)
}

fn row_to_reading(row: &rusqlite::Row) -> rusqlite::Result<Reading> {
    reading_from(row, 0)
}

fn reading_from(row: &rusqlite::Row, start: usize) -> rusqlite::Result<Reading> {
    let granularity = |code: i32| DateGranularity::from_code(code).unwrap_or_default();
    Ok(Reading {
        id: row.get(start)?,
        publication_id: row.get(start + 1)?,
        start_date: row.get(start + 2)?,
        start_granularity: granularity(row.get(start + 3)?),
        end_date: row.get(start + 4)?,
        end_granularity: granularity(row.get(start + 5)?),
        is_finished: row.get(start + 6)?,
        created_at: row.get(start + 7)?,
        updated_at: row.get(start + 8)?,
    })
}
