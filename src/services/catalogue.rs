//! Creating records that carry a sort key and an id-derived slug.
//!
//! A slug can only be derived once the row has an id, so creation is two
//! steps run inside one transaction: [`allocate`] inserts the row with an
//! empty slug, [`finalize`] fills the slug in. Nothing outside the
//! transaction ever sees a row without its slug.

use crate::services::naturalize::SortConfig;
use crate::services::slug::{generate_slug, SlugConfig};
use crate::Config;
use anyhow::{bail, Result};
use rusqlite::{Connection, Params, Transaction};

/// The settings needed to derive sort keys and slugs.
#[derive(Debug, Clone, Copy)]
pub struct Keys<'a> {
    pub sorting: &'a SortConfig,
    pub slugs: &'a SlugConfig,
}

impl<'a> From<&'a Config> for Keys<'a> {
    fn from(config: &'a Config) -> Self {
        Self {
            sorting: &config.sorting,
            slugs: &config.slugs,
        }
    }
}

/// Run `insert_sql` and assign the new row's slug. Returns its id and slug.
///
/// `table` must be a table name known to this crate; it is interpolated
/// into SQL.
pub fn create_with_slug<P: Params>(
    conn: &mut Connection,
    table: &str,
    insert_sql: &str,
    params: P,
    slugs: &SlugConfig,
) -> Result<(i64, String)> {
    let tx = conn.transaction()?;
    let id = allocate(&tx, insert_sql, params)?;
    let slug = finalize(&tx, table, id, slugs)?;
    tx.commit()?;
    Ok((id, slug))
}

pub fn allocate<P: Params>(tx: &Transaction<'_>, insert_sql: &str, params: P) -> Result<i64> {
    tx.execute(insert_sql, params)?;
    Ok(tx.last_insert_rowid())
}

/// Store the slug for row `id`. A row's slug is only ever set once.
pub fn finalize(tx: &Transaction<'_>, table: &str, id: i64, slugs: &SlugConfig) -> Result<String> {
    let slug = generate_slug(id, slugs)?;
    let updated = tx.execute(
        &format!("UPDATE {} SET slug = ? WHERE id = ? AND slug = ''", table),
        (&slug, id),
    )?;
    if updated == 0 {
        bail!("Row {} in {} is missing or already has a slug", id, table);
    }
    Ok(slug)
}
